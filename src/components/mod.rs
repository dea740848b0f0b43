pub mod theme_menu;

use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::config::UiConfig;
use theme_menu::ThemeMenu;

/// Render [`ThemeMenu`] into the page's placeholder, if it has one.
pub fn mount_theme_menu(document: &Document, config: &UiConfig) {
    let placeholder = match document.query_selector(&config.menu_mount_selector) {
        Ok(Some(element)) => element,
        Ok(None) => {
            debug!("No theme menu placeholder on this page");
            return;
        }
        Err(e) => {
            warn!("Invalid theme menu selector {}: {:?}", config.menu_mount_selector, e);
            return;
        }
    };

    match placeholder.dyn_into::<HtmlElement>() {
        Ok(parent) => leptos::mount::mount_to(parent, ThemeMenu).forget(),
        Err(_) => warn!("Theme menu placeholder is not an HTML element"),
    }
}
