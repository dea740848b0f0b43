//! `web-sys` bindings and the page-ready entry point.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, Storage, Window};

use crate::components::mount_theme_menu;
use crate::config::{UiConfig, CONFIG_META_NAME, OPTION_ATTRIBUTE};
use crate::error::{StoreError, UiError};
use crate::events::Activation;
use crate::logout::{Confirm, LogoutGuard};
use crate::markers::MarkerTarget;
use crate::store::PreferenceStore;
use crate::theme::{ThemeController, ThemeOption};

type PageThemeController = ThemeController<LocalStorage, DocumentRoot>;

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn dom_error(value: JsValue) -> UiError {
    UiError::Dom(describe(&value))
}

/// `window.localStorage`. Browsers may refuse storage entirely (privacy
/// modes, sandboxed frames); every call then fails with `Unavailable`.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn open(window: &Window) -> Self {
        let storage = window.local_storage().ok().flatten();
        if storage.is_none() {
            warn!("localStorage is unavailable; theme choices will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage
            .get_item(key)
            .map_err(|e| StoreError::Backend(describe(&e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StoreError::Backend(describe(&e)))
    }
}

/// `document.documentElement`.
pub struct DocumentRoot {
    element: Element,
}

impl DocumentRoot {
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

impl MarkerTarget for DocumentRoot {
    fn add_class(&mut self, class: &str) {
        if let Err(e) = self.element.class_list().add_1(class) {
            warn!("Failed to add root class {}: {}", class, describe(&e));
        }
    }

    fn remove_class(&mut self, class: &str) {
        let _ = self.element.class_list().remove_1(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.element.class_list().contains(class)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.element.get_attribute(name)
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        if let Err(e) = self.element.set_attribute(name, value) {
            warn!("Failed to set root attribute {}: {}", name, describe(&e));
        }
    }

    fn remove_attribute(&mut self, name: &str) {
        let _ = self.element.remove_attribute(name);
    }
}

/// `window.confirm(message)`. A prompt that throws counts as declined.
pub struct WindowConfirm {
    window: Window,
}

impl WindowConfirm {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Confirm for WindowConfirm {
    fn confirm(&self, message: &str) -> bool {
        self.window.confirm_with_message(message).unwrap_or(false)
    }
}

impl Activation for Event {
    fn prevent_default(&self) {
        Event::prevent_default(self)
    }
}

/// Read overrides from `<meta name="efish-ui" content="{...}">`.
pub fn load_config(document: &Document) -> UiConfig {
    let selector = format!("meta[name=\"{}\"]", CONFIG_META_NAME);
    let Some(raw) = document
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"))
    else {
        return UiConfig::default();
    };

    UiConfig::from_json(&raw).unwrap_or_else(|e| {
        warn!("Ignoring page configuration: {}", e);
        UiConfig::default()
    })
}

fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, UiError> {
    let nodes = document.query_selector_all(selector).map_err(dom_error)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Elements matching `selector`, or matching `fallback` when the page
/// configured a selector the browser rejects.
fn query_with_fallback(document: &Document, selector: &str, fallback: &str) -> Result<Vec<Element>, UiError> {
    match query_all(document, selector) {
        Ok(elements) => Ok(elements),
        Err(e) if selector != fallback => {
            warn!("Selector {:?} failed ({}); using {:?}", selector, e, fallback);
            query_all(document, fallback)
        }
        Err(e) => Err(e),
    }
}

fn listen_for_clicks<F>(element: &Element, handler: F) -> Result<(), UiError>
where
    F: FnMut(Event) + 'static,
{
    let on_click = Closure::<dyn FnMut(Event)>::new(handler);
    element
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(dom_error)?;
    on_click.forget();
    Ok(())
}

/// Attach `bind` to every element of one group. A failing element is skipped;
/// returns how many were bound.
fn bind_group<F>(group: &str, elements: Vec<Element>, mut bind: F) -> usize
where
    F: FnMut(&Element) -> Result<(), UiError>,
{
    let mut bound = 0;
    for element in &elements {
        match bind(element) {
            Ok(()) => bound += 1,
            Err(e) => warn!("Failed to bind {} element: {}", group, e),
        }
    }
    bound
}

fn bind_options(document: &Document, config: &UiConfig, controller: Rc<RefCell<PageThemeController>>) -> Result<usize, UiError> {
    let defaults = UiConfig::default();
    let options = query_with_fallback(document, &config.option_selector, &defaults.option_selector)?;
    Ok(bind_group("theme option", options, |element| {
        let controller = Rc::clone(&controller);
        let option_element = element.clone();
        listen_for_clicks(element, move |event: Event| {
            let option = ThemeOption::new(option_element.get_attribute(OPTION_ATTRIBUTE));
            controller.borrow_mut().on_option_activated(&option, &event);
        })
    }))
}

fn bind_logout_links(document: &Document, config: &UiConfig, guard: Rc<LogoutGuard<WindowConfirm>>) -> Result<usize, UiError> {
    let defaults = UiConfig::default();
    let links = query_with_fallback(document, &config.logout_selector, &defaults.logout_selector)?;
    Ok(bind_group("logout link", links, |element| {
        let guard = Rc::clone(&guard);
        listen_for_clicks(element, move |event: Event| {
            guard.on_activate(&event);
        })
    }))
}

/// Listener counts from one [`initialize`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bindings {
    pub theme_options: usize,
    pub logout_links: usize,
}

/// Apply the stored theme and bind every theme option and logout link on the page.
///
/// The two groups are bound independently: a failure in one is logged and
/// leaves the other in place.
pub fn initialize(window: &Window, document: &Document) -> Result<Bindings, UiError> {
    let config = load_config(document);
    mount_theme_menu(document, &config);

    let root = document
        .document_element()
        .ok_or_else(|| UiError::Dom("document has no root element".to_string()))?;
    let mut controller = ThemeController::new(LocalStorage::open(window), DocumentRoot::new(root), config.clone());
    controller.initialize();
    let controller = Rc::new(RefCell::new(controller));

    let guard = Rc::new(LogoutGuard::new(
        WindowConfirm::new(window.clone()),
        config.logout_message.clone(),
    ));

    let mut bindings = Bindings::default();
    match bind_logout_links(document, &config, guard) {
        Ok(count) => bindings.logout_links = count,
        Err(e) => warn!("Logout links were not bound: {}", e),
    }
    match bind_options(document, &config, controller) {
        Ok(count) => bindings.theme_options = count,
        Err(e) => warn!("Theme options were not bound: {}", e),
    }

    info!(
        "Bound {} theme options and {} logout links",
        bindings.theme_options, bindings.logout_links
    );
    Ok(bindings)
}

/// Run [`initialize`] once the document has been parsed.
pub fn start() -> Result<(), UiError> {
    let window = web_sys::window().ok_or_else(|| UiError::Dom("no window".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| UiError::Dom("window has no document".to_string()))?;

    if document.ready_state() != "loading" {
        return initialize(&window, &document).map(|_| ());
    }

    let target = document.clone();
    let on_ready = Closure::once(move || {
        if let Err(e) = initialize(&window, &document) {
            warn!("Page initialization failed: {}", e);
        }
    });
    target
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        .map_err(dom_error)?;
    on_ready.forget();
    Ok(())
}
