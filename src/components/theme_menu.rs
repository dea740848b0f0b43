use leptos::prelude::*;

use crate::theme::ThemePreference;

/// One entry per theme. Entries carry `data-theme-option` like hand-written
/// menus do, so they are bound by the same option discovery.
#[component]
pub fn ThemeMenu() -> impl IntoView {
    view! {
        <ul class="theme-menu">
            {ThemePreference::ALL
                .into_iter()
                .map(|mode| {
                    view! {
                        <li class="theme-menu-item">
                            <a href="#" class="theme-option" data-theme-option=mode.as_str()>
                                {mode.label()}
                            </a>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
