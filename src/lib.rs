//! Theme switching and logout confirmation for the efish web frontend.
//!
//! The controllers are plain Rust over small capability traits
//! ([`store::PreferenceStore`], [`markers::MarkerTarget`], [`logout::Confirm`],
//! [`events::Activation`]). The `browser` module implements those traits with
//! `web-sys` and is only built for `wasm32`.

pub mod config;
pub mod error;
pub mod events;
pub mod logout;
pub mod markers;
pub mod store;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub mod browser;
#[cfg(target_arch = "wasm32")]
pub mod components;

pub use config::{MarkerStrategy, UiConfig};
pub use error::{ConfigError, StoreError, UiError};
pub use logout::{LogoutGuard, Navigation};
pub use theme::{ThemeController, ThemeOption, ThemePreference};
