use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::UiConfig;
use crate::events::Activation;
use crate::markers::{active_markers, apply_markers, MarkerTarget};
use crate::store::{get_preference, set_preference, PreferenceStore};

/// The user's chosen visual mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
    Contrast,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown theme preference: {0:?}")]
pub struct UnknownPreference(pub String);

impl ThemePreference {
    pub const ALL: [ThemePreference; 3] = [Self::Light, Self::Dark, Self::Contrast];

    /// Canonical string, as persisted and as written to the theme attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Contrast => "contrast",
        }
    }

    pub fn class_marker(self) -> &'static str {
        match self {
            Self::Light => "light-mode",
            Self::Dark => "dark-mode",
            Self::Contrast => "contrast-mode",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::Contrast => "High contrast",
        }
    }

    /// Lenient boundary parse: ignores case and surrounding whitespace and
    /// accepts the `-mode` suffixed spellings older pages stored.
    pub fn parse(raw: &str) -> Option<Self> {
        let value = raw.trim().to_ascii_lowercase();
        let value = value.strip_suffix("-mode").unwrap_or(&value);
        Self::ALL.into_iter().find(|mode| mode.as_str() == value)
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = UnknownPreference;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownPreference(s.to_string()))
    }
}

impl TryFrom<String> for ThemePreference {
    type Error = UnknownPreference;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A menu entry selecting a theme. Holds the raw option attribute, which the
/// page markup may have left out or misspelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeOption {
    value: Option<String>,
}

impl ThemeOption {
    pub fn new(value: Option<String>) -> Self {
        Self { value }
    }

    pub fn for_preference(mode: ThemePreference) -> Self {
        Self::new(Some(mode.as_str().to_string()))
    }

    pub fn raw_value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn preference(&self) -> Option<ThemePreference> {
        self.value.as_deref().and_then(ThemePreference::parse)
    }
}

/// Keeps the document root's mode markers in sync with the stored preference.
pub struct ThemeController<S, T> {
    store: S,
    root: T,
    config: UiConfig,
}

impl<S: PreferenceStore, T: MarkerTarget> ThemeController<S, T> {
    pub fn new(store: S, root: T, config: UiConfig) -> Self {
        Self { store, root, config }
    }

    /// Restore the stored preference onto the root. Returns the applied mode.
    pub fn initialize(&mut self) -> ThemePreference {
        let mode = match get_preference(&self.store, &self.config.storage_key) {
            Some(raw) => self.resolve(&raw),
            None => self.config.default_mode,
        };
        self.apply_mode(mode);
        info!("Applied theme on load: {}", mode);
        mode
    }

    pub fn apply_mode(&mut self, mode: ThemePreference) {
        apply_markers(
            &mut self.root,
            self.config.strategy,
            &self.config.theme_attribute,
            mode,
        );
    }

    /// Apply a mode given as an unchecked string; unknown values apply the default.
    pub fn apply_raw(&mut self, raw: &str) -> ThemePreference {
        let mode = self.resolve(raw);
        self.apply_mode(mode);
        mode
    }

    /// Handle a click on a theme option. The click's default action is always
    /// suppressed; options with malformed metadata change nothing else.
    pub fn on_option_activated<E: Activation + ?Sized>(
        &mut self,
        option: &ThemeOption,
        event: &E,
    ) -> Option<ThemePreference> {
        event.prevent_default();

        let Some(mode) = option.preference() else {
            debug!("Ignoring theme option with value {:?}", option.raw_value());
            return None;
        };

        self.apply_mode(mode);
        set_preference(&mut self.store, &self.config.storage_key, mode.as_str());
        Some(mode)
    }

    /// The mode currently on the root, if exactly one marker is present.
    pub fn applied_mode(&self) -> Option<ThemePreference> {
        let active = active_markers(&self.root, self.config.strategy, &self.config.theme_attribute);
        match active.as_slice() {
            [mode] => Some(*mode),
            _ => None,
        }
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn root(&self) -> &T {
        &self.root
    }

    pub fn into_parts(self) -> (S, T) {
        (self.store, self.root)
    }

    fn resolve(&self, raw: &str) -> ThemePreference {
        ThemePreference::parse(raw).unwrap_or_else(|| {
            debug!("Unrecognized theme {:?}, using {}", raw, self.config.default_mode);
            self.config.default_mode
        })
    }
}
