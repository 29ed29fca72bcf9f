//! UI kit configuration, provided through Leptos context.
//!
//! ```rust,no_run
//! # use leptos::prelude::*;
//! # use frontend::shared::config::{UiConfig, use_ui_config};
//! provide_context(UiConfig::from_location());
//! let config = use_ui_config();
//! let url = config.api_url("/api/users");
//! ```

use super::modal::scroll_lock::LOCKED_OVERFLOW;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct ModalConfig {
    /// Body `overflow` value written while a dialog is open.
    pub locked_overflow: String,
    /// Accessible label of the dialog close button.
    pub close_label: String,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            locked_overflow: LOCKED_OVERFLOW.to_string(),
            close_label: "Close".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiConfig {
    /// Prefix for relative API paths. Empty means same origin.
    pub api_base: String,
    pub modal: ModalConfig,
}

impl UiConfig {
    /// Defaults with `api_base` taken from the current page origin.
    pub fn from_location() -> Self {
        let api_base = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        Self {
            api_base,
            ..Self::default()
        }
    }

    /// Absolute paths (`http://..`, `https://..`) are returned unchanged.
    pub fn api_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        let base = self.api_base.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }
}

/// Config from context, or the defaults when none was provided.
pub fn use_ui_config() -> UiConfig {
    use_context::<UiConfig>().unwrap_or_default()
}
