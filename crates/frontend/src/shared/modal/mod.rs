//! Accessible modal dialog.
//!
//! - `host` - the host state the engine touches (focus, scroll, key listeners)
//! - `focus_registry` - focusable descendants of a container
//! - `focus_trap` - Tab cycling and focus restoration
//! - `scroll_lock` - body overflow suppression
//! - `controller` - open/close lifecycle tying the above together
//! - `component` - the `<Modal>` Leptos component over the browser host

pub mod component;
pub mod controller;
pub mod focus_registry;
pub mod focus_trap;
pub mod host;
pub mod scroll_lock;
pub mod web_host;

#[cfg(test)]
pub(crate) mod test_host;

pub use component::{use_is_client, Modal};
pub use controller::DialogController;
pub use host::{DialogHost, KeyOutcome, KeyPress};
pub use web_host::WebHost;
