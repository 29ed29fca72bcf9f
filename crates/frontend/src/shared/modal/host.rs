//! Host environment seen by the dialog engine.
//!
//! The focus pointer, the root scroll style and the global key-listener
//! registry are process-wide state. The engine only touches them through
//! [`DialogHost`], so the same lifecycle code drives the browser
//! ([`super::web_host::WebHost`]) and the in-memory host used by tests.

use std::rc::Rc;

pub const KEY_TAB: &str = "Tab";
pub const KEY_ESCAPE: &str = "Escape";

/// A keydown as delivered to a global listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub key: String,
    pub shift: bool,
    /// Auto-repeat of a held key.
    pub repeat: bool,
}

impl KeyPress {
    pub fn is(&self, key: &str) -> bool {
        self.key == key
    }
}

/// Builders for synthetic key presses; the browser host fills the fields
/// straight from the `KeyboardEvent`.
#[cfg(test)]
impl KeyPress {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            shift: false,
            repeat: false,
        }
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn repeated(mut self) -> Self {
        self.repeat = true;
        self
    }
}

/// What a listener did with a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Default behaviour proceeds.
    Ignored,
    /// Default behaviour must be suppressed.
    Handled,
}

pub type KeyHandler = Rc<dyn Fn(&KeyPress) -> KeyOutcome>;

pub trait DialogHost: Clone + 'static {
    type Node: Clone + PartialEq + 'static;
    /// Registration token of an installed key listener.
    type KeyListener: 'static;

    /// Node currently holding host focus.
    fn active_element(&self) -> Option<Self::Node>;
    fn focus(&self, node: &Self::Node);
    /// Whether the node is still part of the host tree.
    fn is_attached(&self, node: &Self::Node) -> bool;
    /// Inclusive containment, as `Node.contains`.
    fn contains(&self, container: &Self::Node, node: &Self::Node) -> bool;
    /// All descendants of `container` (excluding itself) in document order.
    fn descendants(&self, container: &Self::Node) -> Vec<Self::Node>;
    /// Lowercase tag name.
    fn tag_name(&self, node: &Self::Node) -> String;
    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    /// Effective tab index, including the tag's implicit default.
    fn tab_index(&self, node: &Self::Node) -> i32;
    fn is_hidden(&self, node: &Self::Node) -> bool;

    /// Current overflow style of the scrolling root, `None` without a root.
    fn scroll_style(&self) -> Option<String>;
    fn set_scroll_style(&self, value: &str);

    /// Installs a global keydown listener. `None` when the host has nowhere
    /// to install it.
    fn add_key_listener(&self, handler: KeyHandler) -> Option<Self::KeyListener>;
    fn remove_key_listener(&self, listener: Self::KeyListener);
}
