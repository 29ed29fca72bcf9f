//! In-memory host for exercising the dialog engine without a browser.
//!
//! Models a small element tree rooted at `<body>`, a single focus pointer,
//! the body overflow style and a keydown listener registry. Unhandled Tab
//! presses move focus through the document's focusable sequence the way a
//! browser would.

use super::focus_registry::focusable_elements;
use super::host::{DialogHost, KeyHandler, KeyOutcome, KeyPress, KEY_TAB};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemNode(usize);

struct NodeData {
    tag: String,
    attrs: BTreeMap<String, String>,
    parent: Option<usize>,
    children: Vec<usize>,
    hidden: bool,
}

struct Tree {
    nodes: Vec<NodeData>,
    focused: Option<usize>,
    overflow: Option<String>,
    listeners: Vec<Option<KeyHandler>>,
}

const BODY: usize = 0;

#[derive(Clone)]
pub struct MemoryHost {
    tree: Rc<RefCell<Tree>>,
}

impl MemoryHost {
    pub fn new() -> Self {
        let body = NodeData {
            tag: "body".into(),
            attrs: BTreeMap::new(),
            parent: None,
            children: Vec::new(),
            hidden: false,
        };
        Self {
            tree: Rc::new(RefCell::new(Tree {
                nodes: vec![body],
                focused: None,
                overflow: Some(String::new()),
                listeners: Vec::new(),
            })),
        }
    }

    /// A host without a scrolling root (no `<body>` style available).
    pub fn without_scroll_root() -> Self {
        let host = Self::new();
        host.tree.borrow_mut().overflow = None;
        host
    }

    pub fn body(&self) -> MemNode {
        MemNode(BODY)
    }

    pub fn append(&self, parent: MemNode, tag: &str) -> MemNode {
        self.append_with(parent, tag, &[])
    }

    pub fn append_with(&self, parent: MemNode, tag: &str, attrs: &[(&str, &str)]) -> MemNode {
        let mut tree = self.tree.borrow_mut();
        let id = tree.nodes.len();
        tree.nodes.push(NodeData {
            tag: tag.to_string(),
            attrs: attrs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            parent: Some(parent.0),
            children: Vec::new(),
            hidden: false,
        });
        tree.nodes[parent.0].children.push(id);
        MemNode(id)
    }

    pub fn set_attribute(&self, node: MemNode, name: &str, value: &str) {
        self.tree.borrow_mut().nodes[node.0]
            .attrs
            .insert(name.to_string(), value.to_string());
    }

    pub fn set_hidden(&self, node: MemNode, hidden: bool) {
        self.tree.borrow_mut().nodes[node.0].hidden = hidden;
    }

    /// Removes the subtree rooted at `node` from the document.
    pub fn detach(&self, node: MemNode) {
        let mut tree = self.tree.borrow_mut();
        if let Some(parent) = tree.nodes[node.0].parent.take() {
            tree.nodes[parent].children.retain(|c| *c != node.0);
        }
    }

    /// Focused node as `document.activeElement` reports it.
    pub fn focused(&self) -> Option<MemNode> {
        self.active_element()
    }

    pub fn overflow(&self) -> Option<String> {
        self.tree.borrow().overflow.clone()
    }

    pub fn set_overflow(&self, value: &str) {
        self.tree.borrow_mut().overflow = Some(value.to_string());
    }

    pub fn listener_count(&self) -> usize {
        self.tree.borrow().listeners.iter().flatten().count()
    }

    /// Delivers a keydown to every global listener, then performs the native
    /// Tab move unless a listener suppressed it.
    pub fn press(&self, key: KeyPress) -> KeyOutcome {
        let handlers: Vec<KeyHandler> = self.tree.borrow().listeners.iter().flatten().cloned().collect();
        let mut outcome = KeyOutcome::Ignored;
        for handler in handlers {
            if handler(&key) == KeyOutcome::Handled {
                outcome = KeyOutcome::Handled;
            }
        }
        if outcome == KeyOutcome::Ignored && key.is(KEY_TAB) {
            self.native_tab(key.shift);
        }
        outcome
    }

    pub fn tab(&self) -> KeyOutcome {
        self.press(KeyPress::new(KEY_TAB))
    }

    pub fn shift_tab(&self) -> KeyOutcome {
        self.press(KeyPress::new(KEY_TAB).with_shift())
    }

    fn native_tab(&self, backwards: bool) {
        let sequence = focusable_elements(self, &self.body());
        if sequence.is_empty() {
            return;
        }
        let current = self
            .active_element()
            .and_then(|node| sequence.iter().position(|n| *n == node));
        let next = match (current, backwards) {
            (None, false) => 0,
            (None, true) => sequence.len() - 1,
            (Some(i), false) => (i + 1) % sequence.len(),
            (Some(i), true) => (i + sequence.len() - 1) % sequence.len(),
        };
        self.focus(&sequence[next]);
    }

    fn attached(tree: &Tree, mut id: usize) -> bool {
        loop {
            if id == BODY {
                return true;
            }
            match tree.nodes[id].parent {
                Some(parent) => id = parent,
                None => return false,
            }
        }
    }

    fn collect(tree: &Tree, id: usize, out: &mut Vec<MemNode>) {
        for child in &tree.nodes[id].children {
            out.push(MemNode(*child));
            Self::collect(tree, *child, out);
        }
    }
}

impl DialogHost for MemoryHost {
    type Node = MemNode;
    type KeyListener = usize;

    fn active_element(&self) -> Option<MemNode> {
        let tree = self.tree.borrow();
        match tree.focused {
            Some(id) if Self::attached(&tree, id) => Some(MemNode(id)),
            _ => Some(MemNode(BODY)),
        }
    }

    fn focus(&self, node: &MemNode) {
        let mut tree = self.tree.borrow_mut();
        if Self::attached(&tree, node.0) {
            tree.focused = Some(node.0);
        }
    }

    fn is_attached(&self, node: &MemNode) -> bool {
        Self::attached(&self.tree.borrow(), node.0)
    }

    fn contains(&self, container: &MemNode, node: &MemNode) -> bool {
        let tree = self.tree.borrow();
        let mut current = Some(node.0);
        while let Some(id) = current {
            if id == container.0 {
                return true;
            }
            current = tree.nodes[id].parent;
        }
        false
    }

    fn descendants(&self, container: &MemNode) -> Vec<MemNode> {
        let tree = self.tree.borrow();
        let mut out = Vec::new();
        Self::collect(&tree, container.0, &mut out);
        out
    }

    fn tag_name(&self, node: &MemNode) -> String {
        self.tree.borrow().nodes[node.0].tag.to_ascii_lowercase()
    }

    fn attribute(&self, node: &MemNode, name: &str) -> Option<String> {
        self.tree.borrow().nodes[node.0].attrs.get(name).cloned()
    }

    fn tab_index(&self, node: &MemNode) -> i32 {
        if let Some(explicit) = self
            .attribute(node, "tabindex")
            .and_then(|v| v.trim().parse::<i32>().ok())
        {
            return explicit;
        }
        let has = |name: &str| self.attribute(node, name).is_some();
        let natively_focusable = match self.tag_name(node).as_str() {
            "a" => has("href"),
            "audio" | "video" => has("controls"),
            "button" | "input" | "select" | "textarea" | "iframe" | "summary" | "object"
            | "embed" => true,
            _ => has("contenteditable"),
        };
        if natively_focusable {
            0
        } else {
            -1
        }
    }

    fn is_hidden(&self, node: &MemNode) -> bool {
        let tree = self.tree.borrow();
        tree.nodes[node.0].hidden || tree.nodes[node.0].attrs.contains_key("hidden")
    }

    fn scroll_style(&self) -> Option<String> {
        self.overflow()
    }

    fn set_scroll_style(&self, value: &str) {
        let mut tree = self.tree.borrow_mut();
        if tree.overflow.is_some() {
            tree.overflow = Some(value.to_string());
        }
    }

    fn add_key_listener(&self, handler: KeyHandler) -> Option<usize> {
        let mut tree = self.tree.borrow_mut();
        tree.listeners.push(Some(handler));
        Some(tree.listeners.len() - 1)
    }

    fn remove_key_listener(&self, listener: usize) {
        if let Some(slot) = self.tree.borrow_mut().listeners.get_mut(listener) {
            *slot = None;
        }
    }
}
