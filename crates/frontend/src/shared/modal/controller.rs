//! Open/close lifecycle of a modal dialog.
//!
//! [`DialogController`] follows the caller-owned `is_open` flag and keeps the
//! focus trap, the scroll lock and the global key listener in lock-step with
//! it. It never changes `is_open` itself: every dismissal gesture is reported
//! through the `on_close` callback and the caller decides.

use super::focus_trap::FocusTrap;
use super::host::{DialogHost, KeyHandler, KeyOutcome, KeyPress, KEY_ESCAPE, KEY_TAB};
use super::scroll_lock::ScrollLock;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

struct Lifecycle<H: DialogHost> {
    host: H,
    open: bool,
    /// Element the trap confines focus to (the backdrop), once rendered.
    container: Option<H::Node>,
    trap: FocusTrap<H::Node>,
    scroll_lock: ScrollLock,
    key_listener: Option<H::KeyListener>,
}

pub struct DialogController<H: DialogHost> {
    state: Rc<RefCell<Lifecycle<H>>>,
    on_close: Rc<dyn Fn()>,
}

impl<H: DialogHost> DialogController<H> {
    pub fn new(host: H, locked_overflow: &str, on_close: impl Fn() + 'static) -> Self {
        Self {
            state: Rc::new(RefCell::new(Lifecycle {
                host,
                open: false,
                container: None,
                trap: FocusTrap::new(),
                scroll_lock: ScrollLock::new(locked_overflow),
                key_listener: None,
            })),
            on_close: Rc::new(on_close),
        }
    }

    pub fn is_open(&self) -> bool {
        self.state.borrow().open
    }

    pub fn is_trapping_focus(&self) -> bool {
        self.state.borrow().trap.is_active()
    }

    /// Brings the session in line with the caller's state.
    ///
    /// Safe to call on every render: entering an already open session only
    /// picks up a newly available `container`, it never re-acquires the lock
    /// or re-captures the return point.
    pub fn sync(&self, is_open: bool, container: Option<H::Node>) {
        if is_open {
            self.enter(container);
        } else {
            self.exit();
        }
    }

    /// Same as closing; used when the owning component goes away while open.
    pub fn teardown(&self) {
        self.exit();
    }

    /// The close affordance was activated.
    pub fn request_close(&self) {
        (self.on_close)();
    }

    /// Pointer gesture on the backdrop. Dismisses only when the event target
    /// is the listener-bound element itself, never one of its descendants.
    pub fn backdrop_pointer(&self, target: Option<&H::Node>, current_target: Option<&H::Node>) -> bool {
        let direct = matches!((target, current_target), (Some(t), Some(c)) if t == c);
        if direct {
            (self.on_close)();
        }
        direct
    }

    fn enter(&self, container: Option<H::Node>) {
        let mut guard = self.state.borrow_mut();
        let st = &mut *guard;

        if !st.open {
            st.open = true;
            st.scroll_lock.acquire(&st.host);
            st.key_listener = st.host.add_key_listener(self.key_handler());
            if st.key_listener.is_none() {
                log::warn!("dialog key listener could not be installed");
            }
        }

        // A node left over from a previous render may still be detached.
        if let Some(container) = container.filter(|node| st.host.is_attached(node)) {
            if !st.trap.is_active() {
                st.trap.activate(&st.host, &container);
            }
            st.container = Some(container);
        }
    }

    fn exit(&self) {
        let mut guard = self.state.borrow_mut();
        let st = &mut *guard;
        if !st.open {
            return;
        }
        st.open = false;

        if let Some(listener) = st.key_listener.take() {
            st.host.remove_key_listener(listener);
        }
        st.trap.deactivate(&st.host);
        if st.scroll_lock.is_locked() {
            st.scroll_lock.release(&st.host);
        }
        st.container = None;
        log::debug!("dialog session closed");
    }

    fn key_handler(&self) -> KeyHandler {
        let state = Rc::downgrade(&self.state);
        let on_close = Rc::clone(&self.on_close);
        Rc::new(move |key: &KeyPress| dispatch_key(&state, on_close.as_ref(), key))
    }
}

impl<H: DialogHost> Drop for DialogController<H> {
    fn drop(&mut self) {
        self.exit();
    }
}

fn dispatch_key<H: DialogHost>(
    state: &Weak<RefCell<Lifecycle<H>>>,
    on_close: &dyn Fn(),
    key: &KeyPress,
) -> KeyOutcome {
    let Some(state) = state.upgrade() else {
        return KeyOutcome::Ignored;
    };

    if key.is(KEY_ESCAPE) {
        // One held key is one gesture.
        let dismiss = state.borrow().open && !key.repeat;
        if dismiss {
            on_close();
        }
        return KeyOutcome::Ignored;
    }

    if key.is(KEY_TAB) {
        let st = state.borrow();
        if let (true, Some(container)) = (st.open, st.container.as_ref()) {
            return st.trap.handle_tab(&st.host, container, key.shift);
        }
    }

    KeyOutcome::Ignored
}
