//! Tab-cycling focus trap for one open dialog.

use super::focus_registry::focusable_elements;
use super::host::{DialogHost, KeyOutcome};

/// State of an active trap: where focus goes back to on deactivation.
struct TrapSession<N> {
    return_point: Option<N>,
}

/// Inactive until [`FocusTrap::activate`], active until [`FocusTrap::deactivate`].
pub struct FocusTrap<N> {
    session: Option<TrapSession<N>>,
}

impl<N> Default for FocusTrap<N> {
    fn default() -> Self {
        Self { session: None }
    }
}

impl<N: Clone + PartialEq> FocusTrap<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Captures the return point and focuses the first focusable descendant
    /// of `container`. Returns `false` (and changes nothing) if already active.
    pub fn activate<H: DialogHost<Node = N>>(&mut self, host: &H, container: &N) -> bool {
        if self.session.is_some() {
            return false;
        }
        let return_point = host.active_element();
        if let Some(first) = focusable_elements(host, container).first() {
            host.focus(first);
        }
        self.session = Some(TrapSession { return_point });
        log::debug!("focus trap activated");
        true
    }

    /// Tab / Shift+Tab while active. Wraps at the ends of the focusable set
    /// and pulls stray focus back into `container`; everything else is left
    /// to native navigation.
    pub fn handle_tab<H: DialogHost<Node = N>>(
        &self,
        host: &H,
        container: &N,
        backwards: bool,
    ) -> KeyOutcome {
        if self.session.is_none() {
            return KeyOutcome::Ignored;
        }
        let Some(current) = host.active_element() else {
            return KeyOutcome::Ignored;
        };
        let focusable = focusable_elements(host, container);
        let (Some(head), Some(tail)) = (focusable.first(), focusable.last()) else {
            return KeyOutcome::Ignored;
        };
        let (wrap_to, boundary) = if backwards { (tail, head) } else { (head, tail) };

        if current == *boundary || !host.contains(container, &current) {
            host.focus(wrap_to);
            KeyOutcome::Handled
        } else {
            KeyOutcome::Ignored
        }
    }

    /// Restores focus to the return point if it is still attached, then ends
    /// the session. No-op when inactive.
    pub fn deactivate<H: DialogHost<Node = N>>(&mut self, host: &H) {
        let Some(session) = self.session.take() else {
            return;
        };
        match session.return_point {
            Some(node) if host.is_attached(&node) => host.focus(&node),
            Some(_) => log::warn!("focus trap return point detached, focus not restored"),
            None => {}
        }
        log::debug!("focus trap deactivated");
    }
}
