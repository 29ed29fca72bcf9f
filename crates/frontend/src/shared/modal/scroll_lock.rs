//! Suppresses page scrolling while a dialog is open.

use super::host::DialogHost;

pub const LOCKED_OVERFLOW: &str = "hidden";
/// Written back when no prior value was recorded.
pub const UNLOCKED_OVERFLOW: &str = "";

struct ScrollLockSession {
    previous: Option<String>,
}

pub struct ScrollLock {
    locked_value: String,
    session: Option<ScrollLockSession>,
}

impl Default for ScrollLock {
    fn default() -> Self {
        Self::new(LOCKED_OVERFLOW)
    }
}

impl ScrollLock {
    pub fn new(locked_value: impl Into<String>) -> Self {
        Self {
            locked_value: locked_value.into(),
            session: None,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.session.is_some()
    }

    /// Records the current overflow style and overwrites it with the locked
    /// value. Returns `false` if the lock is already held.
    pub fn acquire<H: DialogHost>(&mut self, host: &H) -> bool {
        if self.session.is_some() {
            return false;
        }
        let previous = host.scroll_style();
        host.set_scroll_style(&self.locked_value);
        self.session = Some(ScrollLockSession { previous });
        log::debug!("scroll lock acquired");
        true
    }

    /// Writes back the recorded overflow style, or the unlocked default when
    /// nothing was recorded.
    pub fn release<H: DialogHost>(&mut self, host: &H) {
        let previous = self.session.take().and_then(|session| session.previous);
        host.set_scroll_style(previous.as_deref().unwrap_or(UNLOCKED_OVERFLOW));
        log::debug!("scroll lock released");
    }
}
