//! In-flight lock for a single outstanding request.

use std::cell::Cell;

/// Holds the flag while alive, releases it on drop (also when the
/// request future is dropped before completing)
pub(crate) struct PendingGuard<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> PendingGuard<'a> {
    /// `None` if a request is already outstanding
    pub(crate) fn acquire(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            None
        } else {
            Some(Self { flag })
        }
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}
