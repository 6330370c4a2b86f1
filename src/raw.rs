use std::sync::atomic::{AtomicU32, Ordering};

const UNLOCKED: u32 = 0;
const LOCKED: u32 = 1;

/// A mutual exclusion lock that never blocks the caller.
///
/// An acquisition attempt either wins the lock immediately or returns
/// `false` immediately, so a caller that loses the race can skip the guarded
/// work instead of waiting for the current holder. The all-zero value is a
/// valid unlocked lock.
///
/// The type is neither `Clone` nor `Copy`; share one instance by reference.
/// A duplicated lock would be two state words that no longer agree on who
/// holds it.
pub struct RawNbLock {
    state: AtomicU32,
}

impl RawNbLock {
    pub const fn new() -> Self {
        Self {
            state: AtomicU32::new(UNLOCKED),
        }
    }

    /// Non-blocking: try acquiring. Returns the release capability and
    /// whether the lock was won.
    ///
    /// On `true`, the caller holds the lock and the returned [`Unlocker`]
    /// must be invoked exactly once to release it. On `false`, the state is
    /// untouched and the returned [`Unlocker`] does nothing. It is safe to
    /// invoke the capability without branching on the flag first.
    pub fn try_lock(&self) -> (Unlocker<'_>, bool) {
        if self
            .state
            .compare_exchange(UNLOCKED, LOCKED, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return (Unlocker { lock: None }, false);
        }

        (Unlocker { lock: Some(self) }, true)
    }

    /// Whether the lock is currently held. Advisory only: the answer can be
    /// stale by the time the caller acts on it.
    pub fn is_locked(&self) -> bool {
        self.state.load(Ordering::Relaxed) == LOCKED
    }

    pub(crate) fn unlock(&self) {
        if self
            .state
            .compare_exchange(LOCKED, UNLOCKED, Ordering::Release, Ordering::Relaxed)
            .is_err()
        {
            panic!("released an nblock that is not held");
        }
    }
}

impl Default for RawNbLock {
    fn default() -> Self {
        Self::new()
    }
}

/// Release capability returned by [`RawNbLock::try_lock`].
///
/// The capability from a successful acquisition releases the lock on its
/// first invocation; invoking it again panics, since finding the lock
/// already released means the exclusivity guarantee was broken somewhere.
/// The capability from a failed acquisition is a no-op and may be invoked
/// any number of times.
pub struct Unlocker<'a> {
    lock: Option<&'a RawNbLock>,
}

impl Unlocker<'_> {
    pub fn unlock(&self) {
        if let Some(lock) = self.lock {
            lock.unlock();
        }
    }
}
