use std::{
    cell::UnsafeCell,
    ops::{Deref, DerefMut},
};

use crate::raw::RawNbLock;

/// [`RawNbLock`] wrapped around a value, with RAII release.
pub struct NbLock<T> {
    lock: RawNbLock,
    data: UnsafeCell<T>,
}

unsafe impl<T: Send> Send for NbLock<T> {}
unsafe impl<T: Send> Sync for NbLock<T> {}

unsafe impl<'s, T: Send> Send for Guard<'s, T> {}
unsafe impl<'s, T: Send + Sync> Sync for Guard<'s, T> {}

pub struct Guard<'s, T> {
    lock: &'s NbLock<T>,
}

impl<T> NbLock<T> {
    pub const fn new(data: T) -> Self {
        Self {
            lock: RawNbLock::new(),
            data: UnsafeCell::new(data),
        }
    }

    /// Non-blocking: try acquiring. Returns a guard on success, `None` when
    /// the lock is already held. Dropping the guard releases the lock.
    pub fn try_lock(&self) -> Option<Guard<'_, T>> {
        let (_, acquired) = self.lock.try_lock();

        if acquired {
            Some(Guard { lock: self })
        } else {
            None
        }
    }

    /// Runs `f` with exclusive access to the data if the lock can be won,
    /// releasing it afterwards. Returns `None` when the lock is already
    /// held, in which case `f` is not called.
    pub fn try_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let mut guard = self.try_lock()?;

        Some(f(&mut *guard))
    }

    pub fn is_locked(&self) -> bool {
        self.lock.is_locked()
    }
}

impl<T: Default> Default for NbLock<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<'s, T> Deref for Guard<'s, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        unsafe { &*self.lock.data.get() }
    }
}

impl<'s, T> DerefMut for Guard<'s, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { &mut *self.lock.data.get() }
    }
}

impl<'s, T> Drop for Guard<'s, T> {
    fn drop(&mut self) {
        self.lock.lock.unlock();
    }
}
