//! A mutual exclusion lock that never blocks the caller.
//!
//! An acquisition attempt either succeeds immediately, granting exclusive
//! access to the critical section, or fails immediately so the caller can
//! skip the guarded work rather than queue behind the current holder. This
//! fits critical sections that may themselves stall for a long time, such as
//! submitting metrics to a remote collector: whoever loses the race simply
//! drops this round.
//!
//! [`RawNbLock`] is the bare primitive, a single atomic word whose
//! [`try_lock`](RawNbLock::try_lock) returns a release capability that is
//! safe to invoke whether or not the acquisition succeeded. [`NbLock`] wraps
//! it around a value and hands out a RAII [`Guard`] instead.
//!
//! ```
//! use nblock::NbLock;
//!
//! static PENDING: NbLock<Vec<u64>> = NbLock::new(Vec::new());
//!
//! fn flush() {
//!     if let Some(mut pending) = PENDING.try_lock() {
//!         pending.clear(); // e.g. drain to the network
//!     }
//! }
//! ```
pub mod lock;
pub mod raw;

pub use lock::Guard;
pub use lock::NbLock;
pub use raw::RawNbLock;
pub use raw::Unlocker;
