//! Read-write spinlock guarding the canvas.
//!
//! A `ReadWriteLock` can be locked for mutation by one holder at a time, *or*
//! for reading by any number of holders, but not both. Here that means the
//! painter can draw a whole primitive without the scanout path seeing it
//! half-done, and the scanout path can read a frame without the painter
//! changing it underneath.
//!
//! Nothing ever blocks politely. Readers on the scanout path use the `try_`
//! forms and give up on contention; the painter spins, which is fine because
//! readers only hold the lock for the length of a transfer kick-off.
//!
//! The implementation is based closely on `RefCell` but using atomic memory
//! updates.

use core::cell::UnsafeCell;
use core::sync::atomic::{AtomicIsize, Ordering};

pub struct ReadWriteLock<T: ?Sized> {
    /// Zero when unlocked, positive for that many readers, -1 for a writer.
    status: AtomicIsize,
    value: UnsafeCell<T>,
}

unsafe impl<T: ?Sized + Send + Sync> Sync for ReadWriteLock<T> {}

impl<T> ReadWriteLock<T> {
    pub const fn new(value: T) -> Self {
        ReadWriteLock {
            status: AtomicIsize::new(0),
            value: UnsafeCell::new(value),
        }
    }

    pub fn into_inner(self) -> T {
        self.value.into_inner()
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TryLockError {
    /// The lock is held for writing, so the operation will not succeed until
    /// that guard is released.
    Unavailable,
    /// The operation failed due to a preemption / race, but will likely succeed
    /// if retried.
    Race,
}

impl<T: ?Sized> ReadWriteLock<T> {
    /// Attempts to lock `self` for reading.
    ///
    /// This can fail for two reasons, encoded in the values of `TryLockError`.
    ///
    /// 1. If some other code holds a `GuardMut<T>` on `self`, the contents may
    ///    change and so we can't get our lock. In this case, the error is
    ///    `TryLockError::Unavailable`.
    ///
    /// 2. If a higher-priority task (i.e. an ISR) preempts us and takes out a
    ///    lock while this function is executing, we have to try again. In this
    ///    case, the error is `TryLockError::Race`.
    pub fn try_lock(&self) -> Result<Guard<T>, TryLockError> {
        let status = self.status.load(Ordering::Acquire);
        if read_unavail(status) {
            return Err(TryLockError::Unavailable);
        }

        self.status
            .compare_exchange_weak(
                status,
                status + 1,
                Ordering::Acquire,
                Ordering::Relaxed,
            )
            .map(|_| Guard {
                borrow: Borrow(&self.status),
                // Safety: the status now records our read guard, so no
                // GuardMut can be created until it is dropped.
                value: unsafe { &*self.value.get() },
            })
            .map_err(|_| TryLockError::Race)
    }

    /// Locks `self` for reading, retrying on races but failing on actual
    /// contention.
    pub fn lock_uncontended(&self) -> Option<Guard<T>> {
        loop {
            match self.try_lock() {
                Ok(guard) => return Some(guard),
                Err(TryLockError::Race) => continue,
                Err(TryLockError::Unavailable) => return None,
            }
        }
    }

    /// Attempts to lock `self` for mutation. Fails if any guard exists.
    pub fn try_lock_mut(&self) -> Option<GuardMut<T>> {
        self.status
            .compare_exchange(0, -1, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| GuardMut {
                borrow: BorrowMut(&self.status),
                // Safety: status -1 excludes every other guard.
                value: unsafe { &mut *self.value.get() },
            })
    }

    /// Locks `self` for mutation, spinning until readers are done.
    pub fn lock_mut(&self) -> GuardMut<T> {
        loop {
            if let Some(guard) = self.try_lock_mut() {
                return guard;
            }
            core::hint::spin_loop();
        }
    }

    /// Exclusive access without locking, for when the borrow checker already
    /// proves nobody else can hold a guard.
    pub fn get_mut(&mut self) -> &mut T {
        self.value.get_mut()
    }
}

/// Smart pointer type representing a read lock on a `ReadWriteLock`.
pub struct Guard<'a, T: ?Sized> {
    // Held for its Drop.
    #[allow(dead_code)]
    borrow: Borrow<'a>,
    value: &'a T,
}

impl<'a, T: ?Sized> Guard<'a, T> {
    /// Narrows a guard to some part of its contents, keeping the lock.
    pub fn map<U: ?Sized>(
        orig: Guard<'a, T>,
        f: impl FnOnce(&T) -> &U,
    ) -> Guard<'a, U> {
        let Guard { borrow, value } = orig;
        Guard { borrow, value: f(value) }
    }
}

impl<'a, T: ?Sized> core::ops::Deref for Guard<'a, T> {
    type Target = T;
    fn deref(&self) -> &Self::Target {
        self.value
    }
}

struct Borrow<'a>(&'a AtomicIsize);

impl<'a> Drop for Borrow<'a> {
    fn drop(&mut self) {
        let prev = self.0.fetch_sub(1, Ordering::Release);
        debug_assert!(reading(prev))
    }
}

pub struct GuardMut<'a, T: ?Sized> {
    // Held for its Drop.
    #[allow(dead_code)]
    borrow: BorrowMut<'a>,
    value: &'a mut T,
}

impl<'a, T: ?Sized> core::ops::Deref for GuardMut<'a, T> {
    type Target = T;
    fn deref(&self) -> &Self::Target {
        self.value
    }
}

impl<'a, T: ?Sized> core::ops::DerefMut for GuardMut<'a, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.value
    }
}

struct BorrowMut<'a>(&'a AtomicIsize);

impl<'a> Drop for BorrowMut<'a> {
    fn drop(&mut self) {
        let prev = self.0.fetch_add(1, Ordering::Release);
        debug_assert!(writing(prev))
    }
}

fn writing(x: isize) -> bool {
    x < 0
}

fn reading(x: isize) -> bool {
    x > 0
}

/// Checks if we *can't* take out a read lock given a status word. We can't take
/// out a read lock if:
///
/// 1. The status is negative (i.e. write locks exist).
/// 2. The status would overflow -- it is `isize::MAX`.
///
/// This implementation exploits the fact that `isize::MAX` and the negative
/// numbers form a single contiguous range, if you interpret them as unsigned.
fn read_unavail(x: isize) -> bool {
    x as usize >= isize::MAX as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readers_share() {
        let lock = ReadWriteLock::new(5);
        let a = lock.lock_uncontended().unwrap();
        let b = lock.lock_uncontended().unwrap();
        assert_eq!(*a + *b, 10);
        assert!(lock.try_lock_mut().is_none());
        drop(a);
        assert!(lock.try_lock_mut().is_none());
        drop(b);
        assert!(lock.try_lock_mut().is_some());
    }

    #[test]
    fn writer_excludes_readers() {
        let lock = ReadWriteLock::new(5);
        {
            let mut w = lock.lock_mut();
            *w = 6;
            assert!(lock.lock_uncontended().is_none());
            assert!(lock.try_lock_mut().is_none());
        }
        assert_eq!(*lock.lock_uncontended().unwrap(), 6);
    }

    #[test]
    fn map_keeps_lock() {
        let lock = ReadWriteLock::new([1, 2, 3]);
        let tail = Guard::map(lock.lock_uncontended().unwrap(), |a| &a[1..]);
        assert_eq!(&*tail, &[2, 3]);
        assert!(lock.try_lock_mut().is_none());
        drop(tail);
        assert!(lock.try_lock_mut().is_some());
    }

    #[test]
    fn read_availability() {
        assert!(read_unavail(-1));
        assert!(read_unavail(isize::MAX));
        assert!(!read_unavail(0));
        assert!(!read_unavail(3));
    }
}
