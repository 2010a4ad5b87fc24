use std::cell::Cell;
use std::rc::Rc;

struct LockInner {
    holders: Cell<usize>,
    apply: Box<dyn Fn(bool)>,
}

/// Page scroll lock shared by every overlay on the page.
///
/// Each holder keeps a [`ScrollLockGuard`]; the page only scrolls again once
/// the last guard is dropped, so the menu and the modal can be open together.
#[derive(Clone)]
pub struct ScrollLock {
    inner: Rc<LockInner>,
}

impl ScrollLock {
    pub fn new(apply: impl Fn(bool) + 'static) -> Self {
        Self {
            inner: Rc::new(LockInner {
                holders: Cell::new(0),
                apply: Box::new(apply),
            }),
        }
    }

    /// Lock that toggles `overflow: hidden` on the document body.
    pub fn for_body() -> Self {
        Self::new(|locked| {
            let Some(body) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.body())
            else {
                return;
            };
            let style = body.style();
            let result = if locked {
                style.set_property("overflow", "hidden")
            } else {
                style.remove_property("overflow").map(|_| ())
            };
            if result.is_err() {
                log::warn!("Failed to update body scroll lock");
            }
        })
    }

    pub fn acquire(&self) -> ScrollLockGuard {
        let holders = self.inner.holders.get();
        if holders == 0 {
            (self.inner.apply)(true);
        }
        self.inner.holders.set(holders + 1);
        ScrollLockGuard { lock: self.clone() }
    }

    #[cfg(test)]
    pub fn is_locked(&self) -> bool {
        self.inner.holders.get() > 0
    }

    fn release(&self) {
        let holders = self.inner.holders.get().saturating_sub(1);
        self.inner.holders.set(holders);
        if holders == 0 {
            (self.inner.apply)(false);
        }
    }
}

impl PartialEq for ScrollLock {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

pub struct ScrollLockGuard {
    lock: ScrollLock,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.lock.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn recording_lock() -> (ScrollLock, Rc<RefCell<Vec<bool>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        let lock = ScrollLock::new(move |locked| sink.borrow_mut().push(locked));
        (lock, calls)
    }

    #[test]
    fn single_holder_locks_and_unlocks() {
        let (lock, calls) = recording_lock();
        let guard = lock.acquire();
        assert!(lock.is_locked());
        drop(guard);
        assert!(!lock.is_locked());
        assert_eq!(*calls.borrow(), vec![true, false]);
    }

    #[test]
    fn page_stays_locked_until_last_holder_releases() {
        let (lock, calls) = recording_lock();
        let menu = lock.acquire();
        let modal = lock.acquire();
        drop(menu);
        assert!(lock.is_locked());
        assert_eq!(*calls.borrow(), vec![true]);
        drop(modal);
        assert!(!lock.is_locked());
        assert_eq!(*calls.borrow(), vec![true, false]);
    }

    #[test]
    fn clones_share_holders() {
        let (lock, _) = recording_lock();
        let other = lock.clone();
        let _guard = other.acquire();
        assert!(lock.is_locked());
        assert!(lock == other);
    }
}
