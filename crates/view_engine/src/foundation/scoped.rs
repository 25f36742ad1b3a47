//! Scoped resource ownership
//!
//! Binds a value to a release action chosen at construction time. The action
//! runs exactly once, when the last owner goes away, including during error
//! unwind. Callers never release by hand.

use std::ops::{Deref, DerefMut};
use std::rc::Rc;

/// Exclusively owned resource with a release action.
///
/// Dropping the wrapper runs the release action on the wrapped value. Use
/// [`Scoped::into_inner`] to take the value back out without releasing.
pub struct Scoped<T> {
    value: Option<T>,
    release: Option<Box<dyn FnOnce(T)>>,
}

impl<T> Scoped<T> {
    /// Wrap `value`, arming `release` to run when the wrapper is dropped.
    pub fn new(value: T, release: impl FnOnce(T) + 'static) -> Self {
        Self {
            value: Some(value),
            release: Some(Box::new(release)),
        }
    }

    /// Borrow the wrapped value.
    pub fn get(&self) -> &T {
        self.value.as_ref().expect("value present until drop")
    }

    /// Mutably borrow the wrapped value.
    pub fn get_mut(&mut self) -> &mut T {
        self.value.as_mut().expect("value present until drop")
    }

    /// Disarm the wrapper and return the value. The release action does not
    /// run.
    pub fn into_inner(mut self) -> T {
        self.release = None;
        self.value.take().expect("value present until drop")
    }
}

impl<T> Deref for Scoped<T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.get()
    }
}

impl<T> DerefMut for Scoped<T> {
    fn deref_mut(&mut self) -> &mut T {
        self.get_mut()
    }
}

impl<T> Drop for Scoped<T> {
    fn drop(&mut self) {
        if let (Some(value), Some(release)) = (self.value.take(), self.release.take()) {
            release(value);
        }
    }
}

/// Shared-ownership form of [`Scoped`].
///
/// Clones share the same wrapped value; the release action runs once, when
/// the last clone is dropped.
pub struct Shared<T> {
    inner: Rc<Scoped<T>>,
}

impl<T> Shared<T> {
    /// Wrap `value` for shared ownership.
    pub fn new(value: T, release: impl FnOnce(T) + 'static) -> Self {
        Self {
            inner: Rc::new(Scoped::new(value, release)),
        }
    }

    /// Number of live owners.
    pub fn owners(&self) -> usize {
        Rc::strong_count(&self.inner)
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> Deref for Shared<T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.inner.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn release_runs_exactly_once() {
        let count = Rc::new(RefCell::new(0));
        {
            let observer = Rc::clone(&count);
            let _guard = Scoped::new(7, move |value| {
                assert_eq!(value, 7);
                *observer.borrow_mut() += 1;
            });
            assert_eq!(*count.borrow(), 0);
        }
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn release_runs_on_early_return() {
        let count = Rc::new(RefCell::new(0));
        let observer = Rc::clone(&count);
        let attempt = || -> Result<(), &'static str> {
            let _guard = Scoped::new((), move |()| *observer.borrow_mut() += 1);
            Err("bootstrap step failed")
        };
        assert!(attempt().is_err());
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn into_inner_disarms_release() {
        let count = Rc::new(RefCell::new(0));
        let observer = Rc::clone(&count);
        let guard = Scoped::new(42, move |_| *observer.borrow_mut() += 1);
        assert_eq!(guard.into_inner(), 42);
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn releases_in_reverse_acquisition_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        {
            let first = Rc::clone(&order);
            let _subsystem = Scoped::new("subsystem", move |name| first.borrow_mut().push(name));
            let second = Rc::clone(&order);
            let _window = Scoped::new("window", move |name| second.borrow_mut().push(name));
            let third = Rc::clone(&order);
            let _renderer = Scoped::new("renderer", move |name| third.borrow_mut().push(name));
        }
        assert_eq!(*order.borrow(), vec!["renderer", "window", "subsystem"]);
    }

    #[test]
    fn reverse_order_holds_on_failure_path() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let bootstrap = || -> Result<(), &'static str> {
            let first = Rc::clone(&order);
            let _subsystem = Scoped::new("subsystem", move |name| first.borrow_mut().push(name));
            let second = Rc::clone(&order);
            let _window = Scoped::new("window", move |name| second.borrow_mut().push(name));
            // Renderer creation fails; everything acquired so far unwinds.
            Err("renderer creation failed")
        };
        assert!(bootstrap().is_err());
        assert_eq!(*order.borrow(), vec!["window", "subsystem"]);
    }

    #[test]
    fn shared_releases_when_last_owner_drops() {
        let count = Rc::new(RefCell::new(0));
        let observer = Rc::clone(&count);
        let a = Shared::new("token", move |_| *observer.borrow_mut() += 1);
        let b = a.clone();
        assert_eq!(a.owners(), 2);
        drop(a);
        assert_eq!(*count.borrow(), 0);
        drop(b);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn deref_reaches_the_wrapped_value() {
        let guard = Scoped::new(String::from("handle"), |_| {});
        assert_eq!(guard.len(), 6);
        let shared = Shared::new(String::from("handle"), |_| {});
        assert_eq!(shared.len(), 6);
    }
}
