//! Single-consumption guard for HTML values handed to a response body.

use std::ops::Deref;
use std::sync::{Arc, Mutex};

/// Guards an HTML value until the transport is ready to stream the body.
///
/// A shareable value may be rendered any number of times, so `take` always
/// succeeds. A value that is not safe to access from more than one task may
/// be rendered at most once; the guard holds it in a one-slot container and
/// yields it to exactly one caller, even under concurrent attempts.
///
/// Cloning the guard clones the handle, not the value; all clones observe the
/// same consumed state.
pub struct HtmlGuard<T>(Inner<T>);

enum Inner<T> {
    Shared(Arc<T>),
    Exclusive(Arc<Mutex<Option<T>>>),
}

impl<T> HtmlGuard<T> {
    /// Wrap a value that is safe to render repeatedly, including from
    /// concurrent body producers.
    pub fn shareable(value: T) -> Self
    where
        T: Send + Sync,
    {
        Self(Inner::Shared(Arc::new(value)))
    }

    /// Wrap a value that must be rendered at most once.
    pub fn exclusive(value: T) -> Self {
        Self(Inner::Exclusive(Arc::new(Mutex::new(Some(value)))))
    }

    /// Take the value for rendering.
    ///
    /// Always succeeds for a shareable guard. For an exclusive guard, the
    /// first call wins the slot and every later call gets `None`; a second
    /// take is a caller programming error and is logged as such. With the
    /// `panic-on-reuse` feature it halts instead of returning `None`.
    pub fn take(&self) -> Option<HtmlHandle<T>> {
        match &self.0 {
            Inner::Shared(value) => Some(HtmlHandle::Shared(Arc::clone(value))),
            Inner::Exclusive(slot) => {
                let taken = match slot.lock() {
                    Ok(mut slot) => slot.take(),
                    Err(poisoned) => poisoned.into_inner().take(),
                };
                match taken {
                    Some(value) => Some(HtmlHandle::Owned(value)),
                    None => {
                        tracing::error!("exclusive HTML value consumed more than once");
                        if cfg!(feature = "panic-on-reuse") {
                            panic!("exclusive HTML value consumed more than once");
                        }
                        None
                    }
                }
            }
        }
    }

    /// Whether an exclusive value has already been taken. Always `false` for
    /// a shareable guard.
    pub fn is_consumed(&self) -> bool {
        match &self.0 {
            Inner::Shared(_) => false,
            Inner::Exclusive(slot) => match slot.lock() {
                Ok(slot) => slot.is_none(),
                Err(poisoned) => poisoned.into_inner().is_none(),
            },
        }
    }
}

impl<T> Clone for HtmlGuard<T> {
    fn clone(&self) -> Self {
        match &self.0 {
            Inner::Shared(value) => Self(Inner::Shared(Arc::clone(value))),
            Inner::Exclusive(slot) => Self(Inner::Exclusive(Arc::clone(slot))),
        }
    }
}

/// The value yielded by a successful `HtmlGuard::take`, either a shared
/// handle or the moved-out exclusive value. Dereferences to the value so
/// rendering is uniform over both.
pub enum HtmlHandle<T> {
    /// Shared handle to a shareable value.
    Shared(Arc<T>),
    /// The exclusive value itself, moved out of the guard.
    Owned(T),
}

impl<T> Deref for HtmlHandle<T> {
    type Target = T;

    fn deref(&self) -> &T {
        match self {
            Self::Shared(value) => value,
            Self::Owned(value) => value,
        }
    }
}
