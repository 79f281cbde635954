//! Handle traits used by the non-null and equality checks.
//!
//! Equality contracts compare identity: two handles are equal when they
//! point at the same object, never because their pointees compare equal.

use std::ptr::{self, NonNull};
use std::rc::Rc;
use std::sync::Arc;

/// Values that have a null/empty sentinel.
pub trait Nullable {
    fn is_null(&self) -> bool;
}

impl<T> Nullable for Option<T> {
    #[inline]
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> Nullable for *const T {
    #[inline]
    fn is_null(&self) -> bool {
        <*const T>::is_null(*self)
    }
}

impl<T: ?Sized> Nullable for *mut T {
    #[inline]
    fn is_null(&self) -> bool {
        <*mut T>::is_null(*self)
    }
}

impl<T: ?Sized> Nullable for NonNull<T> {
    #[inline]
    fn is_null(&self) -> bool {
        false
    }
}

impl<T: ?Sized> Nullable for &T {
    #[inline]
    fn is_null(&self) -> bool {
        false
    }
}

/// Values whose identity is an address.
///
/// Pointer metadata (slice length, vtable) is ignored. Distinct zero-sized
/// values may share an address and then compare as the same object.
pub trait Identity {
    fn address(&self) -> *const ();

    #[inline]
    fn same_as(&self, other: &Self) -> bool {
        ptr::eq(self.address(), other.address())
    }
}

impl<T: ?Sized> Identity for &T {
    #[inline]
    fn address(&self) -> *const () {
        (*self as *const T).cast()
    }
}

impl<T: ?Sized> Identity for *const T {
    #[inline]
    fn address(&self) -> *const () {
        self.cast()
    }
}

impl<T: ?Sized> Identity for *mut T {
    #[inline]
    fn address(&self) -> *const () {
        self.cast_const().cast()
    }
}

impl<T: ?Sized> Identity for NonNull<T> {
    #[inline]
    fn address(&self) -> *const () {
        self.as_ptr().cast_const().cast()
    }
}

impl<T: ?Sized> Identity for Rc<T> {
    #[inline]
    fn address(&self) -> *const () {
        Rc::as_ptr(self).cast()
    }
}

impl<T: ?Sized> Identity for Arc<T> {
    #[inline]
    fn address(&self) -> *const () {
        Arc::as_ptr(self).cast()
    }
}

/// `None` is the null address, so two `None`s are the same handle.
impl<H: Identity> Identity for Option<H> {
    #[inline]
    fn address(&self) -> *const () {
        self.as_ref().map_or(ptr::null(), Identity::address)
    }
}
