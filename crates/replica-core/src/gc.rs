//! Heap handles
//!
//! Every reference-typed value lives behind a [`GcRef`]. Handles are cheap to
//! clone and compare by address, which is what the copy engine uses to tell
//! "the same object reached twice" apart from "two equal objects".

use std::fmt;
use std::sync::Arc;

/// Handle to a heap-allocated value
///
/// This is a reference-counted handle that keeps objects alive.
/// Equality between handles is identity, never structural.
pub struct GcRef<T: ?Sized> {
    value: Arc<T>,
}

impl<T> GcRef<T> {
    /// Allocate a new heap value
    pub fn new(value: T) -> Self {
        Self {
            value: Arc::new(value),
        }
    }
}

impl<T: ?Sized> GcRef<T> {
    /// Wrap an existing Arc (used for trait objects)
    pub fn from_arc(value: Arc<T>) -> Self {
        Self { value }
    }

    /// Address of the allocation, with any pointer metadata dropped
    pub fn as_ptr(&self) -> *const () {
        Arc::as_ptr(&self.value) as *const ()
    }

    /// Stable identity of the allocation for the lifetime of this handle
    pub fn id(&self) -> usize {
        self.as_ptr() as usize
    }

    /// Check whether two handles point at the same allocation
    pub fn ptr_eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.as_ptr(), other.as_ptr())
    }

    /// Number of live handles to this allocation
    pub fn strong_count(&self) -> usize {
        Arc::strong_count(&self.value)
    }
}

impl<T: ?Sized> Clone for GcRef<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
        }
    }
}

impl<T: ?Sized> std::ops::Deref for GcRef<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for GcRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GcRef({:p}, {:?})", self.as_ptr(), &*self.value)
    }
}
