#![allow(unsafe_code)]

//! Backing allocation for [`DynArray`](crate::DynArray).
//!
//! `RawBuf<T>` owns `cap` slots of possibly uninitialized `T`. It never reads,
//! writes or drops elements: which slots are live is tracked by the owner.

use alloc::alloc::{Layout, alloc, dealloc, handle_alloc_error};
use core::{
    marker::PhantomData,
    mem,
    ptr::{self, NonNull},
};

pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

// Same rules as `Vec<T>`: the buffer is uniquely owned.
unsafe impl<T: Send> Send for RawBuf<T> {}
unsafe impl<T: Sync> Sync for RawBuf<T> {}

/// Capacity after one growth step: `0 | 1 -> 2`, otherwise doubled.
pub(crate) fn next_capacity(cap: usize) -> usize {
    match cap {
        0 | 1 => 2,
        _ => cap.checked_mul(2).expect("capacity overflow"),
    }
}

impl<T> RawBuf<T> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    pub(crate) const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _marker: PhantomData,
        }
    }

    pub(crate) fn with_capacity(cap: usize) -> Self {
        let mut buf = Self::new();
        if cap > 0 {
            buf.reallocate(cap, 0);
        }
        buf
    }

    #[inline(always)]
    pub(crate) fn cap(&self) -> usize {
        self.cap
    }

    #[inline(always)]
    pub(crate) fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Moves the first `len` slots into a larger allocation.
    #[cold]
    pub(crate) fn grow(&mut self, len: usize) {
        debug_assert!(len <= self.cap);
        let old_cap = self.cap;
        let new_cap = next_capacity(old_cap);
        self.reallocate(new_cap, len);
        tracing::trace!(
            old_capacity = old_cap,
            new_capacity = new_cap,
            len,
            "grew buffer"
        );
    }

    fn reallocate(&mut self, new_cap: usize, len: usize) {
        debug_assert!(new_cap >= len);
        if Self::IS_ZST {
            self.cap = new_cap;
            return;
        }

        let layout = Self::layout(new_cap);
        let Some(new_ptr) = NonNull::new(unsafe { alloc(layout) }.cast::<T>()) else {
            handle_alloc_error(layout);
        };

        if self.cap > 0 {
            unsafe {
                ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), len);
                dealloc(self.ptr.as_ptr().cast(), Self::layout(self.cap));
            }
        }

        self.ptr = new_ptr;
        self.cap = new_cap;
    }

    fn layout(cap: usize) -> Layout {
        Layout::array::<T>(cap).expect("capacity overflow")
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        if !Self::IS_ZST && self.cap > 0 {
            unsafe { dealloc(self.ptr.as_ptr().cast(), Self::layout(self.cap)) }
        }
    }
}
