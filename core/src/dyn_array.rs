#![allow(unsafe_code)]

//! DynArray: a growable array with explicit occupancy.
//!
//! The first `len` slots of the buffer hold live elements, the rest is spare
//! capacity. There are no sentinel values: a slot past `len` is simply not
//! initialized.
//!
//! Growth happens only when an insertion finds the buffer full, following
//! `0 | 1 -> 2`, then doubling. Capacity never shrinks.

use core::{
    fmt,
    ops::{Index, IndexMut},
    ptr, slice,
};

use crate::error::{ArrayError, Op};
use crate::raw::RawBuf;

pub struct DynArray<T> {
    buf: RawBuf<T>,
    len: usize,
}

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
static_assertions::assert_eq_size!(DynArray<u64>, [usize; 3]);

impl<T> DynArray<T> {
    /// Creates an empty array. Does not allocate.
    pub const fn new() -> Self {
        Self {
            buf: RawBuf::new(),
            len: 0,
        }
    }

    /// Creates an empty array with exactly `capacity` slots allocated.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: RawBuf::with_capacity(capacity),
            len: 0,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buf.cap()
    }

    /// Appends `value` after the last element.
    pub fn append(&mut self, value: T) {
        self.shift_in(self.len, value);
    }

    /// Inserts `value` at the front, moving every element one slot right.
    pub fn add(&mut self, value: T) {
        self.shift_in(0, value);
    }

    /// Inserts `value` at `index`, moving `index..len` one slot right.
    ///
    /// `index == len` is an append. Anything past that fails without touching
    /// the array (and without growing it); the rejected `value` is dropped.
    pub fn insert(&mut self, value: T, index: usize) -> Result<(), ArrayError> {
        if index > self.len {
            return Err(self.rejected(ArrayError::IndexOutOfRange {
                op: Op::Insert,
                index,
                len: self.len,
            }));
        }
        self.shift_in(index, value);
        Ok(())
    }

    /// Removes and returns the first element.
    pub fn delete(&mut self) -> Result<T, ArrayError> {
        self.check_not_empty(Op::Delete)?;
        Ok(self.shift_out(0))
    }

    /// Removes and returns the last element.
    pub fn pop(&mut self) -> Result<T, ArrayError> {
        self.check_not_empty(Op::Pop)?;
        self.len -= 1;
        // SAFETY: slot `len` was live and is now past the end.
        Ok(unsafe { ptr::read(self.buf.ptr().add(self.len)) })
    }

    /// Removes and returns the element at `index`, moving later elements left.
    pub fn remove_one(&mut self, index: usize) -> Result<T, ArrayError> {
        self.check_not_empty(Op::RemoveOne)?;
        if index >= self.len {
            return Err(self.rejected(ArrayError::IndexOutOfRange {
                op: Op::RemoveOne,
                index,
                len: self.len,
            }));
        }
        Ok(self.shift_out(index))
    }

    /// Drops every element. Capacity is kept.
    pub fn clear(&mut self) {
        let live: *mut [T] = self.as_mut_slice();
        // A panicking destructor leaks the rest instead of dropping twice.
        self.len = 0;
        unsafe { ptr::drop_in_place(live) }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the first `len` slots are initialized; the pointer is
        // dangling but aligned when nothing is allocated.
        unsafe { slice::from_raw_parts(self.buf.ptr(), self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }

    fn shift_in(&mut self, index: usize, value: T) {
        debug_assert!(index <= self.len);
        if self.len == self.buf.cap() {
            self.buf.grow(self.len);
        }
        unsafe {
            let slot = self.buf.ptr().add(index);
            if index < self.len {
                ptr::copy(slot, slot.add(1), self.len - index);
            }
            ptr::write(slot, value);
        }
        self.len += 1;
    }

    fn shift_out(&mut self, index: usize) -> T {
        debug_assert!(index < self.len);
        unsafe {
            let slot = self.buf.ptr().add(index);
            let value = ptr::read(slot);
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            self.len -= 1;
            value
        }
    }

    fn check_not_empty(&self, op: Op) -> Result<(), ArrayError> {
        if self.len == 0 {
            return Err(self.rejected(ArrayError::EmptyStructure { op }));
        }
        Ok(())
    }

    fn rejected(&self, error: ArrayError) -> ArrayError {
        tracing::debug!(
            %error,
            len = self.len,
            capacity = self.capacity(),
            "array operation rejected"
        );
        error
    }
}

impl<T> Drop for DynArray<T> {
    fn drop(&mut self) {
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
        // `buf` frees the allocation.
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynArray<T> {
    fn clone(&self) -> Self {
        let mut cloned = Self::with_capacity(self.capacity());
        for value in self.as_slice() {
            cloned.append(value.clone());
        }
        cloned
    }
}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq<U>, U> PartialEq<DynArray<U>> for DynArray<T> {
    fn eq(&self, other: &DynArray<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynArray<T> {}

impl<T: PartialEq<U>, U> PartialEq<[U]> for DynArray<T> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq<U>, U> PartialEq<&[U]> for DynArray<T> {
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for DynArray<T> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == &other[..]
    }
}

impl<T> Index<usize> for DynArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for DynArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T, const N: usize> From<[T; N]> for DynArray<T> {
    fn from(values: [T; N]) -> Self {
        let mut array = Self::new();
        for value in values {
            array.append(value);
        }
        array
    }
}
