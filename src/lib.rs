//! dynarr - a growable array with explicit occupancy
//!
//! # Overview
//!
//! [`DynArray`] stores its elements in the leading slots of one allocation
//! and doubles that allocation when an insertion finds it full. Removals and
//! positional operations are fallible: instead of panicking they return an
//! [`ArrayError`] and leave the array untouched.
//!
//! # Quick Start
//!
//! ```
//! use dynarr::{ArrayError, DynArray, Op};
//!
//! let mut list = DynArray::new();
//! list.append(1);
//! list.append(2);
//! list.append(3);
//! assert_eq!((list.len(), list.capacity()), (3, 4));
//!
//! // Front and positional inserts shift the rest to the right
//! list.add(0);
//! list.insert(99, 2).unwrap();
//! assert_eq!(list, [0, 1, 99, 2, 3]);
//!
//! // Removals hand the element back
//! assert_eq!(list.remove_one(2), Ok(99));
//! assert_eq!(list.delete(), Ok(0));
//! assert_eq!(list.pop(), Ok(3));
//! assert_eq!(list, [1, 2]);
//!
//! // Invalid operations are reported, not ignored
//! let mut empty: DynArray<i32> = DynArray::new();
//! assert_eq!(empty.pop(), Err(ArrayError::EmptyStructure { op: Op::Pop }));
//! ```
//!
//! # Bounds
//!
//! Insertion positions range over `0..=len` (inserting at `len` appends);
//! positions of existing elements range over `0..len`.

// Re-export public API from dynarr_core
pub use dynarr_core::{ArrayError, DynArray, Op};
