#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! A growable array with explicit occupancy and fallible removal.
//!
//! [`DynArray`] keeps its live elements in the leading slots of a single
//! allocation and grows by doubling when an insertion finds it full. Removal
//! operations return [`ArrayError`] instead of panicking when the array is
//! empty or the index is out of range.

// This works on std and no_std and is harmless.
extern crate alloc;

mod dyn_array;
mod error;
mod raw;


pub use dyn_array::DynArray;
pub use error::{ArrayError, Op};

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    ///
    /// # Example
    /// ```ignore
    /// #[test]
    /// fn test_grow() {
    ///     test_utils::init_test_logging();
    ///     // ... your test code
    /// }
    /// ```
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
            )
            .with_test_writer()
            .try_init();
    }
}
