#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! A growable array of integers with explicit capacity management.
//!
//! [`DynamicArray`] keeps its live elements at the front of an owned buffer and
//! doubles that buffer whenever an append or insert would overflow it. On top of
//! the usual access and mutation operations it provides single and multi-step
//! rotations, plain linear search, and a self-organizing search that moves hits
//! one slot toward the front.
//!
//! ```
//! use dynarray_core::{DynamicArray, Error};
//!
//! let mut arr = DynamicArray::new(2);
//! arr.push_back(7);
//! arr.insert(0, 5).unwrap();
//! assert_eq!(arr.as_slice(), &[5, 0, 0, 7]);
//!
//! arr.right_rotate(3);
//! assert_eq!(arr.as_slice(), &[0, 0, 7, 5]);
//!
//! assert_eq!(arr.get(4), Err(Error::IndexOutOfRange { index: 4, len: 4 }));
//! ```

// This works on std and no_std and is harmless.
extern crate alloc;

pub mod dynamic_array;
pub mod error;

pub use dynamic_array::DynamicArray;
pub use error::Error;
