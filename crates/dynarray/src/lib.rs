//! A growable, contiguous, random-access array.
//!
//! [`DynamicArray`] owns a single heap buffer of element slots, tracks how
//! many of them hold live values, and doubles the buffer whenever an append
//! finds it full. This crate is the only one in the workspace that may
//! contain `unsafe` code, and all of it lives in `raw.rs`.
//!
//! # Architecture
//!
//! ```text
//! DynamicArray<T> (growth policy, bounds checks, construction)
//! ├── RawStorage<T> (Box<[MaybeUninit<T>]> + initialised-prefix length)
//! ├── ArrayConfig (starting capacity, doubling rule)
//! └── Cursor<'a, T> (random-access position over the live elements)
//! ```
//!
//! # Capacity
//!
//! - **Default:** two slots.
//! - **Sized:** exactly the requested number of slots.
//! - **From a sequence or fill:** exactly the number of elements.
//!
//! Each growth event doubles the capacity, so an array only ever holds its
//! starting capacity times a power of two. An unallocated array (capacity
//! zero, e.g. after [`DynamicArray::take`]) restarts at two slots.
//!
//! # Example
//!
//! ```
//! use dynarray::DynamicArray;
//!
//! let mut names: DynamicArray<&str> = ["jamie", "oliver", "twist"].into();
//! assert_eq!((names.len(), names.capacity()), (3, 3));
//!
//! names.append("dodger");
//! assert_eq!(names.capacity(), 6);
//! assert_eq!(names.at(3), Ok("dodger"));
//! assert!(names.at(4).is_err());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod array;
pub mod config;
pub mod cursor;
pub mod error;
mod raw;

// Public re-exports for the primary API surface.
pub use array::DynamicArray;
pub use config::ArrayConfig;
pub use cursor::Cursor;
pub use error::ArrayError;
