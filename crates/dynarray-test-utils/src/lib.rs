//! Test utilities and fixtures for dynarray development.
//!
//! Element types that make ownership mistakes observable:
//! [`Tracked`] values count their drops in a shared [`DropLedger`], and
//! [`Opaque`] values cannot be cloned at all.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{names, DropLedger, Opaque, Tracked, NAMES};
