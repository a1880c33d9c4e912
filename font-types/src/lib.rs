//! Common scalar data types used in the `name` table
//!
//! This crate provides the big-endian plumbing shared by the reader and writer
//! crates, as well as [`NameId`], the identifier that selects which piece of
//! metadata a name record carries.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

#[cfg(all(not(feature = "std"), not(test)))]
#[macro_use]
extern crate core as std;

mod name_id;
mod raw;

#[cfg(all(test, feature = "serde"))]
mod serde_test;

pub use name_id::NameId;
pub use raw::{FixedSize, Scalar};
