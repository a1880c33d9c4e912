//! Reading the OpenType `name` table
//!
//! This crate decodes the [naming table][name] of a font file into a map of
//! human-readable strings, keyed by what each string describes (family name,
//! copyright notice, and so on).
//!
//! Parsing is memory safe and fully bounds-checked: malformed input produces
//! a [`ReadError`], never a panic.
//!
//! Only the Windows, Unicode BMP, US English records are decoded. Other
//! platforms and languages are skipped.
//!
//! # Related projects
//!
//! - [`write-names`] is a companion crate for compiling a `name` table from a
//!   set of strings
//!
//! # Example
//!
//! ```no_run
//! # let name_table_bytes: &[u8] = &[];
//! use read_names::{tables::name::Name, types::NameId, FontData, FontRead};
//! let name = Name::read(FontData::new(name_table_bytes)).expect("malformed table");
//! if let Some(family) = name.get(NameId::FAMILY_NAME) {
//!     println!("family: {family}");
//! }
//! ```
//!
//! [name]: https://learn.microsoft.com/en-us/typography/opentype/spec/name
//! [`write-names`]: https://docs.rs/write-names/

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

#[cfg(all(not(feature = "std"), not(test)))]
#[macro_use]
extern crate core as std;

extern crate alloc;

mod font_data;
mod read;
pub mod tables;

#[cfg(any(test, feature = "test_helpers"))]
pub mod test_helpers;

/// Public re-export of the font-types crate.
pub extern crate font_types as types;

pub use font_data::FontData;
pub use read::{FontRead, ReadError};
