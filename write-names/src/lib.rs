//! Writing the OpenType `name` table
//!
//! This crate compiles a set of human-readable strings (family name,
//! copyright notice, and so on) into the binary [naming table][name] of a
//! font file. It is the companion of [`read-names`], whose [`NameStrings`]
//! type it consumes.
//!
//! Every field is written as a Macintosh Roman record (when representable)
//! and as a Windows Unicode BMP record. Tables are checked by a
//! [validation][validate] pass before they are written.
//!
//! # Example
//!
//! ```
//! use write_names::{
//!     read::tables::name::NameStrings,
//!     tables::name::{Name, NameId},
//! };
//!
//! let strings = NameStrings::new()
//!     .with(NameId::FAMILY_NAME, "Test")
//!     .with(NameId::VERSION_STRING, "1.0");
//! let bytes = write_names::dump_table(&Name::new(&strings)).unwrap();
//! assert_eq!(bytes.len(), 54 + 7 + 14);
//! ```
//!
//! [name]: https://learn.microsoft.com/en-us/typography/opentype/spec/name
//! [`read-names`]: https://docs.rs/read-names/
//! [`NameStrings`]: read::tables::name::NameStrings

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod tables;
pub mod validate;
mod write;

pub use write::{dump_table, FontWrite, TableWriter};

/// Public re-export of the read-names crate.
pub extern crate read_names as read;

/// Public re-export of the font-types crate.
pub use read_names::types;
