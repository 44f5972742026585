//! Editing and writing the OpenType `name` table
//!
//! This crate provides an owned representation of the [naming table][name]
//! that can be created from scratch or parsed from raw bytes, edited, and
//! serialized again.
//!
//! Strings are held as decoded text; they are encoded for their record's
//! platform and encoding only when the table is written. Records in an
//! encoding we don't understand are kept as raw bytes and written back
//! unchanged.
//!
//! # Example
//!
//! ```no_run
//! # fn get_name_table() -> Vec<u8> { Vec::new() }
//! use write_names::{tables::name::Name, types::NameId};
//!
//! let raw: Vec<u8> = get_name_table();
//! let mut name = Name::parse(&raw).expect("malformed name table");
//! name.rename_across_locales(NameId::FAMILY_NAME, "Fancy Sans")
//!     .expect("family name not encodable");
//! let bytes = write_names::dump_table(&name).expect("failed to write name table");
//! ```
//!
//! [name]: https://learn.microsoft.com/en-us/typography/opentype/spec/name

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod codec;
mod error;
mod from_obj;
pub mod tables;
pub mod validate;
mod write;

pub use error::{Error, OverflowError, UnsupportedCharacterError};
pub use from_obj::{FromTableRef, ToOwnedTable};
pub use write::{dump_table, Compile, FontWrite, TableWriter};

/// Public re-export of the read-names crate.
pub extern crate read_names as read;

/// Public re-export of the name-types crate.
pub extern crate name_types as types;
