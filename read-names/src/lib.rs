//! Reading the OpenType `name` table
//!
//! This crate provides memory safe zero-allocation parsing of the [naming
//! table][name]. The [`Name`][tables::name::Name] type is a validated view
//! over the raw table bytes: the header, the record directory, the optional
//! language-tag records and the string storage are all bounds-checked when
//! the view is constructed, so that accessing a record's string data later
//! cannot read past the end of the table.
//!
//! In addition to raw data access, we provide decoding of the string data for
//! the encodings we understand (UTF-16BE and Mac Roman), and lookup tables
//! mapping the platform-specific language ids to [BCP-47] tags.
//!
//! For an owned, editable representation of the table, see the companion
//! `write-names` crate.
//!
//! # Example
//!
//! ```no_run
//! # let name_table_bytes: Vec<u8> = Vec::new();
//! use read_names::{tables::name::Name, FontData, FontRead};
//! let name = Name::read(FontData::new(&name_table_bytes)).expect("malformed name table");
//! for record in name.name_record() {
//!     let string = record.string(name.string_data()).expect("checked during parsing");
//!     println!("{:?}: {string}", record.key());
//! }
//! ```
//!
//! [name]: https://learn.microsoft.com/en-us/typography/opentype/spec/name
//! [BCP-47]: https://www.rfc-editor.org/info/bcp47

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
pub mod language;
mod read;
pub mod tables;

/// Public re-export of the name-types crate.
pub extern crate name_types as types;

pub use font_data::{Cursor, FontData};
pub use read::{FontRead, ReadError};
