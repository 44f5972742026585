//! Common scalar and key types used when working with the OpenType
//! [name table][name].
//!
//! [name]: https://learn.microsoft.com/en-us/typography/opentype/spec/name

#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

#[cfg(all(not(feature = "std"), not(test)))]
#[macro_use]
extern crate core as std;

mod name_id;
mod name_key;
mod platform;
mod raw;

#[cfg(all(test, feature = "serde"))]
mod serde_test;

pub use name_id::NameId;
pub use name_key::NameKey;
pub use platform::{MacEncodingId, PlatformId, UnicodeEncodingId, WindowsEncodingId};
pub use raw::{BigEndian, FixedSize, Scalar};

/// The base language id for entries that reference a language-tag record.
///
/// A language id at or above this value is an index (offset by this base)
/// into the language-tag records of a version 1 name table.
pub const LANG_TAG_BASE_ID: u16 = 0x8000;
