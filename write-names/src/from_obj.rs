//! Traits for converting from parsed table data to their owned equivalents

use read::tables::name::DecodePolicy;

use crate::error::Error;

/// A trait for owned types that can be built from a parsed table.
///
/// Unlike a plain `From`, the conversion can fail: string data that doesn't
/// decode under the given [`DecodePolicy`] is reported as an error.
pub trait FromTableRef<T>: Sized {
    /// Convert `from` to an instance of `Self`.
    fn from_table_ref(from: &T, policy: DecodePolicy) -> Result<Self, Error>;
}

/// A conversion from a parsed table to its owned equivalent.
///
/// You should not need to implement this manually. Like [`std::convert::Into`],
/// it is provided as a blanket impl when you implement [`FromTableRef<T>`].
pub trait ToOwnedTable<T> {
    /// Convert using the default (strict) decoding policy.
    fn to_owned_table(&self) -> Result<T, Error> {
        self.to_owned_table_with_policy(DecodePolicy::default())
    }

    fn to_owned_table_with_policy(&self, policy: DecodePolicy) -> Result<T, Error>;
}

impl<U, T> ToOwnedTable<U> for T
where
    U: FromTableRef<T>,
{
    fn to_owned_table_with_policy(&self, policy: DecodePolicy) -> Result<U, Error> {
        U::from_table_ref(self, policy)
    }
}
