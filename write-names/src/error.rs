//! Errors that occur while parsing, editing and writing

use read::{tables::name::EncodingError, ReadError};
use types::NameKey;

use crate::validate::ValidationReport;

/// An error that occured while working with a name table
#[derive(Debug)]
pub enum Error {
    /// The raw table could not be parsed.
    MalformedTable(ReadError),
    /// String data could not be decoded, or text could not be encoded,
    /// under a record's platform and encoding.
    Encoding {
        key: Option<NameKey>,
        error: EncodingError,
    },
    UnsupportedCharacter(UnsupportedCharacterError),
    /// An edit would have created a second record with this key.
    DuplicateKey(NameKey),
    Overflow(OverflowError),
    RecordNotFound(NameKey),
    /// No language id is known for this tag on the requested platform.
    UnsupportedLanguage(String),
    ValidationFailed(ValidationReport),
}

/// A character that has no representation in a record's encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnsupportedCharacterError {
    pub ch: char,
    pub platform_id: u16,
    pub encoding_id: u16,
    /// The record being encoded, if known.
    pub key: Option<NameKey>,
}

/// The table would not fit in the 16-bit fields of the format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverflowError {
    TooManyRecords(usize),
    TooManyLangTags(usize),
    /// The directory ends beyond the range of the storage offset.
    StorageOffset(usize),
    /// The string storage would exceed 65535 bytes.
    StorageTooLarge(usize),
}

impl Error {
    /// Attach a record key to an error that doesn't have one yet.
    pub(crate) fn with_key(self, key: NameKey) -> Self {
        match self {
            Error::Encoding { key: None, error } => Error::Encoding {
                key: Some(key),
                error,
            },
            Error::UnsupportedCharacter(err) if err.key.is_none() => {
                Error::UnsupportedCharacter(UnsupportedCharacterError {
                    key: Some(key),
                    ..err
                })
            }
            other => other,
        }
    }
}

impl From<ReadError> for Error {
    fn from(value: ReadError) -> Self {
        Error::MalformedTable(value)
    }
}

impl From<ValidationReport> for Error {
    fn from(value: ValidationReport) -> Self {
        Error::ValidationFailed(value)
    }
}

impl From<OverflowError> for Error {
    fn from(value: OverflowError) -> Self {
        Error::Overflow(value)
    }
}

impl From<UnsupportedCharacterError> for Error {
    fn from(value: UnsupportedCharacterError) -> Self {
        Error::UnsupportedCharacter(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MalformedTable(error) => write!(f, "Malformed name table: {error}"),
            Error::Encoding {
                key: Some(key),
                error,
            } => write!(f, "Encoding error in record {key}: {error}"),
            Error::Encoding { key: None, error } => write!(f, "Encoding error: {error}"),
            Error::UnsupportedCharacter(error) => write!(f, "{error}"),
            Error::DuplicateKey(key) => write!(f, "A record with key {key} already exists"),
            Error::Overflow(error) => write!(f, "{error}"),
            Error::RecordNotFound(key) => write!(f, "No record with key {key}"),
            Error::UnsupportedLanguage(tag) => write!(f, "Unsupported language code '{tag}'"),
            Error::ValidationFailed(report) => write!(f, "{report}"),
        }
    }
}

impl std::fmt::Display for UnsupportedCharacterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "char '{}' ({}) not representable in platform {} encoding {}",
            self.ch,
            self.ch.escape_unicode(),
            self.platform_id,
            self.encoding_id
        )?;
        if let Some(key) = self.key {
            write!(f, " (record {key})")?;
        }
        Ok(())
    }
}

impl std::fmt::Display for OverflowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverflowError::TooManyRecords(n) => write!(f, "{n} name records exceed 65535"),
            OverflowError::TooManyLangTags(n) => {
                write!(f, "{n} language-tag records exceed 32768")
            }
            OverflowError::StorageOffset(n) => {
                write!(f, "storage offset {n} does not fit in 16 bits")
            }
            OverflowError::StorageTooLarge(n) => {
                write!(f, "string storage of {n} bytes exceeds 65535")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::MalformedTable(error) => Some(error),
            Error::Encoding { error, .. } => Some(error),
            Error::UnsupportedCharacter(error) => Some(error),
            Error::Overflow(error) => Some(error),
            _ => None,
        }
    }
}
impl std::error::Error for UnsupportedCharacterError {}
impl std::error::Error for OverflowError {}
