//! The [name (Naming)](https://learn.microsoft.com/en-us/typography/opentype/spec/name) table

mod edit;

use log::warn;

use read::{tables::name as read_name, FontData, FontRead};
use types::{FixedSize, LANG_TAG_BASE_ID};

use crate::{
    codec::{self, DecodePolicy, EncodingError},
    error::{Error, OverflowError},
    from_obj::{FromTableRef, ToOwnedTable},
    validate::{Validate, ValidationCtx},
    write::{Compile, FontWrite, PoolEntry, StringPool, TableWriter},
};

pub use types::{NameId, NameKey};

/// The [naming table](https://learn.microsoft.com/en-us/typography/opentype/spec/name)
///
/// Records are kept sorted by [`NameKey`], and no two records share a key.
/// The table is version 1 if it has language-tag records (even an empty
/// list of them) and version 0 otherwise.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "UncheckedName"))]
pub struct Name {
    name_record: Vec<NameRecord>,
    lang_tag_record: Option<Vec<LangTagRecord>>,
}

// deserialized records go through `Name::new` to be sorted and checked
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UncheckedName {
    name_record: Vec<NameRecord>,
    lang_tag_record: Option<Vec<LangTagRecord>>,
}

#[cfg(feature = "serde")]
impl TryFrom<UncheckedName> for Name {
    type Error = Error;

    fn try_from(value: UncheckedName) -> Result<Self, Error> {
        let mut name = Name::new(value.name_record)?;
        name.lang_tag_record = value.lang_tag_record;
        Ok(name)
    }
}

/// A single string in the table.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NameRecord {
    /// Platform ID.
    pub platform_id: u16,
    /// Platform-specific encoding ID.
    pub encoding_id: u16,
    /// Language ID.
    pub language_id: u16,
    /// Name ID.
    pub name_id: NameId,
    pub value: NameValue,
}

/// The contents of a record.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NameValue {
    /// Decoded text, encoded again when the table is written.
    Text(String),
    /// The undecoded bytes of a record in an encoding we don't support.
    ///
    /// These are written back verbatim.
    Opaque(Vec<u8>),
}

/// Part of [Name]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LangTagRecord {
    /// A BCP-47 language tag.
    pub lang_tag: String,
}

impl Name {
    /// Create a table from a set of records.
    ///
    /// The records may be in any order; it is an error for two of them to
    /// have the same key.
    pub fn new(records: impl IntoIterator<Item = NameRecord>) -> Result<Self, Error> {
        let mut name_record = records.into_iter().collect::<Vec<_>>();
        name_record.sort_by_key(NameRecord::key);
        if let Some(pair) = name_record
            .windows(2)
            .find(|pair| pair[0].key() == pair[1].key())
        {
            return Err(Error::DuplicateKey(pair[0].key()));
        }
        Ok(Name {
            name_record,
            lang_tag_record: None,
        })
    }

    /// Parse a raw `name` table, failing on string data that doesn't decode.
    pub fn parse(bytes: &[u8]) -> Result<Self, Error> {
        Self::parse_with_policy(bytes, DecodePolicy::Strict)
    }

    /// Parse a raw `name` table.
    ///
    /// Records in encodings we don't support are kept as [`NameValue::Opaque`]
    /// whatever the policy. If more than one record has the same key, the
    /// first is kept.
    pub fn parse_with_policy(bytes: &[u8], policy: DecodePolicy) -> Result<Self, Error> {
        let table = read_name::Name::read(FontData::new(bytes))?;
        table.to_owned_table_with_policy(policy)
    }

    /// The version this table will be written with.
    pub fn version(&self) -> u16 {
        self.compute_version()
    }

    /// The language-tag records, if any.
    pub fn lang_tags(&self) -> Option<&[LangTagRecord]> {
        self.lang_tag_record.as_deref()
    }

    /// The language tag referenced by a language id of `0x8000` or greater.
    pub fn lang_tag(&self, language_id: u16) -> Option<&str> {
        let index = language_id.checked_sub(LANG_TAG_BASE_ID)? as usize;
        self.lang_tags()?
            .get(index)
            .map(|record| record.lang_tag.as_str())
    }

    /// Serialize the table.
    ///
    /// This is equivalent to calling [`dump_table`][crate::dump_table].
    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        crate::dump_table(self)
    }

    fn compute_storage_offset(&self) -> Result<u16, OverflowError> {
        let count = self.name_record.len();
        if count > u16::MAX as usize {
            return Err(OverflowError::TooManyRecords(count));
        }
        let mut offset = 6 // version, count, storage_offset
            + count * read_name::NameRecord::RAW_BYTE_LEN;
        if let Some(lang_tag_records) = self.lang_tag_record.as_ref() {
            if lang_tag_records.len() > u16::MAX as usize {
                return Err(OverflowError::TooManyLangTags(lang_tag_records.len()));
            }
            offset += u16::RAW_BYTE_LEN
                + lang_tag_records.len() * read_name::LangTagRecord::RAW_BYTE_LEN;
        }
        offset
            .try_into()
            .map_err(|_| OverflowError::StorageOffset(offset))
    }

    fn compute_version(&self) -> u16 {
        self.lang_tag_record.is_some().into()
    }

    fn check_sorted_and_unique_name_records(&self, ctx: &mut ValidationCtx) {
        for pair in self.name_record.windows(2) {
            let (left, right) = (pair[0].key(), pair[1].key());
            if left == right {
                ctx.report(format!("duplicate entry in name_record: '{left}'"));
            } else if left > right {
                ctx.report("name_record array must be sorted");
            }
        }
    }

    fn check_lang_tag_references(&self, ctx: &mut ValidationCtx) {
        let n_tags = self.lang_tags().map(|tags| tags.len()).unwrap_or(0);
        for key in self.name_record.iter().map(NameRecord::key) {
            if key.lang_tag_index().is_some_and(|index| index >= n_tags) {
                ctx.report(format!(
                    "language id 0x{:04X} of record {key} refers to a missing language-tag record",
                    key.language_id
                ));
            }
        }
    }
}

impl NameRecord {
    pub fn new(key: NameKey, value: impl Into<NameValue>) -> Self {
        NameRecord {
            platform_id: key.platform_id,
            encoding_id: key.encoding_id,
            language_id: key.language_id,
            name_id: key.name_id,
            value: value.into(),
        }
    }

    pub fn key(&self) -> NameKey {
        NameKey::new(
            self.platform_id,
            self.encoding_id,
            self.language_id,
            self.name_id,
        )
    }

    /// The decoded text, unless this record is opaque.
    pub fn text(&self) -> Option<&str> {
        self.value.as_str()
    }

    fn validate_string_data(&self, ctx: &mut ValidationCtx) {
        if let NameValue::Text(text) = &self.value {
            if let Err(error) = codec::check_encodable(text, self.platform_id, self.encoding_id) {
                ctx.report(error);
            }
        }
    }
}

impl NameValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            NameValue::Text(text) => Some(text),
            NameValue::Opaque(_) => None,
        }
    }

    pub fn is_opaque(&self) -> bool {
        matches!(self, NameValue::Opaque(_))
    }
}

impl From<String> for NameValue {
    fn from(value: String) -> Self {
        NameValue::Text(value)
    }
}

impl From<&str> for NameValue {
    fn from(value: &str) -> Self {
        NameValue::Text(value.to_owned())
    }
}

impl LangTagRecord {
    pub fn new(lang_tag: impl Into<String>) -> Self {
        LangTagRecord {
            lang_tag: lang_tag.into(),
        }
    }

    // language tags are always UTF-16BE
    fn encode(&self) -> Vec<u8> {
        self.lang_tag
            .encode_utf16()
            .flat_map(|unit| unit.to_be_bytes())
            .collect()
    }
}

impl FromTableRef<read_name::Name<'_>> for Name {
    fn from_table_ref(from: &read_name::Name<'_>, policy: DecodePolicy) -> Result<Self, Error> {
        let data = from.string_data();
        let mut name_record = Vec::with_capacity(from.name_record().len());
        for record in from.name_record() {
            let key = record.key();
            let string = record.string(data)?;
            let value = match string.decode(DecodePolicy::Strict) {
                Ok(text) => NameValue::Text(text),
                Err(EncodingError::UnknownEncoding { .. }) => {
                    warn!("keeping record {key} as raw bytes: unsupported platform/encoding");
                    NameValue::Opaque(string.bytes().to_vec())
                }
                Err(error) if policy == DecodePolicy::Lossy => {
                    warn!("record {key}: {error}, substituting replacement characters");
                    NameValue::Text(string.chars().collect())
                }
                Err(error) => {
                    return Err(Error::Encoding {
                        key: Some(key),
                        error,
                    })
                }
            };
            name_record.push(NameRecord::new(key, value));
        }

        // stable, so the first of any duplicates stays first
        name_record.sort_by_key(NameRecord::key);
        name_record.dedup_by(|later, earlier| {
            let duplicate = later.key() == earlier.key();
            if duplicate {
                warn!("dropping duplicate name record {}", later.key());
            }
            duplicate
        });

        let lang_tag_record = from
            .lang_tag_record()
            .map(|records| {
                records
                    .iter()
                    .map(|record| decode_lang_tag(record, data, policy))
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        Ok(Name {
            name_record,
            lang_tag_record,
        })
    }
}

fn decode_lang_tag(
    record: &read_name::LangTagRecord,
    data: FontData,
    policy: DecodePolicy,
) -> Result<LangTagRecord, Error> {
    let string = record.lang_tag(data)?;
    let lang_tag = string
        .decode(policy)
        .map_err(|error| Error::Encoding { key: None, error })?;
    Ok(LangTagRecord { lang_tag })
}

/// A [`Name`] with all of its strings encoded and placed in storage.
#[derive(Clone, Debug)]
pub struct CompiledName {
    version: u16,
    storage_offset: u16,
    name_record: Vec<(NameKey, PoolEntry)>,
    lang_tag_record: Option<Vec<PoolEntry>>,
    storage: Vec<u8>,
}

impl Compile for Name {
    type Compiled = CompiledName;

    fn compile(&self) -> Result<CompiledName, Error> {
        let storage_offset = self.compute_storage_offset()?;
        let mut records = self.name_record.iter().collect::<Vec<_>>();
        records.sort_by_key(|record| record.key());

        let mut pool = StringPool::default();
        let mut name_record = Vec::with_capacity(records.len());
        for record in records {
            let key = record.key();
            let bytes = match &record.value {
                NameValue::Text(text) => codec::encode(text, key.platform_id, key.encoding_id)
                    .map_err(|error| error.with_key(key))?,
                NameValue::Opaque(bytes) => bytes.clone(),
            };
            name_record.push((key, pool.add(bytes)?));
        }
        let lang_tag_record = self
            .lang_tag_record
            .as_ref()
            .map(|records| {
                records
                    .iter()
                    .map(|record| pool.add(record.encode()))
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        Ok(CompiledName {
            version: self.compute_version(),
            storage_offset,
            name_record,
            lang_tag_record,
            storage: pool.into_data(),
        })
    }
}

impl FontWrite for CompiledName {
    fn write_into(&self, writer: &mut TableWriter) {
        // counts were checked in compute_storage_offset
        self.version.write_into(writer);
        (self.name_record.len() as u16).write_into(writer);
        self.storage_offset.write_into(writer);
        self.name_record.write_into(writer);
        if let Some(lang_tag_record) = &self.lang_tag_record {
            (lang_tag_record.len() as u16).write_into(writer);
            lang_tag_record.write_into(writer);
        }
        writer.write_slice(&self.storage);
    }
}

impl Validate for Name {
    fn validate_impl(&self, ctx: &mut ValidationCtx) {
        ctx.in_table("Name", |ctx| {
            ctx.in_field("name_record", |ctx| {
                self.check_sorted_and_unique_name_records(ctx);
                self.check_lang_tag_references(ctx);
                self.name_record.validate_impl(ctx);
            });
            ctx.in_field("lang_tag_record", |ctx| {
                self.lang_tag_record.validate_impl(ctx);
            });
        })
    }
}

impl Validate for NameRecord {
    fn validate_impl(&self, ctx: &mut ValidationCtx) {
        ctx.in_table("NameRecord", |ctx| {
            ctx.in_field("value", |ctx| self.validate_string_data(ctx));
        })
    }
}

impl Validate for LangTagRecord {
    fn validate_impl(&self, ctx: &mut ValidationCtx) {
        ctx.in_table("LangTagRecord", |ctx| {
            ctx.in_field("lang_tag", |ctx| {
                if self.lang_tag.is_empty() {
                    ctx.report("language tag must not be empty");
                }
            })
        })
    }
}
