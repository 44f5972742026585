//! The [name (Naming)](https://learn.microsoft.com/en-us/typography/opentype/spec/name) table

use std::ops::Range;

use alloc::string::String;

use types::{BigEndian, FixedSize, UnicodeEncodingId, LANG_TAG_BASE_ID};

use crate::{FontData, FontRead, ReadError};

pub use types::{NameId, NameKey};

/// A parsed and validated [naming table](https://learn.microsoft.com/en-us/typography/opentype/spec/name#naming-table-format-1).
///
/// Construction checks that the directory and the language-tag records fit in
/// the data, that the storage offset points at the end of them, and that every
/// string referenced by a record lies inside the string storage.
#[derive(Clone, Copy)]
pub struct Name<'a> {
    data: FontData<'a>,
    version: u16,
    storage_offset: u16,
    name_record: &'a [NameRecord],
    lang_tag_record: Option<&'a [LangTagRecord]>,
}

impl<'a> FontRead<'a> for Name<'a> {
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let version: u16 = cursor.read()?;
        if version > 1 {
            return Err(ReadError::InvalidFormat(version.into()));
        }
        let count: u16 = cursor.read()?;
        let storage_offset: u16 = cursor.read()?;
        let name_record = cursor.read_array::<NameRecord>(count as usize)?;
        let lang_tag_record = if version == 1 {
            let lang_tag_count: u16 = cursor.read()?;
            Some(cursor.read_array::<LangTagRecord>(lang_tag_count as usize)?)
        } else {
            None
        };

        let expected = cursor.position();
        if storage_offset as usize != expected {
            return Err(ReadError::InvalidStorageOffset {
                expected,
                found: storage_offset,
            });
        }

        let table = Name {
            data,
            version,
            storage_offset,
            name_record,
            lang_tag_record,
        };
        let storage_len = table.string_data().len();
        if name_record
            .iter()
            .any(|record| record.string_range().end > storage_len)
        {
            return Err(ReadError::MalformedData(
                "name record string outside string storage",
            ));
        }
        if lang_tag_record
            .unwrap_or_default()
            .iter()
            .any(|record| record.lang_tag_range().end > storage_len)
        {
            return Err(ReadError::MalformedData(
                "language tag string outside string storage",
            ));
        }
        if lang_tag_record
            .unwrap_or_default()
            .iter()
            .any(|record| record.length() == 0)
        {
            return Err(ReadError::MalformedData("empty language tag"));
        }
        let n_tags = lang_tag_record.map_or(0, |records| records.len());
        if name_record
            .iter()
            .filter_map(|record| record.key().lang_tag_index())
            .any(|index| index >= n_tags)
        {
            return Err(ReadError::MalformedData(
                "language id refers to a missing language-tag record",
            ));
        }
        Ok(table)
    }
}

impl<'a> Name<'a> {
    /// Table version number (0 or 1)
    pub fn version(&self) -> u16 {
        self.version
    }

    /// Number of name records.
    pub fn count(&self) -> u16 {
        // read from a u16 field, so this can't truncate
        self.name_record.len() as u16
    }

    /// Offset to start of string storage (from start of table).
    pub fn storage_offset(&self) -> u16 {
        self.storage_offset
    }

    /// The name records where count is the number of records.
    pub fn name_record(&self) -> &'a [NameRecord] {
        self.name_record
    }

    /// Number of language-tag records, if this is a version 1 table.
    pub fn lang_tag_count(&self) -> Option<u16> {
        self.lang_tag_record.map(|records| records.len() as u16)
    }

    /// The language-tag records, if this is a version 1 table.
    pub fn lang_tag_record(&self) -> Option<&'a [LangTagRecord]> {
        self.lang_tag_record
    }

    /// The FontData containing the encoded name strings.
    pub fn string_data(&self) -> FontData<'a> {
        self.data
            .split_off(self.storage_offset as usize)
            .unwrap_or_default()
    }

    /// The raw bytes of the whole table.
    pub fn offset_data(&self) -> FontData<'a> {
        self.data
    }

    /// Returns the language tag referenced by a language id of `0x8000` or
    /// greater, if there is one.
    pub fn language_tag(&self, language_id: u16) -> Option<NameString<'a>> {
        let index = language_id.checked_sub(LANG_TAG_BASE_ID)? as usize;
        self.lang_tag_record?
            .get(index)?
            .lang_tag(self.string_data())
            .ok()
    }

    /// Returns the first record with the given key.
    ///
    /// Records are not required to be sorted on input, so this is a linear search.
    pub fn find(&self, key: NameKey) -> Option<&'a NameRecord> {
        self.name_record.iter().find(|record| record.key() == key)
    }
}

impl std::fmt::Debug for Name<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Name")
            .field("version", &self.version)
            .field("count", &self.count())
            .field("storage_offset", &self.storage_offset)
            .field("lang_tag_count", &self.lang_tag_count())
            .finish()
    }
}

/// Part of [Name]
#[derive(Clone, Copy, Debug, bytemuck::AnyBitPattern)]
#[repr(C, packed)]
pub struct NameRecord {
    /// Platform ID.
    pub platform_id: BigEndian<u16>,
    /// Platform-specific encoding ID.
    pub encoding_id: BigEndian<u16>,
    /// Language ID.
    pub language_id: BigEndian<u16>,
    /// Name ID.
    pub name_id: BigEndian<NameId>,
    /// String length (in bytes).
    pub length: BigEndian<u16>,
    /// String offset from start of storage area (in bytes).
    pub string_offset: BigEndian<u16>,
}

impl FixedSize for NameRecord {
    const RAW_BYTE_LEN: usize = 5 * u16::RAW_BYTE_LEN + NameId::RAW_BYTE_LEN;
}

impl NameRecord {
    pub fn platform_id(&self) -> u16 {
        self.platform_id.get()
    }

    pub fn encoding_id(&self) -> u16 {
        self.encoding_id.get()
    }

    pub fn language_id(&self) -> u16 {
        self.language_id.get()
    }

    pub fn name_id(&self) -> NameId {
        self.name_id.get()
    }

    pub fn length(&self) -> u16 {
        self.length.get()
    }

    pub fn string_offset(&self) -> u16 {
        self.string_offset.get()
    }

    /// The composite key identifying this record.
    pub fn key(&self) -> NameKey {
        NameKey::new(
            self.platform_id(),
            self.encoding_id(),
            self.language_id(),
            self.name_id(),
        )
    }

    /// The encoding of this record's string data.
    pub fn encoding(&self) -> Encoding {
        Encoding::new(self.platform_id(), self.encoding_id())
    }

    fn string_range(&self) -> Range<usize> {
        let start = self.string_offset() as usize;
        start..start + self.length() as usize
    }

    /// Return a type that can decode the string data for this name entry.
    pub fn string<'a>(&self, data: FontData<'a>) -> Result<NameString<'a>, ReadError> {
        let data = data
            .as_bytes()
            .get(self.string_range())
            .ok_or(ReadError::OutOfBounds)?;
        Ok(NameString::new(data, self.platform_id(), self.encoding_id()))
    }

    // reference from fonttools:
    // https://github.com/fonttools/fonttools/blob/c2119229cfb02cdb7c5a63374ef29d3d514259e8/Lib/fontTools/ttLib/tables/_n_a_m_e.py#L509
    pub fn is_unicode(&self) -> bool {
        self.platform_id() == 0
            || (self.platform_id() == 3 && [0, 1, 10].contains(&self.encoding_id()))
    }
}

/// Part of [Name]
#[derive(Clone, Copy, Debug, bytemuck::AnyBitPattern)]
#[repr(C, packed)]
pub struct LangTagRecord {
    /// Language-tag string length (in bytes)
    pub length: BigEndian<u16>,
    /// Language-tag string offset from start of storage area (in bytes).
    pub lang_tag_offset: BigEndian<u16>,
}

impl FixedSize for LangTagRecord {
    const RAW_BYTE_LEN: usize = 2 * u16::RAW_BYTE_LEN;
}

impl LangTagRecord {
    pub fn length(&self) -> u16 {
        self.length.get()
    }

    pub fn lang_tag_offset(&self) -> u16 {
        self.lang_tag_offset.get()
    }

    fn lang_tag_range(&self) -> Range<usize> {
        let start = self.lang_tag_offset() as usize;
        start..start + self.length() as usize
    }

    /// Return a type that can decode the string data for this name entry.
    pub fn lang_tag<'a>(&self, data: FontData<'a>) -> Result<NameString<'a>, ReadError> {
        let data = data
            .as_bytes()
            .get(self.lang_tag_range())
            .ok_or(ReadError::OutOfBounds)?;
        // language tags are always UTF-16BE
        Ok(NameString::new(
            data,
            0,
            UnicodeEncodingId::UNICODE_2_0_FULL,
        ))
    }
}

/// How to handle string data that is not valid in its declared encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecodePolicy {
    /// Return an error.
    #[default]
    Strict,
    /// Substitute U+FFFD REPLACEMENT CHARACTER and carry on.
    Lossy,
}

/// An error decoding string data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingError {
    /// UTF-16 data with an odd number of bytes.
    OddLength { len: usize },
    /// A UTF-16 surrogate without its other half.
    UnpairedSurrogate { unit: u16 },
    /// We don't know how to decode this platform/encoding pair.
    UnknownEncoding { platform_id: u16, encoding_id: u16 },
}

impl std::fmt::Display for EncodingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EncodingError::OddLength { len } => {
                write!(f, "UTF-16 string data has odd length {len}")
            }
            EncodingError::UnpairedSurrogate { unit } => {
                write!(f, "unpaired surrogate 0x{unit:04X} in UTF-16 string data")
            }
            EncodingError::UnknownEncoding {
                platform_id,
                encoding_id,
            } => write!(
                f,
                "no known encoding for platform {platform_id}, encoding {encoding_id}"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EncodingError {}

/// Decode the string data of a record with the given platform and encoding.
///
/// Records with an [`Encoding::Unknown`] encoding always fail, whatever the
/// policy; their bytes should be kept as they are.
pub fn decode(
    bytes: &[u8],
    platform_id: u16,
    encoding_id: u16,
    policy: DecodePolicy,
) -> Result<String, EncodingError> {
    NameString::new(bytes, platform_id, encoding_id).decode(policy)
}

//-- the iteration here is adapted from pinot https://github.com/dfrg/pinot/blob/eff5239018ca50290fb890a84da3dd51505da364/src/name.rs
/// Entry for a name in the naming table.
///
/// This provides an iterator over characters.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct NameString<'a> {
    data: &'a [u8],
    platform_id: u16,
    encoding_id: u16,
    encoding: Encoding,
}

impl<'a> NameString<'a> {
    fn new(data: &'a [u8], platform_id: u16, encoding_id: u16) -> Self {
        NameString {
            data,
            platform_id,
            encoding_id,
            encoding: Encoding::new(platform_id, encoding_id),
        }
    }

    /// The encoded bytes.
    pub fn bytes(&self) -> &'a [u8] {
        self.data
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// An iterator over the `char`s in this name.
    ///
    /// Invalid data is replaced with U+FFFD; data in an unknown encoding
    /// yields nothing.
    pub fn chars(&self) -> CharIter<'a> {
        CharIter {
            data: self.data,
            encoding: self.encoding,
            pos: 0,
        }
    }

    /// Decode the whole string.
    pub fn decode(&self, policy: DecodePolicy) -> Result<String, EncodingError> {
        match (self.encoding, policy) {
            (Encoding::Unknown, _) => Err(EncodingError::UnknownEncoding {
                platform_id: self.platform_id,
                encoding_id: self.encoding_id,
            }),
            (Encoding::Utf16Be, DecodePolicy::Strict) => decode_utf16_strict(self.data),
            // mac roman maps every byte, so it can't fail
            (Encoding::MacRoman, _) | (_, DecodePolicy::Lossy) => Ok(self.chars().collect()),
        }
    }
}

fn decode_utf16_strict(data: &[u8]) -> Result<String, EncodingError> {
    if data.len() % 2 != 0 {
        return Err(EncodingError::OddLength { len: data.len() });
    }
    let units = data
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]));
    char::decode_utf16(units)
        .map(|c| {
            c.map_err(|e| EncodingError::UnpairedSurrogate {
                unit: e.unpaired_surrogate(),
            })
        })
        .collect()
}

impl<'a> IntoIterator for NameString<'a> {
    type Item = char;
    type IntoIter = CharIter<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.chars()
    }
}

impl std::fmt::Display for NameString<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for c in self.chars() {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for NameString<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "\"{self}\"")
    }
}

/// An iterator over the chars of a name record.
#[derive(Clone)]
pub struct CharIter<'a> {
    data: &'a [u8],
    encoding: Encoding,
    pos: usize,
}

impl CharIter<'_> {
    fn peek_u16(&self) -> Option<u16> {
        self.data
            .get(self.pos..self.pos + 2)
            .map(|x| u16::from_be_bytes([x[0], x[1]]))
    }

    fn bump_u16(&mut self) -> Option<u16> {
        let result = self.peek_u16()?;
        self.pos += 2;
        Some(result)
    }

    fn bump_u8(&mut self) -> Option<u8> {
        let result = self.data.get(self.pos)?;
        self.pos += 1;
        Some(*result)
    }
}

impl Iterator for CharIter<'_> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.data.len() {
            return None;
        }
        let rep = core::char::REPLACEMENT_CHARACTER;
        let raw_c = match self.encoding {
            Encoding::Utf16Be => {
                let Some(c1) = self.bump_u16() else {
                    // trailing odd byte
                    self.pos = self.data.len();
                    return Some(rep);
                };
                match c1 {
                    0xD800..=0xDBFF => match self.peek_u16() {
                        Some(c2 @ 0xDC00..=0xDFFF) => {
                            self.pos += 2;
                            ((c1 as u32 & 0x3FF) << 10) + (c2 as u32 & 0x3FF) + 0x10000
                        }
                        // leave the next unit for the next call
                        _ => return Some(rep),
                    },
                    0xDC00..=0xDFFF => return Some(rep),
                    _ => c1 as u32,
                }
            }
            Encoding::MacRoman => {
                let c = self.bump_u8()?;
                return Some(MacRomanMapping.decode(c));
            }
            Encoding::Unknown => return None,
        };
        Some(char::from_u32(raw_c).unwrap_or(rep))
    }
}

/// The encoding used by the name table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Encoding {
    Utf16Be,
    MacRoman,
    Unknown,
}

impl Encoding {
    /// Determine the coding from the platform and encoding id.
    pub fn new(platform_id: u16, encoding_id: u16) -> Encoding {
        match (platform_id, encoding_id) {
            (0, _) => Encoding::Utf16Be,
            (1, 0) => Encoding::MacRoman,
            (3, 0) => Encoding::Utf16Be,
            (3, 1) => Encoding::Utf16Be,
            (3, 10) => Encoding::Utf16Be,
            _ => Encoding::Unknown,
        }
    }

    /// `true` if we can decode and encode text in this encoding.
    pub fn is_known(self) -> bool {
        self != Encoding::Unknown
    }
}

/// A helper for encoding and decoding Mac OS Roman encoded strings.
pub struct MacRomanMapping;

impl MacRomanMapping {
    const START_REMAP: u8 = 128;
    /// Convert from a mac-roman encoded byte to a `char`
    pub fn decode(self, raw: u8) -> char {
        if raw < Self::START_REMAP {
            raw as char
        } else {
            let idx = raw - Self::START_REMAP;
            char::from_u32(MAC_ROMAN_DECODE[idx as usize] as u32)
                .unwrap_or(core::char::REPLACEMENT_CHARACTER)
        }
    }

    /// convert from a char to a mac-roman encoded byte, if the char is in the mac-roman charset.
    pub fn encode(self, c: char) -> Option<u8> {
        let raw_c = c as u32;
        let raw_c: u16 = raw_c.try_into().ok()?;
        if raw_c < Self::START_REMAP as u16 {
            Some(raw_c as u8)
        } else {
            match MAC_ROMAN_ENCODE.binary_search_by_key(&raw_c, |(unic, _)| *unic) {
                Ok(idx) => Some(MAC_ROMAN_ENCODE[idx].1),
                Err(_) => None,
            }
        }
    }
}

/// a lookup table for the Mac Roman encoding. this matches the values 128..=255
/// to specific unicode values.
#[rustfmt::skip]
static MAC_ROMAN_DECODE: [u16; 128] = [
    196, 197, 199, 201, 209, 214, 220, 225, 224, 226, 228, 227, 229, 231, 233,
    232, 234, 235, 237, 236, 238, 239, 241, 243, 242, 244, 246, 245, 250, 249,
    251, 252, 8224, 176, 162, 163, 167, 8226, 182, 223, 174, 169, 8482, 180,
    168, 8800, 198, 216, 8734, 177, 8804, 8805, 165, 181, 8706, 8721, 8719,
    960, 8747, 170, 186, 937, 230, 248, 191, 161, 172, 8730, 402, 8776, 8710,
    171, 187, 8230, 160, 192, 195, 213, 338, 339, 8211, 8212, 8220, 8221, 8216,
    8217, 247, 9674, 255, 376, 8260, 8364, 8249, 8250, 64257, 64258, 8225, 183,
    8218, 8222, 8240, 194, 202, 193, 203, 200, 205, 206, 207, 204, 211, 212,
    63743, 210, 218, 219, 217, 305, 710, 732, 175, 728, 729, 730, 184, 733,
    731, 711,
];

/// A lookup pairing (sorted) unicode values to Mac Roman values
#[rustfmt::skip]
static MAC_ROMAN_ENCODE: [(u16, u8); 128] = [
    (160, 202), (161, 193), (162, 162), (163, 163),
    (165, 180), (167, 164), (168, 172), (169, 169),
    (170, 187), (171, 199), (172, 194), (174, 168),
    (175, 248), (176, 161), (177, 177), (180, 171),
    (181, 181), (182, 166), (183, 225), (184, 252),
    (186, 188), (187, 200), (191, 192), (192, 203),
    (193, 231), (194, 229), (195, 204), (196, 128),
    (197, 129), (198, 174), (199, 130), (200, 233),
    (201, 131), (202, 230), (203, 232), (204, 237),
    (205, 234), (206, 235), (207, 236), (209, 132),
    (210, 241), (211, 238), (212, 239), (213, 205),
    (214, 133), (216, 175), (217, 244), (218, 242),
    (219, 243), (220, 134), (223, 167), (224, 136),
    (225, 135), (226, 137), (227, 139), (228, 138),
    (229, 140), (230, 190), (231, 141), (232, 143),
    (233, 142), (234, 144), (235, 145), (236, 147),
    (237, 146), (238, 148), (239, 149), (241, 150),
    (242, 152), (243, 151), (244, 153), (245, 155),
    (246, 154), (247, 214), (248, 191), (249, 157),
    (250, 156), (251, 158), (252, 159), (255, 216),
    (305, 245), (338, 206), (339, 207), (376, 217),
    (402, 196), (710, 246), (711, 255), (728, 249),
    (729, 250), (730, 251), (731, 254), (732, 247),
    (733, 253), (937, 189), (960, 185), (8211, 208),
    (8212, 209), (8216, 212), (8217, 213), (8218, 226),
    (8220, 210), (8221, 211), (8222, 227), (8224, 160),
    (8225, 224), (8226, 165), (8230, 201), (8240, 228),
    (8249, 220), (8250, 221), (8260, 218), (8364, 219),
    (8482, 170), (8706, 182), (8710, 198), (8719, 184),
    (8721, 183), (8730, 195), (8734, 176), (8747, 186),
    (8776, 197), (8800, 173), (8804, 178), (8805, 179),
    (9674, 215), (63743, 240), (64257, 222), (64258, 223),
];

#[cfg(test)]
mod tests {
    use name_test_data::{bebuffer::BeBuffer, name as test_data};
    use pretty_assertions::assert_eq;
    use rand::{Rng, SeedableRng};
    use rstest::rstest;

    use super::*;

    fn read(bytes: &[u8]) -> Result<Name, ReadError> {
        Name::read(FontData::new(bytes))
    }

    fn decoded(table: &Name, policy: DecodePolicy) -> Vec<(NameKey, Result<String, EncodingError>)> {
        table
            .name_record()
            .iter()
            .map(|rec| {
                let string = rec.string(table.string_data()).unwrap();
                (rec.key(), string.decode(policy))
            })
            .collect()
    }

    #[test]
    fn format_0() {
        let table = read(test_data::FORMAT_0).unwrap();
        assert_eq!(table.version(), 0);
        assert_eq!(table.count(), 7);
        assert_eq!(table.storage_offset(), 90);
        assert!(table.lang_tag_record().is_none());

        let strings = decoded(&table, DecodePolicy::Strict)
            .into_iter()
            .map(|(key, s)| (key, s.unwrap()))
            .collect::<Vec<_>>();
        assert_eq!(
            strings[2],
            (
                NameKey::new(1, 0, 0, NameId::FULL_NAME),
                "Fancy Café".to_string()
            )
        );
        assert_eq!(
            strings[5],
            (
                NameKey::new(3, 1, 0x409, NameId::FULL_NAME),
                "Fancy Café".to_string()
            )
        );
        assert_eq!(strings[6].1, "Normal");
        // mac roman is one byte per char
        assert_eq!(table.name_record()[2].length(), 10);
        assert_eq!(table.name_record()[5].length(), 20);
    }

    #[test]
    fn format_1_lang_tags() {
        let table = read(test_data::FORMAT_1).unwrap();
        assert_eq!(table.version(), 1);
        assert_eq!(table.lang_tag_count(), Some(1));
        let records = table.name_record();
        assert_eq!(records[0].language_id(), 0x8000);
        assert_eq!(records[0].string_offset(), records[1].string_offset());
        assert_eq!(
            table.language_tag(records[0].language_id()).unwrap().to_string(),
            "de-CH"
        );
        assert!(table.language_tag(0x8001).is_none());
        assert!(table.language_tag(0x0409).is_none());
    }

    #[test]
    fn unknown_encoding_is_kept() {
        let table = read(test_data::UNKNOWN_ENCODING).unwrap();
        let sjis = &table.name_record()[1];
        assert_eq!(sjis.encoding(), Encoding::Unknown);
        let string = sjis.string(table.string_data()).unwrap();
        assert_eq!(string.bytes(), &[0x83, 0x74, 0x83, 0x40, 0x83, 0x93]);
        for policy in [DecodePolicy::Strict, DecodePolicy::Lossy] {
            assert_eq!(
                string.decode(policy),
                Err(EncodingError::UnknownEncoding {
                    platform_id: 3,
                    encoding_id: 2
                })
            );
        }
        assert_eq!(string.chars().count(), 0);

        let utf16 = table.name_record()[0].string(table.string_data()).unwrap();
        assert_eq!(utf16.decode(DecodePolicy::Strict).unwrap(), "ファン");
    }

    #[test]
    fn unpaired_surrogate_policy() {
        let table = read(test_data::UNPAIRED_SURROGATE).unwrap();
        let strings = decoded(&table, DecodePolicy::Strict);
        assert_eq!(
            strings[0].1,
            Err(EncodingError::UnpairedSurrogate { unit: 0xD800 })
        );
        let strings = decoded(&table, DecodePolicy::Lossy);
        assert_eq!(strings[0].1.as_deref(), Ok("A\u{FFFD}B"));
    }

    #[test]
    fn odd_length_utf16() {
        let bytes = [0x00, 0x41, 0x00];
        assert_eq!(
            decode(&bytes, 3, 1, DecodePolicy::Strict),
            Err(EncodingError::OddLength { len: 3 })
        );
        assert_eq!(
            decode(&bytes, 3, 1, DecodePolicy::Lossy).unwrap(),
            "A\u{FFFD}"
        );
    }

    #[test]
    fn surrogate_pairs() {
        // U+1F600 GRINNING FACE
        let bytes = [0xD8, 0x3D, 0xDE, 0x00, 0x00, 0x21];
        assert_eq!(decode(&bytes, 0, 4, DecodePolicy::Strict).unwrap(), "😀!");
        // low surrogate first
        let bytes = [0xDE, 0x00, 0xD8, 0x3D];
        assert_eq!(
            decode(&bytes, 3, 10, DecodePolicy::Strict),
            Err(EncodingError::UnpairedSurrogate { unit: 0xDE00 })
        );
        assert_eq!(
            decode(&bytes, 3, 10, DecodePolicy::Lossy).unwrap(),
            "\u{FFFD}\u{FFFD}"
        );
    }

    #[test]
    fn bad_version() {
        let data = BeBuffer::new().extend([2u16, 0, 6]);
        assert_eq!(read(&data).unwrap_err(), ReadError::InvalidFormat(2));
    }

    #[test]
    fn truncated_header() {
        let data = BeBuffer::new().extend([0u16, 0]);
        assert_eq!(read(&data).unwrap_err(), ReadError::OutOfBounds);
    }

    #[test]
    fn count_exceeds_data() {
        // claims 100 records, has one
        let data = BeBuffer::new()
            .extend([0u16, 100, 1206])
            .extend([3u16, 1, 0x409, 1, 2, 0])
            .utf16("a");
        assert_eq!(read(&data).unwrap_err(), ReadError::OutOfBounds);

        // lang tag count too large
        let data = BeBuffer::new()
            .extend([1u16, 0, 8])
            .push(500u16)
            .utf16("en");
        assert_eq!(read(&data).unwrap_err(), ReadError::OutOfBounds);
    }

    #[test]
    fn storage_offset_must_follow_directory() {
        let data = BeBuffer::new()
            .extend([0u16, 1, 20])
            .extend([3u16, 1, 0x409, 1, 2, 0])
            .extend([0u16])
            .utf16("a");
        assert_eq!(
            read(&data).unwrap_err(),
            ReadError::InvalidStorageOffset {
                expected: 18,
                found: 20
            }
        );
    }

    #[test]
    fn string_outside_storage() {
        let data = BeBuffer::new()
            .extend([0u16, 1, 18])
            .extend([3u16, 1, 0x409, 1, 4, 0])
            .utf16("a");
        assert!(matches!(
            read(&data).unwrap_err(),
            ReadError::MalformedData(_)
        ));

        let data = BeBuffer::new()
            .extend([1u16, 0, 12])
            .extend([1u16, 2, 2])
            .utf16("a");
        assert!(matches!(
            read(&data).unwrap_err(),
            ReadError::MalformedData(_)
        ));
    }

    #[test]
    fn dangling_lang_tag_reference() {
        // version 0 has no language tags at all
        let data = BeBuffer::new()
            .extend([0u16, 1, 18])
            .extend([3u16, 1, 0x8000, 1, 2, 0])
            .utf16("A");
        assert_eq!(
            read(&data).unwrap_err(),
            ReadError::MalformedData("language id refers to a missing language-tag record")
        );

        // one tag, so 0x8001 is out of range
        let data = BeBuffer::new()
            .extend([1u16, 1, 24])
            .extend([0u16, 4, 0x8001, 1, 2, 0])
            .extend([1u16, 4, 2])
            .utf16("Aen");
        assert_eq!(
            read(&data).unwrap_err(),
            ReadError::MalformedData("language id refers to a missing language-tag record")
        );
    }

    #[test]
    fn empty_lang_tag() {
        let data = BeBuffer::new().extend([1u16, 0, 12, 1, 0, 0]);
        assert_eq!(
            read(&data).unwrap_err(),
            ReadError::MalformedData("empty language tag")
        );
    }

    #[test]
    fn empty_table() {
        let data = BeBuffer::new().extend([0u16, 0, 6]);
        let table = read(&data).unwrap();
        assert_eq!(table.count(), 0);
        assert!(table.string_data().is_empty());
    }

    #[test]
    fn find_record() {
        let table = read(test_data::FORMAT_0).unwrap();
        let key = NameKey::new(3, 1, 0x40C, NameId::SUBFAMILY_NAME);
        let record = table.find(key).unwrap();
        assert_eq!(record.string(table.string_data()).unwrap().to_string(), "Normal");
        assert!(table.find(key.with_language(0x407)).is_none());
    }

    #[test]
    fn random_bytes_never_panic() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(0x6e616d65);
        for _ in 0..2000 {
            let len = rng.gen_range(0..64);
            let mut bytes: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
            // keep the header plausible so we get past the version check
            if bytes.len() >= 2 {
                bytes[0] = 0;
                bytes[1] &= 1;
            }
            if let Ok(table) = read(&bytes) {
                for record in table.name_record() {
                    let string = record.string(table.string_data()).unwrap();
                    let _ = string.decode(DecodePolicy::Lossy);
                }
            }
        }
    }

    #[rstest]
    #[case(0, 0, Encoding::Utf16Be)]
    #[case(0, 6, Encoding::Utf16Be)]
    #[case(1, 0, Encoding::MacRoman)]
    #[case(1, 1, Encoding::Unknown)]
    #[case(2, 1, Encoding::Unknown)]
    #[case(3, 0, Encoding::Utf16Be)]
    #[case(3, 1, Encoding::Utf16Be)]
    #[case(3, 2, Encoding::Unknown)]
    #[case(3, 10, Encoding::Utf16Be)]
    #[case(4, 0, Encoding::Unknown)]
    fn encoding_for_platform(#[case] platform: u16, #[case] encoding: u16, #[case] expected: Encoding) {
        assert_eq!(Encoding::new(platform, encoding), expected);
    }

    #[test]
    fn mac_roman() {
        static INPUT: &str = "Joachim Müller-Lancé";
        for c in INPUT.chars() {
            let enc = MacRomanMapping.encode(c).unwrap();
            assert_eq!(MacRomanMapping.decode(enc), c);
        }
        assert_eq!(MacRomanMapping.encode('€'), Some(0xDB));
        assert_eq!(MacRomanMapping.encode('Ł'), None);
    }

    #[test]
    fn mac_roman_tables_agree() {
        for byte in 0..=255u8 {
            let c = MacRomanMapping.decode(byte);
            assert_eq!(MacRomanMapping.encode(c), Some(byte), "{byte}");
        }
    }

    #[test]
    fn lone_surrogate_at_end() {
        let chars = CharIter {
            // DEVANAGARI LETTER SHORT A (U+0904), unpaired high surrogate (0xD800)
            data: &[0x09, 0x04, 0xD8, 0x00],
            encoding: Encoding::Utf16Be,
            pos: 0,
        };
        assert!(chars.eq(['ऄ', std::char::REPLACEMENT_CHARACTER].into_iter()))
    }
}
