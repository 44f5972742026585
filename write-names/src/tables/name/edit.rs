//! Querying and editing records.
//!
//! Every edit either applies completely or returns an error and leaves the
//! table as it was.

use log::debug;

use read::language::resolve_language;
use types::{NameId, NameKey, PlatformId, UnicodeEncodingId, LANG_TAG_BASE_ID};

use super::{LangTagRecord, Name, NameRecord, NameValue};
use crate::{
    codec,
    error::{Error, OverflowError},
};

impl Name {
    fn position(&self, key: NameKey) -> Result<usize, usize> {
        self.name_record
            .binary_search_by_key(&key, NameRecord::key)
    }

    /// The number of records.
    pub fn len(&self) -> usize {
        self.name_record.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name_record.is_empty()
    }

    /// All records, sorted by key.
    pub fn records(&self) -> &[NameRecord] {
        &self.name_record
    }

    /// All records for a given name id, on any platform and in any language.
    pub fn records_for(&self, name_id: NameId) -> impl Iterator<Item = &NameRecord> + '_ {
        self.name_record
            .iter()
            .filter(move |record| record.name_id == name_id)
    }

    pub fn get(&self, key: NameKey) -> Option<&NameValue> {
        self.position(key)
            .ok()
            .map(|ix| &self.name_record[ix].value)
    }

    /// The text of the record with this key.
    ///
    /// Unlike [`get`][Self::get] this fails if the record is missing, or if
    /// it is opaque.
    pub fn string(&self, key: NameKey) -> Result<&str, Error> {
        match self.get(key) {
            Some(NameValue::Text(text)) => Ok(text),
            Some(NameValue::Opaque(_)) => Err(Error::Encoding {
                key: Some(key),
                error: codec::EncodingError::UnknownEncoding {
                    platform_id: key.platform_id,
                    encoding_id: key.encoding_id,
                },
            }),
            None => Err(Error::RecordNotFound(key)),
        }
    }

    /// Insert or replace the record at `key`, returning the previous value.
    ///
    /// The text must be encodable for the key's platform and encoding.
    pub fn set(
        &mut self,
        key: NameKey,
        text: impl Into<String>,
    ) -> Result<Option<NameValue>, Error> {
        let text = text.into();
        codec::check_encodable(&text, key.platform_id, key.encoding_id)
            .map_err(|error| error.with_key(key))?;
        Ok(self.insert(key, NameValue::Text(text)))
    }

    /// Insert or replace the record at `key` with raw, already encoded bytes.
    ///
    /// The bytes are written as they are, whatever the key's encoding.
    pub fn set_raw(&mut self, key: NameKey, bytes: Vec<u8>) -> Option<NameValue> {
        self.insert(key, NameValue::Opaque(bytes))
    }

    fn insert(&mut self, key: NameKey, value: NameValue) -> Option<NameValue> {
        match self.position(key) {
            Ok(ix) => Some(std::mem::replace(&mut self.name_record[ix].value, value)),
            Err(ix) => {
                self.name_record.insert(ix, NameRecord::new(key, value));
                None
            }
        }
    }

    /// Remove the record at `key`, if there is one.
    pub fn remove(&mut self, key: NameKey) -> Option<NameValue> {
        let ix = self.position(key).ok()?;
        Some(self.name_record.remove(ix).value)
    }

    /// Set the text of every existing record with this name id.
    ///
    /// Each record keeps its platform, encoding and language; no records are
    /// added. If the text can't be encoded for any one of them (including
    /// records in an unsupported encoding) nothing is changed.
    ///
    /// Returns the number of records updated.
    pub fn rename_across_locales(&mut self, name_id: NameId, text: &str) -> Result<usize, Error> {
        let mut staged = Vec::new();
        for (ix, record) in self.name_record.iter().enumerate() {
            if record.name_id != name_id {
                continue;
            }
            let key = record.key();
            codec::check_encodable(text, key.platform_id, key.encoding_id)
                .map_err(|error| error.with_key(key))?;
            staged.push(ix);
        }
        for ix in &staged {
            self.name_record[*ix].value = NameValue::Text(text.to_owned());
        }
        debug!(
            "set {} records with name id {name_id} to '{text}'",
            staged.len()
        );
        Ok(staged.len())
    }

    /// Add a copy of the record at `source`, in another language.
    ///
    /// The new record has the platform, encoding and name id of the source
    /// and the given text. Fails if the source doesn't exist, or if a record
    /// already exists for the target language; use [`set`][Self::set] to
    /// replace a record.
    pub fn add_locale_variant(
        &mut self,
        source: NameKey,
        target_language: u16,
        text: impl Into<String>,
    ) -> Result<NameKey, Error> {
        if self.position(source).is_err() {
            return Err(Error::RecordNotFound(source));
        }
        let target = source.with_language(target_language);
        let ix = match self.position(target) {
            Ok(_) => return Err(Error::DuplicateKey(target)),
            Err(ix) => ix,
        };
        let text = text.into();
        codec::check_encodable(&text, target.platform_id, target.encoding_id)
            .map_err(|error| error.with_key(target))?;
        self.name_record
            .insert(ix, NameRecord::new(target, NameValue::Text(text)));
        Ok(target)
    }

    /// Set a name for a language given as a BCP-47 tag.
    ///
    /// On the Windows and Macintosh platforms the tag is mapped to the
    /// platform's language id. On the Unicode platform the tag is stored as
    /// a language-tag record, which makes this a version 1 table.
    ///
    /// Returns the key of the record that was set.
    pub fn set_for_language(
        &mut self,
        tag: &str,
        platform: PlatformId,
        name_id: NameId,
        text: &str,
    ) -> Result<NameKey, Error> {
        let key = match platform {
            PlatformId::Unicode => {
                let encoding_id = if text.chars().all(|c| (c as u32) <= 0xFFFF) {
                    UnicodeEncodingId::UNICODE_2_0_BMP
                } else {
                    UnicodeEncodingId::UNICODE_2_0_FULL
                };
                let key = NameKey::new(platform.to_u16(), encoding_id, 0, name_id);
                // check first so a failure doesn't leave a new tag behind
                codec::check_encodable(text, key.platform_id, key.encoding_id)
                    .map_err(|error| error.with_key(key))?;
                key.with_language(self.lang_tag_language_id(tag)?)
            }
            _ => {
                let info = resolve_language(tag, platform)
                    .ok_or_else(|| Error::UnsupportedLanguage(tag.to_owned()))?;
                NameKey::new(info.platform_id, info.encoding_id, info.language_id, name_id)
            }
        };
        self.set(key, text)?;
        Ok(key)
    }

    /// The language id referring to this language tag, adding a language-tag
    /// record if the table doesn't have one for it yet.
    ///
    /// Tags are compared ignoring ASCII case.
    pub fn lang_tag_language_id(&mut self, tag: &str) -> Result<u16, Error> {
        if tag.is_empty() {
            return Err(Error::UnsupportedLanguage(tag.to_owned()));
        }
        let tags = self.lang_tag_record.get_or_insert_with(Vec::new);
        let index = match tags
            .iter()
            .position(|record| record.lang_tag.eq_ignore_ascii_case(tag))
        {
            Some(index) => index,
            None if tags.len() > (u16::MAX - LANG_TAG_BASE_ID) as usize => {
                return Err(OverflowError::TooManyLangTags(tags.len() + 1).into());
            }
            None => {
                tags.push(LangTagRecord::new(tag));
                tags.len() - 1
            }
        };
        // index is at most 0x7FFF
        Ok(LANG_TAG_BASE_ID + index as u16)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::{Rng, SeedableRng};
    use rstest::rstest;

    use super::*;
    use crate::{codec::EncodingError, UnsupportedCharacterError};

    const WIN_EN: NameKey = NameKey::new(3, 1, 0x409, NameId::FAMILY_NAME);
    const WIN_FR: NameKey = NameKey::new(3, 1, 0x40C, NameId::FAMILY_NAME);
    const MAC_EN: NameKey = NameKey::new(1, 0, 0, NameId::FAMILY_NAME);

    fn fancy() -> Name {
        Name::parse(name_test_data::name::FORMAT_0).unwrap()
    }

    fn assert_sorted_and_unique(name: &Name) {
        assert!(name
            .records()
            .windows(2)
            .all(|pair| pair[0].key() < pair[1].key()));
    }

    #[test]
    fn get_and_string() {
        let name = fancy();
        assert_eq!(name.len(), 7);
        assert_eq!(name.string(WIN_EN).unwrap(), "Fancy");
        assert_eq!(
            name.get(MAC_EN),
            Some(&NameValue::Text("Fancy".into()))
        );
        assert!(name.get(WIN_FR).is_none());
        assert!(matches!(
            name.string(WIN_FR),
            Err(Error::RecordNotFound(key)) if key == WIN_FR
        ));
        assert_eq!(name.records_for(NameId::SUBFAMILY_NAME).count(), 3);
    }

    #[test]
    fn string_of_opaque_record() {
        let name = Name::parse(name_test_data::name::UNKNOWN_ENCODING).unwrap();
        let key = NameKey::new(3, 2, 0x411, NameId::FAMILY_NAME);
        assert!(name.get(key).unwrap().is_opaque());
        assert!(matches!(
            name.string(key),
            Err(Error::Encoding {
                key: Some(_),
                error: EncodingError::UnknownEncoding { .. }
            })
        ));
    }

    #[test]
    fn set_inserts_in_order() {
        let mut name = fancy();
        assert_eq!(name.set(WIN_FR, "Fantaisie").unwrap(), None);
        assert_eq!(name.len(), 8);
        assert_sorted_and_unique(&name);
        assert_eq!(name.string(WIN_FR).unwrap(), "Fantaisie");

        let previous = name.set(WIN_EN, "Plain").unwrap();
        assert_eq!(previous, Some(NameValue::Text("Fancy".into())));
        assert_eq!(name.len(), 8);
        assert_eq!(name.string(WIN_EN).unwrap(), "Plain");
    }

    #[test]
    fn set_unencodable() {
        let mut name = fancy();
        let before = name.clone();
        let err = name.set(MAC_EN, "Fancy 😀").unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedCharacter(UnsupportedCharacterError {
                ch: '😀',
                key: Some(key),
                ..
            }) if key == MAC_EN
        ));
        assert_eq!(name, before);

        let shift_jis = NameKey::new(3, 2, 0x411, NameId::FAMILY_NAME);
        assert!(matches!(
            name.set(shift_jis, "ファン"),
            Err(Error::Encoding { .. })
        ));
        assert_eq!(name, before);
    }

    #[test]
    fn set_raw_keeps_bytes() {
        let mut name = Name::default();
        let key = NameKey::new(3, 2, 0x411, NameId::FAMILY_NAME);
        assert_eq!(name.set_raw(key, vec![0x83, 0x74]), None);
        assert_eq!(name.get(key), Some(&NameValue::Opaque(vec![0x83, 0x74])));
        let bytes = name.to_bytes().unwrap();
        assert_eq!(&bytes[bytes.len() - 2..], &[0x83, 0x74]);
    }

    #[test]
    fn remove() {
        let mut name = fancy();
        assert_eq!(
            name.remove(WIN_EN),
            Some(NameValue::Text("Fancy".into()))
        );
        assert_eq!(name.len(), 6);
        assert_eq!(name.remove(WIN_EN), None);
        assert_eq!(name.remove(WIN_FR), None);
        assert_eq!(name.len(), 6);
    }

    #[test]
    fn rename_across_locales() {
        let mut name = fancy();
        let count = name
            .rename_across_locales(NameId::SUBFAMILY_NAME, "Bold")
            .unwrap();
        assert_eq!(count, 3);
        assert!(name
            .records_for(NameId::SUBFAMILY_NAME)
            .all(|record| record.text() == Some("Bold")));
        // other ids untouched
        assert_eq!(name.string(WIN_EN).unwrap(), "Fancy");
        assert_eq!(name.len(), 7);
    }

    #[test]
    fn rename_with_no_matches() {
        let mut name = fancy();
        let before = name.clone();
        assert_eq!(
            name.rename_across_locales(NameId::DESIGNER, "Nobody")
                .unwrap(),
            0
        );
        assert_eq!(name, before);
    }

    #[test]
    fn rename_is_all_or_nothing() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut name = fancy();
        let before = name.clone();
        // the Windows records could take this, the Mac one can't
        let err = name
            .rename_across_locales(NameId::FAMILY_NAME, "Ελληνικά")
            .unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedCharacter(UnsupportedCharacterError { key: Some(key), .. })
                if key == MAC_EN
        ));
        assert_eq!(name, before);
    }

    #[test]
    fn rename_fails_on_opaque_record() {
        let mut name = Name::parse(name_test_data::name::UNKNOWN_ENCODING).unwrap();
        let before = name.clone();
        assert!(matches!(
            name.rename_across_locales(NameId::FAMILY_NAME, "Fan"),
            Err(Error::Encoding {
                error: EncodingError::UnknownEncoding {
                    platform_id: 3,
                    encoding_id: 2
                },
                ..
            })
        ));
        assert_eq!(name, before);
    }

    #[test]
    fn add_locale_variant() {
        let mut name = fancy();
        let key = name
            .add_locale_variant(WIN_EN, 0x40C, "Fantaisie")
            .unwrap();
        assert_eq!(key, WIN_FR);
        assert_eq!(name.string(WIN_FR).unwrap(), "Fantaisie");
        assert_eq!(name.len(), 8);
        assert_sorted_and_unique(&name);
    }

    #[test]
    fn add_locale_variant_errors() {
        let mut name = fancy();
        let before = name.clone();
        assert!(matches!(
            name.add_locale_variant(WIN_FR, 0x407, "Schick"),
            Err(Error::RecordNotFound(key)) if key == WIN_FR
        ));
        // (3, 1, 0x40C, 2) already exists
        let subfamily = NameKey::new(3, 1, 0x409, NameId::SUBFAMILY_NAME);
        assert!(matches!(
            name.add_locale_variant(subfamily, 0x40C, "Normale"),
            Err(Error::DuplicateKey(key)) if key.language_id == 0x40C
        ));
        assert!(matches!(
            name.add_locale_variant(MAC_EN, 2, "Schick ✓"),
            Err(Error::UnsupportedCharacter(_))
        ));
        assert_eq!(name, before);
    }

    #[rstest]
    #[case("en-US", PlatformId::Windows, NameKey::new(3, 1, 0x409, NameId::FAMILY_NAME))]
    #[case("de-CH", PlatformId::Windows, NameKey::new(3, 1, 0x807, NameId::FAMILY_NAME))]
    #[case("FR", PlatformId::Windows, NameKey::new(3, 1, 0x40C, NameId::FAMILY_NAME))]
    #[case("de", PlatformId::Macintosh, NameKey::new(1, 0, 2, NameId::FAMILY_NAME))]
    fn set_for_language(#[case] tag: &str, #[case] platform: PlatformId, #[case] expected: NameKey) {
        let mut name = Name::default();
        let key = name
            .set_for_language(tag, platform, NameId::FAMILY_NAME, "Fancy")
            .unwrap();
        assert_eq!(key, expected);
        assert_eq!(name.string(key).unwrap(), "Fancy");
        assert_eq!(name.version(), 0);
    }

    #[test]
    fn set_for_language_unicode_uses_lang_tags() {
        let mut name = Name::default();
        let key = name
            .set_for_language("de-CH", PlatformId::Unicode, NameId::FAMILY_NAME, "Fancy")
            .unwrap();
        assert_eq!(key, NameKey::new(0, 3, 0x8000, NameId::FAMILY_NAME));
        let wide = name
            .set_for_language("tlh", PlatformId::Unicode, NameId::FAMILY_NAME, "𝔉𝔞𝔫𝔠𝔶")
            .unwrap();
        assert_eq!(wide, NameKey::new(0, 4, 0x8001, NameId::FAMILY_NAME));
        // same tag, different case: no new record
        let again = name
            .set_for_language("DE-ch", PlatformId::Unicode, NameId::FULL_NAME, "Fancy")
            .unwrap();
        assert_eq!(again.language_id, 0x8000);

        assert_eq!(name.version(), 1);
        assert_eq!(name.lang_tags().unwrap().len(), 2);
        assert_eq!(name.lang_tag(0x8001), Some("tlh"));
    }

    #[test]
    fn set_for_unknown_language() {
        let mut name = Name::default();
        assert!(matches!(
            name.set_for_language("xx-Fake", PlatformId::Windows, NameId::FAMILY_NAME, "Fancy"),
            Err(Error::UnsupportedLanguage(tag)) if tag == "xx-Fake"
        ));
        assert!(matches!(
            name.set_for_language("en", PlatformId::Iso, NameId::FAMILY_NAME, "Fancy"),
            Err(Error::UnsupportedLanguage(_))
        ));
        assert!(matches!(
            name.set_for_language("", PlatformId::Unicode, NameId::FAMILY_NAME, "Fancy"),
            Err(Error::UnsupportedLanguage(_))
        ));
        assert!(name.is_empty());
        assert_eq!(name.version(), 0);
    }

    #[test]
    fn lang_tag_ids() {
        let mut name = Name::parse(name_test_data::name::FORMAT_1).unwrap();
        assert_eq!(name.lang_tag_language_id("de-ch").unwrap(), 0x8000);
        assert_eq!(name.lang_tag_language_id("en-GB").unwrap(), 0x8001);
        assert_eq!(name.lang_tag_language_id("en-GB").unwrap(), 0x8001);
        assert_eq!(name.lang_tags().unwrap().len(), 2);
    }

    #[test]
    fn too_many_lang_tags() {
        let mut name = Name {
            name_record: Vec::new(),
            lang_tag_record: Some(
                (0..0x8000u32)
                    .map(|i| LangTagRecord::new(format!("x-{i}")))
                    .collect(),
            ),
        };
        assert_eq!(name.lang_tag_language_id("x-0").unwrap(), 0x8000);
        assert_eq!(name.lang_tag_language_id("x-32767").unwrap(), 0xFFFF);
        assert!(matches!(
            name.lang_tag_language_id("x-one-too-many"),
            Err(Error::Overflow(OverflowError::TooManyLangTags(_)))
        ));
    }

    #[test]
    fn random_edits_stay_sorted() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(0x6e616d65);
        let mut name = fancy();
        for _ in 0..500 {
            let key = NameKey::new(
                [0, 1, 3][rng.gen_range(0..3)],
                rng.gen_range(0..2),
                rng.gen_range(0..4),
                NameId::new(rng.gen_range(0..8)),
            );
            match rng.gen_range(0..4) {
                0 => {
                    name.remove(key);
                }
                1 => {
                    let _ = name.add_locale_variant(key, rng.gen_range(0..4), "Variant");
                }
                2 => {
                    let _ = name.rename_across_locales(key.name_id, "Renamed");
                }
                _ => {
                    let _ = name.set(key, "Set");
                }
            }
            assert_sorted_and_unique(&name);
        }
        let bytes = name.to_bytes().unwrap();
        assert_eq!(Name::parse(&bytes).unwrap(), name);
    }
}
