//! Encoding text for a record's platform and encoding.
//!
//! Decoding lives in `read-names`; it is re-exported here so that both halves
//! are available from one place.

pub use read::tables::name::{decode, DecodePolicy, Encoding, EncodingError};

use read::tables::name::MacRomanMapping;

use crate::error::{Error, UnsupportedCharacterError};

/// Encode `text` for the given platform and encoding.
///
/// UTF-16 encodings can represent any text, with characters outside the
/// BMP written as surrogate pairs. Mac Roman fails on the first character
/// without a mapping. Text can't be encoded for an [`Encoding::Unknown`]
/// pair at all.
pub fn encode(text: &str, platform_id: u16, encoding_id: u16) -> Result<Vec<u8>, Error> {
    match Encoding::new(platform_id, encoding_id) {
        Encoding::Utf16Be => Ok(text
            .encode_utf16()
            .flat_map(|unit| unit.to_be_bytes())
            .collect()),
        Encoding::MacRoman => text
            .chars()
            .map(|ch| {
                MacRomanMapping.encode(ch).ok_or(UnsupportedCharacterError {
                    ch,
                    platform_id,
                    encoding_id,
                    key: None,
                })
            })
            .collect::<Result<_, _>>()
            .map_err(Error::from),
        Encoding::Unknown => Err(Error::Encoding {
            key: None,
            error: EncodingError::UnknownEncoding {
                platform_id,
                encoding_id,
            },
        }),
    }
}

/// Returns an error if `text` can't be encoded for this platform and encoding.
pub fn check_encodable(text: &str, platform_id: u16, encoding_id: u16) -> Result<(), Error> {
    match Encoding::new(platform_id, encoding_id) {
        Encoding::MacRoman => match text.chars().find(|ch| MacRomanMapping.encode(*ch).is_none()) {
            Some(ch) => Err(UnsupportedCharacterError {
                ch,
                platform_id,
                encoding_id,
                key: None,
            }
            .into()),
            None => Ok(()),
        },
        _ => encode("", platform_id, encoding_id).map(|_| ()),
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(3, 1, "Regular")]
    #[case(3, 10, "Emoji 😀 Sans")]
    #[case(3, 0, "\u{F041}\u{F042}")]
    #[case(0, 3, "Grüße")]
    #[case(0, 4, "𝔉𝔞𝔫𝔠𝔶")]
    #[case(1, 0, "Müller-Lancé ©™")]
    #[case(1, 0, "")]
    fn roundtrip(#[case] platform_id: u16, #[case] encoding_id: u16, #[case] text: &str) {
        let bytes = encode(text, platform_id, encoding_id).unwrap();
        let decoded = decode(&bytes, platform_id, encoding_id, DecodePolicy::Strict).unwrap();
        assert_eq!(decoded, text);
    }

    #[test]
    fn utf16_layout() {
        assert_eq!(encode("Hi", 3, 1).unwrap(), [0, b'H', 0, b'i']);
        // U+1F600 is written as a surrogate pair
        assert_eq!(encode("😀", 0, 4).unwrap(), [0xD8, 0x3D, 0xDE, 0x00]);
    }

    #[test]
    fn mac_roman_is_one_byte_per_char() {
        assert_eq!(encode("cé", 1, 0).unwrap(), [b'c', 0x8E]);
    }

    #[test]
    fn mac_roman_unsupported() {
        let err = encode("Łódź", 1, 0).unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedCharacter(UnsupportedCharacterError {
                ch: 'Ł',
                platform_id: 1,
                encoding_id: 0,
                key: None
            })
        ));
        assert!(matches!(
            check_encodable("Łódź", 1, 0),
            Err(Error::UnsupportedCharacter(_))
        ));
        assert!(check_encodable("Łódź", 3, 1).is_ok());
    }

    #[test]
    fn unknown_encoding() {
        for (platform_id, encoding_id) in [(1, 1), (3, 2), (2, 0), (7, 0)] {
            assert!(matches!(
                encode("x", platform_id, encoding_id),
                Err(Error::Encoding {
                    key: None,
                    error: EncodingError::UnknownEncoding { .. }
                })
            ));
            assert!(check_encodable("x", platform_id, encoding_id).is_err());
        }
    }

    #[test]
    fn random_text_roundtrips() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(0xc0dec);
        for _ in 0..500 {
            let len = rng.gen_range(0..24);
            let text: String = (0..len).map(|_| rng.gen::<char>()).collect();
            for (platform_id, encoding_id) in [(0, 3), (3, 1), (3, 10)] {
                let bytes = encode(&text, platform_id, encoding_id).unwrap();
                assert_eq!(
                    decode(&bytes, platform_id, encoding_id, DecodePolicy::Strict).unwrap(),
                    text
                );
            }
            // only keep the chars mac roman can represent
            let mac: String = text
                .chars()
                .filter(|c| MacRomanMapping.encode(*c).is_some())
                .collect();
            let bytes = encode(&mac, 1, 0).unwrap();
            assert_eq!(bytes.len(), mac.chars().count());
            assert_eq!(decode(&bytes, 1, 0, DecodePolicy::Strict).unwrap(), mac);
        }
    }
}
