//! The composite key identifying a name record.

use core::fmt;

use crate::{NameId, PlatformId, LANG_TAG_BASE_ID};

/// The (platform, encoding, language, name) tuple identifying a name record.
///
/// Keys are unique within a table, and the derived ordering (platform id,
/// then encoding id, then language id, then name id) is the order in which
/// records must appear in the serialized table.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NameKey {
    pub platform_id: u16,
    pub encoding_id: u16,
    pub language_id: u16,
    pub name_id: NameId,
}

impl NameKey {
    pub const fn new(platform_id: u16, encoding_id: u16, language_id: u16, name_id: NameId) -> Self {
        NameKey {
            platform_id,
            encoding_id,
            language_id,
            name_id,
        }
    }

    pub const fn platform(&self) -> PlatformId {
        PlatformId::new(self.platform_id)
    }

    /// Returns this key with the language replaced.
    pub const fn with_language(self, language_id: u16) -> Self {
        NameKey {
            language_id,
            ..self
        }
    }

    /// If the language id refers to a language-tag record, the index of that record.
    pub const fn lang_tag_index(&self) -> Option<usize> {
        if self.language_id >= LANG_TAG_BASE_ID {
            Some((self.language_id - LANG_TAG_BASE_ID) as usize)
        } else {
            None
        }
    }
}

impl fmt::Debug for NameKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "({}, {}, 0x{:04X}, {:?})",
            self.platform_id, self.encoding_id, self.language_id, self.name_id
        )
    }
}

impl fmt::Display for NameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "platform {} encoding {} language 0x{:04X} name {}",
            self.platform_id,
            self.encoding_id,
            self.language_id,
            self.name_id.to_u16()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_field_order() {
        let mut keys = vec![
            NameKey::new(3, 1, 0x409, NameId::new(2)),
            NameKey::new(3, 1, 0x409, NameId::new(1)),
            NameKey::new(1, 0, 0, NameId::new(9)),
            NameKey::new(3, 0, 0x409, NameId::new(1)),
            NameKey::new(0, 4, 0, NameId::new(4)),
        ];
        keys.sort();
        let flat = keys
            .iter()
            .map(|k| (k.platform_id, k.encoding_id, k.language_id, k.name_id.to_u16()))
            .collect::<Vec<_>>();
        assert_eq!(
            flat,
            [
                (0, 4, 0, 4),
                (1, 0, 0, 9),
                (3, 0, 0x409, 1),
                (3, 1, 0x409, 1),
                (3, 1, 0x409, 2)
            ]
        );
    }

    #[test]
    fn lang_tag_index() {
        let key = NameKey::new(0, 4, 0x8002, NameId::FAMILY_NAME);
        assert_eq!(key.lang_tag_index(), Some(2));
        assert_eq!(key.with_language(0).lang_tag_index(), None);
    }
}
