//! Platform and platform-specific encoding identifiers.

use core::fmt;

/// The platform a name record targets.
///
/// Identifiers without a dedicated variant are preserved in [`PlatformId::Other`],
/// so converting to and from `u16` is always lossless.
///
/// See <https://learn.microsoft.com/en-us/typography/opentype/spec/name#platform-ids>
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlatformId {
    Unicode,
    Macintosh,
    /// Deprecated, but still found in old fonts.
    Iso,
    Windows,
    Custom,
    Other(u16),
}

impl PlatformId {
    pub const fn new(raw: u16) -> Self {
        match raw {
            0 => Self::Unicode,
            1 => Self::Macintosh,
            2 => Self::Iso,
            3 => Self::Windows,
            4 => Self::Custom,
            other => Self::Other(other),
        }
    }

    pub const fn to_u16(self) -> u16 {
        match self {
            Self::Unicode => 0,
            Self::Macintosh => 1,
            Self::Iso => 2,
            Self::Windows => 3,
            Self::Custom => 4,
            Self::Other(raw) => raw,
        }
    }
}

impl From<u16> for PlatformId {
    fn from(value: u16) -> Self {
        Self::new(value)
    }
}

impl From<PlatformId> for u16 {
    fn from(value: PlatformId) -> Self {
        value.to_u16()
    }
}

impl fmt::Debug for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Unicode => f.write_str("Unicode"),
            Self::Macintosh => f.write_str("Macintosh"),
            Self::Iso => f.write_str("Iso"),
            Self::Windows => f.write_str("Windows"),
            Self::Custom => f.write_str("Custom"),
            Self::Other(raw) => write!(f, "Other({raw})"),
        }
    }
}

/// Encoding ids for the Unicode platform (platform 0).
#[allow(non_snake_case)]
pub mod UnicodeEncodingId {
    pub const UNICODE_1_0: u16 = 0;
    pub const UNICODE_1_1: u16 = 1;
    pub const ISO_10646: u16 = 2;
    pub const UNICODE_2_0_BMP: u16 = 3;
    pub const UNICODE_2_0_FULL: u16 = 4;
}

/// Encoding ids (script manager codes) for the Macintosh platform (platform 1).
#[allow(non_snake_case)]
pub mod MacEncodingId {
    pub const ROMAN: u16 = 0;
    pub const JAPANESE: u16 = 1;
    pub const CHINESE_TRADITIONAL: u16 = 2;
    pub const KOREAN: u16 = 3;
    pub const ARABIC: u16 = 4;
    pub const HEBREW: u16 = 5;
    pub const GREEK: u16 = 6;
    pub const RUSSIAN: u16 = 7;
    pub const RSYMBOL: u16 = 8;
    pub const DEVANAGARI: u16 = 9;
    pub const GURMUKHI: u16 = 10;
    pub const GUJARATI: u16 = 11;
    pub const ORIYA: u16 = 12;
    pub const BENGALI: u16 = 13;
    pub const TAMIL: u16 = 14;
    pub const TELUGU: u16 = 15;
    pub const KANNADA: u16 = 16;
    pub const MALAYALAM: u16 = 17;
    pub const SINHALESE: u16 = 18;
    pub const BURMESE: u16 = 19;
    pub const KHMER: u16 = 20;
    pub const THAI: u16 = 21;
    pub const LAOTIAN: u16 = 22;
    pub const GEORGIAN: u16 = 23;
    pub const ARMENIAN: u16 = 24;
    pub const CHINESE_SIMPLIFIED: u16 = 25;
    pub const TIBETAN: u16 = 26;
    pub const MONGOLIAN: u16 = 27;
    pub const GEEZ: u16 = 28;
    pub const SLAVIC: u16 = 29;
    pub const VIETNAMESE: u16 = 30;
    pub const SINDHI: u16 = 31;
    pub const UNINTERPRETED: u16 = 32;
}

/// Encoding ids for the Windows platform (platform 3).
#[allow(non_snake_case)]
pub mod WindowsEncodingId {
    pub const SYMBOL: u16 = 0;
    /// The encoding Microsoft recommends for all new fonts.
    pub const UNICODE_BMP: u16 = 1;
    pub const SHIFT_JIS: u16 = 2;
    pub const PRC: u16 = 3;
    pub const BIG5: u16 = 4;
    pub const WANSUNG: u16 = 5;
    pub const JOHAB: u16 = 6;
    pub const UNICODE_FULL: u16 = 10;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_roundtrip() {
        for raw in [0u16, 1, 2, 3, 4, 5, 0x7fff, u16::MAX] {
            assert_eq!(PlatformId::new(raw).to_u16(), raw);
        }
        assert_eq!(PlatformId::new(7), PlatformId::Other(7));
        assert!(PlatformId::Macintosh < PlatformId::Windows);
    }
}
