//! Name identifiers
//!
//! The font stores these as plain u16s; we give them their own type so that
//! a name id can't be confused with the other three fields of a record key.

use core::fmt;

/// Identifies the semantic slot a name string fills.
///
/// The predefined slots are available as associated constants. IDs 26 to 255
/// are reserved for future use, and IDs 256 to 32767 are font-specific,
/// typically referenced from layout features or variation instances. We treat
/// any ID outside the predefined set as an opaque custom slot.
///
/// See <https://learn.microsoft.com/en-us/typography/opentype/spec/name#name-ids>
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::AnyBitPattern))]
#[repr(transparent)]
pub struct NameId(u16);

impl NameId {
    /// Copyright notice.
    pub const COPYRIGHT_NOTICE: Self = Self(0);

    /// Family name, shared by at most four faces (regular, italic, bold,
    /// bold italic).
    pub const FAMILY_NAME: Self = Self(1);

    /// Subfamily name; distinguishes faces that share a [`FAMILY_NAME`][Self::FAMILY_NAME].
    pub const SUBFAMILY_NAME: Self = Self(2);

    /// Unique font identifier.
    pub const UNIQUE_ID: Self = Self(3);

    /// Full name, usually family and subfamily joined together.
    pub const FULL_NAME: Self = Self(4);

    /// Version string, of the form "Version <number>.<number>".
    pub const VERSION_STRING: Self = Self(5);

    /// PostScript name.
    ///
    /// At most 63 printable ASCII characters, excluding `[](){}<>/%`.
    pub const POSTSCRIPT_NAME: Self = Self(6);

    /// Trademark notice.
    pub const TRADEMARK: Self = Self(7);

    /// Manufacturer name.
    pub const MANUFACTURER: Self = Self(8);

    /// Designer of the typeface.
    pub const DESIGNER: Self = Self(9);

    /// Free-form description of the typeface.
    pub const DESCRIPTION: Self = Self(10);

    /// URL of the font vendor.
    pub const VENDOR_URL: Self = Self(11);

    /// URL of the typeface designer.
    pub const DESIGNER_URL: Self = Self(12);

    /// Plain language license description.
    pub const LICENSE_DESCRIPTION: Self = Self(13);

    /// URL for additional licensing information.
    pub const LICENSE_URL: Self = Self(14);

    /// Typographic family name, without the four-style limit of ID 1.
    pub const TYPOGRAPHIC_FAMILY_NAME: Self = Self(16);

    /// Typographic subfamily name, unique within a typographic family.
    pub const TYPOGRAPHIC_SUBFAMILY_NAME: Self = Self(17);

    /// Compatible full name (Macintosh only).
    pub const COMPATIBLE_FULL_NAME: Self = Self(18);

    /// Sample text.
    pub const SAMPLE_TEXT: Self = Self(19);

    /// PostScript CID findfont name.
    pub const POSTSCRIPT_CID_NAME: Self = Self(20);

    /// WWS family name.
    pub const WWS_FAMILY_NAME: Self = Self(21);

    /// WWS subfamily name.
    pub const WWS_SUBFAMILY_NAME: Self = Self(22);

    /// Light background palette label (referenced from `CPAL`).
    pub const LIGHT_BACKGROUND_PALETTE: Self = Self(23);

    /// Dark background palette label (referenced from `CPAL`).
    pub const DARK_BACKGROUND_PALETTE: Self = Self(24);

    /// Variations PostScript name prefix.
    pub const VARIATIONS_POSTSCRIPT_NAME_PREFIX: Self = Self(25);

    /// The last reserved ID; everything above is font-specific.
    pub const LAST_RESERVED_NAME_ID: Self = Self(255);
}

impl NameId {
    /// Create a new identifier from a raw u16 value.
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Returns an iterator over the set of predefined identifiers.
    pub fn predefined() -> impl Iterator<Item = Self> + Clone {
        // 15 was never assigned
        (0..15).chain(16..=25).map(Self)
    }

    /// `true` if this is one of the predefined identifiers.
    pub const fn is_predefined(self) -> bool {
        self.0 <= 25 && self.0 != 15
    }

    /// `true` if this is a font-specific identifier (256 and up).
    pub const fn is_custom(self) -> bool {
        self.0 > Self::LAST_RESERVED_NAME_ID.0
    }

    /// Return the identifier as a u16.
    pub const fn to_u16(self) -> u16 {
        self.0
    }

    /// Return the big-endian (network order) bytes of this identifier.
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

impl Default for NameId {
    fn default() -> Self {
        Self(0xFFFF)
    }
}

impl From<u16> for NameId {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl From<NameId> for u16 {
    fn from(value: NameId) -> Self {
        value.0
    }
}

impl fmt::Debug for NameId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            Self::COPYRIGHT_NOTICE => "COPYRIGHT_NOTICE",
            Self::FAMILY_NAME => "FAMILY_NAME",
            Self::SUBFAMILY_NAME => "SUBFAMILY_NAME",
            Self::UNIQUE_ID => "UNIQUE_ID",
            Self::FULL_NAME => "FULL_NAME",
            Self::VERSION_STRING => "VERSION_STRING",
            Self::POSTSCRIPT_NAME => "POSTSCRIPT_NAME",
            Self::TRADEMARK => "TRADEMARK",
            Self::MANUFACTURER => "MANUFACTURER",
            Self::DESIGNER => "DESIGNER",
            Self::DESCRIPTION => "DESCRIPTION",
            Self::VENDOR_URL => "VENDOR_URL",
            Self::DESIGNER_URL => "DESIGNER_URL",
            Self::LICENSE_DESCRIPTION => "LICENSE_DESCRIPTION",
            Self::LICENSE_URL => "LICENSE_URL",
            Self::TYPOGRAPHIC_FAMILY_NAME => "TYPOGRAPHIC_FAMILY_NAME",
            Self::TYPOGRAPHIC_SUBFAMILY_NAME => "TYPOGRAPHIC_SUBFAMILY_NAME",
            Self::COMPATIBLE_FULL_NAME => "COMPATIBLE_FULL_NAME",
            Self::SAMPLE_TEXT => "SAMPLE_TEXT",
            Self::POSTSCRIPT_CID_NAME => "POSTSCRIPT_CID_NAME",
            Self::WWS_FAMILY_NAME => "WWS_FAMILY_NAME",
            Self::WWS_SUBFAMILY_NAME => "WWS_SUBFAMILY_NAME",
            Self::LIGHT_BACKGROUND_PALETTE => "LIGHT_BACKGROUND_PALETTE",
            Self::DARK_BACKGROUND_PALETTE => "DARK_BACKGROUND_PALETTE",
            Self::VARIATIONS_POSTSCRIPT_NAME_PREFIX => "VARIATIONS_POSTSCRIPT_NAME_PREFIX",
            _ => return write!(f, "{}", self.0),
        };
        f.write_str(name)
    }
}

impl fmt::Display for NameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

crate::newtype_scalar!(NameId, [u8; 2]);
