//! Raw `name` tables.

/// A version 0 table with Macintosh and Windows records for "Fancy".
#[rustfmt::skip]
pub static FORMAT_0: &[u8] = &[
    0x00, 0x00, // version 0
    0x00, 0x07, // count 7
    0x00, 0x5A, // storage offset 90
    // (1, 0, 0x0000, 1) Fancy
    0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x05, 0x00, 0x00,
    // (1, 0, 0x0000, 2) Regular
    0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x00, 0x07, 0x00, 0x05,
    // (1, 0, 0x0000, 4) Fancy Café
    0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0x00, 0x0A, 0x00, 0x0C,
    // (3, 1, 0x0409, 1) Fancy
    0x00, 0x03, 0x00, 0x01, 0x04, 0x09, 0x00, 0x01, 0x00, 0x0A, 0x00, 0x16,
    // (3, 1, 0x0409, 2) Regular
    0x00, 0x03, 0x00, 0x01, 0x04, 0x09, 0x00, 0x02, 0x00, 0x0E, 0x00, 0x20,
    // (3, 1, 0x0409, 4) Fancy Café
    0x00, 0x03, 0x00, 0x01, 0x04, 0x09, 0x00, 0x04, 0x00, 0x14, 0x00, 0x2E,
    // (3, 1, 0x040C, 2) Normal
    0x00, 0x03, 0x00, 0x01, 0x04, 0x0C, 0x00, 0x02, 0x00, 0x0C, 0x00, 0x42,
    // string storage
    0x46, 0x61, 0x6E, 0x63, 0x79, 0x52, 0x65, 0x67, 0x75, 0x6C,
    0x61, 0x72, 0x46, 0x61, 0x6E, 0x63, 0x79, 0x20, 0x43, 0x61,
    0x66, 0x8E, 0x00, 0x46, 0x00, 0x61, 0x00, 0x6E, 0x00, 0x63,
    0x00, 0x79, 0x00, 0x52, 0x00, 0x65, 0x00, 0x67, 0x00, 0x75,
    0x00, 0x6C, 0x00, 0x61, 0x00, 0x72, 0x00, 0x46, 0x00, 0x61,
    0x00, 0x6E, 0x00, 0x63, 0x00, 0x79, 0x00, 0x20, 0x00, 0x43,
    0x00, 0x61, 0x00, 0x66, 0x00, 0xE9, 0x00, 0x4E, 0x00, 0x6F,
    0x00, 0x72, 0x00, 0x6D, 0x00, 0x61, 0x00, 0x6C,
];

/// A version 1 table with one language-tag record.
///
/// Both records point at the same string data.
#[rustfmt::skip]
pub static FORMAT_1: &[u8] = &[
    0x00, 0x01, // version 1
    0x00, 0x02, // count 2
    0x00, 0x24, // storage offset 36
    // (0, 4, 0x8000, 1) Fancy
    0x00, 0x00, 0x00, 0x04, 0x80, 0x00, 0x00, 0x01, 0x00, 0x0A, 0x00, 0x00,
    // (3, 1, 0x0409, 1) Fancy
    0x00, 0x03, 0x00, 0x01, 0x04, 0x09, 0x00, 0x01, 0x00, 0x0A, 0x00, 0x00,
    0x00, 0x01, // lang tag count 1
    0x00, 0x0A, 0x00, 0x0A, // "de-CH"
    // string storage
    0x00, 0x46, 0x00, 0x61, 0x00, 0x6E, 0x00, 0x63, 0x00, 0x79,
    0x00, 0x64, 0x00, 0x65, 0x00, 0x2D, 0x00, 0x43, 0x00, 0x48,
];

/// A table with a Shift-JIS record we don't know how to decode.
#[rustfmt::skip]
pub static UNKNOWN_ENCODING: &[u8] = &[
    0x00, 0x00, // version 0
    0x00, 0x02, // count 2
    0x00, 0x1E, // storage offset 30
    // (3, 1, 0x0411, 1) ファン
    0x00, 0x03, 0x00, 0x01, 0x04, 0x11, 0x00, 0x01, 0x00, 0x06, 0x00, 0x00,
    // (3, 2, 0x0411, 1) ファン (Shift-JIS)
    0x00, 0x03, 0x00, 0x02, 0x04, 0x11, 0x00, 0x01, 0x00, 0x06, 0x00, 0x06,
    // string storage
    0x30, 0xD5, 0x30, 0xA1, 0x30, 0xF3, 0x83, 0x74, 0x83, 0x40,
    0x83, 0x93,
];

/// A Windows record whose UTF-16 data contains a lone high surrogate.
#[rustfmt::skip]
pub static UNPAIRED_SURROGATE: &[u8] = &[
    0x00, 0x00, // version 0
    0x00, 0x01, // count 1
    0x00, 0x12, // storage offset 18
    // (3, 1, 0x0409, 1) A, U+D800, B
    0x00, 0x03, 0x00, 0x01, 0x04, 0x09, 0x00, 0x01, 0x00, 0x06, 0x00, 0x00,
    // string storage
    0x00, 0x41, 0xD8, 0x00, 0x00, 0x42,
];
