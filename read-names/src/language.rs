//! Mapping between name table language ids and BCP-47 language tags.
//!
//! Macintosh records use a small fixed enumeration of language codes, while
//! Windows records use LCIDs. Records on the Unicode platform (and any record
//! in a version 1 table with a language id of `0x8000` or above) refer to
//! language-tag strings stored in the table itself; those are not covered by
//! this module, see [`Name::language_tag`](crate::tables::name::Name::language_tag).
//!
//! The tables here are immutable lookup data; nothing in this module holds
//! state.

use types::{PlatformId, WindowsEncodingId};

/// The platform-specific ids needed to write a record in a given language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LanguageInfo {
    pub platform_id: u16,
    pub encoding_id: u16,
    pub language_id: u16,
}

/// Converts a platform-specific language id to a BCP-47 language tag.
///
/// Only the Macintosh and Windows platforms have fixed language ids.
pub fn language_id_to_bcp47(platform: PlatformId, language_id: u16) -> Option<&'static str> {
    match platform {
        PlatformId::Macintosh => MAC_LANGUAGES
            .binary_search_by(|entry| entry.0.cmp(&language_id))
            .ok()
            .map(|ix| MAC_LANGUAGES[ix].1),
        PlatformId::Windows => {
            // some LCIDs have more than one tag; the first is canonical
            let ix = WINDOWS_LANGUAGES.partition_point(|entry| entry.0 < language_id);
            WINDOWS_LANGUAGES
                .get(ix)
                .filter(|entry| entry.0 == language_id)
                .map(|entry| entry.1)
        }
        _ => None,
    }
}

/// Resolves a BCP-47 language tag to the ids used on the given platform.
///
/// Matching is case-insensitive. If there is no exact match we fall back to the
/// primary language subtag, so "en" resolves to US English (0x0409) on
/// Windows and "de-AT" resolves to German (2) on the Macintosh.
///
/// Windows entries always use the Unicode BMP encoding; Macintosh entries use
/// the script associated with the language.
pub fn resolve_language(tag: &str, platform: PlatformId) -> Option<LanguageInfo> {
    match platform {
        PlatformId::Macintosh => {
            let ix = find_tag(MAC_LANGUAGES.iter().map(|entry| entry.1), tag)?;
            let (language_id, _, script) = MAC_LANGUAGES[ix];
            Some(LanguageInfo {
                platform_id: PlatformId::Macintosh.to_u16(),
                encoding_id: script,
                language_id,
            })
        }
        PlatformId::Windows => {
            let ix = find_tag(WINDOWS_LANGUAGES.iter().map(|entry| entry.1), tag)?;
            Some(LanguageInfo {
                platform_id: PlatformId::Windows.to_u16(),
                encoding_id: WindowsEncodingId::UNICODE_BMP,
                language_id: WINDOWS_LANGUAGES[ix].0,
            })
        }
        _ => None,
    }
}

/// Resolves a tag on every platform that has a mapping for it.
pub fn resolve_language_all(tag: &str) -> impl Iterator<Item = LanguageInfo> + '_ {
    [PlatformId::Windows, PlatformId::Macintosh]
        .into_iter()
        .filter_map(move |platform| resolve_language(tag, platform))
}

fn find_tag<'a>(mut tags: impl Iterator<Item = &'a str> + Clone, tag: &str) -> Option<usize> {
    let primary = primary_subtag(tag);
    tags.clone()
        .position(|candidate| candidate.eq_ignore_ascii_case(tag))
        .or_else(|| {
            tags.clone()
                .position(|candidate| candidate.eq_ignore_ascii_case(primary))
        })
        .or_else(|| tags.position(|candidate| primary_subtag(candidate).eq_ignore_ascii_case(primary)))
}

fn primary_subtag(tag: &str) -> &str {
    tag.split(['-', '_']).next().unwrap_or(tag)
}

// Mac language codes are sorted by id; the third field is the script code
// (Macintosh encoding id) conventionally paired with each language.
#[rustfmt::skip]
static MAC_LANGUAGES: &[(u16, &str, u16)] = &[
    (0, "en", 0),              // English
    (1, "fr", 0),              // French
    (2, "de", 0),              // German
    (3, "it", 0),              // Italian
    (4, "nl", 0),              // Dutch
    (5, "sv", 0),              // Swedish
    (6, "es", 0),              // Spanish
    (7, "da", 0),              // Danish
    (8, "pt", 0),              // Portuguese
    (9, "nb", 0),              // Norwegian
    (10, "he", 5),             // Hebrew
    (11, "ja", 1),             // Japanese
    (12, "ar", 4),             // Arabic
    (13, "fi", 0),             // Finnish
    (14, "el", 6),             // Greek
    (15, "is", 0),             // Icelandic
    (16, "mt", 0),             // Maltese
    (17, "tr", 0),             // Turkish
    (18, "hr", 0),             // Croatian
    (19, "zh-Hant", 2),        // Chinese (Traditional)
    (20, "ur", 4),             // Urdu
    (21, "hi", 9),             // Hindi
    (22, "th", 21),            // Thai
    (23, "ko", 3),             // Korean
    (24, "lt", 29),            // Lithuanian
    (25, "pl", 29),            // Polish
    (26, "hu", 29),            // Hungarian
    (27, "et", 29),            // Estonian
    (28, "lv", 29),            // Latvian
    (29, "se", 0),             // Sami
    (30, "fo", 0),             // Faroese
    (31, "fa", 4),             // Farsi (Persian)
    (32, "ru", 7),             // Russian
    (33, "zh-Hans", 25),       // Chinese (Simplified)
    (34, "nl", 0),             // Dutch
    (35, "ga", 0),             // Irish(Gaelic)
    (36, "sq", 0),             // Albanian
    (37, "ro", 0),             // Romanian
    (38, "cs", 29),            // Czech
    (39, "sk", 29),            // Slovak
    (40, "sl", 0),             // Slovenian
    (41, "yi", 5),             // Yiddish
    (42, "sr", 7),             // Serbian
    (43, "mk", 7),             // Macedonian
    (44, "bg", 7),             // Bulgarian
    (45, "uk", 7),             // Ukrainian
    (46, "be", 7),             // Byelorussian
    (47, "uz", 7),             // Uzbek
    (48, "kk", 7),             // Kazakh
    (49, "az-Cyrl", 7),        // Azerbaijani (Cyrillic)
    (50, "az-Arab", 4),        // Azerbaijani (Arabic)
    (51, "hy", 24),            // Armenian
    (52, "ka", 23),            // Georgian
    (53, "mo", 7),             // Moldavian
    (54, "ky", 7),             // Kirghiz
    (55, "tg", 7),             // Tajiki
    (56, "tk", 7),             // Turkmen
    (57, "mn-Mong", 27),       // Mongolian (Traditional)
    (58, "mn-Cyrl", 7),        // Mongolian (Cyrillic)
    (59, "ps", 4),             // Pashto
    (60, "ku", 4),             // Kurdish
    (61, "ks", 4),             // Kashmiri
    (62, "sd", 4),             // Sindhi
    (63, "bo", 26),            // Tibetan
    (64, "ne", 9),             // Nepali
    (65, "sa", 9),             // Sanskrit
    (66, "mr", 9),             // Marathi
    (67, "bn", 13),            // Bengali
    (68, "as", 13),            // Assamese
    (69, "gu", 11),            // Gujarati
    (70, "pa", 10),            // Punjabi
    (71, "or", 12),            // Oriya
    (72, "ml", 17),            // Malayalam
    (73, "kn", 16),            // Kannada
    (74, "ta", 14),            // Tamil
    (75, "te", 15),            // Telugu
    (76, "si", 18),            // Sinhalese
    (77, "my", 19),            // Burmese
    (78, "km", 20),            // Khmer
    (79, "lo", 22),            // Lao
    (80, "vi", 30),            // Vietnamese
    (81, "id", 0),             // Indonesian
    (82, "tl", 0),             // Tagalog
    (83, "ms-Latn", 0),        // Malay (Roman)
    (84, "ms-Arab", 4),        // Malay (Arabic)
    (85, "am", 28),            // Amharic
    (86, "ti", 28),            // Tigrinya
    (87, "om", 28),            // Oromo
    (88, "so", 0),             // Somali
    (89, "sw", 0),             // Swahili
    (90, "rw", 0),             // Kinyarwanda/Ruanda
    (91, "rn", 0),             // Rundi
    (92, "ny", 0),             // Nyanja/Chewa
    (93, "mg", 0),             // Malagasy
    (94, "eo", 0),             // Esperanto
    (128, "cy", 0),            // Welsh
    (129, "eu", 0),            // Basque
    (130, "ca", 0),            // Catalan
    (131, "la", 0),            // Latin
    (132, "qu", 0),            // Quechua
    (133, "gn", 0),            // Guarani
    (134, "ay", 0),            // Aymara
    (135, "tt", 7),            // Tatar
    (136, "ug", 4),            // Uighur
    (137, "dz", 26),           // Dzongkha
    (138, "jv-Latn", 0),       // Javanese (Roman)
    (139, "su-Latn", 0),       // Sundanese (Roman)
    (140, "gl", 0),            // Galician
    (141, "af", 0),            // Afrikaans
    (142, "br", 0),            // Breton
    (143, "iu", 28),           // Inuktitut
    (144, "gd", 0),            // Scottish (Gaelic)
    (145, "gv", 0),            // Manx (Gaelic)
    (146, "ga", 0),            // Irish (Gaelic with Lenition)
    (147, "to", 0),            // Tongan
    (148, "el", 6),            // Greek (Polytonic) Note: ISO 15924 does not have an equivalent script name.
    (149, "kl", 0),            // Greenlandic
    (150, "az-Latn", 0),       // Azerbaijani (Roman)
    (151, "nn", 0),            // Nynorsk
];

// Windows LCIDs, sorted by id. An id may appear more than once.
#[rustfmt::skip]
static WINDOWS_LANGUAGES: &[(u16, &str)] = &[
    (0x0401, "ar-SA"),         // Arabic
    (0x0402, "bg-BG"),         // Bulgarian
    (0x0403, "ca-ES"),         // Catalan
    (0x0404, "zh-TW"),         // Chinese (Traditional)
    (0x0405, "cs-CZ"),         // Czech
    (0x0406, "da-DK"),         // Danish
    (0x0407, "de-DE"),         // German
    (0x0408, "el-GR"),         // Greek
    (0x0409, "en-US"),         // English
    (0x040a, "es-ES_tradnl"),  // Spanish
    (0x040b, "fi-FI"),         // Finnish
    (0x040c, "fr-FR"),         // French
    (0x040d, "he-IL"),         // Hebrew
    (0x040d, "he"),            // Hebrew
    (0x040e, "hu-HU"),         // Hungarian
    (0x040e, "hu"),            // Hungarian
    (0x040f, "is-IS"),         // Icelandic
    (0x0410, "it-IT"),         // Italian
    (0x0411, "ja-JP"),         // Japanese
    (0x0412, "ko-KR"),         // Korean
    (0x0413, "nl-NL"),         // Dutch
    (0x0414, "nb-NO"),         // Norwegian (Bokmål)
    (0x0415, "pl-PL"),         // Polish
    (0x0416, "pt-BR"),         // Portuguese
    (0x0417, "rm-CH"),         // Romansh
    (0x0418, "ro-RO"),         // Romanian
    (0x0419, "ru-RU"),         // Russian
    (0x041a, "hr-HR"),         // Croatian
    (0x041b, "sk-SK"),         // Slovak
    (0x041c, "sq-AL"),         // Albanian
    (0x041d, "sv-SE"),         // Swedish
    (0x041e, "th-TH"),         // Thai
    (0x041f, "tr-TR"),         // Turkish
    (0x0420, "ur-PK"),         // Urdu
    (0x0421, "id-ID"),         // Indonesian
    (0x0422, "uk-UA"),         // Ukrainian
    (0x0423, "be-BY"),         // Belarusian
    (0x0424, "sl-SI"),         // Slovenian
    (0x0425, "et-EE"),         // Estonian
    (0x0426, "lv-LV"),         // Latvian
    (0x0427, "lt-LT"),         // Lithuanian
    (0x0428, "tg-Cyrl-TJ"),    // Tajik (Cyrillic)
    (0x0429, "fa-IR"),         // Persian
    (0x042a, "vi-VN"),         // Vietnamese
    (0x042b, "hy-AM"),         // Armenian
    (0x042c, "az-Latn-AZ"),    // Azeri (Latin)
    (0x042d, "eu-ES"),         // Basque
    (0x042e, "hsb-DE"),        // Upper Sorbian
    (0x042f, "mk-MK"),         // Macedonian (FYROM)
    (0x0432, "tn-ZA"),         // Setswana
    (0x0434, "xh-ZA"),         // isiXhosa
    (0x0435, "zu-ZA"),         // isiZulu
    (0x0436, "af-ZA"),         // Afrikaans
    (0x0437, "ka-GE"),         // Georgian
    (0x0438, "fo-FO"),         // Faroese
    (0x0439, "hi-IN"),         // Hindi
    (0x043a, "mt-MT"),         // Maltese
    (0x043b, "se-NO"),         // Sami (Northern)
    (0x043e, "ms-MY"),         // Malay
    (0x043f, "kk-KZ"),         // Kazakh
    (0x0440, "ky-KG"),         // Kyrgyz
    (0x0441, "sw-KE"),         // Kiswahili
    (0x0442, "tk-TM"),         // Turkmen
    (0x0443, "uz-Latn-UZ"),    // Uzbek (Latin)
    (0x0443, "uz"),            // Uzbek
    (0x0444, "tt-RU"),         // Tatar
    (0x0445, "bn-IN"),         // Bengali
    (0x0446, "pa-IN"),         // Punjabi
    (0x0447, "gu-IN"),         // Gujarati
    (0x0448, "or-IN"),         // Oriya
    (0x0449, "ta-IN"),         // Tamil
    (0x044a, "te-IN"),         // Telugu
    (0x044b, "kn-IN"),         // Kannada
    (0x044c, "ml-IN"),         // Malayalam
    (0x044d, "as-IN"),         // Assamese
    (0x044e, "mr-IN"),         // Marathi
    (0x044f, "sa-IN"),         // Sanskrit
    (0x0450, "mn-Cyrl"),       // Mongolian (Cyrillic)
    (0x0451, "bo-CN"),         // Tibetan
    (0x0452, "cy-GB"),         // Welsh
    (0x0453, "km-KH"),         // Khmer
    (0x0454, "lo-LA"),         // Lao
    (0x0456, "gl-ES"),         // Galician
    (0x0457, "kok-IN"),        // Konkani
    (0x045a, "syr-SY"),        // Syriac
    (0x045b, "si-LK"),         // Sinhala
    (0x045d, "iu-Cans-CA"),    // Inuktitut (Syllabics)
    (0x045e, "am-ET"),         // Amharic
    (0x0461, "ne-NP"),         // Nepali
    (0x0462, "fy-NL"),         // Frisian
    (0x0463, "ps-AF"),         // Pashto
    (0x0464, "fil-PH"),        // Filipino
    (0x0465, "dv-MV"),         // Divehi
    (0x0468, "ha-Latn-NG"),    // Hausa (Latin)
    (0x046a, "yo-NG"),         // Yoruba
    (0x046b, "quz-BO"),        // Quechua
    (0x046c, "nso-ZA"),        // Sesotho sa Leboa
    (0x046d, "ba-RU"),         // Bashkir
    (0x046e, "lb-LU"),         // Luxembourgish
    (0x046f, "kl-GL"),         // Greenlandic
    (0x0470, "ig-NG"),         // Igbo
    (0x0478, "ii-CN"),         // Yi
    (0x047a, "arn-CL"),        // Mapudungun
    (0x047c, "moh-CA"),        // Mohawk
    (0x047e, "br-FR"),         // Breton
    (0x0480, "ug-CN"),         // Uyghur
    (0x0481, "mi-NZ"),         // Maori
    (0x0482, "oc-FR"),         // Occitan
    (0x0483, "co-FR"),         // Corsican
    (0x0484, "gsw-FR"),        // Alsatian
    (0x0485, "sah-RU"),        // Yakut
    (0x0486, "qut-GT"),        // K'iche
    (0x0487, "rw-RW"),         // Kinyarwanda
    (0x0488, "wo-SN"),         // Wolof
    (0x048c, "prs-AF"),        // Dari
    (0x0491, "gd-GB"),         // Scottish Gaelic
    (0x0801, "ar-IQ"),         // Arabic
    (0x0804, "zh-Hans"),       // Chinese (Simplified)
    (0x0807, "de-CH"),         // German
    (0x0809, "en-GB"),         // English
    (0x080a, "es-MX"),         // Spanish
    (0x080c, "fr-BE"),         // French
    (0x0810, "it-CH"),         // Italian
    (0x0813, "nl-BE"),         // Dutch
    (0x0814, "nn-NO"),         // Norwegian (Nynorsk)
    (0x0816, "pt-PT"),         // Portuguese
    (0x081a, "sr-Latn-CS"),    // Serbian (Latin)
    (0x081d, "sv-FI"),         // Swedish
    (0x082c, "az-Cyrl-AZ"),    // Azeri (Cyrillic)
    (0x082e, "dsb-DE"),        // Lower Sorbian
    (0x082e, "dsb"),           // Lower Sorbian
    (0x083b, "se-SE"),         // Sami (Northern)
    (0x083c, "ga-IE"),         // Irish
    (0x083e, "ms-BN"),         // Malay
    (0x0843, "uz-Cyrl-UZ"),    // Uzbek (Cyrillic)
    (0x0845, "bn-BD"),         // Bengali
    (0x0850, "mn-Mong-CN"),    // Mongolian (Traditional Mongolian)
    (0x085d, "iu-Latn-CA"),    // Inuktitut (Latin)
    (0x085f, "tzm-Latn-DZ"),   // Tamazight (Latin)
    (0x086b, "quz-EC"),        // Quechua
    (0x0c01, "ar-EG"),         // Arabic
    (0x0c04, "zh-Hant"),       // Chinese (Traditional)
    (0x0c07, "de-AT"),         // German
    (0x0c09, "en-AU"),         // English
    (0x0c0a, "es-ES"),         // Spanish
    (0x0c0c, "fr-CA"),         // French
    (0x0c1a, "sr-Cyrl-CS"),    // Serbian (Cyrillic)
    (0x0c3b, "se-FI"),         // Sami (Northern)
    (0x0c6b, "quz-PE"),        // Quechua
    (0x1001, "ar-LY"),         // Arabic
    (0x1004, "zh-SG"),         // Chinese (Simplified)
    (0x1007, "de-LU"),         // German
    (0x1009, "en-CA"),         // English
    (0x100a, "es-GT"),         // Spanish
    (0x100c, "fr-CH"),         // French
    (0x101a, "hr-BA"),         // Croatian (Latin)
    (0x103b, "smj-NO"),        // Sami (Lule)
    (0x1401, "ar-DZ"),         // Arabic
    (0x1404, "zh-MO"),         // Chinese (Traditional)
    (0x1407, "de-LI"),         // German
    (0x1409, "en-NZ"),         // English
    (0x140a, "es-CR"),         // Spanish
    (0x140c, "fr-LU"),         // French
    (0x141a, "bs-Latn-BA"),    // Bosnian (Latin)
    (0x141a, "bs"),            // Bosnian
    (0x143b, "smj-SE"),        // Sami (Lule)
    (0x143b, "smj"),           // Sami (Lule)
    (0x1801, "ar-MA"),         // Arabic
    (0x1809, "en-IE"),         // English
    (0x180a, "es-PA"),         // Spanish
    (0x180c, "fr-MC"),         // French
    (0x181a, "sr-Latn-BA"),    // Serbian (Latin)
    (0x183b, "sma-NO"),        // Sami (Southern)
    (0x1c01, "ar-TN"),         // Arabic
    (0x1c09, "en-ZA"),         // English
    (0x1c0a, "es-DO"),         // Spanish
    (0x1c1a, "sr-Cyrl-BA"),    // Serbian (Cyrillic)
    (0x1c3b, "sma-SE"),        // Sami (Southern)
    (0x1c3b, "sma"),           // Sami (Southern)
    (0x2001, "ar-OM"),         // Arabic
    (0x2009, "en-JM"),         // English
    (0x200a, "es-VE"),         // Spanish
    (0x201a, "bs-Cyrl-BA"),    // Bosnian (Cyrillic)
    (0x201a, "bs-Cyrl"),       // Bosnian (Cyrillic)
    (0x203b, "sms-FI"),        // Sami (Skolt)
    (0x203b, "sms"),           // Sami (Skolt)
    (0x2401, "ar-YE"),         // Arabic
    (0x2409, "en-029"),        // English
    (0x240a, "es-CO"),         // Spanish
    (0x241a, "sr-Latn-RS"),    // Serbian (Latin)
    (0x243b, "smn-FI"),        // Sami (Inari)
    (0x2801, "ar-SY"),         // Arabic
    (0x2809, "en-BZ"),         // English
    (0x280a, "es-PE"),         // Spanish
    (0x281a, "sr-Cyrl-RS"),    // Serbian (Cyrillic)
    (0x2c01, "ar-JO"),         // Arabic
    (0x2c09, "en-TT"),         // English
    (0x2c0a, "es-AR"),         // Spanish
    (0x2c1a, "sr-Latn-ME"),    // Serbian (Latin)
    (0x3001, "ar-LB"),         // Arabic
    (0x3009, "en-ZW"),         // English
    (0x300a, "es-EC"),         // Spanish
    (0x301a, "sr-Cyrl-ME"),    // Serbian (Cyrillic)
    (0x3401, "ar-KW"),         // Arabic
    (0x3409, "en-PH"),         // English
    (0x340a, "es-CL"),         // Spanish
    (0x3801, "ar-AE"),         // Arabic
    (0x380a, "es-UY"),         // Spanish
    (0x3c01, "ar-BH"),         // Arabic
    (0x3c0a, "es-PY"),         // Spanish
    (0x4001, "ar-QA"),         // Arabic
    (0x4009, "en-IN"),         // English
    (0x400a, "es-BO"),         // Spanish
    (0x4409, "en-MY"),         // English
    (0x440a, "es-SV"),         // Spanish
    (0x4809, "en-SG"),         // English
    (0x480a, "es-HN"),         // Spanish
    (0x4c0a, "es-NI"),         // Spanish
    (0x500a, "es-PR"),         // Spanish
    (0x540a, "es-US"),         // Spanish
];
