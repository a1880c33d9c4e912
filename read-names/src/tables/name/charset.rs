//! Legacy single-byte charsets used by Macintosh platform name records.

/// A single-byte charset used by Macintosh (platform 1) name records.
///
/// Which charset applies to a record is decided by [`Charset::for_legacy`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Charset {
    MacRoman,
    MacIcelandic,
    MacTurkish,
    MacCroatian,
    MacCentralEurope,
    MacRomanian,
    MacGreek,
    MacCyrillic,
}

/// The registry key: a Macintosh script code, and either a specific language
/// code or `None`, which matches any language.
type LegacyKey = (u16, Option<u16>);

/// Maps Macintosh (script, language) pairs to a charset.
///
/// Sorted by key. Exact language matches are listed for script 0 (Roman),
/// where the language selects one of several Roman variants; the remaining
/// scripts use a single charset regardless of language.
#[rustfmt::skip]
static LEGACY_CHARSETS: &[(LegacyKey, Charset)] = &[
    ((0, Some(0)), Charset::MacRoman),
    ((0, Some(15)), Charset::MacIcelandic),
    ((0, Some(17)), Charset::MacTurkish),
    ((0, Some(18)), Charset::MacCroatian),
    ((0, Some(24)), Charset::MacCentralEurope),
    ((0, Some(25)), Charset::MacCentralEurope),
    ((0, Some(26)), Charset::MacCentralEurope),
    ((0, Some(27)), Charset::MacCentralEurope),
    ((0, Some(28)), Charset::MacCentralEurope),
    ((0, Some(36)), Charset::MacCentralEurope),
    ((0, Some(37)), Charset::MacRomanian),
    ((0, Some(38)), Charset::MacCentralEurope),
    ((0, Some(39)), Charset::MacCentralEurope),
    ((0, Some(40)), Charset::MacCentralEurope),
    ((6, None), Charset::MacGreek),
    ((7, None), Charset::MacCyrillic),
    ((29, None), Charset::MacCentralEurope),
    ((35, None), Charset::MacTurkish),
    ((37, None), Charset::MacRomanian),
];

impl Charset {
    /// Select the charset for a Macintosh record's encoding and language ids.
    ///
    /// Returns `None` if the combination is not supported.
    ///
    /// ```
    /// # use read_names::tables::name::Charset;
    /// assert_eq!(Charset::for_legacy(0, 0), Some(Charset::MacRoman));
    /// assert_eq!(Charset::for_legacy(0, 15), Some(Charset::MacIcelandic));
    /// assert_eq!(Charset::for_legacy(7, 32), Some(Charset::MacCyrillic));
    /// assert_eq!(Charset::for_legacy(1, 11), None);
    /// ```
    pub fn for_legacy(encoding_id: u16, language_id: u16) -> Option<Charset> {
        lookup((encoding_id, Some(language_id))).or_else(|| lookup((encoding_id, None)))
    }

    /// The IANA-style name of this charset.
    pub fn tag(self) -> &'static str {
        match self {
            Charset::MacRoman => "x-mac-roman",
            Charset::MacIcelandic => "x-mac-icelandic",
            Charset::MacTurkish => "x-mac-turkish",
            Charset::MacCroatian => "x-mac-croatian",
            Charset::MacCentralEurope => "x-mac-ce",
            Charset::MacRomanian => "x-mac-romanian",
            Charset::MacGreek => "x-mac-greek",
            Charset::MacCyrillic => "x-mac-cyrillic",
        }
    }

    /// Encode a single `char`, returning `None` if it is not representable.
    pub fn encode(self, c: char) -> Option<u8> {
        match self {
            Charset::MacRoman => MacRomanMapping.encode(c),
            other => other.high_half().and_then(|half| half.encode(c)),
        }
    }

    /// Encode a string, returning `None` if any `char` is not representable.
    pub fn encode_str(self, s: &str) -> Option<alloc::vec::Vec<u8>> {
        s.chars().map(|c| self.encode(c)).collect()
    }

    fn high_half(self) -> Option<HighHalf> {
        let table = match self {
            Charset::MacRoman => return None,
            Charset::MacIcelandic => &MAC_ICELANDIC_HIGH,
            Charset::MacTurkish => &MAC_TURKISH_HIGH,
            Charset::MacCroatian => &MAC_CROATIAN_HIGH,
            Charset::MacCentralEurope => &MAC_CENTRAL_EUROPE_HIGH,
            Charset::MacRomanian => &MAC_ROMANIAN_HIGH,
            Charset::MacGreek => &MAC_GREEK_HIGH,
            Charset::MacCyrillic => &MAC_CYRILLIC_HIGH,
        };
        Some(HighHalf(table))
    }
}

impl core::fmt::Display for Charset {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.tag())
    }
}

fn lookup(key: LegacyKey) -> Option<Charset> {
    LEGACY_CHARSETS
        .binary_search_by(|entry| entry.0.cmp(&key))
        .ok()
        .map(|ix| LEGACY_CHARSETS[ix].1)
}

/// The upper half (0x80..=0xFF) of a charset that agrees with ASCII below 0x80,
/// indexed by byte value.
struct HighHalf(&'static [u16; 128]);

impl HighHalf {
    fn encode(&self, c: char) -> Option<u8> {
        if c.is_ascii() {
            return Some(c as u8);
        }
        let raw_c: u16 = (c as u32).try_into().ok()?;
        self.0
            .iter()
            .position(|unic| *unic == raw_c)
            .map(|idx| idx as u8 + 0x80)
    }
}

/// A helper for encoding Mac OS Roman strings.
pub struct MacRomanMapping;

impl MacRomanMapping {
    const START_REMAP: u8 = 128;

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

#[rustfmt::skip]
static MAC_ICELANDIC_HIGH: [u16; 128] = [
    196, 197, 199, 201, 209, 214, 220, 225, 224, 226, 228, 227, 229, 231, 233,
    232, 234, 235, 237, 236, 238, 239, 241, 243, 242, 244, 246, 245, 250, 249,
    251, 252, 221, 176, 162, 163, 167, 8226, 182, 223, 174, 169, 8482, 180,
    168, 8800, 198, 216, 8734, 177, 8804, 8805, 165, 181, 8706, 8721, 8719,
    960, 8747, 170, 186, 937, 230, 248, 191, 161, 172, 8730, 402, 8776, 8710,
    171, 187, 8230, 160, 192, 195, 213, 338, 339, 8211, 8212, 8220, 8221, 8216,
    8217, 247, 9674, 255, 376, 8260, 8364, 208, 240, 222, 254, 253, 183, 8218,
    8222, 8240, 194, 202, 193, 203, 200, 205, 206, 207, 204, 211, 212, 63743,
    210, 218, 219, 217, 305, 710, 732, 175, 728, 729, 730, 184, 733, 731, 711,
];

#[rustfmt::skip]
static MAC_TURKISH_HIGH: [u16; 128] = [
    196, 197, 199, 201, 209, 214, 220, 225, 224, 226, 228, 227, 229, 231, 233,
    232, 234, 235, 237, 236, 238, 239, 241, 243, 242, 244, 246, 245, 250, 249,
    251, 252, 8224, 176, 162, 163, 167, 8226, 182, 223, 174, 169, 8482, 180,
    168, 8800, 198, 216, 8734, 177, 8804, 8805, 165, 181, 8706, 8721, 8719,
    960, 8747, 170, 186, 937, 230, 248, 191, 161, 172, 8730, 402, 8776, 8710,
    171, 187, 8230, 160, 192, 195, 213, 338, 339, 8211, 8212, 8220, 8221, 8216,
    8217, 247, 9674, 255, 376, 286, 287, 304, 305, 350, 351, 8225, 183, 8218,
    8222, 8240, 194, 202, 193, 203, 200, 205, 206, 207, 204, 211, 212, 63743,
    210, 218, 219, 217, 63648, 710, 732, 175, 728, 729, 730, 184, 733, 731,
    711,
];

#[rustfmt::skip]
static MAC_CROATIAN_HIGH: [u16; 128] = [
    196, 197, 199, 201, 209, 214, 220, 225, 224, 226, 228, 227, 229, 231, 233,
    232, 234, 235, 237, 236, 238, 239, 241, 243, 242, 244, 246, 245, 250, 249,
    251, 252, 8224, 176, 162, 163, 167, 8226, 182, 223, 174, 352, 8482, 180,
    168, 8800, 381, 216, 8734, 177, 8804, 8805, 8710, 181, 8706, 8721, 8719,
    353, 8747, 170, 186, 937, 382, 248, 191, 161, 172, 8730, 402, 8776, 262,
    171, 268, 8230, 160, 192, 195, 213, 338, 339, 272, 8212, 8220, 8221, 8216,
    8217, 247, 9674, 63743, 169, 8260, 8364, 8249, 8250, 198, 187, 8211, 183,
    8218, 8222, 8240, 194, 263, 193, 269, 200, 205, 206, 207, 204, 211, 212,
    273, 210, 218, 219, 217, 305, 710, 732, 175, 960, 203, 730, 184, 202, 230,
    711,
];

#[rustfmt::skip]
static MAC_CENTRAL_EUROPE_HIGH: [u16; 128] = [
    196, 256, 257, 201, 260, 214, 220, 225, 261, 268, 228, 269, 262, 263, 233,
    377, 378, 270, 237, 271, 274, 275, 278, 243, 279, 244, 246, 245, 250, 282,
    283, 252, 8224, 176, 280, 163, 167, 8226, 182, 223, 174, 169, 8482, 281,
    168, 8800, 291, 302, 303, 298, 8804, 8805, 299, 310, 8706, 8721, 322, 315,
    316, 317, 318, 313, 314, 325, 326, 323, 172, 8730, 324, 327, 8710, 171,
    187, 8230, 160, 328, 336, 213, 337, 332, 8211, 8212, 8220, 8221, 8216,
    8217, 247, 9674, 333, 340, 341, 344, 8249, 8250, 345, 342, 343, 352, 8218,
    8222, 353, 346, 347, 193, 356, 357, 205, 381, 382, 362, 211, 212, 363, 366,
    218, 367, 368, 369, 370, 371, 221, 253, 311, 379, 321, 380, 290, 711,
];

#[rustfmt::skip]
static MAC_ROMANIAN_HIGH: [u16; 128] = [
    196, 197, 199, 201, 209, 214, 220, 225, 224, 226, 228, 227, 229, 231, 233,
    232, 234, 235, 237, 236, 238, 239, 241, 243, 242, 244, 246, 245, 250, 249,
    251, 252, 8224, 176, 162, 163, 167, 8226, 182, 223, 174, 169, 8482, 180,
    168, 8800, 258, 536, 8734, 177, 8804, 8805, 165, 181, 8706, 8721, 8719,
    960, 8747, 170, 186, 937, 259, 537, 191, 161, 172, 8730, 402, 8776, 8710,
    171, 187, 8230, 160, 192, 195, 213, 338, 339, 8211, 8212, 8220, 8221, 8216,
    8217, 247, 9674, 255, 376, 8260, 8364, 8249, 8250, 538, 539, 8225, 183,
    8218, 8222, 8240, 194, 202, 193, 203, 200, 205, 206, 207, 204, 211, 212,
    63743, 210, 218, 219, 217, 305, 710, 732, 175, 728, 729, 730, 184, 733,
    731, 711,
];

#[rustfmt::skip]
static MAC_GREEK_HIGH: [u16; 128] = [
    196, 185, 178, 201, 179, 214, 220, 901, 224, 226, 228, 900, 168, 231, 233,
    232, 234, 235, 163, 8482, 238, 239, 8226, 189, 8240, 244, 246, 166, 8364,
    249, 251, 252, 8224, 915, 916, 920, 923, 926, 928, 223, 174, 169, 931, 938,
    167, 8800, 176, 183, 913, 177, 8804, 8805, 165, 914, 917, 918, 919, 921,
    922, 924, 934, 939, 936, 937, 940, 925, 172, 927, 929, 8776, 932, 171, 187,
    8230, 160, 933, 935, 902, 904, 339, 8211, 8213, 8220, 8221, 8216, 8217,
    247, 905, 906, 908, 910, 941, 942, 943, 972, 911, 973, 945, 946, 968, 948,
    949, 966, 947, 951, 953, 958, 954, 955, 956, 957, 959, 960, 974, 961, 963,
    964, 952, 969, 962, 967, 965, 950, 970, 971, 912, 944, 173,
];

#[rustfmt::skip]
static MAC_CYRILLIC_HIGH: [u16; 128] = [
    1040, 1041, 1042, 1043, 1044, 1045, 1046, 1047, 1048, 1049, 1050, 1051,
    1052, 1053, 1054, 1055, 1056, 1057, 1058, 1059, 1060, 1061, 1062, 1063,
    1064, 1065, 1066, 1067, 1068, 1069, 1070, 1071, 8224, 176, 1168, 163, 167,
    8226, 182, 1030, 174, 169, 8482, 1026, 1106, 8800, 1027, 1107, 8734, 177,
    8804, 8805, 1110, 181, 1169, 1032, 1028, 1108, 1031, 1111, 1033, 1113,
    1034, 1114, 1112, 1029, 172, 8730, 402, 8776, 8710, 171, 187, 8230, 160,
    1035, 1115, 1036, 1116, 1109, 8211, 8212, 8220, 8221, 8216, 8217, 247,
    8222, 1038, 1118, 1039, 1119, 8470, 1025, 1105, 1103, 1072, 1073, 1074,
    1075, 1076, 1077, 1078, 1079, 1080, 1081, 1082, 1083, 1084, 1085, 1086,
    1087, 1088, 1089, 1090, 1091, 1092, 1093, 1094, 1095, 1096, 1097, 1098,
    1099, 1100, 1101, 1102, 8364,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_sorted() {
        assert!(LEGACY_CHARSETS.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn roman_languages() {
        assert_eq!(Charset::for_legacy(0, 0), Some(Charset::MacRoman));
        assert_eq!(Charset::for_legacy(0, 17), Some(Charset::MacTurkish));
        assert_eq!(Charset::for_legacy(0, 18), Some(Charset::MacCroatian));
        for lang in (24..=28).chain(36..=36).chain(38..=40) {
            assert_eq!(
                Charset::for_legacy(0, lang),
                Some(Charset::MacCentralEurope),
                "{lang}"
            );
        }
        assert_eq!(Charset::for_legacy(0, 37), Some(Charset::MacRomanian));
        // a Roman language without its own variant is untabulated
        assert_eq!(Charset::for_legacy(0, 1), None);
    }

    #[test]
    fn wildcard_scripts_ignore_language() {
        for lang in [0, 14, 32, 0xFFFF] {
            assert_eq!(Charset::for_legacy(6, lang), Some(Charset::MacGreek));
            assert_eq!(Charset::for_legacy(7, lang), Some(Charset::MacCyrillic));
            assert_eq!(
                Charset::for_legacy(29, lang),
                Some(Charset::MacCentralEurope)
            );
            assert_eq!(Charset::for_legacy(35, lang), Some(Charset::MacTurkish));
            assert_eq!(Charset::for_legacy(37, lang), Some(Charset::MacRomanian));
        }
        assert_eq!(Charset::for_legacy(1, 0), None);
        assert_eq!(Charset::for_legacy(30, 0), None);
    }

    #[test]
    fn mac_roman() {
        static INPUT: &str = "Joachim Müller-Lancé";
        let encoded = INPUT
            .chars()
            .map(|c| MacRomanMapping.encode(c).unwrap())
            .collect::<Vec<_>>();
        assert_eq!(encoded, b"Joachim M\x9fller-Lanc\x8e");
        assert_eq!(MacRomanMapping.encode('é'), Some(0x8E));
        assert_eq!(MacRomanMapping.encode('€'), Some(0xDB));
        assert_eq!(MacRomanMapping.encode('ı'), Some(0xF5));
        assert_eq!(MacRomanMapping.encode('Ş'), None);
        assert_eq!(MacRomanMapping.encode('😀'), None);
    }

    #[test]
    fn mac_roman_table_covers_high_half() {
        assert!(MAC_ROMAN_ENCODE.windows(2).all(|w| w[0].0 < w[1].0));
        let mut bytes = MAC_ROMAN_ENCODE.map(|(_, byte)| byte);
        bytes.sort_unstable();
        assert!(bytes.iter().copied().eq(128..=255u8));
    }

    #[test]
    fn roman_variants() {
        assert_eq!(Charset::MacIcelandic.encode('Þ'), Some(0xDE));
        // ﬁ lives at 0xDE in Mac Roman, which Icelandic reassigns
        assert_eq!(Charset::MacIcelandic.encode('ﬁ'), None);
        assert_eq!(Charset::MacIcelandic.encode('é'), Some(0x8E));

        assert_eq!(Charset::MacTurkish.encode('ı'), Some(0xDD));
        assert_eq!(Charset::MacTurkish.encode('Ş'), Some(0xDE));
        assert_eq!(Charset::MacTurkish.encode('ﬁ'), None);

        assert_eq!(Charset::MacRomanian.encode('ș'), Some(0xBF));
        assert_eq!(Charset::MacRomanian.encode('Æ'), None);
    }

    #[test]
    fn other_scripts() {
        assert_eq!(Charset::MacCroatian.encode('Š'), Some(0xA9));
        assert_eq!(Charset::MacCentralEurope.encode('ł'), Some(0xB8));
        assert_eq!(Charset::MacCentralEurope.encode('Þ'), None);
        assert_eq!(Charset::MacGreek.encode('α'), Some(0xE1));
        assert_eq!(Charset::MacCyrillic.encode('Ж'), Some(0x86));
        assert_eq!(Charset::MacCyrillic.encode('é'), None);
        assert_eq!(Charset::MacCyrillic.encode('A'), Some(b'A'));
    }

    #[test]
    fn every_high_byte_is_reachable() {
        for charset in [
            Charset::MacIcelandic,
            Charset::MacTurkish,
            Charset::MacCroatian,
            Charset::MacCentralEurope,
            Charset::MacRomanian,
            Charset::MacGreek,
            Charset::MacCyrillic,
        ] {
            let half = charset.high_half().unwrap();
            for (idx, unit) in half.0.iter().enumerate() {
                let c = char::from_u32(*unit as u32).unwrap();
                let byte = 0x80 + idx as u8;
                assert_eq!(charset.encode(c), Some(byte), "{charset} {byte:#04X}");
            }
            for byte in 0..0x80u8 {
                assert_eq!(charset.encode(byte as char), Some(byte));
            }
        }
        assert!(Charset::MacRoman.high_half().is_none());
    }

    #[test]
    fn encode_whole_strings() {
        assert_eq!(
            Charset::MacRoman.encode_str("Test"),
            Some(b"Test".to_vec())
        );
        assert_eq!(Charset::MacRoman.encode_str("naïve"), Some(vec![b'n', b'a', 0x95, b'v', b'e']));
        assert_eq!(Charset::MacRoman.encode_str("Ωmega ☃"), None);
        assert_eq!(Charset::MacTurkish.tag(), "x-mac-turkish");
    }
}
