//! The name table

use read_names::tables::name::{
    Charset, NameStrings, MAC_ENGLISH_LANGUAGE_ID, MAC_PLATFORM_ID, MAC_ROMAN_ENCODING_ID,
    WINDOWS_ENGLISH_US_LANGUAGE_ID, WINDOWS_PLATFORM_ID, WINDOWS_UNICODE_BMP_ENCODING_ID,
};

use crate::{
    validate::{Validate, ValidationCtx},
    write::{FontWrite, TableWriter},
};

pub use read_names::tables::name::NameRecord;
pub use read_names::types::NameId;

/// The only format we write; language tag records are not supported.
const FORMAT: u16 = 0;
/// format, count, storage offset
const HEADER_LEN: usize = 6;

/// A compiled [naming table](https://docs.microsoft.com/en-us/typography/opentype/spec/name)
///
/// Each catalog field is written twice: first as a Macintosh Roman record, then
/// as a Windows Unicode BMP record. The string storage area is laid out in
/// record order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Name {
    /// The name records.
    pub name_record: Vec<NameRecord>,
    /// The encoded string for each record, in the same order.
    pub string_data: Vec<Vec<u8>>,
    skipped_legacy: Vec<NameId>,
}

impl Name {
    /// Compile the catalog fields in `strings`.
    ///
    /// Fields without a name id (the `unknownN` keys produced when reading)
    /// are ignored. A field that cannot be represented in Mac Roman is
    /// omitted from the Macintosh records; see [`skipped_legacy`][Self::skipped_legacy].
    pub fn new(strings: &NameStrings) -> Self {
        let mut table = Name::default();

        let legacy = Charset::for_legacy(MAC_ROMAN_ENCODING_ID, MAC_ENGLISH_LANGUAGE_ID);
        for (name_id, string) in catalog_strings(strings) {
            match legacy.and_then(|charset| charset.encode_str(string)) {
                Some(bytes) => table.push(
                    (MAC_PLATFORM_ID, MAC_ROMAN_ENCODING_ID, MAC_ENGLISH_LANGUAGE_ID),
                    name_id,
                    bytes,
                ),
                None => {
                    log_skipped(legacy, name_id, string);
                    table.skipped_legacy.push(name_id);
                }
            }
        }

        for (name_id, string) in catalog_strings(strings) {
            table.push(
                (
                    WINDOWS_PLATFORM_ID,
                    WINDOWS_UNICODE_BMP_ENCODING_ID,
                    WINDOWS_ENGLISH_US_LANGUAGE_ID,
                ),
                name_id,
                encode_utf16_bmp(string),
            );
        }

        log::debug!(
            "compiled {} name records, {} bytes of string data",
            table.name_record.len(),
            table.string_data_len()
        );
        table
    }

    /// The fields that were left out of the Macintosh records because they
    /// contain characters Mac Roman cannot represent.
    ///
    /// These fields are still present in the Windows records.
    pub fn skipped_legacy(&self) -> &[NameId] {
        &self.skipped_legacy
    }

    fn push(
        &mut self,
        (platform_id, encoding_id, language_id): (u16, u16, u16),
        name_id: NameId,
        bytes: Vec<u8>,
    ) {
        // out of range values are caught by validation
        let string_offset = self.string_data_len().try_into().unwrap_or(u16::MAX);
        let length = bytes.len().try_into().unwrap_or(u16::MAX);
        self.name_record.push(NameRecord::new(
            platform_id,
            encoding_id,
            language_id,
            name_id,
            length,
            string_offset,
        ));
        self.string_data.push(bytes);
    }

    fn string_data_len(&self) -> usize {
        self.string_data.iter().map(Vec::len).sum()
    }

    fn compute_count(&self) -> u16 {
        self.name_record.len().try_into().unwrap_or(u16::MAX)
    }

    fn compute_storage_offset(&self) -> u16 {
        (HEADER_LEN + self.name_record.len() * NameRecord::RAW_BYTE_LEN)
            .try_into()
            .unwrap_or(u16::MAX)
    }
}

impl From<&NameStrings> for Name {
    fn from(src: &NameStrings) -> Name {
        Name::new(src)
    }
}

fn catalog_strings(strings: &NameStrings) -> impl Iterator<Item = (NameId, &str)> + '_ {
    NameId::catalog().filter_map(|id| strings.get(id).map(|string| (id, string)))
}

/// One big-endian code unit per char; chars outside the BMP become U+FFFD.
fn encode_utf16_bmp(string: &str) -> Vec<u8> {
    string
        .chars()
        .map(|c| u16::try_from(u32::from(c)).unwrap_or(0xFFFD))
        .flat_map(u16::to_be_bytes)
        .collect()
}

fn log_skipped(charset: Option<Charset>, name_id: NameId, string: &str) {
    let label = name_id.label().unwrap_or_default();
    let Some(charset) = charset else {
        log::warn!("no legacy charset available, skipping Macintosh record for '{label}'");
        return;
    };
    if let Some(c) = string.chars().find(|c| charset.encode(*c).is_none()) {
        log::warn!(
            "char '{c}' {} not representable in {charset}, skipping Macintosh record for '{label}'",
            c.escape_unicode()
        );
    }
}

impl FontWrite for Name {
    fn write_into(&self, writer: &mut TableWriter) {
        FORMAT.write_into(writer);
        self.compute_count().write_into(writer);
        self.compute_storage_offset().write_into(writer);
        self.name_record.write_into(writer);
        for string in &self.string_data {
            writer.write_slice(string);
        }
    }
}

impl FontWrite for NameRecord {
    fn write_into(&self, writer: &mut TableWriter) {
        self.platform_id.write_into(writer);
        self.encoding_id.write_into(writer);
        self.language_id.write_into(writer);
        self.name_id.write_into(writer);
        self.length.write_into(writer);
        self.string_offset.write_into(writer);
    }
}

impl Validate for Name {
    fn validate_impl(&self, ctx: &mut ValidationCtx) {
        ctx.in_table("Name", |ctx| {
            let header_len = HEADER_LEN + self.name_record.len() * NameRecord::RAW_BYTE_LEN;
            if header_len > u16::MAX as usize {
                ctx.in_field("name_record", |ctx| {
                    ctx.report(format!(
                        "too many records ({}), storage offset overflows",
                        self.name_record.len()
                    ))
                });
            }
            if self.name_record.len() != self.string_data.len() {
                ctx.report(format!(
                    "{} name records but {} strings",
                    self.name_record.len(),
                    self.string_data.len()
                ));
            }
            ctx.in_field("name_record", |ctx| {
                ctx.in_array(|ctx| {
                    let mut position = 0;
                    for (record, string) in self.name_record.iter().zip(&self.string_data) {
                        ctx.array_item(|ctx| {
                            record.validate_impl(ctx);
                            validate_string(record, position, string, ctx);
                        });
                        position += string.len();
                    }
                })
            });
        })
    }
}

impl Validate for NameRecord {
    fn validate_impl(&self, ctx: &mut ValidationCtx) {
        if !matches!(
            (self.platform_id, self.encoding_id, self.language_id),
            (MAC_PLATFORM_ID, MAC_ROMAN_ENCODING_ID, MAC_ENGLISH_LANGUAGE_ID)
                | (
                    WINDOWS_PLATFORM_ID,
                    WINDOWS_UNICODE_BMP_ENCODING_ID,
                    WINDOWS_ENGLISH_US_LANGUAGE_ID
                )
        ) {
            ctx.report(format!(
                "unexpected platform/encoding/language ({}, {}, {:#06x})",
                self.platform_id, self.encoding_id, self.language_id
            ));
        }
    }
}

fn validate_string(
    record: &NameRecord,
    position: usize,
    string: &[u8],
    ctx: &mut ValidationCtx,
) {
    if position > u16::MAX as usize {
        ctx.in_field("string_offset", |ctx| {
            ctx.report(format!("string at {position} is out of offset range"))
        });
    } else if record.string_offset as usize != position {
        ctx.in_field("string_offset", |ctx| {
            ctx.report(format!(
                "offset {} does not match string position {position}",
                record.string_offset
            ))
        });
    }
    if string.len() > u16::MAX as usize {
        ctx.in_field("length", |ctx| {
            ctx.report(format!("string too long ({} bytes)", string.len()))
        });
    } else if record.length as usize != string.len() {
        ctx.in_field("length", |ctx| {
            ctx.report(format!(
                "length {} does not match string length {}",
                record.length,
                string.len()
            ))
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use read_names::{be_buffer, tables::name::NameKey, FontData, FontRead};
    use rstest::rstest;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn read_back(bytes: &[u8]) -> NameStrings {
        read_names::tables::name::Name::read(FontData::new(bytes))
            .unwrap()
            .into_strings()
    }

    fn all_fields() -> NameStrings {
        NameId::catalog()
            .map(|id| (id, format!("{} value", id.label().unwrap())))
            .collect()
    }

    #[test]
    fn family_and_version() {
        init();
        let strings = NameStrings::new()
            .with(NameId::FAMILY_NAME, "Test")
            .with(NameId::VERSION_STRING, "1.0");
        let table = Name::new(&strings);
        let bytes = crate::dump_table(&table).unwrap();

        let expected = be_buffer! {
            0u16, 4u16, 54u16,
            [1u16, 0, 0, 1, 4, 0],
            [1u16, 0, 0, 5, 3, 4],
            [3u16, 1, 0x409, 1, 8, 7],
            [3u16, 1, 0x409, 5, 6, 15],
            [b'T', b'e', b's', b't', b'1', b'.', b'0'],
            [0x54u16, 0x65, 0x73, 0x74, 0x31, 0x2e, 0x30]
        };
        assert_eq!(bytes, &*expected);
        assert_eq!(bytes.len(), 54 + 7 + 14);
        assert_eq!(read_back(&bytes), strings);
    }

    #[test]
    fn empty() {
        let bytes = crate::dump_table(&Name::new(&NameStrings::new())).unwrap();
        assert_eq!(bytes, [0, 0, 0, 0, 0, 6]);
        assert!(read_back(&bytes).is_empty());
    }

    #[test]
    fn roundtrip_every_field() {
        init();
        let strings = all_fields();
        let table = Name::new(&strings);
        assert_eq!(table.name_record.len(), 46);
        assert!(table.skipped_legacy().is_empty());
        let bytes = crate::dump_table(&table).unwrap();
        assert_eq!(read_back(&bytes), strings);
    }

    #[test]
    fn passes_are_in_catalog_order() {
        let table = Name::new(&all_fields());
        let (legacy, unicode) = table.name_record.split_at(23);
        assert!(legacy.iter().all(|rec| rec.platform_id == MAC_PLATFORM_ID));
        assert!(unicode.iter().all(|rec| rec.is_windows_english()));
        for pass in [legacy, unicode] {
            let ids = pass.iter().map(|rec| rec.name_id).collect::<Vec<_>>();
            assert_eq!(ids, NameId::catalog().collect::<Vec<_>>());
        }
    }

    #[test]
    fn offsets_are_cumulative() {
        let table = Name::new(&all_fields());
        let mut expected = 0;
        for (record, string) in table.name_record.iter().zip(&table.string_data) {
            assert_eq!(record.string_offset as usize, expected);
            assert_eq!(record.length as usize, string.len());
            expected += string.len();
        }
        assert_eq!(table.compute_count(), 46);
        assert_eq!(table.compute_storage_offset(), 6 + 12 * 46);
    }

    #[test]
    fn reserved_field_is_emitted() {
        let strings = NameStrings::new().with(NameId::new(15), "slot");
        let table = Name::new(&strings);
        let records = table
            .name_record
            .iter()
            .map(|rec| (rec.platform_id, rec.name_id))
            .collect::<Vec<_>>();
        assert_eq!(records, [(1, NameId::new(15)), (3, NameId::new(15))]);
        let bytes = crate::dump_table(&table).unwrap();
        let loaded = read_back(&bytes);
        assert_eq!(loaded, strings);
        let keys = loaded.iter().map(|(key, _)| key.to_string()).collect::<Vec<_>>();
        assert_eq!(keys, ["reserved"]);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut strings = NameStrings::new().with(NameId::DESIGNER, "Me");
        strings.insert(NameKey::Unknown(1), "mystery");
        let table = Name::new(&strings);
        assert_eq!(table.name_record.len(), 2);
        let bytes = crate::dump_table(&table).unwrap();
        assert_eq!(read_back(&bytes), NameStrings::new().with(NameId::DESIGNER, "Me"));
    }

    #[test]
    fn non_roman_field_is_skipped_in_legacy_pass() {
        init();
        let strings = NameStrings::new()
            .with(NameId::FAMILY_NAME, "Шрифт")
            .with(NameId::SUBFAMILY_NAME, "Regular");
        let table = Name::new(&strings);
        assert_eq!(table.skipped_legacy(), [NameId::FAMILY_NAME]);

        let platforms = table
            .name_record
            .iter()
            .map(|rec| (rec.platform_id, rec.name_id))
            .collect::<Vec<_>>();
        assert_eq!(
            platforms,
            [
                (1, NameId::SUBFAMILY_NAME),
                (3, NameId::FAMILY_NAME),
                (3, NameId::SUBFAMILY_NAME)
            ]
        );
        // the windows record still carries the family name
        let bytes = crate::dump_table(&table).unwrap();
        assert_eq!(read_back(&bytes), strings);
    }

    #[rstest]
    #[case::ascii("Regular", Some(&b"Regular"[..]))]
    #[case::accented("Café", Some(&b"Caf\x8e"[..]))]
    #[case::symbols("©™", Some(&b"\xa9\xaa"[..]))]
    #[case::euro("€", Some(&b"\xdb"[..]))]
    #[case::cyrillic("Ж", None)]
    #[case::emoji("😀", None)]
    fn legacy_encoding(#[case] string: &str, #[case] expected: Option<&[u8]>) {
        init();
        let table = Name::new(&NameStrings::new().with(NameId::FULL_NAME, string));
        let legacy = table
            .name_record
            .iter()
            .position(|rec| rec.platform_id == MAC_PLATFORM_ID)
            .map(|idx| table.string_data[idx].as_slice());
        assert_eq!(legacy, expected);
        assert_eq!(table.skipped_legacy().is_empty(), expected.is_some());
    }

    #[test]
    fn astral_chars_are_replaced() {
        let table = Name::new(&NameStrings::new().with(NameId::SAMPLE_TEXT, "a😀"));
        assert_eq!(table.string_data, [vec![0x00, 0x61, 0xff, 0xfd]]);
        assert_eq!(table.name_record[0].length, 4);
        let bytes = crate::dump_table(&table).unwrap();
        assert_eq!(read_back(&bytes).get(NameId::SAMPLE_TEXT), Some("a\u{FFFD}"));
    }

    #[test]
    fn validate_offsets() {
        let mut table = Name::new(
            &NameStrings::new()
                .with(NameId::FAMILY_NAME, "Test")
                .with(NameId::VERSION_STRING, "1.0"),
        );
        assert!(table.validate().is_ok());
        table.name_record[3].string_offset += 1;
        table.name_record[0].length = 5;
        let report = table.validate().unwrap_err();
        assert_eq!(
            report.to_string(),
            "2 validation errors:\n\
             #1\n\"length 5 does not match string length 4\"\nin: Name.name_record[0].length\n\n\
             #2\n\"offset 16 does not match string position 15\"\nin: Name.name_record[3].string_offset\n\n"
        );
        assert!(matches!(
            crate::dump_table(&table),
            Err(crate::error::Error::ValidationFailed(_))
        ));
    }

    #[test]
    fn validate_record_count() {
        let mut table = Name::new(&NameStrings::new().with(NameId::FAMILY_NAME, "Test"));
        table.string_data.pop();
        let report = table.validate().unwrap_err();
        assert_eq!(
            report.messages().collect::<Vec<_>>(),
            ["2 name records but 1 strings"]
        );

        table.name_record[1].platform_id = 0;
        table.string_data.push(vec![0, 0x54]);
        let report = table.validate().unwrap_err();
        assert_eq!(
            report.messages().collect::<Vec<_>>(),
            [
                "unexpected platform/encoding/language (0, 1, 0x0409)",
                "length 8 does not match string length 2"
            ]
        );
    }

    #[test]
    fn validate_overflow() {
        let mut table = Name::default();
        let long = vec![0u8; 40_000];
        let id = NameId::FAMILY_NAME;
        table.push((3, 1, 0x409), id, long.clone());
        table.push((3, 1, 0x409), id, long);
        table.push((3, 1, 0x409), id, vec![0u8; 70_000]);
        let report = table.validate().unwrap_err();
        assert_eq!(
            report.messages().collect::<Vec<_>>(),
            [
                "string at 80000 is out of offset range",
                "string too long (70000 bytes)"
            ]
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn build_from_json() {
        let strings: NameStrings =
            serde_json::from_str(r#"{"fontFamily": "Test", "version": "1.0"}"#).unwrap();
        let table = Name::new(&strings);
        assert_eq!(crate::dump_table(&table).unwrap().len(), 75);

        let dumped = serde_json::to_string(&table).unwrap();
        let loaded: Name = serde_json::from_str(&dumped).unwrap();
        assert_eq!(loaded, table);
    }
}
