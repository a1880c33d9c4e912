#![no_main]
//! Compile arbitrary strings, then check that reading recovers them.

use libfuzzer_sys::{arbitrary, fuzz_target};
use read_names::{
    tables::name::{Name as ReadName, NameStrings},
    types::NameId,
    FontData, FontRead,
};
use write_names::tables::name::Name;

#[derive(Debug, arbitrary::Arbitrary)]
struct Input {
    fields: Vec<(u8, String)>,
}

fuzz_target!(|input: Input| {
    let strings = input
        .fields
        .into_iter()
        .map(|(id, value)| (NameId::new(id as u16 % 23), value))
        .filter(|(id, _)| id.label().is_some())
        .collect::<NameStrings>();

    let table = Name::new(&strings);
    let Ok(bytes) = write_names::dump_table(&table) else {
        // only oversized input fails validation
        return;
    };
    let loaded = ReadName::read(FontData::new(&bytes)).expect("compiled table must parse");

    // reading yields one char per utf-16 unit, with astral chars replaced
    for (key, value) in strings.iter() {
        let expected = value
            .chars()
            .map(|c| if c.len_utf16() == 1 { c } else { '\u{FFFD}' })
            .collect::<String>();
        assert_eq!(loaded.strings().get_key(key), Some(expected.as_str()));
    }
    assert_eq!(loaded.strings().len(), strings.len());
});
