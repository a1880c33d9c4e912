#![no_main]
use libfuzzer_sys::fuzz_target;
use read_names::{tables::name::Name, FontData};

fuzz_target!(|data: &[u8]| {
    // the first byte selects the start offset of the table
    let Some((&start, rest)) = data.split_first() else {
        return;
    };
    let data = FontData::new(rest);
    if let Ok(name) = Name::read_at(data, start as usize % 8, None) {
        for (key, value) in name.strings().iter() {
            let _ = (key.to_string(), value.len());
        }
    }
});
