//! The [name (Naming)](https://docs.microsoft.com/en-us/typography/opentype/spec/name) table

mod charset;

use alloc::{
    collections::{btree_map, BTreeMap},
    string::{String, ToString},
};
use core::{fmt, str::FromStr};

use crate::{FontData, FontRead, ReadError};

pub use charset::{Charset, MacRomanMapping};
pub use types::NameId;

/// The Windows platform.
pub const WINDOWS_PLATFORM_ID: u16 = 3;
/// The Unicode BMP encoding on the Windows platform.
pub const WINDOWS_UNICODE_BMP_ENCODING_ID: u16 = 1;
/// The US English language on the Windows platform.
pub const WINDOWS_ENGLISH_US_LANGUAGE_ID: u16 = 0x0409;
/// The Macintosh platform.
pub const MAC_PLATFORM_ID: u16 = 1;
/// The Roman script on the Macintosh platform.
pub const MAC_ROMAN_ENCODING_ID: u16 = 0;
/// The English language on the Macintosh platform.
pub const MAC_ENGLISH_LANGUAGE_ID: u16 = 0;

/// The decoded contents of a `name` table.
///
/// Only records for the Windows platform with Unicode BMP encoding and US
/// English language are decoded; all others are skipped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Name {
    format: u16,
    strings: NameStrings,
    lang_tag_count: Option<u16>,
}

impl Name {
    /// Decode the table that begins at `offset` within `data`.
    ///
    /// `lang_tags` is the raw data of the language tag table that format 1
    /// records refer to. It is not currently used.
    pub fn read_at(
        data: FontData<'_>,
        offset: usize,
        _lang_tags: Option<FontData<'_>>,
    ) -> Result<Name, ReadError> {
        let table = data.split_off(offset).ok_or(ReadError::OutOfBounds)?;
        let mut cursor = table.cursor();
        let format: u16 = cursor.read()?;
        let count: u16 = cursor.read()?;
        let storage_offset = cursor.read::<u16>()? as usize;

        let mut strings = NameStrings::default();
        let mut n_unknown = 0;
        for _ in 0..count {
            let record: NameRecord = cursor.read_item(NameRecord::RAW_BYTE_LEN)?;
            if !record.is_windows_english() {
                continue;
            }
            let value = record.decode_utf16(table, storage_offset)?;
            let key = match NameKey::for_id(record.name_id) {
                Some(key) => key,
                None => {
                    n_unknown += 1;
                    NameKey::Unknown(n_unknown)
                }
            };
            strings.insert(key, value);
        }

        let lang_tag_count = match format {
            1 => Some(cursor.read()?),
            _ => None,
        };

        Ok(Name {
            format,
            strings,
            lang_tag_count,
        })
    }

    /// The table format, as declared in the header.
    pub fn format(&self) -> u16 {
        self.format
    }

    /// The number of language tag records, present only in format 1 tables.
    pub fn lang_tag_count(&self) -> Option<u16> {
        self.lang_tag_count
    }

    /// The decoded strings.
    pub fn strings(&self) -> &NameStrings {
        &self.strings
    }

    /// Convenience method for looking up a decoded string.
    pub fn get(&self, id: NameId) -> Option<&str> {
        self.strings.get(id)
    }

    /// Consume the table, returning the decoded strings.
    pub fn into_strings(self) -> NameStrings {
        self.strings
    }
}

impl<'a> FontRead<'a> for Name {
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        Name::read_at(data, 0, None)
    }
}

/// A single record in the `name` table.
///
/// On the wire this is six big-endian `uint16` values, in field order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NameRecord {
    pub platform_id: u16,
    pub encoding_id: u16,
    pub language_id: u16,
    pub name_id: NameId,
    /// The length of the string, in bytes.
    pub length: u16,
    /// Offset of the string from the start of the string storage area.
    pub string_offset: u16,
}

impl NameRecord {
    /// The size of an encoded record.
    pub const RAW_BYTE_LEN: usize = 12;

    /// Create a new record.
    pub fn new(
        platform_id: u16,
        encoding_id: u16,
        language_id: u16,
        name_id: NameId,
        length: u16,
        string_offset: u16,
    ) -> Self {
        Self {
            platform_id,
            encoding_id,
            language_id,
            name_id,
            length,
            string_offset,
        }
    }

    /// `true` if this is a Windows, Unicode BMP, US English record.
    pub fn is_windows_english(&self) -> bool {
        self.platform_id == WINDOWS_PLATFORM_ID
            && self.encoding_id == WINDOWS_UNICODE_BMP_ENCODING_ID
            && self.language_id == WINDOWS_ENGLISH_US_LANGUAGE_ID
    }

    /// Decode this record's string as a sequence of 16-bit code units.
    ///
    /// `storage_offset` is the position of the string storage area within
    /// `table`. Each code unit becomes one `char`; surrogates are not paired,
    /// and are replaced with U+FFFD. An odd trailing byte is ignored.
    pub fn decode_utf16(
        &self,
        table: FontData<'_>,
        storage_offset: usize,
    ) -> Result<String, ReadError> {
        let start = storage_offset + self.string_offset as usize;
        (0..self.length as usize / 2)
            .map(|i| {
                table.read_at::<u16>(start + i * 2).map(|unit| {
                    char::from_u32(unit as u32).unwrap_or(char::REPLACEMENT_CHARACTER)
                })
            })
            .collect()
    }
}

impl<'a> FontRead<'a> for NameRecord {
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        Ok(NameRecord {
            platform_id: cursor.read()?,
            encoding_id: cursor.read()?,
            language_id: cursor.read()?,
            name_id: cursor.read()?,
            length: cursor.read()?,
            string_offset: cursor.read()?,
        })
    }
}

/// The key under which a decoded string is stored.
///
/// Strings whose identifier has a semantic label (see [`NameId::label`]) are
/// keyed by that identifier. Others are numbered from 1, in the order they
/// were decoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NameKey {
    Id(NameId),
    Unknown(u32),
}

impl NameKey {
    /// The key for this identifier, if it has a semantic label.
    pub fn for_id(id: NameId) -> Option<Self> {
        id.label().map(|_| NameKey::Id(id))
    }

    /// The identifier, for keys that have one.
    pub fn name_id(&self) -> Option<NameId> {
        match self {
            NameKey::Id(id) => Some(*id),
            NameKey::Unknown(_) => None,
        }
    }
}

impl From<NameId> for NameKey {
    fn from(src: NameId) -> NameKey {
        NameKey::Id(src)
    }
}

impl fmt::Display for NameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameKey::Id(id) => match id.label() {
                Some(label) => f.write_str(label),
                None => write!(f, "{}", id.to_u16()),
            },
            NameKey::Unknown(n) => write!(f, "unknown{n}"),
        }
    }
}

/// An error returned when parsing a [`NameKey`] from a string fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidNameKey(String);

impl fmt::Display for InvalidNameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a name field", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidNameKey {}

impl FromStr for NameKey {
    type Err = InvalidNameKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(id) = NameId::from_label(s) {
            return Ok(NameKey::Id(id));
        }
        s.strip_prefix("unknown")
            .filter(|n| n.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|n| n.parse::<u32>().ok())
            .filter(|n| *n > 0)
            .map(NameKey::Unknown)
            .ok_or_else(|| InvalidNameKey(s.to_string()))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for NameKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for NameKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = <alloc::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A set of name strings, keyed by field.
///
/// This is both what is produced when a table is decoded, and what is
/// consumed when a table is compiled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NameStrings(BTreeMap<NameKey, String>);

impl NameStrings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the string for a field, returning the previous value, if any.
    pub fn insert(&mut self, key: impl Into<NameKey>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Builder-style method to set the string for a field.
    pub fn with(mut self, key: impl Into<NameKey>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// The string stored for this identifier.
    pub fn get(&self, id: NameId) -> Option<&str> {
        self.get_key(&NameKey::Id(id))
    }

    /// The string stored under this key.
    pub fn get_key(&self, key: &NameKey) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Remove the string stored under this key.
    pub fn remove(&mut self, key: &NameKey) -> Option<String> {
        self.0.remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the fields, in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&NameKey, &str)> + '_ {
        self.0.iter().map(|(key, value)| (key, value.as_str()))
    }
}

impl<K: Into<NameKey>, V: Into<String>> FromIterator<(K, V)> for NameStrings {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        NameStrings(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl<K: Into<NameKey>, V: Into<String>> Extend<(K, V)> for NameStrings {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        self.0.extend(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into())),
        )
    }
}

impl IntoIterator for NameStrings {
    type Item = (NameKey, String);
    type IntoIter = btree_map::IntoIter<NameKey, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
