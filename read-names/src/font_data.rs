//! raw font bytes

use core::ops::{Bound, RangeBounds};

use types::{FixedSize, Scalar};

use crate::read::{FontRead, ReadError};

/// A reference to raw binary font data.
///
/// This is a wrapper around a byte slice, that provides convenience methods
/// for parsing and validating that data.
#[derive(Debug, Default, Clone, Copy)]
pub struct FontData<'a> {
    bytes: &'a [u8],
}

/// A cursor for sequentially reading big-endian values.
///
/// Every read is bounds checked; reading past the end of the underlying
/// data returns [`ReadError::OutOfBounds`] and the cursor should be discarded.
pub struct Cursor<'a> {
    pos: usize,
    data: FontData<'a>,
}

impl<'a> FontData<'a> {
    /// Create a new `FontData` with these bytes.
    pub const fn new(bytes: &'a [u8]) -> Self {
        FontData { bytes }
    }

    /// The length of the data, in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// `true` if the data has a length of zero bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns self[pos..]
    pub fn split_off(&self, pos: usize) -> Option<FontData<'a>> {
        self.bytes.get(pos..).map(|bytes| FontData { bytes })
    }

    pub fn slice(&self, range: impl RangeBounds<usize>) -> Option<FontData<'a>> {
        let bounds = (range.start_bound().cloned(), range.end_bound().cloned());
        self.bytes.get(bounds).map(|bytes| FontData { bytes })
    }

    /// Read a scalar at the provided location in the data.
    pub fn read_at<T: Scalar>(&self, offset: usize) -> Result<T, ReadError> {
        let end = offset
            .checked_add(T::RAW_BYTE_LEN)
            .ok_or(ReadError::OutOfBounds)?;
        self.bytes
            .get(offset..end)
            .and_then(T::read)
            .ok_or(ReadError::OutOfBounds)
    }

    pub(crate) fn cursor(&self) -> Cursor<'a> {
        Cursor {
            pos: 0,
            data: *self,
        }
    }

    /// Return the data as a byte slice
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

impl<'a> Cursor<'a> {
    pub(crate) fn advance_by(&mut self, n_bytes: usize) {
        self.pos = self.pos.saturating_add(n_bytes);
    }

    pub(crate) fn read<T: Scalar>(&mut self) -> Result<T, ReadError> {
        let temp = self.data.read_at(self.pos);
        self.advance_by(T::RAW_BYTE_LEN);
        temp
    }

    /// Read a fixed-length item that knows how to parse itself.
    pub(crate) fn read_item<T: FontRead<'a>>(&mut self, len: usize) -> Result<T, ReadError> {
        let end = self.pos.checked_add(len).ok_or(ReadError::OutOfBounds)?;
        let temp = self
            .data
            .slice(self.pos..end)
            .ok_or(ReadError::OutOfBounds)
            .and_then(T::read);
        self.pos = end;
        temp
    }
}

impl AsRef<[u8]> for FontData<'_> {
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}

impl<'a> From<&'a [u8]> for FontData<'a> {
    fn from(src: &'a [u8]) -> FontData<'a> {
        FontData::new(src)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_reads_sequentially() {
        let data = FontData::new(&[0, 1, 0, 2, 0xff]);
        let mut cursor = data.cursor();
        assert_eq!(cursor.read::<u16>().unwrap(), 1);
        assert_eq!(cursor.read::<u16>().unwrap(), 2);
        assert!(matches!(
            cursor.read::<u16>(),
            Err(ReadError::OutOfBounds)
        ));
    }

    #[test]
    fn read_at_end_of_data() {
        let data = FontData::new(&[0xca, 0xfe]);
        assert_eq!(data.read_at::<u16>(0).unwrap(), 0xcafe);
        assert!(data.read_at::<u16>(1).is_err());
        assert!(data.read_at::<u16>(usize::MAX).is_err());
    }

    #[test]
    fn split_and_slice() {
        let data = FontData::new(&[1, 2, 3, 4]);
        assert_eq!(data.split_off(2).unwrap().as_bytes(), &[3, 4]);
        assert!(data.split_off(4).unwrap().is_empty());
        assert!(data.split_off(5).is_none());
        assert_eq!(data.slice(1..3).unwrap().as_bytes(), &[2, 3]);
        assert!(data.slice(3..6).is_none());
    }
}
