//! Traits for interpreting font data

use crate::font_data::FontData;

/// A type that can be read from raw table data.
///
/// This trait is implemented for items that are self-describing: that is,
/// items that do not require any external state in order to interpret their
/// underlying bytes.
pub trait FontRead<'a>: Sized {
    /// Read an instance of `Self` from the provided data, performing validation.
    ///
    /// In the case of a table, this method is responsible for ensuring the input
    /// data is consistent: this means ensuring that any versioned fields are
    /// present as required by the version, and that any array lengths are not
    /// out-of-bounds.
    fn read(data: FontData<'a>) -> Result<Self, ReadError>;
}

/// An error that occurs when reading font data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    OutOfBounds,
}

impl core::fmt::Display for ReadError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ReadError::OutOfBounds => write!(f, "An offset was out of bounds"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ReadError {}
