//! small utilities used in tests

use types::Scalar;

use crate::FontData;

/// A convenience type for generating a buffer of big-endian bytes.
#[derive(Debug, Clone, Default)]
pub struct BeBuffer {
    data: Vec<u8>,
}

impl BeBuffer {
    pub fn new() -> Self {
        Default::default()
    }

    /// The current length of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the buffer contains zero bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write any scalar to this buffer.
    pub fn push(mut self, item: impl Scalar) -> Self {
        self.data.extend(item.to_raw().as_ref());
        self
    }

    /// Write multiple scalars into the buffer
    pub fn extend<T: Scalar>(mut self, iter: impl IntoIterator<Item = T>) -> Self {
        for item in iter {
            self.data.extend(item.to_raw().as_ref());
        }
        self
    }

    pub fn font_data(&self) -> FontData<'_> {
        FontData::new(&self.data)
    }
}

impl std::ops::Deref for BeBuffer {
    type Target = [u8];
    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

/// Build a [`BeBuffer`] from a list of scalars.
///
/// Each item is either a single scalar or a bracketed list of scalars of the
/// same type. Items must be single tokens: bind computed values first.
#[macro_export]
macro_rules! be_buffer {
    ( $( $item:tt ),* $(,)? ) => {{
        let buf = $crate::test_helpers::BeBuffer::new();
        $( let buf = $crate::be_buffer_add!(buf, $item); )*
        buf
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! be_buffer_add {
    ($buf:ident, [ $( $x:expr ),* $(,)? ]) => {
        $buf.extend([ $( $x ),* ])
    };
    ($buf:ident, $x:expr) => {
        $buf.push($x)
    };
}
