//! types for working with raw big-endian bytes

/// A trait for font scalars.
///
/// This is an internal trait for encoding and decoding big-endian bytes.
///
/// Implement it for newtypes with the `newtype_scalar!` macro rather than
/// by hand.
pub trait Scalar: Sized {
    /// The raw byte representation of this type.
    type Raw: sealed::BeByteArray;

    /// Create an instance of this type from raw big-endian bytes
    fn from_raw(raw: Self::Raw) -> Self;

    /// Encode this type as raw big-endian bytes
    fn to_raw(self) -> Self::Raw;

    /// Attempt to read a scalar from a slice.
    ///
    /// This will always succeed if `slice.len() == Self::RAW_BYTE_LEN`, and will
    /// always return `None` otherwise.
    fn read(slice: &[u8]) -> Option<Self> {
        sealed::BeByteArray::from_slice(slice).map(Self::from_raw)
    }
}

/// A trait for types that have a known, constant size.
pub trait FixedSize: Sized {
    /// The raw size of this type, in bytes.
    ///
    /// This is the size required to represent this type in a font file, which
    /// may differ from the size of the native type.
    const RAW_BYTE_LEN: usize;
}

/// we hide this trait; it isn't part of the public API, and this clarifies
/// the guarantee that it is only implemented for [u8; N]
pub(crate) mod sealed {
    /// A trait representing any fixed-size big-endian byte array.
    ///
    /// This is only used in `Scalar`, as a way of expressing the condition that the
    /// `Raw` type is always a fixed-size byte array.
    pub trait BeByteArray: Copy + AsRef<[u8]> {
        /// Must always succeed for `[u8; N]` if `slice.len() == N`, must fail otherwise
        fn from_slice(slice: &[u8]) -> Option<Self>;
    }

    impl<const N: usize> BeByteArray for [u8; N] {
        fn from_slice(slice: &[u8]) -> Option<Self> {
            slice.try_into().ok()
        }
    }
}

impl<T: Scalar> FixedSize for T {
    const RAW_BYTE_LEN: usize = core::mem::size_of::<T::Raw>();
}

/// An internal macro for implementing [`Scalar`] on a newtype over a scalar.
#[macro_export]
macro_rules! newtype_scalar {
    ($ty:ident, $raw:ty) => {
        impl $crate::Scalar for $ty {
            type Raw = $raw;
            fn to_raw(self) -> $raw {
                $crate::Scalar::to_raw(self.0)
            }

            #[inline(always)]
            fn from_raw(raw: $raw) -> Self {
                Self($crate::Scalar::from_raw(raw))
            }
        }
    };
}

macro_rules! int_scalar {
    ($ty:ty, $raw:ty) => {
        impl crate::raw::Scalar for $ty {
            type Raw = $raw;
            fn to_raw(self) -> $raw {
                self.to_be_bytes()
            }

            #[inline(always)]
            fn from_raw(raw: $raw) -> $ty {
                Self::from_be_bytes(raw)
            }
        }
    };
}

int_scalar!(u8, [u8; 1]);
int_scalar!(i8, [u8; 1]);
int_scalar!(u16, [u8; 2]);
int_scalar!(i16, [u8; 2]);
int_scalar!(u32, [u8; 4]);
int_scalar!(i32, [u8; 4]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_exact_len_only() {
        assert_eq!(u16::read(&[0x04, 0x09]), Some(0x0409));
        assert_eq!(u16::read(&[0x04]), None);
        assert_eq!(u16::read(&[0x04, 0x09, 0x00]), None);
    }

    #[test]
    fn raw_sizes() {
        assert_eq!(u8::RAW_BYTE_LEN, 1);
        assert_eq!(u16::RAW_BYTE_LEN, 2);
        assert_eq!(crate::NameId::RAW_BYTE_LEN, 2);
        assert_eq!((-2i32).to_raw(), [0xff, 0xff, 0xff, 0xfe]);
        assert_eq!(crate::NameId::from_raw([0, 6]), crate::NameId::POSTSCRIPT_NAME);
    }
}
