//! Serializing tables to big-endian bytes

use crate::error::Error;
use crate::validate::Validate;

/// A type that that can be written out as part of a font file.
pub trait FontWrite {
    /// Write our data into this [TableWriter].
    fn write_into(&self, writer: &mut TableWriter);
}

/// An object that accumulates the big-endian bytes of a table.
///
/// The `name` table has no subtables, so everything is written contiguously
/// in the order it is encountered.
#[derive(Debug, Default)]
pub struct TableWriter {
    bytes: Vec<u8>,
}

/// Attempt to serialize a table.
///
/// If the table is malformed, this will return an
/// [`Error::ValidationFailed`], otherwise it will return the bytes encoding
/// the table.
pub fn dump_table<T: FontWrite + Validate>(table: &T) -> Result<Vec<u8>, Error> {
    table.validate().map_err(Error::ValidationFailed)?;
    let mut writer = TableWriter::default();
    table.write_into(&mut writer);
    Ok(writer.into_data())
}

impl TableWriter {
    /// Write raw bytes into this table.
    ///
    /// The caller is responsible for ensuring bytes are in big-endian order.
    #[inline]
    pub fn write_slice(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes)
    }

    /// The number of bytes written so far.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub(crate) fn into_data(self) -> Vec<u8> {
        self.bytes
    }
}

macro_rules! write_be_bytes {
    ($ty:ty) => {
        impl FontWrite for $ty {
            #[inline]
            fn write_into(&self, writer: &mut TableWriter) {
                writer.write_slice(&self.to_be_bytes())
            }
        }
    };
}

write_be_bytes!(u8);
write_be_bytes!(i8);
write_be_bytes!(u16);
write_be_bytes!(i16);
write_be_bytes!(u32);
write_be_bytes!(i32);
write_be_bytes!(font_types::NameId);

impl<T: FontWrite> FontWrite for [T] {
    fn write_into(&self, writer: &mut TableWriter) {
        self.iter().for_each(|item| item.write_into(writer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::ValidationCtx;

    struct Pair(u16, Vec<u8>);

    impl FontWrite for Pair {
        fn write_into(&self, writer: &mut TableWriter) {
            self.0.write_into(writer);
            writer.write_slice(&self.1);
        }
    }

    impl Validate for Pair {
        fn validate_impl(&self, ctx: &mut ValidationCtx) {
            ctx.in_table("Pair", |ctx| {
                if self.1.len() != self.0 as usize {
                    ctx.in_field("1", |ctx| ctx.report("length mismatch"));
                }
            })
        }
    }

    #[test]
    fn scalars_are_big_endian() {
        let mut writer = TableWriter::default();
        [0x1234u16, 0xabcd].write_into(&mut writer);
        (-2i16).write_into(&mut writer);
        font_types::NameId::new(0x0102).write_into(&mut writer);
        assert_eq!(writer.len(), 8);
        assert_eq!(
            writer.into_data(),
            [0x12, 0x34, 0xab, 0xcd, 0xff, 0xfe, 0x01, 0x02]
        );
    }

    #[test]
    fn dump_validates_first() {
        assert_eq!(dump_table(&Pair(2, vec![7, 8])).unwrap(), [0, 2, 7, 8]);
        let err = dump_table(&Pair(3, vec![7, 8])).unwrap_err();
        assert!(matches!(err, Error::ValidationFailed(_)));
    }
}
