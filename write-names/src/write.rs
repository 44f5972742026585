use indexmap::IndexMap;
use log::debug;

use crate::error::{Error, OverflowError};
use crate::validate::Validate;
use types::{NameId, NameKey};

/// A type that that can be written out as part of a table.
///
/// Implementors write their big-endian bytes; anything that can fail has to
/// have been checked before this point.
pub trait FontWrite {
    /// Write our data into this [TableWriter].
    fn write_into(&self, writer: &mut TableWriter);
}

/// A table that has to be encoded before it can be written.
///
/// Compilation is where text is encoded and offsets are assigned, so it is
/// also where encoding and overflow errors are reported.
pub trait Compile {
    /// The encoded form of the table.
    type Compiled: FontWrite;

    fn compile(&self) -> Result<Self::Compiled, Error>;
}

/// A buffer that collects the bytes of a table.
#[derive(Debug, Default)]
pub struct TableWriter {
    data: Vec<u8>,
}

/// Attempt to serialize a table.
///
/// Errors from encoding the table's strings are reported first, followed by
/// any problems found by [`Validate`].
pub fn dump_table<T: Compile + Validate>(table: &T) -> Result<Vec<u8>, Error> {
    let compiled = table.compile()?;
    table.validate()?;
    let mut writer = TableWriter::default();
    compiled.write_into(&mut writer);
    Ok(writer.into_data())
}

impl TableWriter {
    /// Write raw bytes into this table.
    ///
    /// The caller is responsible for ensuring bytes are in big-endian order.
    #[inline]
    pub fn write_slice(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes)
    }

    /// The number of bytes written so far.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

/// The string storage of a table being compiled.
///
/// Byte-identical strings are stored once; later copies reuse the offset of
/// the first.
#[derive(Debug, Default)]
pub(crate) struct StringPool {
    strings: IndexMap<Vec<u8>, u16>,
    len: usize,
    requested: usize,
}

/// The location of a string in the pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PoolEntry {
    pub(crate) length: u16,
    pub(crate) offset: u16,
}

impl StringPool {
    pub(crate) fn add(&mut self, bytes: Vec<u8>) -> Result<PoolEntry, OverflowError> {
        self.requested += bytes.len();
        let length = u16::try_from(bytes.len())
            .map_err(|_| OverflowError::StorageTooLarge(self.len + bytes.len()))?;
        if let Some(offset) = self.strings.get(&bytes) {
            return Ok(PoolEntry {
                length,
                offset: *offset,
            });
        }
        let new_len = self.len + bytes.len();
        if new_len > u16::MAX as usize {
            return Err(OverflowError::StorageTooLarge(new_len));
        }
        // new_len fits, so the offset does too
        let offset = self.len as u16;
        self.strings.insert(bytes, offset);
        self.len = new_len;
        Ok(PoolEntry { length, offset })
    }

    /// The concatenated string data.
    pub(crate) fn into_data(self) -> Vec<u8> {
        debug!(
            "string storage: {} unique strings, {} bytes ({} before deduplication)",
            self.strings.len(),
            self.len,
            self.requested
        );
        let mut data = Vec::with_capacity(self.len);
        for bytes in self.strings.into_keys() {
            data.extend_from_slice(&bytes);
        }
        data
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
write_be_bytes!(u16);
write_be_bytes!(u32);
write_be_bytes!(NameId);

impl FontWrite for NameKey {
    fn write_into(&self, writer: &mut TableWriter) {
        self.platform_id.write_into(writer);
        self.encoding_id.write_into(writer);
        self.language_id.write_into(writer);
        self.name_id.write_into(writer);
    }
}

impl FontWrite for PoolEntry {
    fn write_into(&self, writer: &mut TableWriter) {
        self.length.write_into(writer);
        self.offset.write_into(writer);
    }
}

impl<T: FontWrite> FontWrite for [T] {
    fn write_into(&self, writer: &mut TableWriter) {
        self.iter().for_each(|item| item.write_into(writer))
    }
}

impl<T: FontWrite> FontWrite for Vec<T> {
    fn write_into(&self, writer: &mut TableWriter) {
        self.as_slice().write_into(writer)
    }
}

impl<T: FontWrite> FontWrite for Option<T> {
    fn write_into(&self, writer: &mut TableWriter) {
        if let Some(obj) = self {
            obj.write_into(writer)
        }
    }
}

impl<T: FontWrite, U: FontWrite> FontWrite for (T, U) {
    fn write_into(&self, writer: &mut TableWriter) {
        self.0.write_into(writer);
        self.1.write_into(writer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_dedups() {
        let mut pool = StringPool::default();
        let a = pool.add(b"Regular".to_vec()).unwrap();
        let b = pool.add(b"Bold".to_vec()).unwrap();
        let c = pool.add(b"Regular".to_vec()).unwrap();
        assert_eq!(a, PoolEntry { length: 7, offset: 0 });
        assert_eq!(b, PoolEntry { length: 4, offset: 7 });
        assert_eq!(c, a);
        assert_eq!(pool.into_data(), b"RegularBold");
    }

    #[test]
    fn pool_overflow() {
        let mut pool = StringPool::default();
        pool.add(vec![0; 60_000]).unwrap();
        // a duplicate costs nothing
        pool.add(vec![0; 60_000]).unwrap();
        assert_eq!(
            pool.add(vec![1; 6000]),
            Err(OverflowError::StorageTooLarge(66_000))
        );
        assert_eq!(
            StringPool::default().add(vec![1; 70_000]),
            Err(OverflowError::StorageTooLarge(70_000))
        );
        let mut pool = StringPool::default();
        pool.add(vec![2; u16::MAX as usize]).unwrap();
        assert_eq!(pool.into_data().len(), 65535);
    }

    #[test]
    fn writes_big_endian() {
        let mut writer = TableWriter::default();
        NameKey::new(3, 1, 0x409, NameId::new(256)).write_into(&mut writer);
        vec![PoolEntry {
            length: 2,
            offset: 0x1234,
        }]
        .write_into(&mut writer);
        assert_eq!(
            writer.into_data(),
            [0, 3, 0, 1, 4, 9, 1, 0, 0, 2, 0x12, 0x34]
        );
    }
}
