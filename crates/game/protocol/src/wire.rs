//! Primitive encodings shared by every message.
//!
//! ```text
//! i32     4 bytes, little-endian
//! f64     8 bytes, little-endian IEEE-754
//! bool    1 byte, 0 or 1
//! String  i32 byte length, UTF-8 bytes
//! Vec<T>  i32 count, elements
//! Option  bool presence flag, value if present
//! Map     i32 count, (key, value) pairs
//! ```

use std::collections::BTreeMap;
use std::io::{Read, Write};

use crate::error::{ProtocolError, Result};

/// Upper bound on speculative preallocation for length-prefixed data.
const MAX_PREALLOC: usize = 1024;

/// A value with a fixed binary layout on the wire.
///
/// Implementations must be symmetric: `read_from` applied to the bytes
/// produced by `write_to` yields an equal value.
pub trait Wire: Sized {
    fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self>;

    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()>;
}

fn read_array<const N: usize, R: Read + ?Sized>(reader: &mut R) -> Result<[u8; N]> {
    let mut buf = [0u8; N];
    reader.read_exact(&mut buf).map_err(ProtocolError::from_read)?;
    Ok(buf)
}

/// Reads an `i32` length prefix, rejecting negative values.
pub(crate) fn read_len<R: Read + ?Sized>(reader: &mut R) -> Result<usize> {
    let len = i32::read_from(reader)?;
    usize::try_from(len).map_err(|_| ProtocolError::NegativeLength(len))
}

pub(crate) fn write_len<W: Write + ?Sized>(writer: &mut W, len: usize) -> Result<()> {
    let len = i32::try_from(len).map_err(|_| ProtocolError::LengthOverflow(len))?;
    len.write_to(writer)
}

impl Wire for i32 {
    fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        Ok(i32::from_le_bytes(read_array(reader)?))
    }

    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&self.to_le_bytes())?;
        Ok(())
    }
}

impl Wire for f64 {
    fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        Ok(f64::from_le_bytes(read_array(reader)?))
    }

    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&self.to_le_bytes())?;
        Ok(())
    }
}

impl Wire for bool {
    fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        match read_array::<1, _>(reader)?[0] {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(ProtocolError::InvalidBool(other)),
        }
    }

    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&[u8::from(*self)])?;
        Ok(())
    }
}

impl Wire for String {
    fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        let len = read_len(reader)?;
        let mut bytes = Vec::with_capacity(len.min(MAX_PREALLOC));
        Read::take(&mut *reader, len as u64)
            .read_to_end(&mut bytes)
            .map_err(ProtocolError::from_read)?;
        if bytes.len() != len {
            return Err(ProtocolError::Truncated);
        }
        String::from_utf8(bytes).map_err(|_| ProtocolError::InvalidUtf8)
    }

    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        write_len(writer, self.len())?;
        writer.write_all(self.as_bytes())?;
        Ok(())
    }
}

impl<T: Wire> Wire for Vec<T> {
    fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        let len = read_len(reader)?;
        let mut items = Vec::with_capacity(len.min(MAX_PREALLOC));
        for _ in 0..len {
            items.push(T::read_from(reader)?);
        }
        Ok(items)
    }

    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        write_len(writer, self.len())?;
        for item in self {
            item.write_to(writer)?;
        }
        Ok(())
    }
}

impl<T: Wire> Wire for Option<T> {
    fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        if bool::read_from(reader)? {
            Ok(Some(T::read_from(reader)?))
        } else {
            Ok(None)
        }
    }

    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        match self {
            Some(value) => {
                true.write_to(writer)?;
                value.write_to(writer)
            }
            None => false.write_to(writer),
        }
    }
}

impl<K: Wire + Ord, V: Wire> Wire for BTreeMap<K, V> {
    fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        let len = read_len(reader)?;
        let mut map = BTreeMap::new();
        for _ in 0..len {
            let key = K::read_from(reader)?;
            let value = V::read_from(reader)?;
            map.insert(key, value);
        }
        Ok(map)
    }

    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        write_len(writer, self.len())?;
        for (key, value) in self {
            key.write_to(writer)?;
            value.write_to(writer)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode<T: Wire>(value: &T) -> Vec<u8> {
        let mut buf = Vec::new();
        value.write_to(&mut buf).unwrap();
        buf
    }

    #[test]
    fn i32_is_little_endian() {
        assert_eq!(encode(&1i32), vec![1, 0, 0, 0]);
        assert_eq!(encode(&-2i32), vec![0xfe, 0xff, 0xff, 0xff]);
    }

    #[test]
    fn string_has_length_prefix() {
        assert_eq!(encode(&"ab".to_string()), vec![2, 0, 0, 0, b'a', b'b']);
    }

    #[test]
    fn option_has_presence_flag() {
        assert_eq!(encode(&None::<i32>), vec![0]);
        assert_eq!(encode(&Some(3i32)), vec![1, 3, 0, 0, 0]);
    }

    #[test]
    fn invalid_bool_is_rejected() {
        let err = bool::read_from(&mut &[7u8][..]).unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidBool(7)));
    }

    #[test]
    fn negative_length_is_rejected() {
        let bytes = encode(&-1i32);
        let err = Vec::<i32>::read_from(&mut bytes.as_slice()).unwrap_err();
        assert!(matches!(err, ProtocolError::NegativeLength(-1)));
    }

    #[test]
    fn short_string_is_truncated() {
        let bytes = vec![5, 0, 0, 0, b'a'];
        let err = String::read_from(&mut bytes.as_slice()).unwrap_err();
        assert!(matches!(err, ProtocolError::Truncated));
    }

    #[test]
    fn short_integer_is_truncated() {
        let err = i32::read_from(&mut &[1u8, 2][..]).unwrap_err();
        assert!(matches!(err, ProtocolError::Truncated));
    }
}
