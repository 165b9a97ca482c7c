//! RLP decoder.
//!
//! The decoder is strict: every declared length must fit inside the
//! remaining buffer, child items must land exactly on their enclosing
//! list boundary, and the outer item must consume the whole input.
//! Malformed data never yields a partial value.

use crate::{RlpError, Value};

/// Decode a complete RLP encoding into a value tree.
///
/// The input must contain exactly one encoded item; empty input and
/// trailing bytes are both rejected.
pub fn decode(data: &[u8]) -> Result<Value, RlpError> {
    if data.is_empty() {
        return Err(RlpError::EmptyInput);
    }
    let mut reader = Reader::new(data);
    let value = decode_item(&mut reader)?;
    let remaining = reader.remaining();
    if remaining != 0 {
        return Err(RlpError::TrailingBytes(remaining));
    }
    Ok(value)
}

/// A cursor over the input buffer.
struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Reader { data, pos: 0 }
    }

    fn read_byte(&mut self) -> Result<u8, RlpError> {
        let bytes = self.read_bytes(1)?;
        Ok(bytes[0])
    }

    fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], RlpError> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(RlpError::UnexpectedEof {
                needed: n - remaining,
                remaining,
            });
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }
}

fn decode_item(reader: &mut Reader<'_>) -> Result<Value, RlpError> {
    let prefix = reader.read_byte()?;
    match prefix {
        // Single-byte value, encoded as itself.
        0x00..=0x7f => Ok(Value::Bytes(vec![prefix])),
        // Short byte string: length in the prefix.
        0x80..=0xb7 => {
            let len = (prefix - 0x80) as usize;
            Ok(Value::Bytes(reader.read_bytes(len)?.to_vec()))
        }
        // Long byte string: prefix declares the width of the length field.
        0xb8..=0xbf => {
            let len = read_long_length(reader, (prefix - 0xb7) as usize)?;
            Ok(Value::Bytes(reader.read_bytes(len)?.to_vec()))
        }
        // Short list.
        0xc0..=0xf7 => {
            let len = (prefix - 0xc0) as usize;
            decode_list_body(reader, len)
        }
        // Long list.
        0xf8..=0xff => {
            let len = read_long_length(reader, (prefix - 0xf7) as usize)?;
            decode_list_body(reader, len)
        }
    }
}

/// Read a big-endian length field of `width` bytes.
fn read_long_length(reader: &mut Reader<'_>, width: usize) -> Result<usize, RlpError> {
    if width > 8 {
        return Err(RlpError::LengthTooLarge(width));
    }
    let bytes = reader.read_bytes(width)?;
    let len = bytes.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64);
    Ok(len as usize)
}

/// Decode exactly `len` bytes of concatenated child items.
fn decode_list_body(reader: &mut Reader<'_>, len: usize) -> Result<Value, RlpError> {
    let remaining = reader.remaining();
    if len > remaining {
        return Err(RlpError::UnexpectedEof {
            needed: len - remaining,
            remaining,
        });
    }
    let end = reader.pos + len;
    let mut items = Vec::new();
    while reader.pos < end {
        items.push(decode_item(reader)?);
        if reader.pos > end {
            return Err(RlpError::ListOverrun);
        }
    }
    Ok(Value::List(items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode;

    #[test]
    fn test_decode_empty_input() {
        assert_eq!(decode(&[]), Err(RlpError::EmptyInput));
    }

    #[test]
    fn test_decode_known_vectors() {
        assert_eq!(decode(&[0x80]).unwrap(), Value::bytes(vec![]));
        assert_eq!(decode(&[0x00]).unwrap(), Value::bytes(vec![0x00]));
        assert_eq!(decode(&[0x7f]).unwrap(), Value::bytes(vec![0x7f]));
        assert_eq!(decode(&[0xc0]).unwrap(), Value::list(vec![]));
        assert_eq!(
            decode(&[0x83, b'd', b'o', b'g']).unwrap(),
            Value::string("dog")
        );
    }

    #[test]
    fn test_decode_nested_list() {
        assert_eq!(
            decode(&[0xc3, 0xc0, 0xc1, 0xc0]).unwrap(),
            Value::list(vec![
                Value::list(vec![]),
                Value::list(vec![Value::list(vec![])]),
            ])
        );
    }

    #[test]
    fn test_decode_truncated_string() {
        // Prefix declares 3 bytes, only 2 follow.
        let err = decode(&[0x83, b'd', b'o']).unwrap_err();
        assert_eq!(
            err,
            RlpError::UnexpectedEof {
                needed: 1,
                remaining: 2
            }
        );
    }

    #[test]
    fn test_decode_truncated_long_string() {
        // Long form declares 56 bytes but none follow.
        let err = decode(&[0xb8, 56]).unwrap_err();
        assert!(matches!(err, RlpError::UnexpectedEof { .. }));
    }

    #[test]
    fn test_decode_truncated_list() {
        // List declares 2 bytes of children, only 1 present.
        let err = decode(&[0xc2, 0x01]).unwrap_err();
        assert!(matches!(err, RlpError::UnexpectedEof { .. }));
    }

    #[test]
    fn test_decode_trailing_bytes() {
        let err = decode(&[0x80, 0x01]).unwrap_err();
        assert_eq!(err, RlpError::TrailingBytes(1));
    }

    #[test]
    fn test_decode_child_overruns_list() {
        // The list claims 1 byte of children, but the child string
        // prefix declares 2 data bytes that spill past the boundary.
        let err = decode(&[0xc1, 0x82, 0xaa, 0xbb]).unwrap_err();
        assert_eq!(err, RlpError::ListOverrun);
    }

    #[test]
    fn test_roundtrip_long_string() {
        let original = Value::bytes(vec![0x42; 300]);
        let decoded = decode(&encode(&original)).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_roundtrip_deep_tree() {
        let tree = Value::list(vec![
            Value::string("hello"),
            Value::list(vec![
                Value::from_u64(42),
                Value::list(vec![Value::bytes(vec![0u8; 64])]),
            ]),
            Value::bytes(vec![]),
        ]);
        assert_eq!(decode(&encode(&tree)).unwrap(), tree);
    }
}
