//! RLP encoder.
//!
//! Encoding rules:
//! - a single byte <= 0x7f encodes as itself;
//! - a byte string of 0..=55 bytes gets a one-byte `0x80 + len` prefix;
//! - a longer byte string gets `0xb7 + len_of_len` followed by the length
//!   in minimal big-endian form;
//! - lists use the same two forms with offsets `0xc0` and `0xf7`, where the
//!   length covers the concatenated encodings of the children.

use crate::value::{min_be_bytes, Value};

/// Offset for byte-string prefixes.
const STRING_OFFSET: u8 = 0x80;
/// Offset for list prefixes.
const LIST_OFFSET: u8 = 0xc0;
/// Longest payload expressible with a single-byte prefix.
const SHORT_LENGTH_MAX: usize = 55;

/// Encode a value tree into its canonical RLP byte form.
pub fn encode(value: &Value) -> Vec<u8> {
    let mut out = Vec::new();
    encode_into(value, &mut out);
    out
}

fn encode_into(value: &Value, out: &mut Vec<u8>) {
    match value {
        Value::Bytes(data) => {
            // Single-byte passthrough: no prefix for values <= 0x7f.
            if data.len() == 1 && data[0] <= 0x7f {
                out.push(data[0]);
                return;
            }
            write_length(data.len(), STRING_OFFSET, out);
            out.extend_from_slice(data);
        }
        Value::List(items) => {
            let mut body = Vec::new();
            for item in items {
                encode_into(item, &mut body);
            }
            write_length(body.len(), LIST_OFFSET, out);
            out.extend_from_slice(&body);
        }
    }
}

/// Write a short- or long-form length prefix for a payload of `len` bytes.
fn write_length(len: usize, offset: u8, out: &mut Vec<u8>) {
    if len <= SHORT_LENGTH_MAX {
        out.push(offset + len as u8);
    } else {
        let len_bytes = min_be_bytes(len as u64);
        out.push(offset + SHORT_LENGTH_MAX as u8 + len_bytes.len() as u8);
        out.extend_from_slice(&len_bytes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string() {
        assert_eq!(encode(&Value::bytes(vec![])), vec![0x80]);
    }

    #[test]
    fn test_integer_zero_encodes_as_empty_string() {
        assert_eq!(encode(&Value::from_u64(0)), vec![0x80]);
    }

    #[test]
    fn test_single_byte_passthrough() {
        assert_eq!(encode(&Value::bytes(vec![0x00])), vec![0x00]);
        assert_eq!(encode(&Value::bytes(vec![0x01])), vec![0x01]);
        assert_eq!(encode(&Value::bytes(vec![0x7f])), vec![0x7f]);
    }

    #[test]
    fn test_single_high_byte_gets_prefix() {
        assert_eq!(encode(&Value::bytes(vec![0x80])), vec![0x81, 0x80]);
        assert_eq!(encode(&Value::bytes(vec![0xff])), vec![0x81, 0xff]);
    }

    #[test]
    fn test_short_string() {
        // "dog" -> 0x83 'd' 'o' 'g'
        assert_eq!(encode(&Value::string("dog")), vec![0x83, b'd', b'o', b'g']);
    }

    #[test]
    fn test_string_at_short_boundary() {
        let data = vec![0xaa; 55];
        let encoded = encode(&Value::bytes(data.clone()));
        assert_eq!(encoded[0], 0x80 + 55);
        assert_eq!(&encoded[1..], &data[..]);
    }

    #[test]
    fn test_long_string() {
        // 56 bytes crosses into the long form: 0xb8 0x38 <data>.
        let data = vec![0xbb; 56];
        let encoded = encode(&Value::bytes(data.clone()));
        assert_eq!(encoded[0], 0xb8);
        assert_eq!(encoded[1], 56);
        assert_eq!(&encoded[2..], &data[..]);
    }

    #[test]
    fn test_long_string_two_length_bytes() {
        let data = vec![0xcc; 300];
        let encoded = encode(&Value::bytes(data.clone()));
        assert_eq!(hex::encode(&encoded[..3]), "b9012c");
        assert_eq!(&encoded[3..], &data[..]);
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(encode(&Value::list(vec![])), vec![0xc0]);
    }

    #[test]
    fn test_nested_list() {
        // [[], [[]]] -> c3 c0 c1 c0
        let tree = Value::list(vec![
            Value::list(vec![]),
            Value::list(vec![Value::list(vec![])]),
        ]);
        assert_eq!(hex::encode(encode(&tree)), "c3c0c1c0");
    }

    #[test]
    fn test_long_list() {
        // 56 single-byte items push the list into the long form.
        let items: Vec<Value> = (0..56).map(|_| Value::bytes(vec![0x01])).collect();
        let encoded = encode(&Value::list(items));
        assert_eq!(encoded[0], 0xf8);
        assert_eq!(encoded[1], 56);
        assert_eq!(encoded.len(), 2 + 56);
    }

    #[test]
    fn test_mixed_list() {
        // ["cat", "dog"] -> c8 83 c a t 83 d o g
        let tree = Value::list(vec![Value::string("cat"), Value::string("dog")]);
        assert_eq!(hex::encode(encode(&tree)), "c88363617483646f67");
    }
}
