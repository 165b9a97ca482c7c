//! The RLP value tree.
//!
//! RLP has exactly two node kinds: byte strings and lists. Anything that
//! needs canonical encoding is first mapped onto this closed type, then
//! handed to the encoder. There is no reflection or duck typing; callers
//! build the tree explicitly from their own typed fields.

use crate::RlpError;

/// A node in an RLP value tree: either a byte string or a list of nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A byte string, possibly empty.
    Bytes(Vec<u8>),
    /// An ordered list of child values, possibly empty.
    List(Vec<Value>),
}

impl Value {
    /// Create a byte-string node from anything convertible to bytes.
    pub fn bytes(data: impl Into<Vec<u8>>) -> Self {
        Value::Bytes(data.into())
    }

    /// Create a byte-string node from a UTF-8 string.
    pub fn string(s: &str) -> Self {
        Value::Bytes(s.as_bytes().to_vec())
    }

    /// Create a list node from child values.
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(items)
    }

    /// Create a byte-string node holding the minimal big-endian form of `v`.
    ///
    /// Leading zero bytes are stripped, so 0 becomes the empty byte string
    /// (which encodes as `0x80`). This is the canonical RLP integer form.
    pub fn from_u64(v: u64) -> Self {
        Value::Bytes(min_be_bytes(v))
    }

    /// Interpret this node as a big-endian unsigned integer.
    ///
    /// Fails on list nodes and on byte strings wider than 8 bytes.
    pub fn to_u64(&self) -> Result<u64, RlpError> {
        match self {
            Value::List(_) => Err(RlpError::ExpectedBytes),
            Value::Bytes(b) => {
                if b.len() > 8 {
                    return Err(RlpError::IntegerOverflow(b.len()));
                }
                Ok(b.iter().fold(0u64, |acc, &byte| (acc << 8) | byte as u64))
            }
        }
    }

    /// Borrow the byte-string contents, or `None` for a list node.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            Value::List(_) => None,
        }
    }

    /// Borrow the list items, or `None` for a byte-string node.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::Bytes(_) => None,
            Value::List(items) => Some(items),
        }
    }
}

/// Minimal big-endian byte representation of `v`, empty for 0.
pub(crate) fn min_be_bytes(v: u64) -> Vec<u8> {
    let bytes = v.to_be_bytes();
    let skip = bytes.iter().take_while(|&&b| b == 0).count();
    bytes[skip..].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_u64_minimal_big_endian() {
        assert_eq!(Value::from_u64(0), Value::Bytes(vec![]));
        assert_eq!(Value::from_u64(1), Value::Bytes(vec![0x01]));
        assert_eq!(Value::from_u64(0x7f), Value::Bytes(vec![0x7f]));
        assert_eq!(Value::from_u64(0x100), Value::Bytes(vec![0x01, 0x00]));
        assert_eq!(
            Value::from_u64(u64::MAX),
            Value::Bytes(vec![0xff; 8]),
        );
    }

    #[test]
    fn test_to_u64_roundtrip() {
        for v in [0u64, 1, 127, 128, 255, 256, 65535, u64::MAX] {
            assert_eq!(Value::from_u64(v).to_u64().unwrap(), v);
        }
    }

    #[test]
    fn test_to_u64_rejects_wide_strings() {
        let wide = Value::Bytes(vec![0x01; 9]);
        assert_eq!(wide.to_u64(), Err(RlpError::IntegerOverflow(9)));
    }

    #[test]
    fn test_to_u64_rejects_lists() {
        assert_eq!(Value::List(vec![]).to_u64(), Err(RlpError::ExpectedBytes));
    }

    #[test]
    fn test_accessors() {
        let bytes = Value::bytes(vec![1, 2, 3]);
        assert_eq!(bytes.as_bytes(), Some(&[1u8, 2, 3][..]));
        assert!(bytes.as_list().is_none());

        let list = Value::list(vec![Value::from_u64(1)]);
        assert!(list.as_bytes().is_none());
        assert_eq!(list.as_list().unwrap().len(), 1);
    }
}
