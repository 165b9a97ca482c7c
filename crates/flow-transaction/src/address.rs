//! Fixed-width chain identifiers.
//!
//! Flow addresses are 8 bytes and block identifiers are 32 bytes. Shorter
//! hex input is accepted and left-zero-padded to the fixed width, so the
//! conventional short forms like `0x01` parse to a full-width value.

use crate::TransactionError;

/// An 8-byte Flow account address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address([u8; Address::LENGTH]);

impl Address {
    /// Byte width of an address.
    pub const LENGTH: usize = 8;

    /// Create an address from its full-width byte form.
    pub fn new(bytes: [u8; Self::LENGTH]) -> Self {
        Address(bytes)
    }

    /// Create an address from up to 8 bytes, left-zero-padding short input.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, TransactionError> {
        if bytes.len() > Self::LENGTH {
            return Err(TransactionError::InvalidAddress(format!(
                "expected at most {} bytes, got {}",
                Self::LENGTH,
                bytes.len()
            )));
        }
        let mut padded = [0u8; Self::LENGTH];
        padded[Self::LENGTH - bytes.len()..].copy_from_slice(bytes);
        Ok(Address(padded))
    }

    /// Parse an address from a hex string, with or without a `0x` prefix.
    pub fn from_hex(hex_str: &str) -> Result<Self, TransactionError> {
        let bytes = decode_hex(hex_str)
            .map_err(|e| TransactionError::InvalidAddress(format!("invalid hex: {}", e)))?;
        Self::from_slice(&bytes)
    }

    /// Borrow the full-width byte form.
    pub fn as_bytes(&self) -> &[u8; Self::LENGTH] {
        &self.0
    }

    /// Serialize to a lowercase full-width hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// A 32-byte block identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockId([u8; BlockId::LENGTH]);

impl BlockId {
    /// Byte width of a block identifier.
    pub const LENGTH: usize = 32;

    /// Create a block id from its full-width byte form.
    pub fn new(bytes: [u8; Self::LENGTH]) -> Self {
        BlockId(bytes)
    }

    /// Create a block id from up to 32 bytes, left-zero-padding short input.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, TransactionError> {
        if bytes.len() > Self::LENGTH {
            return Err(TransactionError::InvalidBlockId(format!(
                "expected at most {} bytes, got {}",
                Self::LENGTH,
                bytes.len()
            )));
        }
        let mut padded = [0u8; Self::LENGTH];
        padded[Self::LENGTH - bytes.len()..].copy_from_slice(bytes);
        Ok(BlockId(padded))
    }

    /// Parse a block id from a hex string, with or without a `0x` prefix.
    pub fn from_hex(hex_str: &str) -> Result<Self, TransactionError> {
        let bytes = decode_hex(hex_str)
            .map_err(|e| TransactionError::InvalidBlockId(format!("invalid hex: {}", e)))?;
        Self::from_slice(&bytes)
    }

    /// Borrow the full-width byte form.
    pub fn as_bytes(&self) -> &[u8; Self::LENGTH] {
        &self.0
    }

    /// Serialize to a lowercase full-width hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl std::fmt::Display for BlockId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Decode hex with an optional `0x` prefix, tolerating odd-length input.
fn decode_hex(hex_str: &str) -> Result<Vec<u8>, hex::FromHexError> {
    let trimmed = hex_str.strip_prefix("0x").unwrap_or(hex_str);
    if trimmed.len() % 2 == 1 {
        hex::decode(format!("0{}", trimmed))
    } else {
        hex::decode(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_short_hex_left_pads() {
        let addr = Address::from_hex("01").unwrap();
        assert_eq!(addr.as_bytes(), &[0, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(addr.to_hex(), "0000000000000001");
    }

    #[test]
    fn test_address_0x_prefix_and_odd_length() {
        let addr = Address::from_hex("0x1").unwrap();
        assert_eq!(addr.as_bytes(), &[0, 0, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_address_full_width() {
        let addr = Address::from_hex("f8d6e0586b0a20c7").unwrap();
        assert_eq!(addr.to_hex(), "f8d6e0586b0a20c7");
    }

    #[test]
    fn test_address_too_long() {
        assert!(Address::from_hex("0102030405060708ff").is_err());
    }

    #[test]
    fn test_address_invalid_hex() {
        assert!(Address::from_hex("zz").is_err());
    }

    #[test]
    fn test_block_id_roundtrip() {
        let hex_str = "f0e4c2f76c58916ec258f246851bea091d14d4247a2fc3e18694461b1816e13b";
        let id = BlockId::from_hex(hex_str).unwrap();
        assert_eq!(id.to_hex(), hex_str);
    }

    #[test]
    fn test_block_id_short_left_pads() {
        let id = BlockId::from_hex("ff").unwrap();
        let mut expected = [0u8; 32];
        expected[31] = 0xff;
        assert_eq!(id.as_bytes(), &expected);
    }
}
