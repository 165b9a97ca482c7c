//! RLP (recursive length prefix) encoding and decoding.
//!
//! RLP serializes a tree of byte strings and lists into a compact
//! length-prefixed binary form. It is the canonical encoding for Flow
//! transaction payloads and envelopes, so byte-exact output matters:
//! the encoded bytes are what gets signed.

pub mod value;

mod decode;
mod encode;
mod error;

pub use decode::decode;
pub use encode::encode;
pub use error::RlpError;
pub use value::Value;
