#![deny(missing_docs)]

//! Flow Blockchain SDK - Complete SDK.
//!
//! Re-exports all Flow SDK components for convenient single-crate usage.

pub use flow_access as access;
pub use flow_rlp as rlp;
pub use flow_transaction as transaction;
