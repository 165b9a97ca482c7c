//! HTTP client for the Flow Access API.
//!
//! Covers the three operations the SDK core consumes: the latest sealed
//! block, account lookups (for key sequence numbers), and transaction
//! submission. The client also implements
//! [`flow_transaction::AccessApi`], so it plugs directly into the
//! transaction builder.

pub mod client;
pub mod types;

mod error;
pub use client::AccessClient;
pub use error::AccessError;
pub use types::AccessConfig;
