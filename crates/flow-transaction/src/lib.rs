//! Flow SDK - Transaction construction, canonical encoding, and signing.
//!
//! Provides the Transaction type with its canonical RLP payload and
//! envelope forms, a builder that resolves network-dependent defaults,
//! and the two-phase multi-party signing protocol.

pub mod address;
pub mod builder;
pub mod signing;
pub mod transaction;

mod error;
pub use address::{Address, BlockId};
pub use builder::{AccessApi, TransactionBuilder};
pub use error::TransactionError;
pub use signing::{sign_transaction, InMemorySigner, Signer, SignerRegistry};
pub use transaction::{
    ProposalKey, SequenceNumber, SigningPhase, Transaction, TransactionSignature,
    DEFAULT_GAS_LIMIT, DOMAIN_TAG_LENGTH, TRANSACTION_DOMAIN_TAG, USER_DOMAIN_TAG,
};
