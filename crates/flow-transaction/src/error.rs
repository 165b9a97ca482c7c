use crate::address::Address;
use crate::transaction::SigningPhase;

/// Error types for transaction construction, encoding, and signing.
#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    /// An address string or byte slice is not a valid 8-byte address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
    /// A block id string or byte slice is not a valid 32-byte identifier.
    #[error("invalid block id: {0}")]
    InvalidBlockId(String),
    /// The builder was finalized without a proposal key.
    #[error("missing proposer: no proposal key was set")]
    MissingProposer,
    /// The builder was finalized with an empty or whitespace-only script.
    #[error("invalid script: script is empty")]
    InvalidScript,
    /// Resolving builder defaults against the account failed.
    #[error("transaction preparation failed: {0}")]
    PreparationFailed(String),
    /// The proposal key's sequence number has not been resolved yet.
    #[error("unresolved sequence number for proposer {address} key {key_index}")]
    UnresolvedSequenceNumber {
        /// Proposer address.
        address: Address,
        /// Proposal key index.
        key_index: u32,
    },
    /// A signature was supplied for an address with no signer index, i.e.
    /// one that is not the proposer, the payer, or an authorizer.
    #[error("no signer index for address {address}: not the proposer, payer, or an authorizer")]
    UnknownSigner {
        /// The unrecognized address.
        address: Address,
    },
    /// A required participant has no registered signer.
    #[error("missing signer for address {address} during {phase} signing")]
    MissingSigner {
        /// The address that must sign.
        address: Address,
        /// The phase that could not proceed.
        phase: SigningPhase,
    },
    /// A signing key could not be constructed from the given material.
    #[error("invalid signing key: {0}")]
    InvalidKey(String),
    /// A signer failed to produce a signature.
    #[error("signing failed: {0}")]
    SigningFailed(String),
    /// An underlying encoding error (forwarded from `flow-rlp`).
    #[error("encoding error: {0}")]
    Rlp(#[from] flow_rlp::RlpError),
    /// A failure in the access API collaborator, propagated unchanged.
    #[error("access api error: {0}")]
    Access(#[source] Box<dyn std::error::Error + Send + Sync>),
}
