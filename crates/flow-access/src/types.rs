//! Access API data types: configuration and request/response models.
//!
//! The REST Access API encodes numeric fields as JSON strings and binary
//! fields (scripts, arguments, signatures) as base64; block and account
//! identifiers travel as hex.

use base64::Engine;
use serde::{Deserialize, Serialize};

use flow_transaction::{SequenceNumber, Transaction};

use crate::AccessError;

/// Configuration for an [`AccessClient`](crate::AccessClient).
#[derive(Debug, Clone)]
pub struct AccessConfig {
    /// Base URL for the Access API (e.g. `https://rest-mainnet.onflow.org`).
    pub base_url: String,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            base_url: "https://rest-mainnet.onflow.org".to_string(),
        }
    }
}

/// One element of the block list response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlockResponse {
    /// Block header.
    #[serde(default)]
    pub header: BlockHeader,
}

/// A block header returned by the Access API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlockHeader {
    /// Block id (hex).
    #[serde(default)]
    pub id: String,
    /// Parent block id (hex).
    #[serde(default)]
    pub parent_id: String,
    /// Block height (decimal string).
    #[serde(default)]
    pub height: String,
    /// Block timestamp (RFC 3339).
    #[serde(default)]
    pub timestamp: String,
}

/// An account returned by the Access API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Account {
    /// Account address (hex).
    #[serde(default)]
    pub address: String,
    /// Balance in the smallest unit (decimal string).
    #[serde(default)]
    pub balance: String,
    /// Public keys registered on the account.
    #[serde(default)]
    pub keys: Vec<AccountKey>,
}

/// A single account key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountKey {
    /// Key index on the account (decimal string).
    #[serde(default)]
    pub index: String,
    /// Public key material (hex).
    #[serde(default)]
    pub public_key: String,
    /// Signature algorithm name.
    #[serde(default)]
    pub signing_algorithm: String,
    /// Hash algorithm name.
    #[serde(default)]
    pub hashing_algorithm: String,
    /// Current sequence number (decimal string).
    #[serde(default)]
    pub sequence_number: String,
    /// Key weight (decimal string).
    #[serde(default)]
    pub weight: String,
    /// Whether the key has been revoked.
    #[serde(default)]
    pub revoked: bool,
}

/// Response to a transaction submission.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionResponse {
    /// Id of the submitted transaction.
    #[serde(default)]
    pub id: String,
}

/// A signature entry in a submission request.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionSignatureRequest {
    /// Signing address (hex).
    pub address: String,
    /// Key index (decimal string).
    pub key_index: String,
    /// Signature bytes (base64).
    pub signature: String,
}

/// The proposal key of a submission request.
#[derive(Debug, Clone, Serialize)]
pub struct ProposalKeyRequest {
    /// Proposer address (hex).
    pub address: String,
    /// Key index (decimal string).
    pub key_index: String,
    /// Sequence number (decimal string).
    pub sequence_number: String,
}

/// The JSON body of a transaction submission.
#[derive(Debug, Clone, Serialize)]
pub struct SendTransactionRequest {
    /// Script source (base64).
    pub script: String,
    /// Encoded arguments (base64 each).
    pub arguments: Vec<String>,
    /// Reference block id (hex).
    pub reference_block_id: String,
    /// Gas limit (decimal string).
    pub gas_limit: String,
    /// Fee payer address (hex).
    pub payer: String,
    /// Proposal key.
    pub proposal_key: ProposalKeyRequest,
    /// Authorizer addresses (hex each).
    pub authorizers: Vec<String>,
    /// Payload signatures.
    pub payload_signatures: Vec<TransactionSignatureRequest>,
    /// Envelope signatures.
    pub envelope_signatures: Vec<TransactionSignatureRequest>,
}

impl SendTransactionRequest {
    /// Build a submission body from a signed transaction.
    ///
    /// Fails if the proposal key's sequence number is still unresolved;
    /// such a transaction was never signable to begin with.
    pub fn from_transaction(tx: &Transaction) -> Result<Self, AccessError> {
        let b64 = base64::engine::general_purpose::STANDARD;

        let sequence_number = match tx.proposal_key.sequence_number {
            SequenceNumber::Resolved(n) => n,
            SequenceNumber::Unresolved => {
                return Err(AccessError::InvalidTransaction(
                    "proposal key sequence number is unresolved".to_string(),
                ))
            }
        };

        let signatures = |list: &[flow_transaction::TransactionSignature]| -> Vec<TransactionSignatureRequest> {
            list.iter()
                .map(|sig| TransactionSignatureRequest {
                    address: sig.address.to_hex(),
                    key_index: sig.key_index.to_string(),
                    signature: b64.encode(&sig.signature),
                })
                .collect()
        };

        Ok(SendTransactionRequest {
            script: b64.encode(&tx.script),
            arguments: tx.arguments.iter().map(|arg| b64.encode(arg)).collect(),
            reference_block_id: tx.reference_block_id.to_hex(),
            gas_limit: tx.gas_limit.to_string(),
            payer: tx.payer.to_hex(),
            proposal_key: ProposalKeyRequest {
                address: tx.proposal_key.address.to_hex(),
                key_index: tx.proposal_key.key_index.to_string(),
                sequence_number: sequence_number.to_string(),
            },
            authorizers: tx.authorizers.iter().map(|a| a.to_hex()).collect(),
            payload_signatures: signatures(&tx.payload_signatures),
            envelope_signatures: signatures(&tx.envelope_signatures),
        })
    }
}
