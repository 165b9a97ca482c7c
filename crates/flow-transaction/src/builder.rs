//! Declarative transaction assembly.
//!
//! The builder collects the transaction fields step by step, validates
//! what it can locally, and resolves the two network-dependent defaults
//! through the [`AccessApi`] capability: the reference block (latest
//! sealed block when none was given) and the proposer key's sequence
//! number (fetched from the proposer's account when unresolved).

use std::future::Future;

use crate::address::{Address, BlockId};
use crate::transaction::{
    ProposalKey, SequenceNumber, Transaction, DEFAULT_GAS_LIMIT,
};
use crate::TransactionError;

/// The slice of the access API the builder needs: the latest sealed
/// block and account key sequence numbers.
///
/// Implementations must fail `account_key_sequence_number` with
/// [`TransactionError::PreparationFailed`] when the key index does not
/// exist on the account, and propagate network failures unchanged via
/// [`TransactionError::Access`]. No retry logic belongs here.
pub trait AccessApi {
    /// Fetch the id of the latest sealed block.
    fn latest_sealed_block_id(
        &self,
    ) -> impl Future<Output = Result<BlockId, TransactionError>> + Send;

    /// Fetch the current sequence number of an account key.
    fn account_key_sequence_number(
        &self,
        address: Address,
        key_index: u32,
    ) -> impl Future<Output = Result<u64, TransactionError>> + Send;
}

/// Builder for an unsigned [`Transaction`].
#[derive(Debug, Clone, Default)]
pub struct TransactionBuilder {
    script: String,
    arguments: Vec<Vec<u8>>,
    reference_block_id: Option<BlockId>,
    gas_limit: Option<u64>,
    proposal_key: Option<ProposalKey>,
    payer: Option<Address>,
    authorizers: Vec<Address>,
}

impl TransactionBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Cadence script source.
    pub fn script(mut self, script: impl Into<String>) -> Self {
        self.script = script.into();
        self
    }

    /// Append one encoded argument.
    pub fn argument(mut self, argument: Vec<u8>) -> Self {
        self.arguments.push(argument);
        self
    }

    /// Replace the full argument list.
    pub fn arguments(mut self, arguments: Vec<Vec<u8>>) -> Self {
        self.arguments = arguments;
        self
    }

    /// Pin the reference block explicitly instead of resolving the
    /// latest sealed block.
    pub fn reference_block_id(mut self, id: BlockId) -> Self {
        self.reference_block_id = Some(id);
        self
    }

    /// Set the gas limit. Defaults to [`DEFAULT_GAS_LIMIT`] when unset.
    pub fn gas_limit(mut self, limit: u64) -> Self {
        self.gas_limit = Some(limit);
        self
    }

    /// Set the proposer. The sequence number is fetched from the network
    /// during [`build`](Self::build).
    pub fn proposer(mut self, address: Address, key_index: u32) -> Self {
        self.proposal_key = Some(ProposalKey {
            address,
            key_index,
            sequence_number: SequenceNumber::Unresolved,
        });
        self
    }

    /// Set the proposer with an already-known sequence number, skipping
    /// the network fetch.
    pub fn proposer_with_sequence_number(
        mut self,
        address: Address,
        key_index: u32,
        sequence_number: u64,
    ) -> Self {
        self.proposal_key = Some(ProposalKey {
            address,
            key_index,
            sequence_number: SequenceNumber::Resolved(sequence_number),
        });
        self
    }

    /// Set the fee payer. Defaults to the proposer when unset.
    pub fn payer(mut self, address: Address) -> Self {
        self.payer = Some(address);
        self
    }

    /// Append an authorizer.
    pub fn authorizer(mut self, address: Address) -> Self {
        self.authorizers.push(address);
        self
    }

    /// Finalize into an unsigned transaction.
    ///
    /// Local validation (proposer presence, script non-emptiness) runs
    /// before any network call. The two resolution fetches only happen
    /// for values that were not supplied explicitly.
    pub async fn build<A: AccessApi>(self, api: &A) -> Result<Transaction, TransactionError> {
        let proposal_key = self.proposal_key.ok_or(TransactionError::MissingProposer)?;
        if self.script.trim().is_empty() {
            return Err(TransactionError::InvalidScript);
        }

        let payer = self.payer.unwrap_or(proposal_key.address);

        let reference_block_id = match self.reference_block_id {
            Some(id) => id,
            None => api.latest_sealed_block_id().await?,
        };

        let sequence_number = match proposal_key.sequence_number {
            SequenceNumber::Resolved(n) => n,
            SequenceNumber::Unresolved => {
                api.account_key_sequence_number(proposal_key.address, proposal_key.key_index)
                    .await?
            }
        };

        Ok(Transaction::new(
            self.script.into_bytes(),
            self.arguments,
            reference_block_id,
            self.gas_limit.unwrap_or(DEFAULT_GAS_LIMIT),
            ProposalKey {
                address: proposal_key.address,
                key_index: proposal_key.key_index,
                sequence_number: SequenceNumber::Resolved(sequence_number),
            },
            payer,
            self.authorizers,
        ))
    }
}
