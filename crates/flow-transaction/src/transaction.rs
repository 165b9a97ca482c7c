//! Core transaction type for the Flow blockchain.
//!
//! A transaction carries a Cadence script, its encoded arguments, a
//! reference block, a gas limit, and three participant roles: the
//! proposer (supplies the anti-replay sequence number), the payer
//! (covers fees), and the authorizers (grant resource access).
//!
//! Two canonical RLP forms are derived from the field list:
//!
//! - the **payload**, signed by the proposer and authorizers;
//! - the **envelope** (payload plus the sorted payload signatures),
//!   signed by the payer.
//!
//! Field order in both forms is fixed and load-bearing: reordering
//! changes the signed bytes and invalidates every signature.

use flow_rlp::Value;

use crate::address::{Address, BlockId};
use crate::TransactionError;

/// Gas limit applied when the builder is given none.
pub const DEFAULT_GAS_LIMIT: u64 = 9999;

/// Byte width of a padded domain tag.
pub const DOMAIN_TAG_LENGTH: usize = 32;

/// Domain tag prepended to signable transaction bytes.
pub const TRANSACTION_DOMAIN_TAG: [u8; DOMAIN_TAG_LENGTH] =
    padded_domain_tag(b"FLOW-V0.0-transaction");

/// Domain tag for user-signed messages. Kept distinct from the
/// transaction tag so the two signature namespaces can never collide.
pub const USER_DOMAIN_TAG: [u8; DOMAIN_TAG_LENGTH] = padded_domain_tag(b"FLOW-V0.0-user");

/// Right-pad an ASCII tag with zero bytes to the fixed tag width.
///
/// Evaluated at compile time; a tag longer than the width fails the build.
const fn padded_domain_tag(tag: &[u8]) -> [u8; DOMAIN_TAG_LENGTH] {
    assert!(tag.len() <= DOMAIN_TAG_LENGTH, "domain tag exceeds 32 bytes");
    let mut padded = [0u8; DOMAIN_TAG_LENGTH];
    let mut i = 0;
    while i < tag.len() {
        padded[i] = tag[i];
        i += 1;
    }
    padded
}

/// The proposal key's sequence number: either already known, or still
/// to be fetched from the proposer's on-chain account key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceNumber {
    /// Not yet fetched from the network.
    Unresolved,
    /// Known value.
    Resolved(u64),
}

impl SequenceNumber {
    /// Return the resolved value, or `None` if still unresolved.
    pub fn value(&self) -> Option<u64> {
        match self {
            SequenceNumber::Unresolved => None,
            SequenceNumber::Resolved(n) => Some(*n),
        }
    }
}

/// The account key a transaction's proposer uses for replay protection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProposalKey {
    /// Proposer account address.
    pub address: Address,
    /// Index of the key on the proposer account.
    pub key_index: u32,
    /// Sequence number of that key.
    pub sequence_number: SequenceNumber,
}

/// A signature over the payload or envelope of a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionSignature {
    /// Signing account address.
    pub address: Address,
    /// Deterministic index of the address among the transaction's signers.
    pub signer_index: u32,
    /// Index of the account key that produced the signature.
    pub key_index: u32,
    /// Raw signature bytes.
    pub signature: Vec<u8>,
}

/// The two signing phases of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SigningPhase {
    /// Proposer and authorizers sign the payload.
    Payload,
    /// The payer signs the envelope.
    Envelope,
}

impl std::fmt::Display for SigningPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SigningPhase::Payload => write!(f, "payload"),
            SigningPhase::Envelope => write!(f, "envelope"),
        }
    }
}

/// A Flow transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Cadence script source bytes.
    pub script: Vec<u8>,
    /// Encoded argument byte strings, in call order. The encoding is
    /// produced by an external collaborator and treated as opaque here.
    pub arguments: Vec<Vec<u8>>,
    /// Block anchoring the transaction's validity window.
    pub reference_block_id: BlockId,
    /// Computation budget.
    pub gas_limit: u64,
    /// Proposer account key.
    pub proposal_key: ProposalKey,
    /// Account paying the transaction fees.
    pub payer: Address,
    /// Accounts granting resource-access authorization, in declared order.
    pub authorizers: Vec<Address>,
    /// Signatures over the payload, kept sorted by (signer index, key index).
    pub payload_signatures: Vec<TransactionSignature>,
    /// Signatures over the envelope, kept sorted by (signer index, key index).
    pub envelope_signatures: Vec<TransactionSignature>,
}

impl Transaction {
    /// Create a new unsigned transaction.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        script: Vec<u8>,
        arguments: Vec<Vec<u8>>,
        reference_block_id: BlockId,
        gas_limit: u64,
        proposal_key: ProposalKey,
        payer: Address,
        authorizers: Vec<Address>,
    ) -> Self {
        Transaction {
            script,
            arguments,
            reference_block_id,
            gas_limit,
            proposal_key,
            payer,
            authorizers,
            payload_signatures: Vec::new(),
            envelope_signatures: Vec::new(),
        }
    }

    // -----------------------------------------------------------------
    // Signer indexing
    // -----------------------------------------------------------------

    /// List the distinct signing addresses in first-appearance order:
    /// proposer, payer, then authorizers. An address's position in this
    /// list is its signer index.
    ///
    /// The list is derived from the current field values on every call;
    /// it is never cached, so mutations to the participant roles are
    /// always reflected.
    pub fn signer_addresses(&self) -> Vec<Address> {
        let mut signers = Vec::with_capacity(2 + self.authorizers.len());
        signers.push(self.proposal_key.address);
        if !signers.contains(&self.payer) {
            signers.push(self.payer);
        }
        for authorizer in &self.authorizers {
            if !signers.contains(authorizer) {
                signers.push(*authorizer);
            }
        }
        signers
    }

    /// Look up the signer index for an address, or `None` if the address
    /// is not a participant.
    pub fn signer_index(&self, address: &Address) -> Option<u32> {
        self.signer_addresses()
            .iter()
            .position(|a| a == address)
            .map(|i| i as u32)
    }

    // -----------------------------------------------------------------
    // Signature collection
    // -----------------------------------------------------------------

    /// Add a payload-phase signature.
    ///
    /// A second signature for the same (address, key index) is ignored.
    /// An address outside the signer set is a hard error; it would have
    /// no valid signer index.
    pub fn add_payload_signature(
        &mut self,
        address: Address,
        key_index: u32,
        signature: Vec<u8>,
    ) -> Result<(), TransactionError> {
        self.add_signature(SigningPhase::Payload, address, key_index, signature)
    }

    /// Add an envelope-phase signature. Same rules as
    /// [`add_payload_signature`](Self::add_payload_signature).
    pub fn add_envelope_signature(
        &mut self,
        address: Address,
        key_index: u32,
        signature: Vec<u8>,
    ) -> Result<(), TransactionError> {
        self.add_signature(SigningPhase::Envelope, address, key_index, signature)
    }

    fn add_signature(
        &mut self,
        phase: SigningPhase,
        address: Address,
        key_index: u32,
        signature: Vec<u8>,
    ) -> Result<(), TransactionError> {
        let signers = self.signer_addresses();
        let signer_index = position_of(&signers, &address)
            .ok_or(TransactionError::UnknownSigner { address })?;

        let list = match phase {
            SigningPhase::Payload => &mut self.payload_signatures,
            SigningPhase::Envelope => &mut self.envelope_signatures,
        };

        // First signature for a given (address, key) wins.
        if list
            .iter()
            .any(|s| s.address == address && s.key_index == key_index)
        {
            return Ok(());
        }

        list.push(TransactionSignature {
            address,
            signer_index,
            key_index,
            signature,
        });

        // Refresh stored indices against the current signer set before
        // sorting, so earlier mutations of the participant roles cannot
        // leave stale indices behind.
        for sig in list.iter_mut() {
            sig.signer_index = position_of(&signers, &sig.address)
                .ok_or(TransactionError::UnknownSigner {
                    address: sig.address,
                })?;
        }
        list.sort_by_key(|s| (s.signer_index, s.key_index));
        Ok(())
    }

    // -----------------------------------------------------------------
    // Canonical forms
    // -----------------------------------------------------------------

    /// Build the canonical payload value tree.
    ///
    /// Field order: script, arguments, reference block id, gas limit,
    /// proposal key (address, key index, sequence number), payer,
    /// authorizers. Addresses and the block id are emitted at their
    /// fixed widths here.
    pub fn payload_value(&self) -> Result<Value, TransactionError> {
        let sequence_number = self.proposal_key.sequence_number.value().ok_or(
            TransactionError::UnresolvedSequenceNumber {
                address: self.proposal_key.address,
                key_index: self.proposal_key.key_index,
            },
        )?;

        Ok(Value::list(vec![
            Value::bytes(self.script.clone()),
            Value::list(
                self.arguments
                    .iter()
                    .map(|arg| Value::bytes(arg.clone()))
                    .collect(),
            ),
            Value::bytes(self.reference_block_id.as_bytes().to_vec()),
            Value::from_u64(self.gas_limit),
            Value::bytes(self.proposal_key.address.as_bytes().to_vec()),
            Value::from_u64(self.proposal_key.key_index as u64),
            Value::from_u64(sequence_number),
            Value::bytes(self.payer.as_bytes().to_vec()),
            Value::list(
                self.authorizers
                    .iter()
                    .map(|a| Value::bytes(a.as_bytes().to_vec()))
                    .collect(),
            ),
        ]))
    }

    /// Build the canonical envelope value tree: the payload plus the
    /// payload signatures as (signer index, key index, signature)
    /// triples, sorted by (signer index, key index).
    ///
    /// Signer indices are recomputed from the current participant roles;
    /// a stored signature whose address no longer resolves is an error.
    pub fn envelope_value(&self) -> Result<Value, TransactionError> {
        let payload = self.payload_value()?;
        let signers = self.signer_addresses();

        let mut triples = Vec::with_capacity(self.payload_signatures.len());
        for sig in &self.payload_signatures {
            let signer_index = position_of(&signers, &sig.address)
                .ok_or(TransactionError::UnknownSigner {
                    address: sig.address,
                })?;
            triples.push((signer_index, sig.key_index, &sig.signature));
        }
        triples.sort_by_key(|&(signer_index, key_index, _)| (signer_index, key_index));

        Ok(Value::list(vec![
            payload,
            Value::list(
                triples
                    .into_iter()
                    .map(|(signer_index, key_index, signature)| {
                        Value::list(vec![
                            Value::from_u64(signer_index as u64),
                            Value::from_u64(key_index as u64),
                            Value::bytes(signature.clone()),
                        ])
                    })
                    .collect(),
            ),
        ]))
    }

    /// RLP-encode the payload, without the domain tag.
    pub fn encoded_payload(&self) -> Result<Vec<u8>, TransactionError> {
        Ok(flow_rlp::encode(&self.payload_value()?))
    }

    /// RLP-encode the envelope, without the domain tag.
    pub fn encoded_envelope(&self) -> Result<Vec<u8>, TransactionError> {
        Ok(flow_rlp::encode(&self.envelope_value()?))
    }

    /// The exact bytes the proposer and authorizers sign: the transaction
    /// domain tag followed by the encoded payload.
    pub fn signable_payload(&self) -> Result<Vec<u8>, TransactionError> {
        let encoded = self.encoded_payload()?;
        let mut message = Vec::with_capacity(DOMAIN_TAG_LENGTH + encoded.len());
        message.extend_from_slice(&TRANSACTION_DOMAIN_TAG);
        message.extend_from_slice(&encoded);
        Ok(message)
    }

    /// The exact bytes the payer signs: the transaction domain tag
    /// followed by the encoded envelope, which embeds the sorted payload
    /// signatures.
    pub fn signable_envelope(&self) -> Result<Vec<u8>, TransactionError> {
        let encoded = self.encoded_envelope()?;
        let mut message = Vec::with_capacity(DOMAIN_TAG_LENGTH + encoded.len());
        message.extend_from_slice(&TRANSACTION_DOMAIN_TAG);
        message.extend_from_slice(&encoded);
        Ok(message)
    }
}

fn position_of(signers: &[Address], address: &Address) -> Option<u32> {
    signers.iter().position(|a| a == address).map(|i| i as u32)
}
