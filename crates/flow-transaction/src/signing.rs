//! Multi-party transaction signing.
//!
//! Signing happens in two phases over disjoint signature lists. The
//! proposer and authorizers sign the payload; the payer then signs the
//! envelope, which embeds the completed and sorted payload signatures.
//! A participant acting as payer only ever signs the envelope, so the
//! payload phase skips any address equal to the payer.

use std::collections::HashMap;

use k256::ecdsa::signature::hazmat::PrehashSigner;
use k256::ecdsa::{Signature as EcdsaSignature, SigningKey, VerifyingKey};
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};

use crate::address::Address;
use crate::transaction::{SigningPhase, Transaction};
use crate::TransactionError;

/// A capability that signs arbitrary message bytes with one account key.
///
/// A signer is bound to a single key index; an account with several keys
/// registers several signers.
pub trait Signer: Send + Sync {
    /// Index of the account key this signer holds.
    fn key_index(&self) -> u32;

    /// Produce a signature over the message bytes.
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, TransactionError>;
}

/// Registry mapping addresses to the signers available for them.
#[derive(Default)]
pub struct SignerRegistry {
    signers: HashMap<Address, Vec<Box<dyn Signer>>>,
}

impl SignerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a signer for an address. Multi-key accounts call this
    /// once per key.
    pub fn register(&mut self, address: Address, signer: Box<dyn Signer>) {
        self.signers.entry(address).or_default().push(signer);
    }

    /// All signers registered for an address; empty when there are none.
    pub fn signers_for(&self, address: &Address) -> &[Box<dyn Signer>] {
        self.signers.get(address).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Run both signing phases against a transaction, mutating it in place.
///
/// The payload phase covers the proposer (unless it equals the payer)
/// and each authorizer (skipping duplicates of the proposer, the payer,
/// and repeated authorizers). The envelope phase covers the payer only,
/// and is never attempted when the payload phase fails. An address that
/// must sign but has no registered signer aborts immediately with
/// [`TransactionError::MissingSigner`].
pub fn sign_transaction(
    tx: &mut Transaction,
    registry: &SignerRegistry,
) -> Result<(), TransactionError> {
    let proposer = tx.proposal_key.address;
    let payer = tx.payer;

    let mut payload_addresses: Vec<Address> = Vec::new();
    if proposer != payer {
        payload_addresses.push(proposer);
    }
    for &authorizer in &tx.authorizers {
        if authorizer == payer || payload_addresses.contains(&authorizer) {
            continue;
        }
        payload_addresses.push(authorizer);
    }

    if !payload_addresses.is_empty() {
        let message = tx.signable_payload()?;
        for address in payload_addresses {
            let signers = registry.signers_for(&address);
            if signers.is_empty() {
                return Err(TransactionError::MissingSigner {
                    address,
                    phase: SigningPhase::Payload,
                });
            }
            for signer in signers {
                let signature = signer.sign(&message)?;
                tx.add_payload_signature(address, signer.key_index(), signature)?;
            }
        }
    }

    let signers = registry.signers_for(&payer);
    if signers.is_empty() {
        return Err(TransactionError::MissingSigner {
            address: payer,
            phase: SigningPhase::Envelope,
        });
    }
    // The envelope embeds the completed payload-signature list, so it is
    // built only after the payload phase finishes.
    let message = tx.signable_envelope()?;
    for signer in signers {
        let signature = signer.sign(&message)?;
        tx.add_envelope_signature(payer, signer.key_index(), signature)?;
    }

    Ok(())
}

/// A signer holding a secp256k1 private key in memory.
///
/// Signs the SHA2-256 digest of the message and returns the raw 64-byte
/// `r || s` signature form.
pub struct InMemorySigner {
    signing_key: SigningKey,
    key_index: u32,
}

impl InMemorySigner {
    /// Wrap an existing signing key.
    pub fn new(signing_key: SigningKey, key_index: u32) -> Self {
        InMemorySigner {
            signing_key,
            key_index,
        }
    }

    /// Generate a fresh random key.
    pub fn random(key_index: u32) -> Self {
        Self::new(SigningKey::random(&mut OsRng), key_index)
    }

    /// Construct from a 32-byte private scalar.
    pub fn from_bytes(bytes: &[u8], key_index: u32) -> Result<Self, TransactionError> {
        let signing_key = SigningKey::from_slice(bytes)
            .map_err(|e| TransactionError::InvalidKey(e.to_string()))?;
        Ok(Self::new(signing_key, key_index))
    }

    /// The verifying key corresponding to this signer's private key.
    pub fn verifying_key(&self) -> VerifyingKey {
        *self.signing_key.verifying_key()
    }
}

impl Signer for InMemorySigner {
    fn key_index(&self) -> u32 {
        self.key_index
    }

    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, TransactionError> {
        let digest = Sha256::digest(message);
        let signature: EcdsaSignature = self
            .signing_key
            .sign_prehash(digest.as_slice())
            .map_err(|e| TransactionError::SigningFailed(e.to_string()))?;
        Ok(signature.to_bytes().to_vec())
    }
}
