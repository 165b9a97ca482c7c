use proptest::prelude::*;

use flow_transaction::{
    Address, BlockId, ProposalKey, SequenceNumber, Transaction,
};

fn addr(n: u8) -> Address {
    Address::from_slice(&[n]).unwrap()
}

/// A transaction with distinct proposer, payer, and three authorizers,
/// so signer indices 0..=4 are all populated.
fn five_party_transaction() -> Transaction {
    Transaction::new(
        b"transaction { execute {} }".to_vec(),
        vec![],
        BlockId::from_slice(&[0x01]).unwrap(),
        100,
        ProposalKey {
            address: addr(1),
            key_index: 0,
            sequence_number: SequenceNumber::Resolved(0),
        },
        addr(2),
        vec![addr(3), addr(4), addr(5)],
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// However signatures arrive, the stored list ends up sorted by
    /// (signer index, key index) with no (address, key) duplicates.
    #[test]
    fn payload_signatures_stay_sorted_and_deduped(
        additions in prop::collection::vec((1u8..=5, 0u32..4), 1..24)
    ) {
        let mut tx = five_party_transaction();
        for (n, key_index) in &additions {
            tx.add_payload_signature(addr(*n), *key_index, vec![*n, *key_index as u8])
                .unwrap();
        }

        let ordering: Vec<(u32, u32)> = tx
            .payload_signatures
            .iter()
            .map(|s| (s.signer_index, s.key_index))
            .collect();
        let mut sorted = ordering.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(&ordering, &sorted);

        let mut distinct: Vec<(Address, u32)> = additions
            .iter()
            .map(|(n, k)| (addr(*n), *k))
            .collect();
        distinct.sort();
        distinct.dedup();
        prop_assert_eq!(tx.payload_signatures.len(), distinct.len());
    }

    /// Re-adding any collected signature never changes the list.
    #[test]
    fn re_adding_signatures_is_a_no_op(
        additions in prop::collection::vec((1u8..=5, 0u32..4), 1..12)
    ) {
        let mut tx = five_party_transaction();
        for (n, key_index) in &additions {
            tx.add_envelope_signature(addr(*n), *key_index, vec![0xaa]).unwrap();
        }
        let before = tx.envelope_signatures.clone();

        for (n, key_index) in &additions {
            tx.add_envelope_signature(addr(*n), *key_index, vec![0xbb]).unwrap();
        }
        prop_assert_eq!(tx.envelope_signatures, before);
    }

    /// The envelope encoding is stable under insertion order: any
    /// permutation of the same signature set signs identical bytes.
    #[test]
    fn envelope_bytes_independent_of_insertion_order(
        mut pairs in prop::collection::vec((1u8..=5, 0u32..4), 2..10)
    ) {
        pairs.sort();
        pairs.dedup();

        let mut forward = five_party_transaction();
        for (n, k) in &pairs {
            forward.add_payload_signature(addr(*n), *k, vec![*n, *k as u8]).unwrap();
        }

        let mut reversed = five_party_transaction();
        for (n, k) in pairs.iter().rev() {
            reversed.add_payload_signature(addr(*n), *k, vec![*n, *k as u8]).unwrap();
        }

        prop_assert_eq!(
            forward.signable_envelope().unwrap(),
            reversed.signable_envelope().unwrap()
        );
    }
}
