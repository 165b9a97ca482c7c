use proptest::prelude::*;

use flow_rlp::{decode, encode, Value};

/// Strategy to generate a random value tree: byte strings of 0..200 bytes,
/// lists nested up to depth 4.
fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop::collection::vec(any::<u8>(), 0..200).prop_map(Value::Bytes);
    leaf.prop_recursive(4, 64, 8, |inner| {
        prop::collection::vec(inner, 0..8).prop_map(Value::List)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn value_encode_decode_roundtrip(value in arb_value()) {
        let encoded = encode(&value);
        let decoded = decode(&encoded).unwrap();
        prop_assert_eq!(decoded, value);
    }

    #[test]
    fn u64_roundtrip_through_encoding(v in any::<u64>()) {
        let encoded = encode(&Value::from_u64(v));
        let decoded = decode(&encoded).unwrap();
        prop_assert_eq!(decoded.to_u64().unwrap(), v);
    }

    #[test]
    fn truncated_encodings_are_rejected(value in arb_value()) {
        let encoded = encode(&value);
        if encoded.len() > 1 {
            let truncated = &encoded[..encoded.len() - 1];
            prop_assert!(decode(truncated).is_err());
        }
    }

    #[test]
    fn trailing_bytes_are_rejected(value in arb_value(), extra in 1u8..=0xff) {
        let mut encoded = encode(&value);
        encoded.push(extra);
        prop_assert!(decode(&encoded).is_err());
    }
}
