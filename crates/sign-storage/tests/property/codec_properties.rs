use proptest::prelude::*;
use sign_storage::{decode, encode};

proptest! {
    #[test]
    fn decode_inverts_encode(features in proptest::collection::vec("[^;]{0,12}", 0..16)) {
        let raw = encode(&features);
        prop_assert_eq!(decode(&raw), features);
    }

    #[test]
    fn encoded_length_counts_one_delimiter_per_feature(
        features in proptest::collection::vec("[^;]{1,12}", 0..16)
    ) {
        let raw = encode(&features);
        prop_assert_eq!(raw.matches(';').count(), features.len());
        prop_assert!(raw.is_empty() || raw.ends_with(';'));
    }
}
