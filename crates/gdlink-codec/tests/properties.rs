//! Property tests for the reversible primitives.
//!
//! These hold for *every* input, so we let proptest pick the inputs
//! instead of hand-writing a grid of cases.

use gdlink_codec::{Base64Flavor, cipher, encoding};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Any byte sequence survives a service Base64 round trip, including
    /// bytes above 0x7F.
    #[test]
    fn prop_service_base64_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        let encoded = encoding::encode(&bytes);
        prop_assert!(!encoded.contains('+') && !encoded.contains('/'));
        prop_assert_eq!(encoding::decode(&encoded).unwrap(), bytes);
    }

    #[test]
    fn prop_standard_base64_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        let encoded = Base64Flavor::Standard.encode(&bytes);
        prop_assert_eq!(Base64Flavor::Standard.decode(&encoded).unwrap(), bytes);
    }

    /// XOR with the same key twice is the identity.
    #[test]
    fn prop_xor_is_involution(
        data in proptest::collection::vec(any::<u8>(), 0..256),
        key in proptest::collection::vec(any::<u8>(), 1..16),
    ) {
        let once = cipher::xor(&data, &key);
        prop_assert_eq!(cipher::xor(&once, &key), data);
    }

    /// `decrypt(encrypt(s, k), k) == s` for printable ASCII.
    #[test]
    fn prop_encrypt_decrypt_round_trip(s in "[ -~]{0,64}", k in "[ -~]{1,16}") {
        let token = cipher::encrypt(&s, &k);
        prop_assert_eq!(cipher::decrypt_text(&token, &k).unwrap(), s);
    }

    /// Any non-control text, including multi-byte characters, survives
    /// encrypt → decrypt_text.
    #[test]
    fn prop_encrypt_decrypt_text_round_trip(s in "\\PC*", k in "[ -~]{1,16}") {
        let token = cipher::encrypt(&s, &k);
        prop_assert_eq!(cipher::decrypt_text(&token, &k).unwrap(), s);
    }

    /// Same for plain service Base64 text.
    #[test]
    fn prop_base64_text_round_trip(s in "\\PC*") {
        prop_assert_eq!(encoding::decode_text(&encoding::encode(&s)).unwrap(), s);
    }
}
