//! Property tests over random seeds and messages.

use lattikem_kem::kyber::primitives::idcpa_rej_uniform;
use lattikem_kem::{Kyber1024, Kyber512, Kyber768};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn kyber512_round_trip(seed in any::<[u8; 32]>(), z in any::<[u8; 32]>(), msg in any::<[u8; 32]>()) {
        let (pk, sk) = Kyber512::keypair_derand(&seed, &z).unwrap();
        let (ct, ss) = Kyber512::encapsulate_with_message(&pk, &msg).unwrap();
        prop_assert_eq!(<Kyber512 as lattikem_api::Kem>::decapsulate(&sk, &ct).unwrap(), ss);
    }

    #[test]
    fn kyber768_round_trip(seed in any::<[u8; 32]>(), z in any::<[u8; 32]>(), msg in any::<[u8; 32]>()) {
        let (pk, sk) = Kyber768::keypair_derand(&seed, &z).unwrap();
        let (ct, ss) = Kyber768::encapsulate_with_message(&pk, &msg).unwrap();
        prop_assert_eq!(<Kyber768 as lattikem_api::Kem>::decapsulate(&sk, &ct).unwrap(), ss);
    }

    #[test]
    fn kyber1024_round_trip(seed in any::<[u8; 32]>(), z in any::<[u8; 32]>(), msg in any::<[u8; 32]>()) {
        let (pk, sk) = Kyber1024::keypair_derand(&seed, &z).unwrap();
        let (ct, ss) = Kyber1024::encapsulate_with_message(&pk, &msg).unwrap();
        prop_assert_eq!(<Kyber1024 as lattikem_api::Kem>::decapsulate(&sk, &ct).unwrap(), ss);
    }

    #[test]
    fn tampered_ciphertext_never_errors(
        seed in any::<[u8; 32]>(),
        msg in any::<[u8; 32]>(),
        idx in 0usize..768,
        flip in 1u8..=255,
    ) {
        let (pk, sk) = Kyber512::keypair_derand(&seed, &[0x5Au8; 32]).unwrap();
        let (mut ct, ss) = Kyber512::encapsulate_with_message(&pk, &msg).unwrap();
        ct.as_mut()[idx] ^= flip;
        let rejected = <Kyber512 as lattikem_api::Kem>::decapsulate(&sk, &ct).unwrap();
        prop_assert_ne!(rejected, ss);
    }
}

proptest! {
    #[test]
    fn rej_uniform_stays_below_q(buf in proptest::collection::vec(any::<u8>(), 0..600), req in 0usize..300) {
        let (vals, count) = idcpa_rej_uniform(&buf, req);
        prop_assert!(count <= req);
        prop_assert!(count <= 2 * (buf.len() / 3));
        prop_assert_eq!(vals.len(), count);
        prop_assert!(vals.iter().all(|&v| (0..3329).contains(&v)));
    }
}
