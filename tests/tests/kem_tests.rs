//! Cross-API behavior of the Kyber KEM: the typed `Kem` implementations,
//! the run-time `Kyber` dispatcher and the IND-CPA layer must agree.

use lattikem_api::{Kem, Serialize, SerializeSecret};
use lattikem_kem::kyber::primitives::{gen_matrix, idcpa_dec, idcpa_enc, idcpa_gen_keypair_from_seed};
use lattikem_kem::kyber::{Kyber1024Params, Kyber512Params, Kyber768Params, KyberParams};
use lattikem_kem::{
    Error, Kyber, Kyber1024, Kyber512, Kyber768, KyberCiphertext, KyberLevel, KyberPublicKey,
    KyberSecretKey,
};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaChaRng;

#[test]
fn typed_keys_work_with_runtime_dispatcher() {
    let mut rng = ChaChaRng::seed_from_u64(42);

    fn check<K: Kem<PublicKey = KyberPublicKey, SecretKey = KyberSecretKey, Ciphertext = KyberCiphertext>>(
        level: KyberLevel,
        rng: &mut ChaChaRng,
    ) {
        let kyber = Kyber::new(level);
        let keypair = K::keypair(rng).unwrap();
        let (pk, sk) = (K::public_key(&keypair), K::secret_key(&keypair));

        // Typed encapsulation, runtime decapsulation.
        let (ct, ss) = K::encapsulate(rng, &pk).unwrap();
        let ss_rt = kyber.decrypt(ct.as_ref(), sk.as_ref()).unwrap();
        assert_eq!(&ss_rt[..], &ss.to_bytes_zeroizing()[..]);

        // Runtime encapsulation, typed decapsulation.
        let (ct_rt, ss_rt) = kyber.encrypt_with_rng(pk.as_ref(), None, rng).unwrap();
        let ct_typed = KyberCiphertext::from_bytes(&ct_rt).unwrap();
        let ss_typed = K::decapsulate(&sk, &ct_typed).unwrap();
        assert_eq!(&ss_typed.to_bytes_zeroizing()[..], &ss_rt[..]);
    }

    check::<Kyber512>(KyberLevel::Kyber512, &mut rng);
    check::<Kyber768>(KyberLevel::Kyber768, &mut rng);
    check::<Kyber1024>(KyberLevel::Kyber1024, &mut rng);
}

#[test]
fn level_names_round_trip() {
    for name in ["kyber512", "kyber768", "kyber1024"] {
        let level: KyberLevel = name.parse().unwrap();
        assert_eq!(level.to_string(), name);
        assert_eq!(Kyber::new(level).level(), level);
    }
    assert!(matches!(
        "kyber-768".parse::<KyberLevel>(),
        Err(Error::UnknownLevel(_))
    ));
}

#[test]
fn many_trials_agree() {
    let mut rng = ChaChaRng::seed_from_u64(2024);
    let kyber = Kyber::new(KyberLevel::Kyber768);
    let (pk, sk) = kyber.gen_keypair_with_rng(&mut rng).unwrap();

    for _ in 0..100 {
        let (ct, ss) = kyber.encrypt_with_rng(&pk, None, &mut rng).unwrap();
        assert_eq!(*kyber.decrypt(&ct, &sk).unwrap(), *ss);
    }
}

#[test]
fn every_single_byte_corruption_is_rejected_implicitly() {
    let (pk, sk) = Kyber512::keypair_derand(&[1u8; 32], &[2u8; 32]).unwrap();
    let (ct, ss) = Kyber512::encapsulate_with_message(&pk, &[3u8; 32]).unwrap();
    let mut seen = std::collections::HashSet::new();

    for idx in (0..ct.as_ref().len()).step_by(37) {
        let mut bad = ct.clone();
        bad.as_mut()[idx] ^= 0x80;
        let rejected = Kyber512::decapsulate(&sk, &bad).unwrap();
        assert_ne!(rejected, ss, "byte {}", idx);
        assert!(seen.insert(rejected.to_bytes_zeroizing().to_vec()));
    }
}

#[test]
fn size_contracts_are_enforced() {
    let kyber = Kyber::new(KyberLevel::Kyber1024);
    let mut rng = ChaChaRng::seed_from_u64(3);
    let (pk, sk) = kyber.gen_keypair_with_rng(&mut rng).unwrap();
    let (ct, _) = kyber.encrypt_with_rng(&pk, None, &mut rng).unwrap();

    assert!(matches!(
        kyber.encrypt_with_rng(&pk, Some(&[0u8; 31][..]), &mut rng),
        Err(Error::InvalidLength { expected: 32, actual: 31, .. })
    ));
    assert!(matches!(
        kyber.decrypt(&ct[..1567], &sk),
        Err(Error::InvalidLength { expected: 1568, actual: 1567, .. })
    ));
    assert!(matches!(
        kyber.decrypt(&ct, &sk[..3167]),
        Err(Error::InvalidLength { expected: 3168, .. })
    ));

    // Errors convert into the api error with the same length information.
    let api_err: lattikem_api::Error = kyber.decrypt(&ct[..10], &sk).unwrap_err().into();
    assert!(matches!(
        api_err,
        lattikem_api::Error::InvalidLength { expected: 1568, actual: 10, .. }
    ));
}

fn idcpa_trials<P: KyberParams>(seed: u64) {
    let mut rng = ChaChaRng::seed_from_u64(seed);
    let mut key_seed = [0u8; 32];
    rng.fill_bytes(&mut key_seed);
    let (pk, sk) = idcpa_gen_keypair_from_seed::<P>(&key_seed).unwrap();

    for _ in 0..50 {
        let mut msg = [0u8; 32];
        let mut coins = [0u8; 32];
        rng.fill_bytes(&mut msg);
        rng.fill_bytes(&mut coins);
        let ct = idcpa_enc::<P>(&pk, &msg, &coins).unwrap();
        assert_eq!(ct.len(), P::CIPHERTEXT_BYTES);
        assert_eq!(*idcpa_dec::<P>(&ct, &sk).unwrap(), msg);
    }
}

#[test]
fn idcpa_round_trips() {
    idcpa_trials::<Kyber512Params>(1);
    idcpa_trials::<Kyber768Params>(2);
    idcpa_trials::<Kyber1024Params>(3);
}

#[test]
fn matrix_transpose_property() {
    let mut rng = ChaChaRng::seed_from_u64(8);
    let mut seed = [0u8; 32];
    rng.fill_bytes(&mut seed);

    let a = gen_matrix::<Kyber768Params>(&seed, false).unwrap();
    let at = gen_matrix::<Kyber768Params>(&seed, true).unwrap();
    assert_eq!(a, gen_matrix::<Kyber768Params>(&seed, false).unwrap());
    for i in 0..3 {
        for j in 0..3 {
            assert_eq!(a[i].polys()[j], at[j].polys()[i]);
        }
    }
}
