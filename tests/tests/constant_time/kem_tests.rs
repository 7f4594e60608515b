// Decapsulation timing: honest ciphertext vs tampered ciphertext.
//
// The tampered path takes the implicit-rejection branch; its running time
// must not be distinguishable from the accepting path.

use lattikem_api::Kem;
use lattikem_kem::{Kyber1024, Kyber512, Kyber768};
use lattikem_tests::suites::constant_time::config::TestConfig;
use lattikem_tests::suites::constant_time::tester::TimingTester;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

fn decapsulation_timing<K: Kem>()
where
    K::Ciphertext: AsMut<[u8]>,
{
    let config = TestConfig::for_kem_decapsulation();
    let mut rng = ChaChaRng::seed_from_u64(42);

    let keypair = K::keypair(&mut rng).unwrap();
    let pk = K::public_key(&keypair);
    let sk = K::secret_key(&keypair);
    let (valid, _) = K::encapsulate(&mut rng, &pk).unwrap();
    let mut tampered = valid.clone();
    tampered.as_mut()[0] ^= 0x01;

    for _ in 0..config.num_warmup {
        let _ = K::decapsulate(&sk, &valid);
        let _ = K::decapsulate(&sk, &tampered);
    }

    let tester = TimingTester::from_config(&config);
    let (t_valid, t_tampered) = tester.measure_interleaved(
        || {
            let _ = K::decapsulate(&sk, &valid);
        },
        || {
            let _ = K::decapsulate(&sk, &tampered);
        },
    );

    let analysis = match tester.analyze(&t_valid, &t_tampered, &config) {
        Ok(result) => result,
        Err(e) => panic!("Analysis error: {}", e),
    };

    println!("{}", analysis.summary(K::name()));
    assert!(
        analysis.is_constant_time,
        "{} decapsulation timing differs between accepted and rejected ciphertexts",
        K::name()
    );
}

#[test]
#[ignore = "timing-sensitive; run with --ignored on a quiet machine"]
fn test_kyber512_decapsulation_constant_time() {
    decapsulation_timing::<Kyber512>();
}

#[test]
#[ignore = "timing-sensitive; run with --ignored on a quiet machine"]
fn test_kyber768_decapsulation_constant_time() {
    decapsulation_timing::<Kyber768>();
}

#[test]
#[ignore = "timing-sensitive; run with --ignored on a quiet machine"]
fn test_kyber1024_decapsulation_constant_time() {
    decapsulation_timing::<Kyber1024>();
}
