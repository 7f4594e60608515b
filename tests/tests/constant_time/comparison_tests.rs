// Ciphertext comparison used by decapsulation: equal vs first-byte-differs.

use lattikem_internal::constant_time::ct_eq;
use lattikem_tests::suites::constant_time::config::TestConfig;
use lattikem_tests::suites::constant_time::tester::TimingTester;
use std::hint::black_box;

#[test]
#[ignore = "timing-sensitive; run with --ignored on a quiet machine"]
fn test_ct_eq_constant_time() {
    let config = TestConfig::for_comparison();
    let a = vec![0xA5u8; 1568];
    let same = a.clone();
    let mut early = a.clone();
    early[0] ^= 0xFF;

    for _ in 0..config.num_warmup {
        black_box(ct_eq(black_box(&a), black_box(&same)));
        black_box(ct_eq(black_box(&a), black_box(&early)));
    }

    let tester = TimingTester::from_config(&config);
    let (t_same, t_early) = tester.measure_interleaved(
        || {
            black_box(ct_eq(black_box(&a), black_box(&same)));
        },
        || {
            black_box(ct_eq(black_box(&a), black_box(&early)));
        },
    );

    let analysis = tester
        .analyze(&t_same, &t_early, &config)
        .unwrap_or_else(|e| panic!("Analysis error: {}", e));
    println!("{}", analysis.summary("ct_eq"));
    assert!(analysis.is_constant_time);
}
