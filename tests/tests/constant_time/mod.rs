mod comparison_tests;
mod kem_tests;
