//! Integration-test support for the lattikem library
//!
//! The test suites themselves live under `tests/`; this crate holds the
//! shared harnesses they run on.

pub mod suites;
