//! Timing comparison of an operation on two input classes.

pub mod config;
pub mod tester;
