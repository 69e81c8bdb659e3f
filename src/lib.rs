//! Whitebox test harness for the chainlink client contracts. The scenarios
//! live under `tests/`.
#![no_std]
