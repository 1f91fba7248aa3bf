//! Internal modules for the odds and evens client.
//!
//! This library provides configuration loading and the terminal input
//! source used by the oe_client binary.

pub mod config;
pub mod terminal;
