//! deadwood - Prune unused measures and columns from TMDL semantic models
//!
//! This library turns a usage report (produced by an external model analyzer)
//! into a per-table removal index, and rewrites tab-indented TMDL table
//! documents with the flagged object blocks cut out. Every line outside a
//! removed block is emitted byte-for-byte.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod error;
pub mod output;

pub use error::DeadwoodError;
