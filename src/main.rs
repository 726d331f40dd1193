//! deadwood - Prune unused measures and columns from TMDL semantic models
//!
//! Reads a usage report exported by a model analyzer, then removes every
//! measure and column it flags as unused from the model's table documents.

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

mod cli;

/// Main entry point for the deadwood CLI
fn main() -> anyhow::Result<()> {
    cli::run()
}
