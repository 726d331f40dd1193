//! Core domain logic for deadwood
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`UsageRow`, `RemovalIndex`, `ProtectedTables`, `RemovalLog`)
//! - `services/` - Schema mapping, classification, block scanning, run orchestration
//! - `ports/` - Trait definitions for the usage report and the document store

pub mod models;
pub mod ports;
pub mod services;
