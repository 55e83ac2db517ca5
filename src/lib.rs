//! Maintenance pipeline for the currency metadata table.
//!
//! The pipeline is strictly sequential: fetch the ISO 4217 registry, rewrite
//! the CSV snapshot, reload it, order the records, render them through the
//! Handlebars template and write the canonicalized Rust source. Any stage
//! error aborts the whole run.

pub mod codegen;
pub mod config;
pub mod error;
pub mod model;
pub mod registry;
pub mod snapshot;

pub use config::CodegenConfig;
pub use error::CodegenError;
pub use model::CurrencyRecord;
