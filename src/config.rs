//! Pipeline configuration.
//!
//! Every path and the registry URL are explicit so tests can point the
//! pipeline at fixtures instead of the live registry and repo files. The
//! defaults reproduce the paths the tool has always used.

use std::path::PathBuf;

/// ISO 4217 "list one" endpoint published by the registry maintenance agency
pub const ISO_4217_LIST_ONE_URL: &str =
    "https://www.six-group.com/dam/download/financial-information/data-center/iso-currrency/lists/list-one.xml";

#[derive(Debug, Clone)]
pub struct CodegenConfig {
    /// Registry endpoint serving the list-one XML
    pub registry_url: String,
    /// Canonical CSV snapshot path
    pub snapshot_path: PathBuf,
    /// Handlebars template path
    pub template_path: PathBuf,
    /// Generated Rust source destination
    pub output_path: PathBuf,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            registry_url: ISO_4217_LIST_ONE_URL.to_string(),
            snapshot_path: PathBuf::from("scripts/currency/currency_data.csv"),
            template_path: PathBuf::from("scripts/currency/currency_data.tmpl"),
            output_path: PathBuf::from("currency_data.rs"),
        }
    }
}
