//! Error types for the currency codegen pipeline.

use thiserror::Error;

/// Errors surfaced by the snapshot and codegen stages
#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("registry request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("registry returned status {status}")]
    Http { status: reqwest::StatusCode },

    #[error("malformed registry XML: {0}")]
    Xml(#[from] quick_xml::DeError),

    #[error("malformed snapshot CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("template error: {0}")]
    Template(String),

    #[error("generated source is not valid Rust: {0}")]
    Format(#[from] syn::Error),
}

pub type Result<T> = std::result::Result<T, CodegenError>;
