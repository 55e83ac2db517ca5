//! ISO 4217 registry fetcher.
//!
//! Downloads the "list one" XML, normalizes its entries, deduplicates by
//! currency code and rewrites the canonical CSV snapshot.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::CodegenConfig;
use crate::error::{CodegenError, Result};
use crate::model::CurrencyRecord;
use crate::snapshot;

const HTTP_TIMEOUT_SECS: u64 = 30;

/// Root of the ISO 4217 list-one document
#[derive(Debug, Deserialize)]
pub struct Iso4217 {
    #[serde(rename = "CcyTbl")]
    pub table: CurrencyTable,
}

#[derive(Debug, Deserialize)]
pub struct CurrencyTable {
    #[serde(rename = "CcyNtry", default)]
    pub entries: Vec<CurrencyEntry>,
}

/// One registry entry. Every field can be absent in the wild (the registry
/// lists countries without a universal currency), so all default to empty.
#[derive(Debug, Deserialize)]
pub struct CurrencyEntry {
    #[serde(rename = "CtryNm", default)]
    pub country_name: String,
    #[serde(rename = "CcyNm", default)]
    pub currency_name: String,
    #[serde(rename = "Ccy", default)]
    pub code: String,
    #[serde(rename = "CcyNbr", default)]
    pub num: String,
    #[serde(rename = "CcyMnrUnts", default)]
    pub minor_units: String,
}

/// Refresh the CSV snapshot from the live registry.
pub async fn refresh_snapshot(config: &CodegenConfig) -> Result<()> {
    let client = Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .build()?;

    info!(url = %config.registry_url, "fetching ISO 4217 registry");
    let response = client.get(&config.registry_url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CodegenError::Http { status });
    }
    let body = response.text().await?;

    let records = parse_registry(&body)?;
    info!(count = records.len(), "normalized registry entries");

    snapshot::write_snapshot(&config.snapshot_path, &records)
}

/// Parse registry XML into deduplicated records in snapshot order.
pub fn parse_registry(xml: &str) -> Result<Vec<CurrencyRecord>> {
    let document: Iso4217 = quick_xml::de::from_str(xml)?;
    debug!(
        entries = document.table.entries.len(),
        "parsed registry document"
    );

    // Keyed by code; a later registry entry for the same code wins.
    let mut by_code: HashMap<String, CurrencyRecord> = HashMap::new();
    for entry in document.table.entries {
        if entry.code.is_empty() {
            continue;
        }
        let scale = derive_scale(&entry.minor_units);
        by_code.insert(
            entry.code.clone(),
            CurrencyRecord {
                name: entry.currency_name,
                code: entry.code,
                num: entry.num,
                scale,
            },
        );
    }

    // Map iteration order must never leak into the snapshot.
    let mut records: Vec<CurrencyRecord> = by_code.into_values().collect();
    records.sort_by(|a, b| snapshot_order(&a.code, &b.code));
    Ok(records)
}

/// Map the registry's minor-units field to a decimal scale.
fn derive_scale(minor_units: &str) -> String {
    match minor_units {
        "" => "2".to_string(),
        "N.A." => "0".to_string(),
        other => other.to_string(),
    }
}

/// Snapshot ordering: ascending by code, with XTS then XXX forced last.
fn snapshot_order(a: &str, b: &str) -> Ordering {
    snapshot_rank(a)
        .cmp(&snapshot_rank(b))
        .then_with(|| a.cmp(b))
}

fn snapshot_rank(code: &str) -> u8 {
    match code {
        "XXX" => 2,
        "XTS" => 1,
        _ => 0,
    }
}
