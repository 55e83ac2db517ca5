//! CSV snapshot persistence and the pre-render record ordering.
//!
//! The snapshot is the only state that survives between runs. Its write
//! order (see [`crate::registry`]) differs from the order used for code
//! generation here; both orderings are long-standing behavior and are kept
//! distinct on purpose.

use std::cmp::Ordering;
use std::fs::File;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::model::CurrencyRecord;

/// Header row of the canonical snapshot
const HEADER: [&str; 4] = ["Name", "Code", "Num", "Scale"];

/// Raw 4-column snapshot row: name, code, num, scale
pub type RawRow = (String, String, String, String);

/// Write records to `path` as CSV, header first, overwriting any existing
/// file.
pub fn write_snapshot(path: &Path, records: &[CurrencyRecord]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);
    writer.write_record(HEADER)?;
    for record in records {
        writer.write_record([&record.name, &record.code, &record.num, &record.scale])?;
    }
    writer.flush()?;
    debug!(path = %path.display(), rows = records.len(), "wrote snapshot");
    Ok(())
}

/// Load the snapshot at `path`, discarding the header row.
pub fn load_snapshot(path: &Path) -> Result<Vec<RawRow>> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(file);

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: RawRow = result?;
        rows.push(row);
    }
    debug!(path = %path.display(), rows = rows.len(), "loaded snapshot");
    Ok(rows)
}

/// Convert raw rows into records ordered for code generation.
///
/// Codes XTS and XXX sort ahead of everything else; the rest sort ascending.
/// The sort is stable, so rows with equal codes keep their input order.
pub fn order_records(rows: Vec<RawRow>) -> Vec<CurrencyRecord> {
    let mut records: Vec<CurrencyRecord> = rows
        .into_iter()
        .map(|(name, code, num, scale)| CurrencyRecord {
            name,
            code,
            num,
            scale,
        })
        .collect();
    records.sort_by(|a, b| render_order(&a.code, &b.code));
    records
}

/// Render ordering: XTS and XXX first, then ascending by code.
fn render_order(a: &str, b: &str) -> Ordering {
    render_rank(a).cmp(&render_rank(b)).then_with(|| a.cmp(b))
}

fn render_rank(code: &str) -> u8 {
    match code {
        "XXX" | "XTS" => 0,
        _ => 1,
    }
}
