use crate::models::{TimestampedRecord, YearCount};
use anyhow::{Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

/// Load records from a JSON array of `{"timestamp": .., "name": ..}` objects.
pub fn load_records_json<P: AsRef<Path>>(path: P) -> Result<Vec<TimestampedRecord>> {
    let path = path.as_ref();
    let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let records = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parsing records from {}", path.display()))?;
    Ok(records)
}

/// Load records from a CSV file with a `timestamp` column (and optional `name`).
pub fn load_records_csv<P: AsRef<Path>>(path: P) -> Result<Vec<TimestampedRecord>> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let mut out = Vec::new();
    for (i, row) in rdr.deserialize().enumerate() {
        let rec: TimestampedRecord =
            row.with_context(|| format!("{}: bad record on data row {}", path.display(), i + 1))?;
        out.push(rec);
    }
    Ok(out)
}

/// Load records, choosing the parser from the file extension (`.csv`, else JSON).
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<TimestampedRecord>> {
    let path = path.as_ref();
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => load_records_csv(path),
        _ => load_records_json(path),
    }
}

/// Save year counts as CSV with a `year,count` header.
pub fn save_year_counts_csv<P: AsRef<Path>>(counts: &[YearCount], path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_path(path)?;
    wtr.serialize(("year", "count"))?;
    for c in counts {
        wtr.serialize((c.year, c.count))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save year counts as a pretty JSON array.
pub fn save_year_counts_json<P: AsRef<Path>>(counts: &[YearCount], path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(counts)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}
