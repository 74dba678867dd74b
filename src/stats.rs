use crate::models::{TimestampedRecord, YearCount};
use chrono::{Datelike, Local, TimeZone};
use std::collections::BTreeMap;

/// Count records per calendar year in the local time zone, ascending by year.
pub fn split_by_year(records: &[TimestampedRecord]) -> Vec<YearCount> {
    split_by_year_in(records, &Local)
}

/// Count records per calendar year as observed in `tz`, ascending by year.
///
/// Timestamps chrono cannot represent are skipped.
pub fn split_by_year_in<Tz: TimeZone>(records: &[TimestampedRecord], tz: &Tz) -> Vec<YearCount> {
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for r in records {
        match tz.timestamp_opt(r.timestamp, 0).earliest() {
            Some(dt) => *counts.entry(dt.year()).or_default() += 1,
            None => log::warn!("skipping out-of-range timestamp {}", r.timestamp),
        }
    }
    log::debug!(
        "bucketed {} records into {} years",
        records.len(),
        counts.len()
    );
    counts
        .into_iter()
        .map(|(year, count)| YearCount { year, count })
        .collect()
}
