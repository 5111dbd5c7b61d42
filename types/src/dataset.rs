//! The embedded occupation table.
//!
//! Rows are kept as raw text, parsed and checked once on first access, and
//! cached for the rest of the process. Nothing ever invalidates the cache.

use std::collections::HashSet;
use std::sync::LazyLock;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::error::DatasetError;
use crate::filter;
use crate::record::OccupationRecord;
use crate::slider::{SliderConfig, parse_date};

// ── Raw table ────────────────────────────────────────────────────────────

/// A table row as written in source: (country, code, start, end).
pub type RawRow = (&'static str, &'static str, &'static str, &'static str);

/// Yugoslavia is listed as its present-day successor states so that each
/// row matches a region on a modern map.
pub const OCCUPATIONS: &[RawRow] = &[
    ("Austria", "AUT", "1938-03-12", "1945-05-08"),
    ("Czechoslovakia", "CZE", "1939-03-15", "1945-05-08"),
    ("Poland", "POL", "1939-09-01", "1945-05-08"),
    ("Denmark", "DNK", "1940-04-09", "1945-05-05"),
    ("Norway", "NOR", "1940-04-09", "1945-05-08"),
    ("Belgium", "BEL", "1940-05-10", "1944-09-30"),
    ("Netherlands", "NLD", "1940-05-10", "1945-05-05"),
    ("Luxembourg", "LUX", "1940-05-10", "1944-09-30"),
    ("France", "FRA", "1940-05-10", "1944-08-25"),
    ("Serbia", "SRB", "1941-04-06", "1945-05-08"),
    ("Croatia", "HRV", "1941-04-06", "1945-05-08"),
    ("Bosnia and Herzegovina", "BIH", "1941-04-06", "1945-05-08"),
    ("North Macedonia", "MKD", "1941-04-06", "1945-05-08"),
    ("Montenegro", "MNE", "1941-04-06", "1945-05-08"),
    ("Slovenia", "SVN", "1941-04-06", "1945-05-08"),
    ("Greece", "GRC", "1941-04-06", "1944-10-31"),
    ("Soviet Union", "SUN", "1941-06-22", "1945-05-08"),
];

static DATASET: LazyLock<Result<Dataset, DatasetError>> =
    LazyLock::new(|| Dataset::from_rows(OCCUPATIONS));

// ── Dataset ──────────────────────────────────────────────────────────────

/// A validated, non-empty list of occupation records.
#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    records: Vec<OccupationRecord>,
    slider: SliderConfig,
}

impl Dataset {
    /// The process-wide dataset built from [`OCCUPATIONS`].
    pub fn shared() -> Result<&'static Dataset, DatasetError> {
        DATASET.as_ref().map_err(|e| e.clone())
    }

    /// Parse and validate raw rows, keeping table order.
    pub fn from_rows(rows: &[RawRow]) -> Result<Self, DatasetError> {
        let records = rows
            .iter()
            .map(|&(country, code, start, end)| parse_row(country, code, start, end))
            .collect::<Result<Vec<_>, _>>()?;
        let dataset = Self::from_records(records)?;
        debug!(
            records = dataset.records.len(),
            min = %dataset.slider.min,
            max = %dataset.slider.max,
            "occupation table loaded"
        );
        Ok(dataset)
    }

    /// Validate already-typed records.
    pub fn from_records(records: Vec<OccupationRecord>) -> Result<Self, DatasetError> {
        validate(&records)?;
        // validate() rejects an empty table, so both folds see at least one row
        let first_start = records
            .iter()
            .map(|r| r.occupation_start)
            .min()
            .ok_or(DatasetError::Empty)?;
        let last_end = records
            .iter()
            .map(|r| r.occupation_end)
            .max()
            .ok_or(DatasetError::Empty)?;
        Ok(Self {
            records,
            slider: SliderConfig::spanning(first_start, last_end),
        })
    }

    pub fn records(&self) -> &[OccupationRecord] {
        &self.records
    }

    pub fn slider(&self) -> &SliderConfig {
        &self.slider
    }

    /// Records occupied on `date`, in table order.
    pub fn occupied_on(&self, date: NaiveDate) -> Vec<&OccupationRecord> {
        filter::filter(&self.records, date)
    }

    pub fn find(&self, region_code: &str) -> Option<&OccupationRecord> {
        self.records.iter().find(|r| r.region_code == region_code)
    }
}

/// The fixed record list. Every call returns the same slice.
pub fn get_records() -> Result<&'static [OccupationRecord], DatasetError> {
    Dataset::shared().map(Dataset::records)
}

// ── Parsing & validation ─────────────────────────────────────────────────

fn parse_row(
    country: &str,
    code: &str,
    start: &str,
    end: &str,
) -> Result<OccupationRecord, DatasetError> {
    let date_field = |field: &'static str, value: &str| {
        parse_date(value).map_err(|_| DatasetError::InvalidDate {
            country: country.to_string(),
            field,
            value: value.to_string(),
        })
    };
    Ok(OccupationRecord {
        country_name: country.to_string(),
        region_code: code.to_string(),
        occupation_start: date_field("start", start)?,
        occupation_end: date_field("end", end)?,
    })
}

/// Check the table invariants: non-empty, well-formed region codes, unique
/// codes, and `start <= end` on every row.
pub fn validate(records: &[OccupationRecord]) -> Result<(), DatasetError> {
    if records.is_empty() {
        return Err(DatasetError::Empty);
    }

    let mut seen = HashSet::new();
    for r in records {
        let code = &r.region_code;
        if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(DatasetError::InvalidRegionCode {
                country: r.country_name.clone(),
                code: code.clone(),
            });
        }
        if !seen.insert(code.as_str()) {
            return Err(DatasetError::DuplicateRegion { code: code.clone() });
        }
        if r.occupation_start > r.occupation_end {
            return Err(DatasetError::InvertedInterval {
                country: r.country_name.clone(),
                start: r.occupation_start.to_string(),
                end: r.occupation_end.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn test_embedded_table_is_valid() {
        let ds = Dataset::shared().unwrap();
        assert_eq!(ds.records().len(), 17);
        assert_eq!(ds.records()[0].country_name, "Austria");
        assert_eq!(ds.records()[16].region_code, "SUN");
    }

    #[test]
    fn test_get_records_returns_same_slice() {
        let a = get_records().unwrap();
        let b = get_records().unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_slider_bounds_from_table() {
        let s = Dataset::shared().unwrap().slider();
        assert_eq!(s.min, date("1937-03-12"));
        assert_eq!(s.max, date("1945-05-08"));
    }

    #[test]
    fn test_find_by_region_code() {
        let ds = Dataset::shared().unwrap();
        assert_eq!(ds.find("GRC").unwrap().country_name, "Greece");
        assert!(ds.find("DEU").is_none());
    }

    #[test]
    fn test_rejects_inverted_interval() {
        let err = Dataset::from_rows(&[("Nowhere", "NWH", "1944-01-02", "1944-01-01")])
            .unwrap_err();
        assert!(matches!(err, DatasetError::InvertedInterval { .. }));
    }

    #[test]
    fn test_rejects_bad_date() {
        let err = Dataset::from_rows(&[("Nowhere", "NWH", "1944-02-30", "1945-01-01")])
            .unwrap_err();
        assert_eq!(
            err,
            DatasetError::InvalidDate {
                country: "Nowhere".to_string(),
                field: "start",
                value: "1944-02-30".to_string(),
            }
        );
    }

    #[test]
    fn test_rejects_bad_region_code() {
        let err = Dataset::from_rows(&[("Nowhere", "nw", "1944-01-01", "1945-01-01")])
            .unwrap_err();
        assert!(matches!(err, DatasetError::InvalidRegionCode { .. }));
    }

    #[test]
    fn test_rejects_duplicate_code() {
        let rows = [
            ("Austria", "AUT", "1938-03-12", "1945-05-08"),
            ("Austria again", "AUT", "1938-03-12", "1945-05-08"),
        ];
        assert_eq!(
            Dataset::from_rows(&rows).unwrap_err(),
            DatasetError::DuplicateRegion {
                code: "AUT".to_string()
            }
        );
    }

    #[test]
    fn test_rejects_empty_table() {
        assert_eq!(Dataset::from_rows(&[]).unwrap_err(), DatasetError::Empty);
    }

    #[test]
    fn test_single_day_occupation_is_valid() {
        let ds = Dataset::from_rows(&[("Nowhere", "NWH", "1944-01-01", "1944-01-01")]).unwrap();
        assert_eq!(ds.occupied_on(date("1944-01-01")).len(), 1);
    }
}
