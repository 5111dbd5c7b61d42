use thiserror::Error;

/// Why the embedded occupation table could not be loaded.
///
/// `Clone` because the lazily built dataset caches its failure and hands a
/// copy back on every access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    #[error("record {country}: invalid {field} date {value:?}")]
    InvalidDate {
        country: String,
        field: &'static str,
        value: String,
    },

    #[error("record {country}: region code {code:?} is not three uppercase letters")]
    InvalidRegionCode { country: String, code: String },

    #[error("record {country}: occupation starts {start} after it ends {end}")]
    InvertedInterval {
        country: String,
        start: String,
        end: String,
    },

    #[error("region code {code} appears more than once")]
    DuplicateRegion { code: String },

    #[error("occupation table is empty")]
    Empty,
}

/// A date string that is not `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected a YYYY-MM-DD date, got {input:?}")]
pub struct DateParseError {
    pub input: String,
}
