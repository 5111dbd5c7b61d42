use chrono::NaiveDate;
use serde::Serialize;

// ── Occupation record ────────────────────────────────────────────────────

/// One country and the interval during which it was occupied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OccupationRecord {
    pub country_name: String,
    /// Three-letter map region code (AUT, POL, ...)
    pub region_code: String,
    pub occupation_start: NaiveDate,
    pub occupation_end: NaiveDate,
}

impl OccupationRecord {
    /// Both bounds are inclusive: a country is occupied on the day of the
    /// invasion and on the day of liberation.
    pub fn is_occupied_on(&self, date: NaiveDate) -> bool {
        self.occupation_start <= date && date <= self.occupation_end
    }

    /// Length of the occupation in days, counting both ends.
    pub fn duration_days(&self) -> i64 {
        (self.occupation_end - self.occupation_start).num_days() + 1
    }
}

// ── Occupying power ──────────────────────────────────────────────────────

/// The power whose own territory is always shown as marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Occupier {
    pub code: &'static str,
    pub name: &'static str,
    /// Used in report sentences: "under German occupation"
    pub adjective: &'static str,
}

pub const GERMANY: Occupier = Occupier {
    code: "DEU",
    name: "Germany",
    adjective: "German",
};
