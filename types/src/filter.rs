use chrono::NaiveDate;

use crate::record::OccupationRecord;

/// Records whose occupation interval contains `date`, in input order.
///
/// No matches is an empty vector, not an error.
pub fn filter(records: &[OccupationRecord], date: NaiveDate) -> Vec<&OccupationRecord> {
    records.iter().filter(|r| r.is_occupied_on(date)).collect()
}
