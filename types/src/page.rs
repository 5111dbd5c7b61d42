//! Fixed page copy shared by the CLI and the browser page.

use chrono::NaiveDate;

use crate::slider::format_date;

pub const APP_TITLE: &str = "German Invasions in World War II";

pub const SLIDER_LABEL: &str = "Select a date";

/// Heading of the map page, below the site-wide title.
pub const MAP_HEADING: &str = "Occupied territories by date";

pub const NOTES: &[&str] = &[
    "This map shows the progression of German invasions during World War II. \
     Use the slider to change the date and see which countries were under \
     German occupation at that time.",
    "Red countries are those under German control, including Germany itself.",
    "Note: The map uses historical borders from the World War II era, but \
     Yugoslavia has been replaced with its present-day countries, representing \
     Serbia, Croatia, Bosnia and Herzegovina, North Macedonia, Montenegro, and \
     Slovenia.",
];

pub fn map_title(date: NaiveDate) -> String {
    format!("{APP_TITLE} (as of {})", format_date(date))
}
