//! Turning a filtered record set into map regions and a text report.

use std::collections::HashSet;
use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::record::{OccupationRecord, Occupier};
use crate::slider::format_date;

// ── Region coloring ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RegionState {
    Unmarked,
    Marked,
}

impl RegionState {
    /// Position on the two-stop color scale.
    pub fn value(self) -> u8 {
        match self {
            Self::Unmarked => 0,
            Self::Marked => 1,
        }
    }
}

/// Two-stop scale: stop 0 for unmarked regions, stop 1 for marked ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorScale {
    pub unmarked: &'static str,
    pub marked: &'static str,
}

pub const OCCUPATION_SCALE: ColorScale = ColorScale {
    unmarked: "lightgrey",
    marked: "red",
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Region {
    pub code: String,
    /// Hover / display label
    pub label: String,
    pub state: RegionState,
}

/// Every region on the map with its state, in table order, occupier last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionColorMap {
    pub regions: Vec<Region>,
    pub scale: ColorScale,
}

impl RegionColorMap {
    pub fn marked_codes(&self) -> impl Iterator<Item = &str> {
        self.regions
            .iter()
            .filter(|r| r.state == RegionState::Marked)
            .map(|r| r.code.as_str())
    }
}

// ── Report ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status")]
pub enum Report {
    Occupied {
        date: NaiveDate,
        adjective: &'static str,
        countries: Vec<String>,
    },
    NoneOccupied {
        adjective: &'static str,
    },
}

impl Report {
    pub fn header(&self) -> String {
        match self {
            Self::Occupied {
                date, adjective, ..
            } => format!(
                "Countries under {adjective} occupation on {}:",
                format_date(*date)
            ),
            Self::NoneOccupied { adjective } => {
                format!("No countries under {adjective} occupation on this date.")
            }
        }
    }

    /// Occupied country names; empty for the "none occupied" case.
    pub fn entries(&self) -> &[String] {
        match self {
            Self::Occupied { countries, .. } => countries,
            Self::NoneOccupied { .. } => &[],
        }
    }

    /// Header followed by one "- name" line per country.
    pub fn lines(&self) -> Vec<String> {
        std::iter::once(self.header())
            .chain(self.entries().iter().map(|c| format!("- {c}")))
            .collect()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

// ── Render ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendering {
    pub regions: RegionColorMap,
    pub report: Report,
}

/// Color every known region and describe the occupied ones.
///
/// `filtered` is expected to be a subset of `records`; the occupier is
/// always marked whatever the date.
pub fn render(
    records: &[OccupationRecord],
    filtered: &[&OccupationRecord],
    selected_date: NaiveDate,
    occupier: &Occupier,
) -> Rendering {
    let occupied: HashSet<&str> = filtered.iter().map(|r| r.region_code.as_str()).collect();

    let state_of = |code: &str| {
        if code == occupier.code || occupied.contains(code) {
            RegionState::Marked
        } else {
            RegionState::Unmarked
        }
    };

    let regions = records
        .iter()
        .map(|r| (r.region_code.as_str(), r.country_name.as_str()))
        .chain(std::iter::once((occupier.code, occupier.name)))
        .map(|(code, label)| Region {
            code: code.to_string(),
            label: label.to_string(),
            state: state_of(code),
        })
        .collect();

    let report = if filtered.is_empty() {
        Report::NoneOccupied {
            adjective: occupier.adjective,
        }
    } else {
        Report::Occupied {
            date: selected_date,
            adjective: occupier.adjective,
            countries: filtered.iter().map(|r| r.country_name.clone()).collect(),
        }
    };

    Rendering {
        regions: RegionColorMap {
            regions,
            scale: OCCUPATION_SCALE,
        },
        report,
    }
}
