//! filter → render → figure for one selected date.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, warn};

use crate::dataset::Dataset;
use crate::figure::ChoroplethFigure;
use crate::page::map_title;
use crate::record::{GERMANY, OccupationRecord};
use crate::render::{Rendering, render};

/// Everything one rendering pass produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    /// The requested date after clamping into the slider range
    pub selected_date: NaiveDate,
    pub occupied: Vec<OccupationRecord>,
    pub rendering: Rendering,
    pub figure: ChoroplethFigure,
}

impl MapView {
    pub fn for_date(dataset: &Dataset, requested: NaiveDate) -> Self {
        let slider = dataset.slider();
        let selected_date = slider.clamp(requested);
        if !slider.contains(requested) {
            warn!(%requested, %selected_date, "date outside slider range, clamped");
        }

        let occupied = dataset.occupied_on(selected_date);
        let rendering = render(dataset.records(), &occupied, selected_date, &GERMANY);
        let figure = ChoroplethFigure::from_rendering(&rendering, map_title(selected_date));
        debug!(
            %selected_date,
            marked = ?rendering.regions.marked_codes().collect::<Vec<_>>(),
            "map view rendered"
        );

        Self {
            selected_date,
            occupied: occupied.into_iter().cloned().collect(),
            rendering,
            figure,
        }
    }

    /// View for the slider's starting position.
    pub fn initial(dataset: &Dataset) -> Self {
        Self::for_date(dataset, dataset.slider().default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slider::parse_date;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn test_clamps_before_filtering() {
        let ds = Dataset::shared().unwrap();
        let early = MapView::for_date(ds, date("1900-01-01"));
        assert_eq!(early.selected_date, date("1937-03-12"));
        assert!(early.occupied.is_empty());

        let late = MapView::for_date(ds, date("1946-01-01"));
        assert_eq!(late.selected_date, date("1945-05-08"));
        assert_eq!(late.occupied.len(), 11);
    }

    #[test]
    fn test_range_bounds_are_kept_as_is() {
        let ds = Dataset::shared().unwrap();
        let slider = ds.slider();
        assert_eq!(MapView::for_date(ds, slider.min).selected_date, slider.min);
        assert_eq!(MapView::for_date(ds, slider.max).selected_date, slider.max);
    }

    #[test]
    fn test_initial_view_is_empty() {
        let view = MapView::initial(Dataset::shared().unwrap());
        assert_eq!(view.selected_date, date("1937-03-12"));
        assert_eq!(
            view.rendering.report.header(),
            "No countries under German occupation on this date."
        );
    }

    #[test]
    fn test_title_carries_date() {
        let view = MapView::for_date(Dataset::shared().unwrap(), date("1941-06-22"));
        assert_eq!(
            view.figure.layout.title.text,
            "German Invasions in World War II (as of 1941-06-22)"
        );
        assert_eq!(view.occupied.last().unwrap().country_name, "Soviet Union");
    }
}
