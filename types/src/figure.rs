//! Plotly choropleth payload for the map.
//!
//! Field names follow Plotly's figure schema so the serialized figure can be
//! handed to `Plotly.react` without further translation.

use serde::Serialize;

use crate::render::{Rendering, RegionState};

pub const MAP_WIDTH: u32 = 800;
pub const MAP_HEIGHT: u32 = 500;

/// Map framing centered on Europe.
pub const CENTER_LON: f64 = 15.0;
pub const CENTER_LAT: f64 = 55.0;
pub const LON_RANGE: [f64; 2] = [-10.0, 40.0];
pub const LAT_RANGE: [f64; 2] = [35.0, 70.0];

const BORDER_COLOR: &str = "darkgray";
const BORDER_WIDTH: f64 = 0.5;
const COLORBAR_TITLE: &str = "Invaded";

// ── Trace ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoroplethTrace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub locations: Vec<String>,
    pub z: Vec<u8>,
    pub text: Vec<String>,
    pub colorscale: Vec<(f64, &'static str)>,
    pub autocolorscale: bool,
    pub reversescale: bool,
    pub marker: Marker,
    pub colorbar: ColorBar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub line: Line,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub color: &'static str,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorBar {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

// ── Layout ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    pub geo: Geo,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Geo {
    pub showframe: bool,
    pub showcoastlines: bool,
    pub projection: Projection,
    pub center: Center,
    pub lonaxis: Axis,
    pub lataxis: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Center {
    pub lon: f64,
    pub lat: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Axis {
    pub range: [f64; 2],
}

impl Geo {
    pub fn europe() -> Self {
        Self {
            showframe: false,
            showcoastlines: true,
            projection: Projection {
                kind: "equirectangular",
            },
            center: Center {
                lon: CENTER_LON,
                lat: CENTER_LAT,
            },
            lonaxis: Axis { range: LON_RANGE },
            lataxis: Axis { range: LAT_RANGE },
        }
    }
}

// ── Figure ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoroplethFigure {
    pub data: Vec<ChoroplethTrace>,
    pub layout: Layout,
}

impl ChoroplethFigure {
    /// One trace covering every region in `rendering`, titled `title`.
    pub fn from_rendering(rendering: &Rendering, title: String) -> Self {
        let regions = &rendering.regions.regions;
        let scale = rendering.regions.scale;

        let trace = ChoroplethTrace {
            kind: "choropleth",
            locations: regions.iter().map(|r| r.code.clone()).collect(),
            z: regions.iter().map(|r| r.state.value()).collect(),
            text: regions.iter().map(|r| r.label.clone()).collect(),
            colorscale: vec![
                (f64::from(RegionState::Unmarked.value()), scale.unmarked),
                (f64::from(RegionState::Marked.value()), scale.marked),
            ],
            autocolorscale: false,
            reversescale: false,
            marker: Marker {
                line: Line {
                    color: BORDER_COLOR,
                    width: BORDER_WIDTH,
                },
            },
            colorbar: ColorBar {
                title: Title {
                    text: COLORBAR_TITLE.to_string(),
                },
            },
        };

        Self {
            data: vec![trace],
            layout: Layout {
                title: Title { text: title },
                geo: Geo::europe(),
                width: MAP_WIDTH,
                height: MAP_HEIGHT,
            },
        }
    }

    /// `data` and `layout` serialized separately, the way `Plotly.react`
    /// takes them.
    pub fn to_json_parts(&self) -> serde_json::Result<(String, String)> {
        Ok((
            serde_json::to_string(&self.data)?,
            serde_json::to_string(&self.layout)?,
        ))
    }
}
