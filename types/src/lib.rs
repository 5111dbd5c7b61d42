//! Occupation table, date filter and map rendering shared by the CLI and
//! the browser frontend.

pub mod dataset;
pub mod error;
pub mod figure;
pub mod filter;
pub mod page;
pub mod pipeline;
pub mod record;
pub mod render;
pub mod slider;

pub use dataset::{Dataset, get_records};
pub use error::{DatasetError, DateParseError};
pub use figure::ChoroplethFigure;
pub use filter::filter;
pub use pipeline::MapView;
pub use record::{GERMANY, OccupationRecord, Occupier};
pub use render::{Region, RegionColorMap, RegionState, Rendering, Report, render};
pub use slider::{SliderConfig, format_date, parse_date};
