pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod output;
pub mod report;
pub mod set;

pub use error::{GeometryError, RectangledError};
pub use geometry::{Edge, EdgeCoordinates, Rectangle};
pub use report::{Query, Report, ReportBuilder};
pub use set::{Set, SetLayout};
