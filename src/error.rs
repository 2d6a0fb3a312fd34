use std::path::PathBuf;
use thiserror::Error;

/// Validation failures raised by the geometry core.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    #[error("rectangle has zero area")]
    ZeroArea,

    #[error("rectangle top-left point is not above and left of its bottom-right point")]
    BadPoints,

    #[error("rectangles in a set must not have a negative position")]
    NegativePosition,

    #[error("edge must be one of top, right, bottom or left")]
    UnknownEdge,

    #[error("rectangle coordinates are out of range for the set")]
    Overflow,
}

#[derive(Error, Debug)]
pub enum RectangledError {
    #[error("Input path does not exist: {0}")]
    InputNotFound(PathBuf),

    #[error("No layout files found in input")]
    NoLayouts,

    #[error("Failed to parse layout file '{path}': {source}")]
    LayoutParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid set '{set}' in layout file '{path}': {source}")]
    InvalidSet {
        path: PathBuf,
        set: String,
        source: GeometryError,
    },

    #[error("Unknown {field} edge '{value}' in config file. Valid values: top, right, bottom, left")]
    UnknownEdgeName { field: &'static str, value: String },

    #[error("Failed to write report '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}
