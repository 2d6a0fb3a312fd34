mod builder;
mod types;

pub use builder::ReportBuilder;
pub use types::{
    EdgeChoice, OverlapMatch, OverlapPair, Query, Report, SetSummary, TouchMatch, TouchPair,
};
