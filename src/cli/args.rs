use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::geometry::Edge;
use crate::report::Query;

#[derive(Parser, Debug)]
#[command(name = "rectangled")]
#[command(version, about = "Rectangle overlap and adjacency queries", long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Validate layout files and summarize every set
    Check(CommonArgs),
    /// Report children overlapped by each other set's bounds
    Overlaps(CommonArgs),
    /// Report children touched by each other set's bounds
    Touches(CommonArgs),
    /// Report the child of each set closest to an edge
    Edge(EdgeArgs),
}

impl Command {
    pub fn common(&self) -> &CommonArgs {
        match self {
            Command::Check(args) | Command::Overlaps(args) | Command::Touches(args) => args,
            Command::Edge(args) => &args.common,
        }
    }

    pub fn query(&self) -> Query {
        match self {
            Command::Check(_) => Query::Check,
            Command::Overlaps(_) => Query::Overlaps,
            Command::Touches(_) => Query::Touches,
            Command::Edge(_) => Query::Edge,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Layout files or directories of layout files
    #[arg(required_unless_present = "config")]
    pub input: Vec<PathBuf>,

    /// Load settings from a config file
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Write the report as a single line of JSON
    #[arg(long)]
    pub compact: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Args, Debug, Clone)]
pub struct EdgeArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Edge to search first [default: top]
    #[arg(long, value_enum)]
    pub priority: Option<EdgeArg>,

    /// Edge used to break ties [default: left]
    #[arg(long, value_enum)]
    pub secondary: Option<EdgeArg>,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum EdgeArg {
    #[value(name = "top")]
    Top,
    #[value(name = "right")]
    Right,
    #[value(name = "bottom")]
    Bottom,
    #[value(name = "left")]
    Left,
}

impl From<EdgeArg> for Edge {
    fn from(edge: EdgeArg) -> Self {
        match edge {
            EdgeArg::Top => Edge::Top,
            EdgeArg::Right => Edge::Right,
            EdgeArg::Bottom => Edge::Bottom,
            EdgeArg::Left => Edge::Left,
        }
    }
}

impl EdgeArg {
    /// Parse an edge name as written in a config file
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "top" => Some(EdgeArg::Top),
            "right" => Some(EdgeArg::Right),
            "bottom" => Some(EdgeArg::Bottom),
            "left" => Some(EdgeArg::Left),
            _ => None,
        }
    }
}
