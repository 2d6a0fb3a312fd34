mod args;

pub use args::{CliArgs, Command, CommonArgs, EdgeArg, EdgeArgs};
