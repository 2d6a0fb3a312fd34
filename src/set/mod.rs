mod query;
mod set;

pub use set::{Set, SetLayout};
