use serde::{Deserialize, Serialize};

use crate::set::SetLayout;

/// Layout file structure: a list of sets with their children.
///
/// Sets are stored without their bounds; loading rebuilds each one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutFile {
    /// Layout file version (currently 1)
    #[serde(default = "default_version")]
    pub version: u32,
    /// Sets in the order they were written
    #[serde(default)]
    pub sets: Vec<SetLayout<String>>,
}

fn default_version() -> u32 {
    1
}
