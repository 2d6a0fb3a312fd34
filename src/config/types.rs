use serde::{Deserialize, Serialize};

/// Rectangled configuration file structure.
///
/// All paths in the config are relative to the config file location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RectangledConfig {
    /// Config file version (currently 1)
    pub version: u32,
    /// Layout file paths, directories or glob patterns
    pub input: Vec<String>,
    /// Report file path; the report goes to stdout when unset
    pub output: Option<String>,
    /// Edge searched first by the `edge` query: "top", "right", "bottom" or "left"
    pub priority: String,
    /// Edge used to break ties by the `edge` query
    pub secondary: String,
    /// Pretty-print the JSON report
    pub pretty: bool,
}

impl Default for RectangledConfig {
    fn default() -> Self {
        Self {
            version: 1,
            input: Vec::new(),
            output: None,
            priority: "top".to_string(),
            secondary: "left".to_string(),
            pretty: true,
        }
    }
}
