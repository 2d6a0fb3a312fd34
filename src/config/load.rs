use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::types::RectangledConfig;

/// A parsed config file and the directory it was read from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: RectangledConfig,
    /// Base for every relative path in `config`
    pub config_dir: PathBuf,
}

impl LoadedConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        let config: RectangledConfig = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;

        let config_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self { config, config_dir })
    }

    /// Resolve the configured inputs to layout paths.
    ///
    /// Entries are relative to the config file. Glob patterns expand to
    /// their matches in the order `glob` yields them; other entries are
    /// passed through and may name a file or a directory.
    pub fn resolve_inputs(&self) -> Result<Vec<PathBuf>> {
        let mut resolved = Vec::with_capacity(self.config.input.len());

        for entry in &self.config.input {
            let joined = self.config_dir.join(entry);

            if !is_glob_pattern(entry) {
                resolved.push(joined);
                continue;
            }

            let matches = glob::glob(&joined.to_string_lossy())
                .with_context(|| format!("invalid glob pattern: {}", entry))?;
            for found in matches {
                let path =
                    found.with_context(|| format!("failed to read glob match: {}", entry))?;
                resolved.push(path);
            }
        }

        Ok(resolved)
    }

    /// Resolve the report path relative to the config file directory.
    pub fn resolve_output(&self) -> Option<PathBuf> {
        self.config
            .output
            .as_ref()
            .map(|output| self.config_dir.join(output))
    }
}

/// Check if a pattern contains glob characters.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?') || pattern.contains('[')
}
