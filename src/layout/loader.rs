use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};
use rayon::prelude::*;

use super::LayoutFile;
use crate::error::RectangledError;
use crate::set::Set;

const LAYOUT_EXTENSION: &str = "json";

/// Load every set from the given layout files or directories.
///
/// Directories are searched recursively for `.json` files. Files are parsed
/// in parallel; the returned sets keep input order, then file order.
pub fn load_layouts(inputs: &[impl AsRef<Path>]) -> Result<Vec<Set<String>>> {
    let layout_paths = collect_layout_paths(inputs)?;

    if layout_paths.is_empty() {
        return Err(RectangledError::NoLayouts.into());
    }

    info!("Loading {} layout files...", layout_paths.len());

    let per_file: Result<Vec<_>> = layout_paths
        .par_iter()
        .map(|path| load_single_layout(path))
        .collect();

    Ok(per_file?.into_iter().flatten().collect())
}

fn collect_layout_paths(inputs: &[impl AsRef<Path>]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for input in inputs {
        let path = input.as_ref();
        if !path.exists() {
            return Err(RectangledError::InputNotFound(path.to_path_buf()).into());
        }

        if path.is_file() {
            paths.push(path.to_path_buf());
        } else if path.is_dir() {
            let mut found = Vec::new();
            collect_from_directory(path, &mut found)?;
            found.sort();
            paths.extend(found);
        }
    }

    Ok(paths)
}

fn collect_from_directory(dir: &Path, paths: &mut Vec<PathBuf>) -> Result<()> {
    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let path = entry?.path();

        if path.is_file() && is_layout_file(&path) {
            paths.push(path);
        } else if path.is_dir() {
            collect_from_directory(&path, paths)?;
        }
    }

    Ok(())
}

fn is_layout_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(LAYOUT_EXTENSION))
}

fn load_single_layout(path: &Path) -> Result<Vec<Set<String>>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read layout file: {}", path.display()))?;

    Ok(parse_layout(&content, path)?)
}

/// Parse a layout document and build its sets
fn parse_layout(content: &str, path: &Path) -> Result<Vec<Set<String>>, RectangledError> {
    let layout: LayoutFile =
        serde_json::from_str(content).map_err(|e| RectangledError::LayoutParse {
            path: path.to_path_buf(),
            source: e,
        })?;

    debug!(
        "{}: layout version {} with {} sets",
        path.display(),
        layout.version,
        layout.sets.len()
    );

    layout
        .sets
        .into_iter()
        .map(|entry| {
            let set = entry.id.clone();
            Set::try_from(entry).map_err(|e| RectangledError::InvalidSet {
                path: path.to_path_buf(),
                set,
                source: e,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeometryError;

    #[test]
    fn test_is_layout_file() {
        assert!(is_layout_file(Path::new("rooms.json")));
        assert!(is_layout_file(Path::new("nested/ROOMS.JSON")));
        assert!(!is_layout_file(Path::new("rooms.toml")));
        assert!(!is_layout_file(Path::new("rooms")));
    }

    #[test]
    fn test_parse_layout_builds_bounds() {
        let json = r#"{"sets": [
            {"id": "a", "x": 0, "y": 0, "children": [
                {"id": "a1", "x": 0, "y": 0, "w": 10, "z": 10},
                {"id": "a2", "x": 10, "y": 10, "w": 100, "z": 100}
            ]}
        ]}"#;
        let sets = parse_layout(json, Path::new("a.json")).unwrap();

        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].id(), "a");
        assert_eq!(sets[0].area(), 12100);
    }

    #[test]
    fn test_parse_layout_names_invalid_set() {
        let json = r#"{"sets": [
            {"id": "ok", "x": 0, "y": 0},
            {"id": "broken", "x": 0, "y": 0, "children": [
                {"id": "b1", "x": -1, "y": 0, "w": 10, "z": 10}
            ]}
        ]}"#;
        let err = parse_layout(json, Path::new("b.json")).unwrap_err();

        match err {
            RectangledError::InvalidSet { set, source, .. } => {
                assert_eq!(set, "broken");
                assert_eq!(source, GeometryError::NegativePosition);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_layout_rejects_out_of_range_child() {
        let json = r#"{"sets": [
            {"id": "huge", "x": 0, "y": 0, "children": [
                {"id": "h1", "x": 9223372036854775800, "y": 0, "w": 9223372036854775807, "z": 10}
            ]}
        ]}"#;
        let err = parse_layout(json, Path::new("d.json")).unwrap_err();

        assert!(matches!(
            err,
            RectangledError::InvalidSet {
                source: GeometryError::Overflow,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_layout_bad_json() {
        let err = parse_layout("{\"sets\": [", Path::new("c.json")).unwrap_err();
        assert!(matches!(err, RectangledError::LayoutParse { .. }));
    }

    #[test]
    fn test_missing_input() {
        let err = load_layouts(&["definitely/not/here.json"]).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
