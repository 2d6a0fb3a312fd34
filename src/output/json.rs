use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::error::RectangledError;
use crate::report::Report;

#[derive(Serialize)]
struct JsonOutput<'a> {
    meta: Meta,
    report: &'a Report,
}

#[derive(Serialize)]
struct Meta {
    app: &'static str,
    version: &'static str,
}

/// Render a report as a JSON document
pub fn render_report(report: &Report, pretty: bool) -> Result<String> {
    let output = JsonOutput {
        meta: Meta {
            app: "rectangled",
            version: env!("CARGO_PKG_VERSION"),
        },
        report,
    };

    let mut content = if pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    content.push('\n');

    Ok(content)
}

/// Write a report to `path`, or to stdout when no path is given
pub fn write_report(report: &Report, path: Option<&Path>, pretty: bool) -> Result<()> {
    let content = render_report(report, pretty)?;

    match path {
        Some(path) => fs::write(path, content).map_err(|e| RectangledError::OutputWrite {
            path: path.to_path_buf(),
            source: e,
        })?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
