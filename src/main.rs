use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use rectangled::cli::{CliArgs, Command, EdgeArg};
use rectangled::config::LoadedConfig;
use rectangled::error::RectangledError;
use rectangled::geometry::Edge;
use rectangled::layout::load_layouts;
use rectangled::output::write_report;
use rectangled::report::ReportBuilder;

#[allow(clippy::print_stderr)]
fn main() {
    if let Err(e) = run() {
        // Use eprintln instead of error! because logger may not be initialized
        // (e.g., config loading fails before logger init)
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = CliArgs::parse();

    let merged = merge_config_with_args(&cli.command)?;

    env_logger::Builder::new()
        .filter_level(if merged.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();

    info!("Rectangled v{}", env!("CARGO_PKG_VERSION"));

    let sets = load_layouts(&merged.input)?;
    info!("Loaded {} sets", sets.len());

    let report = ReportBuilder::new(cli.command.query())
        .priority(merged.priority)
        .secondary(merged.secondary)
        .build(&sets)?;

    write_report(&report, merged.output.as_deref(), merged.pretty)?;

    if let Some(path) = &merged.output {
        info!("Saved {}", path.display());
    }

    Ok(())
}

/// Merged configuration from CLI args and optional config file.
struct MergedConfig {
    input: Vec<PathBuf>,
    output: Option<PathBuf>,
    priority: Edge,
    secondary: Edge,
    pretty: bool,
    verbose: bool,
}

/// Merge config file values with CLI arguments.
/// CLI arguments always take precedence over config values.
fn merge_config_with_args(command: &Command) -> Result<MergedConfig> {
    let args = command.common();

    let loaded_config = if let Some(config_path) = &args.config {
        Some(
            LoadedConfig::load(config_path)
                .with_context(|| format!("failed to load config: {}", config_path.display()))?,
        )
    } else {
        None
    };

    // Determine input files: CLI args override config
    let input = if !args.input.is_empty() {
        args.input.clone()
    } else if let Some(ref lc) = loaded_config {
        lc.resolve_inputs()
            .context("failed to resolve input files from config")?
    } else {
        // This shouldn't happen due to clap's required_unless_present
        Vec::new()
    };

    // Report path: CLI > config > stdout
    let output = args
        .output
        .clone()
        .or_else(|| loaded_config.as_ref().and_then(LoadedConfig::resolve_output));

    // --compact on the CLI wins, otherwise the config decides
    let pretty = if args.compact {
        false
    } else if let Some(ref lc) = loaded_config {
        lc.config.pretty
    } else {
        true
    };

    // Verbose is CLI-only
    let verbose = args.verbose;

    let (priority, secondary) = resolve_edges(command, loaded_config.as_ref())?;

    Ok(MergedConfig {
        input,
        output,
        priority,
        secondary,
        pretty,
        verbose,
    })
}

/// Edges for the `edge` query: CLI > config > default.
///
/// Other commands never read the config's edge names.
fn resolve_edges(command: &Command, loaded_config: Option<&LoadedConfig>) -> Result<(Edge, Edge)> {
    let Command::Edge(edge_args) = command else {
        return Ok((Edge::Top, Edge::Left));
    };

    let priority = match edge_args.priority {
        Some(edge) => edge,
        None => config_edge(loaded_config.map(|lc| lc.config.priority.as_str()), "priority")?
            .unwrap_or(EdgeArg::Top),
    };

    let secondary = match edge_args.secondary {
        Some(edge) => edge,
        None => config_edge(loaded_config.map(|lc| lc.config.secondary.as_str()), "secondary")?
            .unwrap_or(EdgeArg::Left),
    };

    Ok((priority.into(), secondary.into()))
}

fn config_edge(name: Option<&str>, field: &'static str) -> Result<Option<EdgeArg>> {
    let Some(name) = name else {
        return Ok(None);
    };

    let edge = EdgeArg::from_name(name).ok_or_else(|| RectangledError::UnknownEdgeName {
        field,
        value: name.to_string(),
    })?;

    Ok(Some(edge))
}
