// src/cli/mod.rs
pub mod args;

pub use args::Cli;

use crate::config::Config;
use crate::graph::{build_graph, GoImports};
use crate::project::ProjectContext;
use crate::render::{render, OutputFormat};
use anyhow::{Context, Result};

/// Merges flags over the config file into a walk context and output format.
#[must_use]
pub fn resolve(cli: &Cli, config: &Config) -> (ProjectContext, OutputFormat) {
    let name = cli
        .project_name
        .clone()
        .or_else(|| config.project_name.clone())
        .unwrap_or_default();
    let max_depth = cli.max_depth.or(config.max_depth).unwrap_or(-1);
    let dot = !cli.plain && (cli.dot || config.dot.unwrap_or(false));

    let ctx = ProjectContext::new(name, cli.project_root.clone(), max_depth)
        .with_skip_dirs(config.skip_dirs.iter().cloned());
    (ctx, OutputFormat::from_dot_flag(dot))
}

/// Builds and renders the graph described by `cli`.
///
/// # Errors
/// Returns error if the config is malformed or any package fails to parse.
pub fn run(cli: &Cli) -> Result<String> {
    let config = if cli.no_config {
        Config::default()
    } else {
        Config::load(&cli.project_root)?
    };
    let (ctx, format) = resolve(cli, &config);
    tracing::debug!(
        project = %ctx.name,
        root = %ctx.root.display(),
        max_depth = ctx.max_depth,
        "resolved project"
    );

    let source = GoImports::new()?;
    let edges = build_graph(&ctx, &source)
        .with_context(|| format!("failed to scan {}", ctx.root.display()))?;
    Ok(render(&edges, &ctx.name, format))
}
