use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pkgviz",
    version,
    about = "Print the internal package import graph of a Go project"
)]
pub struct Cli {
    /// Logical project name (defaults to the module path in go.mod)
    #[arg(long, value_name = "NAME")]
    pub project_name: Option<String>,
    /// Project root directory
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub project_root: PathBuf,
    /// Emit a Graphviz dot document instead of an edge list
    #[arg(long)]
    pub dot: bool,
    /// Emit the plain edge list even if pkgviz.toml asks for dot
    #[arg(long, conflicts_with = "dot")]
    pub plain: bool,
    /// Maximum directory depth to descend; negative means unbounded
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub max_depth: Option<i64>,
    /// Ignore pkgviz.toml in the project root
    #[arg(long)]
    pub no_config: bool,
    /// Enable debug logging on stderr
    #[arg(long, short)]
    pub verbose: bool,
}
