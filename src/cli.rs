use clap::Parser;

use deptree::application::dto::OutputFormat;
use deptree::config::CliOverrides;

/// Flatten a build tool's dependency tree report into transitive relations and depth levels
#[derive(Parser, Debug)]
#[command(name = "deptree")]
#[command(version)]
#[command(about = "Flatten a dependency tree report into transitive relations and depth levels", long_about = None)]
pub struct Args {
    /// Dependency tree report, e.g. the output of `mvn dependency:tree -DoutputFile=tree.txt`
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Output format: json or markdown [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Reject lines whose depth grows by more than one level
    #[arg(long)]
    pub strict: bool,

    /// Keep a leading "[INFO] " on each line instead of stripping it
    #[arg(long)]
    pub keep_log_prefix: bool,

    /// Path to a config file (disables auto-discovery)
    #[arg(short, long, value_name = "PATH", conflicts_with = "no_config")]
    pub config: Option<String>,

    /// Do not look for deptree.config.yml next to the input
    #[arg(long)]
    pub no_config: bool,

    /// Only print warnings and errors on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Options given explicitly on the command line
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            format: self.format,
            strict_levels: self.strict.then_some(true),
            strip_log_prefix: self.keep_log_prefix.then_some(false),
        }
    }
}
