mod cli;

use cli::Args;
use deptree::adapters::outbound::console::StderrProgressReporter;
use deptree::adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter, StdoutPresenter};
use deptree::application::dto::ParseRequest;
use deptree::application::factories::FormatterFactory;
use deptree::application::read_models::DependencyTreeReadModelBuilder;
use deptree::application::use_cases::ParseDependencyTreeUseCase;
use deptree::config::{self, ConfigFile};
use deptree::ports::outbound::{OutputPresenter, ProgressReporter};
use deptree::shared::error::ExitCode;
use deptree::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        let reporter = StderrProgressReporter::new();
        reporter.report_error("\n❌ An error occurred:\n");
        reporter.report_error(&e.to_string());

        for cause in e.chain().skip(1) {
            reporter.report_error(&format!("\nCaused by: {}", cause));
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let input_path = PathBuf::from(&args.input);

    let config = load_config(&args, &input_path)?;
    let options = config::resolve_options(args.overrides(), config.as_ref())?;

    let tree_reader = FileSystemReader::new().with_strip_log_prefix(options.strip_log_prefix);
    let progress_reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    if !args.quiet {
        eprintln!("{}", FormatterFactory::progress_message(options.format));
    }

    let use_case = ParseDependencyTreeUseCase::new(tree_reader, progress_reporter);
    let response = use_case.execute(ParseRequest::new(input_path.clone(), options.strict_levels))?;

    let model = DependencyTreeReadModelBuilder::build(
        &response.result,
        Some(input_path.display().to_string()),
    );
    let formatted_output = FormatterFactory::create(options.format).format(&model)?;

    let presenter: Box<dyn OutputPresenter> = if let Some(output_path) = args.output {
        Box::new(FileSystemWriter::new(PathBuf::from(output_path)))
    } else {
        Box::new(StdoutPresenter::new())
    };

    presenter.present(&formatted_output)?;

    Ok(())
}

/// Explicit `--config` wins; otherwise look next to the input unless `--no-config`.
fn load_config(args: &Args, input_path: &Path) -> Result<Option<ConfigFile>> {
    if let Some(path) = &args.config {
        return config::load_config_from_path(Path::new(path)).map(Some);
    }
    if args.no_config {
        return Ok(None);
    }

    let dir = match input_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    config::discover_config(dir)
}
