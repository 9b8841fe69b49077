/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, etc.).
pub mod dependency_tree_reader;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;

pub use dependency_tree_reader::DependencyTreeReader;
pub use formatter::TreeFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
