//! deptree - dependency tree flattening for build tool reports
//!
//! This library rebuilds the structure of an indentation-rendered dependency
//! tree (such as `mvn dependency:tree` output) into two views:
//!
//! - a flattened relation from every component to all components beneath it,
//!   answering "does X depend, directly or transitively, on Y";
//! - the set of components found at each depth, usable as a bootstrap order.
//!
//! # Architecture
//!
//! - **Domain Layer** (`tree_parsing`): value types and the parser, no I/O
//! - **Application Layer** (`application`): use case, DTOs, read models
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): file system, console and formatter implementations
//! - **Shared** (`shared`): error types, exit codes and security checks
//!
//! # Example
//!
//! ```
//! use deptree::prelude::*;
//!
//! let lines = [
//!     "com.x:a:jar:1.0:compile",
//!     "+- com.x:b:jar:2.0:compile",
//!     "|  \\- com.x:c:jar:3.0:compile",
//! ];
//! let result = DependencyTreeParser::new().parse(&lines).unwrap();
//!
//! assert!(result.depends_on("a", "c"));
//! assert_eq!(result.level_count(), 3);
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod shared;
pub mod tree_parsing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::application::dto::{OutputFormat, ParseRequest, ParseResponse};
    pub use crate::application::read_models::{DependencyTreeReadModel, DependencyTreeReadModelBuilder};
    pub use crate::application::use_cases::ParseDependencyTreeUseCase;
    pub use crate::ports::outbound::{
        DependencyTreeReader, OutputPresenter, ProgressReporter, TreeFormatter,
    };
    pub use crate::shared::error::{DepTreeError, ExitCode, TreeParseError};
    pub use crate::shared::Result;
    pub use crate::tree_parsing::domain::{
        ComponentIdentity, DependencyTreeResult, FlattenedDependencies, LeveledDependencies,
    };
    pub use crate::tree_parsing::services::{DependencyTreeParser, LevelDecoder, MavenLevelDecoder};
}
