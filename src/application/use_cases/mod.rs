/// Use cases module containing application orchestration
mod parse_dependency_tree;

pub use parse_dependency_tree::ParseDependencyTreeUseCase;
