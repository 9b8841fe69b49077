//! Read models for the report formatters
//!
//! This module contains view-optimized structs that provide a sorted,
//! serializable representation of a parsed dependency tree.

pub mod component_view;
pub mod dependency_tree_read_model;
pub mod dependency_tree_read_model_builder;

pub use component_view::{ComponentView, DependencyView, LevelView};
pub use dependency_tree_read_model::{DependencyTreeReadModel, SummaryView};
pub use dependency_tree_read_model_builder::DependencyTreeReadModelBuilder;
