//! Read models for CQRS-lite pattern
//!
//! View-optimized structs that the formatters render.

pub mod prerequisite_read_model;
pub mod prerequisite_read_model_builder;
pub mod tree_view;

pub use prerequisite_read_model::PrerequisiteReadModel;
pub use prerequisite_read_model_builder::PrerequisiteReadModelBuilder;
pub use tree_view::{NodeView, TreeView};
