//! Per-resource bindings of the generic dispatcher.

pub mod article;
pub mod author;

pub use article::Articles;
pub use author::Authors;
