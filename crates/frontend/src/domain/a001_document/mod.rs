//! a001 Document: AI-generated documents and their authoring UI.

pub mod lifecycle;
pub mod ui;
