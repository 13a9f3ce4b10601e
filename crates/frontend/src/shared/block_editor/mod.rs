//! Embedded block editor integration.
//!
//! The editor itself is a JS library mounted by the host page adapter
//! (`assets/editor.js`). This module binds its API and wraps it in the
//! [`EditorSurface`] trait so the generate flow can run against an
//! in-memory double in tests.

mod bindings;
mod surface;

pub use surface::{BlockNoteSurface, EditorSurface};
