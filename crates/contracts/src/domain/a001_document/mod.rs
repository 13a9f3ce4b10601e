//! Document generation contracts shared between the frontend and the
//! generation backend.

pub mod generation;
