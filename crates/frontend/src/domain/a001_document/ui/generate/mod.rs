//! Document Generate UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: generation API client
//! - view_model.rs: form state and the submit lifecycle
//! - view.rs: main component `GeneratePage`

mod model;
mod view;
mod view_model;

pub use model::{GenerationApi, GenerationBackend};
pub use view::GeneratePage;
pub use view_model::GeneratePageVm;
