pub mod tags_input;

pub use tags_input::TagsInput;
