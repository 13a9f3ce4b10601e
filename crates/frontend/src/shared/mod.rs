pub mod api_utils;
pub mod block_editor;
pub mod components;
pub mod config;
pub mod icons;
