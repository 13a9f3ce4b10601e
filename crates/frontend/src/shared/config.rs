//! Build-time application configuration.

use crate::shared::api_utils::default_endpoint;

/// Where the heading list of a generation request comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingSource {
    /// The form's heading rows, in row order.
    #[default]
    Form,
    /// The heading blocks of the live editor document at submit time.
    Editor,
}

impl HeadingSource {
    /// Parses a configuration value; anything unrecognized falls back to
    /// [`HeadingSource::Form`].
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "editor" => Self::Editor,
            _ => Self::Form,
        }
    }
}

/// Application configuration, resolved once at startup and passed down
/// explicitly to the components that need it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Full URL of the generation endpoint.
    pub api_url: String,
    /// Heading strategy for generation requests.
    pub heading_source: HeadingSource,
}

impl AppConfig {
    /// Reads `GENERATOR_API_URL` and `GENERATOR_HEADING_SOURCE` baked in at
    /// compile time, with location-derived and `Form` fallbacks.
    pub fn from_env() -> Self {
        let api_url = option_env!("GENERATOR_API_URL")
            .map(str::to_string)
            .unwrap_or_else(default_endpoint);
        let heading_source = option_env!("GENERATOR_HEADING_SOURCE")
            .map(HeadingSource::parse)
            .unwrap_or_default();
        Self {
            api_url,
            heading_source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_source_parse() {
        assert_eq!(HeadingSource::parse("editor"), HeadingSource::Editor);
        assert_eq!(HeadingSource::parse(" Editor "), HeadingSource::Editor);
        assert_eq!(HeadingSource::parse("form"), HeadingSource::Form);
        assert_eq!(HeadingSource::parse(""), HeadingSource::Form);
        assert_eq!(HeadingSource::parse("nonsense"), HeadingSource::Form);
    }

    #[test]
    fn test_heading_source_default_is_form() {
        assert_eq!(HeadingSource::default(), HeadingSource::Form);
    }
}
