//! Start-up configuration.

use crate::theme::Theme;

/// Values fixed for the lifetime of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct ForumConfig {
    /// Prefix for every API request. Empty means same-origin.
    pub api_base_url: String,
    pub theme: Theme,
}

impl ForumConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: normalize_base(&api_base_url.into()),
            theme: Theme::default(),
        }
    }

    /// Reads `RESPAWN_API_URL` as set when the bundle was built.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("RESPAWN_API_URL").unwrap_or_default())
    }
}

impl Default for ForumConfig {
    fn default() -> Self {
        Self::new("")
    }
}

fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
