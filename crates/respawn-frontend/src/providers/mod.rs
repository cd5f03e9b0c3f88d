//! Context providers for shared application state and services.

pub mod api;
pub mod theme;

pub use api::{ApiContext, ApiProvider, use_api};
pub use theme::{ThemeProvider, use_theme};
