//! Page components for different routes in the application.

pub mod create_post;
pub mod discussion;
pub mod games;
pub mod not_found;

pub use create_post::*;
pub use discussion::*;
pub use games::*;
pub use not_found::*;
