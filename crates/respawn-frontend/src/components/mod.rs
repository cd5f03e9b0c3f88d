//! Reusable UI components for the Respawn frontend.

pub mod game_card;
pub mod navbar;
pub mod post_card;
pub mod sentiment;
pub mod spinner;

pub use game_card::*;
pub use navbar::*;
pub use post_card::*;
pub use sentiment::*;
pub use spinner::*;
