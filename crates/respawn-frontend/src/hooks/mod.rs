//! Custom hooks shared by the pages.

pub mod use_load;

pub use use_load::use_load;
