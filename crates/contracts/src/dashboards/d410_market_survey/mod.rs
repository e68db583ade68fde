//! Wireless speaker market survey dashboard.

mod builtin;
pub mod config;
pub mod section;

pub use config::*;
pub use section::{SectionId, SectionNav};
