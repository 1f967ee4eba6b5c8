//! Foundation module - Core utilities shared by the host and the examples
//!
//! - Logging initialisation
//! - Frame timing and pacing

pub mod logging;
pub mod time;
