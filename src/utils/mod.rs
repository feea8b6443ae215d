//! Utility Module
//!
//! - [`Countdown`]: normalized one-shot timer used for cross-fades

pub mod time;

pub use time::Countdown;
