//! Memento Core - Fundamental types and primitives
//!
//! This crate defines the core types used throughout the memento engines:
//! - Remaining-time breakdown and proportion value objects
//! - Week grid cells and classifications
//! - Calendar capability (week rules, calendar-year addition)
//! - Life configuration and unit constants
//! - Error types

pub mod breakdown;
pub mod calendar;
pub mod config;
pub mod error;
pub mod proportion;
pub mod week;

pub use breakdown::*;
pub use calendar::*;
pub use config::*;
pub use error::*;
pub use proportion::*;
pub use week::*;
