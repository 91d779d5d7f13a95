//! Memento Engine - Temporal decomposition and proportion engines
//!
//! This crate implements the calculation core:
//! - CountdownEngine: seven-granularity remaining-time breakdown driven by
//!   a 1 Hz tick, with an Active/Expired lifecycle
//! - ProportionEngine: fraction-elapsed of the current year, month, week,
//!   day, hour, minute, and sub-second tick
//! - WeekGridClassifier: past/current/future classification for the
//!   life-in-weeks grid
//!
//! Every method takes "now" as an explicit parameter so the engines are
//! fully testable with synthetic clocks.

pub mod countdown;
pub mod proportion;
pub mod weekgrid;

pub use countdown::*;
pub use proportion::*;
pub use weekgrid::*;
