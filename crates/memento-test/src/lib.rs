//! Memento Test - Simulation harness for the countdown and proportion
//! engines
//!
//! Simulates:
//! - A drifting, jittering host clock
//! - Multi-day runs of the 1 Hz countdown and high-frequency sampling
//! - Invariant checks on every observed frame

pub mod simulator;

pub use simulator::*;
