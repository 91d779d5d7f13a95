//! Memento Runtime - Host scheduling loop
//!
//! This crate implements the driving loop around the pure engines:
//! 1. Read the wall clock through an injected capability
//! 2. Tick the countdown at 1 Hz
//! 3. Sample proportions at ~60 Hz
//! 4. Assemble a frame snapshot for the rendering layer
//! 5. Publish frames over a watch channel
//!
//! Both cadences run cooperatively inside one task; the only mutable state
//! is the countdown's seconds counter, owned by the 1 Hz arm.

pub mod clock;
pub mod frame;
pub mod scheduler;
pub mod telemetry;

pub use clock::*;
pub use frame::*;
pub use scheduler::*;
