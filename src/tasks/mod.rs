//! Background Tasks Module
//!
//! Contains background tasks that run periodically during service operation.
//!
//! # Tasks
//! - Cache Sweep: removes expired cache entries at configured intervals
//!   (opt-in; sweeping is off by default)

mod sweep;

pub use sweep::spawn_sweep_task;
