//! The monthly simulation loop and result assembly.

pub mod engine;

pub use engine::{run_payroll, SimulationError, Simulator};
