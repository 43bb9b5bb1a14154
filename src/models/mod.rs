//! Domain types: employee input, pay representation, state and results.

pub mod input;
pub mod pay;
pub mod result;
pub mod state;

pub use input::{EmployeeInput, InputError};
pub use pay::{Commission, PayStructure};
pub use result::{PayrollPeriod, PayrollResult};
pub use state::SimulationState;
