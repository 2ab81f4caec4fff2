//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod inspect;
pub mod pie;
pub mod trend;

// Re-export main command functions
pub use inspect::{execute_inspect, InspectArgs};
pub use pie::{execute_pie, PieArgs};
pub use trend::{execute_trend, validate_args, TrendArgs};
