// Root app shell and re-exports for workspace crates used by bins.
pub use data_runtime as data;
pub use upgrade_core as calc;
pub mod cli;
pub mod telemetry;
