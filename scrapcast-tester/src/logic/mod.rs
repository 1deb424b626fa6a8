pub mod reports;
pub mod scenarios;
pub mod sensitivity;
pub mod tester;

pub use scenarios::{all_scenario_keys, get_scenario, list_scenarios};
pub use sensitivity::{SweepRecord, run_sweep};
pub use tester::*;
