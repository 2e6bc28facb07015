//! Command-line interface and orchestration for zbx-report
//!
//! There is a single command: run the snapshot. The flow is
//!
//! 1. Parse arguments and load configuration
//! 2. Connect to the Zabbix server and print its version banner
//! 3. Fetch the host inventory
//! 4. Extract one normalized row per host, in inventory order
//! 5. Assemble the table and write the requested report formats
//!
//! Collaborator failures at any step terminate the run with an error;
//! per-field data quality problems never do.

mod run;

pub use run::{Args, run};
