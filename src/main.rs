//! A tool to snapshot the health of a monitored fleet from a Zabbix server.
//!
//! # Overview
//!
//! `zbx-report` connects to a Zabbix server's JSON-RPC API, pulls the host
//! inventory together with the last observed value of a configurable set of
//! monitored items, normalizes those values into human-readable form, and
//! writes the result as a spreadsheet with one row per host and one column
//! per metric. It is meant for administrators who want a periodic, shareable
//! snapshot of fleet health without standing up dashboards.
//!
//! # Quick Start
//!
//! ```bash
//! export ZABBIX_API=https://zabbix.example.com
//! export ZABBIX_USER=reporter
//! export ZABBIX_PASSWORD=...
//! zbx-report
//! ```
//!
//! This prints the server's API version, then writes
//! `zabbix_reports/zabbix_system_metrics_<timestamp>.xlsx`.
//!
//! The three connection settings may also be supplied on the command line
//! (`--api-url`, `--username`, `--password`) or through a `.env` file in the
//! working directory; command line and environment take precedence over the
//! settings file.
//!
//! # Output Formats
//!
//! **Excel (default):**
//! ```bash
//! zbx-report                         # timestamped file under zabbix_reports/
//! zbx-report --excel fleet.xlsx      # exact path
//! zbx-report --output-dir /srv/rpt   # timestamped file under /srv/rpt
//! ```
//!
//! **CSV alongside the spreadsheet:**
//! ```bash
//! zbx-report --csv fleet.csv
//! ```
//!
//! **Terminal rendering:**
//! ```bash
//! zbx-report --console
//! zbx-report --console --color never
//! ```
//!
//! # Configuration
//!
//! An optional settings file customizes which items are extracted and where
//! reports land. Default search locations are `zbx-report.toml`,
//! `zbx-report.yml`, `zbx-report.yaml`, and `zbx-report.json` in the working
//! directory; `--config` points at an explicit file.
//!
//! ```toml
//! output_dir = "reports"
//!
//! [[metrics]]
//! key = "system.cpu.load"
//! name = "CPU Usage"
//!
//! [[metrics]]
//! key = "vm.memory.size[available]"
//! name = "Available Memory"
//! ```
//!
//! The order of `[[metrics]]` entries determines report column order. When no
//! settings file exists, a stock set of system metrics is reported (hostname,
//! OS description, CPU load, total/free memory, disk space, uptime).
//!
//! # Value Formatting
//!
//! Raw item values are normalized based on the item key:
//!
//! - keys containing `cpu`: rendered with two decimal places and a `%` suffix
//! - keys containing `memory` or `size`: bytes rendered as GB
//! - keys containing `uptime`: seconds rendered as days
//! - anything else: passed through verbatim
//!
//! A metric that is missing from a host or whose value fails numeric parsing
//! is reported as `N/A` rather than aborting the run. Only collaborator
//! failures (authentication rejection, unreachable server, unwritable output
//! file) terminate the program, with a nonzero exit code.
//!
//! # Diagnostics
//!
//! `--log-level debug` traces per-host processing; `RUST_LOG` is honored when
//! logging is enabled.

use clap::Parser;
use zbx_report::Result;
use zbx_report::commands::{Args, run};

#[tokio::main]
async fn main() -> Result<()> {
    // The .env file must land in the process environment before clap
    // resolves env-backed flags.
    let _ = dotenvy::dotenv();

    run(&Args::parse()).await
}
