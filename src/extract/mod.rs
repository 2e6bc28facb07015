//! Per-host metric extraction and normalization
//!
//! This module turns one host's raw inventory record into the flat row that
//! report writers consume. The entry point is [`extract`], a pure function of
//! a [`HostRecord`](crate::api::HostRecord) and a [`MetricSpec`]:
//!
//! - the host name is copied into a fixed `Hostname` column;
//! - the first agent-type interface contributes an `IP Address` column, and
//!   that column is omitted entirely when no agent interface exists;
//! - every spec entry produces a column, in spec order, holding the item's
//!   last observed value normalized per the key-based formatting rules.
//!
//! The engine never fails. A metric that is absent on a host (or whose value
//! cannot be parsed) degrades to the `N/A` placeholder for that field alone.
//! Internally an absent value is an honest `Option`; the placeholder string
//! only materializes at the formatting boundary.

mod engine;
mod metric_spec;
mod row;

pub use engine::extract;
pub use metric_spec::{MetricMapping, MetricSpec};
pub use row::{ExtractedRow, HOSTNAME_COLUMN, IP_ADDRESS_COLUMN, NOT_AVAILABLE};
