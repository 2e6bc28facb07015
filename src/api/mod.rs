//! Zabbix JSON-RPC API access
//!
//! This module is responsible for talking to the remote Zabbix server. It
//! exposes the operations the reporter needs (server version lookup,
//! authentication, and host inventory retrieval) along with the wire types
//! the inventory arrives in.
//!
//! Transport and API-level failures are not masked here: a rejected login or
//! an unreachable server propagates to the program boundary and terminates
//! the run. Per-field data quality problems (a host without interfaces, an
//! item without a recorded value) are the extraction engine's concern and are
//! tolerated by the wire types instead.

mod client;
mod host;

pub use client::Client;
pub use host::{AvailabilityStatus, HostInterface, HostItem, HostRecord, InterfaceType};
