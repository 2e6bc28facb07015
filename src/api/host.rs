//! Wire types for the `host.get` API operation.
//!
//! Zabbix returns every scalar as a JSON string, including numeric and
//! enumerated fields; the types here absorb that quirk so the rest of the
//! crate works with real enums. Any optional sub-record may be absent from
//! the payload and deserialization must still succeed.

use serde::Deserialize;
use strum::Display;

/// One monitored host's inventory snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct HostRecord {
    #[serde(default, rename = "hostid")]
    pub host_id: String,

    /// Display name, unique within the inventory snapshot.
    pub name: String,

    #[serde(default)]
    pub available: AvailabilityStatus,

    /// Network interfaces, in server order.
    #[serde(default)]
    pub interfaces: Vec<HostInterface>,

    /// Monitored items, in server order; `None` when the payload carried no
    /// item list at all.
    #[serde(default)]
    pub items: Option<Vec<HostItem>>,
}

/// Host availability as reported by the server (wire values "0", "1", "2").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, Deserialize)]
#[serde(from = "String")]
pub enum AvailabilityStatus {
    #[default]
    Unknown,
    Available,
    Unavailable,
}

impl From<String> for AvailabilityStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "1" => Self::Available,
            "2" => Self::Unavailable,
            _ => Self::Unknown,
        }
    }
}

/// A network interface attached to a host.
#[derive(Debug, Clone, Deserialize)]
pub struct HostInterface {
    #[serde(default, rename = "interfaceid")]
    pub interface_id: String,

    #[serde(default)]
    pub ip: String,

    #[serde(default, rename = "type")]
    pub kind: InterfaceType,
}

/// Interface kind; only agent interfaces (wire value "1") contribute the
/// address shown in reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum InterfaceType {
    Agent,
    #[default]
    Other,
}

impl From<String> for InterfaceType {
    fn from(value: String) -> Self {
        if value == "1" { Self::Agent } else { Self::Other }
    }
}

/// A monitored item with its last observed value.
#[derive(Debug, Clone, Deserialize)]
pub struct HostItem {
    /// Item key, e.g. `vm.memory.size[total]`. Not guaranteed unique within
    /// a host's item list.
    #[serde(rename = "key_")]
    pub key: String,

    #[serde(default, rename = "lastvalue")]
    pub last_value: Option<String>,

    #[serde(default)]
    pub state: Option<String>,

    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_deserialize_full() {
        let json = r#"{
            "hostid": "10084",
            "name": "web-01",
            "status": "0",
            "available": "1",
            "interfaces": [
                {"interfaceid": "1", "ip": "10.0.0.5", "type": "1"},
                {"interfaceid": "2", "ip": "10.0.0.6", "type": "2"}
            ],
            "items": [
                {"itemid": "23296", "key_": "system.cpu.load", "lastvalue": "0.15", "state": "0", "error": ""}
            ]
        }"#;

        let host: HostRecord = serde_json::from_str(json).unwrap();
        assert_eq!(host.host_id, "10084");
        assert_eq!(host.name, "web-01");
        assert_eq!(host.available, AvailabilityStatus::Available);
        assert_eq!(host.interfaces.len(), 2);
        assert_eq!(host.interfaces[0].kind, InterfaceType::Agent);
        assert_eq!(host.interfaces[1].kind, InterfaceType::Other);

        let items = host.items.unwrap();
        assert_eq!(items[0].key, "system.cpu.load");
        assert_eq!(items[0].last_value.as_deref(), Some("0.15"));
    }

    #[test]
    fn test_host_deserialize_minimal() {
        let json = r#"{"name": "bare-host"}"#;

        let host: HostRecord = serde_json::from_str(json).unwrap();
        assert_eq!(host.name, "bare-host");
        assert_eq!(host.available, AvailabilityStatus::Unknown);
        assert!(host.interfaces.is_empty());
        assert!(host.items.is_none());
    }

    #[test]
    fn test_item_deserialize_without_value() {
        let json = r#"{"key_": "system.uptime"}"#;

        let item: HostItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.key, "system.uptime");
        assert!(item.last_value.is_none());
        assert!(item.state.is_none());
        assert!(item.error.is_none());
    }

    #[test]
    fn test_availability_status_mapping() {
        assert_eq!(AvailabilityStatus::from("0".to_string()), AvailabilityStatus::Unknown);
        assert_eq!(AvailabilityStatus::from("1".to_string()), AvailabilityStatus::Available);
        assert_eq!(AvailabilityStatus::from("2".to_string()), AvailabilityStatus::Unavailable);
        assert_eq!(AvailabilityStatus::from("junk".to_string()), AvailabilityStatus::Unknown);
    }

    #[test]
    fn test_interface_type_mapping() {
        assert_eq!(InterfaceType::from("1".to_string()), InterfaceType::Agent);
        assert_eq!(InterfaceType::from("2".to_string()), InterfaceType::Other);
        assert_eq!(InterfaceType::from("".to_string()), InterfaceType::Other);
    }

    #[test]
    fn test_availability_status_display() {
        assert_eq!(AvailabilityStatus::Available.to_string(), "Available");
        assert_eq!(AvailabilityStatus::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn test_host_deserialize_empty_item_list() {
        let json = r#"{"name": "idle-host", "items": []}"#;

        let host: HostRecord = serde_json::from_str(json).unwrap();
        let items = host.items.unwrap();
        assert!(items.is_empty());
    }
}
