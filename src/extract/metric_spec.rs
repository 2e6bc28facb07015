use serde::{Deserialize, Serialize};

/// One item-key-to-column mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricMapping {
    /// Zabbix item key, e.g. `vm.memory.size[total]`.
    pub key: String,

    /// Column name the extracted value is reported under.
    pub name: String,
}

/// The declarative list of which items to extract and how to label them.
///
/// Order determines report column order. Keys are expected to be unique;
/// column names are expected to be unique but this is not enforced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricSpec {
    mappings: Vec<MetricMapping>,
}

impl MetricSpec {
    #[must_use]
    pub fn new(mappings: Vec<MetricMapping>) -> Self {
        Self { mappings }
    }

    /// The stock system metrics reported when no settings file overrides them.
    #[must_use]
    pub fn system_defaults() -> Self {
        let pairs = [
            ("system.hostname", "OS Hostname"),
            ("system.uname", "OS Description"),
            ("system.cpu.load", "CPU Usage"),
            ("vm.memory.size[total]", "Total Memory"),
            ("vm.memory.size[free]", "Free Memory"),
            ("vfs.fs.size[C:,free]", "Disk C: Free"),
            ("system.uptime", "System Uptime"),
        ];

        Self::new(
            pairs
                .into_iter()
                .map(|(key, name)| MetricMapping {
                    key: key.to_string(),
                    name: name.to_string(),
                })
                .collect(),
        )
    }

    #[must_use]
    pub fn mappings(&self) -> &[MetricMapping] {
        &self.mappings
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}
