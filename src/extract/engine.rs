use crate::api::{HostRecord, InterfaceType};
use crate::extract::metric_spec::MetricSpec;
use crate::extract::row::{ExtractedRow, HOSTNAME_COLUMN, IP_ADDRESS_COLUMN, NOT_AVAILABLE};

const BYTES_PER_GIB: f64 = 1024.0 * 1024.0 * 1024.0;
const SECONDS_PER_DAY: f64 = 86_400.0;

/// How a metric value is rendered once its raw string is in hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueFormat {
    /// Two decimal places with a trailing `%`. The raw value is not scaled:
    /// a CPU load of 0.15 renders as `0.15%`.
    Percentage,

    /// Bytes rendered as GiB, two decimal places, ` GB` suffix.
    Gibibytes,

    /// Seconds rendered as days, two decimal places, ` days` suffix.
    Days,

    /// The raw string, untouched.
    Raw,
}

type KeyPredicate = fn(&str) -> bool;

fn mentions_cpu(key: &str) -> bool {
    key.contains("cpu")
}

fn mentions_memory_or_size(key: &str) -> bool {
    key.contains("memory") || key.contains("size")
}

fn mentions_uptime(key: &str) -> bool {
    key.contains("uptime")
}

/// Format selection rules, checked in order against the lowercased item key.
/// The first matching predicate wins, so a key matching several substrings
/// formats deterministically.
const FORMAT_RULES: &[(KeyPredicate, ValueFormat)] = &[
    (mentions_cpu, ValueFormat::Percentage),
    (mentions_memory_or_size, ValueFormat::Gibibytes),
    (mentions_uptime, ValueFormat::Days),
];

impl ValueFormat {
    fn for_key(key: &str) -> Self {
        let key = key.to_lowercase();
        for (matches, format) in FORMAT_RULES {
            if matches(&key) {
                return *format;
            }
        }

        Self::Raw
    }

    /// Render a raw item value, or `None` when numeric parsing fails.
    fn apply(self, raw: &str) -> Option<String> {
        match self {
            Self::Percentage => raw.parse::<f64>().ok().map(|load| format!("{load:.2}%")),
            Self::Gibibytes => raw.parse::<f64>().ok().map(|bytes| format!("{:.2} GB", bytes / BYTES_PER_GIB)),
            Self::Days => raw.parse::<f64>().ok().map(|seconds| format!("{:.2} days", seconds / SECONDS_PER_DAY)),
            Self::Raw => Some(raw.to_string()),
        }
    }
}

/// Produce the report row for one host.
///
/// Total over its inputs: data quality problems degrade individual fields to
/// `N/A`, and a host without an agent interface simply has no `IP Address`
/// column. That omission is deliberate and distinct from a metric that was
/// checked and found absent.
#[must_use]
pub fn extract(host: &HostRecord, spec: &MetricSpec) -> ExtractedRow {
    let mut row = ExtractedRow::new();
    row.set(HOSTNAME_COLUMN, host.name.as_str());

    if let Some(interface) = host.interfaces.iter().find(|i| i.kind == InterfaceType::Agent) {
        row.set(IP_ADDRESS_COLUMN, interface.ip.as_str());
    }

    for mapping in spec.mappings() {
        let value = last_observed(host, &mapping.key).and_then(|raw| ValueFormat::for_key(&mapping.key).apply(raw));
        row.set(mapping.name.as_str(), value.unwrap_or_else(|| NOT_AVAILABLE.to_string()));
    }

    row
}

/// Find the first item carrying `key` and return its usable last value.
///
/// `None` covers every degraded case: no item list, no matching item, no
/// recorded value, or the server's own `N/A` placeholder.
fn last_observed<'a>(host: &'a HostRecord, key: &str) -> Option<&'a str> {
    let items = host.items.as_deref()?;
    let item = items.iter().find(|item| item.key == key)?;
    let raw = item.last_value.as_deref()?;
    if raw == NOT_AVAILABLE {
        return None;
    }

    Some(raw)
}
