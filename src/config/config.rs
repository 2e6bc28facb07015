use crate::Result;
use crate::extract::{MetricMapping, MetricSpec};
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

/// Default directory report files are written into.
const DEFAULT_OUTPUT_DIR: &str = "zabbix_reports";

/// Connection settings for the Zabbix server.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Connection {
    #[serde(default)]
    pub api_url: Option<String>,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Fallback connection settings, below command line and environment.
    #[serde(default)]
    pub connection: Connection,

    /// Metrics extracted per host, in report column order.
    #[serde(default = "default_metrics")]
    pub metrics: Vec<MetricMapping>,

    /// Directory the timestamped report file is written into.
    #[serde(default = "default_output_dir")]
    pub output_dir: Utf8PathBuf,
}

fn default_metrics() -> Vec<MetricMapping> {
    MetricSpec::system_defaults().mappings().to_vec()
}

fn default_output_dir() -> Utf8PathBuf {
    Utf8PathBuf::from(DEFAULT_OUTPUT_DIR)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            connection: Connection::default(),
            metrics: default_metrics(),
            output_dir: default_output_dir(),
        }
    }
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load(base_path: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<(Self, Vec<String>)> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading zbx-report configuration from {path}"))?;
            (path.clone(), text)
        } else {
            let candidates = [
                base_path.join("zbx-report.toml"),
                base_path.join("zbx-report.yml"),
                base_path.join("zbx-report.yaml"),
                base_path.join("zbx-report.json"),
            ];

            let mut found = None;
            for path in &candidates {
                match fs::read_to_string(path) {
                    Ok(text) => {
                        found = Some((path.clone(), text));
                        break;
                    }
                    Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                    Err(e) => return Err(e).into_app_err_with(|| format!("reading zbx-report configuration from {path}")),
                }
            }

            let Some(result) = found else {
                return Ok((Self::default(), Vec::new()));
            };
            result
        };

        let extension = final_path.extension().unwrap_or_default();
        let config: Self = match extension {
            "toml" => toml::from_str(&text).into_app_err_with(|| format!("parsing TOML configuration from {final_path}"))?,
            "yml" | "yaml" => serde_yaml::from_str(&text).into_app_err_with(|| format!("parsing YAML configuration from {final_path}"))?,
            "json" => serde_json::from_str(&text).into_app_err_with(|| format!("parsing JSON configuration from {final_path}"))?,
            _ => return Err(app_err!("unsupported configuration file extension: {extension}")),
        };

        let mut warnings = Vec::new();
        config.validate(&mut warnings);
        Ok((config, warnings))
    }

    /// Flag configuration oddities that do not prevent a run.
    fn validate(&self, warnings: &mut Vec<String>) {
        if self.metrics.is_empty() {
            warnings.push("no metrics configured; the report will only carry hostnames and addresses".to_string());
        }

        for (index, mapping) in self.metrics.iter().enumerate() {
            if self.metrics[..index].iter().any(|earlier| earlier.key == mapping.key) {
                warnings.push(format!("duplicate metric key `{}`", mapping.key));
            }
            if self.metrics[..index].iter().any(|earlier| earlier.name == mapping.name) {
                warnings.push(format!(
                    "duplicate column name `{}`; the later metric overwrites the earlier one",
                    mapping.name
                ));
            }
        }
    }
}
