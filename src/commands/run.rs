use crate::Result;
use crate::api::Client;
use crate::config::{Config, Connection};
use crate::extract::{ExtractedRow, MetricSpec, extract};
use crate::misc::ColorMode;
use crate::reports::{ReportTable, generate_console, generate_csv, generate_xlsx};
use camino::{Utf8Path, Utf8PathBuf};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, ValueEnum};
use ohno::{IntoAppError, bail};
use std::fs;

/// Log target for the snapshot run
const LOG_TARGET: &str = "run";

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,
    /// Only error messages
    Error,
    /// Warning and error messages
    Warn,
    /// Info, warning, and error messages
    Info,
    /// Debug and above messages
    Debug,
    /// All messages including trace
    Trace,
}

#[derive(Parser, Debug)]
#[command(name = "zbx-report", version, about, styles = CLAP_STYLES)]
pub struct Args {
    /// Zabbix server URL or full API endpoint
    #[arg(long, value_name = "URL", env = "ZABBIX_API")]
    pub api_url: Option<String>,

    /// Account used to sign in to the Zabbix API
    #[arg(long, value_name = "NAME", env = "ZABBIX_USER")]
    pub username: Option<String>,

    /// Password for the Zabbix account
    #[arg(long, value_name = "PASSWORD", env = "ZABBIX_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Path to configuration file [default: one of zbx-report.[toml|yml|yaml|json] ]
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Directory the timestamped report is written into [default: zabbix_reports]
    #[arg(long, value_name = "PATH")]
    pub output_dir: Option<Utf8PathBuf>,

    /// Write the Excel report to this exact path instead of the timestamped default
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub excel: Option<Utf8PathBuf>,

    /// Also write the report as CSV to this path
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub csv: Option<Utf8PathBuf>,

    /// Also print the report to the terminal
    #[arg(long, help_heading = "Report Output")]
    pub console: bool,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,
}

/// Run one snapshot: connect, fetch, extract, export.
pub async fn run(args: &Args) -> Result<()> {
    init_logging(args.log_level);

    let (config, warnings) = Config::load(Utf8Path::new("."), args.config.as_ref())?;
    if !warnings.is_empty() {
        eprintln!("\n⚠️  Configuration validation warnings:");
        for warning in &warnings {
            eprintln!("   {warning}");
        }
        eprintln!();
    }

    let (api_url, username, password) = resolve_connection(args, &config.connection)?;

    let mut client = Client::new(&api_url)?;

    let version = client.api_version().await?;
    println!();
    println!("Zabbix Version Information:");
    println!("{:-<50}", "");
    println!("API Version: {version}");
    println!("{:-<50}", "");
    println!();

    client.login(&username, &password).await?;
    log::debug!(target: LOG_TARGET, "logged in to {} as {username}", client.endpoint());

    let hosts = client.get_hosts().await?;
    log::info!(target: LOG_TARGET, "retrieved {} host(s)", hosts.len());

    let spec = MetricSpec::new(config.metrics.clone());
    let rows: Vec<ExtractedRow> = hosts
        .iter()
        .map(|host| {
            log::debug!(target: LOG_TARGET, "processing host {} (availability: {})", host.name, host.available);
            extract(host, &spec)
        })
        .collect();

    let table = ReportTable::from_rows(rows);

    if args.console {
        let mut output = String::new();
        generate_console(&table, args.color, &mut output)?;
        print!("{output}");
    }

    if let Some(path) = &args.csv {
        let mut output = String::new();
        generate_csv(&table, &mut output)?;
        fs::write(path, output).into_app_err_with(|| format!("writing CSV report to {path}"))?;
        println!("Data exported to {path}");
    }

    let excel_path = if let Some(path) = &args.excel {
        path.clone()
    } else {
        let output_dir = args.output_dir.as_ref().unwrap_or(&config.output_dir);
        let timestamp = chrono::Local::now().format("%Y-%m-%d_%H-%M-%S");
        output_dir.join(format!("zabbix_system_metrics_{timestamp}.xlsx"))
    };

    if let Some(parent) = excel_path.parent() {
        if !parent.as_str().is_empty() {
            fs::create_dir_all(parent).into_app_err_with(|| format!("creating report directory {parent}"))?;
        }
    }

    let mut file = fs::File::create(&excel_path).into_app_err_with(|| format!("creating report file {excel_path}"))?;
    generate_xlsx(&table, &mut file)?;
    println!("Data exported to {excel_path}");

    Ok(())
}

/// Resolve connection settings, with flags and environment taking precedence
/// over the settings file.
fn resolve_connection(args: &Args, fallback: &Connection) -> Result<(String, String, String)> {
    let api_url = args.api_url.clone().or_else(|| fallback.api_url.clone());
    let username = args.username.clone().or_else(|| fallback.username.clone());
    let password = args.password.clone().or_else(|| fallback.password.clone());

    if let (Some(api_url), Some(username), Some(password)) = (&api_url, &username, &password) {
        return Ok((api_url.clone(), username.clone(), password.clone()));
    }

    let mut missing = Vec::new();
    if api_url.is_none() {
        missing.push("ZABBIX_API (--api-url)");
    }
    if username.is_none() {
        missing.push("ZABBIX_USER (--username)");
    }
    if password.is_none() {
        missing.push("ZABBIX_PASSWORD (--password)");
    }

    bail!("missing connection settings: {}", missing.join(", "))
}

/// Initialize logger based on log level
fn init_logging(log_level: LogLevel) {
    if log_level == LogLevel::None {
        return;
    }

    let level = match log_level {
        LogLevel::None => return, // Already checked above, but being explicit
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .init();
}
