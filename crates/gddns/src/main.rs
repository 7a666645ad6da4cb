// # gddns - one-shot Gandi LiveDNS updater
//
// Resolves the current public IPv4 address, compares it to the value
// published for one LiveDNS record, and pushes an update when they differ.
// Intended to run from a timer (cron, systemd); it keeps no state between
// invocations and never retries.
//
// This binary is a thin integration layer only: it parses arguments, sets up
// logging, wires the resolver and record client into the reconciler, and
// translates the final outcome into an exit code. All decision logic lives
// in gddns-core.
//
// ## Usage
//
// ```bash
// gddns <API_KEY> <ZONE_UUID> <RECORD_NAME> <RECORD_TYPE>
// gddns $GANDI_KEY 11f6a2c0-... home A --ttl 600 --timeout-secs 10
// ```
//
// ## Exit codes
//
// - 0: record already current, or update succeeded
// - 1: public IP could not be resolved, or the update was not accepted
// - 2: configuration error (bad arguments)

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use gddns_core::config::{DEFAULT_API_URL, DEFAULT_IP_URL, DEFAULT_TIMEOUT_SECS};
use gddns_core::traits::DEFAULT_TTL;
use gddns_core::{Outcome, Reconciler, RecordRef, UpdaterConfig};
use gddns_ip_http::HttpIpResolver;
use gddns_provider_gandi::GandiRecordClient;

/// Exit code for configuration and startup failures. The reconciliation
/// outcomes themselves map to 0 and 1 via [`Outcome::exit_code`].
const CONFIG_ERROR: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "gddns",
    version,
    about = "Update a Gandi LiveDNS record with the current public IP"
)]
struct Cli {
    /// Gandi API key
    api_key: String,

    /// DNS zone uuid
    zone_uuid: String,

    /// DNS record name
    record_name: String,

    /// DNS record type (e.g. A)
    record_type: String,

    /// TTL submitted with updates, in seconds
    #[arg(long, default_value_t = DEFAULT_TTL)]
    ttl: u32,

    /// Gandi LiveDNS API base URL
    #[arg(long, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// IP-echo service queried for the public address
    #[arg(long, default_value = DEFAULT_IP_URL)]
    ip_url: String,

    /// HTTP timeout applied to every outbound request, in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Cli {
    fn into_config(self) -> UpdaterConfig {
        UpdaterConfig {
            api_key: self.api_key,
            record: RecordRef::new(self.zone_uuid, self.record_name, self.record_type),
            api_url: self.api_url,
            ip_url: self.ip_url,
            ttl: self.ttl,
            timeout_secs: self.timeout_secs,
        }
    }
}

fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        other => anyhow::bail!(
            "'{}' is not a valid log level. Valid levels: trace, debug, info, warn, error",
            other
        ),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing before anything else can log
    let log_level = match parse_log_level(&cli.log_level) {
        Ok(level) => level,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::from(CONFIG_ERROR);
        }
    };
    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return ExitCode::from(CONFIG_ERROR);
    }

    let config = cli.into_config();
    if let Err(e) = config.validate() {
        error!("{}", e);
        return ExitCode::from(CONFIG_ERROR);
    }

    let rt = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("failed to create tokio runtime: {}", e);
            return ExitCode::from(CONFIG_ERROR);
        }
    };

    let outcome = rt.block_on(run(config));
    ExitCode::from(outcome.exit_code())
}

/// Wire the components together and run the reconciliation once
async fn run(config: UpdaterConfig) -> Outcome {
    info!("updating Gandi DNS record");

    let timeout = Duration::from_secs(config.timeout_secs);
    let resolver = HttpIpResolver::new(config.ip_url.clone(), timeout);
    let client = GandiRecordClient::from_config(&config);

    let reconciler = Reconciler::new(Box::new(resolver), Box::new(client), config.record);
    reconciler.run().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn positional_arguments_fill_the_record_ref() {
        let cli = Cli::parse_from(["gddns", "key", "zone-uuid", "home", "A"]);
        let config = cli.into_config();
        assert_eq!(config.api_key, "key");
        assert_eq!(config.record, RecordRef::new("zone-uuid", "home", "A"));
        assert_eq!(config.ttl, 300);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.ip_url, DEFAULT_IP_URL);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn options_override_the_defaults() {
        let cli = Cli::parse_from([
            "gddns",
            "key",
            "zone-uuid",
            "home",
            "A",
            "--ttl",
            "600",
            "--ip-url",
            "https://api.ipify.org",
            "--timeout-secs",
            "10",
        ]);
        let config = cli.into_config();
        assert_eq!(config.ttl, 600);
        assert_eq!(config.ip_url, "https://api.ipify.org");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn missing_positionals_are_rejected() {
        assert!(Cli::try_parse_from(["gddns", "key", "zone-uuid"]).is_err());
    }

    #[test]
    fn log_levels_parse_case_insensitively() {
        assert_eq!(parse_log_level("INFO").unwrap(), Level::INFO);
        assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
        assert!(parse_log_level("verbose").is_err());
    }
}
