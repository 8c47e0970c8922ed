use anyhow::{Context, Result};
use tracing_subscriber::{
    EnvFilter, fmt, fmt::time::ChronoUtc, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Overrides the verbosity flag, e.g. `TENANTCTL_LOG=tenantctl=trace,reqwest=debug`
pub const LOG_ENV: &str = "TENANTCTL_LOG";

/// `json` switches the console output to JSON lines
pub const LOG_FORMAT_ENV: &str = "TENANTCTL_LOG_FORMAT";

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Map the `-v` count to a level
#[must_use]
pub const fn level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Build the filter, `TENANTCTL_LOG` wins over the verbosity flag
#[must_use]
pub fn filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,{}={}",
            env!("CARGO_CRATE_NAME"),
            level(verbosity)
        ))
    })
}

/// Install the console subscriber for the lifetime of the process
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init(verbosity: u8) -> Result<()> {
    let json = std::env::var(LOG_FORMAT_ENV).is_ok_and(|format| format.eq_ignore_ascii_case("json"));
    let registry = tracing_subscriber::registry().with(filter(verbosity));

    let result = if json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(false)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(std::io::stdout),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_timer(ChronoUtc::new(TIME_FORMAT.to_string()))
                    .with_writer(std::io::stdout),
            )
            .try_init()
    };

    result.context("Failed to initialize logging")
}
