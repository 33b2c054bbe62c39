//! Installs the global `tracing` subscriber.
//!
//! Diagnostics go to stderr so the json report on stdout stays parseable.
//! The level is taken from `RUST_LOG` (default `info`), the format from
//! `SPREAD_LOG_FORMAT` (`human` or `json`).

use {
    std::{env, sync::OnceLock},
    thiserror::Error,
    tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt}
};

const LOG_FORMAT_ENV: &str = "SPREAD_LOG_FORMAT";

static INITIALISED: OnceLock<()> = OnceLock::new();

#[derive(Debug, Error)]
pub enum LoggingError{
    #[error("environment variable `{name}` contained invalid UTF-8: {source}")]
    InvalidUnicode{
        name: &'static str,
        #[source]
        source: env::VarError,
    },
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat{
        provided: String,
    },
    #[error("failed to install tracing subscriber: {source}")]
    InstallFailed{
        #[source]
        source: tracing_subscriber::util::TryInitError,
    },
}

/// Install logging once. Later calls are no-ops, and a subscriber that was
/// installed by someone else is kept.
pub fn init_logging() -> Result<(), LoggingError>
{
    if INITIALISED.get().is_some(){
        return Ok(());
    }

    match install_subscriber(){
        Ok(()) => {}
        Err(LoggingError::InstallFailed{source}) => {
            eprintln!("structured logging already configured elsewhere: {source}");
        }
        Err(err) => return Err(err),
    }
    let _ = INITIALISED.set(());
    Ok(())
}

fn install_subscriber() -> Result<(), LoggingError>
{
    let use_json = match env::var(LOG_FORMAT_ENV){
        Ok(raw) => parse_log_format(&raw)?,
        Err(env::VarError::NotPresent) => false,
        Err(err @ env::VarError::NotUnicode(_)) => {
            return Err(LoggingError::InvalidUnicode{
                name: LOG_FORMAT_ENV,
                source: err,
            })
        }
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let fmt_layer = if use_json{
        fmt_layer.json().boxed()
    } else{
        fmt_layer.boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|source| LoggingError::InstallFailed{source})
}

fn parse_log_format(raw: &str) -> Result<bool, LoggingError>
{
    match raw.trim().to_ascii_lowercase().as_str(){
        "human" => Ok(false),
        "json" => Ok(true),
        other => Err(LoggingError::UnsupportedFormat{
            provided: other.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests{
    use {
        super::*,
        rstest::rstest
    };

    #[rstest]
    #[case("human", false)]
    #[case("HUMAN", false)]
    #[case(" json ", true)]
    fn parse_log_format_accepts_supported_values(#[case] raw: &str, #[case] expected: bool){
        let format = parse_log_format(raw).expect("format must parse");
        assert_eq!(format, expected);
    }

    #[test]
    fn parse_log_format_rejects_unknown_values(){
        let err = parse_log_format("csv").expect_err("csv is not supported");
        match err{
            LoggingError::UnsupportedFormat{provided} => assert_eq!(provided, "csv"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn init_logging_is_idempotent(){
        init_logging().expect("logging must initialise");
        init_logging().expect("subsequent calls must be no-ops");
    }
}
