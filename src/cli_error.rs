use {
    thiserror::Error,
    crate::{
        json_parsing::ConfigError,
        logging::LoggingError,
        spread_model::SpreadError
    }
};

/// Everything that can end a command line run early
#[derive(Debug, Error)]
pub enum CliError{
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Logging(#[from] LoggingError),
    #[error(transparent)]
    Spread(#[from] SpreadError),
    #[error("unable to write the report: {0}")]
    Report(#[source] serde_json::Error),
}
