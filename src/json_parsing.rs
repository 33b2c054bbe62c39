//! Options of every subcommand are read from a json file.
//! Without a file an example configuration is printed instead.

use{
    std::{
        fs::File,
        io::{BufReader, Write},
        path::{Path, PathBuf}
    },
    serde::{Serialize, de::DeserializeOwned},
    serde_json::Value,
    thiserror::Error,
};

#[derive(Debug, Error)]
pub enum ConfigError{
    #[error("unable to open `{path}`: {source}")]
    Io{
        path: PathBuf,
        #[source]
        source: std::io::Error
    },
    #[error("invalid json in `{path}`: {source}")]
    Json{
        path: PathBuf,
        #[source]
        source: serde_json::Error
    },
    #[error("unable to write the example configuration: {0}")]
    Example(#[source] serde_json::Error),
}

/// Reads the options of type `T` and also returns the raw json,
/// which is echoed into the output
pub fn parse_file<P, T>(file: P) -> Result<(T, Value), ConfigError>
where P: AsRef<Path>,
    T: DeserializeOwned
{
    let path = file.as_ref();
    let f = File::open(path)
        .map_err(|source| ConfigError::Io{path: path.to_owned(), source})?;
    let buf = BufReader::new(f);
    let json: Value = serde_json::from_reader(buf)
        .map_err(|source| ConfigError::Json{path: path.to_owned(), source})?;
    let opt = serde_json::from_value(json.clone())
        .map_err(|source| ConfigError::Json{path: path.to_owned(), source})?;
    Ok((opt, json))
}

pub fn write_example<T, W>(writer: W) -> Result<(), ConfigError>
where T: Default + Serialize,
    W: Write
{
    let example = T::default();
    serde_json::to_writer_pretty(writer, &example)
        .map_err(ConfigError::Example)
}
