use barroute::SearchConfig;
use std::fs::File;
use std::io::{BufReader, Read};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid search settings: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parses search settings written as JSON, e.g. `{"cycles": "follow", "max_depth": 64}`.
/// Missing fields keep their default.
pub fn parse_search_config<R: Read>(reader: R) -> Result<SearchConfig, SettingsError> {
    Ok(serde_json::from_reader(reader)?)
}

pub fn read_search_config(filename: &str) -> Result<SearchConfig, SettingsError> {
    let file = File::open(filename).map_err(|source| SettingsError::Io {
        path: filename.to_string(),
        source,
    })?;
    let config = parse_search_config(BufReader::new(file))?;
    debug!(config = ?config, "search settings from {}", filename);
    Ok(config)
}
