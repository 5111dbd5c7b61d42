use std::path::PathBuf;

use occupation_types::DatasetError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("occupation table is invalid: {0}")]
    Dataset(#[from] DatasetError),

    #[error("cannot serialize {what}: {source}")]
    Json {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
