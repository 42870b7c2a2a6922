use std::path::PathBuf;

use thiserror::Error;

use crate::types::RecordNumber;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Unable to open database [{}]: {source}", path.display())]
    Connection {
        path: PathBuf,
        #[source]
        source: rusqlite::Error
    },
    #[error("Unable to prepare the sales table: {0}")]
    Schema(#[source] rusqlite::Error),
    #[error("Failed to append record {record}: {source}")]
    Insert {
        record: RecordNumber,
        #[source]
        source: rusqlite::Error
    },
    #[error("Unable to close database connection: {0}")]
    Close(#[source] rusqlite::Error)
}
