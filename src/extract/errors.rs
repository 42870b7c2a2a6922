use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unable to open input file [{}]: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error
    },
    #[error("Input file [{}] has no header row", path.display())]
    MissingHeader {
        path: PathBuf
    },
    #[error("Input file [{}] is not parseable as delimited data: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: csv::Error
    }
}
