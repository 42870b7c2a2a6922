use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use csv::{ReaderBuilder, Trim};

use crate::events::{EventSink, PipelineEvent, Stage};
use crate::extract::ExtractionError;
use crate::models::ExtractedTable;

/// Reads a delimited file with a header row into memory.
pub struct Extractor {
    path: PathBuf
}

impl Extractor {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads every record of the file, failing on the first one the parser rejects.
    ///
    /// Columns are taken from the header row as-is; nothing beyond record
    /// shape is validated here.
    pub fn extract<S: EventSink>(&self, sink: &S) -> Result<ExtractedTable, ExtractionError> {
        sink.emit(PipelineEvent::StageStarted(Stage::Extract));

        match self.read_table() {
            Ok(table) => {
                sink.emit(PipelineEvent::Extracted { records: table.len() });
                Ok(table)
            }
            Err(error) => {
                sink.emit(PipelineEvent::StageFailed { stage: Stage::Extract, error: error.to_string() });
                Err(error)
            }
        }
    }

    fn read_table(&self) -> Result<ExtractedTable, ExtractionError> {
        let file = File::open(&self.path).map_err(|source| ExtractionError::Open {
            path: self.path.clone(),
            source
        })?;

        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .from_reader(BufReader::new(file));

        let headers = reader.headers()
            .map_err(|source| self.malformed(source))?
            .clone();

        if headers.is_empty() {
            return Err(ExtractionError::MissingHeader { path: self.path.clone() });
        }

        let records = reader.records()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| self.malformed(source))?;

        Ok(ExtractedTable::new(headers, records))
    }

    fn malformed(&self, source: csv::Error) -> ExtractionError {
        ExtractionError::Malformed { path: self.path.clone(), source }
    }
}
