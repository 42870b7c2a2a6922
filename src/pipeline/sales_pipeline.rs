use std::time::Instant;

use crate::events::{EventSink, PipelineEvent};
use crate::extract::Extractor;
use crate::load::Loader;
use crate::pipeline::{PipelineConfig, PipelineError};
use crate::transform::Transformer;

/// Counts reported once a run completes.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PipelineSummary {
    pub extracted: usize,
    pub duplicates_removed: usize,
    pub nulls_filled: usize,
    pub loaded: usize
}

/// Runs extract, transform and load in sequence against one input file and
/// one database.
pub struct SalesPipeline<S: EventSink> {
    extractor: Extractor,
    transformer: Transformer,
    loader: Loader,
    sink: S
}

impl<S: EventSink> SalesPipeline<S> {
    pub fn new(config: PipelineConfig, sink: S) -> Self {
        Self {
            extractor: Extractor::new(config.input_path),
            transformer: Transformer::new(),
            loader: Loader::new(config.database_path),
            sink
        }
    }

    /// Executes one batch. There is no retry and no rollback: the first stage
    /// error is returned as-is, and rows a failed load already appended remain.
    pub fn run(&self) -> Result<PipelineSummary, PipelineError> {
        let timer = Instant::now();

        match self.execute() {
            Ok(summary) => {
                self.sink.emit(PipelineEvent::Completed { summary, elapsed: timer.elapsed() });
                Ok(summary)
            }
            Err(error) => {
                self.sink.emit(PipelineEvent::PipelineFailed { error: error.to_string() });
                Err(error)
            }
        }
    }

    fn execute(&self) -> Result<PipelineSummary, PipelineError> {
        let table = self.extractor.extract(&self.sink)?;
        let extracted = table.len();

        let outcome = self.transformer.transform(table, &self.sink)?;
        let loaded = self.loader.load(&outcome.records, &self.sink)?;

        Ok(PipelineSummary {
            extracted,
            duplicates_removed: outcome.duplicates_removed,
            nulls_filled: outcome.nulls_filled,
            loaded
        })
    }
}
