#[cfg(test)]
mod recording;
mod tracing_sink;

use std::fmt::{self, Display, Formatter};
use std::time::Duration;

use crate::pipeline::PipelineSummary;

#[cfg(test)]
pub use recording::RecordingSink;
pub use tracing_sink::TracingSink;

/// The three ordered stages of a pipeline run.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Stage {
    Extract,
    Transform,
    Load
}

impl Display for Stage {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Extract => "extract",
            Stage::Transform => "transform",
            Stage::Load => "load"
        };

        formatter.write_str(name)
    }
}

/// Progress and failure events emitted at stage boundaries.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineEvent {
    StageStarted(Stage),
    Extracted {
        records: usize
    },
    ColumnsIgnored {
        columns: Vec<String>
    },
    Transformed {
        records: usize,
        duplicates_removed: usize,
        nulls_filled: usize
    },
    Loaded {
        records: usize
    },
    StageFailed {
        stage: Stage,
        error: String
    },
    Completed {
        summary: PipelineSummary,
        elapsed: Duration
    },
    PipelineFailed {
        error: String
    }
}

/// Logging collaborator handed to every stage.
///
/// Stages never touch process-wide logging configuration; they describe what
/// happened and the sink decides where it goes.
pub trait EventSink {
    fn emit(&self, event: PipelineEvent);
}

impl<T: EventSink + ?Sized> EventSink for &T {
    fn emit(&self, event: PipelineEvent) {
        (**self).emit(event)
    }
}
