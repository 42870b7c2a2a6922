use tracing::{error, info, warn};

use crate::events::{EventSink, PipelineEvent};

/// Forwards pipeline events to whatever `tracing` subscriber the binary installed.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: PipelineEvent) {
        match event {
            PipelineEvent::StageStarted(stage) => {
                info!(%stage, "Starting {stage} stage...");
            }
            PipelineEvent::Extracted { records } => {
                info!(records, "Successfully extracted {records} records");
            }
            PipelineEvent::ColumnsIgnored { columns } => {
                warn!(?columns, "Ignoring columns not part of a sales record: {}", columns.join(", "));
            }
            PipelineEvent::Transformed { records, duplicates_removed, nulls_filled } => {
                info!(records, duplicates_removed, nulls_filled, "Data transformation completed");
            }
            PipelineEvent::Loaded { records } => {
                info!(records, "Successfully loaded {records} records to database");
            }
            PipelineEvent::StageFailed { stage, error } => {
                error!(%stage, "Error during {stage}: {error}");
            }
            PipelineEvent::Completed { summary, elapsed } => {
                info!(
                    extracted = summary.extracted,
                    duplicates_removed = summary.duplicates_removed,
                    nulls_filled = summary.nulls_filled,
                    loaded = summary.loaded,
                    ?elapsed,
                    "ETL pipeline completed successfully in {elapsed:?}"
                );
            }
            PipelineEvent::PipelineFailed { error } => {
                error!("Pipeline failed: {error}");
            }
        }
    }
}
