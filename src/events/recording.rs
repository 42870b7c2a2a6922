use std::cell::RefCell;

use crate::events::{EventSink, PipelineEvent, Stage};

/// Keeps every emitted event so tests can assert on stage boundaries.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: RefCell<Vec<PipelineEvent>>
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<PipelineEvent> {
        self.events.borrow().clone()
    }

    pub fn failed_stages(&self) -> Vec<Stage> {
        self.events.borrow().iter()
            .filter_map(|event| match event {
                PipelineEvent::StageFailed { stage, .. } => Some(*stage),
                _ => None
            })
            .collect()
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: PipelineEvent) {
        self.events.borrow_mut().push(event);
    }
}
