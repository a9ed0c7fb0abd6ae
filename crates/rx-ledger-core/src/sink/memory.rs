//! In-memory sink (for testing).

use std::sync::Mutex;

use super::{RecordSink, SinkResult};

/// Collects appended records in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every record appended so far, in order.
    pub fn records(&self) -> SinkResult<Vec<String>> {
        Ok(self.records.lock()?.clone())
    }

    /// All records concatenated, as they would appear in a file.
    pub fn contents(&self) -> SinkResult<String> {
        Ok(self.records.lock()?.concat())
    }

    pub fn len(&self) -> SinkResult<usize> {
        Ok(self.records.lock()?.len())
    }

    pub fn is_empty(&self) -> SinkResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl RecordSink for MemorySink {
    fn append(&self, record: &str) -> SinkResult<()> {
        self.records.lock()?.push(record.to_string());
        Ok(())
    }
}
