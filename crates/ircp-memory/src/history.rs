use std::collections::VecDeque;

use ircp_schema::HistoryRecord;

/// Number of export summaries kept for a session.
pub const DEFAULT_HISTORY_LIMIT: usize = 8;

/// Newest-first ring of export summaries. Nothing here outlives the process.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    records: VecDeque<HistoryRecord>,
    limit: usize,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl HistoryLog {
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            records: VecDeque::with_capacity(limit),
            limit,
        }
    }

    /// Push to the front; returns the evicted oldest record, if any.
    pub fn push(&mut self, record: HistoryRecord) -> Option<HistoryRecord> {
        self.records.push_front(record);
        if self.records.len() > self.limit {
            self.records.pop_back()
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryRecord> {
        self.records.iter()
    }

    pub fn latest(&self) -> Option<&HistoryRecord> {
        self.records.front()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn to_vec(&self) -> Vec<HistoryRecord> {
        self.records.iter().cloned().collect()
    }
}
