//! List state for leave tables (own leaves and approval queues).
//!
//! DESIGN
//! ======
//! Each table page owns one `RwSignal<LeavesState>`. Fetch results and
//! decisions are folded in through the methods below so the page code only
//! spawns requests and renders.

#[cfg(test)]
#[path = "leaves_test.rs"]
mod leaves_test;

use crate::net::types::LeaveRecord;

/// Rows, load flag, and the last error or notice for a leave table.
#[derive(Clone, Debug, Default)]
pub struct LeavesState {
    pub items: Vec<LeaveRecord>,
    pub loading: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
    /// Row currently waiting on an approve/reject/cancel response.
    pub busy_id: Option<i64>,
}

impl LeavesState {
    /// Mark a fetch as started, keeping current rows visible.
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_load(&mut self, result: Result<Vec<LeaveRecord>, String>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
    }

    /// Mark a row as awaiting a decision. Returns `false` if another row is busy.
    pub fn begin_action(&mut self, id: i64) -> bool {
        if self.busy_id.is_some() {
            return false;
        }
        self.busy_id = Some(id);
        self.notice = None;
        self.error = None;
        true
    }

    /// Settle the busy row. Returns `true` when the rows are stale and should
    /// be reloaded; a failed action keeps its error on screen instead.
    pub fn finish_action(&mut self, result: Result<String, String>) -> bool {
        self.busy_id = None;
        match result {
            Ok(message) => {
                self.notice = Some(message).filter(|m| !m.is_empty());
                true
            }
            Err(message) => {
                self.error = Some(message);
                false
            }
        }
    }

    pub fn pending_count(&self) -> usize {
        self.items.iter().filter(|leave| leave.is_pending()).count()
    }
}
