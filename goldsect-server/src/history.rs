use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use serde::Serialize;

use goldsect_solve::objective::Goal;

/// Maximum number of entries retained per session.
const CAPACITY: usize = 100;

/// Summary of one completed solve, as stored in the session history.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    pub expression: String,
    pub a: f64,
    pub b: f64,
    pub mode: Goal,
    pub x_min: f64,
    pub f_min: f64,
    pub iteration_count: usize,
    pub converged: bool,
}

/// Shared session history: a capped, mutex-guarded ring with the most
/// recent entry first. Lives for the process only.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Arc<Mutex<VecDeque<Entry>>>,
}

impl History {
    /// Prepends an entry, dropping the oldest once the cap is reached.
    pub fn record(&self, entry: Entry) {
        let mut entries = self.entries.lock().unwrap();
        entries.push_front(entry);
        entries.truncate(CAPACITY);
    }

    /// Returns a copy of all entries, most recent first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Entry> {
        self.entries.lock().unwrap().iter().cloned().collect()
    }

    /// Removes every entry.
    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}
