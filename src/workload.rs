use std::collections::HashSet;

use rand::Rng;
use rand::rngs::ThreadRng;

/// One key/value pair driven through a benchmark run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadEntry {
    pub key: String,
    pub value: String,
}

/// Produces the entries a run writes during its set phase.
pub trait WorkloadSource {
    fn next_entry(&mut self) -> WorkloadEntry;
}

/// Stringified random floats in `[0, 1)` for both key and value.
#[derive(Debug)]
pub struct RandomSource {
    rng: ThreadRng,
}

impl RandomSource {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkloadSource for RandomSource {
    fn next_entry(&mut self) -> WorkloadEntry {
        WorkloadEntry {
            key: self.rng.gen_range(0.0f64..1.0).to_string(),
            value: self.rng.gen_range(0.0f64..1.0).to_string(),
        }
    }
}

/// Counter-derived entries for reproducible runs.
#[derive(Debug, Default)]
pub struct SequenceSource {
    next: u64,
}

impl SequenceSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WorkloadSource for SequenceSource {
    fn next_entry(&mut self) -> WorkloadEntry {
        let n = self.next;
        self.next += 1;
        WorkloadEntry {
            key: format!("key-{n:08}"),
            value: format!("value-{n:08}"),
        }
    }
}

/// Insertion-ordered record of what the set phase wrote.
///
/// Keys are tracked in a set so each key occupies one slot no matter how
/// often the source repeats it; the delete phase would otherwise count a
/// second removal against the same key. A colliding key keeps its slot but
/// takes the latest value, matching what the store now holds.
#[derive(Debug, Default)]
pub struct Ledger {
    entries: Vec<WorkloadEntry>,
    keys: HashSet<String>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an entry, returning whether its key was fresh.
    pub fn record(&mut self, entry: WorkloadEntry) -> bool {
        if self.keys.insert(entry.key.clone()) {
            self.entries.push(entry);
            return true;
        }
        if let Some(existing) = self.entries.iter_mut().find(|e| e.key == entry.key) {
            existing.value = entry.value;
        }
        false
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WorkloadEntry> {
        self.entries.iter()
    }
}
