use std::time::{Duration, Instant};

use crate::error::BenchError;
use crate::stats::{Phase, PhaseTiming, RunReport};
use crate::store::StoreClient;
use crate::workload::{Ledger, WorkloadSource};

/// Drives the three sequential phases against a single store connection.
///
/// One operation is in flight at a time; that is what makes the reported
/// averages meaningful as a per-operation baseline. Only the store calls
/// themselves are timed, so ledger bookkeeping and value comparison stay out
/// of the measurement.
pub struct BenchRunner<C, S> {
    client: C,
    source: S,
    repeat_count: usize,
}

impl<C: StoreClient, S: WorkloadSource> BenchRunner<C, S> {
    pub fn new(client: C, source: S, repeat_count: usize) -> Self {
        Self {
            client,
            source,
            repeat_count,
        }
    }

    /// Runs set, get-and-verify, and delete in order.
    ///
    /// Any store error or verification failure aborts the run immediately;
    /// later phases are not reached, which can leave keys behind in the
    /// store.
    pub async fn run(mut self) -> Result<RunReport, BenchError> {
        let (ledger, set) = self.set_phase().await?;
        tracing::info!(ops = set.operation_count, "set phase finished");

        let get = self.get_phase(&ledger).await?;
        tracing::info!(ops = get.operation_count, "get phase finished");

        let delete = self.delete_phase(&ledger).await?;
        tracing::info!(ops = delete.operation_count, "delete phase finished");

        Ok(RunReport { set, get, delete })
    }

    async fn set_phase(&mut self) -> Result<(Ledger, PhaseTiming), BenchError> {
        let mut ledger = Ledger::new();
        let mut total = Duration::ZERO;

        for _ in 0..self.repeat_count {
            let entry = self.source.next_entry();

            let start = Instant::now();
            let stored = self.client.set(&entry.key, &entry.value).await?;
            total += start.elapsed();

            if !stored {
                return Err(BenchError::SetRejected { key: entry.key });
            }
            ledger.record(entry);
        }

        let timing = PhaseTiming::new(Phase::Set, total, self.repeat_count);
        Ok((ledger, timing))
    }

    async fn get_phase(&mut self, ledger: &Ledger) -> Result<PhaseTiming, BenchError> {
        let mut total = Duration::ZERO;

        for entry in ledger.iter() {
            let start = Instant::now();
            let found = self.client.get(&entry.key).await?;
            total += start.elapsed();

            match found {
                None => {
                    return Err(BenchError::MissingKey {
                        key: entry.key.clone(),
                    });
                }
                Some(actual) if actual != entry.value => {
                    return Err(BenchError::ValueMismatch {
                        key: entry.key.clone(),
                        expected: entry.value.clone(),
                        actual,
                    });
                }
                Some(_) => {}
            }
        }

        Ok(PhaseTiming::new(Phase::Get, total, ledger.len()))
    }

    async fn delete_phase(&mut self, ledger: &Ledger) -> Result<PhaseTiming, BenchError> {
        let mut total = Duration::ZERO;

        for entry in ledger.iter() {
            let start = Instant::now();
            let removed = self.client.delete(&entry.key).await?;
            total += start.elapsed();

            if removed != 1 {
                return Err(BenchError::DeleteMiscount {
                    key: entry.key.clone(),
                    removed,
                });
            }
        }

        Ok(PhaseTiming::new(Phase::Delete, total, ledger.len()))
    }
}
