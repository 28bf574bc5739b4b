use std::fmt;
use std::time::Duration;

/// One of the three sequential stages of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Set,
    Get,
    Delete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Set => write!(f, "SET"),
            Phase::Get => write!(f, "GET"),
            Phase::Delete => write!(f, "DELETE"),
        }
    }
}

/// Accumulated wall-clock cost of one phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseTiming {
    pub phase: Phase,
    pub total_elapsed: Duration,
    pub operation_count: usize,
}

impl PhaseTiming {
    pub fn new(phase: Phase, total_elapsed: Duration, operation_count: usize) -> Self {
        Self {
            phase,
            total_elapsed,
            operation_count,
        }
    }

    /// Average cost of one operation, zero for an empty phase.
    pub fn average(&self) -> Duration {
        if self.operation_count == 0 {
            Duration::ZERO
        } else {
            self.total_elapsed / self.operation_count as u32
        }
    }

    pub fn average_secs(&self) -> f64 {
        if self.operation_count == 0 {
            0.0
        } else {
            self.total_elapsed.as_secs_f64() / self.operation_count as f64
        }
    }
}

/// Timings of a completed three-phase run.
#[derive(Debug, Clone, Copy)]
pub struct RunReport {
    pub set: PhaseTiming,
    pub get: PhaseTiming,
    pub delete: PhaseTiming,
}

impl RunReport {
    pub fn phases(&self) -> [PhaseTiming; 3] {
        [self.set, self.get, self.delete]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_divides_total_by_operation_count() {
        let timing = PhaseTiming::new(Phase::Set, Duration::from_millis(300), 3);

        assert_eq!(timing.average(), Duration::from_millis(100));
        assert!((timing.average_secs() - 0.1).abs() < 1e-9);
    }

    #[test]
    fn empty_phase_averages_to_zero() {
        let timing = PhaseTiming::new(Phase::Get, Duration::ZERO, 0);

        assert_eq!(timing.average(), Duration::ZERO);
        assert_eq!(timing.average_secs(), 0.0);
    }

    #[test]
    fn phases_are_reported_in_run_order() {
        let report = RunReport {
            set: PhaseTiming::new(Phase::Set, Duration::ZERO, 1),
            get: PhaseTiming::new(Phase::Get, Duration::ZERO, 1),
            delete: PhaseTiming::new(Phase::Delete, Duration::ZERO, 1),
        };

        let order: Vec<Phase> = report.phases().iter().map(|t| t.phase).collect();
        assert_eq!(order, [Phase::Set, Phase::Get, Phase::Delete]);
    }
}
