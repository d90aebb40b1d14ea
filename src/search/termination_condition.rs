use crate::search::AbortReason;
use std::time::{Duration, Instant};
use tracing::info;

/// Resource caps for a single search. Exceeding a cap aborts the search
/// rather than failing it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SearchLimits {
    pub max_expansions: Option<usize>,
    pub time_limit: Option<Duration>,
}

impl SearchLimits {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = Some(time_limit);
        self
    }

    /// Set the time limit from a number of seconds, which must be positive
    /// and small enough to fit in a [`Duration`].
    pub fn with_time_limit_secs(self, secs: f64) -> Result<Self, String> {
        match Duration::try_from_secs_f64(secs) {
            Ok(time_limit) if !time_limit.is_zero() => Ok(self.with_time_limit(time_limit)),
            _ => Err(format!(
                "time limit must be a positive number of seconds, got {}",
                secs
            )),
        }
    }
}

#[derive(Debug)]
pub struct TerminationCondition {
    limits: SearchLimits,
    start_time: Instant,
}

impl TerminationCondition {
    pub fn new(limits: SearchLimits) -> Self {
        info!(
            max_expansions = limits.max_expansions,
            time_limit = limits.time_limit.map(|d| d.as_secs_f64()),
        );
        Self {
            limits,
            start_time: Instant::now(),
        }
    }

    pub fn should_terminate(&self, expanded_nodes: usize) -> Option<AbortReason> {
        if let Some(max_expansions) = self.limits.max_expansions {
            if expanded_nodes >= max_expansions {
                return Some(AbortReason::ExpansionLimit);
            }
        }
        if let Some(time_limit) = self.limits.time_limit {
            if self.start_time.elapsed() > time_limit {
                return Some(AbortReason::TimeLimit);
            }
        }
        None
    }

    pub fn finalise(&self) {
        info!(total_time_used = self.start_time.elapsed().as_secs_f64());
    }
}
