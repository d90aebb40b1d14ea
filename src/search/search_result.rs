use crate::search::State;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Why a search stopped before reaching a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AbortReason {
    /// The node expansion cap was reached
    ExpansionLimit,
    /// The wall-clock cap was exceeded
    TimeLimit,
}

impl Display for AbortReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AbortReason::ExpansionLimit => write!(f, "expansion limit reached"),
            AbortReason::TimeLimit => write!(f, "time limit exceeded"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// The goal was reached; the state carries the path and its cost
    Success(State),
    /// The frontier ran dry without reaching the goal
    Failed,
    /// A resource cap stopped the search
    Aborted(AbortReason),
}
