mod experiment_config;
mod experiment_error;
mod experiment_runner;

pub use experiment_config::ExperimentConfig;
pub use experiment_error::ExperimentError;
pub use experiment_runner::{run_experiment, ExperimentSummary, RunRecord, StrategySummary};
