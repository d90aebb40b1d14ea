use crate::agent::{Agent, AgentReport};
use crate::experiment::{ExperimentConfig, ExperimentError};
use crate::maze::{MazeError, MazeGrid};
use crate::search::{SearchProblem, StrategyName};
use itertools::iproduct;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// One strategy run on one generated maze.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    pub size: usize,
    pub density: f64,
    pub seed: u64,
    pub strategy: StrategyName,
    pub report: AgentReport,
}

/// Aggregate statistics of one strategy over all mazes of an experiment.
/// Means of cost are taken over successful runs only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategySummary {
    pub strategy: StrategyName,
    pub runs: usize,
    pub successes: usize,
    pub aborted: usize,
    pub mean_cost: Option<f64>,
    pub mean_nodes_expanded: f64,
    pub mean_max_frontier: f64,
    pub mean_duration_secs: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentSummary {
    pub runs: Vec<RunRecord>,
    /// (size, density, seed) combinations for which no solvable maze was
    /// found
    pub unsolvable_mazes: Vec<(usize, f64, u64)>,
    pub strategies: Vec<StrategySummary>,
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0., 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

impl StrategySummary {
    fn from_runs(strategy: StrategyName, runs: &[&RunRecord]) -> Self {
        let reports = || runs.iter().map(|run| &run.report);
        Self {
            strategy,
            runs: runs.len(),
            successes: reports().filter(|r| r.success).count(),
            aborted: reports().filter(|r| r.aborted.is_some()).count(),
            mean_cost: mean(reports().filter(|r| r.success).map(|r| r.cost)),
            mean_nodes_expanded: mean(reports().map(|r| r.nodes_expanded as f64))
                .unwrap_or_default(),
            mean_max_frontier: mean(reports().map(|r| r.max_frontier as f64)).unwrap_or_default(),
            mean_duration_secs: mean(reports().map(|r| r.duration_secs)).unwrap_or_default(),
        }
    }
}

/// Run every configured strategy on every configured maze. Mazes that cannot
/// be made solvable are recorded and skipped; failed and aborted searches are
/// recorded like any other run.
pub fn run_experiment(config: &ExperimentConfig) -> Result<ExperimentSummary, ExperimentError> {
    let agent = Agent::new().with_limits(config.limits()?);
    let strategies: Vec<_> = config
        .strategies
        .iter()
        .map(|&name| (name, name.create(config.heuristic)))
        .collect();

    let mut runs = vec![];
    let mut unsolvable_mazes = vec![];
    for (&size, &density, seed) in iproduct!(&config.sizes, &config.densities, config.seeds()) {
        let maze = match MazeGrid::generate_with_attempts(size, density, seed, config.max_attempts)
        {
            Ok(maze) => maze,
            Err(e @ MazeError::Unsolvable { .. }) => {
                warn!(size, density, seed, "skipping maze: {}", e);
                unsolvable_mazes.push((size, density, seed));
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        let problem = SearchProblem::new(&maze);
        for (name, strategy) in &strategies {
            let report = agent.run(strategy.as_ref(), &problem);
            runs.push(RunRecord {
                size,
                density,
                seed,
                strategy: *name,
                report,
            });
        }
    }

    let summaries = config
        .strategies
        .iter()
        .map(|&name| {
            let strategy_runs: Vec<&RunRecord> =
                runs.iter().filter(|run| run.strategy == name).collect();
            StrategySummary::from_runs(name, &strategy_runs)
        })
        .collect();
    info!(
        runs = runs.len(),
        unsolvable_mazes = unsolvable_mazes.len(),
        "experiment finished"
    );

    Ok(ExperimentSummary {
        runs,
        unsolvable_mazes,
        strategies: summaries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn config(text: &str) -> ExperimentConfig {
        ExperimentConfig::from_text(text).unwrap()
    }

    #[test]
    fn runs_every_strategy_on_every_maze() {
        let config = config(
            r#"
            sizes = [8, 12]
            densities = [0.2]
            seeds = 3
            "#,
        );
        let summary = run_experiment(&config).unwrap();
        assert_eq!(summary.runs.len(), 2 * 3 * 4);
        assert!(summary.unsolvable_mazes.is_empty());
        assert_eq!(summary.strategies.len(), 4);
        for strategy in &summary.strategies {
            assert_eq!(strategy.runs, 6);
            assert_eq!(strategy.successes, 6);
            assert_eq!(strategy.aborted, 0);
        }

        let ucs = &summary.strategies[0];
        let astar = &summary.strategies[2];
        assert_eq!(ucs.strategy, StrategyName::UniformCost);
        assert_eq!(astar.strategy, StrategyName::Astar);
        assert_approx_eq!(ucs.mean_cost.unwrap(), astar.mean_cost.unwrap());
    }

    #[test]
    fn unsolvable_mazes_are_skipped() {
        let config = config(
            r#"
            sizes = [2]
            densities = [0.5]
            seeds = 2
            max-attempts = 3
            strategies = ["astar"]
            "#,
        );
        let summary = run_experiment(&config).unwrap();
        assert!(summary.runs.is_empty());
        assert_eq!(summary.unsolvable_mazes, vec![(2, 0.5, 0), (2, 0.5, 1)]);
        assert_eq!(summary.strategies[0].runs, 0);
        assert_eq!(summary.strategies[0].mean_cost, None);
    }

    #[test]
    fn aborted_runs_are_counted() {
        let config = config(
            r#"
            sizes = [15]
            densities = [0.1]
            seeds = 2
            strategies = ["uniform-cost"]
            max-expansions = 5
            "#,
        );
        let summary = run_experiment(&config).unwrap();
        let ucs = &summary.strategies[0];
        assert_eq!(ucs.runs, 2);
        assert_eq!(ucs.aborted, 2);
        assert_eq!(ucs.successes, 0);
        assert_approx_eq!(ucs.mean_nodes_expanded, 5.0);
    }

    #[test]
    fn invalid_maze_parameters_are_errors() {
        let config = config(
            r#"
            sizes = [1]
            densities = [0.1]
            seeds = 1
            "#,
        );
        assert!(matches!(
            run_experiment(&config),
            Err(ExperimentError::Maze(MazeError::InvalidParameters(_)))
        ));
    }
}
