use clap::{Parser, Subcommand};
use maze_search::{
    experiment::{run_experiment, ExperimentConfig, ExperimentSummary},
    search::{validate_path, HeuristicName, SearchProblem},
    Agent, AgentReport, MazeGrid, SearchLimits, StrategyName, Verbosity,
};
use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};
use strum::IntoEnumIterator;
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Generate grid mazes and solve them with heuristic search.
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal,
        global = true
    )]
    verbosity: Verbosity,
    #[arg(
        help = "Whether to use coloured output",
        short = 'c',
        long = "colour",
        global = true
    )]
    colour: bool,
    #[arg(help = "Print results as JSON", long = "json", global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one maze and solve it with one or all strategies.
    Solve {
        #[arg(help = "Side length of the maze", short = 'n', long = "size")]
        size: usize,
        #[arg(
            help = "Fraction of cells that are obstacles",
            short = 'd',
            long = "density",
            default_value_t = 0.3
        )]
        density: f64,
        #[arg(help = "Seed for maze generation", short = 's', long = "seed", default_value_t = 0)]
        seed: u64,
        #[arg(
            value_enum,
            help = "The strategy to use, all strategies if omitted",
            short = 'e',
            long = "strategy",
            id = "STRATEGY"
        )]
        strategy: Option<StrategyName>,
        #[arg(
            value_enum,
            help = "The heuristic for strategies that use one",
            long = "heuristic",
            id = "HEURISTIC",
            default_value_t = HeuristicName::Manhattan
        )]
        heuristic: HeuristicName,
        #[arg(help = "Abort a search after this many expansions", long = "max-expansions")]
        max_expansions: Option<usize>,
        #[arg(help = "Abort a search after this many seconds", long = "time-limit")]
        time_limit: Option<f64>,
        #[arg(help = "Draw the maze and the path found", long = "show-maze")]
        show_maze: bool,
    },
    /// Run a batch experiment described by a TOML file and report
    /// per-strategy statistics.
    Experiment {
        #[arg(help = "The experiment config file", id = "CONFIG")]
        config: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let outcome = match cli.command {
        Commands::Solve {
            size,
            density,
            seed,
            strategy,
            heuristic,
            max_expansions,
            time_limit,
            show_maze,
        } => {
            let limits = SearchLimits {
                max_expansions,
                time_limit: None,
            };
            let limits = match time_limit {
                Some(secs) => limits.with_time_limit_secs(secs),
                None => Ok(limits),
            };
            limits.and_then(|limits| {
                solve(
                    size, density, seed, strategy, heuristic, limits, show_maze, cli.json,
                )
            })
        }
        Commands::Experiment { config } => experiment(&config, cli.json),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("{}", message);
            ExitCode::FAILURE
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn solve(
    size: usize,
    density: f64,
    seed: u64,
    strategy: Option<StrategyName>,
    heuristic: HeuristicName,
    limits: SearchLimits,
    show_maze: bool,
    json: bool,
) -> Result<(), String> {
    let maze = MazeGrid::generate(size, density, seed).map_err(|e| e.to_string())?;
    info!(size, density, seed, obstacles = maze.obstacle_count());

    let strategy_names: Vec<StrategyName> = match strategy {
        Some(name) => vec![name],
        None => StrategyName::iter().collect(),
    };

    let agent = Agent::new().with_limits(limits);
    let problem = SearchProblem::new(&maze);
    let mut reports = vec![];
    for name in strategy_names {
        let strategy = name.create(heuristic);
        let report = agent.run(strategy.as_ref(), &problem);
        if report.success {
            validate_path(&report.path, &maze)
                .map_err(|e| format!("{} returned an invalid path: {}", report.strategy, e))?;
        }
        reports.push(report);
    }

    if json {
        let text = serde_json::to_string_pretty(&reports).map_err(|e| e.to_string())?;
        println!("{}", text);
        return Ok(());
    }

    if show_maze {
        println!("{}\n", maze);
    }
    for report in &reports {
        print_report(report);
        if show_maze && report.success {
            println!("{}\n", maze.render_with_path(&report.path));
        }
    }
    Ok(())
}

fn print_report(report: &AgentReport) {
    let outcome = match (report.success, report.aborted) {
        (true, _) => "solved".to_string(),
        (false, Some(reason)) => format!("aborted ({})", reason),
        (false, None) => "no path".to_string(),
    };
    println!(
        "{:<14} {:<24} cost {:>6} expanded {:>7} max frontier {:>6} time {:.6}s",
        report.strategy,
        outcome,
        report.cost,
        report.nodes_expanded,
        report.max_frontier,
        report.duration_secs
    );
}

fn experiment(config_path: &Path, json: bool) -> Result<(), String> {
    let config = ExperimentConfig::from_path(config_path).map_err(|e| e.to_string())?;
    let summary = run_experiment(&config).map_err(|e| e.to_string())?;

    if json {
        let text = serde_json::to_string_pretty(&summary).map_err(|e| e.to_string())?;
        println!("{}", text);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

fn print_summary(summary: &ExperimentSummary) {
    println!(
        "{:<14} {:>5} {:>8} {:>8} {:>10} {:>12} {:>12} {:>12}",
        "strategy", "runs", "solved", "aborted", "mean cost", "mean expand", "mean front", "mean secs"
    );
    for strategy in &summary.strategies {
        let mean_cost = strategy
            .mean_cost
            .map(|cost| format!("{:.2}", cost))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<14} {:>5} {:>8} {:>8} {:>10} {:>12.1} {:>12.1} {:>12.6}",
            strategy.strategy.to_string(),
            strategy.runs,
            strategy.successes,
            strategy.aborted,
            mean_cost,
            strategy.mean_nodes_expanded,
            strategy.mean_max_frontier,
            strategy.mean_duration_secs
        );
    }
    if !summary.unsolvable_mazes.is_empty() {
        println!(
            "Skipped {} maze(s) with no solvable layout",
            summary.unsolvable_mazes.len()
        );
    }
}
