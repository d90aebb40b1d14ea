use crate::maze::MazeError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExperimentError {
    #[error("unable to read experiment config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("unable to parse experiment config: {0}")]
    Config(#[from] toml::de::Error),
    #[error("invalid experiment config: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Maze(#[from] MazeError),
}
