//! Error types for scene and configuration loading.

use thiserror::Error;

/// Which topology list an invalid index came from.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Topology {
    Edge,
    Wall,
}

impl std::fmt::Display for Topology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Topology::Edge => f.write_str("edge"),
            Topology::Wall => f.write_str("wall"),
        }
    }
}

/// Fatal scene-load errors. None of these are recoverable inside the frame loop.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("malformed scene JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("scene root must be an object mapping figure names to figures")]
    NotAnObject,

    #[error("figure '{figure}': malformed definition: {source}")]
    Figure {
        figure: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("figure '{figure}': {kind} #{position} references {len} points, expected {expected}")]
    Arity {
        figure: String,
        kind: Topology,
        position: usize,
        len: usize,
        expected: usize,
    },

    #[error("figure '{figure}': {kind} #{position} references point {index}, figure has {count} points")]
    IndexOutOfRange {
        figure: String,
        kind: Topology,
        position: usize,
        index: usize,
        count: usize,
    },
}

/// Configuration parse errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("malformed configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SceneResult<T> = std::result::Result<T, SceneError>;
