// File: crates/plot-core/src/error.rs
// Summary: Error taxonomy for scene-graph construction and export.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("x and y data lengths differ ({x_len} vs {y_len})")]
    DataLength { x_len: usize, y_len: usize },

    #[error("subplot grid dimensions must be positive, got {nrows}x{ncols}")]
    GridShape { nrows: usize, ncols: usize },

    #[error("subplot index {index} out of range for a {cells}-cell grid")]
    SubplotIndex { index: usize, cells: usize },

    #[error("unrecognized character {0:?} in format string")]
    FormatString(char),

    #[error("no backend registered under {0:?}")]
    UnknownBackend(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
