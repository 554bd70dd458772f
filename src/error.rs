use crate::grid::Coord;

/// Errors produced by the engine.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A grid was requested with a zero height or width.
    #[error("invalid grid dimensions {height}x{width}, both must be positive")]
    InvalidDimensions { height: usize, width: usize },
    /// A coordinate lies outside the grid.
    #[error("coordinate ({row}, {col}) is outside the {height}x{width} grid")]
    OutOfBounds {
        row: isize,
        col: isize,
        height: usize,
        width: usize,
    },
    #[error("unknown pattern `{0}`")]
    UnknownPattern(String),
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn out_of_bounds(coord: Coord, height: usize, width: usize) -> Error {
        Error::OutOfBounds {
            row: coord.0,
            col: coord.1,
            height,
            width,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
