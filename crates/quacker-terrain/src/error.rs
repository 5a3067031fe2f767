use quacker_core::BoundsError;

/// Errors raised while building terrain or boards.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TerrainError {
    /// A current's power must lie in `[0, 1]`.
    #[error("current power {0} outside [0, 1]")]
    InvalidPower(f64),
    #[error(transparent)]
    Bounds(#[from] BoundsError),
    /// Row-major cells did not match the board dimensions.
    #[error("expected {expected} cells, found {found}")]
    Shape { expected: usize, found: usize },
}
