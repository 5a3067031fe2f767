use quacker_core::BoundsError;

/// Errors raised while setting up or advancing a navigator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    /// The collaborator reported an out-of-range query, or an endpoint
    /// lies outside the grid.
    #[error(transparent)]
    Bounds(#[from] BoundsError),
    /// The grid has no cells to navigate.
    #[error("cannot navigate a {width}x{height} grid")]
    InvalidGrid { width: i32, height: i32 },
}
