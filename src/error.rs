use thiserror::Error;

/// Error types for the clustering engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClusteringError {
    /// The requested cluster count is outside the valid range `1..=n_points`.
    #[error("requested {requested} clusters but only {available} data points are available")]
    InvalidArgument { requested: usize, available: usize },
}
