use crate::algorithm::lloyd;
use crate::config::KMeansConfig;
use crate::error::ClusteringError;
use crate::result::ClusteringResult;
use ndarray::{ArrayView2, NdFloat};

/// Lloyd k-means clustering engine.
///
/// Seeding is deterministic (the first k input points), so the same input
/// always produces the same clustering. The engine holds no state across
/// calls; each `cluster` invocation owns its working buffers and discards
/// them on return.
///
/// # Example
///
/// ```
/// use kmeans_select::KMeans;
/// use ndarray::array;
///
/// let data = array![[0.0, 0.0], [0.2, 0.1], [10.0, 10.0], [10.1, 9.9]];
///
/// let result = KMeans::new(2).cluster(&data.view()).unwrap();
/// assert_eq!(result.num_clusters(), 2);
/// assert_eq!(result.total_points(), 4);
/// ```
pub struct KMeans {
    config: KMeansConfig,
}

impl KMeans {
    /// Create an engine for `k` clusters with the default configuration.
    ///
    /// # Panics
    ///
    /// Panics if `k` is 0.
    pub fn new(k: usize) -> Self {
        Self {
            config: KMeansConfig::new(k),
        }
    }

    /// Create an engine with a custom configuration.
    pub fn with_config(config: KMeansConfig) -> Self {
        Self { config }
    }

    /// Partition `data` (shape `(n_points, n_dims)`) into k clusters.
    ///
    /// # Errors
    ///
    /// Returns [`ClusteringError::InvalidArgument`] if more clusters are
    /// requested than data points are available.
    pub fn cluster<F: NdFloat>(
        &self,
        data: &ArrayView2<F>,
    ) -> Result<ClusteringResult<F>, ClusteringError> {
        let run = lloyd(data, &self.config)?;
        Ok(ClusteringResult::new(run.distances_per_cluster))
    }

    /// Number of clusters this engine produces.
    pub fn k(&self) -> usize {
        self.config.k
    }

    /// The engine configuration.
    pub fn config(&self) -> &KMeansConfig {
        &self.config
    }
}
