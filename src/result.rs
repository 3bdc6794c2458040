/// Immutable summary of a completed clustering.
///
/// Stores, for every cluster, the distance of each of its points to the
/// cluster's centroid, together with the counts derived from that table.
/// All derived quantities are computed once at construction; the value is
/// never mutated afterwards and can be shared freely across threads.
///
/// # Example
///
/// ```
/// use kmeans_select::ClusteringResult;
///
/// let result = ClusteringResult::new(vec![vec![1.0, 2.0, 3.0], vec![0.5]]);
/// assert_eq!(result.num_clusters(), 2);
/// assert_eq!(result.points_per_cluster(), &[3, 1]);
/// assert_eq!(result.total_points(), 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClusteringResult<F> {
    num_clusters: usize,
    points_per_cluster: Vec<usize>,
    total_points: usize,
    distances_per_cluster: Vec<Vec<F>>,
}

impl<F> ClusteringResult<F> {
    /// Build a result from a per-cluster distance table.
    ///
    /// `distances_per_cluster[i][j]` is the distance of the j'th point in
    /// the i'th cluster to that cluster's centroid. Ragged cluster sizes and
    /// empty clusters are permitted; no validation is performed.
    pub fn new(distances_per_cluster: Vec<Vec<F>>) -> Self {
        let points_per_cluster: Vec<usize> =
            distances_per_cluster.iter().map(|c| c.len()).collect();
        let total_points = points_per_cluster.iter().sum();

        Self {
            num_clusters: distances_per_cluster.len(),
            points_per_cluster,
            total_points,
            distances_per_cluster,
        }
    }

    /// Number of clusters in the clustering.
    pub fn num_clusters(&self) -> usize {
        self.num_clusters
    }

    /// Number of points assigned to each cluster, in cluster order.
    pub fn points_per_cluster(&self) -> &[usize] {
        &self.points_per_cluster
    }

    /// Total number of points across all clusters.
    pub fn total_points(&self) -> usize {
        self.total_points
    }

    /// Per-cluster point-to-centroid distances.
    ///
    /// Component `[i][j]` is the distance of the j'th point in the i'th
    /// cluster to that cluster's centroid.
    pub fn distances_per_cluster(&self) -> &[Vec<F>] {
        &self.distances_per_cluster
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_derived_from_table() {
        let result = ClusteringResult::new(vec![
            vec![0.0, 1.0, 2.0],
            vec![3.0, 4.0],
            vec![5.0],
            vec![6.0, 7.0, 8.0, 9.0, 10.0],
        ]);

        assert_eq!(result.num_clusters(), 4);
        assert_eq!(result.points_per_cluster(), &[3, 2, 1, 5]);
        assert_eq!(result.total_points(), 11);
        assert_eq!(
            result.total_points(),
            result.points_per_cluster().iter().sum::<usize>()
        );
        assert_eq!(result.distances_per_cluster().len(), result.num_clusters());
    }

    #[test]
    fn test_empty_cluster_is_legal() {
        let result = ClusteringResult::new(vec![vec![1.0, 2.0], vec![], vec![3.0]]);

        assert_eq!(result.num_clusters(), 3);
        assert_eq!(result.points_per_cluster(), &[2, 0, 1]);
        assert_eq!(result.total_points(), 3);
    }

    #[test]
    fn test_empty_table() {
        let result: ClusteringResult<f64> = ClusteringResult::new(vec![]);

        assert_eq!(result.num_clusters(), 0);
        assert_eq!(result.total_points(), 0);
        assert!(result.points_per_cluster().is_empty());
    }

    #[test]
    fn test_table_preserved_verbatim() {
        let table = vec![vec![1.5f32, 2.5], vec![0.25]];
        let result = ClusteringResult::new(table.clone());

        assert_eq!(result.distances_per_cluster(), table.as_slice());
    }
}
