use crate::config::KMeansConfig;
use crate::distance::{nearest_centroid, squared_distance};
use crate::error::ClusteringError;
use ndarray::{s, Array2, ArrayView2, NdFloat};

/// Outcome of one run of Lloyd's algorithm.
///
/// Only the distance table becomes part of the public result; the final
/// centroids and the iteration count are kept for inspection by the facade
/// and the tests.
#[allow(dead_code)]
#[derive(Debug)]
pub(crate) struct LloydRun<F> {
    pub distances_per_cluster: Vec<Vec<F>>,
    pub centroids: Array2<F>,
    pub n_iterations: usize,
}

/// Lloyd's algorithm for k-means clustering.
///
/// Centroids are seeded deterministically from the first `k` rows of `data`,
/// so identical input always yields an identical clustering. Final clustering
/// quality is therefore sensitive to input ordering.
///
/// Iteration alternates nearest-centroid assignment (squared Euclidean
/// distance, lowest index wins ties) with a coordinate-wise-mean centroid
/// update, and stops after the first pass in which no point changed cluster,
/// or once the iteration budget is spent. Budget exhaustion is not an error;
/// the best-effort state at that point is returned.
///
/// A cluster that loses all its points during a pass keeps its previous
/// centroid rather than producing an undefined mean; the tie-break rule may
/// repopulate it in a later pass.
pub(crate) fn lloyd<F: NdFloat>(
    data: &ArrayView2<F>,
    config: &KMeansConfig,
) -> Result<LloydRun<F>, ClusteringError> {
    let n_points = data.nrows();
    let n_dims = data.ncols();
    let k = config.k;

    if k == 0 || k > n_points {
        return Err(ClusteringError::InvalidArgument {
            requested: k,
            available: n_points,
        });
    }

    // seed with the first k data points, in input order
    let mut centroids = data.slice(s![..k, ..]).to_owned();
    let mut assignment = vec![0usize; n_points];
    let mut n_iterations = 0;

    for iteration in 0..config.max_iters {
        n_iterations = iteration + 1;

        // assignment pass
        let mut n_reassigned = 0usize;
        for (j, point) in data.outer_iter().enumerate() {
            let (index, _) = nearest_centroid(&point, &centroids.view());

            if index != assignment[j] {
                n_reassigned += 1;
            }
            assignment[j] = index;
        }

        // centroid update; counts kept as F for the mean division
        let mut sums: Array2<F> = Array2::zeros((k, n_dims));
        let mut counts = vec![F::zero(); k];

        for (j, point) in data.outer_iter().enumerate() {
            let cluster = assignment[j];
            counts[cluster] = counts[cluster] + F::one();
            for d in 0..n_dims {
                sums[[cluster, d]] = sums[[cluster, d]] + point[d];
            }
        }

        for cluster in 0..k {
            // an emptied cluster keeps its previous centroid
            if counts[cluster] > F::zero() {
                for d in 0..n_dims {
                    centroids[[cluster, d]] = sums[[cluster, d]] / counts[cluster];
                }
            }
        }

        if config.verbose {
            eprintln!(
                "k={}: iteration {}/{}, {} points reassigned",
                k,
                iteration + 1,
                config.max_iters,
                n_reassigned
            );
        }

        if n_reassigned == 0 {
            if config.verbose {
                eprintln!("k={}: converged after {} iterations", k, iteration + 1);
            }
            break;
        }
    }

    // group each point's distance to its final centroid by cluster index
    let mut distances_per_cluster: Vec<Vec<F>> = vec![Vec::new(); k];
    for (j, point) in data.outer_iter().enumerate() {
        let cluster = assignment[j];
        let dist = squared_distance(&point, &centroids.row(cluster)).sqrt();
        distances_per_cluster[cluster].push(dist);
    }

    Ok(LloydRun {
        distances_per_cluster,
        centroids,
        n_iterations,
    })
}
