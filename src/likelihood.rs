//! Likelihood models for clusterings.
//!
//! Free functions mapping a [`ClusteringResult`] to a scalar score under a
//! chosen statistical assumption. All of them are pure and signal nothing:
//! numerically ill-posed inputs (an empty cluster, as many clusters as
//! points) propagate as non-finite values, and callers guard against
//! degenerate clusterings upstream.
//!
//! The three models deliberately use different sign conventions and must not
//! be unified: [`residual_sum_of_squares`] is a positive dispersion measure,
//! while its likelihood-proxy form (see [`Likelihood`]) and the two Gaussian
//! models are on a log-likelihood scale where larger is better.

use crate::result::ClusteringResult;
use num_traits::Float;

/// Residual sum of squares: the sum of squared point-to-centroid distances
/// over all points.
///
/// A raw dispersion measure, not a log-likelihood; lower is better.
pub fn residual_sum_of_squares<F: Float>(clustering: &ClusteringResult<F>) -> F {
    clustering
        .distances_per_cluster()
        .iter()
        .flatten()
        .fold(F::zero(), |acc, &d| acc + d * d)
}

/// Log-likelihood under the assumption that every cluster is a unit-variance
/// Gaussian: `-RSS / (2 N)`.
pub fn unit_variance<F: Float>(clustering: &ClusteringResult<F>) -> F {
    let n = cast::<F>(clustering.total_points());
    -residual_sum_of_squares(clustering) / (cast::<F>(2) * n)
}

/// Gaussian-mixture log-likelihood under the assumption that all clusters
/// share one variance, estimated from the data of dimensionality `dim`.
///
/// The shared variance is `RSS / (dim (N - K))`. Ill-defined for `N == K`
/// (variance division by zero) or an empty cluster (`0 ln 0`); both cases
/// yield a non-finite value rather than an error.
pub fn same_variance<F: Float>(clustering: &ClusteringResult<F>, dim: usize) -> F {
    let n = cast::<F>(clustering.total_points());
    let k = cast::<F>(clustering.num_clusters());
    let d = cast::<F>(dim);
    let half = cast::<F>(0.5);
    let two_pi = cast::<F>(2.0 * std::f64::consts::PI);

    let var = residual_sum_of_squares(clustering) / (d * (n - k));

    let mut log_likelihood = F::zero();
    for &n_k in clustering.points_per_cluster() {
        let n_k = cast::<F>(n_k);
        log_likelihood = log_likelihood + n_k * n_k.ln();
    }

    log_likelihood = log_likelihood - n * n.ln();
    log_likelihood = log_likelihood - half * n * d * (two_pi * var * var).ln();
    log_likelihood = log_likelihood - half * d * (n - k);

    log_likelihood
}

/// Selectable likelihood model for feeding an information criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Likelihood {
    /// Negated residual sum of squares, an unnormalized log-likelihood proxy.
    ResidualSumOfSquares,
    /// [`unit_variance`].
    UnitVariance,
    /// [`same_variance`]; the only model that uses `dim`.
    SameVariance,
}

impl Likelihood {
    /// Evaluate the model on a clustering of dimensionality `dim`.
    ///
    /// All variants return a value on a log-likelihood scale (larger is
    /// better), which is what the information criteria expect; in particular
    /// the RSS variant is the *negative* of [`residual_sum_of_squares`].
    pub fn log_likelihood<F: Float>(&self, clustering: &ClusteringResult<F>, dim: usize) -> F {
        match self {
            Likelihood::ResidualSumOfSquares => -residual_sum_of_squares(clustering),
            Likelihood::UnitVariance => unit_variance(clustering),
            Likelihood::SameVariance => same_variance(clustering, dim),
        }
    }
}

// usize/f64 to F; infallible for the float types used here
#[inline]
fn cast<F: Float>(value: impl num_traits::ToPrimitive) -> F {
    F::from(value).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_residual_sum_of_squares() {
        let clustering = ClusteringResult::new(vec![vec![1.0, 2.0, 3.0]]);
        assert_relative_eq!(residual_sum_of_squares(&clustering), 14.0);

        let ragged = ClusteringResult::new(vec![
            vec![0.0, 1.0, 2.0],
            vec![3.0, 4.0],
            vec![5.0],
            vec![6.0, 7.0, 8.0, 9.0, 10.0],
        ]);
        assert_relative_eq!(residual_sum_of_squares(&ragged), 385.0);
    }

    #[test]
    fn test_unit_variance() {
        let clustering = ClusteringResult::new(vec![vec![1.0, 2.0, 3.0]]);
        assert_relative_eq!(unit_variance(&clustering), -14.0 / 6.0);

        let ragged = ClusteringResult::new(vec![
            vec![0.0, 1.0, 2.0],
            vec![3.0, 4.0],
            vec![5.0],
            vec![6.0, 7.0, 8.0, 9.0, 10.0],
        ]);
        assert_relative_eq!(unit_variance(&ragged), -385.0 / 22.0);
    }

    #[test]
    fn test_same_variance() {
        let clustering = ClusteringResult::new(vec![vec![1.0, 2.0, 3.0]]);
        assert_relative_eq!(
            same_variance(&clustering, 1),
            -9.59454604678,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_same_variance_degenerate_inputs() {
        // N == K: variance estimate divides by zero
        let saturated = ClusteringResult::new(vec![vec![1.0], vec![2.0]]);
        assert!(!same_variance(&saturated, 2).is_finite());

        // empty cluster: 0 * ln(0)
        let with_empty = ClusteringResult::new(vec![vec![1.0, 2.0, 3.0], vec![]]);
        assert!(!same_variance(&with_empty, 2).is_finite());
    }

    #[test]
    fn test_likelihood_enum_sign_conventions() {
        let clustering = ClusteringResult::new(vec![vec![1.0, 2.0, 3.0]]);

        assert_relative_eq!(
            Likelihood::ResidualSumOfSquares.log_likelihood(&clustering, 1),
            -14.0
        );
        assert_relative_eq!(
            Likelihood::UnitVariance.log_likelihood(&clustering, 1),
            -14.0 / 6.0
        );
        assert_relative_eq!(
            Likelihood::SameVariance.log_likelihood(&clustering, 1),
            same_variance(&clustering, 1)
        );
    }

    #[test]
    fn test_f32_scalars() {
        let clustering: ClusteringResult<f32> = ClusteringResult::new(vec![vec![1.0, 2.0, 3.0]]);
        assert_relative_eq!(residual_sum_of_squares(&clustering), 14.0f32);
        assert_relative_eq!(unit_variance(&clustering), -14.0f32 / 6.0);
    }
}
