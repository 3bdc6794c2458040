use crate::config::KMeansConfig;
use crate::criteria::SelectionCriterion;
use crate::kmeans::KMeans;
use crate::likelihood::Likelihood;
use ndarray::{ArrayView2, NdFloat};
use rayon::prelude::*;
use std::cmp::Ordering;

/// Score of one candidate cluster count in a sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateScore<F> {
    /// The candidate cluster count.
    pub k: usize,
    /// Maximized log-likelihood of the clustering under the chosen model.
    pub log_likelihood: F,
    /// Information-criterion score; lower is better.
    pub score: F,
}

/// Sweep over candidate cluster counts with information-criterion ranking.
///
/// Each candidate k is clustered independently and scored with the chosen
/// likelihood model and criterion. Candidates are embarrassingly parallel
/// (each worker only reads the shared data view), so they are evaluated with
/// rayon.
///
/// # Example
///
/// ```
/// use kmeans_select::{KSweep, Likelihood, SelectionCriterion};
/// use ndarray::array;
///
/// // three tight, well-separated groups, interleaved
/// let data = array![
///     [0.0, 0.0], [10.0, 0.0], [0.0, 10.0],
///     [0.1, 0.0], [9.9, 0.1], [0.1, 9.9],
///     [0.0, 0.1], [10.1, 0.0], [0.0, 10.1],
/// ];
///
/// let sweep = KSweep::new()
///     .with_likelihood(Likelihood::UnitVariance)
///     .with_criterion(SelectionCriterion::Bic);
///
/// let ks: Vec<usize> = (1..=4).collect();
/// assert_eq!(sweep.best_k(&data.view(), &ks), Some(3));
/// ```
#[derive(Debug, Clone)]
pub struct KSweep {
    max_iters: usize,
    likelihood: Likelihood,
    criterion: SelectionCriterion,
    verbose: bool,
}

impl Default for KSweep {
    fn default() -> Self {
        Self {
            max_iters: 100,
            likelihood: Likelihood::UnitVariance,
            criterion: SelectionCriterion::Bic,
            verbose: false,
        }
    }
}

impl KSweep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-candidate iteration budget
    pub fn with_max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = max_iters;
        self
    }

    /// Set the likelihood model
    pub fn with_likelihood(mut self, likelihood: Likelihood) -> Self {
        self.likelihood = likelihood;
        self
    }

    /// Set the information criterion
    pub fn with_criterion(mut self, criterion: SelectionCriterion) -> Self {
        self.criterion = criterion;
        self
    }

    /// Set verbose mode for the underlying engine runs
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Cluster `data` once per candidate in `ks` and return the candidates
    /// ranked by ascending score.
    ///
    /// The effective parameter count of a candidate is `n_dims * k` (one
    /// parameter per centroid coordinate) and the sample count is the number
    /// of data points. Candidates requesting more clusters than there are
    /// points are skipped rather than failing the sweep.
    pub fn run<F: NdFloat>(&self, data: &ArrayView2<F>, ks: &[usize]) -> Vec<CandidateScore<F>> {
        let n_dims = data.ncols();

        let candidates: Vec<CandidateScore<F>> = ks
            .par_iter()
            .filter_map(|&k| {
                let config = KMeansConfig {
                    k,
                    max_iters: self.max_iters,
                    verbose: self.verbose,
                };

                let clustering = KMeans::with_config(config).cluster(data).ok()?;

                let log_likelihood = self.likelihood.log_likelihood(&clustering, n_dims);
                let num_parameters = n_dims * k;
                let num_samples = clustering.total_points();

                Some(CandidateScore {
                    k,
                    log_likelihood,
                    score: self
                        .criterion
                        .score(log_likelihood, num_parameters, num_samples),
                })
            })
            .collect();

        rank_candidates(candidates)
    }

    /// The recommended cluster count: the candidate minimizing the score.
    ///
    /// `None` if no candidate in `ks` was valid for `data`.
    pub fn best_k<F: NdFloat>(&self, data: &ArrayView2<F>, ks: &[usize]) -> Option<usize> {
        self.run(data, ks).first().map(|candidate| candidate.k)
    }
}

/// Stable ascending sort on score. Equal scores keep their input order (so
/// the smaller k wins when candidates are given in ascending order), and
/// non-finite scores rank after every finite one.
fn rank_candidates<F: NdFloat>(mut candidates: Vec<CandidateScore<F>>) -> Vec<CandidateScore<F>> {
    candidates.sort_by(|a, b| match (a.score.is_finite(), b.score.is_finite()) {
        (true, true) => a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => Ordering::Equal,
    });

    candidates
}
