//! # kmeans-select
//!
//! K-means clustering with statistical model selection of the cluster count,
//! compatible with ndarray.
//!
//! ## Features
//!
//! - **Lloyd's algorithm**: deterministic first-k-points seeding, squared
//!   Euclidean assignment with lowest-index tie-break, reassignment-based
//!   convergence detection
//! - **Immutable results**: [`ClusteringResult`] snapshots a clustering as a
//!   per-cluster distance table with eagerly cached counts
//! - **Likelihood models**: residual sum of squares, unit-variance and
//!   shared-variance Gaussian log-likelihoods
//! - **Information criteria**: AIC, corrected AIC and BIC for ranking
//!   candidate cluster counts
//! - **Parallel sweeps**: [`KSweep`] evaluates candidate counts concurrently
//!   with rayon and ranks them by ascending score
//!
//! ## Example
//!
//! ```rust
//! use kmeans_select::{criteria, likelihood, KMeans};
//! use ndarray::array;
//!
//! let data = array![[0.0, 0.0], [0.2, 0.1], [10.0, 10.0], [10.1, 9.9]];
//!
//! let result = KMeans::new(2).cluster(&data.view()).unwrap();
//! assert_eq!(result.num_clusters(), 2);
//!
//! let log_l = likelihood::unit_variance(&result);
//! let bic: f64 = criteria::bayesian_information_criterion(log_l, 4, result.total_points());
//! assert!(bic.is_finite());
//! ```
//!
//! ## Selecting the cluster count
//!
//! ```rust
//! use kmeans_select::{KSweep, Likelihood, SelectionCriterion};
//! use ndarray::array;
//!
//! let data = array![
//!     [0.0, 0.0], [10.0, 0.0], [0.0, 10.0],
//!     [0.1, 0.0], [9.9, 0.1], [0.1, 9.9],
//!     [0.0, 0.1], [10.1, 0.0], [0.0, 10.1],
//! ];
//!
//! let sweep = KSweep::new()
//!     .with_likelihood(Likelihood::UnitVariance)
//!     .with_criterion(SelectionCriterion::Aic);
//!
//! let ks: Vec<usize> = (1..=4).collect();
//! let ranked = sweep.run(&data.view(), &ks);
//! assert_eq!(ranked[0].k, 3);
//! ```

mod algorithm;
mod config;
pub mod criteria;
mod distance;
mod error;
mod kmeans;
pub mod likelihood;
mod result;
mod selection;

pub use config::KMeansConfig;
pub use criteria::SelectionCriterion;
pub use error::ClusteringError;
pub use kmeans::KMeans;
pub use likelihood::Likelihood;
pub use result::ClusteringResult;
pub use selection::{CandidateScore, KSweep};
