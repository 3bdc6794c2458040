//! Model-selection example: sweep candidate cluster counts and rank them
//! with AIC, AICc and BIC.
//!
//! Run with: cargo run --example select_k --release

use kmeans_select::{KSweep, Likelihood, SelectionCriterion};
use ndarray::Array2;
use ndarray_rand::rand_distr::Normal;
use ndarray_rand::RandomExt;

fn main() {
    println!("=== kmeans-select model-selection example ===\n");

    // Three unit-variance Gaussian blobs, 1000 points each, interleaved
    let centers = [[0.0f64, 0.0], [10.0, 0.0], [0.0, 10.0]];
    let points_per_blob = 1000;
    let n_samples = 3 * points_per_blob;

    let noise = Array2::random((n_samples, 2), Normal::new(0.0f64, 1.0).unwrap());
    let mut data = Array2::<f64>::zeros((n_samples, 2));
    for i in 0..n_samples {
        let center = centers[i % 3];
        data[[i, 0]] = center[0] + noise[[i, 0]];
        data[[i, 1]] = center[1] + noise[[i, 1]];
    }

    println!(
        "{} samples from 3 blobs at (0,0), (10,0), (0,10); expected result: 3 clusters\n",
        n_samples
    );

    let ks: Vec<usize> = (1..=10).collect();

    for criterion in [
        SelectionCriterion::Aic,
        SelectionCriterion::Aicc,
        SelectionCriterion::Bic,
    ] {
        let sweep = KSweep::new()
            .with_likelihood(Likelihood::UnitVariance)
            .with_criterion(criterion);

        let ranked = sweep.run(&data.view(), &ks);

        println!("{:?} (normalized wrt the worst candidate):", criterion);
        let worst = ranked
            .last()
            .map(|c| c.score.abs())
            .filter(|s| s.is_finite() && *s > 0.0)
            .unwrap_or(1.0);
        for candidate in &ranked {
            println!(
                "  k={:2}: score={:10.4}  log-likelihood={:10.4}  ({:.4})",
                candidate.k,
                candidate.score,
                candidate.log_likelihood,
                candidate.score / worst
            );
        }

        let order: Vec<usize> = ranked.iter().map(|c| c.k).collect();
        println!("k ranked by {:?}: {:?}\n", criterion, order);
    }

    println!("=== Done! ===");
}
