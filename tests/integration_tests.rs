use approx::assert_relative_eq;
use kmeans_select::{
    criteria, likelihood, KMeans, KMeansConfig, KSweep, Likelihood, SelectionCriterion,
};
use ndarray::Array2;
use ndarray_rand::rand_distr::Normal;
use rand::distributions::Distribution;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Three unit-variance Gaussian blobs centered at (0,0), (10,0) and (0,10),
/// with points interleaved across blobs so that the engine's first-k-points
/// seeding starts from every blob for k >= 3.
fn three_blobs(points_per_blob: usize, seed: u64) -> Array2<f64> {
    let centers = [[0.0, 0.0], [10.0, 0.0], [0.0, 10.0]];
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 1.0).unwrap();

    let mut data = Array2::zeros((3 * points_per_blob, 2));
    for i in 0..3 * points_per_blob {
        let center = centers[i % 3];
        data[[i, 0]] = center[0] + noise.sample(&mut rng);
        data[[i, 1]] = center[1] + noise.sample(&mut rng);
    }

    data
}

#[test]
fn test_bic_sweep_recovers_three_blobs() {
    let data = three_blobs(1000, 42);
    let ks: Vec<usize> = (1..=10).collect();

    let sweep = KSweep::new()
        .with_likelihood(Likelihood::UnitVariance)
        .with_criterion(SelectionCriterion::Bic);

    assert_eq!(sweep.best_k(&data.view(), &ks), Some(3));
}

#[test]
fn test_aicc_sweep_recovers_three_blobs() {
    let data = three_blobs(1000, 42);
    let ks: Vec<usize> = (1..=10).collect();

    let sweep = KSweep::new()
        .with_likelihood(Likelihood::UnitVariance)
        .with_criterion(SelectionCriterion::Aicc);

    assert_eq!(sweep.best_k(&data.view(), &ks), Some(3));
}

#[test]
fn test_same_variance_sweep_recovers_three_blobs() {
    let data = three_blobs(1000, 7);
    let ks: Vec<usize> = (1..=10).collect();

    let sweep = KSweep::new()
        .with_likelihood(Likelihood::SameVariance)
        .with_criterion(SelectionCriterion::Bic);

    assert_eq!(sweep.best_k(&data.view(), &ks), Some(3));
}

#[test]
fn test_sweep_is_deterministic() {
    let data = three_blobs(200, 1);
    let ks: Vec<usize> = (1..=6).collect();

    let sweep = KSweep::new();
    let first = sweep.run(&data.view(), &ks);
    let second = sweep.run(&data.view(), &ks);

    assert_eq!(first, second);
}

#[test]
fn test_sweep_skips_oversized_candidates() {
    let data = three_blobs(2, 3); // 6 points
    let ks: Vec<usize> = (1..=10).collect();

    let ranked = KSweep::new().run(&data.view(), &ks);

    assert_eq!(ranked.len(), 6);
    assert!(ranked.iter().all(|c| c.k <= 6));
}

#[test]
fn test_cluster_rejects_k_above_sample_count() {
    let data = three_blobs(1, 5); // 3 points

    let result = KMeans::new(4).cluster(&data.view());
    assert!(result.is_err());
}

#[test]
fn test_single_cluster_distances_measure_spread_around_mean() {
    let data = three_blobs(50, 11);
    let n = data.nrows();

    let result = KMeans::new(1).cluster(&data.view()).unwrap();

    assert_eq!(result.num_clusters(), 1);
    assert_eq!(result.points_per_cluster(), &[n]);

    // with one cluster the centroid is the grand mean, so the RSS equals the
    // total squared deviation of the data from its mean
    let mean_x = data.column(0).sum() / n as f64;
    let mean_y = data.column(1).sum() / n as f64;
    let total_squared_deviation: f64 = data
        .outer_iter()
        .map(|p| (p[0] - mean_x).powi(2) + (p[1] - mean_y).powi(2))
        .sum();

    assert_relative_eq!(
        likelihood::residual_sum_of_squares(&result),
        total_squared_deviation,
        max_relative = 1e-10
    );
}

#[test]
fn test_manual_criterion_sweep_matches_ksweep() {
    // compute the ranking by hand from the public pieces and compare with
    // what KSweep reports
    let data = three_blobs(300, 9);
    let n_dims = 2;
    let ks: Vec<usize> = (1..=5).collect();

    let mut best_k = 0;
    let mut best_score = f64::INFINITY;
    for &k in &ks {
        let config = KMeansConfig::new(k).with_max_iters(100);
        let clustering = KMeans::with_config(config).cluster(&data.view()).unwrap();

        let log_l = likelihood::unit_variance(&clustering);
        let score =
            criteria::bayesian_information_criterion(log_l, n_dims * k, clustering.total_points());

        if score < best_score {
            best_score = score;
            best_k = k;
        }
    }

    let sweep = KSweep::new()
        .with_likelihood(Likelihood::UnitVariance)
        .with_criterion(SelectionCriterion::Bic);
    let ranked = sweep.run(&data.view(), &ks);

    assert_eq!(ranked[0].k, best_k);
    assert_relative_eq!(ranked[0].score, best_score, max_relative = 1e-12);
}

#[test]
fn test_clustering_result_shareable_across_threads() {
    let data = three_blobs(100, 13);
    let result = KMeans::new(3).cluster(&data.view()).unwrap();

    // immutable result read concurrently without synchronization
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = result.clone();
            std::thread::spawn(move || likelihood::residual_sum_of_squares(&shared))
        })
        .collect();

    let values: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for value in &values {
        assert_relative_eq!(*value, values[0]);
    }
}
