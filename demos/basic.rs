//! Basic example demonstrating kmeans-select usage
//!
//! Run with: cargo run --example basic --release

use kmeans_select::{likelihood, KMeans, KMeansConfig};
use ndarray::Array2;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;

fn main() {
    println!("=== kmeans-select example ===\n");

    // Generate synthetic data: 3 clusters in 2D for easy visualization
    let n_samples = 300;
    let n_clusters = 3;

    // Cluster centers; samples are interleaved across clusters, so the
    // engine's first-k-points seeding starts from every cluster
    let centers = [[-5.0f64, -5.0], [0.0, 5.0], [5.0, -5.0]];

    println!("Generating {} samples around 3 centers...", n_samples);

    let mut data = Array2::<f64>::zeros((n_samples, 2));
    for i in 0..n_samples {
        let center = centers[i % 3];
        let noise = Array2::random((1, 2), Uniform::new(-1.0f64, 1.0));
        data[[i, 0]] = center[0] + noise[[0, 0]];
        data[[i, 1]] = center[1] + noise[[0, 1]];
    }

    println!("True cluster centers:");
    for (i, center) in centers.iter().enumerate() {
        println!("  Cluster {}: ({:.2}, {:.2})", i, center[0], center[1]);
    }
    println!();

    // Configure and run the clustering
    let config = KMeansConfig::new(n_clusters).with_max_iters(100).with_verbose(true);

    println!("Running k-means with k={}...\n", n_clusters);

    let result = KMeans::with_config(config)
        .cluster(&data.view())
        .expect("Clustering failed");

    println!("\nCluster distribution:");
    for (i, count) in result.points_per_cluster().iter().enumerate() {
        println!(
            "  Cluster {}: {} samples ({:.1}%)",
            i,
            count,
            (*count as f64 / n_samples as f64) * 100.0
        );
    }
    println!();

    println!(
        "Residual sum of squares: {:.4}",
        likelihood::residual_sum_of_squares(&result)
    );
    println!(
        "Unit-variance log-likelihood: {:.4}",
        likelihood::unit_variance(&result)
    );
    println!(
        "Same-variance log-likelihood: {:.4}",
        likelihood::same_variance(&result, 2)
    );

    println!("\n=== Done! ===");
}
