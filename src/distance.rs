use ndarray::{ArrayView1, ArrayView2, NdFloat};

/// Squared Euclidean distance between two points of equal dimension.
#[inline]
pub fn squared_distance<F: NdFloat>(a: &ArrayView1<F>, b: &ArrayView1<F>) -> F {
    a.iter()
        .zip(b.iter())
        .fold(F::zero(), |acc, (&x, &y)| acc + (x - y) * (x - y))
}

/// Find the centroid nearest to `point`, returning `(index, squared distance)`.
///
/// Ties are broken deterministically in favor of the lowest centroid index:
/// a later centroid replaces the current best only on a strictly smaller
/// distance.
#[inline]
pub fn nearest_centroid<F: NdFloat>(
    point: &ArrayView1<F>,
    centroids: &ArrayView2<F>,
) -> (usize, F) {
    let mut best_index = 0;
    let mut best_dist = squared_distance(point, &centroids.row(0));

    for (index, centroid) in centroids.outer_iter().enumerate().skip(1) {
        let dist = squared_distance(point, &centroid);
        if dist < best_dist {
            best_dist = dist;
            best_index = index;
        }
    }

    (best_index, best_dist)
}
