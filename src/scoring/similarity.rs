//! Similarity primitives.

/// Cosine similarity of two vectors.
///
/// Returns 0.0 when the lengths differ or either vector has zero norm.
#[must_use]
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }

    let (dot, norm_a, norm_b) = a
        .iter()
        .zip(b)
        .fold((0.0, 0.0, 0.0), |(dot, na, nb), (x, y)| {
            (dot + x * y, na + x * x, nb + y * y)
        });

    if norm_a <= 0.0 || norm_b <= 0.0 {
        return 0.0;
    }

    dot / (norm_a.sqrt() * norm_b.sqrt())
}

/// Similarity of two scalars already normalized to `[0, 1]`.
#[must_use]
pub fn scalar_similarity(a: f64, b: f64) -> f64 {
    (1.0 - (a - b).abs()).clamp(0.0, 1.0)
}
