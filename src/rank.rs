// ---------------------------------------------------------------------------
// Top-K selection
// ---------------------------------------------------------------------------

use std::cmp::Ordering;

/// Pick the `k` highest-scoring indices, excluding `exclude` unconditionally.
///
/// Order is score descending; equal scores break by ascending index so the
/// output is reproducible for a given score vector.
pub fn top_k(scores: &[f64], exclude: usize, k: usize) -> Vec<(usize, f64)> {
	let mut ranked: Vec<(usize, f64)> = scores
		.iter()
		.copied()
		.enumerate()
		.filter(|(index, _)| *index != exclude)
		.collect();

	ranked.sort_by(|a, b| {
		b.1.partial_cmp(&a.1)
			.unwrap_or(Ordering::Equal)
			.then_with(|| a.0.cmp(&b.0))
	});
	ranked.truncate(k);
	ranked
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
