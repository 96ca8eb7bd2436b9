// ---------------------------------------------------------------------------
// Cosine similarity over tag-count vectors
// ---------------------------------------------------------------------------

use crate::matrix::TagMatrix;

/// Compute cosine similarity between two count vectors.
/// Returns 0.0 for zero-magnitude vectors or dimension mismatches.
/// Result clamped to [-1.0, 1.0]; never NaN.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
	if a.len() != b.len() || a.is_empty() {
		return 0.0;
	}

	let mut dot: f64 = 0.0;
	let mut norm_a: f64 = 0.0;
	let mut norm_b: f64 = 0.0;

	for i in 0..a.len() {
		let ai = a[i] as f64;
		let bi = b[i] as f64;
		dot += ai * bi;
		norm_a += ai * ai;
		norm_b += bi * bi;
	}

	let denom = norm_a.sqrt() * norm_b.sqrt();
	if denom == 0.0 {
		return 0.0;
	}

	let result = dot / denom;
	if !result.is_finite() {
		return 0.0;
	}
	result.clamp(-1.0, 1.0)
}

/// Compute the magnitude (L2 norm) of a vector.
pub fn compute_magnitude(vector: &[f32]) -> f64 {
	let mut sum: f64 = 0.0;
	for &v in vector {
		let vf = v as f64;
		sum += vf * vf;
	}
	sum.sqrt()
}

/// Cosine similarity using magnitudes computed ahead of time.
/// Returns 0.0 whenever either magnitude is zero.
pub fn cosine_similarity_with_magnitude(a: &[f32], b: &[f32], mag_a: f64, mag_b: f64) -> f64 {
	if a.len() != b.len() || a.is_empty() {
		return 0.0;
	}

	let denom = mag_a * mag_b;
	if denom == 0.0 {
		return 0.0;
	}

	let mut dot: f64 = 0.0;
	for i in 0..a.len() {
		dot += (a[i] as f64) * (b[i] as f64);
	}

	let result = dot / denom;
	if !result.is_finite() {
		return 0.0;
	}
	result.clamp(-1.0, 1.0)
}

/// Score one matrix row against every row, reusing the matrix's precomputed
/// magnitudes. Out-of-range reference indices score 0.0 everywhere.
pub fn score_rows(matrix: &TagMatrix, reference: usize) -> Vec<f64> {
	let reference_row = match matrix.row(reference) {
		Some(row) => row,
		None => return vec![0.0; matrix.len()],
	};
	let reference_magnitude = matrix.magnitude(reference).unwrap_or(0.0);

	matrix
		.rows()
		.iter()
		.zip(matrix.magnitudes())
		.map(|(row, &magnitude)| {
			cosine_similarity_with_magnitude(reference_row, row, reference_magnitude, magnitude)
		})
		.collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
