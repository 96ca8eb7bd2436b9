// ---------------------------------------------------------------------------
// TagMatrix — one count vector per movie, plus precomputed magnitudes
// ---------------------------------------------------------------------------
//
// Rows are indexed 1:1 by corpus position, columns 1:1 by vocabulary column.
// Row L2 magnitudes are computed once at build time so per-query scoring
// never recomputes them.
// ---------------------------------------------------------------------------

use crate::similarity::compute_magnitude;
use crate::vocabulary::Vocabulary;

#[derive(Debug, Clone)]
pub struct TagMatrix {
	rows: Vec<Vec<f32>>,
	magnitudes: Vec<f64>,
}

impl TagMatrix {
	/// Encode every movie's tags into a row. Row order follows input order.
	pub fn build<'a, I>(texts: I, vocabulary: &Vocabulary) -> Self
	where
		I: IntoIterator<Item = &'a str>,
	{
		let mut rows = Vec::new();
		let mut magnitudes = Vec::new();
		for text in texts {
			let row = vocabulary.encode(text);
			magnitudes.push(compute_magnitude(&row));
			rows.push(row);
		}
		Self { rows, magnitudes }
	}

	pub fn row(&self, index: usize) -> Option<&[f32]> {
		self.rows.get(index).map(|r| r.as_slice())
	}

	pub fn magnitude(&self, index: usize) -> Option<f64> {
		self.magnitudes.get(index).copied()
	}

	/// All rows, in corpus order.
	pub fn rows(&self) -> &[Vec<f32>] {
		&self.rows
	}

	/// All row magnitudes, parallel to [`rows`](Self::rows).
	pub fn magnitudes(&self) -> &[f64] {
		&self.magnitudes
	}

	pub fn len(&self) -> usize {
		self.rows.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	/// Width of every row; 0 for an empty matrix.
	pub fn column_count(&self) -> usize {
		self.rows.first().map_or(0, |r| r.len())
	}
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tokenize::StopWords;

	fn vocab(texts: &[&str]) -> Vocabulary {
		Vocabulary::build(texts.iter().copied(), &StopWords::english(), 100)
	}

	#[test]
	fn build_one_row_per_movie() {
		let tags = ["space robot", "space laser", "cooking"];
		let vocab = vocab(&tags);
		let matrix = TagMatrix::build(tags.into_iter(), &vocab);

		assert_eq!(matrix.len(), 3);
		assert_eq!(matrix.column_count(), vocab.len());
		assert_eq!(matrix.magnitudes().len(), 3);
	}

	#[test]
	fn cells_are_non_negative_counts() {
		let tags = ["robot robot space", "laser"];
		let vocab = vocab(&tags);
		let matrix = TagMatrix::build(tags.into_iter(), &vocab);

		for row in matrix.rows() {
			assert!(row.iter().all(|&c| c >= 0.0));
		}
		let robot = vocab.column("robot").unwrap();
		assert_eq!(matrix.row(0).unwrap()[robot], 2.0);
	}

	#[test]
	fn magnitude_matches_row() {
		let tags = ["robot space", "robot"];
		let vocab = vocab(&tags);
		let matrix = TagMatrix::build(tags.into_iter(), &vocab);

		// Row 0 is two distinct unit counts: magnitude sqrt(2).
		let mag = matrix.magnitude(0).unwrap();
		assert!((mag - 2.0f64.sqrt()).abs() < 1e-10);
	}

	#[test]
	fn empty_tags_row_has_zero_magnitude() {
		let tags = ["robot space", ""];
		let vocab = vocab(&tags);
		let matrix = TagMatrix::build(tags.into_iter(), &vocab);

		assert_eq!(matrix.magnitude(1), Some(0.0));
		assert!(matrix.row(1).unwrap().iter().all(|&c| c == 0.0));
	}

	#[test]
	fn out_of_range_row_is_none() {
		let tags = ["robot"];
		let vocab = vocab(&tags);
		let matrix = TagMatrix::build(tags.into_iter(), &vocab);

		assert!(matrix.row(5).is_none());
		assert!(matrix.magnitude(5).is_none());
	}

	#[test]
	fn empty_corpus_matrix() {
		let vocab = vocab(&[]);
		let matrix = TagMatrix::build(std::iter::empty(), &vocab);
		assert!(matrix.is_empty());
		assert_eq!(matrix.column_count(), 0);
	}
}
