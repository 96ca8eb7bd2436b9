// ---------------------------------------------------------------------------
// Vocabulary — corpus-wide term selection + count-vector encoding
// ---------------------------------------------------------------------------
//
// Scans every tag string once, counts term frequency after stop-word removal,
// and keeps the `max_terms` most frequent terms. Term order fixes the column
// order of all encoded vectors and is deterministic: frequency descending,
// then lexicographic ascending among ties.
// ---------------------------------------------------------------------------

use std::collections::HashMap;

use crate::tokenize::{tokenize, tokenize_filtered, StopWords};

/// An ordered term list plus its term-to-column lookup map. Built once per
/// corpus; immutable afterwards.
#[derive(Debug, Clone)]
pub struct Vocabulary {
	terms: Vec<String>,
	columns: HashMap<String, usize>,
}

impl Vocabulary {
	/// Build a vocabulary from the tag text of an entire corpus.
	///
	/// An empty corpus (or one that is all stop words) yields an empty
	/// vocabulary, which encodes every movie to a zero-length vector.
	pub fn build<'a, I>(texts: I, stop_words: &StopWords, max_terms: usize) -> Self
	where
		I: IntoIterator<Item = &'a str>,
	{
		let mut frequency: HashMap<String, usize> = HashMap::new();
		for text in texts {
			for token in tokenize_filtered(text, stop_words) {
				*frequency.entry(token).or_insert(0) += 1;
			}
		}

		let mut ranked: Vec<(String, usize)> = frequency.into_iter().collect();
		ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
		ranked.truncate(max_terms);

		let terms: Vec<String> = ranked.into_iter().map(|(term, _)| term).collect();
		let columns = terms
			.iter()
			.enumerate()
			.map(|(column, term)| (term.clone(), column))
			.collect();

		Self { terms, columns }
	}

	/// Encode one tag string as a count vector over the vocabulary columns.
	///
	/// Stop words never enter the vocabulary, so the column lookup already
	/// drops them; the raw tokenizer is enough here.
	pub fn encode(&self, tags: &str) -> Vec<f32> {
		let mut row = vec![0.0f32; self.terms.len()];
		for token in tokenize(tags) {
			if let Some(&column) = self.columns.get(&token) {
				row[column] += 1.0;
			}
		}
		row
	}

	/// The column position of a term, if it made the vocabulary.
	pub fn column(&self, term: &str) -> Option<usize> {
		self.columns.get(term).copied()
	}

	/// Terms in column order.
	pub fn terms(&self) -> &[String] {
		&self.terms
	}

	pub fn len(&self) -> usize {
		self.terms.len()
	}

	pub fn is_empty(&self) -> bool {
		self.terms.is_empty()
	}
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
	use super::*;

	fn english() -> StopWords {
		StopWords::english()
	}

	// -- build tests ----------------------------------------------------------

	#[test]
	fn build_orders_by_frequency_then_term() {
		let texts = ["robot space robot", "space drama", "drama robot"];
		let vocab = Vocabulary::build(texts.into_iter(), &english(), 10);
		// robot: 3, space: 2, drama: 2 -- equal counts break lexicographically.
		assert_eq!(vocab.terms(), &["robot", "drama", "space"]);
	}

	#[test]
	fn build_truncates_to_max_terms() {
		let texts = ["zebra apple", "zebra apple"];
		let vocab = Vocabulary::build(texts.into_iter(), &english(), 1);
		// Both terms have frequency 2; "apple" wins the tie.
		assert_eq!(vocab.terms(), &["apple"]);
		assert_eq!(vocab.column("apple"), Some(0));
		assert_eq!(vocab.column("zebra"), None);
	}

	#[test]
	fn build_excludes_stop_words() {
		let texts = ["the robot and the alien"];
		let vocab = Vocabulary::build(texts.into_iter(), &english(), 10);
		assert_eq!(vocab.column("the"), None);
		assert_eq!(vocab.column("and"), None);
		assert!(vocab.column("robot").is_some());
		assert!(vocab.column("alien").is_some());
	}

	#[test]
	fn build_empty_corpus_is_empty() {
		let vocab = Vocabulary::build(std::iter::empty(), &english(), 10);
		assert!(vocab.is_empty());
		assert_eq!(vocab.len(), 0);
	}

	#[test]
	fn build_all_stop_words_is_empty() {
		let texts = ["the of and", "a an or"];
		let vocab = Vocabulary::build(texts.into_iter(), &english(), 10);
		assert!(vocab.is_empty());
	}

	#[test]
	fn build_is_deterministic_across_runs() {
		let texts = ["laser alien drama", "drama alien robot", "robot laser"];
		let a = Vocabulary::build(texts.into_iter(), &english(), 10);
		let b = Vocabulary::build(texts.into_iter(), &english(), 10);
		assert_eq!(a.terms(), b.terms());
	}

	// -- encode tests ---------------------------------------------------------

	#[test]
	fn encode_counts_occurrences() {
		let texts = ["space robot", "space laser"];
		let vocab = Vocabulary::build(texts.into_iter(), &english(), 10);
		let row = vocab.encode("space space robot");

		assert_eq!(row.len(), vocab.len());
		let space = vocab.column("space").unwrap();
		let robot = vocab.column("robot").unwrap();
		let laser = vocab.column("laser").unwrap();
		assert_eq!(row[space], 2.0);
		assert_eq!(row[robot], 1.0);
		assert_eq!(row[laser], 0.0);
	}

	#[test]
	fn encode_ignores_unknown_and_stop_words() {
		let texts = ["space robot"];
		let vocab = Vocabulary::build(texts.into_iter(), &english(), 10);
		let row = vocab.encode("the warp space");
		// "the" is a stop word, "warp" never made the vocabulary.
		assert_eq!(row.iter().sum::<f32>(), 1.0);
	}

	#[test]
	fn encode_empty_tags_is_zero_vector() {
		let texts = ["space robot"];
		let vocab = Vocabulary::build(texts.into_iter(), &english(), 10);
		let row = vocab.encode("");
		assert_eq!(row.len(), 2);
		assert!(row.iter().all(|&c| c == 0.0));
	}

	#[test]
	fn encode_with_empty_vocabulary_is_zero_length() {
		let vocab = Vocabulary::build(std::iter::empty(), &english(), 10);
		assert!(vocab.encode("anything at all").is_empty());
	}
}
