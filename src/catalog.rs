// ---------------------------------------------------------------------------
// MovieCatalog — the built index served by every query
// ---------------------------------------------------------------------------
//
// Construction runs the whole startup pipeline once: vocabulary selection,
// row encoding, title indexing. After `build` returns, nothing mutates; all
// query methods take `&self` and are safe to call from anywhere.
// ---------------------------------------------------------------------------

use crate::config::CatalogConfig;
use crate::matrix::TagMatrix;
use crate::rank::top_k;
use crate::resolve::TitleIndex;
use crate::similarity::score_rows;
use crate::types::{Movie, Recommendation};
use crate::vocabulary::Vocabulary;

pub struct MovieCatalog {
	movies: Vec<Movie>,
	vocabulary: Vocabulary,
	matrix: TagMatrix,
	titles: TitleIndex,
	config: CatalogConfig,
}

impl MovieCatalog {
	/// Build the full index from a loaded corpus. An empty corpus is a valid
	/// degenerate catalog: every query returns empty results.
	pub fn build(movies: Vec<Movie>, config: CatalogConfig) -> Self {
		let vocabulary = Vocabulary::build(
			movies.iter().map(|m| m.tags.as_str()),
			&config.stop_words,
			config.max_vocab,
		);
		let matrix = TagMatrix::build(movies.iter().map(|m| m.tags.as_str()), &vocabulary);
		let titles = TitleIndex::build(movies.iter().map(|m| m.title.as_str()));

		Self {
			movies,
			vocabulary,
			matrix,
			titles,
			config,
		}
	}

	/// Recommend the movies most similar to the one the query resolves to.
	///
	/// Resolution is exact-then-substring; an unresolvable query yields
	/// `found: false` with no titles. The resolved movie itself is excluded
	/// by index, so a duplicate title elsewhere in the corpus can still
	/// appear in the results.
	pub fn recommend(&self, query: &str) -> Recommendation {
		let reference = match self.titles.resolve(query) {
			Some(index) => index,
			None => return Recommendation::not_found(),
		};

		let scores = score_rows(&self.matrix, reference);
		let ranked = top_k(&scores, reference, self.config.top_k);
		let movies = ranked
			.into_iter()
			.filter_map(|(index, _)| self.movies.get(index).map(|m| m.title.clone()))
			.collect();

		Recommendation {
			found: true,
			movies,
		}
	}

	/// Titles containing the query substring, corpus order, capped at the
	/// configured limit. The empty query returns nothing, unlike
	/// [`recommend`](Self::recommend) where it degenerates to the first movie.
	pub fn suggest(&self, query: &str) -> Vec<String> {
		if query.is_empty() {
			return Vec::new();
		}
		self.titles
			.containing(query, self.config.suggest_limit)
			.into_iter()
			.filter_map(|index| self.movies.get(index).map(|m| m.title.clone()))
			.collect()
	}

	pub fn movie(&self, index: usize) -> Option<&Movie> {
		self.movies.get(index)
	}

	pub fn vocabulary(&self) -> &Vocabulary {
		&self.vocabulary
	}

	/// Number of movies in the corpus.
	pub fn len(&self) -> usize {
		self.movies.len()
	}

	pub fn is_empty(&self) -> bool {
		self.movies.is_empty()
	}
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
