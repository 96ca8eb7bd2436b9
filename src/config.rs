use crate::tokenize::StopWords;

/// Default cap on vocabulary size.
pub const DEFAULT_MAX_VOCAB: usize = 5000;

/// Default number of recommendations per query.
pub const DEFAULT_TOP_K: usize = 5;

/// Default cap on title suggestions per query.
pub const DEFAULT_SUGGEST_LIMIT: usize = 5;

/// Build-time knobs for a [`MovieCatalog`](crate::catalog::MovieCatalog).
///
/// Fixed once the catalog is built; there are no per-request overrides.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
	pub max_vocab: usize,
	pub top_k: usize,
	pub suggest_limit: usize,
	pub stop_words: StopWords,
}

impl Default for CatalogConfig {
	fn default() -> Self {
		Self {
			max_vocab: DEFAULT_MAX_VOCAB,
			top_k: DEFAULT_TOP_K,
			suggest_limit: DEFAULT_SUGGEST_LIMIT,
			stop_words: StopWords::english(),
		}
	}
}
