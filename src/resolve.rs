// ---------------------------------------------------------------------------
// TitleIndex — query-to-movie resolution
// ---------------------------------------------------------------------------
//
// Titles are lowercased once at build time. Resolution tries an exact match
// through a prebuilt map first (O(1)), then falls back to the first
// corpus-order title containing the query as a substring. Duplicate titles
// keep their first corpus index.
// ---------------------------------------------------------------------------

use std::collections::HashMap;

/// Build-once lookup structure over corpus titles.
#[derive(Debug, Clone)]
pub struct TitleIndex {
	lowered: Vec<String>,
	exact: HashMap<String, usize>,
}

impl TitleIndex {
	pub fn build<'a, I>(titles: I) -> Self
	where
		I: IntoIterator<Item = &'a str>,
	{
		let lowered: Vec<String> = titles.into_iter().map(|t| t.to_lowercase()).collect();
		let mut exact = HashMap::new();
		for (index, title) in lowered.iter().enumerate() {
			exact.entry(title.clone()).or_insert(index);
		}
		Self { lowered, exact }
	}

	/// Resolve a query to a corpus index: exact lowercased match first, then
	/// the first title containing the query. `None` is the normal negative
	/// result, not an error.
	///
	/// An empty query is a substring of every title, so it resolves to movie
	/// 0 of a non-empty corpus.
	pub fn resolve(&self, query: &str) -> Option<usize> {
		let needle = query.to_lowercase();
		if let Some(&index) = self.exact.get(&needle) {
			return Some(index);
		}
		self.lowered.iter().position(|title| title.contains(&needle))
	}

	/// Indices of titles containing the query, corpus order, capped at
	/// `limit`.
	pub fn containing(&self, query: &str, limit: usize) -> Vec<usize> {
		let needle = query.to_lowercase();
		self.lowered
			.iter()
			.enumerate()
			.filter(|(_, title)| title.contains(&needle))
			.map(|(index, _)| index)
			.take(limit)
			.collect()
	}
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
