use serde::{Deserialize, Serialize};

/// One corpus record: a title plus free-text descriptive tags.
///
/// A movie's id is its position in the corpus array. Titles are not
/// guaranteed unique; tags may be empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
	pub title: String,
	#[serde(default)]
	pub tags: String,
}

/// Result of a recommend query: whether the query resolved to a movie, and
/// the titles of its nearest neighbors in descending similarity order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
	pub found: bool,
	pub movies: Vec<String>,
}

impl Recommendation {
	/// The negative result: query resolved to nothing.
	pub fn not_found() -> Self {
		Self {
			found: false,
			movies: Vec::new(),
		}
	}
}
