// ---------------------------------------------------------------------------
// Tokenisation + stop words
// ---------------------------------------------------------------------------
//
// The single tokenisation contract shared by vocabulary building and vector
// encoding: lowercase, split on non-alphanumeric boundaries, drop stop words.
// Both sides must agree or encoded vectors drift from the vocabulary.
// ---------------------------------------------------------------------------

use std::collections::HashSet;

/// Split text into lowercased word tokens, treating every non-alphanumeric
/// character as a boundary. No stemming, no stop-word removal.
pub fn tokenize(text: &str) -> Vec<String> {
	text.to_lowercase()
		.chars()
		.map(|c| if c.is_alphanumeric() || c.is_whitespace() { c } else { ' ' })
		.collect::<String>()
		.split_whitespace()
		.filter(|t| !t.is_empty())
		.map(|t| t.to_string())
		.collect()
}

/// Tokenize and drop stop words. This is the form content text takes before
/// it is counted into the vocabulary.
pub fn tokenize_filtered(text: &str, stop_words: &StopWords) -> Vec<String> {
	tokenize(text)
		.into_iter()
		.filter(|t| !stop_words.contains(t))
		.collect()
}

// ---------------------------------------------------------------------------
// Stop-word set
// ---------------------------------------------------------------------------

/// A lookup set of words excluded from the vocabulary.
///
/// Words are stored lowercased; `contains` expects lowercased input, which is
/// what [`tokenize`] produces.
#[derive(Debug, Clone)]
pub struct StopWords {
	words: HashSet<String>,
}

impl StopWords {
	/// The default English list.
	pub fn english() -> Self {
		Self::custom(ENGLISH_STOP_WORDS)
	}

	/// Build a set from arbitrary words. Input is lowercased.
	pub fn custom<I, S>(words: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		Self {
			words: words
				.into_iter()
				.map(|w| w.as_ref().to_lowercase())
				.collect(),
		}
	}

	pub fn contains(&self, word: &str) -> bool {
		self.words.contains(word)
	}

	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}
}

impl Default for StopWords {
	fn default() -> Self {
		Self::english()
	}
}

/// Common English stop words (NLTK / scikit-learn lineage).
pub const ENGLISH_STOP_WORDS: &[&str] = &[
	// articles
	"a", "an", "the",
	// pronouns
	"i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your",
	"yours", "yourself", "yourselves", "he", "him", "his", "himself", "she",
	"her", "hers", "herself", "it", "its", "itself", "they", "them", "their",
	"theirs", "themselves",
	// question words
	"what", "which", "who", "whom", "whose", "why", "when", "where", "how",
	// prepositions
	"about", "above", "across", "after", "against", "along", "among", "around",
	"at", "before", "behind", "below", "beneath", "beside", "between", "beyond",
	"by", "down", "during", "for", "from", "in", "inside", "into", "near", "of",
	"off", "on", "onto", "out", "outside", "over", "through", "throughout",
	"to", "toward", "under", "underneath", "until", "up", "upon", "with",
	"within", "without",
	// conjunctions
	"and", "as", "because", "but", "if", "or", "since", "so", "than", "that",
	"though", "unless", "while",
	// auxiliary verbs
	"am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
	"had", "having", "do", "does", "did", "doing", "would", "should", "could",
	"ought", "can", "may", "might", "must", "will", "shall",
	// determiners and degree words
	"all", "any", "both", "each", "every", "few", "more", "most", "much",
	"neither", "no", "none", "not", "one", "other", "same", "several", "some",
	"such", "very", "too", "only", "own", "then", "there", "these", "this",
	"those", "just", "now", "here",
	// frequent fillers
	"again", "also", "another", "back", "even", "ever", "get", "give", "go",
	"got", "made", "make", "say", "see", "take", "way",
];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
