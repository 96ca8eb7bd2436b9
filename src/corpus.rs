// ---------------------------------------------------------------------------
// Corpus loading — JSON array of movies, optionally gzipped
// ---------------------------------------------------------------------------
//
// The corpus file is a JSON array of `{ "title": ..., "tags": ... }` records.
// Files starting with the gzip magic bytes are decompressed transparently.
// Ids are positions in the array, so load order is corpus order.
// ---------------------------------------------------------------------------

use std::io::Read;

use flate2::read::{GzDecoder, GzEncoder};
use flate2::Compression;

use crate::error::CatalogError;
use crate::types::Movie;

/// Read and decode a corpus file.
///
/// A record with an empty title is rejected as corruption; empty tags are
/// allowed. An empty array is a valid, empty corpus.
pub fn load_corpus(path: &str) -> Result<Vec<Movie>, CatalogError> {
	let raw = std::fs::read(path)?;
	let json_bytes = if is_gzipped(&raw) {
		decompress(&raw)?
	} else {
		raw
	};

	let movies: Vec<Movie> = serde_json::from_slice(&json_bytes)
		.map_err(|e| CatalogError::Corruption(format!("Invalid corpus JSON: {}", e)))?;

	for (index, movie) in movies.iter().enumerate() {
		if movie.title.is_empty() {
			return Err(CatalogError::Corruption(format!(
				"Empty title at record {}",
				index
			)));
		}
	}

	Ok(movies)
}

/// Gzip-compress a byte slice (level 6).
pub fn compress(data: &[u8]) -> Result<Vec<u8>, CatalogError> {
	let mut encoder = GzEncoder::new(data, Compression::new(6));
	let mut compressed = Vec::new();
	encoder
		.read_to_end(&mut compressed)
		.map_err(CatalogError::Io)?;
	Ok(compressed)
}

/// Gunzip-decompress a byte slice.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>, CatalogError> {
	let mut decoder = GzDecoder::new(data);
	let mut decompressed = Vec::new();
	decoder
		.read_to_end(&mut decompressed)
		.map_err(CatalogError::Io)?;
	Ok(decompressed)
}

/// Check if data starts with gzip magic bytes (0x1f, 0x8b).
pub fn is_gzipped(data: &[u8]) -> bool {
	data.len() >= 2 && data[0] == 0x1f && data[1] == 0x8b
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
