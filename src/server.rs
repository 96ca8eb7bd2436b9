// ---------------------------------------------------------------------------
// CatalogServer — JSON-RPC dispatcher
// ---------------------------------------------------------------------------
//
// Routes incoming JSON-RPC 2.0 requests (NDJSON over stdin) to MovieCatalog
// operations. A main `run()` loop, a `dispatch()` match, a `with_catalog`
// guard, and free-standing handler functions per method. The catalog is
// built exactly once per `catalog/initialize`; every query method before
// that fails with NotInitialized.
// ---------------------------------------------------------------------------

use std::io::{self, BufRead};

use serde::Deserialize;

use crate::catalog::MovieCatalog;
use crate::config::{
	CatalogConfig, DEFAULT_MAX_VOCAB, DEFAULT_SUGGEST_LIMIT, DEFAULT_TOP_K,
};
use crate::corpus::load_corpus;
use crate::error::CatalogError;
use crate::protocol::*;
use crate::tokenize::StopWords;
use crate::transport::NdjsonTransport;

// ---------------------------------------------------------------------------
// Server
// ---------------------------------------------------------------------------

/// JSON-RPC server that dispatches requests to a [`MovieCatalog`].
pub struct CatalogServer {
	transport: NdjsonTransport,
	catalog: Option<MovieCatalog>,
}

impl CatalogServer {
	/// Create a new server with the given transport. The catalog is built
	/// when `catalog/initialize` arrives.
	pub fn new(transport: NdjsonTransport) -> Self {
		Self {
			transport,
			catalog: None,
		}
	}

	/// Main loop: read JSON-RPC messages from stdin, dispatch to handlers.
	pub fn run(&mut self) -> Result<(), CatalogError> {
		let stdin = io::stdin();
		let reader = stdin.lock();

		for line_result in reader.lines() {
			let line = line_result?;
			if line.trim().is_empty() {
				continue;
			}

			let request: JsonRpcRequest = match serde_json::from_str(&line) {
				Ok(r) => r,
				Err(e) => {
					tracing::error!("Failed to parse request: {}", e);
					continue;
				}
			};

			self.dispatch(request);
		}

		Ok(())
	}

	// ── Dispatch ──────────────────────────────────────────────────────────

	fn dispatch(&mut self, req: JsonRpcRequest) {
		let id = req.id;
		let result = match req.method.as_str() {
			"catalog/initialize" => self.handle_initialize(req.params),
			"catalog/recommend" => self.with_catalog(|c| handle_recommend(c, req.params)),
			"catalog/suggest" => self.with_catalog(|c| handle_suggest(c, req.params)),
			"catalog/size" => {
				self.with_catalog(|c| Ok(serde_json::json!({ "count": c.len() })))
			}
			_ => {
				self.transport.write_error(
					id,
					METHOD_NOT_FOUND,
					format!("Unknown method: {}", req.method),
					None,
				);
				return;
			}
		};

		match result {
			Ok(value) => self.transport.write_response(id, value),
			Err(e) => self.transport.write_error(
				id,
				CATALOG_ERROR,
				e.to_string(),
				Some(e.to_json_rpc_error()),
			),
		}
	}

	// ── Catalog accessor ──────────────────────────────────────────────────

	fn with_catalog<F>(&self, f: F) -> Result<serde_json::Value, CatalogError>
	where
		F: FnOnce(&MovieCatalog) -> Result<serde_json::Value, CatalogError>,
	{
		match &self.catalog {
			Some(c) => f(c),
			None => Err(CatalogError::NotInitialized),
		}
	}

	// ── Initialize ────────────────────────────────────────────────────────

	fn handle_initialize(
		&mut self,
		params: serde_json::Value,
	) -> Result<serde_json::Value, CatalogError> {
		let p: InitializeParams = parse_params(params)?;

		let stop_words = match p.stop_words {
			Some(words) => StopWords::custom(words),
			None => StopWords::english(),
		};
		let config = CatalogConfig {
			max_vocab: p.max_vocab.unwrap_or(DEFAULT_MAX_VOCAB),
			top_k: p.top_k.unwrap_or(DEFAULT_TOP_K),
			suggest_limit: p.suggest_limit.unwrap_or(DEFAULT_SUGGEST_LIMIT),
			stop_words,
		};

		let movies = load_corpus(&p.corpus_path)?;
		if movies.is_empty() {
			tracing::warn!("Corpus is empty: every query will return empty results");
		}

		let catalog = MovieCatalog::build(movies, config);
		tracing::info!(
			"Catalog loaded: {} movies, {} vocabulary terms",
			catalog.len(),
			catalog.vocabulary().len()
		);

		let result = serde_json::json!({
			"movies": catalog.len(),
			"vocabulary": catalog.vocabulary().len(),
		});
		self.catalog = Some(catalog);

		Ok(result)
	}
}

// ---------------------------------------------------------------------------
// Param types
// ---------------------------------------------------------------------------

fn parse_params<T: serde::de::DeserializeOwned>(
	params: serde_json::Value,
) -> Result<T, CatalogError> {
	serde_json::from_value(params)
		.map_err(|e| CatalogError::Serialization(format!("Invalid params: {}", e)))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct InitializeParams {
	corpus_path: String,
	max_vocab: Option<usize>,
	top_k: Option<usize>,
	suggest_limit: Option<usize>,
	stop_words: Option<Vec<String>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecommendParams {
	movie: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SuggestParams {
	query: String,
}

// ---------------------------------------------------------------------------
// Free-standing handler functions
// ---------------------------------------------------------------------------

fn handle_recommend(
	catalog: &MovieCatalog,
	params: serde_json::Value,
) -> Result<serde_json::Value, CatalogError> {
	let p: RecommendParams = parse_params(params)?;
	let recommendation = catalog.recommend(&p.movie);
	serde_json::to_value(recommendation).map_err(|e| CatalogError::Serialization(e.to_string()))
}

fn handle_suggest(
	catalog: &MovieCatalog,
	params: serde_json::Value,
) -> Result<serde_json::Value, CatalogError> {
	let p: SuggestParams = parse_params(params)?;
	let suggestions = catalog.suggest(&p.query);
	Ok(serde_json::json!({ "suggestions": suggestions }))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::Movie;

	fn catalog() -> MovieCatalog {
		MovieCatalog::build(
			vec![
				Movie {
					title: "Star Battles".into(),
					tags: "space war robot".into(),
				},
				Movie {
					title: "Galaxy Opera".into(),
					tags: "space opera robot".into(),
				},
			],
			CatalogConfig::default(),
		)
	}

	#[test]
	fn recommend_handler_shapes_response() {
		let result = handle_recommend(
			&catalog(),
			serde_json::json!({ "movie": "star battles" }),
		)
		.unwrap();
		assert_eq!(result["found"], true);
		assert_eq!(result["movies"][0], "Galaxy Opera");
	}

	#[test]
	fn recommend_handler_rejects_missing_movie() {
		let err = handle_recommend(&catalog(), serde_json::json!({})).unwrap_err();
		assert_eq!(err.code(), "CATALOG_SERIALIZATION");
	}

	#[test]
	fn suggest_handler_shapes_response() {
		let result =
			handle_suggest(&catalog(), serde_json::json!({ "query": "galaxy" })).unwrap();
		assert_eq!(result["suggestions"][0], "Galaxy Opera");
	}

	#[test]
	fn with_catalog_guards_uninitialized() {
		let server = CatalogServer::new(NdjsonTransport::new());
		let err = server
			.with_catalog(|c| Ok(serde_json::json!({ "count": c.len() })))
			.unwrap_err();
		assert!(matches!(err, CatalogError::NotInitialized));
	}
}
