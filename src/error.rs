use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
	#[error("Catalog not initialized: call catalog/initialize first")]
	NotInitialized,
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
	#[error("Corpus corruption: {0}")]
	Corruption(String),
	#[error("Serialization error: {0}")]
	Serialization(String),
}

impl CatalogError {
	pub fn code(&self) -> &str {
		match self {
			Self::NotInitialized => "CATALOG_NOT_LOADED",
			Self::Io(_) => "CATALOG_IO",
			Self::Corruption(_) => "CATALOG_CORRUPT",
			Self::Serialization(_) => "CATALOG_SERIALIZATION",
		}
	}

	pub fn to_json_rpc_error(&self) -> serde_json::Value {
		serde_json::json!({
			"catalogCode": self.code(),
			"message": self.to_string(),
		})
	}
}
