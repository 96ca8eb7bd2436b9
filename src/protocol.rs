use serde::Deserialize;

// JSON-RPC 2.0 error codes
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const CATALOG_ERROR: i32 = -32000;

#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
	pub id: u64,
	pub method: String,
	#[serde(default)]
	pub params: serde_json::Value,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn request_params_default_to_null() {
		let req: JsonRpcRequest =
			serde_json::from_str(r#"{ "id": 7, "method": "catalog/size" }"#).unwrap();
		assert_eq!(req.id, 7);
		assert_eq!(req.method, "catalog/size");
		assert!(req.params.is_null());
	}

	#[test]
	fn request_with_params() {
		let req: JsonRpcRequest = serde_json::from_str(
			r#"{ "jsonrpc": "2.0", "id": 1, "method": "catalog/recommend", "params": { "movie": "Star Battles" } }"#,
		)
		.unwrap();
		assert_eq!(req.params["movie"], "Star Battles");
	}
}
