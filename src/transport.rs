use std::io::{self, Write};

use serde::Serialize;

#[derive(Serialize)]
struct JsonRpcResponse<'a> {
	jsonrpc: &'a str,
	id: u64,
	#[serde(skip_serializing_if = "Option::is_none")]
	result: Option<serde_json::Value>,
	#[serde(skip_serializing_if = "Option::is_none")]
	error: Option<JsonRpcErrorBody>,
}

#[derive(Serialize)]
struct JsonRpcErrorBody {
	code: i32,
	message: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	data: Option<serde_json::Value>,
}

/// Writes one JSON-RPC response per line on stdout. Diagnostics go to stderr
/// through tracing, keeping stdout clean for protocol frames.
pub struct NdjsonTransport;

impl Default for NdjsonTransport {
	fn default() -> Self {
		Self::new()
	}
}

impl NdjsonTransport {
	pub fn new() -> Self {
		Self
	}

	pub fn write_response(&self, id: u64, result: serde_json::Value) {
		self.write_line(&JsonRpcResponse {
			jsonrpc: "2.0",
			id,
			result: Some(result),
			error: None,
		});
	}

	pub fn write_error(
		&self,
		id: u64,
		code: i32,
		message: impl Into<String>,
		data: Option<serde_json::Value>,
	) {
		self.write_line(&JsonRpcResponse {
			jsonrpc: "2.0",
			id,
			result: None,
			error: Some(JsonRpcErrorBody {
				code,
				message: message.into(),
				data,
			}),
		});
	}

	fn write_line(&self, value: &impl Serialize) {
		let mut stdout = io::stdout().lock();
		if let Err(e) = serde_json::to_writer(&mut stdout, value) {
			tracing::error!("Failed to serialize: {}", e);
			return;
		}
		let _ = writeln!(stdout);
		let _ = stdout.flush();
	}
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
	use super::*;

	// Clients distinguish success from failure by key presence, so the
	// unused side must be absent, not null.

	#[test]
	fn success_frame_omits_error_key() {
		let frame = JsonRpcResponse {
			jsonrpc: "2.0",
			id: 3,
			result: Some(serde_json::json!({ "count": 1 })),
			error: None,
		};
		let line = serde_json::to_string(&frame).unwrap();
		assert!(line.contains(r#""result""#));
		assert!(!line.contains(r#""error""#));
	}

	#[test]
	fn error_frame_omits_result_and_empty_data() {
		let frame = JsonRpcResponse {
			jsonrpc: "2.0",
			id: 4,
			result: None,
			error: Some(JsonRpcErrorBody {
				code: -32000,
				message: "Catalog not initialized".into(),
				data: None,
			}),
		};
		let line = serde_json::to_string(&frame).unwrap();
		assert!(line.contains(r#""error""#));
		assert!(!line.contains(r#""result""#));
		assert!(!line.contains(r#""data""#));
	}
}
