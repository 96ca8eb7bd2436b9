//! Movie recommendation engine: fixed-vocabulary tag-count vectors, cosine
//! similarity, and top-K ranking, served over JSON-RPC 2.0 / NDJSON stdio.

pub mod catalog;
pub mod config;
pub mod corpus;
pub mod error;
pub mod matrix;
pub mod protocol;
pub mod rank;
pub mod resolve;
pub mod server;
pub mod similarity;
pub mod tokenize;
pub mod transport;
pub mod types;
pub mod vocabulary;
