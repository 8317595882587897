use std::path::PathBuf;

use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
	pub engine: Engine,
	pub provider: EmbeddingProviderConfig,
	pub cache: Cache,
	pub thresholds: Thresholds,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Engine {
	pub top_k: u32,
	pub log_level: String,
}
impl Default for Engine {
	fn default() -> Self {
		Self { top_k: 3, log_level: "info".to_string() }
	}
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct EmbeddingProviderConfig {
	pub provider_id: String,
	pub api_base: String,
	/// Absent key selects the synthetic embedding path.
	pub api_key: Option<String>,
	pub path: String,
	pub model: String,
	pub dimensions: u32,
	pub timeout_ms: u64,
	pub default_headers: Map<String, Value>,
}
impl Default for EmbeddingProviderConfig {
	fn default() -> Self {
		Self {
			provider_id: "openai".to_string(),
			api_base: "https://api.openai.com".to_string(),
			api_key: None,
			path: "/v1/embeddings".to_string(),
			model: "text-embedding-ada-002".to_string(),
			dimensions: 1536,
			timeout_ms: 10_000,
			default_headers: Map::new(),
		}
	}
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Cache {
	pub path: PathBuf,
}
impl Default for Cache {
	fn default() -> Self {
		Self { path: PathBuf::from("data/embeddings_cache.json") }
	}
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct Thresholds {
	/// Top scores below this flag the ranking as a fallback.
	pub fallback: f32,
	/// Top scores at or above this count as a confident hit.
	pub good_hit: f32,
}
impl Default for Thresholds {
	fn default() -> Self {
		Self { fallback: 0.35, good_hit: 0.70 }
	}
}
