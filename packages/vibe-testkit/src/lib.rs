mod error;

pub use error::{Error, Result};

use std::{
	env, fs,
	net::SocketAddr,
	path::{Path, PathBuf},
};

use axum::{Json, Router, http::StatusCode, routing::post};
use serde_json::Value;
use tokio::{net::TcpListener, task::JoinHandle};
use uuid::Uuid;

/// Unique temporary directory for a single test; removed on drop.
pub struct ScratchDir {
	path: PathBuf,
}
impl ScratchDir {
	pub fn new() -> Result<Self> {
		let path = env::temp_dir().join(format!("vibe_test_{}", Uuid::new_v4().simple()));

		fs::create_dir_all(&path)?;

		Ok(Self { path })
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn cache_path(&self) -> PathBuf {
		self.path.join("embeddings_cache.json")
	}
}
impl Drop for ScratchDir {
	fn drop(&mut self) {
		if let Err(err) = fs::remove_dir_all(&self.path) {
			eprintln!("Scratch directory cleanup failed: {err}.");
		}
	}
}

/// Canned behavior for [`StubEmbeddingServer`].
#[derive(Clone, Debug)]
pub enum StubResponse {
	/// Serve these rows as an OpenAI-shaped `data[].{index, embedding}` body.
	Vectors(Vec<Vec<f32>>),
	/// Respond with this HTTP status and an error body.
	Failure(u16),
	/// Respond 200 with a body missing the data array.
	Malformed,
}

/// Minimal embedding endpoint on an ephemeral local port, for exercising the
/// remote provider path and its fallback without a real backend.
pub struct StubEmbeddingServer {
	addr: SocketAddr,
	handle: JoinHandle<()>,
}
impl StubEmbeddingServer {
	pub async fn serve(response: StubResponse) -> Result<Self> {
		let listener = TcpListener::bind("127.0.0.1:0").await?;
		let addr = listener.local_addr()?;
		let app = Router::new()
			.route("/v1/embeddings", post(move || respond(response.clone())));
		let handle = tokio::spawn(async move {
			if let Err(err) = axum::serve(listener, app).await {
				eprintln!("Stub embedding server stopped: {err}.");
			}
		});

		Ok(Self { addr, handle })
	}

	/// Base URL to use as the provider `api_base`.
	pub fn url(&self) -> String {
		format!("http://{}", self.addr)
	}
}
impl Drop for StubEmbeddingServer {
	fn drop(&mut self) {
		self.handle.abort();
	}
}

async fn respond(response: StubResponse) -> (StatusCode, Json<Value>) {
	match response {
		StubResponse::Vectors(rows) => {
			let data: Vec<Value> = rows
				.iter()
				.enumerate()
				.map(|(index, embedding)| {
					serde_json::json!({ "index": index, "embedding": embedding })
				})
				.collect();

			(StatusCode::OK, Json(serde_json::json!({ "data": data })))
		},
		StubResponse::Failure(status) => (
			StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
			Json(serde_json::json!({ "error": { "message": "stub failure" } })),
		),
		StubResponse::Malformed =>
			(StatusCode::OK, Json(serde_json::json!({ "unexpected": true }))),
	}
}
