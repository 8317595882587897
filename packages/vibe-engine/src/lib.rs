pub mod embed;
pub mod policy;
pub mod ranking;
pub mod search;

mod error;

pub use embed::{ProviderStatus, embed_texts};
pub use error::{Error, Result};
pub use policy::Outcome;
pub use ranking::RankedResult;
pub use search::{Engine, MetricsSummary, SearchResponse};

use std::{future::Future, pin::Pin};

use vibe_config::EmbeddingProviderConfig;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Seam over the embedding backend. The production implementation calls the
/// remote HTTP provider; tests inject their own.
pub trait EmbeddingProvider
where
	Self: Send + Sync,
{
	fn embed<'a>(
		&'a self,
		cfg: &'a EmbeddingProviderConfig,
		texts: &'a [String],
	) -> BoxFuture<'a, vibe_providers::Result<Vec<Vec<f32>>>>;
}

pub struct RemoteProvider;
impl EmbeddingProvider for RemoteProvider {
	fn embed<'a>(
		&'a self,
		cfg: &'a EmbeddingProviderConfig,
		texts: &'a [String],
	) -> BoxFuture<'a, vibe_providers::Result<Vec<Vec<f32>>>> {
		Box::pin(vibe_providers::embedding::embed(cfg, texts))
	}
}
