use std::sync::Arc;

use serde::Serialize;

use vibe_config::{Config, Thresholds};
use vibe_domain::{ProductCatalog, QueryRejectReason, normalize, validate_query};
use vibe_providers::EmbeddingCache;

use crate::{
	EmbeddingProvider, Error, ProviderStatus, RankedResult, Result, embed::embed_texts, policy,
	ranking,
};

/// Owns the catalog and its precomputed embedding matrix for its lifetime.
/// Both are immutable after construction, so an engine can be shared across
/// threads; the embedding cache serializes its own writes.
pub struct Engine {
	config: Config,
	catalog: ProductCatalog,
	matrix: Vec<Vec<f32>>,
	cache: EmbeddingCache,
	provider: Arc<dyn EmbeddingProvider>,
	init_status: ProviderStatus,
}
impl Engine {
	pub async fn new(
		config: Config,
		catalog: ProductCatalog,
		provider: Arc<dyn EmbeddingProvider>,
	) -> Self {
		let cache = EmbeddingCache::new(config.cache.path.clone());
		let texts = catalog.normalized_descriptions();
		let (matrix, init_status) =
			embed_texts(provider.as_ref(), &config.provider, &cache, &texts).await;

		tracing::info!(
			products = catalog.len(),
			status = %init_status,
			"Catalog embedding matrix ready.",
		);

		Self { config, catalog, matrix, cache, provider, init_status }
	}

	pub fn catalog(&self) -> &ProductCatalog {
		&self.catalog
	}

	pub fn thresholds(&self) -> &Thresholds {
		&self.config.thresholds
	}

	/// How the catalog matrix was produced at startup.
	pub fn init_status(&self) -> &ProviderStatus {
		&self.init_status
	}

	/// Full query pipeline: validate, normalize, embed, rank, classify.
	///
	/// Provider and cache failures are degraded inside `embed_texts`; the only
	/// errors surfaced here are malformed queries and the dimension invariant.
	pub async fn search(&self, query: &str, top_k: Option<u32>) -> Result<SearchResponse> {
		validate_query(query).map_err(|reason| Error::InvalidQuery {
			message: match reason {
				QueryRejectReason::Empty =>
					"Empty query. Enter at least two descriptive words.".to_string(),
				QueryRejectReason::TooShort =>
					"Query too short. Enter at least two descriptive words.".to_string(),
			},
		})?;

		let normalized = normalize(query);
		let (rows, status) = embed_texts(
			self.provider.as_ref(),
			&self.config.provider,
			&self.cache,
			std::slice::from_ref(&normalized),
		)
		.await;
		let query_vector = rows.into_iter().next().unwrap_or_default();
		let top_k = top_k.unwrap_or(self.config.engine.top_k);
		let results = ranking::rank(&query_vector, &self.matrix, &self.catalog, top_k)?;
		let top_score = results.first().map(|result| result.similarity_score).unwrap_or(0.0);
		let is_fallback =
			policy::classify(top_score, &self.config.thresholds) == policy::Outcome::Fallback;
		let guidance = is_fallback.then(|| policy::guidance(top_score, &self.config.thresholds));

		Ok(SearchResponse { results, is_fallback, guidance, provider_status: status.to_string() })
	}

	pub fn metrics(&self, results: &[RankedResult]) -> MetricsSummary {
		MetricsSummary::from_results(results, &self.config.thresholds)
	}
}

#[derive(Clone, Debug, Serialize)]
pub struct SearchResponse {
	pub results: Vec<RankedResult>,
	pub is_fallback: bool,
	/// Present only when the ranking fell below the fallback threshold.
	pub guidance: Option<String>,
	pub provider_status: String,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct MetricsSummary {
	pub top_score: f32,
	pub avg_score: f32,
	pub good_hits: usize,
	pub total: usize,
}
impl MetricsSummary {
	pub fn from_results(results: &[RankedResult], thresholds: &Thresholds) -> Self {
		if results.is_empty() {
			return Self { top_score: 0.0, avg_score: 0.0, good_hits: 0, total: 0 };
		}

		let scores: Vec<f32> = results.iter().map(|result| result.similarity_score).collect();
		let top_score = scores.iter().copied().fold(0.0_f32, f32::max);
		let avg_score = scores.iter().copied().sum::<f32>() / scores.len() as f32;
		let good_hits = scores.iter().filter(|score| **score >= thresholds.good_hit).count();

		Self { top_score, avg_score, good_hits, total: results.len() }
	}
}
