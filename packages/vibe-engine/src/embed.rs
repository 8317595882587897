use std::{
	collections::{HashMap, HashSet},
	fmt,
};

use vibe_config::EmbeddingProviderConfig;
use vibe_providers::{EmbeddingCache, synthetic_embedding};

use crate::EmbeddingProvider;

/// Which path produced the embeddings for a request. Surfaced to callers as
/// a human-readable status line, never used in control flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProviderStatus {
	Cached { hits: usize },
	Remote { fetched: usize },
	Synthetic { generated: usize, reason: String },
}
impl fmt::Display for ProviderStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Cached { hits } => write!(f, "Using {hits} cached embeddings."),
			Self::Remote { fetched } =>
				write!(f, "Embedded {fetched} texts via the remote provider."),
			Self::Synthetic { generated, reason } =>
				write!(f, "Generated {generated} synthetic embeddings ({reason})."),
		}
	}
}

/// Embeds `texts`, one row per input in input order.
///
/// Cached texts are served from the store; the rest go to the remote provider
/// when a key is configured, and to the deterministic synthetic generator
/// otherwise or on any provider failure. Provider and cache failures are
/// absorbed here: callers always get a full matrix back.
pub async fn embed_texts(
	provider: &dyn EmbeddingProvider,
	cfg: &EmbeddingProviderConfig,
	cache: &EmbeddingCache,
	texts: &[String],
) -> (Vec<Vec<f32>>, ProviderStatus) {
	let mut entries = cache.load();
	let mut seen = HashSet::new();
	let to_fetch: Vec<String> = texts
		.iter()
		.filter(|text| !entries.contains_key(*text) && seen.insert(*text))
		.cloned()
		.collect();

	let status = if to_fetch.is_empty() {
		ProviderStatus::Cached { hits: texts.len() }
	} else if cfg.api_key.is_some() {
		match provider.embed(cfg, &to_fetch).await {
			Ok(rows) if rows.len() == to_fetch.len() => {
				persist(cache, &mut entries, &to_fetch, rows);

				ProviderStatus::Remote { fetched: to_fetch.len() }
			},
			Ok(rows) => {
				tracing::warn!(
					expected = to_fetch.len(),
					got = rows.len(),
					"Remote provider returned a partial batch; falling back to synthetic embeddings.",
				);

				synthesize(cache, cfg, &mut entries, &to_fetch, "partial provider response")
			},
			Err(err) => {
				tracing::warn!(error = %err, "Remote embedding failed; falling back to synthetic embeddings.");

				synthesize(cache, cfg, &mut entries, &to_fetch, "remote provider error")
			},
		}
	} else {
		synthesize(cache, cfg, &mut entries, &to_fetch, "no api key configured")
	};

	let matrix = texts
		.iter()
		.map(|text| {
			entries
				.get(text)
				.cloned()
				.unwrap_or_else(|| synthetic_embedding(text, cfg.dimensions as usize))
		})
		.collect();

	(matrix, status)
}

fn synthesize(
	cache: &EmbeddingCache,
	cfg: &EmbeddingProviderConfig,
	entries: &mut HashMap<String, Vec<f32>>,
	to_fetch: &[String],
	reason: &str,
) -> ProviderStatus {
	let rows = to_fetch
		.iter()
		.map(|text| synthetic_embedding(text, cfg.dimensions as usize))
		.collect();

	persist(cache, entries, to_fetch, rows);

	ProviderStatus::Synthetic { generated: to_fetch.len(), reason: reason.to_string() }
}

fn persist(
	cache: &EmbeddingCache,
	entries: &mut HashMap<String, Vec<f32>>,
	texts: &[String],
	rows: Vec<Vec<f32>>,
) {
	let mut fresh = HashMap::with_capacity(texts.len());

	for (text, row) in texts.iter().zip(rows) {
		fresh.insert(text.clone(), row.clone());
		entries.insert(text.clone(), row);
	}

	// Embeddings are re-derivable, so a failed save degrades to a warning.
	if let Err(err) = cache.merge_save(&fresh) {
		tracing::warn!(path = ?cache.path(), error = %err, "Failed to persist embedding cache.");
	}
}
