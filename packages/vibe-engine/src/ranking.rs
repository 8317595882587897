use std::cmp::Ordering;

use serde::Serialize;

use vibe_domain::ProductCatalog;

use crate::{Error, Result};

/// One row of a ranked search outcome. Built fresh per query; copies the
/// matched product's fields so no catalog reference escapes.
#[derive(Clone, Debug, Serialize)]
pub struct RankedResult {
	/// 1-based, contiguous.
	pub rank: u32,
	pub product_id: u32,
	pub name: String,
	pub vibes: Vec<String>,
	/// Cosine similarity rescaled to [0, 1].
	pub similarity_score: f32,
	pub description: String,
}

/// Ranks the catalog against a query vector.
///
/// Scores are `(cosine + 1) / 2`, clamped to [0, 1]. The sort is stable and
/// descending, so equal scores keep catalog order (lower index ranks first)
/// and identical inputs reproduce identical rankings.
pub fn rank(
	query: &[f32],
	matrix: &[Vec<f32>],
	catalog: &ProductCatalog,
	top_k: u32,
) -> Result<Vec<RankedResult>> {
	if top_k == 0 || catalog.is_empty() {
		return Ok(Vec::new());
	}

	let mut scored = Vec::with_capacity(matrix.len());

	for (index, row) in matrix.iter().enumerate() {
		if row.len() != query.len() {
			return Err(Error::DimensionMismatch { query: query.len(), catalog: row.len() });
		}

		let score = ((cosine_similarity(query, row) + 1.0) / 2.0).clamp(0.0, 1.0);

		scored.push((index, score));
	}

	scored.sort_by(|left, right| cmp_f32_desc(left.1, right.1));

	let mut out = Vec::with_capacity((top_k as usize).min(scored.len()));

	for (position, (index, score)) in scored.into_iter().take(top_k as usize).enumerate() {
		let Some(product) = catalog.get(index) else { continue };

		out.push(RankedResult {
			rank: position as u32 + 1,
			product_id: product.id,
			name: product.name.clone(),
			vibes: product.vibes.clone(),
			similarity_score: score,
			description: product.description.clone(),
		});
	}

	Ok(out)
}

/// Zero-norm vectors compare as similarity 0 rather than dividing by zero.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
	let mut dot = 0.0_f64;
	let mut norm_a = 0.0_f64;
	let mut norm_b = 0.0_f64;

	for (x, y) in a.iter().zip(b) {
		let x = f64::from(*x);
		let y = f64::from(*y);

		dot += x * y;
		norm_a += x * x;
		norm_b += y * y;
	}

	let denom = norm_a.sqrt() * norm_b.sqrt();

	if denom <= f64::EPSILON {
		return 0.0;
	}

	(dot / denom) as f32
}

pub fn cmp_f32_desc(a: f32, b: f32) -> Ordering {
	match (a.is_nan(), b.is_nan()) {
		(true, true) => Ordering::Equal,
		(true, false) => Ordering::Greater,
		(false, true) => Ordering::Less,
		(false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
	}
}
