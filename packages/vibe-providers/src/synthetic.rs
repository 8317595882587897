//! Deterministic synthetic embeddings for offline runs.
//!
//! When no embedding backend is reachable, each text gets a pseudo-random
//! unit vector derived from its content. The derivation is an explicit,
//! fixed algorithm (BLAKE3 extended output over the UTF-8 bytes, Box-Muller
//! for the normal draws) so the same text yields bit-identical vectors on
//! every platform and across process restarts.

use blake3::OutputReader;

pub fn synthetic_embedding(text: &str, dimensions: usize) -> Vec<f32> {
	let mut hasher = blake3::Hasher::new();

	hasher.update(text.as_bytes());

	let mut reader = hasher.finalize_xof();
	let mut out = Vec::with_capacity(dimensions);

	while out.len() < dimensions {
		let (z0, z1) = normal_pair(&mut reader);

		out.push(z0);

		if out.len() < dimensions {
			out.push(z1);
		}
	}

	l2_normalize(&mut out);

	out
}

fn normal_pair(reader: &mut OutputReader) -> (f32, f32) {
	let u1 = uniform_open(reader);
	let u2 = uniform_open(reader);
	let radius = (-2.0 * u1.ln()).sqrt();
	let theta = 2.0 * std::f64::consts::PI * u2;

	((radius * theta.cos()) as f32, (radius * theta.sin()) as f32)
}

/// Uniform draw in (0, 1], so `ln` stays finite.
fn uniform_open(reader: &mut OutputReader) -> f64 {
	let mut bytes = [0_u8; 8];

	reader.fill(&mut bytes);

	let raw = u64::from_le_bytes(bytes);

	((raw >> 11) as f64 + 1.0) / (1_u64 << 53) as f64
}

fn l2_normalize(vec: &mut [f32]) {
	let norm = vec.iter().map(|v| f64::from(*v) * f64::from(*v)).sum::<f64>().sqrt();

	if norm <= f64::EPSILON {
		return;
	}

	for value in vec.iter_mut() {
		*value = (f64::from(*value) / norm) as f32;
	}
}
