use vibe_config::Thresholds;

/// Classification of a ranking by its best score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
	/// Top score at or above the good-hit threshold.
	Confident,
	/// Between the two thresholds. Usable, nothing to flag.
	Acceptable,
	/// Top score below the fallback threshold. The ranking is still returned,
	/// with guidance attached; a weak match is an outcome, not a failure.
	Fallback,
}

pub fn classify(top_score: f32, thresholds: &Thresholds) -> Outcome {
	if top_score < thresholds.fallback {
		Outcome::Fallback
	} else if top_score >= thresholds.good_hit {
		Outcome::Confident
	} else {
		Outcome::Acceptable
	}
}

pub fn guidance(top_score: f32, thresholds: &Thresholds) -> String {
	format!(
		"No strong match found (top score: {top_score:.3}, threshold: {:.2}). \
		Try adding more specific vibe hints, e.g. 'minimal, streetwear, sustainable', \
		'boho, earthy, festival vibes', or 'cozy, soft, loungewear comfort'.",
		thresholds.fallback,
	)
}
