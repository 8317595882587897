#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryRejectReason {
	/// Empty or whitespace-only input.
	Empty,
	/// Fewer than two whitespace-separated tokens. Single-word queries are too
	/// underspecified to embed meaningfully.
	TooShort,
}

/// Gate applied before any embedding work. Rejected queries never reach the
/// provider.
pub fn validate_query(query: &str) -> Result<(), QueryRejectReason> {
	let trimmed = query.trim();

	if trimmed.is_empty() {
		return Err(QueryRejectReason::Empty);
	}
	if trimmed.split_whitespace().count() < 2 {
		return Err(QueryRejectReason::TooShort);
	}

	Ok(())
}

pub fn is_searchable(query: &str) -> bool {
	validate_query(query).is_ok()
}
