/// Canonicalizes free text before it is embedded or used as a cache key.
///
/// Trims, lowercases, collapses whitespace runs to a single space, and strips
/// characters outside the printable ASCII range. Idempotent, so normalized
/// text can be normalized again without changing.
pub fn normalize(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	let mut pending_space = false;

	for ch in text.trim().chars() {
		if ch.is_whitespace() {
			pending_space = true;

			continue;
		}

		let ch = ch.to_ascii_lowercase();

		if !('\u{20}'..='\u{7e}').contains(&ch) {
			continue;
		}
		if pending_space && !out.is_empty() {
			out.push(' ');
		}

		pending_space = false;

		out.push(ch);
	}

	out
}
