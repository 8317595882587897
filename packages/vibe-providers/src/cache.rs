use std::{
	collections::HashMap,
	fs, io,
	path::{Path, PathBuf},
	sync::Mutex,
};

use crate::Result;

/// Durable normalized-text -> embedding store, a JSON object on disk.
///
/// The file outlives any single engine instance. An absent or unreadable
/// file is treated as an empty cache rather than an error: embeddings are
/// always re-derivable, so availability wins over durability here.
pub struct EmbeddingCache {
	path: PathBuf,
	write_lock: Mutex<()>,
}
impl EmbeddingCache {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into(), write_lock: Mutex::new(()) }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn load(&self) -> HashMap<String, Vec<f32>> {
		let raw = match fs::read_to_string(&self.path) {
			Ok(raw) => raw,
			Err(err) if err.kind() == io::ErrorKind::NotFound => return HashMap::new(),
			Err(err) => {
				tracing::warn!(path = ?self.path, error = %err, "Embedding cache is unreadable; starting empty.");

				return HashMap::new();
			},
		};

		match serde_json::from_str(&raw) {
			Ok(entries) => entries,
			Err(err) => {
				tracing::warn!(path = ?self.path, error = %err, "Embedding cache is corrupt; starting empty.");

				HashMap::new()
			},
		}
	}

	/// Persists the full mapping, overwriting prior contents. Creates the
	/// containing directory if absent.
	pub fn save(&self, entries: &HashMap<String, Vec<f32>>) -> Result<()> {
		if let Some(parent) = self.path.parent()
			&& !parent.as_os_str().is_empty()
		{
			fs::create_dir_all(parent)?;
		}

		let raw = serde_json::to_string(entries)?;

		fs::write(&self.path, raw)?;

		Ok(())
	}

	/// Single-writer load-merge-save. Concurrent embed calls that miss the
	/// cache for different texts cannot clobber each other's insertions, and
	/// previously cached entries are never lost.
	pub fn merge_save(&self, entries: &HashMap<String, Vec<f32>>) -> Result<()> {
		let _guard = self.write_lock.lock().unwrap_or_else(|err| err.into_inner());
		let mut merged = self.load();

		for (key, vector) in entries {
			merged.insert(key.clone(), vector.clone());
		}

		self.save(&merged)
	}
}
