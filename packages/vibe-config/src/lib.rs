mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Cache, Config, EmbeddingProviderConfig, Engine, Thresholds};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.engine.top_k == 0 {
		return Err(Error::Validation {
			message: "engine.top_k must be greater than zero.".to_string(),
		});
	}
	if cfg.provider.dimensions == 0 {
		return Err(Error::Validation {
			message: "provider.dimensions must be greater than zero.".to_string(),
		});
	}
	if cfg.provider.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "provider.timeout_ms must be greater than zero.".to_string(),
		});
	}
	if cfg.provider.api_key.is_some() {
		for (label, value) in [
			("provider.api_base", &cfg.provider.api_base),
			("provider.path", &cfg.provider.path),
			("provider.model", &cfg.provider.model),
		] {
			if value.trim().is_empty() {
				return Err(Error::Validation {
					message: format!("{label} must be non-empty when an api_key is set."),
				});
			}
		}
	}
	if cfg.cache.path.as_os_str().is_empty() {
		return Err(Error::Validation { message: "cache.path must be non-empty.".to_string() });
	}

	for (label, value) in
		[("thresholds.fallback", cfg.thresholds.fallback), ("thresholds.good_hit", cfg.thresholds.good_hit)]
	{
		if !value.is_finite() {
			return Err(Error::Validation {
				message: format!("{label} must be a finite number."),
			});
		}
		if !(0.0..=1.0).contains(&value) {
			return Err(Error::Validation {
				message: format!("{label} must be in the range 0.0-1.0."),
			});
		}
	}

	if cfg.thresholds.fallback >= cfg.thresholds.good_hit {
		return Err(Error::Validation {
			message: "thresholds.fallback must be less than thresholds.good_hit.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	if cfg.provider.api_key.as_deref().map(|key| key.trim().is_empty()).unwrap_or(false) {
		cfg.provider.api_key = None;
	}
}
