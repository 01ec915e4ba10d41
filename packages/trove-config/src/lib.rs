mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Embeddings, Retention, SearchWeights, Snapshot};

use std::{fs, path::Path};

const MODE_LABELS: [&str; 4] = ["full", "research-only", "diff", "poc"];

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
	if cfg.log_level.trim().is_empty() {
		return Err(Error::Validation { message: "log_level must be non-empty.".to_string() });
	}
	if !MODE_LABELS.contains(&cfg.snapshot.default_mode.as_str()) {
		return Err(Error::Validation {
			message: "snapshot.default_mode must be one of full, research-only, diff, or poc."
				.to_string(),
		});
	}
	if cfg.snapshot.research_dir.trim().is_empty() {
		return Err(Error::Validation {
			message: "snapshot.research_dir must be non-empty.".to_string(),
		});
	}
	if cfg.embeddings.api_base.trim().is_empty() {
		return Err(Error::Validation {
			message: "embeddings.api_base must be non-empty.".to_string(),
		});
	}
	if cfg.embeddings.model.trim().is_empty() {
		return Err(Error::Validation { message: "embeddings.model must be non-empty.".to_string() });
	}
	if cfg.embeddings.dimensions == 0 {
		return Err(Error::Validation {
			message: "embeddings.dimensions must be greater than zero.".to_string(),
		});
	}
	if cfg.embeddings.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "embeddings.timeout_ms must be greater than zero.".to_string(),
		});
	}
	if cfg.embeddings.probe_timeout_ms == 0 {
		return Err(Error::Validation {
			message: "embeddings.probe_timeout_ms must be greater than zero.".to_string(),
		});
	}

	for (label, weight) in [
		("search.keyword_weight", cfg.search.keyword_weight),
		("search.semantic_weight", cfg.search.semantic_weight),
	] {
		if !weight.is_finite() {
			return Err(Error::Validation { message: format!("{label} must be a finite number.") });
		}
		if weight < 0.0 {
			return Err(Error::Validation { message: format!("{label} must be zero or greater.") });
		}
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	cfg.snapshot.default_mode = cfg.snapshot.default_mode.trim().to_string();
	cfg.embeddings.api_base = cfg.embeddings.api_base.trim().trim_end_matches('/').to_string();
	cfg.retention.preserve_tags.retain(|tag| !tag.trim().is_empty());
}

/// True when a snapshot carrying `tags` is pinned by retention config and
/// must never be pruned.
pub fn should_preserve(cfg: &Config, tags: &[String]) -> bool {
	tags.iter().any(|tag| cfg.retention.preserve_tags.iter().any(|preserve| preserve == tag))
}
