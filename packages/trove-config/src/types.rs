use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
	pub log_level: String,
	pub snapshot: Snapshot,
	pub retention: Retention,
	pub embeddings: Embeddings,
	pub search: SearchWeights,
}
impl Default for Config {
	fn default() -> Self {
		Self {
			log_level: "info".to_string(),
			snapshot: Snapshot::default(),
			retention: Retention::default(),
			embeddings: Embeddings::default(),
			search: SearchWeights::default(),
		}
	}
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Snapshot {
	pub default_mode: String,
	pub research_dir: String,
}
impl Default for Snapshot {
	fn default() -> Self {
		Self { default_mode: "full".to_string(), research_dir: "research".to_string() }
	}
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Retention {
	pub days: u32,
	pub preserve_tags: Vec<String>,
}
impl Default for Retention {
	fn default() -> Self {
		Self { days: 30, preserve_tags: Vec::new() }
	}
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Embeddings {
	pub enabled: bool,
	pub api_base: String,
	pub model: String,
	pub dimensions: u32,
	pub timeout_ms: u64,
	pub probe_timeout_ms: u64,
}
impl Default for Embeddings {
	fn default() -> Self {
		Self {
			enabled: true,
			api_base: "http://localhost:11434".to_string(),
			model: "nomic-embed-text".to_string(),
			dimensions: 768,
			timeout_ms: 30_000,
			probe_timeout_ms: 2_000,
		}
	}
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SearchWeights {
	pub keyword_weight: f64,
	pub semantic_weight: f64,
}
impl Default for SearchWeights {
	fn default() -> Self {
		Self { keyword_weight: 0.3, semantic_weight: 0.7 }
	}
}
