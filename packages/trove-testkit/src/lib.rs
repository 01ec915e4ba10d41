use std::collections::HashMap;

use time::OffsetDateTime;

use trove_domain::{SnapshotMeta, SnapshotMode};
use trove_search::{BoxFuture, Candidate, EmbeddingProvider};

/// Scripted [`EmbeddingProvider`]: a fixed text-to-vector table plus an
/// availability switch. Texts outside the table fail generation, which lets
/// tests exercise every degradation path without a live service.
pub struct StaticEmbeddingProvider {
	available: bool,
	vectors: HashMap<String, Vec<f64>>,
}
impl StaticEmbeddingProvider {
	pub fn new() -> Self {
		Self { available: true, vectors: HashMap::new() }
	}

	pub fn unavailable() -> Self {
		Self { available: false, vectors: HashMap::new() }
	}

	pub fn with_vector(mut self, text: &str, vector: Vec<f64>) -> Self {
		self.vectors.insert(text.to_string(), vector);

		self
	}
}
impl Default for StaticEmbeddingProvider {
	fn default() -> Self {
		Self::new()
	}
}
impl EmbeddingProvider for StaticEmbeddingProvider {
	fn is_available<'a>(&'a self) -> BoxFuture<'a, bool> {
		Box::pin(async move { self.available })
	}

	fn embed<'a>(&'a self, text: &'a str) -> BoxFuture<'a, color_eyre::Result<Vec<f64>>> {
		Box::pin(async move {
			self.vectors
				.get(text)
				.cloned()
				.ok_or_else(|| color_eyre::eyre::eyre!("No scripted embedding for {text:?}."))
		})
	}
}

/// Minimal snapshot metadata fixture; fields the scorer reads are the
/// parameters, the rest take fixed filler values.
pub fn snapshot_meta(topic: &str, tags: &[&str], notes: &str) -> SnapshotMeta {
	SnapshotMeta {
		created_at: OffsetDateTime::UNIX_EPOCH,
		topic: topic.to_string(),
		root: "/repo".to_string(),
		mode: SnapshotMode::Full,
		related_branch: None,
		main_commit: "abc1234".to_string(),
		tags: tags.iter().map(|tag| tag.to_string()).collect(),
		embedding: None,
		notes: (!notes.is_empty()).then(|| notes.to_string()),
		tree_hash: None,
	}
}

/// Candidate without stored embedding bytes.
pub fn candidate(topic: &str, tags: &[&str], notes: &str) -> Candidate {
	Candidate { meta: snapshot_meta(topic, tags, notes), embedding: None }
}

/// Candidate whose stored embedding is `vector`, encoded the way the
/// snapshot store writes it.
pub fn candidate_with_embedding(
	topic: &str,
	tags: &[&str],
	notes: &str,
	vector: &[f64],
) -> Candidate {
	let mut meta = snapshot_meta(topic, tags, notes);

	meta.embedding = Some("notes.embedding".to_string());

	Candidate {
		meta,
		embedding: Some(trove_embeddings::encode(vector).expect("fixture vector must be non-empty")),
	}
}
