use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::{
	EmbeddingProvider,
	lexical::{self, LexicalVerdict},
	query,
};
use trove_domain::SnapshotMeta;

/// One searchable snapshot: its metadata plus the raw stored embedding
/// bytes, when the branch carries them. Where the bytes come from is the
/// caller's business.
#[derive(Debug, Clone)]
pub struct Candidate {
	pub meta: SnapshotMeta,
	pub embedding: Option<Vec<u8>>,
}

/// Blend weights for hybrid scoring. Passed explicitly into every ranking
/// call; there is no process-wide search state.
#[derive(Debug, Clone, Copy)]
pub struct RankingWeights {
	pub keyword_weight: f64,
	pub semantic_weight: f64,
}
impl Default for RankingWeights {
	fn default() -> Self {
		Self { keyword_weight: 0.3, semantic_weight: 0.7 }
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
	pub meta: SnapshotMeta,
	pub score: f64,
	pub keyword_score: u32,
	pub semantic_score: f64,
	pub has_embedding: bool,
	pub used_semantic: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedResults {
	pub trace_id: Uuid,
	/// True when the whole call ran with a query embedding; individual hits
	/// may still have fallen back to keyword-only scoring.
	pub semantic: bool,
	pub hits: Vec<SearchHit>,
}

/// Ranks `candidates` against `raw_query`, blending keyword and semantic
/// scores when embeddings are usable. Never fails: provider outages,
/// missing or corrupt stored embeddings, and dimension mismatches all
/// degrade to keyword-only scoring at the narrowest scope possible.
pub async fn rank(
	raw_query: &str,
	candidates: Vec<Candidate>,
	weights: RankingWeights,
	provider: Option<&dyn EmbeddingProvider>,
) -> RankedResults {
	let parsed = query::parse_query(raw_query);
	// One provider round-trip per call, before the per-candidate loop.
	let query_embedding = fetch_query_embedding(raw_query, provider).await;
	let mut hits = Vec::new();

	for candidate in candidates {
		let keyword_score = match lexical::score(&parsed, &candidate.meta) {
			LexicalVerdict::Excluded => continue,
			LexicalVerdict::Scored(score) => score,
		};
		let has_embedding = candidate.embedding.is_some();
		let mut semantic_score = 0.0;
		let mut used_semantic = false;

		if let (Some(query_vector), Some(bytes)) =
			(query_embedding.as_deref(), candidate.embedding.as_deref())
			&& let Some(similarity) = stored_similarity(query_vector, bytes, &candidate.meta.topic)
		{
			// Rescale cosine output from [-1, 1] into score space [0, 100].
			semantic_score = (similarity + 1.0) * 50.0;
			used_semantic = true;
		}

		let score = if used_semantic {
			let normalized_keyword = (f64::from(keyword_score) / 2.0).min(100.0);

			weights.keyword_weight * normalized_keyword + weights.semantic_weight * semantic_score
		} else {
			f64::from(keyword_score)
		};

		// A nonzero keyword score keeps a hit alive even when weighting
		// rounds the blended score down to zero.
		if score > 0.0 || keyword_score > 0 {
			hits.push(SearchHit {
				meta: candidate.meta,
				score,
				keyword_score,
				semantic_score,
				has_embedding,
				used_semantic,
			});
		}
	}

	// Stable: equal scores keep their input order.
	hits.sort_by(|left, right| cmp_f64_desc(left.score, right.score));

	RankedResults { trace_id: Uuid::new_v4(), semantic: query_embedding.is_some(), hits }
}

async fn fetch_query_embedding(
	raw_query: &str,
	provider: Option<&dyn EmbeddingProvider>,
) -> Option<Vec<f64>> {
	let provider = provider?;

	if !provider.is_available().await {
		return None;
	}

	match provider.embed(raw_query).await {
		Ok(vector) if !vector.is_empty() => Some(vector),
		Ok(_) => {
			warn!("Embedding provider returned an empty query vector; using keyword search only.");

			None
		},
		Err(err) => {
			warn!(error = %err, "Query embedding failed; using keyword search only.");

			None
		},
	}
}

fn stored_similarity(query_vector: &[f64], bytes: &[u8], topic: &str) -> Option<f64> {
	let stored = match trove_embeddings::decode(bytes) {
		Ok(stored) => stored,
		Err(err) => {
			warn!(topic = %topic, error = %err, "Skipping corrupt stored embedding.");

			return None;
		},
	};

	if stored.len() != query_vector.len() {
		warn!(
			topic = %topic,
			stored = stored.len(),
			query = query_vector.len(),
			"Skipping stored embedding with mismatched dimensions.",
		);

		return None;
	}

	match trove_embeddings::cosine_similarity(query_vector, &stored) {
		Ok(similarity) => Some(similarity),
		Err(err) => {
			warn!(topic = %topic, error = %err, "Skipping stored embedding; similarity failed.");

			None
		},
	}
}

fn cmp_f64_desc(a: f64, b: f64) -> Ordering {
	match (a.is_nan(), b.is_nan()) {
		(true, true) => Ordering::Equal,
		(true, false) => Ordering::Greater,
		(false, true) => Ordering::Less,
		(false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
	}
}
