use trove_search::{RankingWeights, rank};
use trove_testkit::{
	StaticEmbeddingProvider, candidate, candidate_with_embedding, snapshot_meta,
};

fn default_weights() -> RankingWeights {
	RankingWeights::default()
}

#[tokio::test]
async fn blends_keyword_and_semantic_scores() {
	// Keyword score 20 (two occurrences), cosine 0.6 -> semantic 80:
	// 0.3 * min(20 / 2, 100) + 0.7 * 80 = 3 + 56 = 59.
	let provider =
		StaticEmbeddingProvider::new().with_vector("alpha", vec![1.0, 0.0]);
	let candidates = vec![candidate_with_embedding(
		"snapshot-one",
		&[],
		"alpha here and alpha there",
		&[0.6, 0.8],
	)];
	let results = rank("alpha", candidates, default_weights(), Some(&provider)).await;

	assert!(results.semantic);
	assert_eq!(results.hits.len(), 1);

	let hit = &results.hits[0];

	assert_eq!(hit.keyword_score, 20);
	assert!((hit.semantic_score - 80.0).abs() < 1e-9);
	assert!(hit.used_semantic);
	assert!(hit.has_embedding);
	assert!((hit.score - 59.0).abs() < 1e-9);
}

#[tokio::test]
async fn unavailable_provider_degrades_whole_call_to_keyword_search() {
	let provider = StaticEmbeddingProvider::unavailable();
	let candidates = vec![
		candidate_with_embedding("security-audit", &["security"], "", &[1.0, 0.0]),
		candidate("performance-test", &["perf"], "security in notes"),
	];
	let results = rank("security", candidates, default_weights(), Some(&provider)).await;

	assert!(!results.semantic);
	assert_eq!(results.hits.len(), 2);

	for hit in &results.hits {
		assert!(!hit.used_semantic);
		assert_eq!(hit.semantic_score, 0.0);
		// Keyword-only scores come through unweighted.
		assert_eq!(hit.score, f64::from(hit.keyword_score));
	}
}

#[tokio::test]
async fn failing_generation_degrades_like_unavailability() {
	// Available, but no scripted vector for the query text.
	let provider = StaticEmbeddingProvider::new();
	let candidates =
		vec![candidate_with_embedding("security-audit", &["security"], "", &[1.0, 0.0])];
	let results = rank("security", candidates, default_weights(), Some(&provider)).await;

	assert!(!results.semantic);
	assert_eq!(results.hits.len(), 1);
	assert!(!results.hits[0].used_semantic);
}

#[tokio::test]
async fn missing_embedding_falls_back_per_candidate() {
	let provider = StaticEmbeddingProvider::new().with_vector("security", vec![1.0, 0.0]);
	let candidates = vec![
		candidate_with_embedding("security-audit", &[], "", &[1.0, 0.0]),
		candidate("security-review", &[], ""),
	];
	let results = rank("security", candidates, default_weights(), Some(&provider)).await;

	assert!(results.semantic);
	assert_eq!(results.hits.len(), 2);

	let audit = results.hits.iter().find(|hit| hit.meta.topic == "security-audit").unwrap();
	let review = results.hits.iter().find(|hit| hit.meta.topic == "security-review").unwrap();

	assert!(audit.used_semantic);
	assert!(audit.has_embedding);
	assert!(!review.used_semantic);
	assert!(!review.has_embedding);
	assert_eq!(review.score, f64::from(review.keyword_score));
}

#[tokio::test]
async fn dimension_mismatch_falls_back_per_candidate() {
	let provider = StaticEmbeddingProvider::new().with_vector("security", vec![1.0, 0.0]);
	let candidates =
		vec![candidate_with_embedding("security-audit", &[], "", &[1.0, 0.0, 0.0])];
	let results = rank("security", candidates, default_weights(), Some(&provider)).await;

	assert!(results.semantic);
	assert_eq!(results.hits.len(), 1);
	assert!(!results.hits[0].used_semantic);
	assert!(results.hits[0].has_embedding);
	assert_eq!(results.hits[0].score, f64::from(results.hits[0].keyword_score));
}

#[tokio::test]
async fn corrupt_stored_embedding_is_skipped_not_fatal() {
	let provider = StaticEmbeddingProvider::new().with_vector("security", vec![1.0, 0.0]);
	let mut broken = candidate("security-audit", &[], "");

	// Ragged byte length cannot decode.
	broken.embedding = Some(vec![0xAB; 13]);

	let results = rank("security", vec![broken], default_weights(), Some(&provider)).await;

	assert_eq!(results.hits.len(), 1);
	assert!(!results.hits[0].used_semantic);
	assert!(results.hits[0].has_embedding);
}

#[tokio::test]
async fn excluded_candidates_never_surface() {
	let provider = StaticEmbeddingProvider::new().with_vector("cache -legacy", vec![1.0, 0.0]);
	let candidates = vec![
		candidate_with_embedding("cache-rework", &["legacy"], "legacy cache path", &[1.0, 0.0]),
		candidate("cache-tuning", &["cache"], "cache experiments"),
	];
	let results = rank("cache -legacy", candidates, default_weights(), Some(&provider)).await;

	assert_eq!(results.hits.len(), 1);
	assert_eq!(results.hits[0].meta.topic, "cache-tuning");
}

#[tokio::test]
async fn required_term_gates_candidates_without_it() {
	let candidates = vec![
		candidate("embedding-cache", &[], "ollama embedding notes"),
		candidate("embedding-docs", &[], "plenty of embedding mentions embedding embedding"),
	];
	let results = rank("+ollama embedding", candidates, default_weights(), None).await;

	assert_eq!(results.hits.len(), 1);
	assert_eq!(results.hits[0].meta.topic, "embedding-cache");
}

#[tokio::test]
async fn semantic_signal_alone_can_surface_a_hit() {
	// No keyword overlap at all, but a close embedding: the blended score
	// is positive, so the hit stays in.
	let provider = StaticEmbeddingProvider::new().with_vector("vector recall", vec![1.0, 0.0]);
	let candidates =
		vec![candidate_with_embedding("unrelated-topic", &[], "nothing lexical", &[1.0, 0.0])];
	let results = rank("vector recall", candidates, default_weights(), Some(&provider)).await;

	assert_eq!(results.hits.len(), 1);

	let hit = &results.hits[0];

	assert_eq!(hit.keyword_score, 0);
	assert!(hit.used_semantic);
	assert!((hit.semantic_score - 100.0).abs() < 1e-9);
	assert!((hit.score - 70.0).abs() < 1e-9);
}

#[tokio::test]
async fn empty_query_matches_nothing() {
	let candidates = vec![candidate("anything", &["tag"], "notes")];
	let results = rank("", candidates, default_weights(), None).await;

	assert!(results.hits.is_empty());
}

#[tokio::test]
async fn results_sort_descending_with_stable_ties() {
	let candidates = vec![
		candidate("cache-one", &[], "cache"),
		candidate("cache-two", &[], "cache"),
		candidate("cache-three", &["cache"], "cache cache"),
	];
	let results = rank("cache", candidates, default_weights(), None).await;

	assert_eq!(results.hits.len(), 3);
	// cache-three scores highest; one and two tie and keep input order.
	assert_eq!(results.hits[0].meta.topic, "cache-three");
	assert_eq!(results.hits[1].meta.topic, "cache-one");
	assert_eq!(results.hits[2].meta.topic, "cache-two");
	assert_eq!(results.hits[1].score, results.hits[2].score);
}

#[tokio::test]
async fn keyword_scores_match_expected_breakdown() {
	let candidates = vec![
		candidate("security-audit", &["security"], ""),
		candidate("performance-test", &["perf"], ""),
	];
	let results = rank("security", candidates, default_weights(), None).await;

	assert_eq!(results.hits.len(), 1);

	let hit = &results.hits[0];

	assert_eq!(hit.meta.topic, "security-audit");
	// Two blob occurrences (topic + tag list), topic bonus, tag bonus.
	assert!(hit.keyword_score >= 60);
	assert!(!hit.used_semantic);
}

#[tokio::test]
async fn hybrid_keyword_normalization_caps_at_one_hundred() {
	// Keyword score 300 normalizes to min(150, 100) = 100.
	let notes = "alpha ".repeat(30);
	let provider = StaticEmbeddingProvider::new().with_vector("alpha", vec![1.0, 0.0]);
	let candidates =
		vec![candidate_with_embedding("snapshot-one", &[], notes.trim(), &[1.0, 0.0])];
	let results = rank("alpha", candidates, default_weights(), Some(&provider)).await;
	let hit = &results.hits[0];

	assert_eq!(hit.keyword_score, 300);
	assert!((hit.score - (0.3 * 100.0 + 0.7 * 100.0)).abs() < 1e-9);
}

#[tokio::test]
async fn topic_fixture_round_trips_through_metadata() {
	let meta = snapshot_meta("fixture-topic", &["one"], "notes");

	assert_eq!(meta.topic, "fixture-topic");
	assert_eq!(meta.tags, vec!["one".to_string()]);
}
