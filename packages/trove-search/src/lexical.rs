use crate::query::ParsedQuery;
use trove_domain::SnapshotMeta;

const OCCURRENCE_POINTS: u32 = 10;
const TOPIC_BONUS: u32 = 50;
const TAG_BONUS: u32 = 30;
const PHRASE_BONUS: u32 = 100;
const PHRASE_TOPIC_BONUS: u32 = 150;

/// Either the candidate is gated out of the result set entirely, or it
/// carries a keyword score. Keeps "score 0" distinct from "excluded".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexicalVerdict {
	Excluded,
	Scored(u32),
}

/// The lowercase blob substring checks run against. Tags render as
/// `[tag1 tag2]`; the bracketed single-space join is a stored-behavior
/// contract, so queries that matched the rendered list keep matching.
pub fn searchable_text(meta: &SnapshotMeta) -> String {
	format!(
		"{} {} {} [{}]",
		meta.topic,
		meta.notes.as_deref().unwrap_or(""),
		meta.related_branch.as_deref().unwrap_or(""),
		meta.tags.join(" "),
	)
	.to_lowercase()
}

/// Scores one candidate against a parsed query. Gate order is fixed:
/// excluded terms, then required terms, then phrases; only candidates that
/// pass all three accumulate points.
pub fn score(query: &ParsedQuery, meta: &SnapshotMeta) -> LexicalVerdict {
	let blob = searchable_text(meta);

	for term in &query.excluded {
		if blob.contains(term.as_str()) {
			return LexicalVerdict::Excluded;
		}
	}
	for term in &query.required {
		if !blob.contains(term.as_str()) {
			return LexicalVerdict::Excluded;
		}
	}
	for phrase in &query.phrases {
		if !blob.contains(phrase.as_str()) {
			return LexicalVerdict::Excluded;
		}
	}

	let topic = meta.topic.to_lowercase();
	let mut total = 0_u32;

	// Required terms gate admission above and still count toward the score.
	for term in query.normal.iter().chain(&query.required) {
		total += OCCURRENCE_POINTS * blob.matches(term.as_str()).count() as u32;

		if topic.contains(term.as_str()) {
			total += TOPIC_BONUS;
		}

		for tag in &meta.tags {
			if tag.to_lowercase().contains(term.as_str()) {
				total += TAG_BONUS;
			}
		}
	}
	for phrase in &query.phrases {
		if blob.contains(phrase.as_str()) {
			total += PHRASE_BONUS;
		}
		if topic.contains(phrase.as_str()) {
			total += PHRASE_TOPIC_BONUS;
		}
	}

	LexicalVerdict::Scored(total)
}
