use std::{
	fs,
	path::{Path, PathBuf},
};

use clap::Parser;
use color_eyre::eyre::WrapErr;
use serde::Deserialize;
use time::macros::format_description;
use tracing_subscriber::EnvFilter;

use trove_config::Config;
use trove_domain::SnapshotMeta;
use trove_search::{
	BoxFuture, Candidate, EmbeddingProvider, RankedResults, RankingWeights, rank,
};

#[derive(Debug, Parser)]
#[command(
	version = trove_cli::VERSION,
	rename_all = "kebab",
	styles = trove_cli::styles(),
)]
pub struct Args {
	/// Search query. Supports +required and -excluded terms and
	/// "exact phrases".
	pub query: String,
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: Option<PathBuf>,
	/// JSON file listing the candidate snapshot records to search.
	#[arg(long, short = 'r', value_name = "FILE")]
	pub records: PathBuf,
	/// Only consider records with exactly this topic.
	#[arg(long, value_name = "TOPIC")]
	pub topic: Option<String>,
	/// Emit the ranked results as JSON instead of a listing.
	#[arg(long)]
	pub json: bool,
}

/// One entry of the records file: stored snapshot metadata plus an optional
/// path to its embedding file.
#[derive(Debug, Deserialize)]
struct RecordEntry {
	meta: SnapshotMeta,
	#[serde(default)]
	embedding_file: Option<PathBuf>,
}

struct HttpEmbeddingProvider {
	cfg: trove_config::Embeddings,
}
impl EmbeddingProvider for HttpEmbeddingProvider {
	fn is_available<'a>(&'a self) -> BoxFuture<'a, bool> {
		Box::pin(trove_providers::embedding::is_available(&self.cfg))
	}

	fn embed<'a>(&'a self, text: &'a str) -> BoxFuture<'a, color_eyre::Result<Vec<f64>>> {
		Box::pin(async move { Ok(trove_providers::embedding::embed(&self.cfg, text).await?) })
	}
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let cfg = match args.config.as_deref() {
		Some(path) => trove_config::load(path)?,
		None => Config::default(),
	};
	let filter = EnvFilter::new(cfg.log_level.clone());

	tracing_subscriber::fmt().with_env_filter(filter).init();

	let candidates = load_candidates(&args.records, args.topic.as_deref())?;
	let weights = RankingWeights {
		keyword_weight: cfg.search.keyword_weight,
		semantic_weight: cfg.search.semantic_weight,
	};
	let provider = cfg
		.embeddings
		.enabled
		.then(|| HttpEmbeddingProvider { cfg: cfg.embeddings.clone() });
	let provider_ref = provider.as_ref().map(|provider| provider as &dyn EmbeddingProvider);
	let results = rank(&args.query, candidates, weights, provider_ref).await;

	if args.json {
		println!("{}", serde_json::to_string_pretty(&results)?);
	} else {
		print_listing(&results);
	}

	Ok(())
}

fn load_candidates(path: &Path, topic: Option<&str>) -> color_eyre::Result<Vec<Candidate>> {
	let raw = fs::read_to_string(path)
		.wrap_err_with(|| format!("Failed to read records file at {path:?}."))?;
	let entries: Vec<RecordEntry> = serde_json::from_str(&raw)
		.wrap_err_with(|| format!("Failed to parse records file at {path:?}."))?;
	let mut out = Vec::with_capacity(entries.len());

	for entry in entries {
		if let Some(topic) = topic
			&& entry.meta.topic != topic
		{
			continue;
		}

		let embedding = entry.embedding_file.and_then(|file| match fs::read(&file) {
			Ok(bytes) => Some(bytes),
			Err(err) => {
				tracing::warn!(
					path = %file.display(),
					error = %err,
					"Skipping unreadable embedding file.",
				);

				None
			},
		});

		out.push(Candidate { meta: entry.meta, embedding });
	}

	Ok(out)
}

fn print_listing(results: &RankedResults) {
	if results.semantic {
		println!("Using hybrid search (keyword + semantic)");
	} else {
		println!("Using keyword search only");
	}

	if results.hits.is_empty() {
		println!("No snapshots match the search query");

		return;
	}

	let created_format = format_description!("[year]-[month]-[day] [hour]:[minute]");

	println!("\nFound {} matching snapshot(s):\n", results.hits.len());

	for (index, hit) in results.hits.iter().enumerate() {
		let score = if hit.used_semantic {
			format!(
				"{:.1} (keyword: {}, semantic: {:.1}%)",
				hit.score, hit.keyword_score, hit.semantic_score
			)
		} else {
			format!("{:.1} (keyword only)", hit.score)
		};

		println!("{}. {} [score: {}]", index + 1, hit.meta.topic, score);
		println!("   Topic:   {}", hit.meta.topic);

		if let Ok(created) = hit.meta.created_at.format(&created_format) {
			println!("   Created: {created}");
		}

		println!("   Mode:    {}", hit.meta.mode.as_str());

		if !hit.meta.tags.is_empty() {
			println!("   Tags:    {}", hit.meta.tags.join(", "));
		}
		if let Some(notes) = hit.meta.notes.as_deref() {
			println!("   Notes:   {}", truncate_notes(notes, 80));
		}

		println!();
	}
}

fn truncate_notes(notes: &str, max_chars: usize) -> String {
	if notes.chars().count() <= max_chars {
		return notes.to_string();
	}

	let clipped: String = notes.chars().take(max_chars).collect();

	format!("{clipped}...")
}
