pub mod lexical;
pub mod query;
pub mod rank;

use std::{future::Future, pin::Pin};

pub use lexical::LexicalVerdict;
pub use query::ParsedQuery;
pub use rank::{Candidate, RankedResults, RankingWeights, SearchHit, rank};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The one capability the ranker consumes. Implementations wrap the local
/// embedding service; tests script it. Unavailability and generation
/// failures are soft: the ranker degrades to keyword-only scoring instead of
/// surfacing them.
pub trait EmbeddingProvider
where
	Self: Send + Sync,
{
	fn is_available<'a>(&'a self) -> BoxFuture<'a, bool>;
	fn embed<'a>(&'a self, text: &'a str) -> BoxFuture<'a, color_eyre::Result<Vec<f64>>>;
}
