pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Reqwest(#[from] reqwest::Error),
	#[error("Embedding input text cannot be empty.")]
	EmptyInput,
	#[error("Embedding service returned no embeddings.")]
	EmptyResponse,
	#[error("{message}")]
	InvalidResponse { message: String },
	#[error("Model {model:?} not found; pull it into the local embedding service first.")]
	ModelNotFound { model: String },
}
