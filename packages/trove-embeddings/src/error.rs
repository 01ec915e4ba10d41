pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("Vectors cannot be empty.")]
	EmptyVector,
	#[error("Vectors must have the same length: {left} vs {right}.")]
	DimensionMismatch { left: usize, right: usize },
	#[error("Vector norm cannot be zero.")]
	ZeroNorm,
	#[error("Embedding input cannot be empty.")]
	EmptyInput,
	#[error("Invalid embedding byte length {len}: not a multiple of 8.")]
	MalformedLength { len: usize },
	#[error("Embedding data ends mid-element at index {index}.")]
	TruncatedData { index: usize },
	#[error("Embedding contains a non-finite value at index {index}.")]
	NonFinite { index: usize },
}
