use crate::{Error, Result};

/// Dot product of two equal-length, non-empty vectors.
pub fn dot_product(a: &[f64], b: &[f64]) -> Result<f64> {
	if a.len() != b.len() {
		return Err(Error::DimensionMismatch { left: a.len(), right: b.len() });
	}
	if a.is_empty() {
		return Err(Error::EmptyVector);
	}

	Ok(a.iter().zip(b).map(|(x, y)| x * y).sum())
}

/// Euclidean norm. An empty vector has magnitude 0 rather than being an
/// error; the stricter contracts live in [`dot_product`] and
/// [`cosine_similarity`].
pub fn magnitude(v: &[f64]) -> f64 {
	v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Cosine similarity of two equal-length, non-empty, non-zero vectors.
/// The result is clamped to [-1, 1]; callers rescaling into score space
/// rely on that bound holding exactly.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64> {
	let dot = dot_product(a, b)?;
	let norm_a = magnitude(a);
	let norm_b = magnitude(b);

	if norm_a == 0.0 || norm_b == 0.0 {
		return Err(Error::ZeroNorm);
	}

	Ok((dot / (norm_a * norm_b)).clamp(-1.0, 1.0))
}

/// Returns a new unit-magnitude vector pointing the same way as `v`.
pub fn normalize(v: &[f64]) -> Result<Vec<f64>> {
	if v.is_empty() {
		return Err(Error::EmptyVector);
	}

	let norm = magnitude(v);

	if norm == 0.0 {
		return Err(Error::ZeroNorm);
	}

	Ok(v.iter().map(|x| x / norm).collect())
}

/// Rejects vectors that must never be stored: empty, NaN, or infinite.
pub fn validate(v: &[f64]) -> Result<()> {
	if v.is_empty() {
		return Err(Error::EmptyVector);
	}

	for (index, value) in v.iter().enumerate() {
		if !value.is_finite() {
			return Err(Error::NonFinite { index });
		}
	}

	Ok(())
}
