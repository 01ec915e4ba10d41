use crate::{Error, Result};

const ELEMENT_BYTES: usize = 8;

/// Encodes a vector as a headerless little-endian f64 array. This layout is a
/// stored-data contract: files written by earlier versions must keep decoding
/// bit-for-bit.
pub fn encode(vector: &[f64]) -> Result<Vec<u8>> {
	if vector.is_empty() {
		return Err(Error::EmptyInput);
	}

	let mut out = Vec::with_capacity(vector.len() * ELEMENT_BYTES);

	for value in vector {
		out.extend_from_slice(&value.to_le_bytes());
	}

	Ok(out)
}

/// Decodes a headerless little-endian f64 array. The element count is the
/// byte length divided by 8.
pub fn decode(bytes: &[u8]) -> Result<Vec<f64>> {
	if bytes.is_empty() {
		return Err(Error::EmptyInput);
	}
	if bytes.len() % ELEMENT_BYTES != 0 {
		return Err(Error::MalformedLength { len: bytes.len() });
	}

	let mut out = Vec::with_capacity(bytes.len() / ELEMENT_BYTES);

	for (index, chunk) in bytes.chunks(ELEMENT_BYTES).enumerate() {
		let raw: [u8; ELEMENT_BYTES] =
			chunk.try_into().map_err(|_| Error::TruncatedData { index })?;

		out.push(f64::from_le_bytes(raw));
	}

	Ok(out)
}

/// Stored byte length of an embedding with the given dimension count.
pub fn encoded_len(dimensions: usize) -> usize {
	dimensions * ELEMENT_BYTES
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn round_trip_is_bit_exact() {
		let vector = [0.1, -2.5, 1e-300, f64::MAX, f64::MIN_POSITIVE, 0.0, -0.0];
		let decoded = decode(&encode(&vector).unwrap()).unwrap();

		assert_eq!(decoded.len(), vector.len());

		for (left, right) in vector.iter().zip(&decoded) {
			assert_eq!(left.to_bits(), right.to_bits());
		}
	}

	#[test]
	fn encode_rejects_empty_vector() {
		assert_eq!(encode(&[]), Err(Error::EmptyInput));
	}

	#[test]
	fn decode_rejects_empty_bytes() {
		assert_eq!(decode(&[]), Err(Error::EmptyInput));
	}

	#[test]
	fn decode_rejects_ragged_lengths() {
		let mut bytes = encode(&[1.0, 2.0]).unwrap();

		bytes.pop();

		assert_eq!(decode(&bytes), Err(Error::MalformedLength { len: 15 }));
	}

	#[test]
	fn layout_is_little_endian() {
		let bytes = encode(&[1.0]).unwrap();

		assert_eq!(bytes, 1.0_f64.to_le_bytes());
	}

	#[test]
	fn encoded_len_counts_eight_bytes_per_element() {
		assert_eq!(encoded_len(0), 0);
		assert_eq!(encoded_len(768), 6_144);

		let bytes = encode(&vec![0.25; 768]).unwrap();

		assert_eq!(bytes.len(), encoded_len(768));
	}
}
