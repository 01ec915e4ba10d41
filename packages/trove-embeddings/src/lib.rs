mod codec;
mod error;
mod similarity;

pub use codec::{decode, encode, encoded_len};
pub use error::{Error, Result};
pub use similarity::{cosine_similarity, dot_product, magnitude, normalize, validate};
