mod error;

pub mod embedding;

pub use error::{Error, Result};
