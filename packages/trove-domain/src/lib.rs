mod error;
mod snapshot;

pub mod time_serde;

pub use error::{Error, Result};
pub use snapshot::{SnapshotMeta, SnapshotMode};
