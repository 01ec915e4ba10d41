use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{Error, Result};

/// What a snapshot branch carries alongside the captured tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnapshotMode {
	#[serde(rename = "full")]
	Full,
	#[serde(rename = "research-only")]
	ResearchOnly,
	#[serde(rename = "diff")]
	Diff,
	#[serde(rename = "poc")]
	Poc,
}
impl SnapshotMode {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Full => "full",
			Self::ResearchOnly => "research-only",
			Self::Diff => "diff",
			Self::Poc => "poc",
		}
	}
}
impl FromStr for SnapshotMode {
	type Err = Error;

	fn from_str(label: &str) -> Result<Self> {
		match label {
			"full" => Ok(Self::Full),
			"research-only" => Ok(Self::ResearchOnly),
			"diff" => Ok(Self::Diff),
			"poc" => Ok(Self::Poc),
			_ => Err(Error::UnknownMode { label: label.to_string() }),
		}
	}
}

/// The `meta.json` record stored on every snapshot branch. Field names are a
/// stored-data contract; optional fields are omitted when absent so existing
/// metadata files keep round-tripping byte-for-byte.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotMeta {
	#[serde(with = "crate::time_serde")]
	pub created_at: OffsetDateTime,
	pub topic: String,
	pub root: String,
	pub mode: SnapshotMode,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub related_branch: Option<String>,
	pub main_commit: String,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub tags: Vec<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub embedding: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub notes: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub tree_hash: Option<String>,
}
