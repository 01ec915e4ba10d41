pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Unknown snapshot mode {label:?}.")]
	UnknownMode { label: String },
}
