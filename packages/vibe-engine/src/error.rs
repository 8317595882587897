pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid query: {message}")]
	InvalidQuery { message: String },
	#[error("Embedding dimension mismatch: query has {query} values, catalog row has {catalog}.")]
	DimensionMismatch { query: usize, catalog: usize },
}
