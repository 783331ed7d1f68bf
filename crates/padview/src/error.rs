use thiserror::Error;

pub type Result<T> = std::result::Result<T, PadviewError>;

#[derive(Debug, Error)]
pub enum PadviewError {
	#[error("failed to allocate {count} zeroed records of {size} bytes each")]
	AllocationFailure { count: usize, size: usize },
	#[error("record index {index} is out of range for an array of {count}")]
	IndexOutOfRange { index: usize, count: usize },
	#[error("expected {expected} raw words, got {actual}")]
	WordCountMismatch { expected: usize, actual: usize },
	#[error("failed to write report output: {source}")]
	Report { source: std::io::Error },
}
