use tandem_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("beam width must be at least 1")]
    InvalidBeamWidth,

    #[error(transparent)]
    Config(#[from] CoreError),

    #[error("failed to build worker pool: {0}")]
    Pool(String),
}

pub type SearchResult<T> = Result<T, SearchError>;
