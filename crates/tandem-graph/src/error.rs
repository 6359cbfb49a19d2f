//! Graph-subsystem error type.

use thiserror::Error;

use tandem_core::SiteId;

/// Errors produced by `tandem-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("site \"{site}\" links to undefined site \"{link}\"")]
    UnknownSite { site: String, link: String },

    #[error("duplicate site name \"{0}\"")]
    DuplicateSite(String),

    #[error("site \"{0}\" has negative rate {1}")]
    NegativeRate(String, i64),

    #[error("site \"{0}\" has rate {1}, above the supported maximum {max}", max = u32::MAX)]
    RateOutOfRange(String, i64),

    #[error("start site \"{0}\" not found")]
    StartNotFound(String),

    #[error("start site {0} is not in the network")]
    InvalidStart(SiteId),

    #[error("no path from {from} to {to}")]
    Unreachable { from: SiteId, to: SiteId },

    #[error("{0} distance sites exceed the {cap}-bit mask capacity", cap = crate::SiteMask::CAPACITY)]
    TooManySites(usize),
}

pub type GraphResult<T> = Result<T, GraphError>;
