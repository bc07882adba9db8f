//! Error types for the few operations that can actually fail.
//!
//! World mutation and interaction never fail: invalid requests degrade to
//! no-ops and are reported through return values. Only snapshot I/O and
//! parsing of external text produce errors.
use thiserror::Error;

/// A block name that is not part of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown block type `{0}`")]
pub struct UnknownBlockType(pub String);

/// Failure while writing or reading a world snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("snapshot line {line}: {source}")]
    UnknownBlock {
        line: usize,
        #[source]
        source: UnknownBlockType,
    },
}
