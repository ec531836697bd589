//! Error types for structural state validation.

use crate::coord::Coord;

/// Errors from structural validation of a [`GameState`](crate::state::GameState).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: &'static str,
        /// Number of kings found.
        count: usize,
    },
    /// A cached king coordinate does not match the king on the board.
    #[error("{color} king cached at {cached}, but found on {actual}")]
    StaleKingCache {
        /// Which side's cache is stale.
        color: &'static str,
        /// The cached coordinate.
        cached: Coord,
        /// Where the king actually stands.
        actual: Coord,
    },
    /// A per-ply log does not hold one entry per applied move plus the
    /// initial snapshot.
    #[error("{log} log holds {len} entries, expected {expected}")]
    LogLengthMismatch {
        /// Which log is inconsistent.
        log: &'static str,
        /// Entries found.
        len: usize,
        /// Entries expected (`move_log.len() + 1`).
        expected: usize,
    },
}
