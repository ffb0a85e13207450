use thiserror::Error;

/// Errors raised when building an index from flat buffers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// The position buffer is not a sequence of `[x, y, z]` triples.
    #[error("position buffer has {len} values, expected a multiple of 3")]
    MisalignedPositions { len: usize },
    /// Ids and positions describe a different number of entries.
    #[error("got {ids} ids for {points} points")]
    LengthMismatch { ids: usize, points: usize },
}
