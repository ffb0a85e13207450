use crate::point::Point3;

/// An input record for [`SpatialIndex`](crate::SpatialIndex).
///
/// `payload` is a handle into caller-owned data, usually a reference or an index.
/// The index stores the handle as is and never looks behind it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entry<I, P> {
    /// Identifier, expected to be unique within one index.
    pub id: I,
    /// Position of the entry.
    pub position: Point3,
    /// Handle to the caller's data for this entry.
    pub payload: P,
}

impl<I, P> Entry<I, P> {
    pub fn new(id: I, position: Point3, payload: P) -> Self {
        Self { id, position, payload }
    }
}

/// One result of a nearest-neighbor query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbor<'a, P> {
    /// Payload handle of the matched entry.
    pub payload: &'a P,
    /// Euclidean distance from the query target.
    pub distance: f64,
}
