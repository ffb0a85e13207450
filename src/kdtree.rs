use crate::candidates::Candidates;
use crate::entry::{Entry, Neighbor};
use crate::error::IndexError;
use crate::point::{distance_sq, nan_last_cmp, Point3};

/// Sub-ranges shorter than this are built sequentially by [`SpatialIndex::build_par`].
pub const PARALLEL_MIN_LEN: usize = 4096;

#[derive(Clone, Copy, Debug)]
struct KdNode<I, P> {
    position: Point3,
    id: I,
    payload: P,
    axis: u8,
}

/// A static k-d tree over 3D points answering k-nearest-neighbor queries.
///
/// The tree lives implicitly in a single arena: the node of the range `start..end`
/// is stored at `start + (end - start) / 2`, its left subtree occupies the slots
/// before it and its right subtree the slots after it. The split axis of a node is
/// its depth modulo 3. Left subtrees hold coordinates `<=` the node's on that axis,
/// right subtrees hold coordinates `>=` it.
///
/// The index is immutable once built, so queries can run from any number of threads
/// at once.
#[derive(Clone, Debug)]
pub struct SpatialIndex<I, P> {
    nodes: Vec<KdNode<I, P>>,
}

impl<I, P> Default for SpatialIndex<I, P> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<I, P> SpatialIndex<I, P> {
    /// Builds the tree from `entries`.
    ///
    /// Each recursion stably sorts its range on the current axis and takes the entry at
    /// `len / 2` as the node, so entries with equal coordinates keep their input order
    /// and the tree shape is a pure function of the input. Identifiers must be unique
    /// for `exclude` in [`k_nearest`](Self::k_nearest) to be meaningful; this is not
    /// checked.
    pub fn build(entries: Vec<Entry<I, P>>) -> Self {
        let mut nodes = Self::arena(entries);
        build_recursive(&mut nodes, 0);
        let index = Self { nodes };
        log::debug!("built k-d tree with {} entries, depth {}", index.len(), index.depth());
        index
    }

    fn arena(entries: Vec<Entry<I, P>>) -> Vec<KdNode<I, P>> {
        entries
            .into_iter()
            .map(|e| KdNode {
                position: e.position,
                id: e.id,
                payload: e.payload,
                axis: 0,
            })
            .collect()
    }

    /// Number of entries in the index.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Height of the tree, 0 when empty.
    pub fn depth(&self) -> usize {
        // Every node is a median, so the height is the bit length of `len`.
        (usize::BITS - self.nodes.len().leading_zeros()) as usize
    }

    /// Entries in arena order.
    pub fn iter(&self) -> impl Iterator<Item = (&I, &Point3, &P)> + '_ {
        self.nodes.iter().map(|n| (&n.id, &n.position, &n.payload))
    }
}

impl<I: Send, P: Send> SpatialIndex<I, P> {
    /// Same as [`build`](Self::build), with large left and right sub-ranges built on
    /// separate rayon workers. The resulting tree is identical to the sequential one.
    pub fn build_par(entries: Vec<Entry<I, P>>) -> Self {
        let mut nodes = Self::arena(entries);
        build_recursive_par(&mut nodes, 0);
        let index = Self { nodes };
        log::debug!(
            "built k-d tree with {} entries in parallel, depth {}",
            index.len(),
            index.depth()
        );
        index
    }
}

impl<'a, I, T> SpatialIndex<I, &'a T> {
    /// Builds an index over `items`, keeping a reference to each item as its payload.
    pub fn from_items<F>(items: &'a [T], mut key: F) -> Self
    where
        F: FnMut(&T) -> (I, Point3),
    {
        let entries = items
            .iter()
            .map(|item| {
                let (id, position) = key(item);
                Entry::new(id, position, item)
            })
            .collect();
        Self::build(entries)
    }
}

impl<I: Send> SpatialIndex<I, usize> {
    /// Builds an index from a flat `[x0, y0, z0, x1, ...]` buffer, using each
    /// entry's position in the buffer as its payload.
    pub fn from_flat(ids: Vec<I>, positions: &[f64]) -> Result<Self, IndexError> {
        if positions.len() % 3 != 0 {
            return Err(IndexError::MisalignedPositions { len: positions.len() });
        }
        let points = positions.len() / 3;
        if ids.len() != points {
            return Err(IndexError::LengthMismatch { ids: ids.len(), points });
        }
        let entries = ids
            .into_iter()
            .zip(positions.chunks_exact(3))
            .enumerate()
            .map(|(i, (id, p))| Entry::new(id, [p[0], p[1], p[2]], i))
            .collect();
        Ok(Self::build_par(entries))
    }
}

impl<I: PartialEq, P> SpatialIndex<I, P> {
    /// Finds up to `k` entries closest to `target`, nearest first.
    ///
    /// The entry whose id equals `exclude` is never returned but still guides the
    /// descent. When the k-th slot is contested by equal distances the entry reached
    /// first by the traversal wins and later ties are dropped.
    ///
    /// NaN coordinates never panic. Comparisons against NaN are not improvements, so
    /// fewer than `k` results may come back.
    pub fn k_nearest(&self, target: Point3, k: usize, exclude: Option<&I>) -> Vec<Neighbor<'_, P>> {
        if k == 0 || self.nodes.is_empty() {
            return Vec::new();
        }

        let mut best = Candidates::with_capacity(k, self.nodes.len());
        self.query_recursive(0, self.nodes.len(), &target, exclude, &mut best);
        log::trace!("k_nearest k={} found {}", k, best.len());

        best.into_vec()
            .into_iter()
            .map(|c| Neighbor {
                payload: &self.nodes[c.slot].payload,
                distance: c.dist_sq.sqrt(),
            })
            .collect()
    }

    /// The single closest entry, skipping `exclude`.
    pub fn nearest(&self, target: Point3, exclude: Option<&I>) -> Option<Neighbor<'_, P>> {
        self.k_nearest(target, 1, exclude).into_iter().next()
    }

    fn query_recursive(
        &self,
        start: usize,
        end: usize,
        target: &Point3,
        exclude: Option<&I>,
        best: &mut Candidates,
    ) {
        if start >= end {
            return;
        }
        let mid = start + (end - start) / 2;
        let node = &self.nodes[mid];

        // The excluded entry still partitions space, so both sides are searched.
        if exclude.is_some_and(|id| *id == node.id) {
            self.query_recursive(start, mid, target, exclude, best);
            self.query_recursive(mid + 1, end, target, exclude, best);
            return;
        }

        best.offer(distance_sq(target, &node.position), mid);

        let axis = node.axis as usize;
        let diff = target[axis] - node.position[axis];

        // Visit nearest child first
        let (first, second) = if diff <= 0.0 {
            ((start, mid), (mid + 1, end))
        } else {
            ((mid + 1, end), (start, mid))
        };

        self.query_recursive(first.0, first.1, target, exclude, best);

        // The far side can only hold a better candidate if the plane is closer than
        // the current worst.
        if !best.is_full() || diff * diff < best.worst_dist_sq() {
            self.query_recursive(second.0, second.1, target, exclude, best);
        }
    }
}

/// Stably sorts the range on the axis of `depth` and marks its median as a node.
/// Returns the left and right sub-ranges.
fn split<I, P>(
    nodes: &mut [KdNode<I, P>],
    depth: usize,
) -> (&mut [KdNode<I, P>], &mut [KdNode<I, P>]) {
    let axis = depth % 3;
    nodes.sort_by(|a, b| nan_last_cmp(a.position[axis], b.position[axis]));

    let mid = nodes.len() / 2;
    let (left, rest) = nodes.split_at_mut(mid);
    rest[0].axis = axis as u8;
    (left, &mut rest[1..])
}

fn build_recursive<I, P>(nodes: &mut [KdNode<I, P>], depth: usize) {
    if nodes.is_empty() {
        return;
    }
    let (left, right) = split(nodes, depth);
    build_recursive(left, depth + 1);
    build_recursive(right, depth + 1);
}

fn build_recursive_par<I: Send, P: Send>(nodes: &mut [KdNode<I, P>], depth: usize) {
    if nodes.len() < PARALLEL_MIN_LEN {
        build_recursive(nodes, depth);
        return;
    }
    let (left, right) = split(nodes, depth);
    rayon::join(
        || build_recursive_par(left, depth + 1),
        || build_recursive_par(right, depth + 1),
    );
}
