use std::cmp::Ordering;

use crate::point::nan_last_cmp;

/// A candidate found during a query: squared distance and arena slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Candidate {
    pub dist_sq: f64,
    pub slot: usize,
}

/// Bounded list of the best candidates seen so far, ascending by squared distance.
///
/// Owned by a single query call. A new candidate is placed after every held candidate
/// with the same distance, and once full only a strictly smaller distance than the
/// current worst gets in.
#[derive(Debug)]
pub(crate) struct Candidates {
    k: usize,
    items: Vec<Candidate>,
}

impl Candidates {
    /// `capacity` bounds the up-front allocation, `k` may be far larger than the index.
    pub fn with_capacity(k: usize, capacity: usize) -> Self {
        Self {
            k,
            items: Vec::with_capacity(k.min(capacity)),
        }
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.k
    }

    /// Squared distance of the k-th candidate, or infinity while not full.
    #[inline]
    pub fn worst_dist_sq(&self) -> f64 {
        if self.is_full() {
            self.items.last().map_or(f64::INFINITY, |c| c.dist_sq)
        } else {
            f64::INFINITY
        }
    }

    /// Offer a candidate. Returns whether it was kept.
    pub fn offer(&mut self, dist_sq: f64, slot: usize) -> bool {
        if self.k == 0 {
            return false;
        }
        if self.is_full() {
            // NaN on either side is never an improvement.
            if !(dist_sq < self.worst_dist_sq()) {
                return false;
            }
            self.items.pop();
        }
        let at = self
            .items
            .partition_point(|c| nan_last_cmp(c.dist_sq, dist_sq) != Ordering::Greater);
        self.items.insert(at, Candidate { dist_sq, slot });
        true
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn into_vec(self) -> Vec<Candidate> {
        self.items
    }
}
