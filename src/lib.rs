//! # nearthree
//!
//! `nearthree` is a Rust library for k-nearest-neighbor queries over static sets of 3D
//! points, designed to be used in Rust as well as compiled to WebAssembly (WASM). It
//! builds a balanced k-d tree once and answers "what is near this entity" without
//! scanning every entity on each query.
//!
//! ## Features
//!
//! - **Deterministic shape**: median splits with a stable per-axis sort, so the same input
//!   always gives the same tree and the same answers, ties included.
//! - **Single arena**: the tree is laid out implicitly in one buffer, sorted in place.
//! - **Parallel construction**: [`SpatialIndex::build_par`] splits work with `rayon`
//!   and produces the identical tree.
//! - **Lock-free queries**: a built index is immutable, every query owns its candidates.
//! - **WASM-first**: `NearestIndex3D` exposes the index to JavaScript and TypeScript.
//!
//! ## Example
//!
//! ```
//! use nearthree::{Entry, SpatialIndex};
//!
//! let index = SpatialIndex::build(vec![
//!     Entry::new("a", [0.0, 0.0, 0.0], 0),
//!     Entry::new("b", [1.0, 0.0, 0.0], 1),
//!     Entry::new("c", [5.0, 0.0, 0.0], 2),
//! ]);
//! let found = index.k_nearest([0.0, 0.0, 0.0], 2, Some(&"a"));
//! assert_eq!(*found[0].payload, 1);
//! assert_eq!(found[1].distance, 5.0);
//! ```

mod candidates;
mod entry;
mod error;
mod kdtree;
mod point;
pub mod wasm;

pub use entry::Entry;
pub use entry::Neighbor;
pub use error::IndexError;
pub use kdtree::SpatialIndex;
pub use kdtree::PARALLEL_MIN_LEN;
pub use point::distance_sq;
pub use point::Point3;
pub use wasm::d3::NearestIndex3D;
pub use wasm::d3::Neighbors3D;
