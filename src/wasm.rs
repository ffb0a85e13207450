//! WebAssembly bindings.

pub mod d3;
pub mod utils;
