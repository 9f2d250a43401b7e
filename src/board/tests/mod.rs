//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Reference node counts for move generation
//! - `edge_cases.rs` - Special moves and positions
//! - `eval.rs` - Evaluation symmetry
//! - `search.rs` - Alpha-beta against plain minimax, cancellation
//! - `proptest.rs` - Property-based tests

mod eval;
