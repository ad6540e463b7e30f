//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move generation node counts for reference positions
//! - `castling.rs` - Castling eligibility and execution
//! - `en_passant.rs` - The en passant window and its side effects
//! - `edge_cases.rs` - Special positions and rules corner cases
//! - `proptest.rs` - Property-based tests over random playouts

mod castling;
mod edge_cases;
mod proptest;
