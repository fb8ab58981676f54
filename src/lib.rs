//! Polycube Dissection Solver Library
//!
//! Finds every way a multiset of named polycube pieces can be rotated,
//! translated, and placed so their unit cubes exactly tile a W x H x D box.
//! Placements become rows of a packed bit matrix and the search is Knuth's
//! Algorithm X over that matrix.

pub mod builder;
pub mod geometry;
pub mod grid;
pub mod matrix;
pub mod pieces;
pub mod problem;
pub mod solver;
