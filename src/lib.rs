//! Destrier engine library.
//!
//! Exposes the board representation, knight-move generation, tour driver,
//! and survey modules for use by integration tests and the binary entry
//! points.

pub mod board;
pub mod config;
pub mod movegen;
pub mod survey;
pub mod tour;
