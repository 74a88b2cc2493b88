//! Genome encoding and genetic operators.
//!
//! A genome is one candidate assignment — "this course, in this weekly
//! slot, for this class" — packed into a fixed-width bit field. The
//! three segments are concatenated in a fixed order (course high, class
//! low), each holding a 1-based code zero-padded to its segment width.
//!
//! - [`GenomeCodec`]: segment widths derived from the configured counts,
//!   encoding, random generation, and decoding back to a grid position.
//! - [`operators`]: segment-aligned crossover and mutation. Operators
//!   never mutate in place; they always return new genomes.

mod codec;
pub mod operators;

pub use codec::{bit_width, Assignment, Genome, GenomeCodec};
