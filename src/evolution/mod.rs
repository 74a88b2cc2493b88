//! The generational search loop.
//!
//! One [`evolve`] call answers one question: given the current grid and
//! quota state, which single assignment should be committed next? It
//! breeds fixed-width genomes under fitness-proportionate selection
//! with two-elite preservation, and stops at the fitness ceiling or the
//! generation cap.
//!
//! Fitness is frozen for the duration of a call — the grid and quotas
//! only change between calls, when the driver commits a winner — so
//! each candidate is scored once per generation and the value reused
//! for sorting and selection.

mod runner;
mod selection;

pub use runner::{evolve, EvolutionOutcome, EvolutionParams};
pub use selection::select_weighted;
