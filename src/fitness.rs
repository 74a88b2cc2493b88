//! Candidate scoring.
//!
//! Fitness is a heuristic desirability score in `(0, 100]`: a base of
//! 100 with one multiplicative penalty per violated constraint. The
//! penalties are independent and order-insensitive, and the product is
//! never clamped — an infeasible candidate ends up vanishingly small
//! but strictly positive, so it stays a legal weight for
//! fitness-proportionate selection.

use crate::genome::{Genome, GenomeCodec};
use crate::grid::{ScheduleGrid, EMPTY};
use crate::quota::QuotaTracker;

/// Scores genomes against the current grid and quota state.
///
/// A pure reader: evaluation never mutates the grid or the quotas, so
/// one evaluator can score a whole population, in parallel if desired.
#[derive(Debug, Clone, Copy)]
pub struct FitnessEvaluator<'a> {
    codec: &'a GenomeCodec,
    grid: &'a ScheduleGrid,
    quota: &'a QuotaTracker,
}

impl<'a> FitnessEvaluator<'a> {
    /// Creates an evaluator over the given run state.
    pub fn new(codec: &'a GenomeCodec, grid: &'a ScheduleGrid, quota: &'a QuotaTracker) -> Self {
        Self { codec, grid, quota }
    }

    /// Scores one genome.
    ///
    /// Penalties, each applied at most once:
    ///
    /// | condition | factor |
    /// |---|---|
    /// | target cell already occupied | 0.01 |
    /// | any class holds this course at this (day, slot) | 0.6 |
    /// | same course in the preceding slot (same class/day) | 0.6 |
    /// | same course in the following slot (same class/day) | 0.6 |
    /// | remaining weekly quota below 1 | 0.01 |
    /// | course already twice that day for that class | 0.01 |
    /// | daily count at or past the repetition ceiling | 0.5 |
    /// | holder count equals the teacher ceiling | 0.01 |
    ///
    /// The holder check does not exclude the evaluated class: a course
    /// already sitting in the target cell itself triggers the
    /// same-slot penalty too. The teacher penalty fires on exact
    /// equality with the ceiling, not on exceeding it.
    pub fn score(&self, genome: Genome) -> f64 {
        let a = self.codec.decode(genome);
        let mut fitness = 100.0;

        if self.grid.get(a.class, a.day, a.slot) != EMPTY {
            fitness *= 0.01;
        }

        let holders = self.grid.course_holders_at(a.day, a.slot, a.course);
        if holders > 0 {
            fitness *= 0.6;
        }

        if a.slot > 0 && self.grid.get(a.class, a.day, a.slot - 1) == a.course {
            fitness *= 0.6;
        }
        if a.slot + 1 < self.grid.slots_per_day()
            && self.grid.get(a.class, a.day, a.slot + 1) == a.course
        {
            fitness *= 0.6;
        }

        if self.quota.remaining(a.class, a.course) < 1 {
            fitness *= 0.01;
        }

        let today = self.grid.day_occurrences(a.class, a.day, a.course);
        if today >= 2 {
            fitness *= 0.01;
        }
        if today >= self.quota.daily_repeat_ceiling(a.class, a.course) as usize {
            fitness *= 0.5;
        }

        if holders == self.quota.teacher_ceiling(a.course) as usize {
            fitness *= 0.01;
        }

        fitness
    }
}
