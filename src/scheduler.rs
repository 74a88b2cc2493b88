//! The outer scheduling loop.
//!
//! Builds the run state (codec, empty grid, quotas), then repeatedly
//! evolves one winning assignment and commits it until the cell
//! countdown reaches zero.

use crate::config::TimetableConfig;
use crate::evolution::{evolve, EvolutionParams};
use crate::fitness::FitnessEvaluator;
use crate::genome::GenomeCodec;
use crate::grid::ScheduleGrid;
use crate::quota::QuotaTracker;
use crate::random::create_rng;
use log::{info, trace};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of a scheduling run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleResult {
    /// The committed timetable.
    pub timetable: ScheduleGrid,

    /// Number of evolution runs executed (one per committed genome).
    pub evolution_runs: usize,

    /// Whether the run was cancelled before the countdown finished.
    pub cancelled: bool,
}

/// Drives the slot-by-slot search.
///
/// # Usage
///
/// ```
/// use timetable_ga::{Scheduler, TimetableConfig};
///
/// let config = TimetableConfig::default()
///     .with_classes(1)
///     .with_courses(2)
///     .with_slots_per_day(2)
///     .with_days(1)
///     .with_seed(42);
/// let result = Scheduler::run(&config).unwrap();
/// assert_eq!(result.timetable.cell_count(), 2);
/// ```
///
/// # Completeness
///
/// Every evolution winner is committed and counts toward the cell
/// countdown, even when it targets an already-filled cell — the loop
/// relies on the fitness penalties to steer winners toward empty,
/// quota-available cells rather than verifying it. On tightly
/// constrained instances a late winner can therefore overwrite a filled
/// cell and leave another empty; check
/// [`ScheduleGrid::is_complete`](crate::grid::ScheduleGrid::is_complete)
/// when that matters.
pub struct Scheduler;

impl Scheduler {
    /// Runs the full scheduling loop.
    ///
    /// Fails fast with a description if the configuration is invalid;
    /// the search itself cannot fail.
    pub fn run(config: &TimetableConfig) -> Result<ScheduleResult, String> {
        Self::run_with_cancel(config, None)
    }

    /// Runs the scheduling loop with an optional cancellation token.
    ///
    /// When the flag is set, the loop stops before the next evolution
    /// run and returns the partially filled grid with
    /// `cancelled: true`.
    pub fn run_with_cancel(
        config: &TimetableConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<ScheduleResult, String> {
        config.validate()?;
        let repeat = config
            .daily_repeat
            .resolve(config.courses)
            .map_err(|e| format!("daily_repeat: {e}"))?;
        let teachers = config
            .teachers
            .resolve(config.courses)
            .map_err(|e| format!("teachers: {e}"))?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let codec = GenomeCodec::new(
            config.classes,
            config.courses,
            config.slots_per_day,
            config.days,
        );
        let mut grid = ScheduleGrid::new(config.classes, config.days, config.slots_per_day);
        let mut quota = QuotaTracker::new(
            config.classes,
            config.courses,
            config.total_slots(),
            repeat,
            teachers,
            &mut rng,
        );
        let params = EvolutionParams {
            population_size: config.population_size,
            fitness_ceiling: config.fitness_ceiling,
            max_generations: config.max_generations,
            parallel: config.parallel,
        };

        let mut countdown = grid.cell_count();
        let mut evolution_runs = 0usize;
        let mut cancelled = false;

        info!(
            "scheduling {} cells ({} classes, {} days, {} slots/day)",
            countdown, config.classes, config.days, config.slots_per_day
        );

        while countdown > 0 {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let outcome = {
                let evaluator = FitnessEvaluator::new(&codec, &grid, &quota);
                evolve(&evaluator, &codec, &params, &mut rng)
            };
            let assignment = codec.decode(outcome.best);

            grid.set(
                assignment.class,
                assignment.day,
                assignment.slot,
                assignment.course,
            );
            quota.commit(assignment.class, assignment.course);
            countdown -= 1;
            evolution_runs += 1;

            trace!(
                "committed course {} at class {} day {} slot {} (fitness {:.3}, {} generations, {} cells left)",
                assignment.course,
                assignment.class,
                assignment.day,
                assignment.slot,
                outcome.best_fitness,
                outcome.generations,
                countdown
            );
        }

        if cancelled {
            info!(
                "cancelled after {} evolution runs, {} cells uncommitted",
                evolution_runs, countdown
            );
        } else {
            info!(
                "finished after {} evolution runs, {} cells empty",
                evolution_runs,
                grid.empty_cells()
            );
        }

        Ok(ScheduleResult {
            timetable: grid,
            evolution_runs,
            cancelled,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CeilingSpec;

    #[test]
    fn test_invalid_config_fails_before_search() {
        let config = TimetableConfig::default()
            .with_daily_repeat(CeilingSpec::PerCourse(vec![2, 2]));
        let err = Scheduler::run(&config).unwrap_err();
        assert!(err.starts_with("daily_repeat:"), "unexpected error: {err}");
    }

    #[test]
    fn test_two_cell_scenario_fills_with_both_courses() {
        // one class, two courses, two slots, one day: the repeat ceiling
        // and weekly quotas interact so the only valid complete grids
        // are [1, 2] and [2, 1]
        let config = TimetableConfig::default()
            .with_classes(1)
            .with_courses(2)
            .with_slots_per_day(2)
            .with_days(1)
            .with_daily_repeat(CeilingSpec::Scalar(2))
            .with_teachers(CeilingSpec::Scalar(1))
            .with_seed(42);
        let result = Scheduler::run(&config).unwrap();

        assert!(!result.cancelled);
        assert_eq!(result.evolution_runs, 2);
        assert!(result.timetable.is_complete());
        let mut row = result.timetable.day_row(0, 0).to_vec();
        row.sort_unstable();
        assert_eq!(row, vec![1, 2]);
    }

    #[test]
    fn test_small_run_commits_one_winner_per_cell() {
        let config = TimetableConfig::default()
            .with_classes(2)
            .with_courses(3)
            .with_slots_per_day(3)
            .with_days(2)
            .with_seed(42);
        let result = Scheduler::run(&config).unwrap();

        // the countdown commits exactly one winner per cell, though a
        // late winner may overwrite instead of filling
        assert_eq!(result.evolution_runs, 12);
        assert!(!result.cancelled);
        for class in 0..2 {
            for day in 0..2 {
                for &course in result.timetable.day_row(class, day) {
                    assert!(course <= 3, "course code {course} out of range");
                }
            }
        }
    }

    #[test]
    fn test_default_config_runs_to_countdown() {
        let config = TimetableConfig::default().with_seed(42);
        let result = Scheduler::run(&config).unwrap();

        assert!(!result.cancelled);
        assert_eq!(result.evolution_runs, result.timetable.cell_count());
        for class in 0..4 {
            for day in 0..5 {
                for &course in result.timetable.day_row(class, day) {
                    assert!(course <= 4, "course code {course} out of range");
                }
            }
        }
    }

    #[test]
    fn test_same_seed_reproduces_timetable() {
        let config = TimetableConfig::default()
            .with_classes(2)
            .with_courses(3)
            .with_slots_per_day(3)
            .with_days(2)
            .with_seed(123);
        let a = Scheduler::run(&config).unwrap();
        let b = Scheduler::run(&config).unwrap();
        assert_eq!(a.timetable, b.timetable);
        assert_eq!(a.evolution_runs, b.evolution_runs);
    }

    #[test]
    fn test_pre_set_cancel_returns_untouched_grid() {
        let cancel = Arc::new(AtomicBool::new(true));
        let config = TimetableConfig::default().with_seed(42);
        let result = Scheduler::run_with_cancel(&config, Some(cancel)).unwrap();

        assert!(result.cancelled);
        assert_eq!(result.evolution_runs, 0);
        assert_eq!(result.timetable.empty_cells(), result.timetable.cell_count());
    }

    #[test]
    fn test_parallel_run_completes() {
        let config = TimetableConfig::default()
            .with_classes(2)
            .with_courses(3)
            .with_slots_per_day(3)
            .with_days(2)
            .with_parallel(true)
            .with_seed(42);
        let result = Scheduler::run(&config).unwrap();
        assert_eq!(result.evolution_runs, 12);
    }
}
