//! Genetic-algorithm timetable generator.
//!
//! Assigns courses to time slots across classes and days under capacity
//! and conflict constraints, using an evolutionary search rather than
//! exact constraint solving. One evolution run produces one winning
//! assignment; an outer driver repeats the search slot by slot until the
//! whole week is committed.
//!
//! # Components
//!
//! - [`genome`]: Fixed-width bit-field encoding of candidate assignments
//!   (course, slot, class) plus the crossover and mutation operators.
//! - [`quota`]: Remaining weekly capacity per class and course, daily
//!   repetition ceilings, and cross-class teacher availability.
//! - [`grid`]: The three-dimensional committed timetable
//!   (class × day × slot).
//! - [`fitness`]: Multiplicative penalty scoring of a candidate against
//!   the current grid and quota state.
//! - [`evolution`]: Fitness-weighted selection and the bounded
//!   generational loop.
//! - [`scheduler`]: The outer driver that evolves, commits, and repeats
//!   until every cell is filled.
//!
//! # Example
//!
//! ```
//! use timetable_ga::{Scheduler, TimetableConfig};
//!
//! let config = TimetableConfig::default()
//!     .with_classes(2)
//!     .with_courses(3)
//!     .with_slots_per_day(3)
//!     .with_days(2)
//!     .with_seed(42);
//!
//! let result = Scheduler::run(&config).unwrap();
//! assert_eq!(result.timetable.classes(), 2);
//! assert_eq!(result.evolution_runs, 2 * 2 * 3);
//! ```
//!
//! # Guarantees and limits
//!
//! The search is best-effort: a fitness ceiling and a generation cap
//! bound each inner run, and the driver commits every run's winner even
//! when it lands on an already-filled cell. The output is therefore not
//! guaranteed optimal, and in tightly constrained instances individual
//! cells can be left empty. See [`scheduler::Scheduler`] for details.

pub mod config;
pub mod evolution;
pub mod fitness;
pub mod genome;
pub mod grid;
pub mod quota;
pub mod random;
pub mod scheduler;

pub use config::{CeilingSpec, TimetableConfig};
pub use scheduler::{ScheduleResult, Scheduler};
