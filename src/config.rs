//! Run configuration.
//!
//! [`TimetableConfig`] holds every parameter of a scheduling run:
//! problem dimensions, per-course ceilings, and the evolutionary search
//! knobs. Configuration is immutable once a run starts.

use crate::genome::bit_width;

/// A per-course ceiling given either as one shared value or as one value
/// per course.
///
/// Used for both the daily repetition ceiling and the teacher
/// availability ceiling. [`resolve`](CeilingSpec::resolve) turns either
/// form into a concrete per-course vector, rejecting length mismatches
/// and non-positive entries.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CeilingSpec {
    /// The same ceiling for every course.
    Scalar(u32),
    /// One ceiling per course; length must equal the course count.
    PerCourse(Vec<u32>),
}

impl CeilingSpec {
    /// Resolves the spec into one ceiling value per course.
    pub fn resolve(&self, courses: usize) -> Result<Vec<u32>, String> {
        match self {
            CeilingSpec::Scalar(v) => {
                if *v < 1 {
                    return Err("ceiling must be at least 1".into());
                }
                Ok(vec![*v; courses])
            }
            CeilingSpec::PerCourse(values) => {
                if values.len() != courses {
                    return Err(format!(
                        "per-course ceiling has {} entries, expected {courses}",
                        values.len()
                    ));
                }
                if values.iter().any(|&v| v < 1) {
                    return Err("per-course ceiling entries must be at least 1".into());
                }
                Ok(values.clone())
            }
        }
    }
}

impl From<u32> for CeilingSpec {
    fn from(v: u32) -> Self {
        CeilingSpec::Scalar(v)
    }
}

impl From<Vec<u32>> for CeilingSpec {
    fn from(v: Vec<u32>) -> Self {
        CeilingSpec::PerCourse(v)
    }
}

/// Configuration for a timetable generation run.
///
/// # Defaults
///
/// ```
/// use timetable_ga::TimetableConfig;
///
/// let config = TimetableConfig::default();
/// assert_eq!(config.classes, 4);
/// assert_eq!(config.population_size, 40);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use timetable_ga::{CeilingSpec, TimetableConfig};
///
/// let config = TimetableConfig::default()
///     .with_courses(5)
///     .with_teachers(CeilingSpec::PerCourse(vec![1, 2, 3, 2, 2]))
///     .with_population_size(60)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimetableConfig {
    /// Number of classes the timetable is generated for.
    pub classes: usize,

    /// Number of distinct courses to schedule.
    pub courses: usize,

    /// Number of teaching slots in one day.
    pub slots_per_day: usize,

    /// Number of days in the scheduling week.
    pub days: usize,

    /// How many times a course may be taught per day per class.
    pub daily_repeat: CeilingSpec,

    /// How many classes may run the same course in the same slot
    /// simultaneously (teacher availability).
    pub teachers: CeilingSpec,

    /// Number of candidate assignments per generation.
    pub population_size: usize,

    /// Fitness value at which an evolution run terminates early.
    ///
    /// Candidate fitness never exceeds 100, so a ceiling above 100
    /// forces every run through the full generation cap.
    pub fitness_ceiling: f64,

    /// Maximum number of generations per evolution run.
    pub max_generations: usize,

    /// Whether to evaluate fitness in parallel using rayon.
    ///
    /// Only evaluation fans out; selection, breeding, and commitment
    /// stay sequential.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for TimetableConfig {
    fn default() -> Self {
        Self {
            classes: 4,
            courses: 4,
            slots_per_day: 7,
            days: 5,
            daily_repeat: CeilingSpec::Scalar(2),
            teachers: CeilingSpec::Scalar(1),
            population_size: 40,
            fitness_ceiling: 100.0,
            max_generations: 50,
            parallel: false,
            seed: None,
        }
    }
}

impl TimetableConfig {
    /// Sets the number of classes.
    pub fn with_classes(mut self, n: usize) -> Self {
        self.classes = n;
        self
    }

    /// Sets the number of courses.
    pub fn with_courses(mut self, n: usize) -> Self {
        self.courses = n;
        self
    }

    /// Sets the number of slots per day.
    pub fn with_slots_per_day(mut self, n: usize) -> Self {
        self.slots_per_day = n;
        self
    }

    /// Sets the number of days per week.
    pub fn with_days(mut self, n: usize) -> Self {
        self.days = n;
        self
    }

    /// Sets the daily repetition ceiling (scalar or per-course).
    pub fn with_daily_repeat(mut self, spec: CeilingSpec) -> Self {
        self.daily_repeat = spec;
        self
    }

    /// Sets the teacher availability ceiling (scalar or per-course).
    pub fn with_teachers(mut self, spec: CeilingSpec) -> Self {
        self.teachers = spec;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the early-termination fitness ceiling.
    pub fn with_fitness_ceiling(mut self, ceiling: f64) -> Self {
        self.fitness_ceiling = ceiling;
        self
    }

    /// Sets the generation cap per evolution run.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Enables or disables parallel fitness evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Total number of weekly slots per class.
    pub fn total_slots(&self) -> usize {
        self.slots_per_day * self.days
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.classes < 1 {
            return Err("classes must be at least 1".into());
        }
        if self.courses < 1 {
            return Err("courses must be at least 1".into());
        }
        if self.slots_per_day < 1 {
            return Err("slots_per_day must be at least 1".into());
        }
        if self.days < 1 {
            return Err("days must be at least 1".into());
        }
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.max_generations == 0 {
            return Err("max_generations must be at least 1".into());
        }
        if !self.fitness_ceiling.is_finite() || self.fitness_ceiling <= 0.0 {
            return Err("fitness_ceiling must be positive and finite".into());
        }
        self.daily_repeat
            .resolve(self.courses)
            .map_err(|e| format!("daily_repeat: {e}"))?;
        self.teachers
            .resolve(self.courses)
            .map_err(|e| format!("teachers: {e}"))?;

        let total_slots = (self.slots_per_day as u64)
            .checked_mul(self.days as u64)
            .ok_or("slots_per_day * days overflows")?;
        if self.classes as u64 > u32::MAX as u64
            || self.courses as u64 > u32::MAX as u64
            || total_slots > u32::MAX as u64
        {
            return Err("counts must fit in 32-bit codes".into());
        }
        let genome_bits = bit_width(self.courses as u64)
            + bit_width(total_slots)
            + bit_width(self.classes as u64);
        if genome_bits > 64 {
            return Err(format!(
                "problem dimensions need {genome_bits} genome bits, at most 64 supported"
            ));
        }
        Ok(())
    }
}
