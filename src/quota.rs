//! Remaining-capacity bookkeeping.
//!
//! Three quota tables steer the search:
//!
//! - `course_quota[class][course]`: remaining weekly occurrences,
//!   initialized from a fair share of the weekly slots.
//! - `repeat_quota[class][course]`: daily repetition ceiling.
//! - `teacher_quota[course]`: how many classes may run the course in the
//!   same slot simultaneously (shared across classes, not per class).
//!
//! Quota state changes exactly once per committed genome, via
//! [`QuotaTracker::commit`] — never during fitness evaluation.

use rand::Rng;

/// Per-run quota state.
#[derive(Debug, Clone)]
pub struct QuotaTracker {
    course_quota: Vec<Vec<i32>>,
    repeat_quota: Vec<Vec<u32>>,
    teacher_quota: Vec<u32>,
}

impl QuotaTracker {
    /// Creates quota state for a fresh run.
    ///
    /// `repeat` and `teachers` are the per-course ceilings already
    /// resolved from [`CeilingSpec`](crate::CeilingSpec); both must have
    /// one entry per course. The weekly fair share is drawn once and
    /// replicated identically for every class.
    pub fn new<R: Rng>(
        classes: usize,
        courses: usize,
        total_slots: usize,
        repeat: Vec<u32>,
        teachers: Vec<u32>,
        rng: &mut R,
    ) -> Self {
        debug_assert_eq!(repeat.len(), courses);
        debug_assert_eq!(teachers.len(), courses);
        let shares = fair_share(courses, total_slots, rng);
        Self {
            course_quota: vec![shares; classes],
            repeat_quota: vec![repeat; classes],
            teacher_quota: teachers,
        }
    }

    /// Remaining weekly occurrences for a (class, course) pair.
    ///
    /// `course` is the 1-based code carried by genomes and grid cells.
    /// Can go negative once a run over-commits a course.
    pub fn remaining(&self, class: usize, course: u32) -> i32 {
        self.course_quota[class][(course - 1) as usize]
    }

    /// Daily repetition ceiling for a (class, course) pair.
    pub fn daily_repeat_ceiling(&self, class: usize, course: u32) -> u32 {
        self.repeat_quota[class][(course - 1) as usize]
    }

    /// Cross-class teacher availability ceiling for a course.
    pub fn teacher_ceiling(&self, course: u32) -> u32 {
        self.teacher_quota[(course - 1) as usize]
    }

    /// Consumes one weekly occurrence of a committed assignment.
    ///
    /// Called exactly once per winning genome, by the driver.
    pub fn commit(&mut self, class: usize, course: u32) {
        self.course_quota[class][(course - 1) as usize] -= 1;
    }
}

/// Splits the weekly slots evenly across courses.
///
/// With a remainder, every course starts at `q + 1` and one contiguous
/// block gives one back so the shares sum to exactly `total_slots`. The
/// block start is drawn from `1..=remainder`, so the first course always
/// keeps the larger share.
fn fair_share<R: Rng>(courses: usize, total_slots: usize, rng: &mut R) -> Vec<i32> {
    let q = (total_slots / courses) as i32;
    let remainder = total_slots % courses;
    if remainder == 0 {
        return vec![q; courses];
    }

    let mut shares = vec![q + 1; courses];
    let surplus = courses - remainder;
    let start = rng.random_range(1..=remainder);
    for share in &mut shares[start..start + surplus] {
        *share -= 1;
    }
    shares
}
