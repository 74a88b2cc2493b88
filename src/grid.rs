//! The committed timetable.
//!
//! A three-dimensional array indexed `[class][day][slot]`, stored flat.
//! Cells hold 1-based course codes; 0 marks an empty cell. The grid is
//! populated only through driver commitment, never during genome
//! generation or fitness evaluation.

/// Course code marking an unfilled cell.
pub const EMPTY: u32 = 0;

/// The class × day × slot assignment grid.
///
/// Consumers (rendering, export) should treat a completed grid as
/// read-only and translate course codes to display names externally.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleGrid {
    classes: usize,
    days: usize,
    slots_per_day: usize,
    cells: Vec<u32>,
}

impl ScheduleGrid {
    /// Creates an all-empty grid.
    pub fn new(classes: usize, days: usize, slots_per_day: usize) -> Self {
        Self {
            classes,
            days,
            slots_per_day,
            cells: vec![EMPTY; classes * days * slots_per_day],
        }
    }

    /// Number of classes.
    pub fn classes(&self) -> usize {
        self.classes
    }

    /// Number of days.
    pub fn days(&self) -> usize {
        self.days
    }

    /// Number of slots per day.
    pub fn slots_per_day(&self) -> usize {
        self.slots_per_day
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    fn index(&self, class: usize, day: usize, slot: usize) -> usize {
        debug_assert!(class < self.classes && day < self.days && slot < self.slots_per_day);
        (class * self.days + day) * self.slots_per_day + slot
    }

    /// Course code at a cell, or [`EMPTY`].
    pub fn get(&self, class: usize, day: usize, slot: usize) -> u32 {
        self.cells[self.index(class, day, slot)]
    }

    /// Writes a course code into a cell.
    pub fn set(&mut self, class: usize, day: usize, slot: usize, course: u32) {
        let idx = self.index(class, day, slot);
        self.cells[idx] = course;
    }

    /// One day of one class as a slot-ordered slice.
    pub fn day_row(&self, class: usize, day: usize) -> &[u32] {
        let start = self.index(class, day, 0);
        &self.cells[start..start + self.slots_per_day]
    }

    /// How many times `course` appears in one day of one class.
    pub fn day_occurrences(&self, class: usize, day: usize, course: u32) -> usize {
        self.day_row(class, day)
            .iter()
            .filter(|&&c| c == course)
            .count()
    }

    /// How many classes hold `course` at the given (day, slot).
    pub fn course_holders_at(&self, day: usize, slot: usize, course: u32) -> usize {
        (0..self.classes)
            .filter(|&class| self.get(class, day, slot) == course)
            .count()
    }

    /// Whether every cell holds a course code.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|&c| c != EMPTY)
    }

    /// Number of still-empty cells.
    pub fn empty_cells(&self) -> usize {
        self.cells.iter().filter(|&&c| c == EMPTY).count()
    }
}
