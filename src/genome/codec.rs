//! Bit-field genome codec.
//!
//! Segment widths are the bit-length of the respective count value: with
//! 8 courses the largest course code is 8 (`1000`), so the course
//! segment is 4 bits wide. The weekly slot code runs over
//! `slots_per_day * days`, so one segment addresses the whole week.

use rand::Rng;

/// Returns the bit-length of `value` (0 for 0).
///
/// This is the number of bits needed to represent the largest code of a
/// segment whose maximum value is `value`.
pub fn bit_width(value: u64) -> u32 {
    64 - value.leading_zeros()
}

/// A candidate assignment packed into a fixed-width bit field.
///
/// Layout (high to low): course code, weekly slot code, class code.
/// Genomes are immutable values; every operator produces a new genome.
///
/// Fields are valid by construction — only [`GenomeCodec`] and the
/// operators in [`super::operators`] build genomes, and both draw each
/// segment from its 1-based code range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Genome(u64);

impl Genome {
    /// Raw packed bits, mostly useful for debugging.
    pub fn bits(self) -> u64 {
        self.0
    }
}

/// A decoded genome: the grid position it targets and the course code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    /// 1-based course code, the value committed into the grid.
    pub course: u32,
    /// 0-based class index.
    pub class: usize,
    /// 0-based day index.
    pub day: usize,
    /// 0-based slot index within the day.
    pub slot: usize,
}

/// Encodes and decodes genomes for one problem instance.
///
/// Constructed once per run from the configured counts; all segment
/// widths and offsets are fixed from then on.
#[derive(Debug, Clone)]
pub struct GenomeCodec {
    class_count: u32,
    course_count: u32,
    slots_per_day: u32,
    total_slots: u32,
    course_bits: u32,
    slot_bits: u32,
    class_bits: u32,
}

impl GenomeCodec {
    /// Creates a codec for the given problem dimensions.
    ///
    /// Counts must be at least 1 and the three segment widths must fit
    /// in 64 bits; [`TimetableConfig::validate`] checks both before a
    /// run starts.
    ///
    /// [`TimetableConfig::validate`]: crate::TimetableConfig::validate
    pub fn new(classes: usize, courses: usize, slots_per_day: usize, days: usize) -> Self {
        let total_slots = (slots_per_day * days) as u32;
        Self {
            class_count: classes as u32,
            course_count: courses as u32,
            slots_per_day: slots_per_day as u32,
            total_slots,
            course_bits: bit_width(courses as u64),
            slot_bits: bit_width(total_slots as u64),
            class_bits: bit_width(classes as u64),
        }
    }

    /// Width of the course segment in bits.
    pub fn course_bits(&self) -> u32 {
        self.course_bits
    }

    /// Width of the weekly-slot segment in bits.
    pub fn slot_bits(&self) -> u32 {
        self.slot_bits
    }

    /// Width of the class segment in bits.
    pub fn class_bits(&self) -> u32 {
        self.class_bits
    }

    /// Total genome width in bits.
    pub fn total_bits(&self) -> u32 {
        self.course_bits + self.slot_bits + self.class_bits
    }

    /// Number of weekly slots per class.
    pub fn total_slots(&self) -> u32 {
        self.total_slots
    }

    /// Packs the three 1-based codes into a genome.
    pub fn encode(&self, course: u32, slot_code: u32, class: u32) -> Genome {
        debug_assert!(course >= 1 && course <= self.course_count);
        debug_assert!(slot_code >= 1 && slot_code <= self.total_slots);
        debug_assert!(class >= 1 && class <= self.class_count);
        Genome(
            ((course as u64) << (self.slot_bits + self.class_bits))
                | ((slot_code as u64) << self.class_bits)
                | class as u64,
        )
    }

    /// Draws a uniform 1-based course code.
    pub fn random_course_code<R: Rng>(&self, rng: &mut R) -> u32 {
        rng.random_range(1..=self.course_count)
    }

    /// Draws a uniform 1-based weekly slot code.
    pub fn random_slot_code<R: Rng>(&self, rng: &mut R) -> u32 {
        rng.random_range(1..=self.total_slots)
    }

    /// Draws a uniform 1-based class code.
    pub fn random_class_code<R: Rng>(&self, rng: &mut R) -> u32 {
        rng.random_range(1..=self.class_count)
    }

    /// Generates a uniformly random genome.
    pub fn random_genome<R: Rng>(&self, rng: &mut R) -> Genome {
        let course = self.random_course_code(rng);
        let slot = self.random_slot_code(rng);
        let class = self.random_class_code(rng);
        self.encode(course, slot, class)
    }

    /// Extracts the 1-based course code.
    pub fn course_code(&self, genome: Genome) -> u32 {
        (genome.0 >> (self.slot_bits + self.class_bits)) as u32
    }

    /// Extracts the 1-based weekly slot code.
    pub fn slot_code(&self, genome: Genome) -> u32 {
        ((genome.0 >> self.class_bits) & mask(self.slot_bits)) as u32
    }

    /// Extracts the 1-based class code.
    pub fn class_code(&self, genome: Genome) -> u32 {
        (genome.0 & mask(self.class_bits)) as u32
    }

    /// Returns `genome` with its course segment replaced.
    pub fn with_course_code(&self, genome: Genome, course: u32) -> Genome {
        self.encode(course, self.slot_code(genome), self.class_code(genome))
    }

    /// Returns `genome` with its weekly-slot segment replaced.
    pub fn with_slot_code(&self, genome: Genome, slot_code: u32) -> Genome {
        self.encode(self.course_code(genome), slot_code, self.class_code(genome))
    }

    /// Returns `genome` with its class segment replaced.
    pub fn with_class_code(&self, genome: Genome, class: u32) -> Genome {
        self.encode(self.course_code(genome), self.slot_code(genome), class)
    }

    /// Decodes a genome into the grid position it targets.
    ///
    /// The weekly slot code maps to a (day, slot) pair by
    /// `day = (code - 1) / slots_per_day` and
    /// `slot = (code - 1) % slots_per_day`. A code that is an exact
    /// multiple of `slots_per_day` therefore lands on the last slot of
    /// its day rather than slot 0 of the next.
    pub fn decode(&self, genome: Genome) -> Assignment {
        let slot_code = self.slot_code(genome);
        Assignment {
            course: self.course_code(genome),
            class: (self.class_code(genome) - 1) as usize,
            day: ((slot_code - 1) / self.slots_per_day) as usize,
            slot: ((slot_code - 1) % self.slots_per_day) as usize,
        }
    }
}

fn mask(bits: u32) -> u64 {
    (1u64 << bits) - 1
}
