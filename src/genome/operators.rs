//! Segment-aligned crossover and mutation.
//!
//! Cut points always fall on segment boundaries, so offspring inherit
//! whole codes and never need re-validation. Applying the same cut
//! twice restores the original pair.

use super::codec::{Genome, GenomeCodec};
use rand::Rng;

/// A crossover cut position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cut {
    /// Swap the course segments.
    Course,
    /// Swap the weekly-slot segments.
    Slot,
    /// Swap everything but the class segment (course + slot prefix).
    Prefix,
}

/// The genome segment a mutation regenerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Course,
    Slot,
    Class,
}

/// Crosses two genomes at a fixed cut, returning two offspring.
pub fn crossover_at(codec: &GenomeCodec, a: Genome, b: Genome, cut: Cut) -> (Genome, Genome) {
    match cut {
        Cut::Course => (
            codec.with_course_code(a, codec.course_code(b)),
            codec.with_course_code(b, codec.course_code(a)),
        ),
        Cut::Slot => (
            codec.with_slot_code(a, codec.slot_code(b)),
            codec.with_slot_code(b, codec.slot_code(a)),
        ),
        Cut::Prefix => (
            codec.with_class_code(a, codec.class_code(b)),
            codec.with_class_code(b, codec.class_code(a)),
        ),
    }
}

/// Single-point crossover: one of the three cuts, chosen uniformly.
pub fn single_point_crossover<R: Rng>(
    codec: &GenomeCodec,
    a: Genome,
    b: Genome,
    rng: &mut R,
) -> (Genome, Genome) {
    let cut = match rng.random_range(0..3) {
        0 => Cut::Course,
        1 => Cut::Slot,
        _ => Cut::Prefix,
    };
    crossover_at(codec, a, b, cut)
}

/// Applies single-point crossover `points` times, feeding each result
/// into the next round. Zero points returns the parents unchanged.
pub fn multi_point_crossover<R: Rng>(
    codec: &GenomeCodec,
    mut a: Genome,
    mut b: Genome,
    points: usize,
    rng: &mut R,
) -> (Genome, Genome) {
    for _ in 0..points {
        let (c, d) = single_point_crossover(codec, a, b, rng);
        a = c;
        b = d;
    }
    (a, b)
}

/// Regenerates one named segment with a fresh uniform draw.
///
/// The fresh code may coincide with the old one; mutation does not
/// force a change.
pub fn mutate_segment<R: Rng>(
    codec: &GenomeCodec,
    genome: Genome,
    segment: Segment,
    rng: &mut R,
) -> Genome {
    match segment {
        Segment::Course => codec.with_course_code(genome, codec.random_course_code(rng)),
        Segment::Slot => codec.with_slot_code(genome, codec.random_slot_code(rng)),
        Segment::Class => codec.with_class_code(genome, codec.random_class_code(rng)),
    }
}

/// Mutation: one of the three segments, chosen uniformly, regenerated.
pub fn mutate<R: Rng>(codec: &GenomeCodec, genome: Genome, rng: &mut R) -> Genome {
    let segment = match rng.random_range(0..3) {
        0 => Segment::Course,
        1 => Segment::Slot,
        _ => Segment::Class,
    };
    mutate_segment(codec, genome, segment, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn codec() -> GenomeCodec {
        GenomeCodec::new(4, 5, 6, 5)
    }

    fn fields(codec: &GenomeCodec, g: Genome) -> (u32, u32, u32) {
        (codec.course_code(g), codec.slot_code(g), codec.class_code(g))
    }

    #[test]
    fn test_course_cut_swaps_course_only() {
        let codec = codec();
        let a = codec.encode(1, 10, 2);
        let b = codec.encode(4, 25, 3);
        let (c, d) = crossover_at(&codec, a, b, Cut::Course);
        assert_eq!(fields(&codec, c), (4, 10, 2));
        assert_eq!(fields(&codec, d), (1, 25, 3));
    }

    #[test]
    fn test_slot_cut_swaps_slot_only() {
        let codec = codec();
        let a = codec.encode(1, 10, 2);
        let b = codec.encode(4, 25, 3);
        let (c, d) = crossover_at(&codec, a, b, Cut::Slot);
        assert_eq!(fields(&codec, c), (1, 25, 2));
        assert_eq!(fields(&codec, d), (4, 10, 3));
    }

    #[test]
    fn test_prefix_cut_keeps_course_and_slot_together() {
        let codec = codec();
        let a = codec.encode(1, 10, 2);
        let b = codec.encode(4, 25, 3);
        let (c, d) = crossover_at(&codec, a, b, Cut::Prefix);
        assert_eq!(fields(&codec, c), (1, 10, 3));
        assert_eq!(fields(&codec, d), (4, 25, 2));
    }

    #[test]
    fn test_crossover_involution() {
        let codec = codec();
        let a = codec.encode(2, 7, 1);
        let b = codec.encode(5, 30, 4);
        for cut in [Cut::Course, Cut::Slot, Cut::Prefix] {
            let (c, d) = crossover_at(&codec, a, b, cut);
            let (a2, b2) = crossover_at(&codec, c, d, cut);
            assert_eq!((a2, b2), (a, b), "cut {cut:?} is not an involution");
        }
    }

    #[test]
    fn test_single_point_children_draw_segments_from_parents() {
        let codec = codec();
        let a = codec.encode(1, 10, 2);
        let b = codec.encode(4, 25, 3);
        let mut rng = create_rng(42);
        for _ in 0..200 {
            let (c, d) = single_point_crossover(&codec, a, b, &mut rng);
            for child in [c, d] {
                let (course, slot, class) = fields(&codec, child);
                assert!(course == 1 || course == 4);
                assert!(slot == 10 || slot == 25);
                assert!(class == 2 || class == 3);
            }
            // segments are swapped, never duplicated
            assert_ne!(codec.course_code(c), codec.course_code(d));
            assert_ne!(codec.slot_code(c), codec.slot_code(d));
            assert_ne!(codec.class_code(c), codec.class_code(d));
        }
    }

    #[test]
    fn test_multi_point_zero_points_is_identity() {
        let codec = codec();
        let a = codec.encode(2, 7, 1);
        let b = codec.encode(5, 30, 4);
        let mut rng = create_rng(42);
        assert_eq!(multi_point_crossover(&codec, a, b, 0, &mut rng), (a, b));
    }

    #[test]
    fn test_multi_point_preserves_segment_pool() {
        let codec = codec();
        let a = codec.encode(2, 7, 1);
        let b = codec.encode(5, 30, 4);
        let mut rng = create_rng(42);
        for points in 1..6 {
            let (c, d) = multi_point_crossover(&codec, a, b, points, &mut rng);
            // Each segment value pair survives crossover, possibly swapped.
            let mut courses = [codec.course_code(c), codec.course_code(d)];
            courses.sort_unstable();
            assert_eq!(courses, [2, 5]);
            let mut slots = [codec.slot_code(c), codec.slot_code(d)];
            slots.sort_unstable();
            assert_eq!(slots, [7, 30]);
            let mut classes = [codec.class_code(c), codec.class_code(d)];
            classes.sort_unstable();
            assert_eq!(classes, [1, 4]);
        }
    }

    #[test]
    fn test_mutate_segment_touches_one_segment() {
        let codec = codec();
        let g = codec.encode(3, 15, 2);
        let mut rng = create_rng(42);

        for _ in 0..100 {
            let m = mutate_segment(&codec, g, Segment::Course, &mut rng);
            assert_eq!(codec.slot_code(m), 15);
            assert_eq!(codec.class_code(m), 2);

            let m = mutate_segment(&codec, g, Segment::Slot, &mut rng);
            assert_eq!(codec.course_code(m), 3);
            assert_eq!(codec.class_code(m), 2);

            let m = mutate_segment(&codec, g, Segment::Class, &mut rng);
            assert_eq!(codec.course_code(m), 3);
            assert_eq!(codec.slot_code(m), 15);
        }
    }

    #[test]
    fn test_mutate_changes_at_most_one_segment() {
        let codec = codec();
        let g = codec.encode(3, 15, 2);
        let mut rng = create_rng(42);
        for _ in 0..500 {
            let m = mutate(&codec, g, &mut rng);
            let differing = [
                codec.course_code(m) != 3,
                codec.slot_code(m) != 15,
                codec.class_code(m) != 2,
            ]
            .iter()
            .filter(|&&changed| changed)
            .count();
            assert!(differing <= 1, "mutation touched {differing} segments");
        }
    }

    #[test]
    fn test_mutate_leaves_original_untouched() {
        let codec = codec();
        let g = codec.encode(3, 15, 2);
        let mut rng = create_rng(42);
        let _ = mutate(&codec, g, &mut rng);
        assert_eq!(fields(&codec, g), (3, 15, 2));
    }

    #[test]
    fn test_mutated_fields_stay_in_range() {
        let codec = codec();
        let g = codec.encode(3, 15, 2);
        let mut rng = create_rng(7);
        for _ in 0..1000 {
            let m = mutate(&codec, g, &mut rng);
            assert!((1..=5).contains(&codec.course_code(m)));
            assert!((1..=30).contains(&codec.slot_code(m)));
            assert!((1..=4).contains(&codec.class_code(m)));
        }
    }
}
