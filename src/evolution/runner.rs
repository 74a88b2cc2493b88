//! Generational loop execution.

use super::selection::select_weighted;
use crate::fitness::FitnessEvaluator;
use crate::genome::{operators, Genome, GenomeCodec};
use rand::Rng;
use rayon::prelude::*;

/// Search knobs for one [`evolve`] call.
#[derive(Debug, Clone)]
pub struct EvolutionParams {
    /// Number of genomes in the initial population.
    pub population_size: usize,

    /// Fitness at which the search terminates early.
    pub fitness_ceiling: f64,

    /// Maximum number of generations.
    pub max_generations: usize,

    /// Whether to evaluate fitness in parallel using rayon.
    pub parallel: bool,
}

/// Result of one evolution run.
#[derive(Debug, Clone)]
pub struct EvolutionOutcome {
    /// The fittest genome found.
    pub best: Genome,

    /// Fitness of [`best`](Self::best) against the state the run was
    /// evaluated under.
    pub best_fitness: f64,

    /// Number of breeding cycles completed before returning.
    pub generations: usize,

    /// Whether the fitness ceiling was reached (otherwise the
    /// generation cap expired and `best` is best-effort).
    pub reached_ceiling: bool,

    /// Best fitness observed at each generation.
    pub fitness_history: Vec<f64>,
}

/// A genome with its cached fitness.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    genome: Genome,
    fitness: f64,
}

/// Breeding pairs produced per generation.
///
/// Two elites pass through unchanged and every pair contributes two
/// children, so an even population keeps its size and an odd one
/// shrinks by one on the first generation, then holds.
fn breeding_pairs(population_len: usize) -> usize {
    population_len / 2 - 1
}

/// Runs the generational loop against a frozen grid/quota state and
/// returns the fittest assignment found.
///
/// Terminates as soon as the best candidate of a generation reaches
/// `fitness_ceiling`; otherwise breeds up to `max_generations`
/// generations and returns the best of the final one.
///
/// # Panics
/// Panics if `population_size` is below 2 (the two elites).
pub fn evolve<R: Rng>(
    evaluator: &FitnessEvaluator<'_>,
    codec: &GenomeCodec,
    params: &EvolutionParams,
    rng: &mut R,
) -> EvolutionOutcome {
    assert!(
        params.population_size >= 2,
        "population must hold at least the two elites"
    );

    let mut population: Vec<Genome> = (0..params.population_size)
        .map(|_| codec.random_genome(rng))
        .collect();
    let mut fitness_history = Vec::with_capacity(params.max_generations + 1);

    for generation in 0..params.max_generations {
        let scored = rank_population(evaluator, &population, params.parallel);
        fitness_history.push(scored[0].fitness);

        if scored[0].fitness >= params.fitness_ceiling {
            return EvolutionOutcome {
                best: scored[0].genome,
                best_fitness: scored[0].fitness,
                generations: generation,
                reached_ceiling: true,
                fitness_history,
            };
        }

        let weights: Vec<f64> = scored.iter().map(|c| c.fitness).collect();
        let mut next = vec![scored[0].genome, scored[1].genome];
        for _ in 0..breeding_pairs(scored.len()) {
            let p1 = scored[select_weighted(&weights, rng)].genome;
            let p2 = scored[select_weighted(&weights, rng)].genome;
            let (c1, c2) = operators::single_point_crossover(codec, p1, p2, rng);
            next.push(operators::mutate(codec, c1, rng));
            next.push(operators::mutate(codec, c2, rng));
        }
        population = next;
    }

    let scored = rank_population(evaluator, &population, params.parallel);
    fitness_history.push(scored[0].fitness);
    EvolutionOutcome {
        best: scored[0].genome,
        best_fitness: scored[0].fitness,
        generations: params.max_generations,
        reached_ceiling: false,
        fitness_history,
    }
}

/// Scores the whole population and sorts it best-first.
fn rank_population(
    evaluator: &FitnessEvaluator<'_>,
    population: &[Genome],
    parallel: bool,
) -> Vec<Candidate> {
    let mut scored: Vec<Candidate> = if parallel {
        population
            .par_iter()
            .map(|&genome| Candidate {
                genome,
                fitness: evaluator.score(genome),
            })
            .collect()
    } else {
        population
            .iter()
            .map(|&genome| Candidate {
                genome,
                fitness: evaluator.score(genome),
            })
            .collect()
    };
    scored.sort_by(|a, b| {
        b.fitness
            .partial_cmp(&a.fitness)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored
}
