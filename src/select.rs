//! The selection phase: choosing the parent indices each breeding event
//! draws its offspring from. All schemes return `number_of_parents` indices
//! into the current population, duplicates allowed.
//!
//! The weighted schemes require non-negative fitness; negative scores weigh
//! as zero. When the weight total degenerates to zero the scheme falls back
//! to uniform sampling and records a warning-level event.
mod distribution;
mod roulette;
mod roulette_basic;
mod roulette_distribution;
mod wrapper;

pub use self::distribution::Distribution as SelectDistribution;
pub use self::roulette::Roulette as SelectRoulette;
pub use self::roulette_basic::RouletteBasic as SelectRouletteBasic;
pub use self::roulette_distribution::RouletteDistribution as SelectRouletteDistribution;
pub use self::wrapper::Wrapper as SelectWrapper;

use crate::genotype::Genotype;
use crate::population::Population;
use rand::Rng;

pub trait Select: Clone + Send + Sync + std::fmt::Debug {
    fn call<G: Genotype, R: Rng>(
        &self,
        population: &Population<G>,
        number_of_parents: usize,
        rng: &mut R,
    ) -> Vec<usize>;
}

/// Cumulative non-negative fitness over the candidate indices.
pub(crate) fn cumulative_weights<G: Genotype>(
    population: &Population<G>,
    candidates: &[usize],
) -> (Vec<f64>, f64) {
    let mut cumulative = Vec::with_capacity(candidates.len());
    let mut total = 0.0;
    for &index in candidates {
        total += population.chromosomes[index]
            .fitness_score
            .unwrap_or(0.0)
            .max(0.0);
        cumulative.push(total);
    }
    (cumulative, total)
}

/// Spin the wheel `count` times, mapping each unit draw onto the cumulative
/// fitness range by binary search. Boundary hits resolve to the lower index.
pub(crate) fn roulette_draws<G: Genotype, R: Rng>(
    population: &Population<G>,
    candidates: &[usize],
    count: usize,
    rng: &mut R,
    mut draw_unit: impl FnMut(&mut R) -> f64,
) -> Vec<usize> {
    let (cumulative, total) = cumulative_weights(population, candidates);
    if total <= 0.0 {
        log::warn!("degenerate selection: zero fitness total, falling back to uniform sampling");
        return (0..count)
            .map(|_| candidates[rng.gen_range(0..candidates.len())])
            .collect();
    }
    (0..count)
        .map(|_| {
            let target = draw_unit(rng) * total;
            let slot = cumulative
                .partition_point(|&bound| bound <= target)
                .min(candidates.len() - 1);
            candidates[slot]
        })
        .collect()
}
