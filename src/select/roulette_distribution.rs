use super::{roulette_draws, Select};
use crate::genotype::Genotype;
use crate::population::Population;
use crate::sampler::Sampler;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Fitness-proportionate selection where the wheel position is drawn from a
/// configured distribution instead of uniformly: the unit draw maps onto
/// `[0, total_fitness)` and the matching slot is found by binary search over
/// the cumulative fitness.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouletteDistribution {
    pub sampler: Sampler,
}

impl RouletteDistribution {
    pub fn new(sampler: Sampler) -> Self {
        Self { sampler }
    }
}

impl Select for RouletteDistribution {
    fn call<G: Genotype, R: Rng>(
        &self,
        population: &Population<G>,
        number_of_parents: usize,
        rng: &mut R,
    ) -> Vec<usize> {
        let candidates: Vec<usize> = (0..population.size()).collect();
        let size = candidates.len();
        roulette_draws(population, &candidates, number_of_parents, rng, |rng| {
            self.sampler.sample_unit(rng, size)
        })
    }
}
