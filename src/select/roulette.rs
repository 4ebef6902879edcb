use super::{roulette_draws, Select};
use crate::genotype::Genotype;
use crate::population::Population;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Fitness-proportionate selection restricted to the top-ranked half of the
/// population, which keeps weak chromosomes out of the breeding pool
/// entirely.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Roulette;

impl Roulette {
    pub fn new() -> Self {
        Self
    }
}

impl Select for Roulette {
    fn call<G: Genotype, R: Rng>(
        &self,
        population: &Population<G>,
        number_of_parents: usize,
        rng: &mut R,
    ) -> Vec<usize> {
        let keep = (population.size() + 1) / 2;
        let mut candidates = population.ranked_indices();
        candidates.truncate(keep.max(1));
        roulette_draws(population, &candidates, number_of_parents, rng, |rng| {
            rng.gen::<f64>()
        })
    }
}
