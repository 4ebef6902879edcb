use super::{roulette_draws, Select};
use crate::genotype::Genotype;
use crate::population::Population;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Fitness-proportionate selection over the whole population: each parent
/// index is drawn with probability proportional to its fitness score.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RouletteBasic;

impl RouletteBasic {
    pub fn new() -> Self {
        Self
    }
}

impl Select for RouletteBasic {
    fn call<G: Genotype, R: Rng>(
        &self,
        population: &Population<G>,
        number_of_parents: usize,
        rng: &mut R,
    ) -> Vec<usize> {
        let candidates: Vec<usize> = (0..population.size()).collect();
        roulette_draws(population, &candidates, number_of_parents, rng, |rng| {
            rng.gen::<f64>()
        })
    }
}
