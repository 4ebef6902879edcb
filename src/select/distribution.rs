use super::Select;
use crate::genotype::Genotype;
use crate::population::Population;
use crate::sampler::Sampler;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Parent indices drawn directly from a configured distribution over
/// `[0, population_size)`, with no fitness weighting at all.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Distribution {
    pub sampler: Sampler,
}

impl Distribution {
    pub fn new(sampler: Sampler) -> Self {
        Self { sampler }
    }
}

impl Select for Distribution {
    fn call<G: Genotype, R: Rng>(
        &self,
        population: &Population<G>,
        number_of_parents: usize,
        rng: &mut R,
    ) -> Vec<usize> {
        (0..number_of_parents)
            .map(|_| self.sampler.sample_index(rng, population.size()))
            .collect()
    }
}
