use super::{fitter_of, split_and_swap_children, Crossover};
use crate::chromosome::Chromosome;
use crate::errors::Error;
use crate::fitness::{Evaluator, Fitness};
use crate::genotype::Genotype;
use crate::sampler::Sampler;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Single-point split-and-swap where the cut position is drawn from a
/// configured distribution over `[1, L-1]` instead of uniformly. Both
/// children are evaluated and the fitter one wins, like
/// [Points](super::CrossoverPoints).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Distribution {
    pub sampler: Sampler,
}

impl Distribution {
    pub fn new(sampler: Sampler) -> Self {
        Self { sampler }
    }
}

impl Crossover for Distribution {
    fn call<G: Genotype, F: Fitness<Genotype = G>, R: Rng>(
        &self,
        genotype: &G,
        parents: &[&Chromosome<G>],
        evaluator: &mut Evaluator<F>,
        rng: &mut R,
    ) -> Result<Chromosome<G>, Error> {
        let (father, mother) = (parents[0], parents[1]);
        let len = genotype.genes_len(father).min(genotype.genes_len(mother));
        if len < 2 {
            return Ok(father.clone());
        }
        let point = 1 + self.sampler.sample_index(rng, len - 1);
        let (mut child_a, mut child_b) =
            split_and_swap_children(genotype, father, mother, &[point]);
        evaluator.call_for_chromosome(genotype, &mut child_a)?;
        evaluator.call_for_chromosome(genotype, &mut child_b)?;
        Ok(fitter_of(child_a, child_b))
    }
    fn require_crossover_points(&self) -> bool {
        true
    }
}
