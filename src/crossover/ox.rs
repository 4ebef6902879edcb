use super::Crossover;
use crate::chromosome::Chromosome;
use crate::errors::Error;
use crate::fitness::{Evaluator, Fitness};
use crate::genotype::Genotype;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Order crossover for permutation genotypes: the child inherits the first
/// parent's cut segment in place, the remaining positions fill with the
/// second parent's genes in their order of appearance after the segment,
/// wrapping around and skipping genes already placed.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Ox;

impl Ox {
    pub fn new() -> Self {
        Self
    }
}

impl Crossover for Ox {
    fn call<G: Genotype, F: Fitness<Genotype = G>, R: Rng>(
        &self,
        genotype: &G,
        parents: &[&Chromosome<G>],
        _evaluator: &mut Evaluator<F>,
        rng: &mut R,
    ) -> Result<Chromosome<G>, Error> {
        Ok(genotype.ox_child(parents[0], parents[1], rng))
    }
    fn require_permutation(&self) -> bool {
        true
    }
}
