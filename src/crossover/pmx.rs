use super::Crossover;
use crate::chromosome::Chromosome;
use crate::errors::Error;
use crate::fitness::{Evaluator, Fitness};
use crate::genotype::Genotype;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Partially mapped crossover for permutation genotypes: the child starts as
/// a copy of the first parent, then the genes of the second parent's cut
/// segment are swapped into place one by one, keeping the permutation intact
/// throughout.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Pmx;

impl Pmx {
    pub fn new() -> Self {
        Self
    }
}

impl Crossover for Pmx {
    fn call<G: Genotype, F: Fitness<Genotype = G>, R: Rng>(
        &self,
        genotype: &G,
        parents: &[&Chromosome<G>],
        _evaluator: &mut Evaluator<F>,
        rng: &mut R,
    ) -> Result<Chromosome<G>, Error> {
        Ok(genotype.pmx_child(parents[0], parents[1], rng))
    }
    fn require_permutation(&self) -> bool {
        true
    }
}
