use super::{draw_points, fitter_of, split_and_swap_children, Crossover};
use crate::chromosome::Chromosome;
use crate::errors::Error;
use crate::fitness::{Evaluator, Fitness};
use crate::genotype::Genotype;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// n-point split-and-swap between the first two parents, evaluating both
/// children and returning the fitter one (ties resolve to the first).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Points {
    pub number_of_points: usize,
}

impl Points {
    pub fn new(number_of_points: usize) -> Self {
        Self { number_of_points }
    }
}

impl Crossover for Points {
    fn call<G: Genotype, F: Fitness<Genotype = G>, R: Rng>(
        &self,
        genotype: &G,
        parents: &[&Chromosome<G>],
        evaluator: &mut Evaluator<F>,
        rng: &mut R,
    ) -> Result<Chromosome<G>, Error> {
        let (father, mother) = (parents[0], parents[1]);
        let points = draw_points(genotype, father, mother, self.number_of_points, rng);
        if points.is_empty() {
            return Ok(father.clone());
        }
        let (mut child_a, mut child_b) = split_and_swap_children(genotype, father, mother, &points);
        evaluator.call_for_chromosome(genotype, &mut child_a)?;
        evaluator.call_for_chromosome(genotype, &mut child_b)?;
        Ok(fitter_of(child_a, child_b))
    }
    fn require_crossover_points(&self) -> bool {
        true
    }
}
