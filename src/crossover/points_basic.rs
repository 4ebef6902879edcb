use super::{draw_points, split_and_swap_children, Crossover};
use crate::chromosome::Chromosome;
use crate::errors::Error;
use crate::fitness::{Evaluator, Fitness};
use crate::genotype::Genotype;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// n-point split-and-swap between the first two parents, returning one of
/// the two children uniformly at random. The cheapest point-based strategy,
/// as no candidate is evaluated.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PointsBasic {
    pub number_of_points: usize,
}

impl PointsBasic {
    pub fn new(number_of_points: usize) -> Self {
        Self { number_of_points }
    }
}

impl Crossover for PointsBasic {
    fn call<G: Genotype, F: Fitness<Genotype = G>, R: Rng>(
        &self,
        genotype: &G,
        parents: &[&Chromosome<G>],
        _evaluator: &mut Evaluator<F>,
        rng: &mut R,
    ) -> Result<Chromosome<G>, Error> {
        let (father, mother) = (parents[0], parents[1]);
        let points = draw_points(genotype, father, mother, self.number_of_points, rng);
        if points.is_empty() {
            return Ok(father.clone());
        }
        let (child_a, child_b) = split_and_swap_children(genotype, father, mother, &points);
        Ok(if rng.gen::<bool>() { child_a } else { child_b })
    }
    fn require_crossover_points(&self) -> bool {
        true
    }
}
