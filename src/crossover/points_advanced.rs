use super::{draw_points, fitter_of, split_and_swap_children, Crossover};
use crate::chromosome::Chromosome;
use crate::errors::Error;
use crate::fitness::{Evaluator, Fitness};
use crate::genotype::Genotype;
use ordered_float::OrderedFloat;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// n-point split-and-swap, then pick the single best of the parents and both
/// children by fitness rank. A strictly fitter parent survives as a copy,
/// ties go to the child.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PointsAdvanced {
    pub number_of_points: usize,
}

impl PointsAdvanced {
    pub fn new(number_of_points: usize) -> Self {
        Self { number_of_points }
    }
}

impl Crossover for PointsAdvanced {
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
        let best_child = fitter_of(child_a, child_b);

        let best_parent = parents
            .iter()
            .max_by_key(|parent| parent.fitness_score.map(OrderedFloat))
            .unwrap();
        if best_parent.fitness_score.map(OrderedFloat)
            > best_child.fitness_score.map(OrderedFloat)
        {
            Ok((*best_parent).clone())
        } else {
            Ok(best_child)
        }
    }
    fn require_crossover_points(&self) -> bool {
        true
    }
}
