use super::{draw_points, Crossover};
use crate::chromosome::Chromosome;
use crate::errors::Error;
use crate::fitness::{Evaluator, Fitness};
use crate::genotype::Genotype;
use ordered_float::OrderedFloat;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Exhaustive n-point crossover: for one sampled cut pattern every one of
/// the `2^(n+1)` father/mother segment assignments is assembled and
/// evaluated, and the best candidate wins. The all-father and all-mother
/// assignments are part of the enumeration, so the parents themselves bound
/// the result. Exponential in the number of points, which the engine builder
/// caps accordingly.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PointsSimple {
    pub number_of_points: usize,
}

/// Enumerating segment assignments beyond this many points is rejected when
/// building the engine.
pub const MAX_SIMPLE_POINTS: usize = 15;

impl PointsSimple {
    pub fn new(number_of_points: usize) -> Self {
        Self { number_of_points }
    }
}

impl Crossover for PointsSimple {
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
        let segments = points.len() + 1;
        let mut best: Option<Chromosome<G>> = None;
        for mask in 0..(1u64 << segments) {
            let mut candidate = assemble(genotype, father, mother, &points, mask);
            evaluator.call_for_chromosome(genotype, &mut candidate)?;
            if best.as_ref().map_or(true, |best| {
                candidate.fitness_score.map(OrderedFloat) > best.fitness_score.map(OrderedFloat)
            }) {
                best = Some(candidate);
            }
        }
        Ok(best.unwrap())
    }
    fn require_crossover_points(&self) -> bool {
        true
    }
}

/// Assemble one segment assignment: bit k of `mask` picks the parent
/// contributing segment k. The final segment extends to its contributor's
/// effective length.
fn assemble<G: Genotype>(
    genotype: &G,
    father: &Chromosome<G>,
    mother: &Chromosome<G>,
    points: &[usize],
    mask: u64,
) -> Chromosome<G> {
    let parents = [father, mother];
    let first = parents[(mask & 1) as usize];
    let mut child = genotype.empty_chromosome(first.hole_prefix);
    let segments = points.len() + 1;
    for segment in 0..segments {
        let source = parents[((mask >> segment) & 1) as usize];
        let start = if segment == 0 { 0 } else { points[segment - 1] };
        let end = if segment == segments - 1 {
            genotype.genes_len(source)
        } else {
            points[segment]
        };
        for index in start..end {
            child_push(genotype, &mut child, source, index);
        }
    }
    child
}

fn child_push<G: Genotype>(
    genotype: &G,
    child: &mut Chromosome<G>,
    source: &Chromosome<G>,
    index: usize,
) {
    genotype.push_raw_gene(child, genotype.raw_gene(source, index));
}
