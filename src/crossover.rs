//! The crossover phase: producing one child from the selected parent tuple.
//!
//! The point-based strategies cut both parents at the same positions and
//! reassemble the segments; the number of cut points clamps to the effective
//! length minus one, and the cut range is always the shorter parent's
//! effective length. Strategies that rank their candidates evaluate them
//! through the engine's [Evaluator](crate::fitness::Evaluator), so those
//! scores hit the fitness cache like any other evaluation.
//!
//! Permutation genotypes can't exchange gene segments without duplication
//! issues and use [CrossoverPmx] or [CrossoverOx] instead; the engine builder
//! rejects mismatched combinations.
mod distribution;
mod ox;
mod pmx;
mod points;
mod points_advanced;
mod points_basic;
mod points_simple;
mod wrapper;

pub use self::distribution::Distribution as CrossoverDistribution;
pub use self::ox::Ox as CrossoverOx;
pub use self::pmx::Pmx as CrossoverPmx;
pub use self::points::Points as CrossoverPoints;
pub use self::points_advanced::PointsAdvanced as CrossoverPointsAdvanced;
pub use self::points_basic::PointsBasic as CrossoverPointsBasic;
pub use self::points_simple::PointsSimple as CrossoverPointsSimple;
pub use self::wrapper::Wrapper as CrossoverWrapper;

use crate::chromosome::Chromosome;
use crate::errors::Error;
use crate::fitness::{Evaluator, Fitness};
use crate::genotype::Genotype;
use ordered_float::OrderedFloat;
use rand::Rng;

pub trait Crossover: Clone + Send + Sync + std::fmt::Debug {
    fn call<G: Genotype, F: Fitness<Genotype = G>, R: Rng>(
        &self,
        genotype: &G,
        parents: &[&Chromosome<G>],
        evaluator: &mut Evaluator<F>,
        rng: &mut R,
    ) -> Result<Chromosome<G>, Error>;

    fn require_crossover_points(&self) -> bool {
        false
    }
    fn require_permutation(&self) -> bool {
        false
    }
}

/// Distinct ascending cut points in `[1, len - 1]`, drawn against the
/// shorter parent's effective length. Empty when there is nothing to cut.
pub(crate) fn draw_points<G: Genotype, R: Rng>(
    genotype: &G,
    father: &Chromosome<G>,
    mother: &Chromosome<G>,
    number_of_points: usize,
    rng: &mut R,
) -> Vec<usize> {
    let len = genotype.genes_len(father).min(genotype.genes_len(mother));
    if len < 2 || number_of_points == 0 {
        return vec![];
    }
    let mut points: Vec<usize> = rand::seq::index::sample(rng, len - 1, number_of_points.min(len - 1))
        .iter()
        .map(|point| point + 1)
        .collect();
    points.sort_unstable();
    points
}

/// The two split-and-swap children for one cut pattern.
pub(crate) fn split_and_swap_children<G: Genotype>(
    genotype: &G,
    father: &Chromosome<G>,
    mother: &Chromosome<G>,
    points: &[usize],
) -> (Chromosome<G>, Chromosome<G>) {
    (
        genotype.crossover_points_child(father, mother, points),
        genotype.crossover_points_child(mother, father, points),
    )
}

/// The fitter of two scored chromosomes, ties and unscored resolve to the
/// first.
pub(crate) fn fitter_of<G: Genotype>(
    first: Chromosome<G>,
    second: Chromosome<G>,
) -> Chromosome<G> {
    if second.fitness_score.map(OrderedFloat) > first.fitness_score.map(OrderedFloat) {
        second
    } else {
        first
    }
}
