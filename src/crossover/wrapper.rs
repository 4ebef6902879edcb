pub use super::distribution::Distribution as CrossoverDistribution;
pub use super::ox::Ox as CrossoverOx;
pub use super::pmx::Pmx as CrossoverPmx;
pub use super::points::Points as CrossoverPoints;
pub use super::points_advanced::PointsAdvanced as CrossoverPointsAdvanced;
pub use super::points_basic::PointsBasic as CrossoverPointsBasic;
pub use super::points_simple::{PointsSimple as CrossoverPointsSimple, MAX_SIMPLE_POINTS};
pub use super::Crossover;

use crate::chromosome::Chromosome;
use crate::errors::Error;
use crate::fitness::{Evaluator, Fitness};
use crate::genotype::Genotype;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Wrapper {
    PointsSimple(CrossoverPointsSimple),
    PointsBasic(CrossoverPointsBasic),
    Points(CrossoverPoints),
    PointsAdvanced(CrossoverPointsAdvanced),
    Distribution(CrossoverDistribution),
    Pmx(CrossoverPmx),
    Ox(CrossoverOx),
}

impl Crossover for Wrapper {
    fn call<G: Genotype, F: Fitness<Genotype = G>, R: Rng>(
        &self,
        genotype: &G,
        parents: &[&Chromosome<G>],
        evaluator: &mut Evaluator<F>,
        rng: &mut R,
    ) -> Result<Chromosome<G>, Error> {
        match self {
            Wrapper::PointsSimple(crossover) => crossover.call(genotype, parents, evaluator, rng),
            Wrapper::PointsBasic(crossover) => crossover.call(genotype, parents, evaluator, rng),
            Wrapper::Points(crossover) => crossover.call(genotype, parents, evaluator, rng),
            Wrapper::PointsAdvanced(crossover) => {
                crossover.call(genotype, parents, evaluator, rng)
            }
            Wrapper::Distribution(crossover) => crossover.call(genotype, parents, evaluator, rng),
            Wrapper::Pmx(crossover) => crossover.call(genotype, parents, evaluator, rng),
            Wrapper::Ox(crossover) => crossover.call(genotype, parents, evaluator, rng),
        }
    }

    fn require_crossover_points(&self) -> bool {
        match self {
            Wrapper::PointsSimple(crossover) => crossover.require_crossover_points(),
            Wrapper::PointsBasic(crossover) => crossover.require_crossover_points(),
            Wrapper::Points(crossover) => crossover.require_crossover_points(),
            Wrapper::PointsAdvanced(crossover) => crossover.require_crossover_points(),
            Wrapper::Distribution(crossover) => crossover.require_crossover_points(),
            Wrapper::Pmx(crossover) => crossover.require_crossover_points(),
            Wrapper::Ox(crossover) => crossover.require_crossover_points(),
        }
    }

    fn require_permutation(&self) -> bool {
        match self {
            Wrapper::PointsSimple(crossover) => crossover.require_permutation(),
            Wrapper::PointsBasic(crossover) => crossover.require_permutation(),
            Wrapper::Points(crossover) => crossover.require_permutation(),
            Wrapper::PointsAdvanced(crossover) => crossover.require_permutation(),
            Wrapper::Distribution(crossover) => crossover.require_permutation(),
            Wrapper::Pmx(crossover) => crossover.require_permutation(),
            Wrapper::Ox(crossover) => crossover.require_permutation(),
        }
    }
}

impl Wrapper {
    /// Reject impossible strategy parameters when building the engine.
    pub fn validate(&self) -> Result<(), Error> {
        match self {
            Wrapper::PointsSimple(crossover) => {
                if crossover.number_of_points > MAX_SIMPLE_POINTS {
                    Err(Error::InvalidConfig(
                        "PointsSimple enumerates 2^(n+1) assignments and is limited to 15 points",
                    ))
                } else {
                    Ok(())
                }
            }
            Wrapper::Distribution(crossover) => crossover.sampler.validate(),
            _ => Ok(()),
        }
    }
}

impl From<CrossoverPointsSimple> for Wrapper {
    fn from(crossover: CrossoverPointsSimple) -> Self {
        Wrapper::PointsSimple(crossover)
    }
}
impl From<CrossoverPointsBasic> for Wrapper {
    fn from(crossover: CrossoverPointsBasic) -> Self {
        Wrapper::PointsBasic(crossover)
    }
}
impl From<CrossoverPoints> for Wrapper {
    fn from(crossover: CrossoverPoints) -> Self {
        Wrapper::Points(crossover)
    }
}
impl From<CrossoverPointsAdvanced> for Wrapper {
    fn from(crossover: CrossoverPointsAdvanced) -> Self {
        Wrapper::PointsAdvanced(crossover)
    }
}
impl From<CrossoverDistribution> for Wrapper {
    fn from(crossover: CrossoverDistribution) -> Self {
        Wrapper::Distribution(crossover)
    }
}
impl From<CrossoverPmx> for Wrapper {
    fn from(crossover: CrossoverPmx) -> Self {
        Wrapper::Pmx(crossover)
    }
}
impl From<CrossoverOx> for Wrapper {
    fn from(crossover: CrossoverOx) -> Self {
        Wrapper::Ox(crossover)
    }
}
