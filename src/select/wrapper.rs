pub use super::distribution::Distribution as SelectDistribution;
pub use super::roulette::Roulette as SelectRoulette;
pub use super::roulette_basic::RouletteBasic as SelectRouletteBasic;
pub use super::roulette_distribution::RouletteDistribution as SelectRouletteDistribution;
pub use super::Select;

use crate::errors::Error;
use crate::genotype::Genotype;
use crate::population::Population;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Wrapper {
    RouletteBasic(SelectRouletteBasic),
    Roulette(SelectRoulette),
    RouletteDistribution(SelectRouletteDistribution),
    Distribution(SelectDistribution),
}

impl Select for Wrapper {
    fn call<G: Genotype, R: Rng>(
        &self,
        population: &Population<G>,
        number_of_parents: usize,
        rng: &mut R,
    ) -> Vec<usize> {
        match self {
            Wrapper::RouletteBasic(select) => select.call(population, number_of_parents, rng),
            Wrapper::Roulette(select) => select.call(population, number_of_parents, rng),
            Wrapper::RouletteDistribution(select) => {
                select.call(population, number_of_parents, rng)
            }
            Wrapper::Distribution(select) => select.call(population, number_of_parents, rng),
        }
    }
}

impl Wrapper {
    /// Reject impossible sampler parameters when building the engine.
    pub fn validate(&self) -> Result<(), Error> {
        match self {
            Wrapper::RouletteBasic(_) | Wrapper::Roulette(_) => Ok(()),
            Wrapper::RouletteDistribution(select) => select.sampler.validate(),
            Wrapper::Distribution(select) => select.sampler.validate(),
        }
    }
}

impl From<SelectRouletteBasic> for Wrapper {
    fn from(select: SelectRouletteBasic) -> Self {
        Wrapper::RouletteBasic(select)
    }
}
impl From<SelectRoulette> for Wrapper {
    fn from(select: SelectRoulette) -> Self {
        Wrapper::Roulette(select)
    }
}
impl From<SelectRouletteDistribution> for Wrapper {
    fn from(select: SelectRouletteDistribution) -> Self {
        Wrapper::RouletteDistribution(select)
    }
}
impl From<SelectDistribution> for Wrapper {
    fn from(select: SelectDistribution) -> Self {
        Wrapper::Distribution(select)
    }
}
