//! Placeholder fitness functions for testing and examples
use super::{Fitness, FitnessValue};
use crate::chromosome::Chromosome;
use crate::errors::Error;
use crate::genotype::{BitVectorGenotype, Genotype, RangeVectorGenotype};
use std::marker::PhantomData;

/// Number of true genes of a [BitVectorGenotype] chromosome.
#[derive(Clone, Debug)]
pub struct CountOnes;
impl Fitness for CountOnes {
    type Genotype = BitVectorGenotype;
    fn calculate_for_chromosome(
        &mut self,
        chromosome: &mut Chromosome<Self::Genotype>,
        _genotype: &Self::Genotype,
    ) -> Result<FitnessValue, Error> {
        Ok(chromosome.genes.count_ones(..) as FitnessValue)
    }
}

/// Sum of the decoded genes of a [RangeVectorGenotype] chromosome.
#[derive(Clone, Debug)]
pub struct SumGenes;
impl Fitness for SumGenes {
    type Genotype = RangeVectorGenotype;
    fn calculate_for_chromosome(
        &mut self,
        chromosome: &mut Chromosome<Self::Genotype>,
        genotype: &Self::Genotype,
    ) -> Result<FitnessValue, Error> {
        Ok(genotype
            .alleles(chromosome)
            .into_iter()
            .flatten()
            .sum::<i64>() as FitnessValue)
    }
}

/// Always zero, for testing the degenerate selection fallback.
#[derive(Clone, Debug)]
pub struct Zero<G: Genotype>(PhantomData<G>);
impl<G: Genotype> Zero<G> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}
impl<G: Genotype> Default for Zero<G> {
    fn default() -> Self {
        Self::new()
    }
}
impl<G: Genotype> Fitness for Zero<G> {
    type Genotype = G;
    fn calculate_for_chromosome(
        &mut self,
        _chromosome: &mut Chromosome<Self::Genotype>,
        _genotype: &Self::Genotype,
    ) -> Result<FitnessValue, Error> {
        Ok(0.0)
    }
}
