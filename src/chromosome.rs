//! The Chromosome is a candidate solution, owned by the
//! [Population](crate::population::Population)
use crate::fitness::FitnessValue;
use crate::genotype::Genotype;
use serde::{Deserialize, Serialize};

/// Compact fingerprint of a chromosome's genes, used as the fitness cache key
/// and for uniqueness filtering.
pub type GenesHash = u64;

/// A sequence of genes in the genotype's compact storage, plus the fitness
/// column slot for this chromosome. Level-2 variable-length chromosomes carry
/// a hole prefix: the number of leading positions with no defined gene.
/// Trailing positions are never holes.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(serialize = "", deserialize = ""))]
pub struct Chromosome<G: Genotype> {
    pub genes: G::Genes,
    pub hole_prefix: usize,
    pub fitness_score: Option<FitnessValue>,
}

impl<G: Genotype> Chromosome<G> {
    pub fn new(genes: G::Genes) -> Self {
        Self {
            genes,
            hole_prefix: 0,
            fitness_score: None,
        }
    }

    pub fn with_hole_prefix(genes: G::Genes, hole_prefix: usize) -> Self {
        Self {
            genes,
            hole_prefix,
            fitness_score: None,
        }
    }

    pub fn fitness_score(&self) -> Option<FitnessValue> {
        self.fitness_score
    }
    pub fn set_fitness_score(&mut self, fitness_score: Option<FitnessValue>) {
        self.fitness_score = fitness_score;
    }

    /// Invalidate the fitness score after a genes change.
    pub fn taint(&mut self) {
        self.fitness_score = None;
    }
}

/// Equality is over content only (genes and hole prefix), not over the
/// fitness column slot.
impl<G: Genotype> PartialEq for Chromosome<G> {
    fn eq(&self, other: &Self) -> bool {
        self.hole_prefix == other.hole_prefix && self.genes == other.genes
    }
}
