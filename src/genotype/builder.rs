use super::{Genotype, VariableLength};
use crate::errors::Error;
use std::ops::RangeInclusive;

/// The builder for all genotypes. Each genotype picks the fields it needs and
/// rejects missing or inconsistent ones in its `TryFrom` implementation.
#[derive(Clone, Debug)]
pub struct Builder<G: Genotype> {
    pub genes_size: Option<usize>,
    pub allele_list: Option<Vec<G::Allele>>,
    pub allele_lists: Option<Vec<Vec<G::Allele>>>,
    pub allele_ranges: Option<Vec<RangeInclusive<i64>>>,
    pub variable_length: VariableLength,
}

impl<G: Genotype> Builder<G> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of gene positions, used by genotypes without per-position
    /// specifications.
    pub fn with_genes_size(mut self, genes_size: usize) -> Self {
        self.genes_size = Some(genes_size);
        self
    }

    /// The global alphabet of a permutation genotype.
    pub fn with_allele_list(mut self, allele_list: Vec<G::Allele>) -> Self {
        self.allele_list = Some(allele_list);
        self
    }

    /// One alphabet per gene position.
    pub fn with_allele_lists(mut self, allele_lists: Vec<Vec<G::Allele>>) -> Self {
        self.allele_lists = Some(allele_lists);
        self
    }

    /// One inclusive integer range per gene position.
    pub fn with_allele_ranges(mut self, allele_ranges: Vec<RangeInclusive<i64>>) -> Self {
        self.allele_ranges = Some(allele_ranges);
        self
    }

    pub fn with_variable_length(mut self, variable_length: VariableLength) -> Self {
        self.variable_length = variable_length;
        self
    }

    pub fn build(self) -> Result<G, Error> {
        self.try_into()
    }
}

impl<G: Genotype> Default for Builder<G> {
    fn default() -> Self {
        Self {
            genes_size: None,
            allele_list: None,
            allele_lists: None,
            allele_ranges: None,
            variable_length: VariableLength::default(),
        }
    }
}
