use super::builder::Builder;
use super::{random_shape, split_hole_prefix, validate_shape, Edge, Genotype, VariableLength};
use crate::chromosome::Chromosome;
use crate::errors::Error;
use fixedbitset::FixedBitSet;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Genes are single bits in a [FixedBitSet], so storage is a single
/// bit-packed backing buffer. On random initialization each gene has a 50%
/// probability of becoming true or false; a mutating gene is flipped.
///
/// # Example:
/// ```
/// use genetic_engine::genotype::{BitVectorGenotype, Genotype};
///
/// let genotype = BitVectorGenotype::builder()
///     .with_genes_size(100)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BitVector {
    pub genes_size: usize,
    variable_length: VariableLength,
}

impl TryFrom<Builder<Self>> for BitVector {
    type Error = Error;

    fn try_from(builder: Builder<Self>) -> Result<Self, Self::Error> {
        if !builder.genes_size.is_some_and(|size| size > 0) {
            Err(Error::InvalidConfig("BitVectorGenotype requires a genes_size > 0"))
        } else {
            Ok(Self {
                genes_size: builder.genes_size.unwrap(),
                variable_length: builder.variable_length,
            })
        }
    }
}

impl Genotype for BitVector {
    type Allele = bool;
    type Genes = FixedBitSet;

    fn genes_size(&self) -> usize {
        self.genes_size
    }
    fn variable_length(&self) -> VariableLength {
        self.variable_length
    }

    fn chromosome_factory<R: Rng>(&self, rng: &mut R) -> Chromosome<Self> {
        let (hole_prefix, defined) = random_shape(self.variable_length, self.genes_size, rng);
        let mut genes = FixedBitSet::with_capacity(defined);
        (0..defined).for_each(|index| genes.set(index, rng.gen::<bool>()));
        Chromosome::with_hole_prefix(genes, hole_prefix)
    }

    fn chromosome_from_alleles(
        &self,
        alleles: &[Option<Self::Allele>],
    ) -> Result<Chromosome<Self>, Error> {
        let (hole_prefix, defined) = split_hole_prefix(alleles)?;
        validate_shape(
            self.variable_length,
            self.genes_size,
            hole_prefix,
            defined.len(),
        )?;
        let mut genes = FixedBitSet::with_capacity(defined.len());
        defined
            .iter()
            .enumerate()
            .for_each(|(index, allele)| genes.set(index, allele.unwrap_or_default()));
        Ok(Chromosome::with_hole_prefix(genes, hole_prefix))
    }

    fn genes_len(&self, chromosome: &Chromosome<Self>) -> usize {
        chromosome.genes.len()
    }
    fn allele(&self, chromosome: &Chromosome<Self>, position: usize) -> Option<Self::Allele> {
        if position < chromosome.hole_prefix {
            None
        } else {
            let index = position - chromosome.hole_prefix;
            (index < chromosome.genes.len()).then(|| chromosome.genes.contains(index))
        }
    }
    fn gene_token(allele: &Self::Allele) -> String {
        if *allele { "1".to_string() } else { "0".to_string() }
    }

    fn mutate_gene<R: Rng>(&self, chromosome: &mut Chromosome<Self>, index: usize, _rng: &mut R) {
        chromosome.genes.toggle(index);
    }

    fn grow_chromosome<R: Rng>(
        &self,
        chromosome: &mut Chromosome<Self>,
        edge: Edge,
        rng: &mut R,
    ) -> bool {
        match edge {
            Edge::Right => {
                if self.positions(chromosome) >= self.genes_size {
                    return false;
                }
                let index = chromosome.genes.len();
                chromosome.genes.grow(index + 1);
                chromosome.genes.set(index, rng.gen::<bool>());
                true
            }
            Edge::Left => {
                if self.variable_length != VariableLength::BothEdges
                    || chromosome.hole_prefix == 0
                {
                    return false;
                }
                let mut genes = FixedBitSet::with_capacity(chromosome.genes.len() + 1);
                genes.set(0, rng.gen::<bool>());
                chromosome
                    .genes
                    .ones()
                    .for_each(|index| genes.insert(index + 1));
                chromosome.genes = genes;
                chromosome.hole_prefix -= 1;
                true
            }
        }
    }

    fn shrink_chromosome(&self, chromosome: &mut Chromosome<Self>, edge: Edge) -> bool {
        let defined = chromosome.genes.len();
        if defined <= 1 {
            return false;
        }
        match edge {
            Edge::Right => {
                let mut genes = FixedBitSet::with_capacity(defined - 1);
                chromosome
                    .genes
                    .ones()
                    .filter(|&index| index < defined - 1)
                    .for_each(|index| genes.insert(index));
                chromosome.genes = genes;
                true
            }
            Edge::Left => {
                if self.variable_length != VariableLength::BothEdges {
                    return false;
                }
                let mut genes = FixedBitSet::with_capacity(defined - 1);
                chromosome
                    .genes
                    .ones()
                    .filter(|&index| index > 0)
                    .for_each(|index| genes.insert(index - 1));
                chromosome.genes = genes;
                chromosome.hole_prefix += 1;
                true
            }
        }
    }

    fn raw_gene(&self, chromosome: &Chromosome<Self>, index: usize) -> u64 {
        chromosome.genes.contains(index) as u64
    }
    fn push_raw_gene(&self, chromosome: &mut Chromosome<Self>, raw: u64) {
        if self.positions(chromosome) >= self.genes_size {
            return;
        }
        let index = chromosome.genes.len();
        chromosome.genes.grow(index + 1);
        chromosome.genes.set(index, raw != 0);
    }
    fn empty_chromosome(&self, hole_prefix: usize) -> Chromosome<Self> {
        Chromosome::with_hole_prefix(FixedBitSet::default(), hole_prefix)
    }
}

impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "genotype:")?;
        writeln!(f, "  genes_size: {}", self.genes_size)?;
        writeln!(f, "  variable_length: {:?}", self.variable_length)
    }
}
