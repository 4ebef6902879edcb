use super::builder::Builder;
use super::packed::{CellWidth, PackedVec};
use super::{random_shape, split_hole_prefix, validate_shape, Edge, Genotype, VariableLength};
use crate::chromosome::Chromosome;
use crate::errors::Error;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Genes are integers within one inclusive range per gene position, stored as
/// offsets from the range start in a [PackedVec] whose cell width is the
/// narrowest of 1, 2, 4 or 8 bytes covering the widest column span. On random
/// initialization each gene is drawn uniformly from its range, and a mutating
/// gene is replaced the same way.
///
/// # Example:
/// ```
/// use genetic_engine::genotype::{Genotype, RangeVectorGenotype};
///
/// let genotype = RangeVectorGenotype::builder()
///     .with_allele_ranges(vec![-10..=10, 0..=100, -4..=4])
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RangeVector {
    pub allele_ranges: Vec<RangeInclusive<i64>>,
    variable_length: VariableLength,
    cell: CellWidth,
}

impl TryFrom<Builder<Self>> for RangeVector {
    type Error = Error;

    fn try_from(builder: Builder<Self>) -> Result<Self, Self::Error> {
        if builder.allele_ranges.is_none() {
            Err(Error::InvalidConfig("RangeVectorGenotype requires allele_ranges"))
        } else if builder
            .allele_ranges
            .as_ref()
            .is_some_and(|ranges| ranges.is_empty())
        {
            Err(Error::InvalidConfig(
                "RangeVectorGenotype requires non-empty allele_ranges",
            ))
        } else if builder
            .allele_ranges
            .as_ref()
            .unwrap()
            .iter()
            .any(|range| range.start() > range.end())
        {
            Err(Error::InvalidConfig(
                "RangeVectorGenotype requires start <= end for every range",
            ))
        } else {
            let allele_ranges = builder.allele_ranges.unwrap();
            let max_span = allele_ranges.iter().map(span).max().unwrap();
            Ok(Self {
                allele_ranges,
                variable_length: builder.variable_length,
                cell: CellWidth::for_max(max_span),
            })
        }
    }
}

/// Width of a range as an offset count, overflow-safe across the full i64
/// domain.
fn span(range: &RangeInclusive<i64>) -> u64 {
    (*range.end() as i128 - *range.start() as i128) as u64
}

impl RangeVector {
    fn range(&self, position: usize) -> &RangeInclusive<i64> {
        &self.allele_ranges[position]
    }

    fn decode(&self, position: usize, offset: u64) -> i64 {
        (*self.range(position).start() as i128 + offset as i128) as i64
    }
}

impl Genotype for RangeVector {
    type Allele = i64;
    type Genes = PackedVec;

    fn genes_size(&self) -> usize {
        self.allele_ranges.len()
    }
    fn variable_length(&self) -> VariableLength {
        self.variable_length
    }

    fn chromosome_factory<R: Rng>(&self, rng: &mut R) -> Chromosome<Self> {
        let (hole_prefix, defined) = random_shape(self.variable_length, self.genes_size(), rng);
        let mut genes = PackedVec::with_capacity(self.cell, defined);
        (0..defined).for_each(|index| {
            genes.push(rng.gen_range(0..=span(self.range(hole_prefix + index))));
        });
        Chromosome::with_hole_prefix(genes, hole_prefix)
    }

    fn chromosome_from_alleles(
        &self,
        alleles: &[Option<Self::Allele>],
    ) -> Result<Chromosome<Self>, Error> {
        let (hole_prefix, defined) = split_hole_prefix(alleles)?;
        validate_shape(
            self.variable_length,
            self.genes_size(),
            hole_prefix,
            defined.len(),
        )?;
        let mut genes = PackedVec::with_capacity(self.cell, defined.len());
        for (index, allele) in defined.iter().enumerate() {
            let position = hole_prefix + index;
            let value = allele.unwrap();
            let range = self.range(position);
            if !range.contains(&value) {
                return Err(Error::InvalidChromosome(format!(
                    "value {} is outside {:?} at position {}",
                    value, range, position
                )));
            }
            genes.push((value as i128 - *range.start() as i128) as u64);
        }
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
            (index < chromosome.genes.len())
                .then(|| self.decode(position, chromosome.genes.get(index)))
        }
    }

    fn mutate_gene<R: Rng>(&self, chromosome: &mut Chromosome<Self>, index: usize, rng: &mut R) {
        let position = chromosome.hole_prefix + index;
        chromosome
            .genes
            .set(index, rng.gen_range(0..=span(self.range(position))));
    }

    fn grow_chromosome<R: Rng>(
        &self,
        chromosome: &mut Chromosome<Self>,
        edge: Edge,
        rng: &mut R,
    ) -> bool {
        match edge {
            Edge::Right => {
                let position = self.positions(chromosome);
                if position >= self.genes_size() {
                    return false;
                }
                chromosome
                    .genes
                    .push(rng.gen_range(0..=span(self.range(position))));
                true
            }
            Edge::Left => {
                if self.variable_length != VariableLength::BothEdges
                    || chromosome.hole_prefix == 0
                {
                    return false;
                }
                let position = chromosome.hole_prefix - 1;
                chromosome
                    .genes
                    .insert_first(rng.gen_range(0..=span(self.range(position))));
                chromosome.hole_prefix = position;
                true
            }
        }
    }

    fn shrink_chromosome(&self, chromosome: &mut Chromosome<Self>, edge: Edge) -> bool {
        if chromosome.genes.len() <= 1 {
            return false;
        }
        match edge {
            Edge::Right => {
                chromosome.genes.pop();
                true
            }
            Edge::Left => {
                if self.variable_length != VariableLength::BothEdges {
                    return false;
                }
                chromosome.genes.remove_first();
                chromosome.hole_prefix += 1;
                true
            }
        }
    }

    fn raw_gene(&self, chromosome: &Chromosome<Self>, index: usize) -> u64 {
        chromosome.genes.get(index)
    }
    fn push_raw_gene(&self, chromosome: &mut Chromosome<Self>, raw: u64) {
        let position = self.positions(chromosome);
        if position >= self.genes_size() {
            return;
        }
        chromosome.genes.push(raw.min(span(self.range(position))));
    }
    fn empty_chromosome(&self, hole_prefix: usize) -> Chromosome<Self> {
        Chromosome::with_hole_prefix(PackedVec::new(self.cell), hole_prefix)
    }
}

impl fmt::Display for RangeVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "genotype:")?;
        writeln!(f, "  genes_size: {}", self.genes_size())?;
        writeln!(f, "  allele_ranges: {:?}", self.allele_ranges)?;
        writeln!(f, "  cell_width: {:?}", self.cell)?;
        writeln!(f, "  variable_length: {:?}", self.variable_length)
    }
}
