use super::builder::Builder;
use super::{random_shape, split_hole_prefix, validate_shape, Allele, Edge, Genotype, VariableLength};
use crate::chromosome::Chromosome;
use crate::errors::Error;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Genes are indices into one allele list per gene position, stored as `u16`.
/// On random initialization each gene is drawn uniformly from its position's
/// list. A mutating gene is replaced with another uniform draw, distinct from
/// the current value whenever the list allows it. Defaults to `String`
/// alleles.
///
/// # Example:
/// ```
/// use genetic_engine::genotype::{Genotype, ListVectorGenotype};
///
/// let genotype = ListVectorGenotype::<u8>::builder()
///     .with_allele_lists(vec![
///         vec![1, 2, 3],
///         vec![4, 5],
///         vec![6, 7, 8, 9],
///     ])
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(serialize = "", deserialize = ""))]
pub struct ListVector<T: Allele = String> {
    pub allele_lists: Vec<Vec<T>>,
    variable_length: VariableLength,
}

impl<T: Allele> TryFrom<Builder<Self>> for ListVector<T> {
    type Error = Error;

    fn try_from(builder: Builder<Self>) -> Result<Self, Self::Error> {
        if builder.allele_lists.is_none() {
            Err(Error::InvalidConfig("ListVectorGenotype requires allele_lists"))
        } else if builder
            .allele_lists
            .as_ref()
            .is_some_and(|lists| lists.is_empty())
        {
            Err(Error::InvalidConfig(
                "ListVectorGenotype requires non-empty allele_lists",
            ))
        } else if builder
            .allele_lists
            .as_ref()
            .unwrap()
            .iter()
            .any(|list| list.is_empty())
        {
            Err(Error::InvalidConfig(
                "ListVectorGenotype requires a non-empty allele list per position",
            ))
        } else if builder
            .allele_lists
            .as_ref()
            .unwrap()
            .iter()
            .any(|list| list.len() > u16::MAX as usize + 1)
        {
            Err(Error::InvalidConfig(
                "ListVectorGenotype allele lists are limited to 65536 entries",
            ))
        } else {
            Ok(Self {
                allele_lists: builder.allele_lists.unwrap(),
                variable_length: builder.variable_length,
            })
        }
    }
}

impl<T: Allele> ListVector<T> {
    fn list(&self, position: usize) -> &[T] {
        &self.allele_lists[position]
    }
}

impl<T: Allele> Genotype for ListVector<T> {
    type Allele = T;
    type Genes = Vec<u16>;

    fn genes_size(&self) -> usize {
        self.allele_lists.len()
    }
    fn variable_length(&self) -> VariableLength {
        self.variable_length
    }

    fn chromosome_factory<R: Rng>(&self, rng: &mut R) -> Chromosome<Self> {
        let (hole_prefix, defined) = random_shape(self.variable_length, self.genes_size(), rng);
        let genes = (0..defined)
            .map(|index| rng.gen_range(0..self.list(hole_prefix + index).len()) as u16)
            .collect();
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
        let genes = defined
            .iter()
            .enumerate()
            .map(|(index, allele)| {
                let position = hole_prefix + index;
                let allele = allele.as_ref().unwrap();
                self.list(position)
                    .iter()
                    .position(|candidate| candidate == allele)
                    .map(|list_index| list_index as u16)
                    .ok_or_else(|| {
                        Error::InvalidChromosome(format!(
                            "allele {:?} is not in the list for position {}",
                            allele, position
                        ))
                    })
            })
            .collect::<Result<Vec<u16>, Error>>()?;
        Ok(Chromosome::with_hole_prefix(genes, hole_prefix))
    }

    fn genes_len(&self, chromosome: &Chromosome<Self>) -> usize {
        chromosome.genes.len()
    }
    fn allele(&self, chromosome: &Chromosome<Self>, position: usize) -> Option<Self::Allele> {
        if position < chromosome.hole_prefix {
            None
        } else {
            chromosome
                .genes
                .get(position - chromosome.hole_prefix)
                .map(|&gene| self.list(position)[gene as usize].clone())
        }
    }

    fn mutate_gene<R: Rng>(&self, chromosome: &mut Chromosome<Self>, index: usize, rng: &mut R) {
        let list_size = self.list(chromosome.hole_prefix + index).len();
        if list_size > 1 {
            let current = chromosome.genes[index] as usize;
            chromosome.genes[index] =
                ((current + 1 + rng.gen_range(0..list_size - 1)) % list_size) as u16;
        }
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
                let gene = rng.gen_range(0..self.list(position).len()) as u16;
                chromosome.genes.push(gene);
                true
            }
            Edge::Left => {
                if self.variable_length != VariableLength::BothEdges
                    || chromosome.hole_prefix == 0
                {
                    return false;
                }
                let position = chromosome.hole_prefix - 1;
                let gene = rng.gen_range(0..self.list(position).len()) as u16;
                chromosome.genes.insert(0, gene);
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
                chromosome.genes.remove(0);
                chromosome.hole_prefix += 1;
                true
            }
        }
    }

    fn raw_gene(&self, chromosome: &Chromosome<Self>, index: usize) -> u64 {
        chromosome.genes[index] as u64
    }
    fn push_raw_gene(&self, chromosome: &mut Chromosome<Self>, raw: u64) {
        let position = self.positions(chromosome);
        if position >= self.genes_size() {
            return;
        }
        let list_size = self.list(position).len() as u64;
        chromosome.genes.push(raw.min(list_size - 1) as u16);
    }
    fn empty_chromosome(&self, hole_prefix: usize) -> Chromosome<Self> {
        Chromosome::with_hole_prefix(vec![], hole_prefix)
    }
}

impl<T: Allele> fmt::Display for ListVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "genotype:")?;
        writeln!(f, "  genes_size: {}", self.genes_size())?;
        writeln!(
            f,
            "  allele_list_sizes: {:?}",
            self.allele_lists.iter().map(|list| list.len()).collect::<Vec<_>>()
        )?;
        writeln!(f, "  variable_length: {:?}", self.variable_length)
    }
}
