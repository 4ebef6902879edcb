use super::builder::Builder;
use super::{split_hole_prefix, Allele, Genotype, VariableLength};
use crate::chromosome::Chromosome;
use crate::errors::Error;
use rand::prelude::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Genes are a permutation of a global allele list: every allele occurs
/// exactly once per chromosome, stored as `u16` indices. On random
/// initialization the allele list is shuffled. A mutating gene switches
/// places with another uniformly chosen gene, so the permutation invariant
/// holds through mutation. Crossover uses the permutation-preserving
/// [Pmx](crate::crossover::CrossoverPmx) and [Ox](crate::crossover::CrossoverOx)
/// operators; segment-exchange crossovers are rejected when building the
/// engine. Defaults to `String` alleles.
///
/// # Example:
/// ```
/// use genetic_engine::genotype::{CombinationGenotype, Genotype};
///
/// let genotype = CombinationGenotype::builder()
///     .with_allele_list(vec![
///         "A".to_string(),
///         "B".to_string(),
///         "C".to_string(),
///     ])
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(serialize = "", deserialize = ""))]
pub struct Combination<T: Allele = String> {
    pub allele_list: Vec<T>,
}

impl<T: Allele> TryFrom<Builder<Self>> for Combination<T> {
    type Error = Error;

    fn try_from(builder: Builder<Self>) -> Result<Self, Self::Error> {
        if builder.variable_length != VariableLength::Fixed {
            Err(Error::InvalidConfig(
                "CombinationGenotype does not support variable length",
            ))
        } else if builder.allele_list.is_none() {
            Err(Error::InvalidConfig("CombinationGenotype requires an allele_list"))
        } else if builder
            .allele_list
            .as_ref()
            .is_some_and(|list| list.is_empty())
        {
            Err(Error::InvalidConfig(
                "CombinationGenotype requires a non-empty allele_list",
            ))
        } else if builder
            .allele_list
            .as_ref()
            .is_some_and(|list| list.len() > u16::MAX as usize + 1)
        {
            Err(Error::InvalidConfig(
                "CombinationGenotype allele_list is limited to 65536 entries",
            ))
        } else if builder.allele_list.as_ref().is_some_and(has_duplicates) {
            Err(Error::InvalidConfig(
                "CombinationGenotype requires distinct allele_list entries",
            ))
        } else {
            Ok(Self {
                allele_list: builder.allele_list.unwrap(),
            })
        }
    }
}

fn has_duplicates<T: PartialEq>(list: &Vec<T>) -> bool {
    list.iter()
        .enumerate()
        .any(|(index, allele)| list[..index].contains(allele))
}

/// Two distinct cut points `a < b` within `[1, len - 1]`, `None` when the
/// chromosome is too short to cut twice.
fn cut_pair<R: Rng>(len: usize, rng: &mut R) -> Option<(usize, usize)> {
    if len < 3 {
        return None;
    }
    let sampled = rand::seq::index::sample(rng, len - 1, 2);
    let first = sampled.index(0) + 1;
    let second = sampled.index(1) + 1;
    Some((first.min(second), first.max(second)))
}

impl<T: Allele> Genotype for Combination<T> {
    type Allele = T;
    type Genes = Vec<u16>;

    fn genes_size(&self) -> usize {
        self.allele_list.len()
    }
    fn variable_length(&self) -> VariableLength {
        VariableLength::Fixed
    }

    fn chromosome_factory<R: Rng>(&self, rng: &mut R) -> Chromosome<Self> {
        let mut genes: Vec<u16> = (0..self.genes_size() as u16).collect();
        genes.shuffle(rng);
        Chromosome::new(genes)
    }

    fn chromosome_from_alleles(
        &self,
        alleles: &[Option<Self::Allele>],
    ) -> Result<Chromosome<Self>, Error> {
        let (hole_prefix, defined) = split_hole_prefix(alleles)?;
        if hole_prefix != 0 {
            return Err(Error::InvalidChromosome(
                "permutation chromosomes allow no holes".to_string(),
            ));
        }
        if defined.len() != self.genes_size() {
            return Err(Error::InvalidChromosome(format!(
                "expected a permutation of {} alleles, got {} genes",
                self.genes_size(),
                defined.len()
            )));
        }
        let mut used = vec![false; self.genes_size()];
        let genes = defined
            .iter()
            .map(|allele| {
                let allele = allele.as_ref().unwrap();
                let index = self
                    .allele_list
                    .iter()
                    .position(|candidate| candidate == allele)
                    .ok_or_else(|| {
                        Error::InvalidChromosome(format!(
                            "allele {:?} is not in the allele_list",
                            allele
                        ))
                    })?;
                if used[index] {
                    Err(Error::InvalidChromosome(format!(
                        "allele {:?} occurs more than once",
                        allele
                    )))
                } else {
                    used[index] = true;
                    Ok(index as u16)
                }
            })
            .collect::<Result<Vec<u16>, Error>>()?;
        Ok(Chromosome::new(genes))
    }

    fn genes_len(&self, chromosome: &Chromosome<Self>) -> usize {
        chromosome.genes.len()
    }
    fn allele(&self, chromosome: &Chromosome<Self>, position: usize) -> Option<Self::Allele> {
        chromosome
            .genes
            .get(position)
            .map(|&gene| self.allele_list[gene as usize].clone())
    }

    fn mutate_gene<R: Rng>(&self, chromosome: &mut Chromosome<Self>, index: usize, rng: &mut R) {
        let size = self.genes_size();
        if size > 1 {
            let other = (index + 1 + rng.gen_range(0..size - 1)) % size;
            chromosome.genes.swap(index, other);
        }
    }

    fn raw_gene(&self, chromosome: &Chromosome<Self>, index: usize) -> u64 {
        chromosome.genes[index] as u64
    }
    fn push_raw_gene(&self, chromosome: &mut Chromosome<Self>, raw: u64) {
        chromosome.genes.push(raw as u16);
    }
    fn empty_chromosome(&self, _hole_prefix: usize) -> Chromosome<Self> {
        Chromosome::new(vec![])
    }

    fn has_crossover_points(&self) -> bool {
        false
    }
    fn has_permutation_crossover(&self) -> bool {
        true
    }

    fn pmx_child<R: Rng>(
        &self,
        father: &Chromosome<Self>,
        mother: &Chromosome<Self>,
        rng: &mut R,
    ) -> Chromosome<Self> {
        let Some((start, end)) = cut_pair(self.genes_size(), rng) else {
            return father.clone();
        };
        let mut genes = father.genes.clone();
        let mut position_of = vec![0usize; self.genes_size()];
        genes
            .iter()
            .enumerate()
            .for_each(|(position, &gene)| position_of[gene as usize] = position);
        for index in start..end {
            let desired = mother.genes[index];
            let held = position_of[desired as usize];
            if held != index {
                let displaced = genes[index];
                genes.swap(index, held);
                position_of[desired as usize] = index;
                position_of[displaced as usize] = held;
            }
        }
        Chromosome::new(genes)
    }

    fn ox_child<R: Rng>(
        &self,
        father: &Chromosome<Self>,
        mother: &Chromosome<Self>,
        rng: &mut R,
    ) -> Chromosome<Self> {
        let size = self.genes_size();
        let Some((start, end)) = cut_pair(size, rng) else {
            return father.clone();
        };
        let mut genes = vec![0u16; size];
        let mut placed = vec![false; size];
        for index in start..end {
            genes[index] = father.genes[index];
            placed[father.genes[index] as usize] = true;
        }
        let mut write = end % size;
        for offset in 0..size {
            let gene = mother.genes[(end + offset) % size];
            if !placed[gene as usize] {
                genes[write] = gene;
                placed[gene as usize] = true;
                write = (write + 1) % size;
            }
        }
        Chromosome::new(genes)
    }
}

impl<T: Allele> fmt::Display for Combination<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "genotype:")?;
        writeln!(f, "  allele_list: {:?}", self.allele_list)
    }
}
