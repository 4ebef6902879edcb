//! The search space for the algorithm: the chromosome representations and
//! their codec.
mod bit_vector;
mod builder;
mod combination;
mod list_vector;
mod packed;
mod range_vector;

pub use self::bit_vector::BitVector as BitVectorGenotype;
pub use self::builder::Builder as GenotypeBuilder;
pub use self::combination::Combination as CombinationGenotype;
pub use self::list_vector::ListVector as ListVectorGenotype;
pub use self::packed::{CellWidth, PackedVec};
pub use self::range_vector::RangeVector as RangeVectorGenotype;

pub use crate::allele::Allele;
use crate::chromosome::{Chromosome, GenesHash};
use crate::errors::Error;
use fixedbitset::FixedBitSet;
use rand::Rng;
use rustc_hash::FxHasher;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Standard Genes, the compact per-genotype storage behind a
/// [Chromosome](crate::chromosome::Chromosome).
pub trait Genes:
    Clone + Send + Sync + fmt::Debug + PartialEq + Hash + Serialize + DeserializeOwned + 'static
{
}
impl Genes for FixedBitSet {}
impl Genes for Vec<u16> {}
impl Genes for PackedVec {}

/// How the effective chromosome length may change across generations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VariableLength {
    /// Length is fixed to the number of gene positions.
    #[default]
    Fixed,
    /// Length may shrink or grow on the right edge only.
    RightEdge,
    /// Length may shrink or grow on either edge; dropped leading positions
    /// become the hole prefix.
    BothEdges,
}

impl VariableLength {
    pub fn from_level(level: u8) -> Result<Self, Error> {
        match level {
            0 => Ok(VariableLength::Fixed),
            1 => Ok(VariableLength::RightEdge),
            2 => Ok(VariableLength::BothEdges),
            _ => Err(Error::InvalidConfig("variable length level must be 0, 1 or 2")),
        }
    }
    pub fn level(&self) -> u8 {
        match self {
            VariableLength::Fixed => 0,
            VariableLength::RightEdge => 1,
            VariableLength::BothEdges => 2,
        }
    }
}

/// A mutable chromosome edge for variable-length growth and shrinkage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
}

/// Standard genotype, suitable for [Evolve](crate::evolve::Evolve).
/// Each implemented genotype handles its own compact genes storage, random
/// initialization, codec, mutation and crossover mechanics.
pub trait Genotype:
    Clone
    + Send
    + Sync
    + fmt::Debug
    + fmt::Display
    + Serialize
    + DeserializeOwned
    + TryFrom<GenotypeBuilder<Self>, Error = Error>
    + 'static
{
    type Allele: Allele;
    type Genes: Genes;

    fn builder() -> GenotypeBuilder<Self> {
        GenotypeBuilder::<Self>::default()
    }

    /// The configured (maximum) number of gene positions.
    fn genes_size(&self) -> usize;
    fn variable_length(&self) -> VariableLength;

    /// A random chromosome respecting the genotype invariants. Variable
    /// length genotypes also randomize the initial effective length.
    fn chromosome_factory<R: Rng>(&self, rng: &mut R) -> Chromosome<Self>;

    /// Encode raw alleles into a chromosome, validating the genotype
    /// invariants. `None` entries form the hole prefix.
    fn chromosome_from_alleles(
        &self,
        alleles: &[Option<Self::Allele>],
    ) -> Result<Chromosome<Self>, Error>;

    /// Number of defined genes.
    fn genes_len(&self, chromosome: &Chromosome<Self>) -> usize;
    /// Number of positions including the hole prefix.
    fn positions(&self, chromosome: &Chromosome<Self>) -> usize {
        chromosome.hole_prefix + self.genes_len(chromosome)
    }
    /// Decode the gene at an absolute position, `None` for holes.
    fn allele(&self, chromosome: &Chromosome<Self>, position: usize) -> Option<Self::Allele>;
    /// Decode all positions, holes as `None`.
    fn alleles(&self, chromosome: &Chromosome<Self>) -> Vec<Option<Self::Allele>> {
        (0..self.positions(chromosome))
            .map(|position| self.allele(chromosome, position))
            .collect()
    }
    /// Token used for the `___`-joined string view of a chromosome.
    fn gene_token(allele: &Self::Allele) -> String {
        allele.to_string()
    }

    /// Compact fingerprint over genes and hole prefix, the cache key.
    fn calculate_genes_hash(&self, chromosome: &Chromosome<Self>) -> GenesHash {
        let mut hasher = FxHasher::default();
        chromosome.hole_prefix.hash(&mut hasher);
        chromosome.genes.hash(&mut hasher);
        hasher.finish()
    }

    /// Mutate the defined gene at `index` (an index into the defined genes,
    /// not an absolute position).
    fn mutate_gene<R: Rng>(&self, chromosome: &mut Chromosome<Self>, index: usize, rng: &mut R);

    /// Append one legal gene at the given edge. Returns false when the edge
    /// is immutable or the configured size is reached.
    fn grow_chromosome<R: Rng>(
        &self,
        _chromosome: &mut Chromosome<Self>,
        _edge: Edge,
        _rng: &mut R,
    ) -> bool {
        false
    }
    /// Drop one gene at the given edge. Returns false when the edge is
    /// immutable or only one gene remains.
    fn shrink_chromosome(&self, _chromosome: &mut Chromosome<Self>, _edge: Edge) -> bool {
        false
    }

    /// Storage-level gene accessor driving the generic point-crossover
    /// assembly, `index` into the defined genes.
    fn raw_gene(&self, chromosome: &Chromosome<Self>, index: usize) -> u64;
    /// Storage-level gene append. Implementations clamp the raw value into
    /// the receiving column's domain and ignore pushes beyond the configured
    /// size, so assembled children always satisfy the genotype invariants.
    fn push_raw_gene(&self, chromosome: &mut Chromosome<Self>, raw: u64);
    /// A chromosome with no defined genes yet, seeded with a hole prefix.
    fn empty_chromosome(&self, hole_prefix: usize) -> Chromosome<Self>;

    /// to guard against invalid crossover strategies which break the internal
    /// consistency of the genes, permutation genotypes can't exchange gene
    /// segments without duplication issues
    fn has_crossover_points(&self) -> bool {
        true
    }
    fn has_permutation_crossover(&self) -> bool {
        false
    }

    /// Assemble a child from alternating parent segments. `first` contributes
    /// the leading segment and the hole prefix; after the last cut point the
    /// active parent contributes its full remaining genes, so a longer parent
    /// may extend the child beyond the shorter one.
    fn crossover_points_child(
        &self,
        first: &Chromosome<Self>,
        second: &Chromosome<Self>,
        points: &[usize],
    ) -> Chromosome<Self> {
        let mut child = self.empty_chromosome(first.hole_prefix);
        let mut current = first;
        let mut other = second;
        let mut position = 0;
        for &point in points {
            for index in position..point {
                self.push_raw_gene(&mut child, self.raw_gene(current, index));
            }
            std::mem::swap(&mut current, &mut other);
            position = point;
        }
        for index in position..self.genes_len(current) {
            self.push_raw_gene(&mut child, self.raw_gene(current, index));
        }
        child
    }

    /// Partially mapped crossover, only for permutation genotypes.
    fn pmx_child<R: Rng>(
        &self,
        _father: &Chromosome<Self>,
        _mother: &Chromosome<Self>,
        _rng: &mut R,
    ) -> Chromosome<Self> {
        panic!("genotype does not support permutation crossover")
    }
    /// Order crossover, only for permutation genotypes.
    fn ox_child<R: Rng>(
        &self,
        _father: &Chromosome<Self>,
        _mother: &Chromosome<Self>,
        _rng: &mut R,
    ) -> Chromosome<Self> {
        panic!("genotype does not support permutation crossover")
    }
}

/// Shared shape validation for encoded chromosomes: holes only as a leading
/// prefix, effective length legal for the variable-length level.
pub(crate) fn validate_shape(
    variable_length: VariableLength,
    genes_size: usize,
    hole_prefix: usize,
    defined: usize,
) -> Result<(), Error> {
    match variable_length {
        VariableLength::Fixed => {
            if hole_prefix != 0 {
                Err(Error::InvalidChromosome(
                    "fixed length chromosomes allow no holes".to_string(),
                ))
            } else if defined != genes_size {
                Err(Error::InvalidChromosome(format!(
                    "expected {} genes, got {}",
                    genes_size, defined
                )))
            } else {
                Ok(())
            }
        }
        VariableLength::RightEdge => {
            if hole_prefix != 0 {
                Err(Error::InvalidChromosome(
                    "right-edge variable length chromosomes allow no holes".to_string(),
                ))
            } else if defined == 0 || defined > genes_size {
                Err(Error::InvalidChromosome(format!(
                    "expected 1..={} genes, got {}",
                    genes_size, defined
                )))
            } else {
                Ok(())
            }
        }
        VariableLength::BothEdges => {
            if defined == 0 {
                Err(Error::InvalidChromosome(
                    "chromosome requires at least one defined gene".to_string(),
                ))
            } else if hole_prefix + defined > genes_size {
                Err(Error::InvalidChromosome(format!(
                    "hole prefix {} plus {} genes exceeds {} positions",
                    hole_prefix, defined, genes_size
                )))
            } else {
                Ok(())
            }
        }
    }
}

/// Random hole prefix and effective length for a fresh chromosome.
pub(crate) fn random_shape<R: Rng>(
    variable_length: VariableLength,
    genes_size: usize,
    rng: &mut R,
) -> (usize, usize) {
    match variable_length {
        VariableLength::Fixed => (0, genes_size),
        VariableLength::RightEdge => (0, rng.gen_range(1..=genes_size)),
        VariableLength::BothEdges => {
            let defined = rng.gen_range(1..=genes_size);
            (rng.gen_range(0..=genes_size - defined), defined)
        }
    }
}

/// Split raw alleles into the hole prefix and the defined suffix, rejecting
/// interior holes.
pub(crate) fn split_hole_prefix<T>(alleles: &[Option<T>]) -> Result<(usize, &[Option<T>]), Error> {
    let hole_prefix = alleles.iter().take_while(|allele| allele.is_none()).count();
    let defined = &alleles[hole_prefix..];
    if defined.iter().any(|allele| allele.is_none()) {
        Err(Error::InvalidChromosome(
            "holes are only allowed as a leading prefix".to_string(),
        ))
    } else {
        Ok((hole_prefix, defined))
    }
}
