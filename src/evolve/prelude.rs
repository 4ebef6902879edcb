#[doc(no_inline)]
pub use crate::chromosome::{Chromosome, GenesHash};
#[doc(no_inline)]
pub use crate::crossover::{
    Crossover, CrossoverDistribution, CrossoverOx, CrossoverPmx, CrossoverPoints,
    CrossoverPointsAdvanced, CrossoverPointsBasic, CrossoverPointsSimple, CrossoverWrapper,
};
#[doc(no_inline)]
pub use crate::errors::Error;
#[doc(no_inline)]
pub use crate::evolve::{
    Evolve, EvolveBuilder, EvolveConfig, EvolveState, History, GENE_SEPARATOR, HOLE_TOKEN,
};
#[doc(no_inline)]
pub use crate::fitness::{Evaluator, Fitness, FitnessCache, FitnessValue};
#[doc(no_inline)]
pub use crate::genotype::{
    Allele, BitVectorGenotype, CombinationGenotype, Edge, Genotype, GenotypeBuilder,
    ListVectorGenotype, RangeVectorGenotype, VariableLength,
};
#[doc(no_inline)]
pub use crate::mutate::Mutate;
#[doc(no_inline)]
pub use crate::population::Population;
#[doc(no_inline)]
pub use crate::sampler::Sampler;
#[doc(no_inline)]
pub use crate::select::{
    Select, SelectDistribution, SelectRoulette, SelectRouletteBasic, SelectRouletteDistribution,
    SelectWrapper,
};
