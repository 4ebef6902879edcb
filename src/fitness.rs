//! The search goal to optimize towards (higher is better).
//!
//! Each problem has its own specific [Fitness] function, so you implement it
//! yourself. The chromosome is passed mutably for implementation flexibility,
//! but the callback must treat it as read-only; the engine's strict mode
//! enforces this by fingerprinting the genes before and after the call.
//!
//! See [Fitness] Trait
pub mod cache;
pub mod placeholders;

pub use self::cache::FitnessCache;

use crate::chromosome::Chromosome;
use crate::errors::Error;
use crate::genotype::Genotype;
use crate::population::Population;
use rayon::prelude::*;
use std::cell::RefCell;
use std::fmt;
use thread_local::ThreadLocal;

/// The score of a chromosome as computed by the user callback, higher is
/// better.
pub type FitnessValue = f64;

/// The fitness function, implemented as a fitness method object.
///
/// # Example:
/// ```rust
/// use genetic_engine::chromosome::Chromosome;
/// use genetic_engine::errors::Error;
/// use genetic_engine::fitness::{Fitness, FitnessValue};
/// use genetic_engine::genotype::BitVectorGenotype;
///
/// #[derive(Clone, Debug)]
/// pub struct CountOnes;
/// impl Fitness for CountOnes {
///     type Genotype = BitVectorGenotype;
///     fn calculate_for_chromosome(
///         &mut self,
///         chromosome: &mut Chromosome<Self::Genotype>,
///         _genotype: &Self::Genotype,
///     ) -> Result<FitnessValue, Error> {
///         Ok(chromosome.genes.count_ones(..) as FitnessValue)
///     }
/// }
/// ```
pub trait Fitness: Clone + Send + Sync + fmt::Debug {
    type Genotype: Genotype;

    fn calculate_for_chromosome(
        &mut self,
        chromosome: &mut Chromosome<Self::Genotype>,
        genotype: &Self::Genotype,
    ) -> Result<FitnessValue, Error>;
}

/// Drives all fitness evaluation for the engine: skips already scored
/// chromosomes, memoises through the fingerprint cache when enabled, fans the
/// unevaluated chromosomes of a generation out over a thread pool when
/// configured, and enforces the strict read-only contract.
pub struct Evaluator<F: Fitness> {
    pub fitness: F,
    pub cache: Option<FitnessCache>,
    pub strict: bool,
    thread_pool: Option<rayon::ThreadPool>,
}

impl<F: Fitness> Evaluator<F> {
    pub fn new(
        fitness: F,
        cache: Option<FitnessCache>,
        threads: usize,
        strict: bool,
    ) -> Result<Self, Error> {
        let thread_pool = if threads > 1 {
            Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|_| Error::InvalidConfig("failed to build the fitness thread pool"))?,
            )
        } else {
            None
        };
        Ok(Self {
            fitness,
            cache,
            strict,
            thread_pool,
        })
    }

    /// Score one chromosome, returning the (possibly cached) value.
    pub fn call_for_chromosome(
        &mut self,
        genotype: &F::Genotype,
        chromosome: &mut Chromosome<F::Genotype>,
    ) -> Result<FitnessValue, Error> {
        if let Some(score) = chromosome.fitness_score {
            return Ok(score);
        }
        calculate(
            &mut self.fitness,
            self.cache.as_ref(),
            self.strict,
            genotype,
            chromosome,
        )
    }

    /// Score all unevaluated chromosomes. Workers write disjoint chromosome
    /// slots, so results always line up with the population index regardless
    /// of completion order. The first error aborts the pass; scores already
    /// written are retained.
    pub fn call_for_population(
        &mut self,
        genotype: &F::Genotype,
        population: &mut Population<F::Genotype>,
    ) -> Result<(), Error> {
        let strict = self.strict;
        let cache = self.cache.clone();
        if let Some(pool) = self.thread_pool.as_ref() {
            let fitness = &self.fitness;
            let thread_fitnesses: ThreadLocal<RefCell<F>> = ThreadLocal::new();
            pool.install(|| {
                population
                    .chromosomes
                    .par_iter_mut()
                    .filter(|chromosome| chromosome.fitness_score.is_none())
                    .try_for_each_init(
                        || {
                            thread_fitnesses
                                .get_or(|| RefCell::new(fitness.clone()))
                                .borrow_mut()
                        },
                        |fitness, chromosome| {
                            calculate(&mut **fitness, cache.as_ref(), strict, genotype, chromosome)
                                .map(|_| ())
                        },
                    )
            })
        } else {
            for chromosome in population.chromosomes.iter_mut() {
                if chromosome.fitness_score.is_none() {
                    calculate(&mut self.fitness, cache.as_ref(), strict, genotype, chromosome)?;
                }
            }
            Ok(())
        }
    }
}

fn calculate<F: Fitness>(
    fitness: &mut F,
    cache: Option<&FitnessCache>,
    strict: bool,
    genotype: &F::Genotype,
    chromosome: &mut Chromosome<F::Genotype>,
) -> Result<FitnessValue, Error> {
    let genes_hash =
        (cache.is_some() || strict).then(|| genotype.calculate_genes_hash(chromosome));
    if let (Some(cache), Some(genes_hash)) = (cache, genes_hash) {
        if let Some(value) = cache.read(genes_hash) {
            chromosome.set_fitness_score(Some(value));
            return Ok(value);
        }
    }
    let value = fitness.calculate_for_chromosome(chromosome, genotype)?;
    if strict && genes_hash != Some(genotype.calculate_genes_hash(chromosome)) {
        return Err(Error::MutatedDuringFitness);
    }
    chromosome.set_fitness_score(Some(value));
    if let (Some(cache), Some(genes_hash)) = (cache, genes_hash) {
        cache.write(genes_hash, value);
    }
    Ok(value)
}
