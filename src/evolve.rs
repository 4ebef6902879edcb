//! The evolution driver: generation stepping, preservation, history,
//! termination and engine persistence.
mod builder;
pub mod prelude;

pub use self::builder::Builder as EvolveBuilder;

use crate::chromosome::Chromosome;
use crate::crossover::{Crossover, CrossoverWrapper};
use crate::errors::Error;
use crate::fitness::{Evaluator, Fitness, FitnessCache, FitnessValue};
use crate::genotype::Genotype;
use crate::mutate::Mutate;
use crate::population::Population;
use crate::sampler::generation_rng;
use crate::select::{Select, SelectWrapper};
use itertools::Itertools;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Separator of the gene tokens in the string views of a chromosome.
pub const GENE_SEPARATOR: &str = "___";

/// Rendering of a hole position in [as_string](Evolve::as_string).
pub const HOLE_TOKEN: &str = " ";

/// The engine. Construct through [Evolve::builder], then [init](Evolve::init)
/// the population and [evolve](Evolve::evolve) it.
///
/// Per generation the driver evaluates all unevaluated chromosomes (in
/// parallel when `threads > 1`), checks the terminate callback, copies the
/// top `preserve` chromosomes verbatim into the next population, breeds the
/// remaining slots (select parents, cross over with the configured
/// probability or copy the first parent, mutate), swaps the populations and
/// appends to the history.
///
/// Example:
/// ```
/// use genetic_engine::evolve::prelude::*;
/// use genetic_engine::fitness::placeholders::CountOnes;
///
/// // the search space
/// let genotype = BitVectorGenotype::builder()
///     .with_genes_size(16)
///     .build()
///     .unwrap();
///
/// // the search strategy
/// let mut evolve = Evolve::builder()
///     .with_genotype(genotype)
///     .with_fitness(CountOnes)              // the search goal to maximize
///     .with_population_size(50)
///     .with_preserve(2)                     // keep the best 2 verbatim
///     .with_select(SelectRoulette::new())
///     .with_crossover(CrossoverPoints::new(2))
///     .with_crossover_probability(0.9)
///     .with_mutation_probability(0.02)
///     .with_rng_seed(42)
///     .build()
///     .unwrap();
///
/// evolve.init();
/// evolve.evolve(50).unwrap();
///
/// // it's all about the best chromosome after all
/// let best = evolve.get_fittest(1, false).unwrap().remove(0);
/// assert!(best.fitness_score().is_some());
/// ```
pub struct Evolve<G: Genotype, F: Fitness<Genotype = G>> {
    pub genotype: G,
    pub config: EvolveConfig,
    pub select: SelectWrapper,
    pub crossover: CrossoverWrapper,
    pub mutate: Mutate,
    pub evaluator: Evaluator<F>,
    pub state: EvolveState<G>,
    terminate: Option<Box<dyn FnMut(&EvolveState<G>) -> bool>>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EvolveConfig {
    pub population_size: usize,
    pub crossover_probability: f32,
    pub number_of_parents: usize,
    pub preserve: usize,
    pub history: bool,
    pub cache_size: Option<usize>,
    pub threads: usize,
    pub strict: bool,
    pub rng_seed: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(serialize = "", deserialize = ""))]
pub struct EvolveState<G: Genotype> {
    pub population: Option<Population<G>>,
    pub current_generation: usize,
    pub history: History,
}

/// Per-generation fitness statistics, one entry per completed generation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct History {
    pub minimum: Vec<FitnessValue>,
    pub mean: Vec<f64>,
    pub maximum: Vec<FitnessValue>,
}

impl History {
    pub fn push(&mut self, minimum: FitnessValue, mean: f64, maximum: FitnessValue) {
        self.minimum.push(minimum);
        self.mean.push(mean);
        self.maximum.push(maximum);
    }
    pub fn len(&self) -> usize {
        self.minimum.len()
    }
    pub fn is_empty(&self) -> bool {
        self.minimum.is_empty()
    }
    /// The history as a `[maximum, mean, minimum]` matrix.
    pub fn as_matrix(&self) -> [Vec<f64>; 3] {
        [
            self.maximum.clone(),
            self.mean.clone(),
            self.minimum.clone(),
        ]
    }
}

impl<G: Genotype, F: Fitness<Genotype = G>> Evolve<G, F> {
    pub fn builder() -> EvolveBuilder<G, F> {
        EvolveBuilder::new()
    }

    /// Create the initial random population, resetting the generation
    /// counter and the history.
    pub fn init(&mut self) {
        let mut rng = generation_rng(self.config.rng_seed, 0);
        let chromosomes = (0..self.config.population_size)
            .map(|_| self.genotype.chromosome_factory(&mut rng))
            .collect();
        self.state = EvolveState {
            population: Some(Population::new(chromosomes)),
            current_generation: 0,
            history: History::default(),
        };
    }

    /// Overwrite the population prefix with encoded chromosomes. All entries
    /// are validated before any slot is written, so an invalid chromosome
    /// leaves the population unchanged.
    pub fn inject(&mut self, alleles_list: &[Vec<Option<G::Allele>>]) -> Result<(), Error> {
        let population = self.state.population.as_mut().ok_or(Error::NotInitialized)?;
        if alleles_list.len() > population.size() {
            return Err(Error::InvalidChromosome(format!(
                "cannot inject {} chromosomes into a population of {}",
                alleles_list.len(),
                population.size()
            )));
        }
        let chromosomes = alleles_list
            .iter()
            .map(|alleles| self.genotype.chromosome_from_alleles(alleles))
            .collect::<Result<Vec<_>, Error>>()?;
        population
            .chromosomes
            .iter_mut()
            .zip(chromosomes)
            .for_each(|(slot, chromosome)| *slot = chromosome);
        Ok(())
    }

    /// [inject](Evolve::inject) for fully defined chromosomes.
    pub fn inject_defined(&mut self, alleles_list: &[Vec<G::Allele>]) -> Result<(), Error> {
        let wrapped: Vec<Vec<Option<G::Allele>>> = alleles_list
            .iter()
            .map(|alleles| alleles.iter().cloned().map(Some).collect())
            .collect();
        self.inject(&wrapped)
    }

    /// Advance up to `generations` generations, unlimited when zero. Stops
    /// early when the terminate callback returns true; the callback is
    /// checked once per generation, right after evaluation.
    pub fn evolve(&mut self, generations: usize) -> Result<(), Error> {
        if self.state.population.is_none() {
            return Err(Error::NotInitialized);
        }
        let mut completed = 0;
        while generations == 0 || completed < generations {
            let generation = self.state.current_generation + 1;
            let mut rng = generation_rng(self.config.rng_seed, generation);

            self.evaluator.call_for_population(
                &self.genotype,
                self.state.population.as_mut().unwrap(),
            )?;
            let (minimum, mean, maximum) = {
                let population = self.state.population.as_ref().unwrap();
                (
                    population.fitness_score_min(),
                    population.fitness_score_mean(),
                    population.fitness_score_max(),
                )
            };
            self.report_round();

            if let Some(terminate) = self.terminate.as_mut() {
                if terminate(&self.state) {
                    break;
                }
            }

            let mut next_chromosomes: Vec<Chromosome<G>> =
                Vec::with_capacity(self.config.population_size);
            {
                let population = self.state.population.as_ref().unwrap();
                for &index in population
                    .ranked_indices()
                    .iter()
                    .take(self.config.preserve)
                {
                    next_chromosomes.push(population.chromosomes[index].clone());
                }
                while next_chromosomes.len() < self.config.population_size {
                    let parent_indices =
                        self.select
                            .call(population, self.config.number_of_parents, &mut rng);
                    let parents: Vec<&Chromosome<G>> = parent_indices
                        .iter()
                        .map(|&index| &population.chromosomes[index])
                        .collect();
                    let mut child = if rng.gen::<f32>() < self.config.crossover_probability {
                        self.crossover.call(
                            &self.genotype,
                            &parents,
                            &mut self.evaluator,
                            &mut rng,
                        )?
                    } else {
                        parents[0].clone()
                    };
                    self.mutate.call(&self.genotype, &mut child, &mut rng);
                    next_chromosomes.push(child);
                }
            }

            self.state.population = Some(Population::new(next_chromosomes));
            self.state.current_generation = generation;

            if self.config.history {
                if let (Some(minimum), Some(maximum)) = (minimum, maximum) {
                    self.state.history.push(minimum, mean, maximum);
                }
            }
            completed += 1;
        }
        Ok(())
    }

    /// The top `amount` chromosomes by fitness rank, deduplicated by genes
    /// fingerprint when `unique`. Evaluates any unscored chromosomes first.
    pub fn get_fittest(
        &mut self,
        amount: usize,
        unique: bool,
    ) -> Result<Vec<Chromosome<G>>, Error> {
        if self.state.population.is_none() {
            return Err(Error::NotInitialized);
        }
        self.evaluator
            .call_for_population(&self.genotype, self.state.population.as_mut().unwrap())?;
        let population = self.state.population.as_ref().unwrap();
        let indices = if unique {
            population.ranked_unique_indices(&self.genotype)
        } else {
            population.ranked_indices()
        };
        Ok(indices
            .into_iter()
            .take(amount)
            .map(|index| population.chromosomes[index].clone())
            .collect())
    }

    /// Decoded genes per position, holes as `None`.
    pub fn as_array(&self, chromosome: &Chromosome<G>) -> Vec<Option<G::Allele>> {
        self.genotype.alleles(chromosome)
    }
    /// Decoded genes, holes skipped.
    pub fn as_array_def_only(&self, chromosome: &Chromosome<G>) -> Vec<G::Allele> {
        self.genotype.alleles(chromosome).into_iter().flatten().collect()
    }
    /// Gene tokens joined with `___`, holes rendered as a single space.
    pub fn as_string(&self, chromosome: &Chromosome<G>) -> String {
        self.genotype
            .alleles(chromosome)
            .iter()
            .map(|allele| match allele {
                Some(allele) => G::gene_token(allele),
                None => HOLE_TOKEN.to_string(),
            })
            .join(GENE_SEPARATOR)
    }
    /// Gene tokens joined with `___`, holes skipped.
    pub fn as_string_def_only(&self, chromosome: &Chromosome<G>) -> String {
        self.genotype
            .alleles(chromosome)
            .iter()
            .flatten()
            .map(G::gene_token)
            .join(GENE_SEPARATOR)
    }
    /// The chromosome's fitness value, evaluated on demand.
    pub fn as_value(&mut self, chromosome: &mut Chromosome<G>) -> Result<FitnessValue, Error> {
        self.evaluator.call_for_chromosome(&self.genotype, chromosome)
    }

    /// The recorded history as a `[maximum, mean, minimum]` matrix.
    pub fn history(&self) -> [Vec<f64>; 3] {
        self.state.history.as_matrix()
    }

    /// Attach or replace the terminate callback.
    pub fn set_terminate(
        &mut self,
        terminate: impl FnMut(&EvolveState<G>) -> bool + 'static,
    ) {
        self.terminate = Some(Box::new(terminate));
    }

    /// Persist the engine state as JSON. The fitness and terminate callbacks
    /// are code, not state, and are re-supplied on [load](Evolve::load); the
    /// fitness cache is a memoization and is rebuilt on demand.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let file = File::create(path)?;
        serde_json::to_writer(
            BufWriter::new(file),
            &SnapshotRef {
                genotype: &self.genotype,
                config: &self.config,
                select: &self.select,
                crossover: &self.crossover,
                mutate: &self.mutate,
                state: &self.state,
            },
        )?;
        Ok(())
    }

    /// Restore a saved engine. With the same seed the restored engine
    /// evolves identically to the saved one.
    pub fn load(path: impl AsRef<Path>, fitness: F) -> Result<Self, Error> {
        let file = File::open(path)?;
        let snapshot: Snapshot<G> = serde_json::from_reader(BufReader::new(file))?;
        let cache = snapshot
            .config
            .cache_size
            .map(FitnessCache::try_new)
            .transpose()?;
        let evaluator = Evaluator::new(
            fitness,
            cache,
            snapshot.config.threads,
            snapshot.config.strict,
        )?;
        Ok(Self {
            genotype: snapshot.genotype,
            config: snapshot.config,
            select: snapshot.select,
            crossover: snapshot.crossover,
            mutate: snapshot.mutate,
            evaluator,
            state: snapshot.state,
            terminate: None,
        })
    }

    fn report_round(&self) {
        if log::log_enabled!(log::Level::Debug) {
            if let Some(population) = self.state.population.as_ref() {
                log::debug!(
                    "generation {}: fitness score (best/count/mean/stddev): {:?} / {} / {:.3} / {:.3}",
                    self.state.current_generation,
                    population.best_chromosome().and_then(|c| c.fitness_score),
                    population.fitness_score_count(),
                    population.fitness_score_mean(),
                    population.fitness_score_stddev(),
                );
            }
        }
    }
}

#[derive(Serialize)]
#[serde(bound(serialize = ""))]
struct SnapshotRef<'a, G: Genotype> {
    genotype: &'a G,
    config: &'a EvolveConfig,
    select: &'a SelectWrapper,
    crossover: &'a CrossoverWrapper,
    mutate: &'a Mutate,
    state: &'a EvolveState<G>,
}

#[derive(Deserialize)]
#[serde(bound(deserialize = ""))]
struct Snapshot<G: Genotype> {
    genotype: G,
    config: EvolveConfig,
    select: SelectWrapper,
    crossover: CrossoverWrapper,
    mutate: Mutate,
    state: EvolveState<G>,
}

impl<G: Genotype> EvolveState<G> {
    pub fn best_fitness_score(&self) -> Option<FitnessValue> {
        self.population
            .as_ref()
            .and_then(|population| population.best_chromosome())
            .and_then(|chromosome| chromosome.fitness_score)
    }
}

impl<G: Genotype> Default for EvolveState<G> {
    fn default() -> Self {
        Self {
            population: None,
            current_generation: 0,
            history: History::default(),
        }
    }
}

impl<G: Genotype, F: Fitness<Genotype = G>> fmt::Display for Evolve<G, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "evolve:")?;
        write!(f, "{}", self.genotype)?;
        writeln!(f, "  select: {:?}", self.select)?;
        writeln!(f, "  crossover: {:?}", self.crossover)?;
        writeln!(f, "  mutate: {:?}", self.mutate)?;
        write!(f, "{}", self.config)?;
        write!(f, "{}", self.state)
    }
}

impl fmt::Display for EvolveConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "evolve_config:")?;
        writeln!(f, "  population_size: {}", self.population_size)?;
        writeln!(f, "  crossover_probability: {}", self.crossover_probability)?;
        writeln!(f, "  number_of_parents: {}", self.number_of_parents)?;
        writeln!(f, "  preserve: {}", self.preserve)?;
        writeln!(f, "  history: {}", self.history)?;
        writeln!(f, "  cache_size: {:?}", self.cache_size)?;
        writeln!(f, "  threads: {}", self.threads)?;
        writeln!(f, "  strict: {}", self.strict)?;
        writeln!(f, "  rng_seed: {}", self.rng_seed)
    }
}

impl<G: Genotype> fmt::Display for EvolveState<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "evolve_state:")?;
        writeln!(f, "  current_generation: {}", self.current_generation)?;
        writeln!(f, "  population_size: {:?}", self.population.as_ref().map(|p| p.size()))?;
        writeln!(f, "  best_fitness_score: {:?}", self.best_fitness_score())?;
        writeln!(f, "  history_length: {}", self.history.len())
    }
}
