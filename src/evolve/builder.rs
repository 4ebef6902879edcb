use super::{Evolve, EvolveConfig, EvolveState};
use crate::crossover::{Crossover, CrossoverPoints, CrossoverWrapper};
use crate::errors::Error;
use crate::fitness::cache::DEFAULT_CACHE_SIZE;
use crate::fitness::{Evaluator, Fitness, FitnessCache};
use crate::genotype::Genotype;
use crate::mutate::Mutate;
use crate::select::{SelectRouletteBasic, SelectWrapper};

/// The builder for an [Evolve] engine. All options are validated in
/// [build](Builder::build); inconsistent combinations (a segment-exchange
/// crossover on a permutation genotype, `preserve` beyond the population
/// size, probabilities outside `[0, 1]`) are rejected as
/// [InvalidConfig](crate::errors::Error::InvalidConfig).
pub struct Builder<G: Genotype, F: Fitness<Genotype = G>> {
    pub genotype: Option<G>,
    pub fitness: Option<F>,
    pub population_size: usize,
    pub crossover_probability: f32,
    pub mutation_probability: f32,
    pub number_of_parents: usize,
    pub preserve: usize,
    pub select: SelectWrapper,
    pub crossover: CrossoverWrapper,
    pub history: bool,
    pub cache_size: Option<usize>,
    pub threads: usize,
    pub strict: bool,
    pub rng_seed: Option<u64>,
    terminate: Option<Box<dyn FnMut(&EvolveState<G>) -> bool>>,
}

impl<G: Genotype, F: Fitness<Genotype = G>> Default for Builder<G, F> {
    fn default() -> Self {
        Self {
            genotype: None,
            fitness: None,
            population_size: 0,
            crossover_probability: 0.95,
            mutation_probability: 0.01,
            number_of_parents: 2,
            preserve: 0,
            select: SelectWrapper::RouletteBasic(SelectRouletteBasic::new()),
            crossover: CrossoverWrapper::Points(CrossoverPoints::new(2)),
            history: false,
            cache_size: None,
            threads: 1,
            strict: false,
            rng_seed: None,
            terminate: None,
        }
    }
}

impl<G: Genotype, F: Fitness<Genotype = G>> Builder<G, F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_genotype(mut self, genotype: G) -> Self {
        self.genotype = Some(genotype);
        self
    }
    pub fn with_fitness(mut self, fitness: F) -> Self {
        self.fitness = Some(fitness);
        self
    }
    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }
    pub fn with_crossover_probability(mut self, crossover_probability: f32) -> Self {
        self.crossover_probability = crossover_probability;
        self
    }
    pub fn with_mutation_probability(mut self, mutation_probability: f32) -> Self {
        self.mutation_probability = mutation_probability;
        self
    }
    pub fn with_number_of_parents(mut self, number_of_parents: usize) -> Self {
        self.number_of_parents = number_of_parents;
        self
    }
    /// Elitism: copy the top `preserve` chromosomes verbatim into the next
    /// generation. Zero disables elitism, the population size freezes the
    /// population entirely.
    pub fn with_preserve(mut self, preserve: usize) -> Self {
        self.preserve = preserve;
        self
    }
    pub fn with_select(mut self, select: impl Into<SelectWrapper>) -> Self {
        self.select = select.into();
        self
    }
    pub fn with_crossover(mut self, crossover: impl Into<CrossoverWrapper>) -> Self {
        self.crossover = crossover.into();
        self
    }
    /// Record `(min, mean, max)` fitness per completed generation.
    pub fn with_history(mut self, history: bool) -> Self {
        self.history = history;
        self
    }
    /// Memoise fitness by genes fingerprint across generations.
    pub fn with_cache(mut self, cache: bool) -> Self {
        self.cache_size = cache.then_some(DEFAULT_CACHE_SIZE);
        self
    }
    /// Like [with_cache](Builder::with_cache), with an explicit LRU bound.
    pub fn with_cache_size(mut self, cache_size: usize) -> Self {
        self.cache_size = Some(cache_size);
        self
    }
    /// Number of fitness worker threads, 1 keeps evaluation on the driver
    /// thread.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }
    /// Fingerprint chromosomes around every fitness call and fail the
    /// generation when the callback modified the genes.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
    /// Fixed seed for reproducible runs; a random seed is drawn otherwise.
    pub fn with_rng_seed(mut self, rng_seed: u64) -> Self {
        self.rng_seed = Some(rng_seed);
        self
    }
    /// Checked once per generation, right after evaluation; a true result
    /// stops [evolve](Evolve::evolve) early.
    pub fn with_terminate(
        mut self,
        terminate: impl FnMut(&EvolveState<G>) -> bool + 'static,
    ) -> Self {
        self.terminate = Some(Box::new(terminate));
        self
    }

    pub fn build(self) -> Result<Evolve<G, F>, Error> {
        self.try_into()
    }
}

impl<G: Genotype, F: Fitness<Genotype = G>> TryFrom<Builder<G, F>> for Evolve<G, F> {
    type Error = Error;

    fn try_from(builder: Builder<G, F>) -> Result<Self, Self::Error> {
        let Some(genotype) = builder.genotype else {
            return Err(Error::InvalidConfig("Evolve requires a Genotype"));
        };
        let Some(fitness) = builder.fitness else {
            return Err(Error::InvalidConfig("Evolve requires a Fitness"));
        };
        if builder.population_size < 2 {
            return Err(Error::InvalidConfig("Evolve requires a population_size >= 2"));
        }
        if builder.number_of_parents < 2 {
            return Err(Error::InvalidConfig("Evolve requires number_of_parents >= 2"));
        }
        if !(0.0..=1.0).contains(&builder.crossover_probability) {
            return Err(Error::InvalidConfig(
                "crossover_probability must be within [0, 1]",
            ));
        }
        if !(0.0..=1.0).contains(&builder.mutation_probability) {
            return Err(Error::InvalidConfig(
                "mutation_probability must be within [0, 1]",
            ));
        }
        if builder.preserve > builder.population_size {
            return Err(Error::InvalidConfig(
                "preserve cannot exceed the population_size",
            ));
        }
        if builder.threads == 0 {
            return Err(Error::InvalidConfig("Evolve requires threads >= 1"));
        }
        builder.select.validate()?;
        builder.crossover.validate()?;
        if builder.crossover.require_crossover_points() && !genotype.has_crossover_points() {
            return Err(Error::InvalidConfig(
                "the provided Crossover strategy exchanges gene segments, which the provided Genotype does not support",
            ));
        }
        if builder.crossover.require_permutation() && !genotype.has_permutation_crossover() {
            return Err(Error::InvalidConfig(
                "the provided Crossover strategy requires a permutation Genotype",
            ));
        }

        let config = EvolveConfig {
            population_size: builder.population_size,
            crossover_probability: builder.crossover_probability,
            number_of_parents: builder.number_of_parents,
            preserve: builder.preserve,
            history: builder.history,
            cache_size: builder.cache_size,
            threads: builder.threads,
            strict: builder.strict,
            rng_seed: builder.rng_seed.unwrap_or_else(rand::random),
        };
        let cache = config.cache_size.map(FitnessCache::try_new).transpose()?;
        let evaluator = Evaluator::new(fitness, cache, config.threads, config.strict)?;
        Ok(Self {
            genotype,
            config,
            select: builder.select,
            crossover: builder.crossover,
            mutate: Mutate::new(builder.mutation_probability),
            evaluator,
            state: EvolveState::default(),
            terminate: builder.terminate,
        })
    }
}
