//! A general-purpose genetic algorithm engine, built to evolve large
//! populations of long chromosomes efficiently in both time and memory.
//!
//! There are three main elements to this approach:
//! * The [Genotype](crate::genotype) (the search space, with a compact
//!   storage per chromosome representation)
//! * The [Fitness](crate::fitness) function (the search goal, optionally
//!   cached and evaluated in parallel)
//! * The [Evolve](crate::evolve::Evolve) driver (the search strategy:
//!   selection, crossover, mutation, preservation)
//!
//! ## Quick Usage
//!
//! ```rust
//! use genetic_engine::evolve::prelude::*;
//!
//! // the search space, 100 bit-packed boolean genes
//! let genotype = BitVectorGenotype::builder()
//!     .with_genes_size(100)
//!     .build()
//!     .unwrap();
//!
//! // the search goal to maximize
//! #[derive(Clone, Debug)]
//! pub struct CountOnes;
//! impl Fitness for CountOnes {
//!     type Genotype = BitVectorGenotype;
//!     fn calculate_for_chromosome(
//!         &mut self,
//!         chromosome: &mut Chromosome<Self::Genotype>,
//!         _genotype: &Self::Genotype,
//!     ) -> Result<FitnessValue, Error> {
//!         Ok(chromosome.genes.count_ones(..) as FitnessValue)
//!     }
//! }
//!
//! // the search strategy
//! let mut evolve = Evolve::builder()
//!     .with_genotype(genotype)
//!     .with_fitness(CountOnes)
//!     .with_population_size(100)               // evolve with 100 chromosomes
//!     .with_preserve(2)                        // keep the best 2 verbatim
//!     .with_select(SelectRoulette::new())      // breed from the fitter half
//!     .with_crossover(CrossoverPoints::new(2)) // 2-point crossover, keep the fitter child
//!     .with_crossover_probability(0.9)
//!     .with_mutation_probability(0.01)
//!     .with_rng_seed(42)                       // reproducible run
//!     .build()
//!     .unwrap();
//!
//! evolve.init();
//! evolve.evolve(20).unwrap();
//!
//! let best = evolve.get_fittest(1, false).unwrap().remove(0);
//! println!("{:?}", best.fitness_score());
//! ```
//!
//! All selection schemes and crossover strategies are closed enum families
//! dispatched through their wrappers, so the inner generation loop stays
//! branch-predictable. See [SelectWrapper](crate::select::SelectWrapper) and
//! [CrossoverWrapper](crate::crossover::CrossoverWrapper) for the menu.
pub mod allele;
pub mod chromosome;
pub mod crossover;
pub mod errors;
pub mod evolve;
pub mod fitness;
pub mod genotype;
pub mod mutate;
pub mod population;
pub mod sampler;
pub mod select;
