mod support;

use genetic_engine::chromosome::Chromosome;
use genetic_engine::errors::Error;
use genetic_engine::fitness::placeholders::CountOnes;
use genetic_engine::fitness::{Evaluator, Fitness, FitnessCache, FitnessValue};
use genetic_engine::genotype::{BitVectorGenotype, Genotype};
use genetic_engine::population::Population;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use support::*;

/// Counts every actual callback invocation, shared across clones so the
/// parallel path counts too.
#[derive(Clone, Debug)]
struct CountingOnes {
    calls: Arc<AtomicUsize>,
}
impl CountingOnes {
    fn new() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}
impl Fitness for CountingOnes {
    type Genotype = BitVectorGenotype;
    fn calculate_for_chromosome(
        &mut self,
        chromosome: &mut Chromosome<Self::Genotype>,
        _genotype: &Self::Genotype,
    ) -> Result<FitnessValue, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(chromosome.genes.count_ones(..) as FitnessValue)
    }
}

/// Misbehaves on purpose: modifies the genes it was asked to score.
#[derive(Clone, Debug)]
struct GeneFlipper;
impl Fitness for GeneFlipper {
    type Genotype = BitVectorGenotype;
    fn calculate_for_chromosome(
        &mut self,
        chromosome: &mut Chromosome<Self::Genotype>,
        _genotype: &Self::Genotype,
    ) -> Result<FitnessValue, Error> {
        chromosome.genes.toggle(0);
        Ok(0.0)
    }
}

/// Always fails.
#[derive(Clone, Debug)]
struct Failing;
impl Fitness for Failing {
    type Genotype = BitVectorGenotype;
    fn calculate_for_chromosome(
        &mut self,
        _chromosome: &mut Chromosome<Self::Genotype>,
        _genotype: &Self::Genotype,
    ) -> Result<FitnessValue, Error> {
        Err(Error::Fitness("callback exploded".to_string()))
    }
}

#[test]
fn evaluator_scores_and_skips_already_scored() {
    let genotype = bit_genotype(8);
    let bits = [true, true, false, true, false, false, false, true];
    let mut chromosome = bit_chromosome(&genotype, &bits);
    let fitness = CountingOnes::new();
    let mut evaluator = Evaluator::new(fitness.clone(), None, 1, false).unwrap();

    assert_eq!(
        evaluator.call_for_chromosome(&genotype, &mut chromosome).unwrap(),
        4.0
    );
    assert_eq!(chromosome.fitness_score(), Some(4.0));
    // second call reads the stored score
    evaluator.call_for_chromosome(&genotype, &mut chromosome).unwrap();
    assert_eq!(fitness.calls(), 1);
}

#[test]
fn cache_collapses_identical_chromosomes() {
    let genotype = bit_genotype(8);
    let bits = [true; 8];
    let fitness = CountingOnes::new();
    let cache = FitnessCache::try_new(1024).unwrap();
    let mut evaluator = Evaluator::new(fitness.clone(), Some(cache.clone()), 1, false).unwrap();

    let chromosomes: Vec<_> = (0..10).map(|_| bit_chromosome(&genotype, &bits)).collect();
    let mut population = Population::new(chromosomes);
    evaluator.call_for_population(&genotype, &mut population).unwrap();

    assert_eq!(fitness.calls(), 1);
    assert!(population
        .chromosomes
        .iter()
        .all(|chromosome| chromosome.fitness_score() == Some(8.0)));
    let (hits, misses) = cache.number_of_hits_and_misses();
    assert_eq!((hits, misses), (9, 1));
}

#[test]
fn without_cache_every_chromosome_is_evaluated() {
    let genotype = bit_genotype(8);
    let fitness = CountingOnes::new();
    let mut evaluator = Evaluator::new(fitness.clone(), None, 1, false).unwrap();

    let chromosomes: Vec<_> = (0..10)
        .map(|_| bit_chromosome(&genotype, &[true; 8]))
        .collect();
    let mut population = Population::new(chromosomes);
    evaluator.call_for_population(&genotype, &mut population).unwrap();
    assert_eq!(fitness.calls(), 10);
}

#[test]
fn parallel_evaluation_matches_sequential() {
    let genotype = bit_genotype(64);
    let mut rng = rng(40);
    let chromosomes: Vec<_> = (0..200)
        .map(|_| genotype.chromosome_factory(&mut rng))
        .collect();

    let mut sequential = Population::new(chromosomes.clone());
    let mut parallel = Population::new(chromosomes);
    Evaluator::new(CountOnes, None, 1, false)
        .unwrap()
        .call_for_population(&genotype, &mut sequential)
        .unwrap();
    Evaluator::new(CountOnes, None, 4, false)
        .unwrap()
        .call_for_population(&genotype, &mut parallel)
        .unwrap();

    for (a, b) in sequential.chromosomes.iter().zip(parallel.chromosomes.iter()) {
        assert_eq!(a.fitness_score(), b.fitness_score());
        assert_eq!(
            a.fitness_score().unwrap(),
            a.genes.count_ones(..) as FitnessValue
        );
    }
}

#[test]
fn strict_mode_detects_gene_mutation() {
    let genotype = bit_genotype(8);
    let mut chromosome = bit_chromosome(&genotype, &[false; 8]);
    let mut evaluator = Evaluator::new(GeneFlipper, None, 1, true).unwrap();
    let result = evaluator.call_for_chromosome(&genotype, &mut chromosome);
    assert!(matches!(result, Err(Error::MutatedDuringFitness)));
    assert!(chromosome.fitness_score().is_none());
}

#[test]
fn relaxed_mode_lets_gene_mutation_slide() {
    let genotype = bit_genotype(8);
    let mut chromosome = bit_chromosome(&genotype, &[false; 8]);
    let mut evaluator = Evaluator::new(GeneFlipper, None, 1, false).unwrap();
    assert!(evaluator.call_for_chromosome(&genotype, &mut chromosome).is_ok());
}

#[test]
fn callback_errors_propagate_and_keep_earlier_scores() {
    let genotype = bit_genotype(8);
    let mut scored = bit_chromosome(&genotype, &[true; 8]);
    scored.set_fitness_score(Some(8.0));
    let unscored = bit_chromosome(&genotype, &[false; 8]);
    let mut population = Population::new(vec![scored, unscored]);

    let mut evaluator = Evaluator::new(Failing, None, 1, false).unwrap();
    let result = evaluator.call_for_population(&genotype, &mut population);
    assert!(matches!(result, Err(Error::Fitness(_))));
    assert_eq!(population.chromosomes[0].fitness_score(), Some(8.0));
    assert!(population.chromosomes[1].fitness_score().is_none());
}

#[test]
fn cache_rejects_zero_size() {
    assert!(matches!(
        FitnessCache::try_new(0),
        Err(Error::InvalidConfig(_))
    ));
}
