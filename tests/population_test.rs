mod support;

use genetic_engine::population::Population;
use support::*;

fn scored_population(scores: &[Option<f64>]) -> (BitVectorGenotype, Population<BitVectorGenotype>) {
    let genotype = bit_genotype(4);
    let chromosomes = scores
        .iter()
        .enumerate()
        .map(|(index, score)| {
            // distinct genes per index, except index pairs sharing bit patterns below
            let bits = [
                index & 1 != 0,
                index & 2 != 0,
                index & 4 != 0,
                index & 8 != 0,
            ];
            let mut chromosome = bit_chromosome(&genotype, &bits);
            chromosome.set_fitness_score(*score);
            chromosome
        })
        .collect();
    (genotype, Population::new(chromosomes))
}

#[test]
fn ranked_indices_orders_best_first_with_stable_ties() {
    let (_, population) = scored_population(&[
        Some(1.0),
        Some(5.0),
        Some(3.0),
        Some(5.0),
        None,
        Some(0.0),
    ]);
    assert_eq!(population.ranked_indices(), vec![1, 3, 2, 0, 5, 4]);
}

#[test]
fn ranked_unique_indices_deduplicates_by_genes() {
    let genotype = bit_genotype(4);
    let mut twin_a = bit_chromosome(&genotype, &[true, false, true, false]);
    let mut twin_b = bit_chromosome(&genotype, &[true, false, true, false]);
    let mut other = bit_chromosome(&genotype, &[false, false, false, true]);
    twin_a.set_fitness_score(Some(10.0));
    twin_b.set_fitness_score(Some(9.0));
    other.set_fitness_score(Some(5.0));
    let population = Population::new(vec![other, twin_b, twin_a]);

    // twin_a ranks first, twin_b collapses into it
    assert_eq!(population.ranked_unique_indices(&genotype), vec![2, 0]);
}

#[test]
fn fitness_statistics() {
    let (_, population) = scored_population(&[Some(2.0), Some(6.0), None, Some(4.0)]);
    assert_eq!(population.fitness_score_count(), 3);
    assert_eq!(population.fitness_score_min(), Some(2.0));
    assert_eq!(population.fitness_score_max(), Some(6.0));
    assert!((population.fitness_score_mean() - 4.0).abs() < 1e-9);
}

#[test]
fn best_chromosome_ignores_unscored() {
    let (_, population) = scored_population(&[None, Some(3.0), Some(8.0), None]);
    assert_eq!(
        population.best_chromosome().and_then(|c| c.fitness_score()),
        Some(8.0)
    );

    let (_, empty_scores) = scored_population(&[None, None]);
    assert!(empty_scores.best_chromosome().is_none());
}
