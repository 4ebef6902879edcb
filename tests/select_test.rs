mod support;

use genetic_engine::population::Population;
use genetic_engine::sampler::Sampler;
use genetic_engine::select::{
    Select, SelectDistribution, SelectRoulette, SelectRouletteBasic, SelectRouletteDistribution,
};
use support::*;

fn population_with_scores(scores: &[Option<f64>]) -> Population<BitVectorGenotype> {
    let genotype = bit_genotype(8);
    let mut rng = rng(100);
    let chromosomes = scores
        .iter()
        .map(|score| {
            let mut chromosome = genotype.chromosome_factory(&mut rng);
            chromosome.set_fitness_score(*score);
            chromosome
        })
        .collect();
    Population::new(chromosomes)
}

#[test]
fn roulette_basic_never_selects_zero_weight() {
    let population =
        population_with_scores(&[Some(0.0), Some(1.0), Some(0.0), Some(3.0), Some(0.0)]);
    let mut rng = rng(10);
    let indices = SelectRouletteBasic::new().call(&population, 500, &mut rng);
    assert_eq!(indices.len(), 500);
    assert!(indices.iter().all(|index| [1, 3].contains(index)));
    // the heavier chromosome dominates
    let heavy = indices.iter().filter(|&&index| index == 3).count();
    assert!(heavy > 250);
}

#[test]
fn roulette_basic_clamps_negative_scores() {
    let population = population_with_scores(&[Some(-5.0), Some(2.0), Some(-1.0)]);
    let mut rng = rng(11);
    let indices = SelectRouletteBasic::new().call(&population, 100, &mut rng);
    assert!(indices.iter().all(|&index| index == 1));
}

#[test]
fn roulette_basic_degenerates_to_uniform_on_zero_total() {
    let population = population_with_scores(&[Some(0.0), Some(0.0), Some(0.0), Some(0.0)]);
    let mut rng = rng(12);
    let indices = SelectRouletteBasic::new().call(&population, 400, &mut rng);
    assert_eq!(indices.len(), 400);
    // uniform fallback reaches every index
    for index in 0..4 {
        assert!(indices.contains(&index));
    }
}

#[test]
fn roulette_restricts_to_top_half() {
    let population = population_with_scores(&[
        Some(1.0),
        Some(10.0),
        Some(2.0),
        Some(20.0),
        Some(3.0),
        Some(30.0),
    ]);
    let mut rng = rng(13);
    let indices = SelectRoulette::new().call(&population, 300, &mut rng);
    // top half by rank is {5, 3, 1}
    assert!(indices.iter().all(|index| [1, 3, 5].contains(index)));
}

#[test]
fn roulette_distribution_stays_in_range() {
    let population = population_with_scores(&[Some(1.0), Some(2.0), Some(3.0), Some(4.0)]);
    let mut rng = rng(14);
    for sampler in [
        Sampler::Uniform,
        Sampler::Normal {
            mean: None,
            stddev: None,
        },
        Sampler::Beta {
            alpha: None,
            beta: None,
        },
    ] {
        let indices =
            SelectRouletteDistribution::new(sampler).call(&population, 200, &mut rng);
        assert_eq!(indices.len(), 200);
        assert!(indices.iter().all(|&index| index < 4));
        // index 0 has weight 1 of 10, so a 200-draw run should hit nonzero indices
        assert!(indices.iter().any(|&index| index > 0));
    }
}

#[test]
fn distribution_ignores_fitness() {
    let population = population_with_scores(&[None, None, None, None, None]);
    let mut rng = rng(15);
    let indices =
        SelectDistribution::new(Sampler::Uniform).call(&population, 300, &mut rng);
    assert_eq!(indices.len(), 300);
    assert!(indices.iter().all(|&index| index < 5));
    for index in 0..5 {
        assert!(indices.contains(&index));
    }
}

#[test]
fn distribution_poisson_clamps_into_range() {
    let population = population_with_scores(&[None, None, None]);
    let mut rng = rng(16);
    let indices = SelectDistribution::new(Sampler::Poisson { mean: Some(50.0) })
        .call(&population, 100, &mut rng);
    assert!(indices.iter().all(|&index| index < 3));
}
