//! The population is a container for [Chromosomes](Chromosome)
use crate::chromosome::{Chromosome, GenesHash};
use crate::fitness::FitnessValue;
use crate::genotype::Genotype;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::HashSet;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(serialize = "", deserialize = ""))]
pub struct Population<G: Genotype> {
    pub chromosomes: Vec<Chromosome<G>>,
}

impl<G: Genotype> Population<G> {
    pub fn new(chromosomes: Vec<Chromosome<G>>) -> Self {
        Self { chromosomes }
    }

    pub fn size(&self) -> usize {
        self.chromosomes.len()
    }

    /// Indices ordered best fitness first. Ties and equal scores keep
    /// insertion order, unscored chromosomes rank last.
    pub fn ranked_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.size()).collect();
        indices.sort_unstable_by_key(|&index| {
            (
                Reverse(self.chromosomes[index].fitness_score.map(OrderedFloat)),
                index,
            )
        });
        indices
    }

    /// Like [ranked_indices](Self::ranked_indices), but only the first
    /// occurrence of each genes fingerprint survives.
    pub fn ranked_unique_indices(&self, genotype: &G) -> Vec<usize> {
        let mut seen: HashSet<GenesHash> = HashSet::with_capacity(self.size());
        self.ranked_indices()
            .into_iter()
            .filter(|&index| seen.insert(genotype.calculate_genes_hash(&self.chromosomes[index])))
            .collect()
    }

    pub fn best_chromosome(&self) -> Option<&Chromosome<G>> {
        self.chromosomes
            .iter()
            .filter(|chromosome| chromosome.fitness_score.is_some())
            .max_by_key(|chromosome| chromosome.fitness_score.map(OrderedFloat))
    }

    pub fn fitness_score_count(&self) -> usize {
        self.chromosomes
            .iter()
            .filter(|chromosome| chromosome.fitness_score.is_some())
            .count()
    }
    pub fn fitness_score_min(&self) -> Option<FitnessValue> {
        self.chromosomes
            .iter()
            .filter_map(|chromosome| chromosome.fitness_score)
            .min_by_key(|&score| OrderedFloat(score))
    }
    pub fn fitness_score_max(&self) -> Option<FitnessValue> {
        self.chromosomes
            .iter()
            .filter_map(|chromosome| chromosome.fitness_score)
            .max_by_key(|&score| OrderedFloat(score))
    }
    pub fn fitness_score_mean(&self) -> f64 {
        stats::mean(
            self.chromosomes
                .iter()
                .filter_map(|chromosome| chromosome.fitness_score),
        )
    }
    pub fn fitness_score_stddev(&self) -> f64 {
        stats::stddev(
            self.chromosomes
                .iter()
                .filter_map(|chromosome| chromosome.fitness_score),
        )
    }
}

impl<G: Genotype> From<Vec<Chromosome<G>>> for Population<G> {
    fn from(chromosomes: Vec<Chromosome<G>>) -> Self {
        Self::new(chromosomes)
    }
}
