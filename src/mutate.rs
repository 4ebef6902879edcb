//! The mutation phase, applied to every freshly bred child. Don't overdo the
//! probability, as it degenerates the population too much if overused.
use crate::chromosome::Chromosome;
use crate::genotype::{Edge, Genotype, VariableLength};
use rand::distributions::{Bernoulli, Distribution};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Per-gene mutation: every defined gene mutates independently with the
/// configured probability, with the gene mechanics owned by the genotype
/// (bit flip, list re-draw, range re-draw, permutation swap).
///
/// Variable-length genotypes additionally grow or shrink by one gene with
/// the same probability: level 1 on the right edge, level 2 on a random
/// edge, where a left-edge shrink extends the hole prefix. Growth stops at
/// the configured size, shrinkage at a single gene.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Mutate {
    pub mutation_probability: f32,
}

impl Mutate {
    pub fn new(mutation_probability: f32) -> Self {
        Self {
            mutation_probability,
        }
    }

    pub fn call<G: Genotype, R: Rng>(
        &self,
        genotype: &G,
        chromosome: &mut Chromosome<G>,
        rng: &mut R,
    ) {
        if self.mutation_probability <= 0.0 {
            return;
        }
        let gene_sampler = Bernoulli::new(self.mutation_probability as f64).unwrap();
        let mut mutated = false;
        for index in 0..genotype.genes_len(chromosome) {
            if gene_sampler.sample(rng) {
                genotype.mutate_gene(chromosome, index, rng);
                mutated = true;
            }
        }
        match genotype.variable_length() {
            VariableLength::Fixed => (),
            VariableLength::RightEdge => {
                if gene_sampler.sample(rng) {
                    mutated |= self.resize(genotype, chromosome, Edge::Right, rng);
                }
            }
            VariableLength::BothEdges => {
                if gene_sampler.sample(rng) {
                    let edge = if rng.gen::<bool>() { Edge::Left } else { Edge::Right };
                    mutated |= self.resize(genotype, chromosome, edge, rng);
                }
            }
        }
        if mutated {
            chromosome.taint();
        }
    }

    fn resize<G: Genotype, R: Rng>(
        &self,
        genotype: &G,
        chromosome: &mut Chromosome<G>,
        edge: Edge,
        rng: &mut R,
    ) -> bool {
        if rng.gen::<bool>() {
            genotype.grow_chromosome(chromosome, edge, rng)
        } else {
            genotype.shrink_chromosome(chromosome, edge)
        }
    }
}
