#[allow(unused_imports)]
pub use genetic_engine::chromosome::Chromosome;
#[allow(unused_imports)]
pub use genetic_engine::genotype::{
    BitVectorGenotype, CombinationGenotype, Genotype, ListVectorGenotype, RangeVectorGenotype,
    VariableLength,
};
#[allow(unused_imports)]
pub use rand::rngs::SmallRng;
#[allow(unused_imports)]
pub use rand::SeedableRng;

#[allow(dead_code)]
pub fn rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

#[allow(dead_code)]
pub fn bit_genotype(genes_size: usize) -> BitVectorGenotype {
    BitVectorGenotype::builder()
        .with_genes_size(genes_size)
        .build()
        .unwrap()
}

#[allow(dead_code)]
pub fn bit_genotype_variable(genes_size: usize, variable_length: VariableLength) -> BitVectorGenotype {
    BitVectorGenotype::builder()
        .with_genes_size(genes_size)
        .with_variable_length(variable_length)
        .build()
        .unwrap()
}

#[allow(dead_code)]
pub fn number_list_genotype(allele_lists: Vec<Vec<i64>>) -> ListVectorGenotype<i64> {
    ListVectorGenotype::<i64>::builder()
        .with_allele_lists(allele_lists)
        .build()
        .unwrap()
}

#[allow(dead_code)]
pub fn range_genotype(allele_ranges: Vec<std::ops::RangeInclusive<i64>>) -> RangeVectorGenotype {
    RangeVectorGenotype::builder()
        .with_allele_ranges(allele_ranges)
        .build()
        .unwrap()
}

#[allow(dead_code)]
pub fn letter_combination_genotype(size: usize) -> CombinationGenotype {
    let letters = ["A", "B", "C", "D", "E", "F", "G", "H"];
    CombinationGenotype::builder()
        .with_allele_list(letters[..size].iter().map(|s| s.to_string()).collect())
        .build()
        .unwrap()
}

#[allow(dead_code)]
pub fn bit_chromosome(
    genotype: &BitVectorGenotype,
    bits: &[bool],
) -> Chromosome<BitVectorGenotype> {
    let alleles: Vec<Option<bool>> = bits.iter().copied().map(Some).collect();
    genotype.chromosome_from_alleles(&alleles).unwrap()
}

#[allow(dead_code)]
pub fn range_chromosome(
    genotype: &RangeVectorGenotype,
    values: &[i64],
) -> Chromosome<RangeVectorGenotype> {
    let alleles: Vec<Option<i64>> = values.iter().copied().map(Some).collect();
    genotype.chromosome_from_alleles(&alleles).unwrap()
}

#[allow(dead_code)]
pub fn decoded<G: Genotype>(genotype: &G, chromosome: &Chromosome<G>) -> Vec<Option<G::Allele>> {
    genotype.alleles(chromosome)
}

#[allow(dead_code)]
pub fn decoded_defined<G: Genotype>(genotype: &G, chromosome: &Chromosome<G>) -> Vec<G::Allele> {
    genotype.alleles(chromosome).into_iter().flatten().collect()
}
