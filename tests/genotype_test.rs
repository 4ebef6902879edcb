mod support;

use genetic_engine::errors::Error;
use genetic_engine::genotype::{Edge, Genotype, VariableLength};
use support::*;

#[test]
fn bit_vector_factory_respects_fixed_shape() {
    let genotype = bit_genotype(32);
    let mut rng = rng(0);
    for _ in 0..20 {
        let chromosome = genotype.chromosome_factory(&mut rng);
        assert_eq!(genotype.genes_len(&chromosome), 32);
        assert_eq!(chromosome.hole_prefix, 0);
        assert!(chromosome.fitness_score().is_none());
    }
}

#[test]
fn bit_vector_factory_respects_variable_shapes() {
    let genotype = bit_genotype_variable(10, VariableLength::RightEdge);
    let mut rng = rng(1);
    for _ in 0..50 {
        let chromosome = genotype.chromosome_factory(&mut rng);
        assert_eq!(chromosome.hole_prefix, 0);
        assert!((1..=10).contains(&genotype.genes_len(&chromosome)));
    }

    let genotype = bit_genotype_variable(10, VariableLength::BothEdges);
    for _ in 0..50 {
        let chromosome = genotype.chromosome_factory(&mut rng);
        let defined = genotype.genes_len(&chromosome);
        assert!(defined >= 1);
        assert!(chromosome.hole_prefix + defined <= 10);
    }
}

#[test]
fn bit_vector_roundtrip() {
    let genotype = bit_genotype(5);
    let raw = vec![Some(true), Some(false), Some(true), Some(true), Some(false)];
    let chromosome = genotype.chromosome_from_alleles(&raw).unwrap();
    assert_eq!(genotype.alleles(&chromosome), raw);

    let reencoded = genotype
        .chromosome_from_alleles(&genotype.alleles(&chromosome))
        .unwrap();
    assert_eq!(reencoded, chromosome);
    assert_eq!(
        genotype.calculate_genes_hash(&reencoded),
        genotype.calculate_genes_hash(&chromosome)
    );
}

#[test]
fn bit_vector_roundtrip_with_hole_prefix() {
    let genotype = bit_genotype_variable(6, VariableLength::BothEdges);
    let raw = vec![None, None, Some(true), Some(false)];
    let chromosome = genotype.chromosome_from_alleles(&raw).unwrap();
    assert_eq!(chromosome.hole_prefix, 2);
    assert_eq!(genotype.genes_len(&chromosome), 2);
    assert_eq!(genotype.alleles(&chromosome), raw);
}

#[test]
fn bit_vector_rejects_invalid_shapes() {
    let genotype = bit_genotype(4);
    // wrong length
    assert!(matches!(
        genotype.chromosome_from_alleles(&[Some(true), Some(false)]),
        Err(Error::InvalidChromosome(_))
    ));
    // holes on a fixed-length genotype
    assert!(matches!(
        genotype.chromosome_from_alleles(&[None, Some(true), Some(true), Some(true)]),
        Err(Error::InvalidChromosome(_))
    ));
    // interior hole
    let genotype = bit_genotype_variable(4, VariableLength::BothEdges);
    assert!(matches!(
        genotype.chromosome_from_alleles(&[Some(true), None, Some(true)]),
        Err(Error::InvalidChromosome(_))
    ));
}

#[test]
fn list_vector_roundtrip_and_rejection() {
    let genotype = number_list_genotype(vec![vec![1, 2, 3], vec![4, 5], vec![6, 7, 8, 9]]);
    let raw = vec![Some(2), Some(5), Some(9)];
    let chromosome = genotype.chromosome_from_alleles(&raw).unwrap();
    assert_eq!(genotype.alleles(&chromosome), raw);

    // 6 is not a legal value for position 1
    assert!(matches!(
        genotype.chromosome_from_alleles(&[Some(2), Some(6), Some(9)]),
        Err(Error::InvalidChromosome(_))
    ));
}

#[test]
fn list_vector_mutation_draws_distinct_values() {
    let genotype = number_list_genotype(vec![vec![1, 2], vec![7]]);
    let mut rng = rng(2);
    let mut chromosome = genotype
        .chromosome_from_alleles(&[Some(1), Some(7)])
        .unwrap();
    for _ in 0..10 {
        let before = genotype.allele(&chromosome, 0);
        genotype.mutate_gene(&mut chromosome, 0, &mut rng);
        assert_ne!(genotype.allele(&chromosome, 0), before);
        // single-entry list has nothing else to offer
        genotype.mutate_gene(&mut chromosome, 1, &mut rng);
        assert_eq!(genotype.allele(&chromosome, 1), Some(7));
    }
}

#[test]
fn range_vector_roundtrip_and_bounds() {
    let genotype = range_genotype(vec![-4..=4, 0..=1000, -2..=-1]);
    let raw = vec![Some(-4), Some(713), Some(-1)];
    let chromosome = genotype.chromosome_from_alleles(&raw).unwrap();
    assert_eq!(genotype.alleles(&chromosome), raw);

    assert!(matches!(
        genotype.chromosome_from_alleles(&[Some(5), Some(0), Some(-1)]),
        Err(Error::InvalidChromosome(_))
    ));
    assert!(matches!(
        genotype.chromosome_from_alleles(&[Some(0), Some(1001), Some(-1)]),
        Err(Error::InvalidChromosome(_))
    ));
}

#[test]
fn range_vector_mutation_stays_in_range() {
    let genotype = range_genotype(vec![-4..=4; 8]);
    let mut rng = rng(3);
    let mut chromosome = genotype.chromosome_factory(&mut rng);
    for _ in 0..200 {
        let index = 3;
        genotype.mutate_gene(&mut chromosome, index, &mut rng);
        let value = genotype.allele(&chromosome, index).unwrap();
        assert!((-4..=4).contains(&value));
    }
}

#[test]
fn combination_factory_is_a_permutation() {
    let genotype = letter_combination_genotype(6);
    let mut rng = rng(4);
    for _ in 0..20 {
        let chromosome = genotype.chromosome_factory(&mut rng);
        let mut decoded = decoded_defined(&genotype, &chromosome);
        decoded.sort();
        assert_eq!(decoded, vec!["A", "B", "C", "D", "E", "F"]);
    }
}

#[test]
fn combination_mutation_preserves_permutation() {
    let genotype = letter_combination_genotype(5);
    let mut rng = rng(5);
    let mut chromosome = genotype.chromosome_factory(&mut rng);
    for index in [0, 2, 4, 1, 3, 0, 4] {
        genotype.mutate_gene(&mut chromosome, index, &mut rng);
        let mut decoded = decoded_defined(&genotype, &chromosome);
        decoded.sort();
        assert_eq!(decoded, vec!["A", "B", "C", "D", "E"]);
    }
}

#[test]
fn combination_rejects_duplicates_and_gaps() {
    let genotype = letter_combination_genotype(3);
    let encode = |letters: &[&str]| {
        genotype.chromosome_from_alleles(
            &letters
                .iter()
                .map(|letter| Some(letter.to_string()))
                .collect::<Vec<_>>(),
        )
    };
    assert!(encode(&["C", "A", "B"]).is_ok());
    assert!(matches!(encode(&["A", "A", "B"]), Err(Error::InvalidChromosome(_))));
    assert!(matches!(encode(&["A", "B"]), Err(Error::InvalidChromosome(_))));
    assert!(matches!(encode(&["A", "B", "Z"]), Err(Error::InvalidChromosome(_))));
}

#[test]
fn variable_length_edges_move_as_configured() {
    let genotype = bit_genotype_variable(6, VariableLength::BothEdges);
    let mut rng = rng(6);
    let mut chromosome = genotype
        .chromosome_from_alleles(&[None, Some(true), Some(false), Some(true)])
        .unwrap();

    assert!(genotype.shrink_chromosome(&mut chromosome, Edge::Left));
    assert_eq!(chromosome.hole_prefix, 2);
    assert_eq!(genotype.genes_len(&chromosome), 2);
    assert_eq!(genotype.allele(&chromosome, 2), Some(false));

    assert!(genotype.grow_chromosome(&mut chromosome, Edge::Left, &mut rng));
    assert_eq!(chromosome.hole_prefix, 1);
    assert_eq!(genotype.genes_len(&chromosome), 3);

    assert!(genotype.grow_chromosome(&mut chromosome, Edge::Right, &mut rng));
    assert_eq!(genotype.genes_len(&chromosome), 4);

    // grow right until the configured size blocks it
    assert!(genotype.grow_chromosome(&mut chromosome, Edge::Right, &mut rng));
    assert!(!genotype.grow_chromosome(&mut chromosome, Edge::Right, &mut rng));
    assert_eq!(genotype.positions(&chromosome), 6);

    // a single gene never shrinks away
    let mut single = genotype.chromosome_from_alleles(&[Some(true)]).unwrap();
    assert!(!genotype.shrink_chromosome(&mut single, Edge::Right));
    assert!(!genotype.shrink_chromosome(&mut single, Edge::Left));
}

#[test]
fn right_edge_level_refuses_left_edge_moves() {
    let genotype = bit_genotype_variable(6, VariableLength::RightEdge);
    let mut rng = rng(7);
    let mut chromosome = genotype
        .chromosome_from_alleles(&[Some(true), Some(false), Some(true)])
        .unwrap();
    assert!(!genotype.shrink_chromosome(&mut chromosome, Edge::Left));
    assert!(!genotype.grow_chromosome(&mut chromosome, Edge::Left, &mut rng));
    assert!(genotype.shrink_chromosome(&mut chromosome, Edge::Right));
    assert_eq!(genotype.genes_len(&chromosome), 2);
}

#[test]
fn crossover_points_child_alternates_segments() {
    let genotype = range_genotype(vec![0..=9; 6]);
    let father = range_chromosome(&genotype, &[1, 1, 1, 1, 1, 1]);
    let mother = range_chromosome(&genotype, &[8, 8, 8, 8, 8, 8]);

    let child = genotype.crossover_points_child(&father, &mother, &[2, 4]);
    assert_eq!(decoded_defined(&genotype, &child), vec![1, 1, 8, 8, 1, 1]);

    let child = genotype.crossover_points_child(&mother, &father, &[3]);
    assert_eq!(decoded_defined(&genotype, &child), vec![8, 8, 8, 1, 1, 1]);
}

#[test]
fn crossover_points_child_inherits_longer_tail() {
    let genotype = BitVectorGenotype::builder()
        .with_genes_size(8)
        .with_variable_length(VariableLength::RightEdge)
        .build()
        .unwrap();
    let short = genotype
        .chromosome_from_alleles(&[Some(true), Some(true), Some(true)])
        .unwrap();
    let long = genotype
        .chromosome_from_alleles(&[Some(false); 6].to_vec())
        .unwrap();

    // last segment comes from the longer parent and extends the child
    let child = genotype.crossover_points_child(&short, &long, &[2]);
    assert_eq!(genotype.genes_len(&child), 6);
    assert_eq!(
        decoded_defined(&genotype, &child),
        vec![true, true, false, false, false, false]
    );
}

#[test]
fn pmx_and_ox_children_are_permutations() {
    let genotype = letter_combination_genotype(7);
    let mut rng = rng(8);
    for _ in 0..50 {
        let father = genotype.chromosome_factory(&mut rng);
        let mother = genotype.chromosome_factory(&mut rng);

        for child in [
            genotype.pmx_child(&father, &mother, &mut rng),
            genotype.ox_child(&father, &mother, &mut rng),
        ] {
            let mut decoded = decoded_defined(&genotype, &child);
            decoded.sort();
            assert_eq!(decoded, vec!["A", "B", "C", "D", "E", "F", "G"]);
        }
    }
}

#[test]
fn genes_hash_tracks_content() {
    let genotype = bit_genotype(8);
    let a = bit_chromosome(&genotype, &[true; 8]);
    let b = bit_chromosome(&genotype, &[true; 8]);
    let mut c = bit_chromosome(&genotype, &[true; 8]);
    let mut rng = rng(9);
    genotype.mutate_gene(&mut c, 3, &mut rng);

    assert_eq!(
        genotype.calculate_genes_hash(&a),
        genotype.calculate_genes_hash(&b)
    );
    assert_ne!(
        genotype.calculate_genes_hash(&a),
        genotype.calculate_genes_hash(&c)
    );
}

#[test]
fn variable_length_levels_map_both_ways() {
    assert_eq!(VariableLength::from_level(0).unwrap(), VariableLength::Fixed);
    assert_eq!(VariableLength::from_level(1).unwrap(), VariableLength::RightEdge);
    assert_eq!(VariableLength::from_level(2).unwrap(), VariableLength::BothEdges);
    assert!(VariableLength::from_level(3).is_err());
    assert_eq!(VariableLength::BothEdges.level(), 2);
}

#[test]
fn builders_reject_inconsistent_specifications() {
    assert!(BitVectorGenotype::builder().build().is_err());
    assert!(ListVectorGenotype::<i64>::builder()
        .with_allele_lists(vec![])
        .build()
        .is_err());
    assert!(ListVectorGenotype::<i64>::builder()
        .with_allele_lists(vec![vec![1], vec![]])
        .build()
        .is_err());
    let reversed = std::ops::RangeInclusive::new(4, -4);
    assert!(RangeVectorGenotype::builder()
        .with_allele_ranges(vec![reversed])
        .build()
        .is_err());
    assert!(CombinationGenotype::builder()
        .with_allele_list(vec!["A".to_string(), "A".to_string()])
        .build()
        .is_err());
    assert!(CombinationGenotype::builder()
        .with_allele_list(vec!["A".to_string(), "B".to_string()])
        .with_variable_length(VariableLength::BothEdges)
        .build()
        .is_err());
}
