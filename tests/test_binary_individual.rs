use bitgene::{
    encoding::{binarize, decimalize, GeneSegment, VariableRange},
    error::GeneticError,
    individual::{BinaryIndividual, Individual, IndividualOptions, Initializer},
    rng::{RandomNumberGenerator, RandomSource},
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn build(ranges: Vec<(i64, i64)>, eps: f64) -> BinaryIndividual {
    let options = IndividualOptions::builder()
        .ranges(ranges)
        .precision(eps)
        .build()
        .unwrap();
    BinaryIndividual::new(options).unwrap()
}

/// Always picks the same candidate index, so repairs are predictable.
struct FixedIndex(usize);

impl RandomSource for FixedIndex {
    fn gen_range_inclusive(&mut self, low: i64, _high: i64) -> i64 {
        low
    }

    fn gen_index(&mut self, len: usize) -> usize {
        self.0.min(len - 1)
    }
}

#[test]
fn test_single_variable_encoding() {
    init_tracing();
    let mut indv = build(vec![(1, 31)], 1.0);
    assert_eq!(indv.lengths(), &[5]);

    indv.init_solution(vec![3.0]).unwrap();
    assert_eq!(indv.chromosome(), &[0, 0, 0, 1, 1]);
    assert_eq!(indv.decode(), vec![3.0]);
}

#[test]
fn test_two_variable_encoding() {
    init_tracing();
    let mut indv = build(vec![(1, 31), (1, 31)], 1.0);
    assert_eq!(indv.lengths(), &[5, 5]);

    indv.init_solution(vec![8.0, 1.0]).unwrap();
    assert_eq!(indv.chromosome(), &[0, 1, 0, 0, 0, 0, 0, 0, 0, 1]);
    assert_eq!(indv.decode(), vec![8.0, 1.0]);
}

#[test]
fn test_zero_chromosome_is_repaired() {
    init_tracing();
    let mut rng = RandomNumberGenerator::new();
    let mut indv = build(vec![(1, 7)], 1.0);
    assert_eq!(indv.lengths(), &[3]);

    indv.init_chromosome(vec![0, 0, 0]).unwrap();
    assert_eq!(indv.solution(), &[0.0]);

    indv.bound_check(&mut rng).unwrap();
    assert_ne!(indv.chromosome(), &[0, 0, 0]);
    assert!([vec![1.0], vec![2.0], vec![4.0]].contains(&indv.solution().to_vec()));
}

#[test]
fn test_repair_with_injected_source() {
    let mut indv = build(vec![(1, 7), (1, 31)], 1.0);
    indv.init_chromosome(vec![0, 0, 0, 0, 0, 0, 0, 0]).unwrap();

    indv.bound_check(&mut FixedIndex(2)).unwrap();

    // Index 2 picks 4 out of {1, 2, 4} and out of {1, 2, 4, 8, 16}
    assert_eq!(indv.solution(), &[4.0, 4.0]);
    assert_eq!(indv.chromosome(), &[1, 0, 0, 0, 0, 1, 0, 0]);
}

#[test]
fn test_repair_result_is_a_power_of_two_within_width() {
    let mut rng = RandomNumberGenerator::from_seed(1234);
    let mut indv = build(vec![(1, 31), (1, 7), (1, 255)], 1.0);

    for _ in 0..50 {
        indv.init_chromosome(vec![0; indv.chromosome_len()]).unwrap();
        indv.bound_check(&mut rng).unwrap();

        for (&value, &length) in indv.solution().iter().zip(indv.lengths()) {
            assert_ne!(value, 0.0);
            let exponent = value.log2();
            assert_eq!(exponent.fract(), 0.0);
            assert!((exponent as usize) < length);
        }
        assert_eq!(indv.decode(), indv.solution());
    }
}

#[test]
fn test_bound_check_is_a_no_op_without_zeros() {
    let mut rng = RandomNumberGenerator::from_seed(7);
    let mut indv = build(vec![(1, 31), (1, 31)], 1.0);
    indv.init_solution(vec![8.0, 1.0]).unwrap();
    let before = indv.clone();

    indv.bound_check(&mut rng).unwrap();
    assert_eq!(indv, before);

    // Idempotent once repaired
    indv.init_solution(vec![0.0, 3.0]).unwrap();
    indv.bound_check(&mut rng).unwrap();
    let repaired = indv.clone();
    indv.bound_check(&mut rng).unwrap();
    assert_eq!(indv, repaired);
}

#[test]
fn test_round_trip_every_representable_value() {
    let ranges = vec![(1, 31), (0, 7), (3, 100)];
    let indv = build(ranges.clone(), 1.0);

    for ((lower, upper), (&length, segment)) in ranges
        .iter()
        .zip(indv.lengths().iter().zip(indv.gene_segments()))
    {
        assert_eq!(segment.len(), length);
        for value in *lower..=*upper {
            let bits = binarize(value as f64, 1.0, length).unwrap();
            assert_eq!(decimalize(&bits, 1.0, *lower as f64), value as f64);
        }
    }
}

#[test]
fn test_round_trip_with_fractional_precision() {
    let options = IndividualOptions::new(vec![VariableRange::new(0, 10)], 0.25).unwrap();
    let mut indv = BinaryIndividual::new(options).unwrap();

    for step in 0..=40 {
        let value = step as f64 * 0.25;
        indv.init_solution(vec![value]).unwrap();
        assert_eq!(indv.chromosome().len(), indv.chromosome_len());
        assert_eq!(indv.decode(), vec![value]);
    }
}

#[test]
fn test_width_and_partition_invariants() {
    let mut rng = RandomNumberGenerator::from_seed(99);
    let indv = BinaryIndividual::with_rng(
        IndividualOptions::new(
            vec![
                VariableRange::new(1, 31),
                VariableRange::new(0, 1),
                VariableRange::new(10, 1000),
            ],
            vec![1.0, 1.0, 0.5],
        )
        .unwrap(),
        &mut rng,
    )
    .unwrap();

    let segments = indv.gene_segments();
    assert_eq!(segments[0], GeneSegment::new(0, indv.lengths()[0]));
    for pair in segments.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }
    let total: usize = indv.lengths().iter().sum();
    assert_eq!(segments.last().unwrap().end, total);
    assert_eq!(indv.encode().unwrap().len(), total);
    assert_eq!(indv.chromosome().len(), total);
}

#[test]
fn test_init_dispatch() {
    let mut rng = RandomNumberGenerator::from_seed(3);
    let mut indv = build(vec![(1, 7)], 1.0);

    indv.init(Initializer::Chromosome(vec![0, 1, 1]), &mut rng).unwrap();
    assert_eq!(indv.solution(), &[3.0]);

    indv.init(Initializer::Solution(vec![6.0]), &mut rng).unwrap();
    assert_eq!(indv.chromosome(), &[1, 1, 0]);

    indv.init(Initializer::Random, &mut rng).unwrap();
    assert!(indv.ranges()[0].contains(indv.solution()[0]));
    assert_eq!(indv.decode(), indv.solution());
}

#[test]
fn test_clone() {
    let mut indv = build(vec![(1, 7)], 1.0);
    indv.init_solution(vec![4.0]).unwrap();
    let indv_clone = indv.clone_equivalent();

    assert_eq!(indv.chromosome(), indv_clone.chromosome());
    assert!((indv.solution()[0] - indv_clone.solution()[0]).abs() < 1e-2);
    assert_eq!(indv.ranges(), indv_clone.ranges());
    assert_eq!(indv.precisions(), indv_clone.precisions());
}

#[test]
fn test_overflow_is_rejected() {
    let mut indv = build(vec![(1, 31)], 1.0);
    let result = indv.init_solution(vec![32.0]);

    match result {
        Err(GeneticError::Overflow { value, length, .. }) => {
            assert_eq!(value, 32.0);
            assert_eq!(length, 5);
        }
        _ => panic!("Expected Overflow error"),
    }
}

#[test]
fn test_descriptors() {
    assert!(matches!(
        IndividualOptions::new(vec![VariableRange::new(0, 1)], 10.0),
        Err(GeneticError::Configuration(_))
    ));
    assert!(matches!(
        IndividualOptions::new(vec![VariableRange::new(0, 1)], vec![1.0, 2.0]),
        Err(GeneticError::Configuration(_))
    ));
    assert!(matches!(
        IndividualOptions::new(vec![], 1.0),
        Err(GeneticError::Configuration(_))
    ));
}

#[test]
fn test_through_individual_trait() {
    fn repair_and_copy<I: Individual>(indv: &mut I) -> I {
        indv.bound_check(&mut FixedIndex(0)).unwrap();
        indv.clone_equivalent()
    }

    let mut indv = build(vec![(1, 7)], 1.0);
    indv.init_chromosome(vec![0, 0, 0]).unwrap();

    let copy = repair_and_copy(&mut indv);
    assert_eq!(Individual::solution(&copy), &[1.0]);
    assert_eq!(Individual::chromosome(&copy), &[0, 0, 1]);
    assert_eq!(Individual::encode(&copy).unwrap(), vec![0, 0, 1]);
    assert_eq!(Individual::decode(&copy), vec![1.0]);
}

#[test]
fn test_repair_keeps_solution_in_sync_with_fractional_precision() {
    let mut indv = build(vec![(1, 7)], 0.3);
    assert_eq!(indv.lengths(), &[5]);
    indv.init_chromosome(vec![0, 0, 0, 0, 0]).unwrap();

    indv.bound_check(&mut FixedIndex(0)).unwrap();

    // Candidate 1 quantizes to 3 steps of 0.3
    assert_eq!(indv.chromosome(), &[0, 0, 0, 1, 1]);
    assert_eq!(indv.decode(), indv.solution());
    assert!((indv.solution()[0] - 0.9).abs() < 1e-9);
}

#[test]
fn test_repair_with_non_unit_precisions() {
    let mut rng = RandomNumberGenerator::from_seed(2024);

    for eps in [0.25, 0.3, 2.0] {
        let mut indv = build(vec![(1, 7), (1, 31)], eps);
        let zeros = vec![0; indv.chromosome_len()];

        for _ in 0..50 {
            indv.init_chromosome(zeros.clone()).unwrap();
            indv.bound_check(&mut rng).unwrap();

            assert_ne!(indv.chromosome(), zeros.as_slice(), "eps {}", eps);
            assert!(indv.solution().iter().all(|&value| value > 0.0), "eps {}", eps);
            assert_eq!(indv.decode(), indv.solution(), "eps {}", eps);
        }
    }
}

#[test]
fn test_repair_detects_values_that_quantize_to_zero() {
    let mut indv = build(vec![(1, 7), (1, 7)], 0.3);

    // 0.2 / 0.3 rounds down to 0 steps, so the first segment is all zeros
    indv.init_solution(vec![0.2, 3.0]).unwrap();
    assert_eq!(indv.solution(), &[0.2, 3.0]);
    assert_eq!(&indv.chromosome()[..5], &[0, 0, 0, 0, 0]);
    let second_segment = indv.chromosome()[5..].to_vec();

    indv.bound_check(&mut FixedIndex(0)).unwrap();

    assert_eq!(&indv.chromosome()[..5], &[0, 0, 0, 1, 1]);
    assert_eq!(&indv.chromosome()[5..], second_segment.as_slice());
    assert_eq!(indv.solution()[0], indv.decode()[0]);
    assert_eq!(indv.solution()[1], 3.0);
}
