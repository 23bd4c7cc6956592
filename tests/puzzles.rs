use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use slicekit::prelude::*;

// ============================================================================
// Repeating / Missing
// ============================================================================

#[test]
fn repeating_and_missing_classic_fixtures() {
    assert_eq!(repeating_and_missing(&[4, 3, 6, 2, 1, 1]), Some((1, 5)));
    assert_eq!(repeating_and_missing(&[3, 1, 3]), Some((3, 2)));
    assert_eq!(repeating_and_missing(&[1, 1]), Some((1, 2)));
}

#[test]
fn repeating_and_missing_rejects_malformed_input() {
    // Value outside 1..=n.
    assert_eq!(repeating_and_missing(&[4, 3, 9, 2, 1, 1]), None);
    assert_eq!(repeating_and_missing(&[0, 1, 1]), None);
    // A clean permutation has no repeat to report.
    assert_eq!(repeating_and_missing(&[2, 3, 1]), None);
    // Triple occurrence cannot come from a single swap.
    assert_eq!(repeating_and_missing(&[2, 2, 2]), None);
    assert_eq!(repeating_and_missing(&[]), None);
}

#[test]
fn repeating_and_missing_randomized_swaps() {
    let mut rng = StdRng::seed_from_u64(0xD1CE);
    for _ in 0..30 {
        let n = rng.gen_range(2..60u32);
        let mut arr: Vec<u32> = (1..=n).collect();

        // Overwrite the value at one slot with another value: that other
        // value now repeats and the overwritten one goes missing.
        let victim = rng.gen_range(0..n) as usize;
        let mut donor = rng.gen_range(0..n) as usize;
        while donor == victim {
            donor = rng.gen_range(0..n) as usize;
        }
        let missing = arr[victim];
        let repeating = arr[donor];
        arr[victim] = repeating;

        assert_eq!(
            repeating_and_missing(&arr),
            Some((repeating, missing)),
            "failed on n = {}",
            n
        );
    }
}

#[test]
fn missing_number_fixtures() {
    assert_eq!(missing_number(&[1, 3, 7, 5, 6, 2]), 4);
    assert_eq!(missing_number(&[2]), 1);
    assert_eq!(missing_number(&[1]), 2);
    assert_eq!(missing_number(&[]), 1);
}

// ============================================================================
// First Repeating
// ============================================================================

#[test]
fn first_repeating_reports_the_earliest_recurring_index() {
    // The 5 at index 1 recurs, and beats the 3 at index 2.
    assert_eq!(first_repeating(&[10, 5, 3, 4, 3, 5, 6]), Some(1));
    assert_eq!(first_repeating(&[6, 10, 5, 4, 9, 120]), None);
    assert_eq!(first_repeating(&[7, 7]), Some(0));
    assert_eq!(first_repeating::<i64>(&[]), None);
    assert_eq!(first_repeating(&[1]), None);
}

#[test]
fn first_repeating_works_on_string_slices() {
    assert_eq!(first_repeating(&["b", "a", "c", "a", "b"]), Some(0));
}

// ============================================================================
// Zero-Sum / Difference Pairs And Triplets
// ============================================================================

#[test]
fn zero_sum_triplets_counts_distinct_value_triplets() {
    // {-1, 0, 1} and {-1, -1, 2}.
    assert_eq!(zero_sum_triplets(&[-1, 0, 1, 2, -1, -4]), 2);
    assert_eq!(zero_sum_triplets(&[0, 0, 0]), 1);
    assert_eq!(zero_sum_triplets(&[0, 0, 0, 0]), 1, "duplicates collapse by value");
    assert_eq!(zero_sum_triplets(&[1, 2, 3]), 0);
    assert_eq!(zero_sum_triplets(&[1, -1]), 0, "fewer than three elements");
    assert_eq!(zero_sum_triplets(&[]), 0);
}

#[test]
fn zero_sum_triplets_cross_checks_against_brute_force() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    for _ in 0..20 {
        let len = rng.gen_range(0..25);
        let data: Vec<i64> = (0..len).map(|_| rng.gen_range(-6..6)).collect();

        // Brute-force oracle over distinct sorted value triplets.
        let mut values = data.clone();
        values.sort_unstable();
        values.dedup();
        let mut counts = std::collections::BTreeMap::new();
        for &v in &data {
            *counts.entry(v).or_insert(0usize) += 1;
        }
        let mut expected = 0;
        for (ai, &a) in values.iter().enumerate() {
            for (bi, &b) in values.iter().enumerate().skip(ai) {
                for &c in values.iter().skip(bi) {
                    if a + b + c != 0 {
                        continue;
                    }
                    // Enough copies must exist to actually form the triplet.
                    let mut need = std::collections::BTreeMap::new();
                    for v in [a, b, c] {
                        *need.entry(v).or_insert(0usize) += 1;
                    }
                    if need.iter().all(|(v, n)| counts.get(v).copied().unwrap_or(0) >= *n) {
                        expected += 1;
                    }
                }
            }
        }

        assert_eq!(
            zero_sum_triplets(&data),
            expected,
            "disagreed with brute force on {:?}",
            data
        );
    }
}

#[test]
fn pair_with_difference_fixture() {
    // Classic fixture {5, 20, 3, 2, 50, 80}, diff 78, sorted first.
    let sorted = [2, 3, 5, 20, 50, 80];
    let (i, j) = pair_with_difference(&sorted, 78).unwrap();
    assert_eq!((sorted[i], sorted[j]), (2, 80));

    assert_eq!(pair_with_difference(&sorted, 45), Some((2, 4)), "50 - 5 = 45");
    assert_eq!(pair_with_difference(&sorted, 1), Some((0, 1)));
    assert_eq!(pair_with_difference(&sorted, 100), None);
}

#[test]
fn pair_with_difference_edge_cases() {
    // Negative differences are taken by magnitude.
    let sorted = [2, 3, 5];
    assert_eq!(pair_with_difference(&sorted, -2), Some((1, 2)));

    // diff == 0 needs a duplicate, never the same index twice.
    assert_eq!(pair_with_difference(&[1, 2, 3], 0), None);
    let (i, j) = pair_with_difference(&[1, 2, 2, 3], 0).unwrap();
    assert_ne!(i, j);
    assert_eq!((i, j), (1, 2));

    assert_eq!(pair_with_difference(&[], 5), None);
    assert_eq!(pair_with_difference(&[7], 5), None);
}

#[test]
fn pair_with_difference_extreme_magnitudes() {
    // |i64::MIN| has no i64 representation; the magnitude must survive
    // normalization instead of wrapping negative.
    let sorted = [-(1i64 << 62), 1i64 << 62];
    assert_eq!(pair_with_difference(&sorted, i64::MIN), Some((0, 1)));
    assert_eq!(pair_with_difference(&[0, 1], i64::MIN), None);

    // Element span wider than i64 between the probed pair.
    assert_eq!(pair_with_difference(&[i64::MIN, i64::MAX], 1), None);
}

#[test]
fn zero_sum_triplets_extreme_magnitudes() {
    // i64::MIN + i64::MAX == -1, so the 1 completes the only triplet.
    assert_eq!(zero_sum_triplets(&[i64::MIN, i64::MAX, 1]), 1);
    assert_eq!(zero_sum_triplets(&[i64::MIN, i64::MAX, 2]), 0);
}

#[test]
fn closest_pair_to_zero_fixture() {
    assert_eq!(closest_pair_to_zero(&[1, 60, -10, 70, -80, 85]), Some((-80, 85)));
    assert_eq!(closest_pair_to_zero(&[5, -5, 3]), Some((-5, 5)));
    assert_eq!(closest_pair_to_zero(&[4]), None);
    assert_eq!(closest_pair_to_zero(&[]), None);
}

#[test]
fn closest_pair_to_zero_extreme_magnitudes() {
    assert_eq!(
        closest_pair_to_zero(&[i64::MIN, i64::MAX]),
        Some((i64::MIN, i64::MAX))
    );
    assert_eq!(
        closest_pair_to_zero(&[i64::MAX, 3, i64::MIN]),
        Some((i64::MIN, i64::MAX))
    );
}

#[test]
fn closest_pair_to_zero_is_minimal_randomized() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..30 {
        let len = rng.gen_range(2..40);
        let data: Vec<i64> = (0..len).map(|_| rng.gen_range(-100..100)).collect();

        let (a, b) = closest_pair_to_zero(&data).unwrap();
        assert!(a <= b, "pair must come back in ascending order");

        let best = (a + b).unsigned_abs();
        for i in 0..data.len() {
            for j in i + 1..data.len() {
                assert!(
                    (data[i] + data[j]).unsigned_abs() >= best,
                    "pair ({}, {}) beats the reported ({}, {})",
                    data[i],
                    data[j],
                    a,
                    b
                );
            }
        }
    }
}

// ============================================================================
// Monotone Binary Count
// ============================================================================

#[test]
fn count_ones_classic_fixtures() {
    assert_eq!(count_ones(&[true, true, true, true, false, false, false]), 4);
    assert_eq!(count_ones(&[true, false, false, false, false, false, false]), 1);
    assert_eq!(count_ones(&[true; 7]), 7);
    assert_eq!(count_ones(&[true, true, false, false, false, false, false]), 2);
    assert_eq!(count_ones(&[true, true]), 2);
    assert_eq!(count_ones(&[true, false]), 1);
}

#[test]
fn count_ones_degenerate_inputs() {
    assert_eq!(count_ones(&[]), 0);
    assert_eq!(count_ones(&[false; 5]), 0);
    assert_eq!(count_ones(&[true]), 1);
}

#[test]
fn count_ones_agrees_with_a_linear_tally() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let len = rng.gen_range(0..200);
        let ones = rng.gen_range(0..=len);
        let arr: Vec<bool> = (0..len).map(|i| i < ones).collect();
        assert_eq!(count_ones(&arr), ones);
    }
}

// ============================================================================
// Common Elements
// ============================================================================

#[test]
fn common_elements_classic_fixture() {
    let a = [1, 5, 10, 20, 40, 80];
    let b = [6, 7, 20, 80, 100];
    let c = [3, 4, 15, 20, 30, 70, 80, 120];
    assert_eq!(common_elements(&a, &b, &c), vec![20, 80]);
}

#[test]
fn common_elements_reports_each_shared_value_once() {
    let a = [1, 2, 2, 3];
    let b = [2, 2, 2, 3];
    let c = [2, 2, 3, 4];
    assert_eq!(common_elements(&a, &b, &c), vec![2, 3]);
}

#[test]
fn common_elements_empty_when_any_slice_is_empty_or_disjoint() {
    let empty: [i64; 0] = [];
    assert!(common_elements(&[1, 2], &[1, 2], &empty).is_empty());
    assert!(common_elements(&[1, 3], &[2, 4], &[5, 6]).is_empty());
}

#[test]
fn common_elements_works_on_string_slices() {
    let a = ["apple", "fig", "pear"];
    let b = ["cherry", "fig", "pear"];
    let c = ["fig", "kiwi", "pear"];
    assert_eq!(common_elements(&a, &b, &c), vec!["fig", "pear"]);
}
