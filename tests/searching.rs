use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use slicekit::prelude::*;

/// Every search that requires sorted input, name attached for messages.
fn sorted_searches() -> Vec<(&'static str, fn(&[i64], &i64) -> Option<usize>)> {
    vec![
        ("binary", binary_search::<i64>),
        ("exponential", exponential_search::<i64>),
        ("interpolation", interpolation_search::<i64>),
        ("jump", jump_search::<i64>),
        ("ternary", ternary_search::<i64>),
        ("linear", linear_search::<i64>),
        ("linear_sentinel", linear_search_sentinel::<i64>),
        ("linear_bidirectional", linear_search_bidirectional::<i64>),
    ]
}

#[test]
fn binary_search_scenario_fixture() {
    let arr = [1, 3, 5, 7, 9];
    assert_eq!(binary_search(&arr, &7), Some(3));
    assert_eq!(binary_search(&arr, &4), None);
}

#[test]
fn every_search_finds_every_present_element() {
    let arr: Vec<i64> = vec![2, 3, 4, 10, 40, 50, 70, 100, 120];
    for (name, search) in sorted_searches() {
        for (i, target) in arr.iter().enumerate() {
            let got = search(&arr, target);
            assert_eq!(
                got,
                Some(i),
                "{} search missed element {} (all distinct, so the index is forced)",
                name,
                target
            );
        }
    }
}

#[test]
fn every_search_rejects_absent_targets() {
    let arr: Vec<i64> = vec![2, 3, 4, 10, 40, 50, 70, 100, 120];
    for (name, search) in sorted_searches() {
        for target in [-5i64, 0, 5, 41, 119, 121, 1000] {
            assert_eq!(
                search(&arr, &target),
                None,
                "{} search hallucinated target {}",
                name,
                target
            );
        }
    }
}

#[test]
fn empty_slices_return_none_everywhere() {
    let empty: Vec<i64> = vec![];
    for (name, search) in sorted_searches() {
        assert_eq!(search(&empty, &1), None, "{} search broke on empty input", name);
    }
}

#[test]
fn single_element_slices() {
    let one = [7i64];
    for (name, search) in sorted_searches() {
        assert_eq!(search(&one, &7), Some(0), "{} search broke on [7]", name);
        assert_eq!(search(&one, &3), None, "{} search broke on [7] miss", name);
    }
}

#[test]
fn duplicates_return_some_matching_index() {
    // Which occurrence is implementation-defined; only membership is pinned.
    let arr: Vec<i64> = vec![1, 3, 3, 3, 5, 5, 9];
    for (name, search) in sorted_searches() {
        for target in [1i64, 3, 5, 9] {
            let idx = search(&arr, &target)
                .unwrap_or_else(|| panic!("{} search missed {} among duplicates", name, target));
            assert_eq!(arr[idx], target, "{} search returned a non-matching index", name);
        }
    }
}

#[test]
fn interpolation_search_survives_a_flat_slice() {
    // arr[hi] == arr[lo]: the proportional probe would divide by zero.
    let flat = [6i64; 10];
    assert_eq!(interpolation_search(&flat, &6).map(|i| flat[i]), Some(6));
    assert_eq!(interpolation_search(&flat, &5), None);
    assert_eq!(interpolation_search(&flat, &7), None);
}

#[test]
fn randomized_searches_agree_with_membership() {
    let mut rng = StdRng::seed_from_u64(0xBEEF);

    for _ in 0..30 {
        let len = rng.gen_range(1..120);
        let mut arr: Vec<i64> = (0..len).map(|_| rng.gen_range(-40..40)).collect();
        arr.sort_unstable();

        for _ in 0..20 {
            let target = rng.gen_range(-45..45);
            let present = arr.contains(&target);
            for (name, search) in sorted_searches() {
                match search(&arr, &target) {
                    Some(i) => {
                        assert!(present, "{} search found an absent value", name);
                        assert_eq!(arr[i], target, "{} search index mismatch", name);
                    }
                    None => assert!(!present, "{} search missed a present value", name),
                }
            }
        }
    }
}

// ============================================================================
// Linear Variants On Unsorted Input
// ============================================================================

#[test]
fn linear_variants_do_not_require_sorted_input() {
    let arr: Vec<i64> = vec![9, 2, 7, 2, 5];
    assert_eq!(linear_search(&arr, &7), Some(2));
    assert_eq!(linear_search_sentinel(&arr, &7), Some(2));
    assert_eq!(linear_search_bidirectional(&arr, &5), Some(4));
    assert_eq!(linear_search_bidirectional(&arr, &9), Some(0));
    assert_eq!(linear_search(&arr, &1), None);
    assert_eq!(linear_search_sentinel(&arr, &1), None);
    assert_eq!(linear_search_bidirectional(&arr, &1), None);
}

#[test]
fn sentinel_search_reports_the_first_occurrence() {
    let arr: Vec<i64> = vec![4, 8, 4, 8];
    assert_eq!(linear_search_sentinel(&arr, &8), Some(1));
}

// ============================================================================
// Sorted Vector Maintenance
// ============================================================================

#[test]
fn insert_sorted_keeps_the_vector_sorted() {
    let mut v: Vec<i64> = vec![10, 20, 30, 40];
    assert_eq!(insert_sorted(&mut v, 25), 2);
    assert_eq!(v, vec![10, 20, 25, 30, 40]);

    assert_eq!(insert_sorted(&mut v, 5), 0);
    assert_eq!(insert_sorted(&mut v, 99), 6);
    assert_eq!(v, vec![5, 10, 20, 25, 30, 40, 99]);
    assert!(is_sorted(&v));
}

#[test]
fn insert_sorted_places_duplicates_after_existing_equals() {
    let mut v: Vec<i64> = vec![1, 3, 3, 5];
    assert_eq!(insert_sorted(&mut v, 3), 3);
    assert_eq!(v, vec![1, 3, 3, 3, 5]);
}

#[test]
fn remove_sorted_deletes_one_occurrence_or_none() {
    let mut v: Vec<i64> = vec![1, 3, 3, 5];
    assert_eq!(remove_sorted(&mut v, &3), Some(3));
    assert_eq!(v, vec![1, 3, 5]);
    assert_eq!(remove_sorted(&mut v, &4), None);
    assert_eq!(v, vec![1, 3, 5]);

    let mut empty: Vec<i64> = vec![];
    assert_eq!(remove_sorted(&mut empty, &1), None);
}
