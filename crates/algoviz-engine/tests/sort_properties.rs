//! Trace-level properties every sort engine must uphold, checked over
//! arbitrary small arrays (steps are full snapshots, so sizes stay modest to
//! keep trace volume reasonable).

use algoviz_engine::sorting::{
    bubble_sort, insertion_sort, merge_sort, quick_sort, selection_sort,
};
use algoviz_model::{Element, ElementStatus, Trace};
use proptest::prelude::*;

type SortEngine = fn(&[Element]) -> Trace;

const ENGINES: [(&str, SortEngine); 5] = [
    ("bubble", bubble_sort),
    ("selection", selection_sort),
    ("insertion", insertion_sort),
    ("merge", merge_sort),
    ("quick", quick_sort),
];

fn arb_values() -> impl Strategy<Value = Vec<i64>> {
    // A narrow value range keeps duplicates common.
    proptest::collection::vec(-20i64..20, 0..12)
}

fn sorted_multiset(values: &[i64]) -> Vec<i64> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    sorted
}

proptest! {
    #[test]
    fn final_step_is_sorted_and_fully_flagged(values in arb_values()) {
        for (name, engine) in ENGINES {
            let trace = engine(&Element::sequence(&values));
            let last = trace.last_step().unwrap();
            let final_values: Vec<i64> = last.array.iter().map(|el| el.value).collect();
            prop_assert!(
                final_values.windows(2).all(|w| w[0] <= w[1]),
                "{name}: final array {final_values:?} not sorted"
            );
            prop_assert!(
                last.array.iter().all(|el| el.status == ElementStatus::Sorted),
                "{name}: final step not fully marked sorted"
            );
        }
    }

    #[test]
    fn every_step_is_a_permutation_of_the_input(values in arb_values()) {
        let expected = sorted_multiset(&values);
        for (name, engine) in ENGINES {
            let trace = engine(&Element::sequence(&values));
            for (step_idx, step) in trace.steps.iter().enumerate() {
                let step_values: Vec<i64> = step.array.iter().map(|el| el.value).collect();
                prop_assert_eq!(
                    sorted_multiset(&step_values),
                    expected.clone(),
                    "{} step {}: values are not a permutation of the input",
                    name,
                    step_idx
                );

                let mut ids: Vec<usize> = step.array.iter().map(|el| el.id).collect();
                ids.sort_unstable();
                prop_assert_eq!(
                    ids,
                    (0..values.len()).collect::<Vec<_>>(),
                    "{} step {}: ids are not exactly 0..n",
                    name,
                    step_idx
                );
            }
        }
    }

    #[test]
    fn counters_are_monotonic_and_match_totals(values in arb_values()) {
        for (name, engine) in ENGINES {
            let trace = engine(&Element::sequence(&values));
            let mut prev = (0u64, 0u64);
            for step in &trace.steps {
                prop_assert!(
                    step.comparisons >= prev.0 && step.swaps >= prev.1,
                    "{name}: counters went backwards"
                );
                prev = (step.comparisons, step.swaps);
            }
            let last = trace.last_step().unwrap();
            prop_assert_eq!(last.comparisons, trace.comparisons);
            prop_assert_eq!(last.swaps, trace.swaps);
        }
    }

    #[test]
    fn merge_sort_is_stable(values in arb_values()) {
        let trace = merge_sort(&Element::sequence(&values));
        let last = trace.last_step().unwrap();
        // Among equal values, ids must appear in their original (insertion)
        // order.
        for pair in last.array.windows(2) {
            if pair[0].value == pair[1].value {
                prop_assert!(
                    pair[0].id < pair[1].id,
                    "equal values {} reordered: id {} before id {}",
                    pair[0].value,
                    pair[0].id,
                    pair[1].id
                );
            }
        }
    }

    #[test]
    fn traces_are_deterministic(values in arb_values()) {
        for (name, engine) in ENGINES {
            let elements = Element::sequence(&values);
            let first = engine(&elements);
            let second = engine(&elements);
            prop_assert_eq!(first, second, "{} produced two different traces", name);
        }
    }
}
