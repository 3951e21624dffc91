use algoviz_model::{Element, ElementStatus, Trace};

use crate::TraceRecorder;

/// Insertion sort: grow a sorted prefix by inserting each key into place.
///
/// Per key: a pick step, then for every displaced element a comparison step
/// followed by a shift step, and finally an insert step. Only comparisons
/// that displace an element are counted (the failed loop guard is not); both
/// shifts and the final placement count toward `swaps`.
pub fn insertion_sort(elements: &[Element]) -> Trace {
    let mut rec = TraceRecorder::new();
    let mut working = elements.to_vec();
    let n = working.len();

    for i in 1..n {
        let key = working[i].clone();
        rec.record(
            &working,
            |idx| {
                if idx == i {
                    ElementStatus::Comparing
                } else if idx < i {
                    ElementStatus::Sorted
                } else {
                    ElementStatus::Unmarked
                }
            },
            format!("Picking key element {} at position {i}", key.value),
        );

        let mut j = i as isize - 1;
        while j >= 0 && working[j as usize].value > key.value {
            let ju = j as usize;
            rec.count_comparison();
            rec.record(
                &working,
                |idx| {
                    if idx == ju || idx == i {
                        ElementStatus::Comparing
                    } else if idx >= i {
                        ElementStatus::Sorted
                    } else {
                        ElementStatus::Unmarked
                    }
                },
                format!("Comparing key {} with {}", key.value, working[ju].value),
            );

            working[ju + 1] = working[ju].clone();
            rec.count_swap();
            j -= 1;

            rec.record(
                &working,
                |idx| {
                    if idx == ju || idx == ju + 1 {
                        ElementStatus::Swapping
                    } else if idx >= i {
                        ElementStatus::Sorted
                    } else {
                        ElementStatus::Unmarked
                    }
                },
                format!("Shifted {} right to make space", working[ju].value),
            );
        }

        let dest = (j + 1) as usize;
        working[dest] = key.clone();
        rec.count_swap();
        rec.record(
            &working,
            |idx| {
                if idx == dest {
                    ElementStatus::Swapping
                } else if idx <= i {
                    ElementStatus::Sorted
                } else {
                    ElementStatus::Unmarked
                }
            },
            format!("Inserted key {} at position {dest}", key.value),
        );
    }

    rec.finish_sorted(&working, "Insertion sort completed!".to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sorts_a_reverse_run() {
        let trace = insertion_sort(&Element::sequence(&[3, 2, 1]));
        let last = trace.last_step().unwrap();
        assert_eq!(
            last.array.iter().map(|el| el.value).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        // Every key displaces everything before it: 1 + 2 comparisons.
        assert_eq!(trace.comparisons, 3);
        // Three shifts plus two placements.
        assert_eq!(trace.swaps, 5);
        assert_eq!(last.description, "Insertion sort completed!");
    }

    #[test]
    fn step_sequence_for_a_single_displacement() {
        let trace = insertion_sort(&Element::sequence(&[2, 1]));
        let descriptions: Vec<&str> = trace
            .steps
            .iter()
            .map(|s| s.description.as_str())
            .collect();
        assert_eq!(
            descriptions,
            vec![
                "Picking key element 1 at position 1",
                "Comparing key 1 with 2",
                "Shifted 2 right to make space",
                "Inserted key 1 at position 0",
                "Insertion sort completed!",
            ]
        );

        let shift = &trace.steps[2];
        assert_eq!(shift.array[0].status, ElementStatus::Swapping);
        assert_eq!(shift.array[1].status, ElementStatus::Swapping);
        assert_eq!(shift.swaps, 1);

        let insert = &trace.steps[3];
        assert_eq!(insert.array[0].status, ElementStatus::Swapping);
        assert_eq!(insert.swaps, 2);
    }

    #[test]
    fn already_sorted_input_only_places_keys() {
        let trace = insertion_sort(&Element::sequence(&[1, 2, 3]));
        assert_eq!(trace.comparisons, 0);
        // One placement per key after the first.
        assert_eq!(trace.swaps, 2);
    }
}
