use algoviz_model::{Element, ElementStatus, Trace};

use crate::TraceRecorder;

/// Selection sort: repeatedly select the minimum of the unsorted tail.
///
/// Each boundary `i` opens with a scan step, then one comparison step per
/// candidate (the running minimum highlighted as pivot). A swap step is only
/// emitted when the minimum actually moves.
pub fn selection_sort(elements: &[Element]) -> Trace {
    let mut rec = TraceRecorder::new();
    let mut working = elements.to_vec();
    let n = working.len();

    for i in 0..n.saturating_sub(1) {
        let mut min_index = i;

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
            format!("Finding minimum element from position {i} onwards"),
        );

        for j in i + 1..n {
            rec.count_comparison();
            let min = min_index;
            rec.record(
                &working,
                |idx| {
                    if idx == j {
                        ElementStatus::Comparing
                    } else if idx == min {
                        ElementStatus::Pivot
                    } else if idx < i {
                        ElementStatus::Sorted
                    } else {
                        ElementStatus::Unmarked
                    }
                },
                format!(
                    "Comparing {} with current minimum {}",
                    working[j].value, working[min].value
                ),
            );

            if working[j].value < working[min_index].value {
                min_index = j;
            }
        }

        if min_index != i {
            working.swap(i, min_index);
            rec.count_swap();
            rec.record(
                &working,
                |idx| {
                    if idx == i || idx == min_index {
                        ElementStatus::Swapping
                    } else if idx <= i {
                        ElementStatus::Sorted
                    } else {
                        ElementStatus::Unmarked
                    }
                },
                // Post-swap values: the minimum now sits at i.
                format!(
                    "Swapped {} and {}",
                    working[min_index].value, working[i].value
                ),
            );
        }
    }

    rec.finish_sorted(&working, "Selection sort completed!".to_owned())
}
