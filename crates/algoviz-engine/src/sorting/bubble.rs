use algoviz_model::{Element, ElementStatus, Trace};

use crate::TraceRecorder;

/// Bubble sort: adjacent comparisons, larger values sink to the end.
///
/// Emits one step per comparison (the pair highlighted, the settled suffix
/// `idx >= n - i` marked sorted) and, when the pair is out of order, a second
/// step after the swap.
pub fn bubble_sort(elements: &[Element]) -> Trace {
    let mut rec = TraceRecorder::new();
    let mut working = elements.to_vec();
    let n = working.len();

    for i in 0..n.saturating_sub(1) {
        for j in 0..n - 1 - i {
            rec.count_comparison();
            rec.record(
                &working,
                |idx| {
                    if idx == j || idx == j + 1 {
                        ElementStatus::Comparing
                    } else if idx >= n - i {
                        ElementStatus::Sorted
                    } else {
                        ElementStatus::Unmarked
                    }
                },
                format!("Comparing elements at positions {j} and {}", j + 1),
            );

            if working[j].value > working[j + 1].value {
                working.swap(j, j + 1);
                rec.count_swap();
                rec.record(
                    &working,
                    |idx| {
                        if idx == j || idx == j + 1 {
                            ElementStatus::Swapping
                        } else if idx >= n - i {
                            ElementStatus::Sorted
                        } else {
                            ElementStatus::Unmarked
                        }
                    },
                    format!("Swapped elements at positions {j} and {}", j + 1),
                );
            }
        }
    }

    rec.finish_sorted(&working, "Sorting completed!".to_owned())
}
