use algoviz_model::{Element, ElementStatus, Trace};

use crate::TraceRecorder;

/// Quick sort with Lomuto partitioning, pivot = last element of the range.
///
/// Each partition opens with a pivot-selection step, emits one comparison
/// step per scanned element (pivot stays highlighted), a swap step whenever a
/// smaller element actually moves, and closes by placing the pivot at its
/// final position. The terminal step clears the pivot highlight and marks
/// everything sorted.
pub fn quick_sort(elements: &[Element]) -> Trace {
    let mut rec = TraceRecorder::new();
    let mut working = elements.to_vec();
    let n = working.len();

    if n > 0 {
        sort_range(&mut working, 0, n as isize - 1, &mut rec);
    }

    rec.finish_sorted(&working, "Quick sort completed!".to_owned())
}

fn sort_range(working: &mut [Element], low: isize, high: isize, rec: &mut TraceRecorder) {
    if low < high {
        let pi = partition(working, low as usize, high as usize, rec) as isize;
        sort_range(working, low, pi - 1, rec);
        sort_range(working, pi + 1, high, rec);
    }
}

fn partition(working: &mut [Element], low: usize, high: usize, rec: &mut TraceRecorder) -> usize {
    let pivot_value = working[high].value;
    let mut i = low as isize - 1;

    rec.record(
        working,
        |idx| {
            if idx == high {
                ElementStatus::Pivot
            } else {
                ElementStatus::Unmarked
            }
        },
        format!("Selected pivot: {pivot_value} at position {high}"),
    );

    for j in low..high {
        rec.count_comparison();
        rec.record(
            working,
            |idx| {
                if idx == high {
                    ElementStatus::Pivot
                } else if idx == j {
                    ElementStatus::Comparing
                } else {
                    ElementStatus::Unmarked
                }
            },
            format!("Comparing {} with pivot {pivot_value}", working[j].value),
        );

        if working[j].value < pivot_value {
            i += 1;
            let iu = i as usize;
            if iu != j {
                working.swap(iu, j);
                rec.count_swap();
                rec.record(
                    working,
                    |idx| {
                        if idx == high {
                            ElementStatus::Pivot
                        } else if idx == iu || idx == j {
                            ElementStatus::Swapping
                        } else {
                            ElementStatus::Unmarked
                        }
                    },
                    // Post-swap values, matching the on-screen narration.
                    format!("Swapped {} and {}", working[j].value, working[iu].value),
                );
            }
        }
    }

    let dest = (i + 1) as usize;
    working.swap(dest, high);
    rec.count_swap();
    rec.record(
        working,
        |idx| {
            if idx == dest || idx == high {
                ElementStatus::Swapping
            } else {
                ElementStatus::Unmarked
            }
        },
        format!("Placed pivot in correct position: {dest}"),
    );

    dest
}
