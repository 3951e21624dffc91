use algoviz_model::{Element, ElementStatus, Trace};

use crate::TraceRecorder;

/// Merge sort: recursive halving, then stable merges.
///
/// During a merge the whole `[left, right]` window is highlighted as
/// comparing and everything outside it as settled. Ties take the left run
/// first (`<=`), which is what makes the sort stable. Every element
/// placement — the drain loops included — counts toward `swaps`; the
/// statistic deliberately reads as "element moves" for this algorithm.
pub fn merge_sort(elements: &[Element]) -> Trace {
    let mut rec = TraceRecorder::new();
    let mut working = elements.to_vec();
    let n = working.len();

    if n > 0 {
        sort_range(&mut working, 0, n - 1, &mut rec);
    }

    rec.finish_sorted(&working, "Merge sort completed!".to_owned())
}

fn sort_range(working: &mut [Element], left: usize, right: usize, rec: &mut TraceRecorder) {
    if left < right {
        let mid = (left + right) / 2;
        sort_range(working, left, mid, rec);
        sort_range(working, mid + 1, right, rec);
        merge(working, left, mid, right, rec);
    }
}

fn merge(working: &mut [Element], left: usize, mid: usize, right: usize, rec: &mut TraceRecorder) {
    let left_run: Vec<Element> = working[left..=mid].to_vec();
    let right_run: Vec<Element> = working[mid + 1..=right].to_vec();
    let mut i = 0;
    let mut j = 0;
    let mut k = left;

    while i < left_run.len() && j < right_run.len() {
        rec.count_comparison();
        rec.record(
            working,
            |idx| {
                if idx >= left && idx <= right {
                    ElementStatus::Comparing
                } else {
                    ElementStatus::Sorted
                }
            },
            format!(
                "Merging: comparing {} and {}",
                left_run[i].value, right_run[j].value
            ),
        );

        if left_run[i].value <= right_run[j].value {
            working[k] = left_run[i].clone();
            i += 1;
        } else {
            working[k] = right_run[j].clone();
            j += 1;
        }
        rec.count_swap();
        k += 1;
    }

    while i < left_run.len() {
        working[k] = left_run[i].clone();
        i += 1;
        k += 1;
        rec.count_swap();
    }
    while j < right_run.len() {
        working[k] = right_run[j].clone();
        j += 1;
        k += 1;
        rec.count_swap();
    }
}
