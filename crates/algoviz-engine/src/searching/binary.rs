use algoviz_model::{Element, ElementStatus, Trace};

use crate::TraceRecorder;

/// Binary search over a sorted copy of the input.
///
/// The engine first sorts a copy ascending by value (stably, so duplicate
/// values keep their id order) and records that as the opening step. Each
/// probe highlights the middle element with the live `[left, right]` window
/// shown as pivot; halving the window records a second step with the same
/// highlights. A miss ends with an explicit "not found" step.
pub fn binary_search(elements: &[Element], target: i64) -> Trace {
    let mut rec = TraceRecorder::new();
    let mut working = elements.to_vec();
    working.sort_by_key(|el| el.value);

    rec.record(
        &working,
        |_| ElementStatus::Sorted,
        "Array sorted for binary search".to_owned(),
    );

    let mut left: isize = 0;
    let mut right: isize = working.len() as isize - 1;

    while left <= right {
        let mid = ((left + right) / 2) as usize;
        let lo = left as usize;
        let hi = right as usize;
        let probe = move |idx: usize| {
            if idx == mid {
                ElementStatus::Comparing
            } else if idx >= lo && idx <= hi {
                ElementStatus::Pivot
            } else {
                ElementStatus::Unmarked
            }
        };

        rec.count_comparison();
        rec.record(
            &working,
            probe,
            format!(
                "Checking middle element at position {mid}: {}",
                working[mid].value
            ),
        );

        if working[mid].value == target {
            rec.record(
                &working,
                |idx| {
                    if idx == mid {
                        ElementStatus::Found
                    } else {
                        ElementStatus::Unmarked
                    }
                },
                format!("Found target {target} at position {mid}!"),
            );
            break;
        } else if working[mid].value < target {
            left = mid as isize + 1;
            rec.record(
                &working,
                probe,
                format!("{} < {target}, searching right half", working[mid].value),
            );
        } else {
            right = mid as isize - 1;
            rec.record(
                &working,
                probe,
                format!("{} > {target}, searching left half", working[mid].value),
            );
        }
    }

    if left > right {
        rec.record(
            &working,
            |_| ElementStatus::Unmarked,
            format!("Target {target} not found in array"),
        );
    }

    rec.finish()
}
