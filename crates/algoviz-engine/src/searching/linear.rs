use algoviz_model::{Element, ElementStatus, Trace};

use crate::TraceRecorder;

/// Linear search: scan left to right, stop at the first match.
///
/// One step per visited index; on duplicates the first occurrence wins. When
/// the target is absent the trace simply ends after the last comparison step,
/// whose description already reads as the miss.
pub fn linear_search(elements: &[Element], target: i64) -> Trace {
    let mut rec = TraceRecorder::new();
    let working = elements.to_vec();

    for i in 0..working.len() {
        rec.count_comparison();
        let hit = working[i].value == target;
        let description = if hit {
            format!("Found target {target} at position {i}!")
        } else {
            format!("Checking position {i}: {} ≠ {target}", working[i].value)
        };
        rec.record(
            &working,
            |idx| {
                if idx == i && hit {
                    ElementStatus::Found
                } else if idx == i {
                    ElementStatus::Comparing
                } else {
                    ElementStatus::Unmarked
                }
            },
            description,
        );

        if hit {
            break;
        }
    }

    rec.finish()
}
