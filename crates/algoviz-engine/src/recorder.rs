use algoviz_model::{Element, ElementStatus, Step, Trace};

/// Append-only step log shared by all engines.
///
/// Engines mutate their own working copy of the array and call
/// [`record`](TraceRecorder::record) before/after structural changes; the
/// recorder snapshots the array with every element's status *replaced* (not
/// merged) by the caller's per-index predicate and stamps the snapshot with
/// the current cumulative counters. The base array is never mutated here.
#[derive(Debug, Default)]
pub struct TraceRecorder {
    steps: Vec<Step>,
    comparisons: u64,
    swaps: u64,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    pub fn swaps(&self) -> u64 {
        self.swaps
    }

    /// Count one comparison. Counters only ever grow.
    pub fn count_comparison(&mut self) {
        self.comparisons += 1;
    }

    /// Count one swap (or element move, for merge sort's statistic).
    pub fn count_swap(&mut self) {
        self.swaps += 1;
    }

    /// Snapshot `base` with each element's status chosen by `status_of`,
    /// stamped with the current counters, and append it to the trace.
    pub fn record<F>(&mut self, base: &[Element], status_of: F, description: String)
    where
        F: Fn(usize) -> ElementStatus,
    {
        let array = base
            .iter()
            .enumerate()
            .map(|(idx, el)| el.with_status(status_of(idx)))
            .collect();
        self.steps.push(Step {
            array,
            comparisons: self.comparisons,
            swaps: self.swaps,
            description,
        });
    }

    /// Finish the trace as-is (search engines own their terminal steps).
    pub fn finish(self) -> Trace {
        Trace {
            comparisons: self.comparisons,
            swaps: self.swaps,
            steps: self.steps,
        }
    }

    /// Record the final all-sorted snapshot every sort engine ends with,
    /// then finish the trace.
    pub fn finish_sorted(mut self, base: &[Element], description: String) -> Trace {
        self.record(base, |_| ElementStatus::Sorted, description);
        self.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn record_replaces_status_and_keeps_base_untouched() {
        let base = vec![
            Element::new(4, 0).with_status(ElementStatus::Pivot),
            Element::new(2, 1),
        ];
        let mut rec = TraceRecorder::new();
        rec.count_comparison();
        rec.record(
            &base,
            |idx| {
                if idx == 0 {
                    ElementStatus::Comparing
                } else {
                    ElementStatus::Unmarked
                }
            },
            "probe".to_owned(),
        );

        // The stale Pivot status on the base must not leak into the step.
        let trace = rec.finish();
        let step = &trace.steps[0];
        assert_eq!(step.array[0].status, ElementStatus::Comparing);
        assert_eq!(step.array[1].status, ElementStatus::Unmarked);
        assert_eq!(step.comparisons, 1);
        assert_eq!(step.swaps, 0);
        // The caller's array still carries whatever it carried before.
        assert_eq!(base[0].status, ElementStatus::Pivot);
    }

    #[test]
    fn finish_sorted_appends_terminal_step_with_totals() {
        let base = Element::sequence(&[1, 2]);
        let mut rec = TraceRecorder::new();
        rec.count_comparison();
        rec.count_swap();
        let trace = rec.finish_sorted(&base, "done".to_owned());
        assert_eq!(trace.comparisons, 1);
        assert_eq!(trace.swaps, 1);
        let last = trace.last_step().unwrap();
        assert!(last
            .array
            .iter()
            .all(|el| el.status == ElementStatus::Sorted));
        assert_eq!(last.description, "done");
    }
}
