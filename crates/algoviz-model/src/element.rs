use serde::{Deserialize, Serialize};

/// Visual status of one element within a recorded step.
///
/// A step snapshot assigns exactly one status per element; the enum makes
/// combinations like "comparing and swapping at once" unrepresentable. On the
/// wire each variant maps to one of the boolean flags consumed by the
/// renderer (`isComparing`, `isSwapping`, ...).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ElementStatus {
    /// No highlight.
    #[default]
    Unmarked,
    /// Currently being compared.
    Comparing,
    /// Just moved by a swap or shift.
    Swapping,
    /// Pivot element (quick sort) or the live search window (binary search).
    Pivot,
    /// Settled in its final position, or outside the region being merged.
    Sorted,
    /// Matched the search target.
    Found,
}

/// One array element as it appears in a trace.
///
/// `id` is assigned when the input array is constructed and never changes,
/// even as the element's position moves; renderers key transitions on it.
/// Every step's array carries ids that are a permutation of `0..n`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ElementWire", into = "ElementWire")]
pub struct Element {
    pub value: i64,
    pub id: usize,
    pub status: ElementStatus,
}

impl Element {
    /// A fresh element with no highlight.
    pub fn new(value: i64, id: usize) -> Self {
        Self {
            value,
            id,
            status: ElementStatus::Unmarked,
        }
    }

    /// Build the initial working array: ids `0..n`, everything unmarked.
    pub fn sequence(values: &[i64]) -> Vec<Element> {
        values
            .iter()
            .enumerate()
            .map(|(id, &value)| Element::new(value, id))
            .collect()
    }

    /// The same element with a different status (used when snapshotting).
    pub fn with_status(&self, status: ElementStatus) -> Self {
        Self {
            value: self.value,
            id: self.id,
            status,
        }
    }
}

/// Wire layout of [`Element`].
///
/// The renderer and the remote service exchange elements as
/// `{value, id, isComparing?, isSwapping?, isPivot?, isSorted?, isFound?}`
/// with absent flags meaning `false`. Serialization emits at most one flag;
/// deserialization of legacy payloads that set several resolves them with
/// precedence Found > Swapping > Comparing > Pivot > Sorted.
#[derive(Serialize, Deserialize)]
struct ElementWire {
    value: i64,
    id: usize,
    #[serde(rename = "isComparing", default, skip_serializing_if = "is_false")]
    is_comparing: bool,
    #[serde(rename = "isSwapping", default, skip_serializing_if = "is_false")]
    is_swapping: bool,
    #[serde(rename = "isPivot", default, skip_serializing_if = "is_false")]
    is_pivot: bool,
    #[serde(rename = "isSorted", default, skip_serializing_if = "is_false")]
    is_sorted: bool,
    #[serde(rename = "isFound", default, skip_serializing_if = "is_false")]
    is_found: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl From<Element> for ElementWire {
    fn from(el: Element) -> Self {
        ElementWire {
            value: el.value,
            id: el.id,
            is_comparing: el.status == ElementStatus::Comparing,
            is_swapping: el.status == ElementStatus::Swapping,
            is_pivot: el.status == ElementStatus::Pivot,
            is_sorted: el.status == ElementStatus::Sorted,
            is_found: el.status == ElementStatus::Found,
        }
    }
}

impl From<ElementWire> for Element {
    fn from(wire: ElementWire) -> Self {
        let status = if wire.is_found {
            ElementStatus::Found
        } else if wire.is_swapping {
            ElementStatus::Swapping
        } else if wire.is_comparing {
            ElementStatus::Comparing
        } else if wire.is_pivot {
            ElementStatus::Pivot
        } else if wire.is_sorted {
            ElementStatus::Sorted
        } else {
            ElementStatus::Unmarked
        };
        Element {
            value: wire.value,
            id: wire.id,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn sequence_assigns_stable_ids() {
        let elements = Element::sequence(&[5, 3, 1]);
        assert_eq!(
            elements.iter().map(|el| (el.value, el.id)).collect::<Vec<_>>(),
            vec![(5, 0), (3, 1), (1, 2)]
        );
        assert!(elements.iter().all(|el| el.status == ElementStatus::Unmarked));
    }

    #[test]
    fn wire_emits_at_most_one_flag() {
        let el = Element::new(42, 3).with_status(ElementStatus::Comparing);
        assert_eq!(
            serde_json::to_value(&el).unwrap(),
            json!({"value": 42, "id": 3, "isComparing": true})
        );

        let plain = Element::new(7, 0);
        assert_eq!(
            serde_json::to_value(&plain).unwrap(),
            json!({"value": 7, "id": 0})
        );
    }

    #[test]
    fn wire_roundtrips_every_status() {
        for status in [
            ElementStatus::Unmarked,
            ElementStatus::Comparing,
            ElementStatus::Swapping,
            ElementStatus::Pivot,
            ElementStatus::Sorted,
            ElementStatus::Found,
        ] {
            let el = Element::new(9, 1).with_status(status);
            let json = serde_json::to_string(&el).unwrap();
            assert_eq!(serde_json::from_str::<Element>(&json).unwrap(), el);
        }
    }

    #[test]
    fn legacy_multi_flag_payloads_resolve_by_precedence() {
        // The original backend set both isComparing and isPivot on the
        // binary-search probe element.
        let el: Element = serde_json::from_value(json!({
            "value": 11, "id": 4, "isComparing": true, "isPivot": true
        }))
        .unwrap();
        assert_eq!(el.status, ElementStatus::Comparing);

        let el: Element = serde_json::from_value(json!({
            "value": 11, "id": 4, "isSwapping": true, "isSorted": true
        }))
        .unwrap();
        assert_eq!(el.status, ElementStatus::Swapping);
    }
}
