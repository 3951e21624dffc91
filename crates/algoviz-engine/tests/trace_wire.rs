//! Wire-shape tests: the JSON a host (or the remote service) sees for steps
//! and runs. Field names here are the interop contract.

use algoviz_engine::{run, AlgorithmRun};
use algoviz_model::Algorithm;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn step_serializes_with_renderer_flag_names() {
    let run = run(Algorithm::Bubble, &[2, 1], None).unwrap();
    let steps = serde_json::to_value(run.steps()).unwrap();

    assert_eq!(
        steps[0],
        json!({
            "array": [
                {"value": 2, "id": 0, "isComparing": true},
                {"value": 1, "id": 1, "isComparing": true}
            ],
            "comparisons": 1,
            "swaps": 0,
            "description": "Comparing elements at positions 0 and 1"
        })
    );
    assert_eq!(
        steps[1],
        json!({
            "array": [
                {"value": 1, "id": 1, "isSwapping": true},
                {"value": 2, "id": 0, "isSwapping": true}
            ],
            "comparisons": 1,
            "swaps": 1,
            "description": "Swapped elements at positions 0 and 1"
        })
    );
    assert_eq!(
        steps[2],
        json!({
            "array": [
                {"value": 1, "id": 1, "isSorted": true},
                {"value": 2, "id": 0, "isSorted": true}
            ],
            "comparisons": 1,
            "swaps": 1,
            "description": "Sorting completed!"
        })
    );
}

#[test]
fn run_roundtrips_through_json() {
    let original = run(Algorithm::Binary, &[5, 3, 1], Some(3)).unwrap();
    let json = serde_json::to_string(&original).unwrap();
    let decoded: AlgorithmRun = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn complexity_metadata_rides_along() {
    let run = run(Algorithm::Quick, &[3, 1, 2], None).unwrap();
    let value = serde_json::to_value(&run).unwrap();
    assert_eq!(value["algorithm"], json!("quick"));
    assert_eq!(value["complexity"]["time_worst"], json!("O(n²)"));
    assert_eq!(value["complexity"]["stable"], json!(false));
    assert_eq!(value["complexity"]["in_place"], json!(true));
}
