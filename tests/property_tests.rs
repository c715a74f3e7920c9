//! Property-based tests for the hierarchical reader.
//!
//! These check merge and inference guarantees across generated inputs:
//! disjoint keys are order independent, nesting depth follows the key path,
//! and numbers round-trip through inference.

use proptest::prelude::*;
use serde_props::{parse, to_json_string, Number, Value};

fn segment() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,6}"
}

proptest! {
    #[test]
    fn prop_disjoint_keys_are_order_independent(
        keys in prop::collection::btree_set(segment(), 1..12),
        values in prop::collection::vec(any::<i64>(), 12),
    ) {
        let lines: Vec<String> = keys
            .iter()
            .zip(&values)
            .map(|(k, v)| format!("{}={}", k, v))
            .collect();
        let forward = parse(false, lines.join("\n").as_bytes()).unwrap();
        let reversed: Vec<String> = lines.iter().rev().cloned().collect();
        let backward = parse(false, reversed.join("\n").as_bytes()).unwrap();

        prop_assert_eq!(&forward, &backward);
        prop_assert_eq!(forward.len(), keys.len());
    }

    #[test]
    fn prop_nesting_depth_follows_path(path in prop::collection::vec(segment(), 1..8), n in any::<i32>()) {
        let doc = parse(false, format!("{}={}", path.join("."), n).as_bytes()).unwrap();

        let mut current = Value::Object(doc);
        for key in &path {
            current = current.get(key).cloned().expect("segment present");
        }
        prop_assert_eq!(current, Value::Number(Number::from(n)));
    }

    #[test]
    fn prop_raw_mode_is_one_level(path in prop::collection::vec(segment(), 1..8), text in "[a-z0-9]{1,10}") {
        let doc = parse(true, format!("{}={}", path.join("."), text).as_bytes()).unwrap();
        prop_assert_eq!(doc.len(), 1);
        prop_assert_eq!(doc.get(&path[0]), Some(&Value::String(text)));
    }

    #[test]
    fn prop_integers_round_trip_through_json(n in any::<i128>()) {
        let doc = parse(false, format!("n={}", n).as_bytes()).unwrap();
        prop_assert_eq!(to_json_string(&doc).unwrap(), format!("{{\"n\":{}}}", n));
    }

    #[test]
    fn prop_integer_lists(values in prop::collection::vec(any::<i64>(), 2..10)) {
        let text = values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(",");
        let doc = parse(false, format!("list={}", text).as_bytes()).unwrap();
        let expected: Vec<Value> = values.iter().map(|v| Value::from(*v)).collect();
        prop_assert_eq!(doc.get("list"), Some(&Value::Array(expected)));
    }

    #[test]
    fn prop_last_write_wins(a in any::<i64>(), b in any::<i64>()) {
        let doc = parse(false, format!("k.x={}\nk.x={}", a, b).as_bytes()).unwrap();
        prop_assert_eq!(doc.get("k").and_then(|k| k.get("x")), Some(&Value::from(b)));
    }
}
