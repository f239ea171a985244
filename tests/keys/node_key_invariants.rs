//! NodeKey Invariant Tests
//!
//! A dataset indexes node properties by NodeKey, so lookups depend on:
//! - equality being exactly field equality
//! - equal keys hashing identically
//! - keys never changing after insertion

use crate::common::*;
use proptest::prelude::*;
use rustc_hash::FxHashMap;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::Arc;
use std::thread;

// ============================================================================
// Equality
// ============================================================================

#[test]
fn equal_when_stage_and_node_match() {
    assert_eq!(NodeKey::new(0, "A"), NodeKey::new(0, "A"));
}

#[test]
fn unequal_when_stage_differs() {
    assert_ne!(NodeKey::new(0, "A"), NodeKey::new(1, "A"));
}

#[test]
fn unequal_when_node_differs() {
    assert_ne!(NodeKey::new(0, "A"), NodeKey::new(0, "B"));
}

#[test]
fn equality_is_transitive() {
    let a = NodeKey::new(2, String::from("X"));
    let b = a.clone();
    let c = NodeKey::new(2, String::from("X"));
    assert_eq!(a, b);
    assert_eq!(b, c);
    assert_eq!(a, c);
}

#[test]
fn same_identifier_in_every_stage_is_distinct() {
    let keys: HashSet<_> = (0..10).map(|stage| NodeKey::new(stage, "A")).collect();
    assert_eq!(keys.len(), 10);
}

// ============================================================================
// Hashing and lookup
// ============================================================================

#[test]
fn dataset_lookup_with_fresh_keys() {
    let mut totals: HashMap<NodeKey<String>, f64> = HashMap::new();
    for (flow, weight) in energy_flows() {
        *totals.entry(flow.source_key()).or_default() += weight;
    }

    assert_eq!(totals[&NodeKey::new(0, "Gas".to_string())], 40.0);
    assert_eq!(totals[&NodeKey::new(1, "Electricity".to_string())], 75.0);
    assert!(!totals.contains_key(&NodeKey::new(2, "Homes".to_string())));
}

#[test]
fn fx_hash_map_lookup() {
    let mut index: FxHashMap<NodeKey<String>, usize> = FxHashMap::default();
    for (i, key) in energy_nodes().into_iter().enumerate() {
        index.insert(key, i);
    }

    assert_eq!(index.len(), 7);
    assert_eq!(index.get(&NodeKey::new(0, "Coal".to_string())), Some(&0));
    assert_eq!(index.get(&NodeKey::new(2, "Industry".to_string())), Some(&6));
    assert_eq!(index.get(&NodeKey::new(1, "Coal".to_string())), None);
}

#[test]
fn hash_code_stable_across_clones_and_threads() {
    let key = Arc::new(NodeKey::new(1, String::from("Heat")));
    let expected = key.hash_code();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let key = Arc::clone(&key);
            thread::spawn(move || key.hash_code())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
    assert_eq!((*key).clone().hash_code(), expected);
}

#[test]
fn hash_code_rarely_collides() {
    let codes: HashSet<i32> = energy_nodes().iter().map(NodeKey::hash_code).collect();
    assert_eq!(codes.len(), energy_nodes().len());
}

// ============================================================================
// Ordering by collaborators
// ============================================================================

#[test]
fn datasets_sort_by_stage_then_identifier() {
    // Keys have no ordering of their own; datasets order on the parts.
    let mut keys = energy_nodes();
    keys.reverse();
    keys.sort_by(|a, b| (a.stage(), a.node()).cmp(&(b.stage(), b.node())));
    assert_eq!(keys, energy_nodes());
}

#[test]
fn identifiers_enumerate_in_order() {
    let nodes = energy_nodes();
    let names: BTreeSet<&String> = nodes
        .iter()
        .rev()
        .filter(|k| k.stage() == 0)
        .map(|k| k.node())
        .collect();
    let names: Vec<&str> = names.into_iter().map(String::as_str).collect();
    assert_eq!(names, ["Coal", "Gas", "Solar"]);
}

// ============================================================================
// Debug text
// ============================================================================

#[test]
fn display_embeds_stage_and_node() {
    let text = NodeKey::new(2, "X").to_string();
    assert_eq!(text, "[NodeKey: 2, X]");
    assert!(text.contains('2'));
    assert!(text.contains('X'));
}

// ============================================================================
// Serde
// ============================================================================

#[test]
fn json_roundtrip_preserves_identity() {
    for key in energy_nodes() {
        let json = serde_json::to_string(&key).unwrap();
        let back: NodeKey<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
        assert_eq!(back.hash_code(), key.hash_code());
    }
}

proptest! {
    #[test]
    fn eq_matches_field_equality(
        s1 in -2i32..2, n1 in 0u8..3,
        s2 in -2i32..2, n2 in 0u8..3
    ) {
        let a = NodeKey::new(s1, n1);
        let b = NodeKey::new(s2, n2);
        prop_assert_eq!(a == b, s1 == s2 && n1 == n2);
        if a == b {
            prop_assert_eq!(a.hash_code(), b.hash_code());
            prop_assert_eq!(std_hash(&a), std_hash(&b));
        }
    }

    #[test]
    fn clone_is_equal(stage in any::<i32>(), node in "\\PC{0,16}") {
        let key = NodeKey::new(stage, node);
        let copy = key.clone();
        prop_assert_eq!(&key, &copy);
        prop_assert_eq!(key.hash_code(), copy.hash_code());
    }
}
