//! Proptest generators for driving the store.

use proptest::prelude::*;

use seqmap::SeqMap;

use crate::model::ModelMap;

/// One edit applied to a store under test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Insert { key: String, value: i64 },
    Remove { key: String },
    Clear,
}

/// Generate a key from a small alphabet so scripts revisit keys often.
pub fn key() -> impl Strategy<Value = String> {
    "[a-e]{1,2}".prop_map(String::from)
}

/// Generate a value, including zero so the default-value ambiguity is hit.
pub fn value() -> impl Strategy<Value = i64> {
    -100i64..=100
}

/// Generate a single edit, weighted toward inserts.
pub fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (key(), value()).prop_map(|(key, value)| Op::Insert { key, value }),
        2 => key().prop_map(|key| Op::Remove { key }),
        1 => Just(Op::Clear),
    ]
}

/// A whole edit script.
#[derive(Debug, Clone)]
pub struct Script(pub Vec<Op>);

impl Arbitrary for Script {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop::collection::vec(op(), 0..64).prop_map(Script).boxed()
    }
}

/// Apply one edit to a store.
pub fn apply(map: &mut SeqMap<String, i64>, op: &Op) {
    match op {
        Op::Insert { key, value } => map.insert(key.clone(), *value),
        Op::Remove { key } => {
            map.remove(key);
        }
        Op::Clear => map.clear(),
    }
}

/// Run a script against a fresh store.
pub fn run_script(script: &Script) -> SeqMap<String, i64> {
    let mut map = SeqMap::new();
    for op in &script.0 {
        apply(&mut map, op);
    }
    map
}

/// Run the same script against the reference model.
pub fn run_model(script: &Script) -> ModelMap {
    let mut model = ModelMap::new();
    for op in &script.0 {
        match op {
            Op::Insert { key, value } => model.insert(key.clone(), *value),
            Op::Remove { key } => model.remove(key),
            Op::Clear => model.clear(),
        }
    }
    model
}
