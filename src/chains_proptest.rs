#![cfg(test)]

// Property tests for ChainArena kept inside the crate so they can reach the
// crate-private structural layer.

use crate::chains::{own_key, ChainArena};
use crate::hash::bucket_index;
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};

// Pool-indexed operations so shrinking moves toward earlier keys and
// shorter op lists.
#[derive(Clone, Debug)]
enum OpI {
    Link(usize, i32),
    Unlink(usize),
    Get(usize),
    Mutate(usize, i32),
    Relink(usize),
    Iterate,
}

const RELINK_SIZES: &[usize] = &[1, 2, 3, 7, 13, 31];

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, usize, Vec<OpI>)> {
    (
        proptest::collection::vec("[a-z]{0,5}", 1..=10),
        proptest::sample::select(RELINK_SIZES),
    )
        .prop_flat_map(|(pool, start)| {
            let idxs: Vec<usize> = (0..pool.len()).collect();
            let idx = proptest::sample::select(idxs);
            let op = prop_oneof![
                (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Link(i, v)),
                idx.clone().prop_map(OpI::Unlink),
                idx.clone().prop_map(OpI::Get),
                (idx.clone(), any::<i32>()).prop_map(|(i, d)| OpI::Mutate(i, d)),
                proptest::sample::select(RELINK_SIZES).prop_map(OpI::Relink),
                Just(OpI::Iterate),
            ];
            proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), start, ops))
        })
}

// Property: ChainArena addressed by `bucket_index` behaves like a HashMap.
// Invariants exercised across random operation sequences:
// - a key is only ever linked once; lookups find it in its hash bucket;
// - unlink returns the owned key and the model's value;
// - relink keeps every binding and moves each to its new hash bucket;
// - iteration yields each live binding exactly once;
// - len matches the model and the sum of chain lengths after each op.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_chain_arena_matches_model((pool, start, ops) in arb_scenario()) {
        let mut sut: ChainArena<i32> = ChainArena::new(start);
        let mut model: HashMap<String, i32> = HashMap::new();

        for op in ops {
            let n = sut.bucket_count();
            match op {
                OpI::Link(i, v) => {
                    let k = &pool[i];
                    let b = bucket_index(k, n);
                    if model.contains_key(k) {
                        prop_assert!(sut.contains(b, k));
                    } else {
                        prop_assert!(!sut.contains(b, k));
                        sut.link_front(b, own_key(k).unwrap(), v);
                        model.insert(k.clone(), v);
                    }
                }
                OpI::Unlink(i) => {
                    let k = &pool[i];
                    let got = sut.unlink(bucket_index(k, n), k);
                    match model.remove(k) {
                        Some(mv) => {
                            let (kk, vv) = got.expect("bound key must unlink");
                            prop_assert_eq!(&*kk, k.as_str());
                            prop_assert_eq!(vv, mv);
                        }
                        None => prop_assert!(got.is_none()),
                    }
                }
                OpI::Get(i) => {
                    let k = &pool[i];
                    prop_assert_eq!(sut.get(bucket_index(k, n), k), model.get(k));
                }
                OpI::Mutate(i, d) => {
                    let k = &pool[i];
                    if let Some(v) = sut.get_mut(bucket_index(k, n), k) {
                        *v = v.wrapping_add(d);
                        let mv = model.get_mut(k).expect("model has bound key");
                        *mv = mv.wrapping_add(d);
                    } else {
                        prop_assert!(!model.contains_key(k));
                    }
                }
                OpI::Relink(m) => {
                    sut.relink(m).unwrap();
                    prop_assert_eq!(sut.bucket_count(), m);
                }
                OpI::Iterate => {
                    let s: Vec<(String, i32)> =
                        sut.iter().map(|(k, v)| (k.to_string(), *v)).collect();
                    let s_set: BTreeSet<_> = s.iter().cloned().collect();
                    prop_assert_eq!(s.len(), s_set.len(), "binding visited twice");
                    let m_set: BTreeSet<_> = model.iter().map(|(k, v)| (k.clone(), *v)).collect();
                    prop_assert_eq!(s_set, m_set);
                }
            }

            prop_assert_eq!(sut.len(), model.len());
            let chained: usize = (0..sut.bucket_count()).map(|b| sut.chain_keys(b).len()).sum();
            prop_assert_eq!(chained, model.len());
        }
    }
}
