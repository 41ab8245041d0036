// HashSymTable integration suite.
//
// Each test documents what behavior is being verified and which
// invariants are assumed or asserted. The core invariants exercised:
// - Uniqueness: a key is bound at most once; duplicate puts are no-ops.
// - Count: len equals the number of live bindings, never recomputed.
// - Growth: loss-free and duplicate-free through every size step.
// - Replace: distinguishes "unbound" from "bound to a null marker".
// - Traversal: every live binding is visited exactly once.
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;
use symtable::{HashSymTable, InsertError, SizeProgression, DEFAULT_BUCKET_COUNTS};

// Test: the canonical put/put/replace/remove walk-through.
// Verifies: every return value and the observable state after each step.
#[test]
fn put_duplicate_replace_remove_scenario() {
    let mut t = HashSymTable::new();
    assert!(t.put("a", 1));
    assert_eq!(t.len(), 1);

    assert!(!t.put("a", 2));
    assert_eq!(t.get("a"), Some(&1));
    assert_eq!(t.len(), 1);

    assert_eq!(t.replace("a", 2), Some(1));
    assert_eq!(t.get("a"), Some(&2));
    assert_eq!(t.len(), 1);

    assert_eq!(t.remove("a"), Some(2));
    assert_eq!(t.len(), 0);
    assert_eq!(t.get("a"), None);
    assert!(!t.contains("a"));
}

// Test: 600 distinct keys into a table that starts at 509 buckets.
// Verifies: growth happened and every key still maps to its value.
#[test]
fn six_hundred_keys_force_growth() {
    let mut t = HashSymTable::new();
    assert_eq!(t.bucket_count(), 509);
    for i in 0..600 {
        assert!(t.put(&format!("key-{i}"), i));
    }
    assert_eq!(t.len(), 600);
    assert_eq!(t.bucket_count(), 1021);
    for i in 0..600 {
        assert_eq!(t.get(&format!("key-{i}")), Some(&i), "key-{i} lost");
    }
}

// Test: growth through several sizes.
// Assumes: default progression 509, 1021, 2039, 4093.
// Verifies: after each growth event all previously inserted keys resolve
// and len equals the exact insert count.
#[test]
fn growth_is_loss_free_and_duplicate_free() {
    let mut t = HashSymTable::new();
    let mut last_buckets = t.bucket_count();
    let mut growths = 0;
    for i in 0..3000usize {
        assert!(t.put(&format!("g{i}"), i));
        if t.bucket_count() != last_buckets {
            growths += 1;
            last_buckets = t.bucket_count();
            for j in 0..=i {
                assert_eq!(t.get(&format!("g{j}")), Some(&j));
            }
        }
        assert_eq!(t.len(), i + 1);
    }
    assert_eq!(growths, 3);
    assert_eq!(t.bucket_count(), 4093);

    let mut seen = BTreeSet::new();
    t.for_each(|k, _| assert!(seen.insert(k.to_string()), "{k} visited twice"));
    assert_eq!(seen.len(), 3000);
}

// Test: the default progression caps at its last size.
// Verifies: inserts beyond the cap succeed and the bucket count never
// moves past 65521.
#[test]
fn default_progression_caps() {
    let mut t = HashSymTable::new();
    let n = 70_000usize;
    for i in 0..n {
        assert!(t.put(&format!("{i:x}"), ()));
    }
    assert_eq!(t.bucket_count(), *DEFAULT_BUCKET_COUNTS.last().unwrap());
    assert_eq!(t.len(), n);
    assert!(t.load_factor() > 1.0);
    assert!(t.contains("0"));
    assert!(t.contains(&format!("{:x}", n - 1)));
}

// Test: replace on an absent key.
// Verifies: returns None and the table is unchanged.
#[test]
fn replace_absent_is_noop() {
    let mut t = HashSymTable::new();
    t.put("present", 1);
    assert_eq!(t.replace("absent", 5), None);
    assert_eq!(t.len(), 1);
    assert!(!t.contains("absent"));
    assert_eq!(t.get("present"), Some(&1));
}

// Test: null-marker values.
// Assumes: V = Option<&i32>, with None playing the role of a null value.
// Verifies: "bound to None" and "unbound" give different results from
// get, replace, and remove.
#[test]
fn null_marker_values_are_distinguished() {
    let one = 1;
    let mut t: HashSymTable<Option<&i32>> = HashSymTable::new();
    assert!(t.put("nil", None));
    assert_eq!(t.get("nil"), Some(&None));
    assert_eq!(t.get("missing"), None);

    assert_eq!(t.replace("nil", Some(&one)), Some(None));
    assert_eq!(t.replace("nil", None), Some(Some(&one)));
    assert_eq!(t.replace("missing", None), None);
    assert!(!t.contains("missing"));

    assert_eq!(t.remove("nil"), Some(None));
    assert_eq!(t.remove("nil"), None);
}

// Test: value ownership stays with the caller.
// Assumes: V = Rc<String>.
// Verifies: the table never clones values; remove hands the same Rc back
// and dropping the table releases exactly its own references.
#[test]
fn values_are_not_cloned() {
    let shared = Rc::new(String::from("payload"));
    {
        let mut t = HashSymTable::new();
        t.put("a", Rc::clone(&shared));
        t.put("b", Rc::clone(&shared));
        assert_eq!(Rc::strong_count(&shared), 3);
        let back = t.remove("a").unwrap();
        assert!(Rc::ptr_eq(&back, &shared));
        drop(back);
        assert_eq!(Rc::strong_count(&shared), 2);
    }
    assert_eq!(Rc::strong_count(&shared), 1);
}

// Test: keys are copied on insert.
// Verifies: the caller's buffer can change or go away after put.
#[test]
fn keys_are_owned_copies() {
    let mut t = HashSymTable::new();
    let mut buf = String::from("temp");
    t.put(&buf, 1);
    buf.push_str("-changed");
    assert!(t.contains("temp"));
    assert!(!t.contains(&buf));
    drop(buf);
    assert_eq!(t.iter().next().map(|(k, _)| k), Some("temp"));
}

// Test: traversal with a caller context.
// Verifies: map_with visits len bindings, each once, with their values.
#[test]
fn map_with_visits_each_binding_once() {
    let mut t = HashSymTable::new();
    for i in 0..50 {
        t.put(&format!("m{i}"), i * 2);
    }
    t.remove("m7");
    let mut seen: BTreeMap<String, i32> = BTreeMap::new();
    t.map_with(&mut seen, |k, v, seen| {
        assert!(seen.insert(k.to_string(), *v).is_none());
    });
    assert_eq!(seen.len(), t.len());
    assert!(!seen.contains_key("m7"));
    assert_eq!(seen.get("m49"), Some(&98));
}

// Test: growth failure on insert.
// Assumes: a progression whose second size cannot be reserved.
// Verifies: try_put reports AllocFailed and the table keeps working.
#[test]
fn allocation_failure_is_reported_not_fatal() {
    static SIZES: &[usize] = &[2, usize::MAX / 4];
    let mut t = HashSymTable::with_progression(SizeProgression::new(SIZES).unwrap());
    assert_eq!(t.try_put("a", 1), Ok(()));
    assert_eq!(t.try_put("b", 2), Ok(()));
    assert_eq!(t.try_put("c", 3), Err(InsertError::AllocFailed));
    assert_eq!(t.try_put("a", 3), Err(InsertError::DuplicateKey));
    assert_eq!(t.len(), 2);
    assert_eq!(t.bucket_count(), 2);
    assert_eq!(t.get("a"), Some(&1));
    assert_eq!(t.get("b"), Some(&2));
}

// Test: error values print something useful.
#[test]
fn insert_error_display() {
    assert_eq!(
        InsertError::DuplicateKey.to_string(),
        "a binding with this key already exists"
    );
    assert_eq!(InsertError::AllocFailed.to_string(), "allocation failed while inserting");
}
