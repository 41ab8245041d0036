//! symtable: a single-threaded symbol table mapping unique string keys to
//! values, with a linked-list backend and a chained hash table backend.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: one contract, two storage strategies, sharing a single
//!   structural layer so both are correct for the same reasons.
//! - Layers:
//!   - `hash`: pure polynomial string hash (multiplier 65599) reduced
//!     modulo the bucket count.
//!   - `growth::SizeProgression`: the ascending list of bucket counts a
//!     hash table moves through (509 up to 65521 by default).
//!   - `ChainArena<V>`: bucket array of singly linked chains. Binding
//!     records live in a `SlotMap`; links are generational keys, not
//!     pointers. Callers pick the bucket.
//!   - `HashSymTable<V>`: addresses buckets by hash and grows when the
//!     live count reaches the bucket count.
//!   - `ListSymTable<V>`: the same arena with one bucket and no growth.
//!   - `SymbolTable<V>`: the trait both backends implement.
//!
//! Constraints
//! - Single-threaded; no interior mutability, so `&mut self` on every
//!   mutator gives exclusive access and a traversal cannot insert or
//!   remove.
//! - Keys are copied into owned `Box<str>` storage on insert. Values are
//!   stored as given and never cloned; choose `&T`, `Rc<T>`, or
//!   `Option<&T>` for `V` to keep ownership with the caller.
//! - Duplicate inserts fail and leave the table unchanged.
//!
//! Growth
//! - Triggered inside `put` after the duplicate check, when
//!   `len == bucket_count`. The next bucket array is reserved fallibly;
//!   only after it exists are bindings relinked, so a failed growth
//!   leaves the old array and every binding in place and the insert
//!   reports `InsertError::AllocFailed`.
//! - At the last size growth is a no-op and the load factor may exceed 1.
//! - Relinking rewrites `next` links and bucket heads only; binding
//!   records, keys, and values stay where they are in the arena.
//!
//! Failure semantics
//! - Key duplication, the binding record, and bucket array allocation
//!   all report failure. `put` copies the key, reserves one record with
//!   `SlotMap::try_reserve`, and only then grows, so the final
//!   `SlotMap::insert` cannot allocate and a failure at any step leaves
//!   the bucket count and every binding as they were.
//! - Absence is `None`; it is never an error. `replace` returns
//!   `Option<V>`, so with `V = Option<T>` a stored `None` comes back as
//!   `Some(None)` and an unbound key as `None`.

mod chains;
mod chains_proptest;
pub mod error;
pub mod growth;
pub mod hash;
mod hash_table;
mod list_table;
mod table;

// Public surface
pub use chains::{Iter, IterMut};
pub use error::{GrowError, InsertError, ProgressionError};
pub use growth::{SizeProgression, DEFAULT_BUCKET_COUNTS};
pub use hash_table::HashSymTable;
pub use list_table::ListSymTable;
pub use table::SymbolTable;
