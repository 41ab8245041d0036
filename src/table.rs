//! The contract shared by every symbol table backend.

use crate::error::InsertError;
use crate::hash_table::HashSymTable;
use crate::list_table::ListSymTable;

/// A map from unique string keys to values of type `V`.
///
/// Keys are copied into storage owned by the table. Values are stored as
/// given and never cloned or inspected; pass references or `Rc`s to keep
/// ownership on the caller's side.
pub trait SymbolTable<V> {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add a binding; `DuplicateKey` or `AllocFailed` leave the table unchanged.
    fn try_put(&mut self, key: &str, value: V) -> Result<(), InsertError>;

    /// Returns true iff a new binding was added.
    fn put(&mut self, key: &str, value: V) -> bool {
        self.try_put(key, value).is_ok()
    }

    /// Swap in a new value for a bound key. `None` means the key was unbound
    /// and the table is unchanged.
    fn replace(&mut self, key: &str, value: V) -> Option<V>;

    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    fn get(&self, key: &str) -> Option<&V>;

    fn get_mut(&mut self, key: &str) -> Option<&mut V>;

    fn remove(&mut self, key: &str) -> Option<V>;

    /// Visit every binding exactly once, in no particular order.
    fn for_each_binding(&self, f: &mut dyn FnMut(&str, &V));
}

macro_rules! impl_symbol_table {
    ($table:ident) => {
        impl<V> SymbolTable<V> for $table<V> {
            fn len(&self) -> usize {
                $table::len(self)
            }
            fn try_put(&mut self, key: &str, value: V) -> Result<(), InsertError> {
                $table::try_put(self, key, value)
            }
            fn replace(&mut self, key: &str, value: V) -> Option<V> {
                $table::replace(self, key, value)
            }
            fn contains(&self, key: &str) -> bool {
                $table::contains(self, key)
            }
            fn get(&self, key: &str) -> Option<&V> {
                $table::get(self, key)
            }
            fn get_mut(&mut self, key: &str) -> Option<&mut V> {
                $table::get_mut(self, key)
            }
            fn remove(&mut self, key: &str) -> Option<V> {
                $table::remove(self, key)
            }
            fn for_each_binding(&self, f: &mut dyn FnMut(&str, &V)) {
                $table::for_each(self, f)
            }
        }
    };
}

impl_symbol_table!(HashSymTable);
impl_symbol_table!(ListSymTable);
