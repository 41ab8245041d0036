//! ListSymTable: a single chain of bindings, most recent first.
//!
//! Same contract as `HashSymTable`, with one bucket and no growth. Every
//! lookup is a linear scan.

use crate::chains::{own_key, ChainArena, Iter, IterMut};
use crate::error::{GrowError, InsertError};
use core::fmt;

const ONLY_BUCKET: usize = 0;

pub struct ListSymTable<V> {
    chain: ChainArena<V>,
}

impl<V> ListSymTable<V> {
    pub fn new() -> Self {
        Self {
            chain: ChainArena::new(1),
        }
    }

    /// Like `new`, but reports a failed bucket allocation.
    pub fn try_new() -> Result<Self, GrowError> {
        Ok(Self {
            chain: ChainArena::try_new(1)?,
        })
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }
    pub fn is_empty(&self) -> bool {
        self.chain.len() == 0
    }

    pub fn try_put(&mut self, key: &str, value: V) -> Result<(), InsertError> {
        if self.chain.contains(ONLY_BUCKET, key) {
            return Err(InsertError::DuplicateKey);
        }
        let owned = own_key(key)?;
        self.chain.reserve_binding()?;
        self.chain.link_front(ONLY_BUCKET, owned, value);
        Ok(())
    }

    pub fn put(&mut self, key: &str, value: V) -> bool {
        self.try_put(key, value).is_ok()
    }

    pub fn replace(&mut self, key: &str, value: V) -> Option<V> {
        self.chain
            .get_mut(ONLY_BUCKET, key)
            .map(|slot| core::mem::replace(slot, value))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.chain.contains(ONLY_BUCKET, key)
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.chain.get(ONLY_BUCKET, key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.chain.get_mut(ONLY_BUCKET, key)
    }

    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.chain.unlink(ONLY_BUCKET, key).map(|(_key, value)| value)
    }

    pub fn map_with<C, F>(&self, ctx: &mut C, mut f: F)
    where
        F: FnMut(&str, &V, &mut C),
    {
        for (k, v) in self.chain.iter() {
            f(k, v, ctx);
        }
    }

    pub fn map_with_mut<C, F>(&mut self, ctx: &mut C, mut f: F)
    where
        F: FnMut(&str, &mut V, &mut C),
    {
        for (k, v) in self.chain.iter_mut() {
            f(k, v, ctx);
        }
    }

    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&str, &V),
    {
        for (k, v) in self.chain.iter() {
            f(k, v);
        }
    }

    pub fn iter(&self) -> Iter<'_, V> {
        self.chain.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        self.chain.iter_mut()
    }
}

impl<V> Default for ListSymTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, V> IntoIterator for &'a ListSymTable<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, V> IntoIterator for &'a mut ListSymTable<V> {
    type Item = (&'a str, &'a mut V);
    type IntoIter = IterMut<'a, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<V: fmt::Debug> fmt::Debug for ListSymTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
