//! HashSymTable: chained hash table that grows through a size progression.

use crate::chains::{own_key, ChainArena, Iter, IterMut};
use crate::error::{GrowError, InsertError};
use crate::growth::SizeProgression;
use crate::hash::bucket_index;
use core::fmt;

pub struct HashSymTable<V> {
    chains: ChainArena<V>,
    progression: SizeProgression,
}

impl<V> HashSymTable<V> {
    pub fn new() -> Self {
        Self::with_progression(SizeProgression::default())
    }

    /// Like `new`, but reports a failed bucket array allocation.
    pub fn try_new() -> Result<Self, GrowError> {
        Self::try_with_progression(SizeProgression::default())
    }

    pub fn with_progression(progression: SizeProgression) -> Self {
        Self {
            chains: ChainArena::new(progression.initial()),
            progression,
        }
    }

    pub fn try_with_progression(progression: SizeProgression) -> Result<Self, GrowError> {
        Ok(Self {
            chains: ChainArena::try_new(progression.initial())?,
            progression,
        })
    }

    #[inline]
    fn bucket(&self, key: &str) -> usize {
        bucket_index(key, self.chains.bucket_count())
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }
    pub fn is_empty(&self) -> bool {
        self.chains.len() == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.chains.bucket_count()
    }

    pub fn load_factor(&self) -> f64 {
        self.len() as f64 / self.bucket_count() as f64
    }

    pub fn progression(&self) -> SizeProgression {
        self.progression
    }

    /// Move to the next size of the progression. A no-op at the last size.
    fn grow(&mut self) -> Result<(), GrowError> {
        match self.progression.next(self.chains.bucket_count()) {
            Some(n) => self.chains.relink(n),
            None => Ok(()),
        }
    }

    /// Add a binding for `key`. Fails without touching the table if the key
    /// is already bound or an allocation fails.
    pub fn try_put(&mut self, key: &str, value: V) -> Result<(), InsertError> {
        if self.chains.contains(self.bucket(key), key) {
            return Err(InsertError::DuplicateKey);
        }
        let owned = own_key(key)?;
        self.chains.reserve_binding()?;
        if self.chains.len() >= self.chains.bucket_count() {
            self.grow()?;
        }
        let bucket = self.bucket(key);
        self.chains.link_front(bucket, owned, value);
        Ok(())
    }

    /// Returns true iff a new binding was added.
    pub fn put(&mut self, key: &str, value: V) -> bool {
        self.try_put(key, value).is_ok()
    }

    /// Overwrite the value bound to `key`, returning the previous one. If
    /// `key` is unbound the table is unchanged and `None` is returned.
    pub fn replace(&mut self, key: &str, value: V) -> Option<V> {
        let bucket = self.bucket(key);
        self.chains
            .get_mut(bucket, key)
            .map(|slot| core::mem::replace(slot, value))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.chains.contains(self.bucket(key), key)
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.chains.get(self.bucket(key), key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let bucket = self.bucket(key);
        self.chains.get_mut(bucket, key)
    }

    pub fn remove(&mut self, key: &str) -> Option<V> {
        let bucket = self.bucket(key);
        self.chains.unlink(bucket, key).map(|(_key, value)| value)
    }

    /// Visit every binding once, threading `ctx` through the visitor.
    pub fn map_with<C, F>(&self, ctx: &mut C, mut f: F)
    where
        F: FnMut(&str, &V, &mut C),
    {
        for (k, v) in self.chains.iter() {
            f(k, v, ctx);
        }
    }

    /// Like `map_with`, but the visitor may modify each value in place.
    pub fn map_with_mut<C, F>(&mut self, ctx: &mut C, mut f: F)
    where
        F: FnMut(&str, &mut V, &mut C),
    {
        for (k, v) in self.chains.iter_mut() {
            f(k, v, ctx);
        }
    }

    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&str, &V),
    {
        for (k, v) in self.chains.iter() {
            f(k, v);
        }
    }

    pub fn iter(&self) -> Iter<'_, V> {
        self.chains.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        self.chains.iter_mut()
    }
}

impl<V> Default for HashSymTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, V> IntoIterator for &'a HashSymTable<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, V> IntoIterator for &'a mut HashSymTable<V> {
    type Item = (&'a str, &'a mut V);
    type IntoIter = IterMut<'a, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<V: fmt::Debug> fmt::Debug for HashSymTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
