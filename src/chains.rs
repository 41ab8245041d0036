//! ChainArena: bucket array of singly linked chains over slot storage.
//!
//! Binding records live in a `SlotMap`; each bucket holds the key of its
//! first binding and each binding holds the key of the next one in its
//! chain. Callers choose the bucket, so the same arena backs both the hash
//! table (many buckets) and the list table (one bucket).

use crate::error::{GrowError, InsertError};
use crate::hash::bucket_index;
use slotmap::SlotMap;

slotmap::new_key_type! {
    pub(crate) struct BindingKey;
}

#[derive(Debug)]
struct Binding<V> {
    key: Box<str>,
    value: V,
    next: Option<BindingKey>,
}

pub(crate) struct ChainArena<V> {
    heads: Vec<Option<BindingKey>>,
    slots: SlotMap<BindingKey, Binding<V>>,
}

/// Copy `key` into independently owned storage, reporting allocation failure.
pub(crate) fn own_key(key: &str) -> Result<Box<str>, InsertError> {
    let mut s = String::new();
    s.try_reserve_exact(key.len()).map_err(|_| InsertError::AllocFailed)?;
    s.push_str(key);
    Ok(s.into_boxed_str())
}

fn alloc_heads(bucket_count: usize) -> Result<Vec<Option<BindingKey>>, GrowError> {
    let mut heads = Vec::new();
    heads
        .try_reserve_exact(bucket_count)
        .map_err(|_| GrowError::AllocFailed {
            requested: bucket_count,
        })?;
    heads.resize(bucket_count, None);
    Ok(heads)
}

/// Walks one chain from its head.
struct Chain<'a, V> {
    slots: &'a SlotMap<BindingKey, Binding<V>>,
    cur: Option<BindingKey>,
}

impl<'a, V> Iterator for Chain<'a, V> {
    type Item = (BindingKey, &'a Binding<V>);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let k = self.cur?;
        let b = &self.slots[k];
        self.cur = b.next;
        Some((k, b))
    }
}

/// Iterator over `(key, value)` for every binding in a table.
pub struct Iter<'a, V> {
    it: slotmap::basic::Iter<'a, BindingKey, Binding<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|(_, b)| (&*b.key, &b.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

/// Iterator over `(key, &mut value)` for every binding in a table.
pub struct IterMut<'a, V> {
    it: slotmap::basic::IterMut<'a, BindingKey, Binding<V>>,
}

impl<'a, V> Iterator for IterMut<'a, V> {
    type Item = (&'a str, &'a mut V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|(_, b)| (&*b.key, &mut b.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl<V> ExactSizeIterator for IterMut<'_, V> {}

impl<V> ChainArena<V> {
    pub(crate) fn new(bucket_count: usize) -> Self {
        assert!(bucket_count > 0, "bucket count must be non-zero");
        Self {
            heads: vec![None; bucket_count],
            slots: SlotMap::with_key(),
        }
    }

    pub(crate) fn try_new(bucket_count: usize) -> Result<Self, GrowError> {
        assert!(bucket_count > 0, "bucket count must be non-zero");
        Ok(Self {
            heads: alloc_heads(bucket_count)?,
            slots: SlotMap::with_key(),
        })
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn bucket_count(&self) -> usize {
        self.heads.len()
    }

    fn chain(&self, bucket: usize) -> Chain<'_, V> {
        Chain {
            slots: &self.slots,
            cur: self.heads[bucket],
        }
    }

    fn find(&self, bucket: usize, key: &str) -> Option<BindingKey> {
        self.chain(bucket)
            .find(|(_, b)| &*b.key == key)
            .map(|(k, _)| k)
    }

    pub(crate) fn contains(&self, bucket: usize, key: &str) -> bool {
        self.find(bucket, key).is_some()
    }

    pub(crate) fn get(&self, bucket: usize, key: &str) -> Option<&V> {
        self.chain(bucket)
            .find(|(_, b)| &*b.key == key)
            .map(|(_, b)| &b.value)
    }

    pub(crate) fn get_mut(&mut self, bucket: usize, key: &str) -> Option<&mut V> {
        let k = self.find(bucket, key)?;
        self.slots.get_mut(k).map(|b| &mut b.value)
    }

    /// Make room for one more binding record so the next `link_front`
    /// cannot allocate.
    pub(crate) fn reserve_binding(&mut self) -> Result<(), InsertError> {
        self.slots
            .try_reserve(1)
            .map_err(|_| InsertError::AllocFailed)
    }

    /// Link a new binding at the head of `bucket`. The caller has already
    /// checked that `key` is not present and reserved a record for it.
    pub(crate) fn link_front(&mut self, bucket: usize, key: Box<str>, value: V) {
        debug_assert!(!self.contains(bucket, &key));
        let next = self.heads[bucket];
        let k = self.slots.insert(Binding { key, value, next });
        self.heads[bucket] = Some(k);
    }

    /// Unlink the binding for `key` from `bucket` and hand back its parts.
    pub(crate) fn unlink(&mut self, bucket: usize, key: &str) -> Option<(Box<str>, V)> {
        let mut prev: Option<BindingKey> = None;
        let mut cur = self.heads[bucket];
        while let Some(k) = cur {
            let b = &self.slots[k];
            if &*b.key == key {
                let next = b.next;
                match prev {
                    None => self.heads[bucket] = next,
                    Some(p) => self.slots[p].next = next,
                }
                let b = self.slots.remove(k).expect("linked binding is live");
                return Some((b.key, b.value));
            }
            prev = cur;
            cur = b.next;
        }
        None
    }

    /// Replace the bucket array with one of `new_count` buckets and relink
    /// every binding by its hash under the new count. On allocation failure
    /// nothing changes.
    pub(crate) fn relink(&mut self, new_count: usize) -> Result<(), GrowError> {
        assert!(new_count > 0, "bucket count must be non-zero");
        let new_heads = alloc_heads(new_count)?;
        let old_heads = core::mem::replace(&mut self.heads, new_heads);
        for mut cur in old_heads {
            while let Some(k) = cur {
                let b = &mut self.slots[k];
                cur = b.next;
                let i = bucket_index(&b.key, new_count);
                b.next = self.heads[i];
                self.heads[i] = Some(k);
            }
        }
        debug_assert_eq!(self.chained_total(), self.len());
        Ok(())
    }

    fn chained_total(&self) -> usize {
        (0..self.heads.len()).map(|i| self.chain(i).count()).sum()
    }

    pub(crate) fn iter(&self) -> Iter<'_, V> {
        Iter {
            it: self.slots.iter(),
        }
    }

    pub(crate) fn iter_mut(&mut self) -> IterMut<'_, V> {
        IterMut {
            it: self.slots.iter_mut(),
        }
    }

    #[cfg(test)]
    pub(crate) fn chain_keys(&self, bucket: usize) -> Vec<&str> {
        self.chain(bucket).map(|(_, b)| &*b.key).collect()
    }
}
