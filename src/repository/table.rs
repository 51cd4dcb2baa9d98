//! Insertion-ordered record table

use indexmap::IndexMap;

use crate::models::EntityId;

/// Records keyed by id; key order is the order in which ids were issued
#[derive(Debug, Clone)]
pub struct Table<K, V> {
    rows: IndexMap<K, V>,
}

impl<K: EntityId, V> Default for Table<K, V> {
    fn default() -> Self {
        Self {
            rows: IndexMap::new(),
        }
    }
}

impl<K: EntityId, V> Table<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next identifier: one past the last issued, or the first one if empty
    pub fn next_id(&self) -> K {
        next_id(self.rows.keys())
    }

    pub fn insert(&mut self, id: K, value: V) {
        self.rows.insert(id, value);
    }

    pub fn get(&self, id: K) -> Option<&V> {
        self.rows.get(&id)
    }

    pub fn get_mut(&mut self, id: K) -> Option<&mut V> {
        self.rows.get_mut(&id)
    }

    pub fn contains(&self, id: K) -> bool {
        self.rows.contains_key(&id)
    }

    /// Remove a row, keeping the remaining rows in order
    pub fn remove(&mut self, id: K) -> Option<V> {
        self.rows.shift_remove(&id)
    }

    pub fn ids(&self) -> impl Iterator<Item = K> + '_ {
        self.rows.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &V> + '_ {
        self.rows.values()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Identifier allocator over an ordered list of issued ids
pub fn next_id<'a, K, I>(issued: I) -> K
where
    K: EntityId + 'a,
    I: IntoIterator<Item = &'a K>,
    I::IntoIter: DoubleEndedIterator,
{
    issued
        .into_iter()
        .next_back()
        .map_or(K::FIRST, |last| last.next())
}
