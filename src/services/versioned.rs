use std::sync::Arc;

/// An immutable collection snapshot plus a version counter.
///
/// Commands never edit records in place: they derive a new collection and
/// [`replace`](Versioned::replace) the old one. Snapshots handed out earlier
/// keep seeing the collection as it was.
#[derive(Debug, Clone)]
pub struct Versioned<T> {
    items: Arc<Vec<T>>,
    version: u64,
}

impl<T> Versioned<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: Arc::new(items),
            version: 0,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn snapshot(&self) -> Arc<Vec<T>> {
        Arc::clone(&self.items)
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Installs a new collection and returns the new version.
    pub fn replace(&mut self, items: Vec<T>) -> u64 {
        self.items = Arc::new(items);
        self.version += 1;
        self.version
    }
}

impl<T: Clone> Versioned<T> {
    /// Derives a new collection where the first item matching `select` is
    /// replaced by `update(item)`. Returns the updated item, or `None` if
    /// nothing matched (in which case the version is unchanged).
    pub fn update_where(
        &mut self,
        select: impl Fn(&T) -> bool,
        update: impl FnOnce(&T) -> T,
    ) -> Option<T> {
        let index = self.items.iter().position(select)?;
        let updated = update(&self.items[index]);

        let mut next = self.items.as_ref().clone();
        next[index] = updated.clone();
        self.replace(next);
        Some(updated)
    }

    /// Derives a new collection without the first item matching `select`.
    pub fn remove_where(&mut self, select: impl Fn(&T) -> bool) -> Option<T> {
        let index = self.items.iter().position(select)?;

        let mut next = self.items.as_ref().clone();
        let removed = next.remove(index);
        self.replace(next);
        Some(removed)
    }

    /// Derives a new collection with `item` appended.
    pub fn push(&mut self, item: T) -> u64 {
        let mut next = self.items.as_ref().clone();
        next.push(item);
        self.replace(next)
    }
}
