use crate::splay_tree::iter::{IntoIter, Keys};
use crate::splay_tree::SplayTree;
use std::borrow::Borrow;
use std::fmt;
use std::iter::FromIterator;

/// An ordered set implemented using a splay tree.
///
/// Membership tests, insertions, removals, and `min`/`max` splay the accessed key to the root of
/// the tree, so recently used keys are quick to access again.
///
/// # Examples
///
/// ```
/// use splay_collections::splay_tree::SplaySet;
///
/// let mut set = SplaySet::new();
/// assert!(set.insert(0));
/// assert!(set.insert(3));
/// assert!(!set.insert(3));
///
/// assert!(set.contains(&0));
/// assert!(!set.contains(&1));
/// assert_eq!(set.len(), 2);
///
/// assert_eq!(set.min(), Some(&0));
/// assert!(set.remove(&0));
/// assert!(!set.remove(&1));
/// ```
pub struct SplaySet<T> {
    tree: SplayTree<T, ()>,
}

impl<T> SplaySet<T> {
    /// Constructs a new, empty `SplaySet<T>`.
    pub fn new() -> Self {
        SplaySet {
            tree: SplayTree::new(),
        }
    }

    /// Constructs a new, empty `SplaySet<T>` that can hold `capacity` keys before its node storage
    /// reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        SplaySet {
            tree: SplayTree::with_capacity(capacity),
        }
    }

    /// Inserts a key into the set. Returns `true` if the key was not already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1));
    /// ```
    pub fn insert(&mut self, key: T) -> bool
    where
        T: Ord,
    {
        self.tree.insert(key, ()).is_none()
    }

    /// Removes a key from the set. Returns `true` if the key was present.
    pub fn remove<V>(&mut self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.delete(key)
    }

    /// Checks if a key exists in the set, splaying it (or the last key visited) to the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains<V>(&mut self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.find(key).is_some()
    }

    /// Returns the minimum key of the set after splaying it to the root.
    pub fn min(&mut self) -> Option<&T> {
        self.tree.minimum().map(|(key, _)| key)
    }

    /// Returns the maximum key of the set after splaying it to the root.
    pub fn max(&mut self) -> Option<&T> {
        self.tree.maximum().map(|(key, _)| key)
    }

    /// Returns the number of keys in the set.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Clears the set, removing all keys.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns an iterator over the set in ascending order. Does not splay.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(2);
    /// set.insert(1);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&2));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> Keys<T, ()> {
        self.tree.keys()
    }
}

/// An owning iterator for `SplaySet<T>`.
pub struct SplaySetIntoIter<T> {
    inner: IntoIter<T, ()>,
}

impl<T> Iterator for SplaySetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }
}

impl<T> IntoIterator for SplaySet<T> {
    type IntoIter = SplaySetIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        SplaySetIntoIter {
            inner: self.tree.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a SplaySet<T>
where
    T: 'a,
{
    type IntoIter = Keys<'a, T, ()>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Default for SplaySet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for SplaySet<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> PartialEq for SplaySet<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &SplaySet<T>) -> bool {
        self.tree == other.tree
    }
}

impl<T> Eq for SplaySet<T> where T: Eq {}

impl<T> Extend<T> for SplaySet<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.tree.extend(iter.into_iter().map(|key| (key, ())));
    }
}

impl<T> FromIterator<T> for SplaySet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = SplaySet::new();
        set.extend(iter);
        set
    }
}

#[cfg(test)]
mod tests {
    use super::SplaySet;

    #[test]
    fn test_len_empty() {
        let set: SplaySet<u32> = SplaySet::new();
        assert_eq!(set.len(), 0);
        assert!(set.is_empty());
    }

    #[test]
    fn test_min_max_empty() {
        let mut set: SplaySet<u32> = SplaySet::new();
        assert_eq!(set.min(), None);
        assert_eq!(set.max(), None);
    }

    #[test]
    fn test_insert() {
        let mut set = SplaySet::new();
        assert!(set.insert(1));
        assert!(!set.insert(1));
        assert!(set.contains(&1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut set = SplaySet::new();
        set.insert(1);
        assert!(set.remove(&1));
        assert!(!set.remove(&1));
        assert!(!set.contains(&1));
        assert!(set.is_empty());
    }

    #[test]
    fn test_min_max() {
        let mut set = SplaySet::with_capacity(3);
        set.insert(3);
        set.insert(1);
        set.insert(5);

        assert_eq!(set.min(), Some(&1));
        assert_eq!(set.max(), Some(&5));
    }

    #[test]
    fn test_clear() {
        let mut set: SplaySet<u32> = (0..10).collect();
        assert_eq!(set.len(), 10);
        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn test_iter() {
        let set: SplaySet<u32> = vec![5, 1, 3, 1].into_iter().collect();
        assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&1, &3, &5]);
        assert_eq!(format!("{:?}", set), "{1, 3, 5}");
        assert_eq!(set.into_iter().collect::<Vec<u32>>(), vec![1, 3, 5]);
    }
}
