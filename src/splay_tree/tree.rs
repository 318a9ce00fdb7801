use crate::arena::{Arena, Handle};
use crate::error::{Error, Result};
use crate::splay_tree::iter::{Handles, IntoIter, Iter, Keys, Values};
use crate::splay_tree::node::Node;
use std::borrow::Borrow;
use std::cmp::{self, Ordering};
use std::fmt;
use std::iter::FromIterator;
use std::mem;
use std::ops::Index;

/// An ordered map implemented using a splay tree with parent links.
///
/// A splay tree is a self-adjusting binary search tree with the additional property that recently
/// accessed items are quick to access again. Every operation that takes `&mut self` and locates a
/// node ("splays") that node to the root of the tree through a sequence of rotations, which gives
/// amortized `O(log n)` time per operation without storing any balance information. Searches that
/// miss still splay the last node they visited.
///
/// Nodes are stored in an arena and refer to their children and parent through handles, so the
/// parent link never owns the node it points to.
///
/// # Examples
///
/// ```
/// use splay_collections::splay_tree::SplayTree;
///
/// let mut tree = SplayTree::new();
/// tree.insert(10, "ten");
/// tree.insert(5, "five");
/// tree.insert(15, "fifteen");
///
/// assert_eq!(tree.find(&10), Some(&"ten"));
/// assert_eq!(tree.root(), Some((&10, &"ten")));
/// assert_eq!(tree.find(&1), None);
/// assert_eq!(tree.len(), 3);
///
/// assert_eq!(tree.minimum(), Some((&5, &"five")));
/// assert_eq!(tree.maximum(), Some((&15, &"fifteen")));
///
/// assert!(tree.delete(&10));
/// assert!(!tree.delete(&10));
/// assert_eq!(tree.inorder(), vec![(&5, &"five"), (&15, &"fifteen")]);
/// ```
pub struct SplayTree<T, U> {
    arena: Arena<Node<T, U>>,
    root: Option<Handle>,
}

impl<T, U> SplayTree<T, U> {
    /// Constructs a new, empty `SplayTree<T, U>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayTree;
    ///
    /// let tree: SplayTree<u32, u32> = SplayTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        SplayTree {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Constructs a new, empty `SplayTree<T, U>` that can hold `capacity` entries before its node
    /// storage reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayTree;
    ///
    /// let tree: SplayTree<u32, u32> = SplayTree::with_capacity(1024);
    /// assert!(tree.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        SplayTree {
            arena: Arena::with_capacity(capacity),
            root: None,
        }
    }

    fn is_left_child(&self, child: Handle, parent: Handle) -> bool {
        self.arena[parent].left == Some(child)
    }

    // Makes `new` take the place of `old` under `parent`, or as the root if there is no parent.
    fn replace_child(&mut self, parent: Option<Handle>, old: Handle, new: Handle) {
        match parent {
            None => self.root = Some(new),
            Some(parent) => {
                if self.is_left_child(old, parent) {
                    self.arena[parent].left = Some(new);
                } else {
                    self.arena[parent].right = Some(new);
                }
            },
        }
    }

    fn rotate_right(&mut self, x: Handle) {
        let y = self.arena[x].left.expect("Expected left child node to be `Some`.");
        let inner = self.arena[y].right;
        self.arena[x].left = inner;
        if let Some(inner) = inner {
            self.arena[inner].parent = Some(x);
        }

        let parent = self.arena[x].parent;
        self.arena[y].parent = parent;
        self.replace_child(parent, x, y);

        self.arena[y].right = Some(x);
        self.arena[x].parent = Some(y);
    }

    fn rotate_left(&mut self, x: Handle) {
        let y = self.arena[x].right.expect("Expected right child node to be `Some`.");
        let inner = self.arena[y].left;
        self.arena[x].right = inner;
        if let Some(inner) = inner {
            self.arena[inner].parent = Some(x);
        }

        let parent = self.arena[x].parent;
        self.arena[y].parent = parent;
        self.replace_child(parent, x, y);

        self.arena[y].left = Some(x);
        self.arena[x].parent = Some(y);
    }

    // Rotates `handle` upwards until it has no parent. If `handle` starts inside a detached subtree
    // whose top is `self.root`, it becomes the root of that subtree.
    fn splay(&mut self, handle: Handle) {
        let mut rotations = 0;
        while let Some(parent) = self.arena[handle].parent {
            let is_left = self.is_left_child(handle, parent);
            match self.arena[parent].parent {
                // zig
                None => {
                    if is_left {
                        self.rotate_right(parent);
                    } else {
                        self.rotate_left(parent);
                    }
                    rotations += 1;
                },
                Some(grandparent) => {
                    match (is_left, self.is_left_child(parent, grandparent)) {
                        // zig-zig: the grandparent must be rotated before the parent
                        (true, true) => {
                            self.rotate_right(grandparent);
                            self.rotate_right(parent);
                        },
                        (false, false) => {
                            self.rotate_left(grandparent);
                            self.rotate_left(parent);
                        },
                        // zig-zag
                        (true, false) => {
                            self.rotate_right(parent);
                            self.rotate_left(grandparent);
                        },
                        (false, true) => {
                            self.rotate_left(parent);
                            self.rotate_right(grandparent);
                        },
                    }
                    rotations += 2;
                },
            }
        }
        trace!("splayed {:?} to the root with {} rotations", handle, rotations);
    }

    // Returns the node holding `key` paired with `Ordering::Equal`, or the last node visited
    // paired with the side of that node where `key` would be attached.
    fn descend<V>(&self, key: &V) -> Option<(Handle, Ordering)>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut curr = self.root?;
        loop {
            let node = &self.arena[curr];
            let ordering = key.cmp(node.entry.key.borrow());
            let next = match ordering {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some((curr, ordering)),
            };
            match next {
                Some(child) => curr = child,
                None => return Some((curr, ordering)),
            }
        }
    }

    // Splays the node holding `key`, or the last node visited, and returns the former if it exists.
    fn access<V>(&mut self, key: &V) -> Option<Handle>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let (handle, ordering) = self.descend(key)?;
        self.splay(handle);
        match ordering {
            Ordering::Equal => Some(handle),
            _ => None,
        }
    }

    fn leftmost(&self, mut handle: Handle) -> Handle {
        while let Some(left) = self.arena[handle].left {
            handle = left;
        }
        handle
    }

    fn rightmost(&self, mut handle: Handle) -> Handle {
        while let Some(right) = self.arena[handle].right {
            handle = right;
        }
        handle
    }

    /// Inserts a key-value pair into the tree and splays it to the root. If the key already exists
    /// in the tree, its value is replaced in place and the old value is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// assert_eq!(tree.insert(1, 1), None);
    /// assert_eq!(tree.find(&1), Some(&1));
    /// assert_eq!(tree.insert(1, 2), Some(1));
    /// assert_eq!(tree.find(&1), Some(&2));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: T, value: U) -> Option<U>
    where
        T: Ord,
    {
        let (handle, ordering) = match self.descend(&key) {
            Some(pair) => pair,
            None => {
                self.root = Some(self.arena.allocate(Node::new(key, value)));
                return None;
            },
        };

        match ordering {
            Ordering::Equal => {
                let old_value = mem::replace(&mut self.arena[handle].entry.value, value);
                self.splay(handle);
                Some(old_value)
            },
            Ordering::Less => {
                let leaf = self.arena.allocate(Node::with_parent(key, value, handle));
                self.arena[handle].left = Some(leaf);
                self.splay(leaf);
                None
            },
            Ordering::Greater => {
                let leaf = self.arena.allocate(Node::with_parent(key, value, handle));
                self.arena[handle].right = Some(leaf);
                self.splay(leaf);
                None
            },
        }
    }

    /// Returns an immutable reference to the value associated with a particular key, splaying the
    /// matching node to the root. If the key does not exist, the last node visited by the search
    /// is splayed instead and `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, 1);
    /// tree.insert(3, 3);
    /// assert_eq!(tree.find(&1), Some(&1));
    /// assert_eq!(tree.root(), Some((&1, &1)));
    ///
    /// assert_eq!(tree.find(&4), None);
    /// assert_eq!(tree.root(), Some((&3, &3)));
    /// ```
    pub fn find<V>(&mut self, key: &V) -> Option<&U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        match self.access(key) {
            Some(handle) => Some(&self.arena[handle].entry.value),
            None => None,
        }
    }

    /// Returns a mutable reference to the value associated with a particular key. Splays the same
    /// way as `find`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, 1);
    /// *tree.get_mut(&1).unwrap() = 2;
    /// assert_eq!(tree.get(&1), Some(&2));
    /// ```
    pub fn get_mut<V>(&mut self, key: &V) -> Option<&mut U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        match self.access(key) {
            Some(handle) => Some(&mut self.arena[handle].entry.value),
            None => None,
        }
    }

    /// Removes a key-value pair from the tree and returns it. Returns `None` and leaves the tree
    /// untouched if the key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, 1);
    /// assert_eq!(tree.remove(&1), Some((1, 1)));
    /// assert_eq!(tree.remove(&1), None);
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> Option<(T, U)>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let handle = match self.descend(key) {
            Some((handle, Ordering::Equal)) => handle,
            _ => return None,
        };
        self.splay(handle);

        let Node {
            entry, left, right, ..
        } = self.arena.free(handle);
        self.root = match (left, right) {
            (None, None) => None,
            (None, Some(child)) | (Some(child), None) => {
                self.arena[child].parent = None;
                Some(child)
            },
            (Some(left), Some(right)) => {
                // splay within the detached left subtree; its maximum has no right child
                self.arena[left].parent = None;
                self.root = Some(left);
                let max = self.rightmost(left);
                self.splay(max);

                self.arena[max].right = Some(right);
                self.arena[right].parent = Some(max);
                Some(max)
            },
        };
        debug!("removed {:?}, new root is {:?}", handle, self.root);
        Some(entry.into_pair())
    }

    /// Removes a key from the tree. Returns `true` if the key existed.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(10, 10);
    /// tree.insert(20, 20);
    /// assert!(tree.delete(&10));
    /// assert!(!tree.delete(&100));
    /// assert_eq!(tree.inorder(), vec![(&20, &20)]);
    /// ```
    pub fn delete<V>(&mut self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.remove(key).is_some()
    }

    /// Returns the entry with the minimum key after splaying it to the root. Returns `None` if the
    /// tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// assert_eq!(tree.minimum(), None);
    /// tree.insert(1, 'a');
    /// tree.insert(3, 'c');
    /// assert_eq!(tree.minimum(), Some((&1, &'a')));
    /// ```
    pub fn minimum(&mut self) -> Option<(&T, &U)> {
        let min = self.leftmost(self.root?);
        self.splay(min);
        Some(self.arena[min].entry.as_pair())
    }

    /// Returns the entry with the maximum key after splaying it to the root. Returns `None` if the
    /// tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// assert_eq!(tree.maximum(), None);
    /// tree.insert(1, 'a');
    /// tree.insert(3, 'c');
    /// assert_eq!(tree.maximum(), Some((&3, &'c')));
    /// ```
    pub fn maximum(&mut self) -> Option<(&T, &U)> {
        let max = self.rightmost(self.root?);
        self.splay(max);
        Some(self.arena[max].entry.as_pair())
    }

    /// Returns an immutable reference to the value associated with a particular key without
    /// splaying, so it only needs a shared reference to the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, 1);
    /// tree.insert(2, 2);
    /// assert_eq!(tree.get(&1), Some(&1));
    /// assert_eq!(tree.get(&0), None);
    /// assert_eq!(tree.root(), Some((&2, &2)));
    /// ```
    pub fn get<V>(&self, key: &V) -> Option<&U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        match self.descend(key) {
            Some((handle, Ordering::Equal)) => Some(&self.arena[handle].entry.value),
            _ => None,
        }
    }

    /// Checks if a key exists in the tree without splaying.
    pub fn contains_key<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Returns the greatest key in the tree that is less than or equal to a particular key, or
    /// `None` if such a key does not exist. Does not splay.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, 1);
    /// assert_eq!(tree.floor(&0), None);
    /// assert_eq!(tree.floor(&2), Some(&1));
    /// ```
    pub fn floor<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut curr = self.root;
        let mut floor = None;
        while let Some(handle) = curr {
            let node = &self.arena[handle];
            match key.cmp(node.entry.key.borrow()) {
                Ordering::Less => curr = node.left,
                Ordering::Greater => {
                    floor = Some(&node.entry.key);
                    curr = node.right;
                },
                Ordering::Equal => return Some(&node.entry.key),
            }
        }
        floor
    }

    /// Returns the least key in the tree that is greater than or equal to a particular key, or
    /// `None` if such a key does not exist. Does not splay.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, 1);
    /// assert_eq!(tree.ceil(&0), Some(&1));
    /// assert_eq!(tree.ceil(&2), None);
    /// ```
    pub fn ceil<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut curr = self.root;
        let mut ceil = None;
        while let Some(handle) = curr {
            let node = &self.arena[handle];
            match key.cmp(node.entry.key.borrow()) {
                Ordering::Less => {
                    ceil = Some(&node.entry.key);
                    curr = node.left;
                },
                Ordering::Greater => curr = node.right,
                Ordering::Equal => return Some(&node.entry.key),
            }
        }
        ceil
    }

    /// Returns the entry currently at the root of the tree. After a successful `find`, `insert`,
    /// `minimum` or `maximum`, this is the entry that was accessed.
    pub fn root(&self) -> Option<(&T, &U)> {
        self.root.map(|handle| self.arena[handle].entry.as_pair())
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// assert_eq!(tree.height(), 0);
    /// for key in 1..=7 {
    ///     tree.insert(key, ());
    /// }
    /// // ascending inserts leave a left spine
    /// assert_eq!(tree.height(), 7);
    /// tree.find(&1);
    /// assert!(tree.height() < 7);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(Handle, usize)> = self.root.iter().map(|&root| (root, 1)).collect();
        while let Some((handle, depth)) = stack.pop() {
            let node = &self.arena[handle];
            if node.is_leaf() {
                height = cmp::max(height, depth);
            }
            for &child in node.left.iter().chain(node.right.iter()) {
                stack.push((child, depth + 1));
            }
        }
        height
    }

    /// Returns the number of entries in the tree.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the tree holds no entries.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Clears the tree, removing all entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, 1);
    /// tree.insert(2, 2);
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// ```
    pub fn clear(&mut self) {
        debug!("clearing tree of {} entries", self.len());
        self.arena.clear();
        self.root = None;
    }

    /// Verifies the structural invariants of the tree: the root has no parent, every child links
    /// back to its parent, keys are in strictly ascending order, and every entry is reachable
    /// from the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// for key in &[5, 3, 8, 1, 4] {
    ///     tree.insert(*key, ());
    /// }
    /// tree.delete(&3);
    /// assert_eq!(tree.check_invariants(), Ok(()));
    /// ```
    pub fn check_invariants(&self) -> Result<()>
    where
        T: Ord,
    {
        if let Some(root) = self.root {
            if self.arena[root].parent.is_some() {
                return Err(Error::RootHasParent);
            }
        }

        let mut reachable = 0;
        let mut stack: Vec<Handle> = self.root.into_iter().collect();
        while let Some(handle) = stack.pop() {
            reachable += 1;
            if reachable > self.len() {
                break;
            }
            let node = &self.arena[handle];
            for &child in node.left.iter().chain(node.right.iter()) {
                if self.arena[child].parent != Some(handle) {
                    return Err(Error::BrokenParentLink);
                }
                stack.push(child);
            }
        }
        if reachable != self.len() {
            return Err(Error::LengthMismatch {
                reachable,
                len: self.len(),
            });
        }

        let mut prev: Option<&T> = None;
        for (key, _) in self.iter() {
            if let Some(prev) = prev {
                if prev >= key {
                    return Err(Error::OutOfOrder);
                }
            }
            prev = Some(key);
        }
        Ok(())
    }

    /// Returns the entries of the tree in ascending key order. Does not splay.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(10, "ten");
    /// tree.insert(5, "five");
    /// tree.insert(15, "fifteen");
    /// assert_eq!(tree.inorder(), vec![(&5, &"five"), (&10, &"ten"), (&15, &"fifteen")]);
    /// ```
    pub fn inorder(&self) -> Vec<(&T, &U)> {
        self.iter().collect()
    }

    /// Returns an iterator over the tree. The iterator will yield key-value pairs using in-order
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, 1);
    /// tree.insert(2, 2);
    ///
    /// let mut iterator = tree.iter();
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), Some((&2, &2)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<T, U> {
        Iter::new(Handles::new(&self.arena, self.root))
    }

    /// Returns an iterator over the keys of the tree in ascending order.
    pub fn keys(&self) -> Keys<T, U> {
        Keys::new(self.iter())
    }

    /// Returns an iterator over the values of the tree in ascending key order.
    pub fn values(&self) -> Values<T, U> {
        Values::new(self.iter())
    }
}

impl<T, U> IntoIterator for SplayTree<T, U> {
    type IntoIter = IntoIter<T, U>;
    type Item = (T, U);

    fn into_iter(self) -> Self::IntoIter {
        let order: Vec<Handle> = Handles::new(&self.arena, self.root).collect();
        IntoIter::new(self.arena, order)
    }
}

impl<'a, T, U> IntoIterator for &'a SplayTree<T, U>
where
    T: 'a,
    U: 'a,
{
    type IntoIter = Iter<'a, T, U>;
    type Item = (&'a T, &'a U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, U> Default for SplayTree<T, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, U> fmt::Debug for SplayTree<T, U>
where
    T: fmt::Debug,
    U: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<T, U> PartialEq for SplayTree<T, U>
where
    T: PartialEq,
    U: PartialEq,
{
    fn eq(&self, other: &SplayTree<T, U>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T, U> Eq for SplayTree<T, U>
where
    T: Eq,
    U: Eq,
{
}

impl<T, U> Extend<(T, U)> for SplayTree<T, U>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (T, U)>,
    {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<T, U> FromIterator<(T, U)> for SplayTree<T, U>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (T, U)>,
    {
        let mut tree = SplayTree::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T, U, V> Index<&'a V> for SplayTree<T, U>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    type Output = U;

    fn index(&self, key: &V) -> &Self::Output {
        self.get(key).expect("Error: key does not exist.")
    }
}
