use crate::arena::{Arena, Handle};
use crate::splay_tree::node::Node;
use std::vec;

// Walks node handles in-order with an explicit stack, so degenerate trees do not recurse deeply.
pub struct Handles<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    arena: &'a Arena<Node<T, U>>,
    current: Option<Handle>,
    stack: Vec<Handle>,
    remaining: usize,
}

impl<'a, T, U> Handles<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    pub fn new(arena: &'a Arena<Node<T, U>>, root: Option<Handle>) -> Self {
        Handles {
            arena,
            current: root,
            stack: Vec::new(),
            remaining: arena.len(),
        }
    }
}

impl<'a, T, U> Iterator for Handles<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = Handle;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(handle) = self.current {
            self.stack.push(handle);
            self.current = self.arena[handle].left;
        }
        self.stack.pop().map(|handle| {
            self.current = self.arena[handle].right;
            self.remaining -= 1;
            handle
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// An iterator for `SplayTree<T, U>`.
///
/// This iterator traverses the elements of the tree in-order and yields immutable references. It
/// does not splay.
pub struct Iter<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    handles: Handles<'a, T, U>,
}

impl<'a, T, U> Iter<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    pub(super) fn new(handles: Handles<'a, T, U>) -> Self {
        Iter { handles }
    }
}

impl<'a, T, U> Iterator for Iter<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = (&'a T, &'a U);

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.handles.arena;
        self.handles.next().map(|handle| arena[handle].entry.as_pair())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.handles.size_hint()
    }
}

impl<'a, T, U> ExactSizeIterator for Iter<'a, T, U>
where
    T: 'a,
    U: 'a,
{
}

/// An iterator over the keys of a `SplayTree<T, U>` in ascending order.
pub struct Keys<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    inner: Iter<'a, T, U>,
}

impl<'a, T, U> Keys<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    pub(super) fn new(inner: Iter<'a, T, U>) -> Self {
        Keys { inner }
    }
}

impl<'a, T, U> Iterator for Keys<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// An iterator over the values of a `SplayTree<T, U>` in ascending key order.
pub struct Values<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    inner: Iter<'a, T, U>,
}

impl<'a, T, U> Values<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    pub(super) fn new(inner: Iter<'a, T, U>) -> Self {
        Values { inner }
    }
}

impl<'a, T, U> Iterator for Values<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = &'a U;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// An owning iterator for `SplayTree<T, U>`.
///
/// This iterator traverses the elements of the tree in-order and yields owned entries. Each node
/// is released as soon as its entry is yielded.
pub struct IntoIter<T, U> {
    arena: Arena<Node<T, U>>,
    order: vec::IntoIter<Handle>,
}

impl<T, U> IntoIter<T, U> {
    pub(super) fn new(arena: Arena<Node<T, U>>, order: Vec<Handle>) -> Self {
        IntoIter {
            arena,
            order: order.into_iter(),
        }
    }
}

impl<T, U> Iterator for IntoIter<T, U> {
    type Item = (T, U);

    fn next(&mut self) -> Option<Self::Item> {
        let IntoIter { arena, order } = self;
        order.next().map(|handle| arena.free(handle).entry.into_pair())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<T, U> ExactSizeIterator for IntoIter<T, U> {}
