use crate::arena::Handle;
use crate::entry::Entry;

/// A node of a splay tree. Children are owned by the tree's arena; `parent` is only ever used to
/// walk upwards and never keeps a node alive.
pub struct Node<T, U> {
    pub entry: Entry<T, U>,
    pub left: Option<Handle>,
    pub right: Option<Handle>,
    pub parent: Option<Handle>,
}

impl<T, U> Node<T, U> {
    pub fn new(key: T, value: U) -> Self {
        Node {
            entry: Entry::new(key, value),
            left: None,
            right: None,
            parent: None,
        }
    }

    pub fn with_parent(key: T, value: U, parent: Handle) -> Self {
        Node {
            parent: Some(parent),
            ..Node::new(key, value)
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
