//! Slot allocator that hands out copyable handles instead of references.

use std::mem;
use std::ops::{Index, IndexMut};
use std::vec::Vec;

/// A handle naming a single slot of an `Arena<T>`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Handle {
    index: usize,
}

enum Slot<T> {
    Occupied(T),
    Vacant(Option<Handle>),
}

/// A growable allocator for objects of a single type.
///
/// Objects are addressed by `Handle`, which is `Copy`, so several objects can refer to one another
/// without borrowing each other. Freed slots are threaded onto a free list and reused by later
/// allocations. The underlying container is a single `Vec` and no unsafe code is used.
///
/// # Examples
///
/// ```
/// use splay_collections::arena::Arena;
///
/// let mut arena = Arena::new();
///
/// let x = arena.allocate(1);
/// assert_eq!(arena[x], 1);
///
/// arena[x] += 1;
/// assert_eq!(arena[x], 2);
///
/// assert_eq!(arena.free(x), 2);
/// assert!(arena.is_empty());
/// ```
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    head: Option<Handle>,
    len: usize,
}

impl<T> Arena<T> {
    /// Constructs a new, empty `Arena<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::arena::Arena;
    ///
    /// let arena: Arena<u32> = Arena::new();
    /// ```
    pub fn new() -> Self {
        Arena {
            slots: Vec::new(),
            head: None,
            len: 0,
        }
    }

    /// Constructs a new, empty `Arena<T>` with room for `capacity` objects before it reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::arena::Arena;
    ///
    /// let arena: Arena<u32> = Arena::with_capacity(1024);
    /// assert!(arena.capacity() >= 1024);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Arena {
            slots: Vec::with_capacity(capacity),
            head: None,
            len: 0,
        }
    }

    /// Allocates an object in the arena and returns its handle. Vacant slots are reused before the
    /// arena grows.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::arena::Arena;
    ///
    /// let mut arena = Arena::new();
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.get(x), Some(&0));
    /// ```
    pub fn allocate(&mut self, value: T) -> Handle {
        self.len += 1;
        match self.head.take() {
            None => {
                self.slots.push(Slot::Occupied(value));
                Handle {
                    index: self.slots.len() - 1,
                }
            },
            Some(handle) => {
                let vacant_slot = mem::replace(&mut self.slots[handle.index], Slot::Occupied(value));
                match vacant_slot {
                    Slot::Vacant(next) => {
                        self.head = next;
                        handle
                    },
                    Slot::Occupied(_) => panic!("Expected a vacant slot on the free list."),
                }
            },
        }
    }

    /// Deallocates an object in the arena and returns it.
    ///
    /// # Panics
    ///
    /// Panics if `handle` refers to an out of bounds or vacant slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::arena::Arena;
    ///
    /// let mut arena = Arena::new();
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.free(x), 0);
    /// ```
    pub fn free(&mut self, handle: Handle) -> T {
        match self.slots.get(handle.index) {
            Some(Slot::Occupied(_)) => {},
            Some(Slot::Vacant(_)) => panic!("Error: attempting to free vacant slot."),
            None => panic!("Error: attempting to free invalid slot."),
        }
        match mem::replace(&mut self.slots[handle.index], Slot::Vacant(self.head)) {
            Slot::Occupied(value) => {
                self.len -= 1;
                self.head = Some(handle);
                value
            },
            Slot::Vacant(_) => unreachable!(),
        }
    }

    /// Returns an immutable reference to an object in the arena, or `None` if the handle does not
    /// refer to a live object.
    pub fn get(&self, handle: Handle) -> Option<&T> {
        match self.slots.get(handle.index) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns a mutable reference to an object in the arena, or `None` if the handle does not
    /// refer to a live object.
    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        match self.slots.get_mut(handle.index) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns the number of live objects in the arena.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the arena holds no live objects.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of objects the arena can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Drops every object in the arena. Previously issued handles become invalid.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.len = 0;
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<Handle> for Arena<T> {
    type Output = T;

    fn index(&self, handle: Handle) -> &Self::Output {
        self.get(handle).expect("Error: handle does not refer to a live object.")
    }
}

impl<T> IndexMut<Handle> for Arena<T> {
    fn index_mut(&mut self, handle: Handle) -> &mut Self::Output {
        self.get_mut(handle).expect("Error: handle does not refer to a live object.")
    }
}
