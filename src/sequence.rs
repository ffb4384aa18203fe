// License and Copyright Notice:
//
// Some of the code and doc comments in this module were copied from
// `std::collections::LinkedList` in the Rust standard library.
// https://github.com/rust-lang/rust/blob/master/src/liballoc/collections/linked_list.rs
//
// The original code/comments from LinkedList are dual-licensed under
// the Apache License, Version 2.0 <https://github.com/rust-lang/rust/blob/master/LICENSE-APACHE>
// or the MIT license <https://github.com/rust-lang/rust/blob/master/LICENSE-MIT>
//
// Copyrights of the original code/comments are retained by their contributors.
// For full authorship information, see the version control history of
// https://github.com/rust-lang/rust/ or https://thanks.rust-lang.org

//! Provides [`LinkedSequence`], a FIFO-oriented doubly linked sequence.

mod cursor;
mod fmt;
mod iter;

use std::{
    collections::HashSet,
    hash::{Hash, Hasher},
    marker::PhantomData,
    ptr::NonNull,
};

use crate::common::{
    error::{Result, SequenceError},
    SequenceId,
};

#[cfg(feature = "unstable-debug-counters")]
use crate::common::debug_counters::InternalGlobalDebugCounters;

pub use cursor::Cursor;
pub use iter::{IntoIter, Iter, IterMut};

use cursor::Position;

/// A link between two nodes.
///
/// A `next` link (and the sequence's `head`) owns the node it points to. A
/// `prev` link (and the sequence's `tail`) only observes it and is never used
/// to release a node.
type Link<T> = Option<NonNull<Node<T>>>;

pub(crate) struct Node<T> {
    next: Link<T>,
    prev: Link<T>,
    // Unique within the owning sequence and never reused.
    serial: u64,
    element: T,
}

impl<T> Node<T> {
    fn new(prev: Link<T>, next: Link<T>, serial: u64, element: T) -> Box<Self> {
        #[cfg(feature = "unstable-debug-counters")]
        InternalGlobalDebugCounters::node_created();

        Box::new(Self {
            next,
            prev,
            serial,
            element,
        })
    }

    /// Takes back the ownership of a node that has already been unlinked and
    /// returns its element.
    ///
    /// # Safety
    ///
    /// `node` must come from `Node::new` and nothing may refer to it anymore.
    unsafe fn release(node: NonNull<Self>) -> T {
        #[cfg(feature = "unstable-debug-counters")]
        InternalGlobalDebugCounters::node_dropped();

        Box::from_raw(node.as_ptr()).element
    }
}

/// A doubly linked sequence with FIFO-oriented operations, checked cursors and
/// O(1) insertion before any cursor.
///
/// Every node is owned by exactly one owner: the sequence owns the head node
/// and each node owns its successor. Backward links and the tail link only
/// observe nodes, so there are no reference cycles and dropping the sequence
/// releases the whole chain.
///
/// # Cursors
///
/// [`Cursor`]s designate a position in the sequence without borrowing it, so
/// they can be kept across mutations. A cursor stays valid for as long as the
/// element it designates is in the sequence: it is invalidated only when that
/// element is released (by [`pop`](#method.pop) or [`clear`](#method.clear)).
/// Cursors to released elements and foreign cursors are rejected with
/// [`SequenceError::InvalidCursor`]. The end cursor is always valid.
///
/// # Example
///
/// ```rust
/// use linked_sequence::LinkedSequence;
///
/// let mut seq = LinkedSequence::new();
/// seq.push(10);
/// seq.push(11);
/// seq.push(7);
///
/// let begin = seq.begin();
/// seq.insert(begin, 99).unwrap();
/// assert_eq!(seq.to_string(), "99 <- 10 <- 11 <- 7");
///
/// let end = seq.end();
/// seq.insert(end, 199).unwrap();
/// assert_eq!(seq.len(), 5);
/// assert_eq!(seq.back(), Ok(&199));
///
/// assert_eq!(seq.pop(), Ok(99));
/// assert_eq!(seq.front(), Ok(&10));
/// ```
pub struct LinkedSequence<T> {
    id: SequenceId,
    // Serials of the linked nodes. A cursor is dereferenced only while its
    // serial is in here, so it never reaches a released node.
    live: HashSet<u64>,
    next_serial: u64,
    len: usize,
    head: Link<T>,
    tail: Link<T>,
    marker: PhantomData<Box<Node<T>>>,
}

// The sequence owns its `T`s like a `Box` would.
unsafe impl<T: Send> Send for LinkedSequence<T> {}
unsafe impl<T: Sync> Sync for LinkedSequence<T> {}

impl<T> Drop for LinkedSequence<T> {
    fn drop(&mut self) {
        self.release_all();
    }
}

impl<T> Default for LinkedSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedSequence<T> {
    /// Constructs an empty sequence.
    pub fn new() -> Self {
        Self {
            id: SequenceId::next(),
            live: HashSet::new(),
            next_serial: 0,
            len: 0,
            head: None,
            tail: None,
            marker: PhantomData,
        }
    }

    /// Returns the number of elements in the sequence.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the sequence contains no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends `value` after the current back element and returns a cursor to
    /// it.
    pub fn push(&mut self, value: T) -> Cursor<T> {
        let node = self.splice(self.tail, None, value);
        self.cursor_at(node)
    }

    /// Removes the front element and returns it.
    ///
    /// Cursors to the removed element become invalid. Cursors to the remaining
    /// elements stay valid.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Empty`] if the sequence has no elements.
    pub fn pop(&mut self) -> Result<T> {
        match self.pop_front_element() {
            Some(element) => Ok(element),
            None => Err(self.reject("pop", SequenceError::Empty)),
        }
    }

    /// Returns a reference to the front element.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Empty`] if the sequence has no elements.
    pub fn front(&self) -> Result<&T> {
        match self.head {
            Some(node) => Ok(unsafe { &(*node.as_ptr()).element }),
            None => Err(self.reject("front", SequenceError::Empty)),
        }
    }

    /// Returns a mutable reference to the front element.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Empty`] if the sequence has no elements.
    pub fn front_mut(&mut self) -> Result<&mut T> {
        match self.head {
            Some(node) => Ok(unsafe { &mut (*node.as_ptr()).element }),
            None => Err(self.reject("front_mut", SequenceError::Empty)),
        }
    }

    /// Returns a reference to the back element.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Empty`] if the sequence has no elements.
    pub fn back(&self) -> Result<&T> {
        match self.tail {
            Some(node) => Ok(unsafe { &(*node.as_ptr()).element }),
            None => Err(self.reject("back", SequenceError::Empty)),
        }
    }

    /// Returns a mutable reference to the back element.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Empty`] if the sequence has no elements.
    pub fn back_mut(&mut self) -> Result<&mut T> {
        match self.tail {
            Some(node) => Ok(unsafe { &mut (*node.as_ptr()).element }),
            None => Err(self.reject("back_mut", SequenceError::Empty)),
        }
    }

    /// Returns a cursor to the front element, or the end cursor if the sequence
    /// is empty.
    pub fn begin(&self) -> Cursor<T> {
        match self.head {
            Some(node) => self.cursor_at(node),
            None => Cursor::end(),
        }
    }

    /// Returns the end cursor, the position one past the back element.
    pub fn end(&self) -> Cursor<T> {
        Cursor::end()
    }

    /// Inserts `value` immediately before the element designated by `position`
    /// and returns a cursor to the new element.
    ///
    /// Inserting at the end cursor appends, like [`push`](#method.push). This
    /// is the only way `insert` can populate an empty sequence. Existing
    /// cursors stay valid.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidCursor`] if `position` was not issued by
    /// this sequence or designates an element that has been released.
    pub fn insert(&mut self, position: Cursor<T>, value: T) -> Result<Cursor<T>> {
        let (prev, next) = match self.resolve(position, "insert")? {
            Some(node) => (unsafe { (*node.as_ptr()).prev }, Some(node)),
            None => (self.tail, None),
        };
        let node = self.splice(prev, next, value);
        Ok(self.cursor_at(node))
    }

    /// Returns a cursor to the element after the one designated by `cursor`,
    /// or the end cursor if there is none. Advancing the end cursor returns
    /// the end cursor.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidCursor`] if `cursor` was not issued by
    /// this sequence or designates an element that has been released.
    pub fn advance(&self, cursor: Cursor<T>) -> Result<Cursor<T>> {
        let next = match self.resolve(cursor, "advance")? {
            Some(node) => unsafe { (*node.as_ptr()).next },
            None => None,
        };
        Ok(match next {
            Some(node) => self.cursor_at(node),
            None => Cursor::end(),
        })
    }

    /// Returns a reference to the element designated by `cursor`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidCursor`] if `cursor` is the end cursor,
    /// was not issued by this sequence or designates a released element.
    pub fn get(&self, cursor: Cursor<T>) -> Result<&T> {
        match self.resolve(cursor, "get")? {
            Some(node) => Ok(unsafe { &(*node.as_ptr()).element }),
            None => Err(self.reject("get", SequenceError::InvalidCursor)),
        }
    }

    /// Returns a mutable reference to the element designated by `cursor`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidCursor`] if `cursor` is the end cursor,
    /// was not issued by this sequence or designates a released element.
    pub fn get_mut(&mut self, cursor: Cursor<T>) -> Result<&mut T> {
        match self.resolve(cursor, "get_mut")? {
            Some(node) => Ok(unsafe { &mut (*node.as_ptr()).element }),
            None => Err(self.reject("get_mut", SequenceError::InvalidCursor)),
        }
    }

    /// Exchanges the contents of two sequences.
    ///
    /// Head, tail and length move together, and so do the identity and live
    /// set cursors are checked against: a cursor keeps designating the same
    /// element, now owned by the other sequence.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Removes all elements.
    ///
    /// Every cursor issued so far, other than the end cursor, becomes invalid.
    pub fn clear(&mut self) {
        #[cfg(feature = "logging")]
        log::trace!("Releasing {} element(s) from sequence {:?}", self.len, self.id);

        self.release_all();
    }

    /// Returns `true` if the sequence contains an element equal to `x`.
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|e| e == x)
    }

    /// Returns an iterator over the elements, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head, self.len)
    }

    /// Returns an iterator over mutable references to the elements, front to
    /// back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.head, self.len)
    }
}

// Private function/methods
impl<T> LinkedSequence<T> {
    /// Links a new node holding `element` between `prev` and `next`.
    ///
    /// `prev` and `next` must be adjacent in this sequence. `None` stands for
    /// the front (for `prev`) or the back (for `next`) boundary.
    fn splice(&mut self, prev: Link<T>, next: Link<T>, element: T) -> NonNull<Node<T>> {
        let serial = self.next_serial;
        self.next_serial += 1;
        self.live.insert(serial);

        let node = NonNull::from(Box::leak(Node::new(prev, next, serial, element)));

        // Not creating new mutable (unique!) references overlapping `element`.
        unsafe {
            match prev {
                Some(prev) => (*prev.as_ptr()).next = Some(node),
                None => self.head = Some(node),
            }
            match next {
                Some(next) => (*next.as_ptr()).prev = Some(node),
                None => self.tail = Some(node),
            }
        }

        self.len += 1;
        node
    }

    /// Unlinks the front node and returns its element.
    fn pop_front_element(&mut self) -> Option<T> {
        self.head.map(|node| unsafe {
            self.head = (*node.as_ptr()).next;

            match self.head {
                None => self.tail = None,
                Some(head) => (*head.as_ptr()).prev = None,
            }

            self.len -= 1;
            self.live.remove(&(*node.as_ptr()).serial);
            Node::release(node)
        })
    }

    fn release_all(&mut self) {
        struct DropGuard<'a, T>(&'a mut LinkedSequence<T>);

        impl<'a, T> Drop for DropGuard<'a, T> {
            fn drop(&mut self) {
                // Continue the same loop we do below. This only runs when a destructor has
                // panicked. If another one panics this will abort.
                while self.0.pop_front_element().is_some() {}
            }
        }

        while let Some(element) = self.pop_front_element() {
            let guard = DropGuard(self);
            drop(element);
            std::mem::forget(guard);
        }
    }

    fn cursor_at(&self, node: NonNull<Node<T>>) -> Cursor<T> {
        let serial = unsafe { (*node.as_ptr()).serial };
        Cursor::at(node, self.id, serial)
    }

    /// Checks that `cursor` may be dereferenced by this sequence and returns
    /// its node, or `None` for the end cursor.
    fn resolve(&self, cursor: Cursor<T>, op: &'static str) -> Result<Link<T>> {
        match cursor.position {
            Position::End => Ok(None),
            Position::At { node, owner, serial }
                if owner == self.id && self.live.contains(&serial) =>
            {
                Ok(Some(node))
            }
            Position::At { .. } => Err(self.reject(op, SequenceError::InvalidCursor)),
        }
    }

    fn reject(&self, op: &'static str, error: SequenceError) -> SequenceError {
        #[cfg(feature = "logging")]
        log::debug!("Sequence {:?} rejected {op}: {error}", self.id);

        #[cfg(not(feature = "logging"))]
        let _ = op;

        error
    }
}

impl<T: Clone> Clone for LinkedSequence<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for LinkedSequence<T> {}

impl<T: Hash> Hash for LinkedSequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T> FromIterator<T> for LinkedSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Self::new();
        seq.extend(iter);
        seq
    }
}

impl<T> Extend<T> for LinkedSequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push(element);
        }
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for LinkedSequence<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> IntoIterator for LinkedSequence<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedSequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedSequence<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
