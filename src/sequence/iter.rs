use std::{fmt, iter::FusedIterator, marker::PhantomData};

use super::{LinkedSequence, Link, Node};

/// An iterator over the elements of a `LinkedSequence`, front to back.
///
/// This `struct` is created by [`LinkedSequence::iter`].
pub struct Iter<'a, T> {
    head: Link<T>,
    len: usize,
    marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(head: Link<T>, len: usize) -> Self {
        Self {
            head,
            len,
            marker: PhantomData,
        }
    }
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self::new(self.head, self.len)
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter")
            .field(&self.clone().collect::<Vec<_>>())
            .finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        self.head.map(|node| unsafe {
            // Need an unbound lifetime to get 'a
            let node = &*node.as_ptr();
            self.len -= 1;
            self.head = node.next;
            &node.element
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// A mutable iterator over the elements of a `LinkedSequence`, front to back.
///
/// This `struct` is created by [`LinkedSequence::iter_mut`].
pub struct IterMut<'a, T> {
    head: Link<T>,
    len: usize,
    marker: PhantomData<&'a mut Node<T>>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(head: Link<T>, len: usize) -> Self {
        Self {
            head,
            len,
            marker: PhantomData,
        }
    }
}

unsafe impl<T: Send> Send for IterMut<'_, T> {}
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The remaining elements have not been handed out yet.
        let remaining = Iter::new(self.head, self.len);
        f.debug_tuple("IterMut")
            .field(&remaining.collect::<Vec<_>>())
            .finish()
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        self.head.map(|node| unsafe {
            // Not creating new mutable (unique!) references overlapping `element`.
            let node = node.as_ptr();
            self.len -= 1;
            self.head = (*node).next;
            &mut (*node).element
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// An owning iterator over the elements of a `LinkedSequence`, front to back.
///
/// This `struct` is created by the [`into_iter`] method on
/// [`LinkedSequence`] (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: LinkedSequence::into_iter
pub struct IntoIter<T> {
    sequence: LinkedSequence<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(sequence: LinkedSequence<T>) -> Self {
        Self { sequence }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.sequence).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.sequence.pop_front_element()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.sequence.len, Some(self.sequence.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
