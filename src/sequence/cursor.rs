use std::{fmt, ptr::NonNull};

use super::Node;
use crate::common::SequenceId;

/// A position in a [`LinkedSequence`][seq]: either an element, or the end
/// position one past the back element.
///
/// A cursor does not borrow the sequence that issued it, so it can be kept
/// while the sequence is mutated. It is only dereferenced and advanced through
/// that sequence (see [`get`][get], [`advance`][advance] and
/// [`insert`][insert]), which checks that it is still valid.
///
/// Two cursors are equal when they designate the same element. All end cursors
/// are equal to each other, and the default cursor is the end cursor.
///
/// [seq]: crate::LinkedSequence
/// [get]: crate::LinkedSequence::get
/// [advance]: crate::LinkedSequence::advance
/// [insert]: crate::LinkedSequence::insert
pub struct Cursor<T> {
    pub(crate) position: Position<T>,
}

pub(crate) enum Position<T> {
    At {
        node: NonNull<Node<T>>,
        owner: SequenceId,
        serial: u64,
    },
    End,
}

// A cursor is a plain token. Accessing the element it designates always goes
// through the owning sequence.
unsafe impl<T: Send> Send for Cursor<T> {}
unsafe impl<T: Sync> Sync for Cursor<T> {}

impl<T> Cursor<T> {
    /// Returns the end cursor.
    pub const fn end() -> Self {
        Self {
            position: Position::End,
        }
    }

    /// Returns `true` if this is the end cursor.
    pub fn is_end(&self) -> bool {
        matches!(self.position, Position::End)
    }

    pub(crate) fn at(node: NonNull<Node<T>>, owner: SequenceId, serial: u64) -> Self {
        Self {
            position: Position::At { node, owner, serial },
        }
    }

    // `(owner, serial)` names a single node, even after the node is released
    // and its address reused.
    fn key(&self) -> Option<(SequenceId, u64)> {
        match self.position {
            Position::At { owner, serial, .. } => Some((owner, serial)),
            Position::End => None,
        }
    }
}

impl<T> Clone for Position<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Position<T> {}

impl<T> Clone for Cursor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<T> {}

impl<T> Default for Cursor<T> {
    fn default() -> Self {
        Self::end()
    }
}

impl<T> PartialEq for Cursor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<T> Eq for Cursor<T> {}

impl<T> fmt::Debug for Cursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Position::At { node, serial, .. } => f
                .debug_struct("Cursor")
                .field("node", &node)
                .field("serial", &serial)
                .finish(),
            Position::End => f.write_str("Cursor(End)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Cursor;
    use crate::LinkedSequence;

    #[test]
    fn end_cursors_are_equal() {
        let a: Cursor<u32> = Cursor::end();
        let b: Cursor<u32> = Cursor::default();
        assert_eq!(a, b);
        assert!(a.is_end());
        assert_eq!(format!("{a:?}"), "Cursor(End)");
    }

    #[test]
    fn equality_is_node_identity() {
        let mut seq = LinkedSequence::new();
        let a = seq.push(1);
        let b = seq.push(1);

        assert_ne!(a, b);
        assert_eq!(seq.begin(), a);
        assert_eq!(seq.advance(a).unwrap(), b);
        assert_ne!(a, Cursor::end());
        assert!(!a.is_end());

        // Copies designate the same element.
        let c = a;
        assert_eq!(a, c);
    }

    #[test]
    fn released_cursor_differs_from_later_ones() {
        let mut seq = LinkedSequence::new();
        let stale = seq.push(1);
        seq.pop().unwrap();

        // The new node may reuse the released allocation.
        let fresh = seq.push(2);
        assert_ne!(stale, fresh);
        assert_eq!(seq.begin(), fresh);
        assert!(seq.get(stale).is_err());
        assert_eq!(seq.get(fresh), Ok(&2));
    }

    #[test]
    fn cursors_of_different_sequences_differ() {
        let mut a = LinkedSequence::new();
        let mut b = LinkedSequence::new();
        assert_ne!(a.push(1), b.push(1));
    }
}
