/// The error type for the operations of a [`LinkedSequence`][seq].
///
/// [seq]: crate::LinkedSequence
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceError {
    /// The operation needs at least one element, but the sequence is empty.
    ///
    /// Returned by `pop`, `front`, `front_mut`, `back` and `back_mut`.
    #[error("the sequence is empty")]
    Empty,

    /// The cursor does not designate a live element of this sequence.
    ///
    /// This happens when the cursor was issued by another sequence, when an
    /// element has been released (by `pop` or `clear`) since the cursor was
    /// issued, or when the end cursor is dereferenced.
    #[error("the cursor does not designate a live element of this sequence")]
    InvalidCursor,
}

/// A specialized `Result` type for sequence operations.
pub type Result<T> = std::result::Result<T, SequenceError>;
