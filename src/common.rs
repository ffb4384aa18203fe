use crossbeam_utils::atomic::AtomicCell;

pub(crate) mod error;

#[cfg(feature = "unstable-debug-counters")]
pub(crate) mod debug_counters;

#[cfg(test)]
pub(crate) mod test_utils;

static NEXT_SEQUENCE_ID: AtomicCell<u64> = AtomicCell::new(0);

/// Process-unique identity of a `LinkedSequence`.
///
/// Cursors remember the identity of the sequence that issued them, so a
/// sequence can tell its own cursors apart from foreign ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct SequenceId(u64);

impl SequenceId {
    pub(crate) fn next() -> Self {
        Self(NEXT_SEQUENCE_ID.fetch_add(1))
    }
}
