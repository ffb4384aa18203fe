#![cfg(feature = "unstable-debug-counters")]

use crossbeam_utils::atomic::AtomicCell;
use once_cell::sync::Lazy;

/// A snapshot of the process-wide node counters.
///
/// `node_creation_count - node_drop_count` is the number of nodes currently
/// linked in some sequence.
#[derive(Clone, Debug)]
pub struct GlobalDebugCounters {
    pub node_creation_count: u64,
    pub node_drop_count: u64,
}

impl GlobalDebugCounters {
    pub fn current() -> Self {
        InternalGlobalDebugCounters::current()
    }
}

static COUNTERS: Lazy<InternalGlobalDebugCounters> =
    Lazy::new(InternalGlobalDebugCounters::default);

#[derive(Default)]
pub(crate) struct InternalGlobalDebugCounters {
    node_creation_count: AtomicCell<u64>,
    node_drop_count: AtomicCell<u64>,
}

impl InternalGlobalDebugCounters {
    fn current() -> GlobalDebugCounters {
        let c = &COUNTERS;
        GlobalDebugCounters {
            node_creation_count: c.node_creation_count.load(),
            node_drop_count: c.node_drop_count.load(),
        }
    }

    pub(crate) fn node_created() {
        COUNTERS.node_creation_count.fetch_add(1);
    }

    pub(crate) fn node_dropped() {
        COUNTERS.node_drop_count.fetch_add(1);
    }
}
