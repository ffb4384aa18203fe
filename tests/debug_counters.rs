#![cfg(feature = "unstable-debug-counters")]

use linked_sequence::{GlobalDebugCounters, LinkedSequence};

fn live_nodes() -> u64 {
    let c = GlobalDebugCounters::current();
    c.node_creation_count - c.node_drop_count
}

// The counters are process-wide, so everything is checked from a single test.
#[test]
fn nodes_are_released() {
    let baseline = live_nodes();

    let mut seq: LinkedSequence<u32> = (0..100).collect();
    let begin = seq.begin();
    seq.insert(begin, 1000).unwrap();
    assert_eq!(live_nodes(), baseline + 101);

    seq.pop().unwrap();
    seq.pop().unwrap();
    assert_eq!(live_nodes(), baseline + 99);

    let mut other: LinkedSequence<u32> = (0..10).collect();
    seq.swap(&mut other);
    assert_eq!(live_nodes(), baseline + 109);

    seq.clear();
    assert_eq!(live_nodes(), baseline + 99);

    let mut iter = other.into_iter();
    iter.next();
    std::mem::drop(iter);
    assert_eq!(live_nodes(), baseline);
}
