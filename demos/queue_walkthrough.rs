// Walks through the basic operations of `LinkedSequence`.
//
// Run with `RUST_LOG=debug cargo run --example queue_walkthrough --features logging`
// to also see the records the sequence emits.

use linked_sequence::{LinkedSequence, SequenceError};

fn show(q: &LinkedSequence<i32>) {
    println!("[{}] {q}", q.len());
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut q = LinkedSequence::new();
    q.push(10);
    q.push(11);
    q.push(7);
    show(&q);

    // Insert before the head.
    let it = q.begin();
    q.insert(it, 99)?;
    show(&q);

    // Insert at the end cursor appends.
    let it = q.end();
    q.insert(it, 199)?;
    show(&q);

    q.clear();
    show(&q);

    // The end cursor is still valid after `clear`.
    q.insert(it, 21)?;
    show(&q);

    // Advancing the end cursor keeps it at the end.
    let it = q.advance(it)?;
    q.insert(it, 22)?;
    show(&q);

    // Keep the cursor to the new element and insert in front of it.
    let it = q.insert(it, 23)?;
    show(&q);
    q.insert(it, 25)?;
    show(&q);

    // Draining the queue from the front.
    while let Ok(front) = q.pop() {
        println!("popped {front}");
    }

    match q.pop() {
        Err(SequenceError::Empty) => log::info!("The queue is drained"),
        other => anyhow::bail!("unexpected result from an empty queue: {other:?}"),
    }

    Ok(())
}
