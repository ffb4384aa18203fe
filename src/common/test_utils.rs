use std::sync::{
    atomic::{AtomicU32, Ordering},
    Arc,
};

#[derive(Debug, Default)]
pub(crate) struct Counters {
    value_created: AtomicU32,
    value_dropped: AtomicU32,
}

impl Counters {
    pub(crate) fn value_created(&self) -> u32 {
        self.value_created.load(Ordering::Acquire)
    }

    pub(crate) fn value_dropped(&self) -> u32 {
        self.value_dropped.load(Ordering::Acquire)
    }

    pub(crate) fn live(&self) -> u32 {
        self.value_created() - self.value_dropped()
    }

    fn incl_value_created(&self) {
        self.value_created.fetch_add(1, Ordering::AcqRel);
    }

    fn incl_value_dropped(&self) {
        self.value_dropped.fetch_add(1, Ordering::AcqRel);
    }
}

/// An element that reports its construction and destruction to `Counters`.
#[derive(Debug)]
pub(crate) struct Value {
    pub(crate) id: u32,
    counters: Arc<Counters>,
}

impl Value {
    pub(crate) fn new(id: u32, counters: &Arc<Counters>) -> Self {
        counters.incl_value_created();
        Self {
            id,
            counters: Arc::clone(counters),
        }
    }
}

impl Drop for Value {
    fn drop(&mut self) {
        self.counters.incl_value_dropped();
    }
}
