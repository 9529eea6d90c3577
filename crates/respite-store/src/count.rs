use respite_core::{Signal, SubKey, signal};

/// Shared counter: one provider owns it, any number of views read, bump, and
/// observe it.
#[derive(Clone)]
pub struct CountStore {
    count: Signal<i64>,
}

impl CountStore {
    pub fn new() -> Self {
        Self { count: signal(0) }
    }

    pub fn value(&self) -> i64 {
        self.count.get()
    }

    pub fn increment(&self) {
        self.add(1);
    }

    pub fn add(&self, n: i64) {
        self.count.update(|c| *c += n);
    }

    pub fn subscribe(&self, f: impl Fn(&i64) + 'static) -> SubKey {
        self.count.subscribe(f)
    }

    pub fn unsubscribe(&self, key: SubKey) {
        self.count.unsubscribe(key);
    }
}

impl Default for CountStore {
    fn default() -> Self {
        Self::new()
    }
}
