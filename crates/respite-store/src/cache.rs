//! Append-only result cache keyed by request identity.
//!
//! The cache state is an `Rc`'d map snapshot: every `add` reduces to a fresh
//! snapshot, so a handle taken earlier keeps observing exactly the contents
//! it saw. Entries are never evicted and never removed; the single-threaded
//! host loop is the only write serialization needed.

use std::collections::HashMap;
use std::hash::Hash;
use std::marker::PhantomData;
use std::rc::Rc;

use respite_core::{StateHolder, Store, SubKey};

pub enum CacheEvent<K, V> {
    Add { key: K, value: V },
}

pub struct CacheReducer<K, V>(PhantomData<(K, V)>);

impl<K, V> StateHolder for CacheReducer<K, V>
where
    K: Eq + Hash + Clone + 'static,
    V: Clone + 'static,
{
    type State = Rc<HashMap<K, V>>;
    type Event = CacheEvent<K, V>;

    fn initial_state() -> Self::State {
        Rc::new(HashMap::new())
    }

    fn reduce(state: &Self::State, event: Self::Event) -> Self::State {
        match event {
            CacheEvent::Add { key, value } => {
                if state.contains_key(&key) {
                    log::debug!("cache: key re-added; keeping the newer value");
                }
                let mut next = (**state).clone();
                next.insert(key, value);
                Rc::new(next)
            }
        }
    }
}

pub struct CacheStore<K, V>
where
    K: Eq + Hash + Clone + 'static,
    V: Clone + 'static,
{
    store: Store<CacheReducer<K, V>>,
}

impl<K, V> CacheStore<K, V>
where
    K: Eq + Hash + Clone + 'static,
    V: Clone + 'static,
{
    pub fn new() -> Self {
        Self { store: Store::new() }
    }

    pub fn get(&self, key: &K) -> Option<V> {
        self.store.signal().with(|map| map.get(key).cloned())
    }

    pub fn add(&self, key: K, value: V) {
        self.store.dispatch(CacheEvent::Add { key, value });
    }

    /// The current contents as a shared snapshot; later `add`s do not show
    /// up through it.
    pub fn snapshot(&self) -> Rc<HashMap<K, V>> {
        self.store.state()
    }

    pub fn keys(&self) -> Vec<K> {
        self.store.signal().with(|map| map.keys().cloned().collect())
    }

    pub fn len(&self) -> usize {
        self.store.signal().with(|map| map.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn subscribe(&self, f: impl Fn(&Rc<HashMap<K, V>>) + 'static) -> SubKey {
        self.store.subscribe(f)
    }

    pub fn unsubscribe(&self, key: SubKey) {
        self.store.unsubscribe(key);
    }
}

impl<K, V> Clone for CacheStore<K, V>
where
    K: Eq + Hash + Clone + 'static,
    V: Clone + 'static,
{
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<K, V> Default for CacheStore<K, V>
where
    K: Eq + Hash + Clone + 'static,
    V: Clone + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
