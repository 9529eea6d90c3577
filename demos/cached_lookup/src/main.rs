//! Cache-first creature lookup. A cache hit resolves the view immediately
//! with no pending cycle; a miss runs the directory lookup and appends the
//! answer to the shared cache as it settles. The cache is provided once and
//! shared by every consumer, including the "previous lookups" list.

use std::fmt;

use anyhow::{Result, anyhow};
use respite_core::{AsyncResource, AsyncState, Promise, Providers, Scope};
use respite_store::CacheStore;

#[derive(Clone, Debug)]
struct Creature {
    name: String,
    number: u32,
}

#[derive(Clone, Debug)]
struct LookupError {
    message: String,
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

type CreatureCache = CacheStore<String, Creature>;

/// Cache-first lookup. Returns the in-flight promise on a miss so the caller
/// (playing host event loop) can settle it; `None` means the cache answered.
fn look_up(
    providers: &Providers,
    lookup: &AsyncResource<Creature, LookupError>,
    name: &str,
) -> Result<Option<Promise<Creature, LookupError>>> {
    let cache = providers.get::<CreatureCache>()?;
    if let Some(hit) = cache.get(&name.to_string()) {
        lookup.set_data(hit);
        return Ok(None);
    }

    let op: Promise<Creature, LookupError> = Promise::pending();
    // Registered before `run`, so the cache holds the answer by the time the
    // view sees it resolve.
    op.on_settle({
        let cache = cache.clone();
        let name = name.to_string();
        move |outcome| {
            if let Ok(creature) = outcome {
                cache.add(name, creature.clone());
            }
        }
    });
    lookup.run(&op);
    Ok(Some(op))
}

fn render(state: &AsyncState<Creature, LookupError>) -> String {
    match state {
        AsyncState::Idle => "Submit a creature".to_string(),
        AsyncState::Pending => "Looking it up…".to_string(),
        AsyncState::Resolved(creature) => format!("#{:03} {}", creature.number, creature.name),
        AsyncState::Rejected(error) => format!("There was an error: {error}"),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let providers = Providers::new().provide(CreatureCache::new());
    let app = Scope::new();

    let lookup = AsyncResource::<Creature, LookupError>::new(&app);
    lookup.subscribe(|state| println!("{}", render(state)));

    // First submission misses the cache and goes to the directory.
    let op = look_up(&providers, &lookup, "pikachu")?
        .ok_or_else(|| anyhow!("first lookup should miss the cache"))?;
    op.resolve(Creature {
        name: "Pikachu".to_string(),
        number: 25,
    });

    // Same key again: answered from the cache, no pending state in between.
    let hit = look_up(&providers, &lookup, "pikachu")?;
    anyhow::ensure!(hit.is_none(), "second lookup should be a cache hit");

    let op = look_up(&providers, &lookup, "bulbasaur")?
        .ok_or_else(|| anyhow!("new key should miss the cache"))?;
    op.resolve(Creature {
        name: "Bulbasaur".to_string(),
        number: 1,
    });

    let cache = providers.get::<CreatureCache>()?;
    let mut previous = cache.keys();
    previous.sort();
    println!("Previous lookups: {}", previous.join(", "));

    Ok(())
}
