//! Creature directory lookup: submit a name, run the fetch, render one view
//! per status. The final section tears the view down mid-flight to show the
//! guard dropping a late settlement.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use anyhow::Result;
use respite_core::{AsyncResource, AsyncState, Promise, Scope, on_unmount};

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

fn creature_view(
    name: &str,
    state: &AsyncState<Creature, LookupError>,
) -> Result<String, LookupError> {
    Ok(match state {
        AsyncState::Idle => "Submit a creature".to_string(),
        AsyncState::Pending => format!("Looking up {name}…"),
        AsyncState::Resolved(creature) => format!("#{:03} {}", creature.number, creature.name),
        AsyncState::Rejected(error) => return Err(error.clone()),
    })
}

/// Error-boundary stand-in: a rejected render falls back to a retry hint; the
/// next submission resets it.
fn render(name: &str, state: &AsyncState<Creature, LookupError>) -> String {
    creature_view(name, state)
        .unwrap_or_else(|error| format!("There was an error: {error} — submit another creature"))
}

fn main() -> Result<()> {
    env_logger::init();

    let app = Scope::new();
    let view = app.child();
    view.effect(|| {
        log::info!("mounted creature view");
        on_unmount(|| log::info!("unmounted creature view"))
    });

    let lookup = AsyncResource::<Creature, LookupError>::new(&view);
    let query = Rc::new(RefCell::new(String::new()));
    lookup.subscribe({
        let query = query.clone();
        move |state| println!("{}", render(&query.borrow(), state))
    });

    println!("{}", render(&query.borrow(), &lookup.state()));

    // Submit "pikachu"; the directory answers.
    *query.borrow_mut() = "pikachu".to_string();
    let op = Promise::pending();
    lookup.run(&op);
    op.resolve(Creature {
        name: "Pikachu".to_string(),
        number: 25,
    });

    // Submit a name the directory does not know.
    *query.borrow_mut() = "missingno".to_string();
    let op = Promise::pending();
    lookup.run(&op);
    op.reject(LookupError {
        message: "no creature named `missingno`".to_string(),
    });

    // Unmount while a lookup is still in flight: the late settlement is
    // dropped by the guard. No render, no panic, no transition.
    *query.borrow_mut() = "mew".to_string();
    let op = Promise::pending();
    lookup.run(&op);
    view.dispose();
    op.resolve(Creature {
        name: "Mew".to_string(),
        number: 151,
    });
    println!("after unmount the lookup is still `{}`", lookup.status());

    Ok(())
}
