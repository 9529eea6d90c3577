//! Two views sharing one counter through an explicit provider bag: a display
//! that re-renders on every change, and a button that bumps the count.

use anyhow::Result;
use respite_core::Providers;
use respite_store::CountStore;

fn count_display(providers: &Providers) -> Result<String> {
    let count = providers.get::<CountStore>()?;
    Ok(format!("The current count is {}", count.value()))
}

fn press_increment(providers: &Providers) -> Result<()> {
    providers.get::<CountStore>()?.increment();
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let providers = Providers::new().provide(CountStore::new());

    let count = providers.get::<CountStore>()?;
    count.subscribe(|value| println!("The current count is {value}"));

    println!("{}", count_display(&providers)?);
    for _ in 0..3 {
        press_increment(&providers)?;
    }

    // The same view outside the bag reports the miss instead of reading some
    // hidden global.
    if let Err(error) = count_display(&Providers::new()) {
        println!("{error}");
    }

    Ok(())
}
