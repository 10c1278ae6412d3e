//! Todoterm - terminal to-do list
//!
//! Entry point: load configuration, initialize logging, set up the
//! terminal and run the event loop. The remote object store is the only
//! persistence layer; nothing is written locally except logs.

use todoterm::app::{logging, App, AppConfig};
use todoterm::error::Result;
use todoterm::infrastructure::store::RemoteStore;
use todoterm::presentation;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;
    logging::init_logging(&config.logging)?;

    let store = RemoteStore::new(config.store.base_url.as_str(), config.store.owner.as_str())?;
    tracing::info!(
        url = %config.store.base_url,
        owner = %config.store.owner,
        "Connecting to remote store"
    );

    presentation::install_panic_hook();
    let mut terminal = presentation::init()?;

    let result = App::new(store, &config.tui).run(&mut terminal).await;

    presentation::restore()?;
    result
}
