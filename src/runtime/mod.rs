//! Startup orchestration for the binary: settings, logging, collaborator
//! wiring, the initial library load and the first listing.

use std::env;
use std::path::Path;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::console::Console;

mod settings;
mod startup;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Settings come first: the log filter is itself a setting.
    let settings = settings::load_settings();
    init_tracing(&settings.log.filter);

    let folder = env::args()
        .nth(1)
        .unwrap_or_else(|| settings.library.folder.clone());

    let mut organizer = startup::build_organizer(&settings);
    let count = organizer.load_library(Path::new(&folder), &settings.library.extension);
    tracing::info!("loaded {count} tracks from {folder}");

    let console = Console::new(settings.display.clone());
    println!("{}", console.library_loaded(count));
    println!();
    println!("{}", console.listing(&organizer));

    Ok(())
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
