mod app;
mod backend;
mod dialog;
mod errors;
mod fs;
mod model;
mod navigation;
mod runtime;
mod terminal;
mod ui;
mod viewport;

use std::path::PathBuf;

use anyhow::Result;
use crossbeam_channel::unbounded;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_tracing();
    terminal::install_panic_hook();

    let (mut terminal, mut guard) = terminal::init_terminal()?;
    let height = terminal::current_height(&terminal)?;
    let mut app = app::App::bootstrap(PathBuf::from("."), height, fs::FsAdapter);
    let (event_tx, event_rx) = unbounded();
    let runtime_handle = runtime::spawn_event_pump(event_tx, runtime::TICK_RATE);

    terminal.draw(|frame| ui::render(frame, app.state()))?;

    while app.is_running() {
        let event = event_rx.recv()?;
        if app.on_event(event) {
            terminal.draw(|frame| ui::render(frame, app.state()))?;
        }
    }

    guard.restore()?;
    drop(event_rx);

    if runtime_handle.join().is_err() {
        debug!("event pump finished with panic");
    }

    info!("dualpane shutdown complete");
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
