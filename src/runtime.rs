use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::Sender;
use crossterm::event::{self, Event as CrosstermEvent, KeyEventKind};
use tracing::warn;

use crate::model::Event;

pub const TICK_RATE: Duration = Duration::from_millis(150);

/// Reads the terminal on a helper thread. Only key presses, resizes and ticks
/// are forwarded; all state changes happen on the receiving side, one event
/// at a time. The thread exits once the receiver is dropped.
pub fn spawn_event_pump(tx: Sender<Event>, tick_rate: Duration) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut last_tick = Instant::now();

        loop {
            let timeout = tick_rate.saturating_sub(last_tick.elapsed());
            let forwarded = match event::poll(timeout) {
                Ok(true) => match event::read() {
                    Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                        Some(Event::Input(key))
                    }
                    Ok(CrosstermEvent::Resize(_, height)) => Some(Event::Resize { height }),
                    Ok(_) => None,
                    Err(err) => {
                        warn!("failed to read terminal event: {err}");
                        None
                    }
                },
                Ok(false) => None,
                Err(err) => {
                    warn!("failed to poll terminal event: {err}");
                    None
                }
            };

            if let Some(event) = forwarded {
                if tx.send(event).is_err() {
                    break;
                }
            }

            if last_tick.elapsed() >= tick_rate {
                if tx.send(Event::Tick).is_err() {
                    break;
                }
                last_tick = Instant::now();
            }
        }
    })
}
