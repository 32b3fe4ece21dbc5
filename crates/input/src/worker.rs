//! Background input worker.
//!
//! The worker blocks in `crossterm::event::poll` with a short timeout instead
//! of spinning. After every event and every timeout it expires stale keys and
//! publishes a fresh snapshot, so the frame loop only ever reads the latest
//! intents.

use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event};
use tracing::{debug, error, info};

use crate::map::should_quit;
use crate::shared::SharedIntents;
use crate::tracker::{KeyTracker, DEFAULT_KEY_RELEASE_TIMEOUT_MS};
use crate::types::Intents;

/// Default `event::poll` timeout in milliseconds
pub const DEFAULT_POLL_MS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerConfig {
    pub poll_interval: Duration,
    /// `None` when the terminal reports key releases
    pub release_timeout_ms: Option<u64>,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(DEFAULT_POLL_MS),
            release_timeout_ms: Some(DEFAULT_KEY_RELEASE_TIMEOUT_MS),
        }
    }
}

/// Where the worker reads terminal events from.
pub trait EventSource {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;
    fn read(&mut self) -> io::Result<Event>;
}

/// The process terminal, via crossterm's global event reader.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        event::read()
    }
}

/// Spawn the input worker thread on the process terminal.
pub fn spawn_input_worker(
    shared: Arc<SharedIntents>,
    config: WorkerConfig,
) -> io::Result<JoinHandle<()>> {
    spawn_input_worker_with(shared, config, TerminalEvents)
}

/// Spawn the input worker thread on an explicit event source.
///
/// The thread runs until quit is requested, either by a quit key or by the
/// frame loop. A read error is logged, clears every intent and requests quit:
/// with no input left the player could not otherwise leave the game.
pub fn spawn_input_worker_with<S>(
    shared: Arc<SharedIntents>,
    config: WorkerConfig,
    mut source: S,
) -> io::Result<JoinHandle<()>>
where
    S: EventSource + Send + 'static,
{
    thread::Builder::new()
        .name("input".to_string())
        .spawn(move || {
            info!(?config, "input worker started");
            if let Err(e) = run(&shared, config, &mut source) {
                error!(error = %e, "input worker failed");
                shared.store(Intents::NONE);
            }
            shared.request_quit();
            info!("input worker stopped");
        })
}

fn run<S: EventSource>(
    shared: &SharedIntents,
    config: WorkerConfig,
    source: &mut S,
) -> io::Result<()> {
    let start = Instant::now();
    let mut tracker = KeyTracker::with_release_timeout(config.release_timeout_ms);

    while !shared.quit_requested() {
        if source.poll(config.poll_interval)? {
            match source.read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        debug!("quit key pressed");
                        shared.request_quit();
                        break;
                    }
                    tracker.handle_event(key, now_ms(start));
                }
                Event::FocusLost => tracker.clear(),
                _ => {}
            }
        }

        tracker.expire(now_ms(start));
        shared.store(tracker.intents());
    }

    shared.store(tracker.intents());
    Ok(())
}

fn now_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
