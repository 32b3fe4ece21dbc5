//! Input diagnostic: shows the live intent snapshot the game would see.
//!
//! Useful for checking whether a terminal reports key releases and how the
//! release timeout feels. Quit with `q`, `Esc` or Ctrl-C.

use std::io::{self, Write};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use crossterm::{cursor, style::Print, terminal, QueueableCommand};

use tui_fps::config::Config;
use tui_fps::input::{spawn_input_worker, SharedIntents};
use tui_fps::logging;
use tui_fps::term::TerminalRenderer;
use tui_fps::types::Key;

fn main() -> Result<()> {
    let config = Config::from_env();
    let _log_guard = logging::init(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;
    let result = run(&term, &config);
    let _ = term.exit();
    result
}

fn run(term: &TerminalRenderer, config: &Config) -> Result<()> {
    let shared = Arc::new(SharedIntents::new());
    let worker = spawn_input_worker(
        Arc::clone(&shared),
        config.worker_config(term.key_release_events()),
    )?;

    let mut out = io::stdout();
    while !shared.quit_requested() {
        let intents = shared.load();

        out.queue(terminal::Clear(terminal::ClearType::All))?;
        out.queue(cursor::MoveTo(0, 0))?;
        out.queue(Print(format!(
            "key release events: {}",
            if term.key_release_events() { "yes" } else { "no (timeout)" }
        )))?;
        for (i, key) in Key::ALL.iter().enumerate() {
            out.queue(cursor::MoveTo(0, 2 + i as u16))?;
            out.queue(Print(format!(
                "{:<10} {}",
                key.as_str(),
                if intents.get(*key) { "DOWN" } else { "-" }
            )))?;
        }
        out.queue(cursor::MoveTo(0, 7))?;
        out.queue(Print("q / Esc / Ctrl-C to quit"))?;
        out.flush()?;

        thread::sleep(Duration::from_millis(33));
    }

    let _ = worker.join();
    Ok(())
}
