//! Terminal FPS runner (default binary).
//!
//! Runs the frame loop: sample intents, advance the world, render the frame,
//! flush it to the terminal. There is no frame cap. Quit with `q`, `Esc` or Ctrl-C.

use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info, warn};

use tui_fps::config::Config;
use tui_fps::core::{FrameClock, FrameStats, Map, World};
use tui_fps::input::{spawn_input_worker, SharedIntents};
use tui_fps::logging;
use tui_fps::term::{FrameBuffer, FrameSink, FrameView, Hud, TerminalRenderer};
use tui_fps::types::Pose;

fn main() -> Result<()> {
    let config = Config::from_env();
    let _log_guard = logging::init(&config)?;
    info!(?config, "starting");

    let map = Map::level()?;
    let mut world = World::new(map, Pose::start());

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut world, &config);

    // Always try to restore terminal state.
    if let Err(e) = term.exit() {
        warn!(error = %e, "terminal restore failed");
    }
    if let Err(e) = &result {
        warn!(error = %e, "frame loop ended with error");
    }
    result
}

fn run(term: &mut TerminalRenderer, world: &mut World, config: &Config) -> Result<()> {
    let shared = Arc::new(SharedIntents::new());
    let worker = spawn_input_worker(
        Arc::clone(&shared),
        config.worker_config(term.key_release_events()),
    )?;

    let view = FrameView::default();
    let mut fb = FrameBuffer::new(view.width(), view.height());
    let mut clock = FrameClock::new();
    let mut stats = FrameStats::new(1.0);
    let mut sink_failing = false;

    while !shared.quit_requested() {
        let frame = clock.tick();
        let intents = shared.load();
        let pose = world.advance(frame.elapsed, intents);

        view.render_into(world, Hud { fps: frame.fps }, &mut fb);

        match term.present(&mut fb) {
            Ok(()) => sink_failing = false,
            Err(e) => {
                if !sink_failing {
                    warn!(error = %e, "frame flush failed");
                }
                sink_failing = true;
            }
        }

        if let Some((frames, fps)) = stats.record(frame.elapsed) {
            debug!(frames, fps, x = pose.x, y = pose.y, angle = pose.angle, "frame stats");
        }
    }

    shared.request_quit();
    if worker.join().is_err() {
        warn!("input worker panicked");
    }
    info!(x = world.pose().x, y = world.pose().y, "quit");
    Ok(())
}
