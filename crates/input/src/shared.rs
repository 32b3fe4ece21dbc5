//! Lock-free intent snapshot shared between the input worker and the frame loop.
//!
//! All four intents live in one `AtomicU8`, so a reader always sees a set of
//! flags that the worker published together. Quit is a separate flag.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use crate::types::Intents;

#[derive(Debug, Default)]
pub struct SharedIntents {
    bits: AtomicU8,
    quit: AtomicBool,
}

impl SharedIntents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a full snapshot (last write wins).
    pub fn store(&self, intents: Intents) {
        self.bits.store(intents.bits(), Ordering::Release);
    }

    pub fn load(&self) -> Intents {
        Intents::from_bits(self.bits.load(Ordering::Acquire))
    }

    pub fn request_quit(&self) {
        self.quit.store(true, Ordering::Release);
    }

    pub fn quit_requested(&self) -> bool {
        self.quit.load(Ordering::Acquire)
    }
}
