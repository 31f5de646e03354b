//! Ticker actor: a dedicated thread that generates fixed-interval ticks.
//!
//! The scene loop blocks on these ticks. Delivery uses a small bounded
//! channel: when a tick is not consumed in time the next one is simply
//! dropped, so slow frames run late instead of queuing a catch-up burst.

use crossbeam_channel::{bounded, Receiver, Sender};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// A tick event sent at regular intervals.
#[derive(Debug, Clone, Copy)]
pub struct Tick {
    /// Tick ordinal (monotonically increasing).
    pub seq: u64,
    /// Time elapsed since the ticker was started.
    pub elapsed: Duration,
}

/// Fixed-interval tick generator on its own thread.
pub struct TickerActor {
    /// Handle to the ticker thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
    /// Receiver for tick events.
    tick_rx: Receiver<Tick>,
}

impl TickerActor {
    /// Spawn a ticker firing every `interval` (e.g. `1000 / frame_rate` ms).
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn(interval: Duration) -> Self {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        // Capacity 2: enough to hide scheduler jitter, small enough that a
        // stalled consumer drops ticks instead of bursting afterwards.
        let (tick_tx, tick_rx) = bounded(2);

        let handle = thread::Builder::new()
            .name("glyphgrid-ticker".to_string())
            .spawn(move || {
                Self::run_loop(&tick_tx, &shutdown_clone, interval);
            })
            .expect("Failed to spawn ticker thread");

        Self {
            handle: Some(handle),
            shutdown,
            tick_rx,
        }
    }

    /// Get a reference to the tick receiver.
    #[inline]
    pub const fn receiver(&self) -> &Receiver<Tick> {
        &self.tick_rx
    }

    /// Signal the ticker to shut down. No further ticks fire after the
    /// thread observes the flag.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Shut down and wait for the ticker thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    fn run_loop(tick_tx: &Sender<Tick>, shutdown: &Arc<AtomicBool>, interval: Duration) {
        let start = Instant::now();
        let mut seq = 0u64;
        let mut next_tick = start + interval;

        loop {
            if shutdown.load(Ordering::Relaxed) {
                break;
            }

            let now = Instant::now();
            if now >= next_tick {
                let tick = Tick {
                    seq,
                    elapsed: now - start,
                };

                // Non-blocking: a full buffer means the consumer is behind,
                // and this tick is dropped rather than queued.
                let _ = tick_tx.try_send(tick);

                seq += 1;
                next_tick += interval;

                // Overrun: reschedule from now, never replay missed ticks.
                if next_tick < now {
                    next_tick = now + interval;
                }
            } else {
                let sleep_duration = next_tick - now;
                thread::sleep(sleep_duration.min(Duration::from_millis(1)));
            }
        }
    }
}

impl Drop for TickerActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}
