// playback.rs - Timed generation ticks on a tokio runtime
//
// The ticker task never touches the grid. It only sends a tick message and
// wakes the UI, which performs the step itself, so every read and write of
// the grid happens on the UI thread.

use std::time::Duration;

use log::debug;
use tokio::runtime::Runtime;
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{mpsc, watch};

/// Slowest playback speed.
pub const MIN_SPEED: u32 = 1;
/// Fastest playback speed.
pub const MAX_SPEED: u32 = 15;
/// Speed used when none is configured.
pub const DEFAULT_SPEED: u32 = 6;

/// Delay between generations at `speed` (clamped to the supported range).
pub fn tick_interval(speed: u32) -> Duration {
    Duration::from_millis(3000 / u64::from(speed.clamp(MIN_SPEED, MAX_SPEED)))
}

/// Play/pause state plus the pending tick, if any.
///
/// At most one tick is ever pending. If the UI falls behind, later ticks are
/// dropped rather than queued, so it never runs a backlog of generations in
/// one frame.
pub struct Playback {
    playing: watch::Sender<bool>,
    speed: watch::Sender<u32>,
    ticks: mpsc::Receiver<()>,
    // dropped last so the ticker task is shut down with the runtime
    _runtime: Runtime,
}

impl Playback {
    /// Spawns the ticker on `runtime`, initially paused. `wake` is called
    /// after every tick so the UI can come and collect it.
    pub fn spawn<W>(runtime: Runtime, speed: u32, wake: W) -> Self
    where
        W: Fn() + Send + 'static,
    {
        let (playing, playing_rx) = watch::channel(false);
        let (speed, speed_rx) = watch::channel(speed.clamp(MIN_SPEED, MAX_SPEED));
        let (tick_tx, ticks) = mpsc::channel(1);
        runtime.spawn(run_ticker(playing_rx, speed_rx, tick_tx, wake));
        Self {
            playing,
            speed,
            ticks,
            _runtime: runtime,
        }
    }

    pub fn is_playing(&self) -> bool {
        *self.playing.borrow()
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.playing.send_replace(playing);
        if !playing {
            // a tick left over from before the pause is stale
            let _ = self.ticks.try_recv();
        }
        debug!("playback {}", if playing { "started" } else { "paused" });
    }

    pub fn speed(&self) -> u32 {
        *self.speed.borrow()
    }

    pub fn set_speed(&self, speed: u32) {
        self.speed.send_replace(speed.clamp(MIN_SPEED, MAX_SPEED));
    }

    /// Takes the pending tick. Returns `true` if a generation is due; always
    /// `false` while paused.
    pub fn take_tick(&mut self) -> bool {
        let ticked = self.ticks.try_recv().is_ok();
        ticked && self.is_playing()
    }
}

async fn run_ticker<W>(
    mut playing: watch::Receiver<bool>,
    speed: watch::Receiver<u32>,
    ticks: mpsc::Sender<()>,
    wake: W,
) where
    W: Fn() + Send + 'static,
{
    loop {
        if !*playing.borrow_and_update() {
            // parked until playback resumes
            if playing.changed().await.is_err() {
                return;
            }
            continue;
        }

        let delay = tick_interval(*speed.borrow());
        tokio::select! {
            _ = tokio::time::sleep(delay) => {
                match ticks.try_send(()) {
                    Ok(()) => wake(),
                    // UI hasn't collected the last tick yet
                    Err(TrySendError::Full(())) => {}
                    Err(TrySendError::Closed(())) => return,
                }
            }
            changed = playing.changed() => {
                if changed.is_err() {
                    return;
                }
            }
        }
    }
}
