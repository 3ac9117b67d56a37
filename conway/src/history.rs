// history.rs - Detects when playback revisits a recent generation

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use automaton::Snapshot;

/// Number of recent generations remembered.
pub const HISTORY_LEN: usize = 10;

/// Ring buffer of snapshot hashes for the last [`HISTORY_LEN`] generations.
#[derive(Debug, Clone)]
pub struct CycleDetector {
    hashes: [u64; HISTORY_LEN],
    count: usize,
}

impl CycleDetector {
    /// Starts a history containing only `current`.
    pub fn new(current: &Snapshot) -> Self {
        let mut detector = Self {
            hashes: [0; HISTORY_LEN],
            count: 0,
        };
        detector.push(hash_snapshot(current));
        detector
    }

    /// Forgets everything except `current`. Called after any edit that isn't
    /// a generation step.
    pub fn reset(&mut self, current: &Snapshot) {
        *self = Self::new(current);
    }

    /// Records a newly produced generation. Returns `true` if it matches one
    /// of the remembered generations.
    pub fn record(&mut self, snapshot: &Snapshot) -> bool {
        let hash = hash_snapshot(snapshot);
        let filled = self.count.min(HISTORY_LEN);
        if self.hashes[..filled].contains(&hash) {
            return true;
        }
        self.push(hash);
        false
    }

    fn push(&mut self, hash: u64) {
        self.hashes[self.count % HISTORY_LEN] = hash;
        self.count += 1;
    }
}

fn hash_snapshot(snapshot: &Snapshot) -> u64 {
    let mut hasher = DefaultHasher::new();
    snapshot.hash(&mut hasher);
    hasher.finish()
}
