//! Real-time pacing: keeps emulated cycles roughly in step with wall-clock
//! time without ever running ahead of it.
//!
//! Cycles are batched between sleeps rather than pacing instruction by
//! instruction, since a `thread::sleep` call is far coarser than a single
//! CPU cycle at 4.194304 MHz.

use std::time::{Duration, Instant};

use crate::consts::CPU_FREQ;

/// Number of emulated cycles accumulated before the pacer checks the wall
/// clock and sleeps off any surplus.
const BATCH_CYCLES: u32 = 4096;

pub struct Pacer {
    started_at: Instant,
    emulated_cycles: u64,
    batch_cycles: u32,
}

impl Pacer {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
            emulated_cycles: 0,
            batch_cycles: 0,
        }
    }

    /// Accounts `cycles` retired cycles. Once a full batch has accumulated,
    /// sleeps for however long real time is ahead of emulated time. Never
    /// sleeps a negative duration and never attempts to catch up lost time
    /// by running faster; falling behind simply means the next batch's
    /// sleep is shorter or skipped.
    pub fn pace(&mut self, cycles: u8) {
        self.emulated_cycles += cycles as u64;
        self.batch_cycles += cycles as u32;

        if self.batch_cycles < BATCH_CYCLES {
            return;
        }
        self.batch_cycles = 0;

        let emulated_duration = Duration::from_secs_f64(self.emulated_cycles as f64 / CPU_FREQ as f64);
        let wall_elapsed = self.started_at.elapsed();
        if emulated_duration > wall_elapsed {
            std::thread::sleep(emulated_duration - wall_elapsed);
        }
    }
}

impl Default for Pacer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pace_does_not_panic_on_small_batches() {
        let mut pacer = Pacer::new();
        for _ in 0..10 {
            pacer.pace(4);
        }
    }

    #[test]
    fn test_pace_accumulates_full_batch_without_panicking() {
        let mut pacer = Pacer::new();
        let mut remaining = BATCH_CYCLES as i64 + 10;
        while remaining > 0 {
            pacer.pace(4);
            remaining -= 4;
        }
    }
}
