use std::time::Instant;

/// Frame clock for the demo loop - hands out delta time and counts frames.
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
    frame: u64,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
            frame: 0,
        }
    }

    /// Delta since the previous tick in seconds; advances the clock and the
    /// frame counter.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        self.frame += 1;
        delta
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

/// Minimum-interval gate, used to rate-limit stats logging.
#[derive(Debug, Clone, Copy)]
pub struct Throttled {
    min_interval: f32,
    since_last: f32,
}

impl Throttled {
    pub fn new(min_interval: f32) -> Self {
        Self {
            min_interval,
            // Allow an immediate first fire.
            since_last: min_interval,
        }
    }

    /// Accumulate `delta` seconds; true when the interval has elapsed.
    pub fn try_tick(&mut self, delta: f32) -> bool {
        self.since_last += delta;

        if self.since_last >= self.min_interval {
            self.since_last = 0.0;
            true
        } else {
            false
        }
    }
}
