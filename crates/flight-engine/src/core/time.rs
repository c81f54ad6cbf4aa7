/// Wall-clock frame timer.
/// Turns the host's millisecond timestamps into a per-frame delta in seconds.
///
/// The first call yields a zero delta. Deltas above `max_delta` are clamped
/// so a backgrounded tab cannot fling the rocket across the system on resume;
/// pass `None` to keep raw deltas.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Timestamp of the previous frame in milliseconds.
    previous_ms: Option<f64>,
    /// Upper bound for a single delta, in seconds.
    max_delta: Option<f32>,
    /// Sum of all deltas handed out so far.
    elapsed: f64,
    /// Number of frames advanced.
    frames: u64,
}

impl FrameClock {
    pub fn new(max_delta: Option<f32>) -> Self {
        Self {
            previous_ms: None,
            max_delta,
            elapsed: 0.0,
            frames: 0,
        }
    }

    /// Record a new frame at `now_ms` and return its delta in seconds.
    pub fn advance(&mut self, now_ms: f64) -> f32 {
        let previous = self.previous_ms.unwrap_or(now_ms);
        self.previous_ms = Some(now_ms);
        self.frames += 1;

        // A clock that steps backwards produces no motion rather than negative motion.
        let raw = ((now_ms - previous) / 1000.0).max(0.0) as f32;
        let dt = match self.max_delta {
            Some(max) if raw > max => {
                log::debug!("frame {}: delta {:.3}s clamped to {:.3}s", self.frames, raw, max);
                max
            }
            _ => raw,
        };
        self.elapsed += dt as f64;
        dt
    }

    /// Simulated seconds since the first frame (sum of clamped deltas).
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn max_delta(&self) -> Option<f32> {
        self.max_delta
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(Some(1.0 / 15.0))
    }
}
