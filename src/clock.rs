/// Elapsed animation time, advanced by the frame scheduler.
///
/// Never runs backwards: negative or non-finite steps are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct Clock {
    elapsed: f64,
    frames: u64,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by `dt` seconds and count one frame.
    pub fn tick(&mut self, dt: f64) {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
        self.frames += 1;
    }

    /// Seconds since the first frame.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Number of ticks so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// Converts `requestAnimationFrame` timestamps (milliseconds) into steps.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameTimer {
    last_ms: Option<f64>,
}

impl FrameTimer {
    /// Seconds since the latest timestamp seen; the first call yields the
    /// timestamp itself so elapsed time matches the page clock. A timestamp
    /// older than the latest one yields 0 and is otherwise ignored.
    pub fn step(&mut self, now_ms: f64) -> f64 {
        let last = self.last_ms.unwrap_or(0.0);
        if !now_ms.is_finite() || now_ms <= last {
            self.last_ms.get_or_insert(last);
            return 0.0;
        }
        self.last_ms = Some(now_ms);
        (now_ms - last) * 0.001
    }
}
