use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick, clamped.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    pub frame_index: u64,

    /// Smoothed frames per second; `None` until a first interval was measured.
    pub fps: Option<f64>,
}

/// Exponential moving average of the frame rate.
#[derive(Debug, Clone)]
pub struct FpsEstimator {
    smoothing: f64,
    fps: Option<f64>,
}

impl FpsEstimator {
    /// `smoothing` is the weight of each new sample, in `(0, 1]`.
    pub fn new(smoothing: f64) -> Self {
        Self { smoothing: smoothing.clamp(f64::EPSILON, 1.0), fps: None }
    }

    /// Feeds one frame interval. Non-positive intervals are ignored.
    pub fn update(&mut self, dt: Duration) -> Option<f64> {
        let secs = dt.as_secs_f64();
        if secs > 0.0 {
            let sample = 1.0 / secs;
            self.fps = Some(match self.fps {
                Some(prev) => prev + (sample - prev) * self.smoothing,
                None => sample,
            });
        }
        self.fps
    }

    #[inline]
    pub fn fps(&self) -> Option<f64> {
        self.fps
    }

    pub fn reset(&mut self) {
        self.fps = None;
    }
}

impl Default for FpsEstimator {
    fn default() -> Self {
        Self::new(0.1)
    }
}

/// Produces `FrameTime` snapshots.
///
/// Deltas are clamped so a debugger pause or a minimized window does not
/// turn into one enormous step.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<Instant>,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
    fps: FpsEstimator,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: None,
            frame_index: 0,
            dt_min,
            dt_max,
            fps: FpsEstimator::default(),
        }
    }

    /// Forgets the previous tick, e.g. after the window was hidden.
    pub fn reset(&mut self) {
        self.last = None;
        self.fps.reset();
    }

    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Advances the clock to `now`.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = self
            .last
            .map(|last| now.saturating_duration_since(last).clamp(self.dt_min, self.dt_max));
        let fps = match dt {
            Some(dt) => self.fps.update(dt),
            None => self.fps.fps(),
        };
        let dt = dt.unwrap_or(Duration::ZERO);

        self.last = Some(now);
        let ft = FrameTime { dt: dt.as_secs_f32(), now, frame_index: self.frame_index, fps };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
