/// Ease-out curve used for every cursor transition: quadratic, fast start and
/// gentle settle.
pub fn ease_out(fraction: f32) -> f32 {
    let fraction = fraction.clamp(0.0, 1.0);
    1.0 - (1.0 - fraction) * (1.0 - fraction)
}

/// Converts a duration in milliseconds to nanoseconds, saturating instead of
/// overflowing for absurd durations.
pub fn millis_to_nanos(millis: u64) -> u64 {
    millis.saturating_mul(1_000_000)
}

/// A single animated value advanced by frame timestamps.
///
/// The first frame after [`Tween::animate_to`] establishes the start time, so
/// callers never need to know the clock origin.
#[derive(Debug, Clone)]
pub struct Tween {
    current: f32,
    start: f32,
    target: f32,
    duration_millis: u64,
    start_time_nanos: Option<u64>,
    running: bool,
}

impl Tween {
    pub fn new(initial: f32) -> Self {
        Self {
            current: initial,
            start: initial,
            target: initial,
            duration_millis: 0,
            start_time_nanos: None,
            running: false,
        }
    }

    pub fn value(&self) -> f32 {
        self.current
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Animate from the current value to `target`, replacing any running animation.
    pub fn animate_to(&mut self, target: f32, duration_millis: u64) {
        self.start = self.current;
        self.target = target;
        self.duration_millis = duration_millis;
        self.start_time_nanos = None;
        self.running = true;
    }

    /// Jump to `value` and stop.
    pub fn snap_to(&mut self, value: f32) {
        self.current = value;
        self.start = value;
        self.target = value;
        self.start_time_nanos = None;
        self.running = false;
    }

    /// Advance to `frame_time_nanos`. Returns `true` while more frames are needed.
    pub fn on_frame(&mut self, frame_time_nanos: u64) -> bool {
        if !self.running {
            return false;
        }

        let start_time = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
        let duration_nanos = millis_to_nanos(self.duration_millis);
        let linear_progress = if duration_nanos == 0 {
            1.0
        } else {
            (elapsed_nanos as f64 / duration_nanos as f64).clamp(0.0, 1.0) as f32
        };

        if linear_progress >= 1.0 {
            self.snap_to(self.target);
            return false;
        }

        let progress = ease_out(linear_progress);
        self.current = self.start + (self.target - self.start) * progress;
        true
    }
}

#[cfg(test)]
#[path = "tests/tween_tests.rs"]
mod tests;
