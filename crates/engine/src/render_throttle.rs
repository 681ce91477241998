/// Decides which logical ticks also redraw the screen.
///
/// Every tick adds its length to an accumulator; once the accumulator reaches
/// the frame interval (`1000 / fps` ms) a redraw is due and the accumulator
/// resets to zero. The very first tick always renders so the screen is never
/// blank while waiting for the first interval.
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    frame_interval_ms: f64,
    accumulated_ms: f64,
    has_rendered: bool,
}

impl RenderThrottle {
    /// `fps` is clamped to at least 1.
    pub fn new(fps: u32) -> Self {
        Self {
            frame_interval_ms: 1000.0 / fps.max(1) as f64,
            accumulated_ms: 0.0,
            has_rendered: false,
        }
    }

    pub fn frame_interval_ms(&self) -> f64 {
        self.frame_interval_ms
    }

    pub fn accumulated_ms(&self) -> f64 {
        self.accumulated_ms
    }

    /// Account for one tick of `tick_ms` and report whether to redraw.
    pub fn should_render(&mut self, tick_ms: f64) -> bool {
        self.accumulated_ms += tick_ms;

        if !self.has_rendered {
            self.has_rendered = true;
            self.accumulated_ms = 0.0;
            return true;
        }

        // Tolerate float drift: 1000/60 summed twice must satisfy a 1000/30 interval.
        if self.accumulated_ms + 1e-9 >= self.frame_interval_ms {
            self.accumulated_ms = 0.0;
            return true;
        }

        false
    }
}
