//! Start/stop-capable per-frame driver.
//!
//! The browser's animation-frame callback only calls [`RenderLoop::tick`] and
//! reschedules itself while it returns `true`, so a test can step frames by
//! hand without any display driver.

/// Something that draws one frame per display refresh.
pub trait FrameHandler {
    /// `now_ms` is the host's high-resolution frame timestamp.
    fn frame(&mut self, now_ms: f64);
}

pub struct RenderLoop<H> {
    handler: H,
    running: bool,
    epoch: u64,
    frames: u64,
    last_frame_ms: Option<f64>,
}

impl<H: FrameHandler> RenderLoop<H> {
    /// A new loop is stopped until [`start`](Self::start) is called.
    pub fn new(handler: H) -> Self {
        Self {
            handler,
            running: false,
            epoch: 0,
            frames: 0,
            last_frame_ms: None,
        }
    }

    /// Returns `true` if the loop was stopped and now needs scheduling.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.epoch += 1;
        true
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Incremented by every effective `start`; lets a driver tell its own
    /// schedule apart from one started after a stop.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last_frame_ms(&self) -> Option<f64> {
        self.last_frame_ms
    }

    /// Run exactly one frame if running. Returns whether the next refresh
    /// should be requested.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if !self.running {
            return false;
        }
        self.handler.frame(now_ms);
        self.frames += 1;
        self.last_frame_ms = Some(now_ms);
        self.running
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }
}
