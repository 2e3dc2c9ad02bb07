//! Frame clock

/// Yields one frame number per rendered frame; `None` ends the run
pub trait FrameClock {
    fn next_frame(&mut self) -> Option<u64>;
}

/// Headless clock producing frames `0..total`
#[derive(Debug, Clone)]
pub struct FixedFrames {
    next: u64,
    total: u64,
}

impl FixedFrames {
    pub fn new(total: u64) -> Self {
        Self { next: 0, total }
    }
}

impl FrameClock for FixedFrames {
    fn next_frame(&mut self) -> Option<u64> {
        if self.next >= self.total {
            return None;
        }
        let frame = self.next;
        self.next += 1;
        Some(frame)
    }
}
