use wellbite_core::{FrameClock, Runtime, RuntimeHandle};

/// Steps a runtime's frame clock at a fixed interval.
pub struct FrameDriver {
    runtime: Runtime,
    frame_time_nanos: u64,
    frame_interval_nanos: u64,
}

impl FrameDriver {
    pub fn new(frame_interval_nanos: u64) -> Self {
        Self {
            runtime: Runtime::new(),
            frame_time_nanos: 0,
            frame_interval_nanos: frame_interval_nanos.max(1),
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    pub fn frame_clock(&self) -> FrameClock {
        self.runtime.frame_clock()
    }

    pub fn frame_time_nanos(&self) -> u64 {
        self.frame_time_nanos
    }

    /// Moves time forward one interval and runs the callbacks due.
    pub fn advance_frame(&mut self) -> u64 {
        self.frame_time_nanos += self.frame_interval_nanos;
        self.runtime.handle().drain_frame_callbacks(self.frame_time_nanos);
        self.frame_time_nanos
    }

    /// Advances until no callbacks remain. Returns the number of frames run,
    /// or `None` if callbacks were still pending after `max_frames`.
    pub fn run_until_idle(&mut self, max_frames: usize) -> Option<usize> {
        let handle = self.runtime.handle();
        for frame in 0..max_frames {
            if !handle.has_frame_callbacks() {
                return Some(frame);
            }
            self.advance_frame();
        }
        (!handle.has_frame_callbacks()).then_some(max_frames)
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new(16_666_667)
    }
}
