// Cancellable repeating frame task.
//
// The host (the browser's animation-frame queue, or a manual queue in tests)
// is abstracted behind `FrameHost`. A `RepeatingTask` arms one frame at a
// time: each delivered frame runs the step and re-arms, until `cancel` clears
// the pending request. After `cancel` returns no step runs again, even if the
// host still delivers a frame that was already in flight.

use super::error::GlassError;

/// Something that can schedule a single callback on the next frame.
pub trait FrameHost {
    /// Arm the next frame; returns the host's request handle.
    fn request_frame(&self) -> Option<i32>;
    fn cancel_frame(&self, handle: i32);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TaskState {
    Idle,
    Armed(Option<i32>),
    Cancelled,
}

#[derive(Debug)]
pub struct RepeatingTask<H: FrameHost> {
    host: H,
    state: TaskState,
    ticks: u64,
}

impl<H: FrameHost> RepeatingTask<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            state: TaskState::Idle,
            ticks: 0,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Arm the first frame. Has no effect once armed or cancelled.
    pub fn start(&mut self) {
        if self.state == TaskState::Idle {
            self.state = TaskState::Armed(self.host.request_frame());
        }
    }

    /// Deliver a frame: run `step` and re-arm. Errors if the task was cancelled.
    pub fn on_frame(&mut self, step: impl FnOnce(u64)) -> Result<(), GlassError> {
        if self.state == TaskState::Cancelled {
            return Err(GlassError::Cancelled);
        }
        self.ticks += 1;
        step(self.ticks);
        self.state = TaskState::Armed(self.host.request_frame());
        Ok(())
    }

    /// Stop scheduling. Any pending request is withdrawn from the host.
    pub fn cancel(&mut self) {
        if let TaskState::Armed(Some(handle)) = self.state {
            self.host.cancel_frame(handle);
        }
        self.state = TaskState::Cancelled;
    }

    pub fn is_cancelled(&self) -> bool {
        self.state == TaskState::Cancelled
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.state, TaskState::Armed(_))
    }

    /// Steps run so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
