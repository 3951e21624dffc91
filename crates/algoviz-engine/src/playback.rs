use std::time::Duration;

/// Lifecycle of a playback session over one finished trace.
///
/// ```text
/// Idle -> Running <-> Paused
///            |
///            v
///        Completed
/// ```
/// Reset returns to Idle from anywhere. Illegal transitions are no-ops.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Idle,
    Running,
    Paused,
    Completed,
}

/// Cursor state machine that walks a precomputed trace.
///
/// The playback layer never mutates step contents; it only moves this cursor.
/// It also owns no timer — the host schedules [`tick`](Playback::tick) at
/// whatever cadence [`interval`](Playback::interval) suggests.
#[derive(Clone, Debug)]
pub struct Playback {
    step_count: usize,
    cursor: usize,
    speed: u8,
    state: PlaybackState,
}

/// Default slider position.
const DEFAULT_SPEED: u8 = 50;

impl Playback {
    pub fn new(step_count: usize) -> Self {
        Self {
            step_count,
            cursor: 0,
            speed: DEFAULT_SPEED,
            state: PlaybackState::Idle,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Index of the step currently on screen.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn speed(&self) -> u8 {
        self.speed
    }

    /// Delay between ticks for the current speed: `1100ms - 10ms * speed`,
    /// the visualizer's slider mapping (speed 0-100, so 100ms..1100ms).
    pub fn interval(&self) -> Duration {
        Duration::from_millis(1_100 - 10 * u64::from(self.speed.min(100)))
    }

    /// Change speed without disturbing the state machine; the host applies
    /// the new [`interval`](Playback::interval) on its next scheduling round.
    pub fn set_speed(&mut self, speed: u8) {
        self.speed = speed.min(100);
    }

    /// Idle -> Running, rewinding to the first step. No-op elsewhere.
    pub fn start(&mut self, speed: u8) -> PlaybackState {
        if self.state == PlaybackState::Idle {
            self.set_speed(speed);
            self.cursor = 0;
            self.state = PlaybackState::Running;
        }
        self.state
    }

    /// Running -> Paused. No-op elsewhere.
    pub fn pause(&mut self) -> PlaybackState {
        if self.state == PlaybackState::Running {
            self.state = PlaybackState::Paused;
        }
        self.state
    }

    /// Paused -> Running. No-op elsewhere.
    pub fn resume(&mut self) -> PlaybackState {
        if self.state == PlaybackState::Paused {
            self.state = PlaybackState::Running;
        }
        self.state
    }

    /// One timer tick: advance the cursor while running; reaching the last
    /// step transitions to Completed. Returns the new cursor when it moved.
    pub fn tick(&mut self) -> Option<usize> {
        if self.state != PlaybackState::Running {
            return None;
        }
        if self.cursor + 1 >= self.step_count {
            self.state = PlaybackState::Completed;
            return None;
        }
        self.cursor += 1;
        Some(self.cursor)
    }

    /// Manual single-step, available in any state short of the last step.
    pub fn step_forward(&mut self) -> Option<usize> {
        if self.step_count > 0 && self.cursor < self.step_count - 1 {
            self.cursor += 1;
            Some(self.cursor)
        } else {
            None
        }
    }

    /// Back to Idle at the first step, from any state. The trace itself is
    /// discarded by the session owning it, not here.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.state = PlaybackState::Idle;
    }
}
