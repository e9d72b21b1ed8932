//! Countdown timer state, usually seeded from a drink's prepare-time estimate.
//!
//! The caller owns the clock and calls [`Countdown::tick`] once per second.

const MAX_HOURS: u32 = 23;
const MAX_MINUTES: u32 = 59;
const MAX_SECONDS: u32 = 59;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    initial_time: u32,
    running: bool,
    finished: bool,
    picker_visible: bool,
    initialized: bool,
}

impl Default for Countdown {
    fn default() -> Self {
        Self {
            remaining: 0,
            initial_time: 0,
            running: false,
            finished: false,
            picker_visible: true,
            initialized: false,
        }
    }
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Countdown already loaded with `seconds`.
    pub fn with_initial_time(seconds: u32) -> Self {
        let mut countdown = Self::new();
        countdown.apply_initial_time(seconds);
        countdown
    }

    /// Load a new starting time.
    ///
    /// A positive time hides the picker so the user can start right away; zero
    /// clears the timer and shows the picker again.
    pub fn apply_initial_time(&mut self, seconds: u32) {
        self.remaining = seconds;
        self.picker_visible = seconds == 0;
        self.finished = false;
        self.initial_time = seconds;
        self.initialized = true;
    }

    /// Play/pause.
    pub fn toggle(&mut self) {
        if self.running {
            self.running = false;
        } else if self.finished {
            // a finished timer must be reset first
        } else if self.remaining > 0 {
            self.running = true;
            self.picker_visible = false;
        }
    }

    /// Advance one second. Returns `true` on the tick that finishes the countdown.
    pub fn tick(&mut self) -> bool {
        if !self.running || self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            self.running = false;
            self.finished = true;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.running = false;
        self.finished = false;
        self.picker_visible = true;
        self.remaining = 0;
    }

    /// Set the time from the picker wheels. Ignored unless the picker is shown.
    pub fn set_picker(&mut self, hours: u32, minutes: u32, seconds: u32) {
        if !self.picker_visible {
            return;
        }
        self.remaining =
            hours.min(MAX_HOURS) * 3600 + minutes.min(MAX_MINUTES) * 60 + seconds.min(MAX_SECONDS);
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn initial_time(&self) -> u32 {
        self.initial_time
    }

    pub fn hours(&self) -> u32 {
        self.remaining / 3600
    }

    pub fn minutes(&self) -> u32 {
        (self.remaining % 3600) / 60
    }

    pub fn seconds(&self) -> u32 {
        self.remaining % 60
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn is_picker_visible(&self) -> bool {
        self.picker_visible
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// `HH:MM:SS`
    pub fn display(&self) -> String {
        format!(
            "{:02}:{:02}:{:02}",
            self.hours(),
            self.minutes(),
            self.seconds()
        )
    }
}
