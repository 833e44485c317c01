/// One-second tick counter for the attempt clock.
///
/// Runs from construction until [`stop`](Self::stop); ticks after that are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElapsedTimer {
    elapsed_seconds: u64,
    running: bool,
}

impl ElapsedTimer {
    /// A running timer at zero.
    pub fn start() -> Self {
        Self {
            elapsed_seconds: 0,
            running: true,
        }
    }

    /// Advance by one second if running. Returns the elapsed time.
    pub fn tick(&mut self) -> u64 {
        if self.running {
            self.elapsed_seconds += 1;
        }
        self.elapsed_seconds
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    /// `MM:SS`, minutes unbounded.
    pub fn display(&self) -> String {
        format_elapsed(self.elapsed_seconds)
    }
}

impl Default for ElapsedTimer {
    fn default() -> Self {
        Self::start()
    }
}

/// Format seconds as zero-padded `MM:SS`.
pub fn format_elapsed(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
