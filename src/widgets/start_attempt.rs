const INITIAL_ATTEMPTS: u32 = 4;

/// Tracks remaining quiz attempts and whether one is underway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartAttempt {
    attempts: u32,
    in_progress: bool,
}

impl StartAttempt {
    pub fn new() -> Self {
        Self {
            attempts: INITIAL_ATTEMPTS,
            in_progress: false,
        }
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn in_progress(&self) -> bool {
        self.in_progress
    }

    pub fn can_start(&self) -> bool {
        !self.in_progress && self.attempts > 0
    }

    pub fn can_stop(&self) -> bool {
        self.in_progress
    }

    pub fn can_mulligan(&self) -> bool {
        !self.in_progress
    }

    /// Begins an attempt, spending one. Ignored while disabled.
    pub fn start(&mut self) {
        if self.can_start() {
            self.in_progress = true;
            self.attempts -= 1;
        }
    }

    pub fn stop(&mut self) {
        if self.can_stop() {
            self.in_progress = false;
        }
    }

    /// Grants one extra attempt. Ignored during an attempt.
    pub fn mulligan(&mut self) {
        if self.can_mulligan() {
            self.attempts += 1;
        }
    }
}

impl Default for StartAttempt {
    fn default() -> Self {
        Self::new()
    }
}
