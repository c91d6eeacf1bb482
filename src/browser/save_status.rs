use std::time::{Duration, Instant};

/// How long a resolved status stays visible before reverting to idle.
pub const SAVED_REVERT: Duration = Duration::from_secs(2);
pub const ERROR_REVERT: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveState {
    Idle,
    Saving,
    Saved,
    Error,
}

/// Transient save-status indicator: `Idle -> Saving -> {Saved, Error} ->
/// Idle`, with the final transition driven by the event-loop tick.
///
/// A new save supersedes any pending revert, so the indicator always
/// reflects only the most recent attempt.
#[derive(Debug)]
pub struct SaveIndicator {
    state: SaveState,
    revert_at: Option<Instant>,
}

impl SaveIndicator {
    pub fn new() -> Self {
        Self {
            state: SaveState::Idle,
            revert_at: None,
        }
    }

    pub fn state(&self) -> SaveState {
        self.state
    }

    pub fn begin(&mut self) {
        self.state = SaveState::Saving;
        self.revert_at = None;
    }

    pub fn resolve_ok(&mut self, now: Instant) {
        self.state = SaveState::Saved;
        self.revert_at = Some(now + SAVED_REVERT);
    }

    pub fn resolve_err(&mut self, now: Instant) {
        self.state = SaveState::Error;
        self.revert_at = Some(now + ERROR_REVERT);
    }

    /// Revert to idle once the deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        if let Some(deadline) = self.revert_at
            && now >= deadline
        {
            self.state = SaveState::Idle;
            self.revert_at = None;
        }
    }

    pub fn label(&self) -> &'static str {
        match self.state {
            SaveState::Idle => "",
            SaveState::Saving => "Saving...",
            SaveState::Saved => "Saved!",
            SaveState::Error => "Error saving",
        }
    }
}

impl Default for SaveIndicator {
    fn default() -> Self {
        Self::new()
    }
}
