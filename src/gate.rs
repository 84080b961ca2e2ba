use std::time::Duration;

use tracing::trace;

use crate::timer::PlaybackTimer;

/// A scheduled resume. Owning the value is owning the schedule: dropping or
/// replacing it cancels the resume.
#[derive(Debug, PartialEq, Eq)]
struct PendingResume {
    token: u64,
    remaining: Duration,
}

/// Pauses playback on manual navigation and resumes it after a cooldown.
#[derive(Debug)]
pub struct InteractionGate {
    cooldown: Duration,
    pending: Option<PendingResume>,
    next_token: u64,
}

impl InteractionGate {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            pending: None,
            next_token: 0,
        }
    }

    /// Stops the timer before anything else, then replaces any pending resume.
    pub fn on_manual_navigate(&mut self, timer: &mut PlaybackTimer) {
        timer.stop();

        if let Some(previous) = self.pending.take() {
            trace!(token = previous.token, "replacing pending resume");
        }
        self.next_token += 1;
        self.pending = Some(PendingResume {
            token: self.next_token,
            remaining: self.cooldown,
        });
    }

    pub fn cancel_pending_resume(&mut self) {
        if let Some(pending) = self.pending.take() {
            trace!(token = pending.token, "pending resume cancelled");
        }
    }

    pub fn has_pending_resume(&self) -> bool {
        self.pending.is_some()
    }

    pub fn resume_in(&self) -> Option<Duration> {
        self.pending.as_ref().map(|p| p.remaining)
    }

    /// Returns the part of `dt` left over after the resume fired, or `None`
    /// if nothing fired. A resume fires at most once.
    pub fn update(&mut self, dt: Duration) -> Option<Duration> {
        let pending = self.pending.as_mut()?;
        if dt < pending.remaining {
            pending.remaining -= dt;
            return None;
        }

        let overshoot = dt - pending.remaining;
        let fired = self.pending.take()?;
        trace!(token = fired.token, "resume fired");
        Some(overshoot)
    }
}
