use std::time::Duration;

use tracing::{debug, info, warn};

use crate::constants::*;
use crate::gate::InteractionGate;
use crate::slide::{Slide, SlideRegistry};
use crate::state::CarouselState;
use crate::timer::PlaybackTimer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselTiming {
    pub autoplay_interval: Duration,
    pub resume_cooldown: Duration,
}

impl Default for CarouselTiming {
    fn default() -> Self {
        Self {
            autoplay_interval: DEFAULT_AUTOPLAY_INTERVAL,
            resume_cooldown: RESUME_COOLDOWN,
        }
    }
}

impl CarouselTiming {
    /// Zero durations are replaced by the defaults; a zero interval would
    /// leave the carousel `Playing` with no timer behind it.
    pub fn normalized(self) -> Self {
        let defaults = Self::default();
        Self {
            autoplay_interval: if self.autoplay_interval.is_zero() {
                warn!("zero autoplay interval, using default");
                defaults.autoplay_interval
            } else {
                self.autoplay_interval
            },
            resume_cooldown: if self.resume_cooldown.is_zero() {
                warn!("zero resume cooldown, using default");
                defaults.resume_cooldown
            } else {
                self.resume_cooldown
            },
        }
    }
}

/// Auto-advancing carousel. Sole owner of the current index.
///
/// Time only moves through [`Carousel::update`], which the host calls once
/// per frame. Manual navigation (`next`, `previous`, `go_to`) pauses
/// playback and schedules a resume after the cooldown; timer-driven
/// `advance` does not.
///
/// Dropping the carousel disposes it.
#[derive(Debug)]
pub struct Carousel {
    registry: SlideRegistry,
    timing: CarouselTiming,

    state: CarouselState,
    current_index: usize,

    timer: PlaybackTimer,
    gate: InteractionGate,
}

impl Carousel {
    pub fn new(registry: SlideRegistry, timing: CarouselTiming) -> Self {
        let timing = timing.normalized();
        let mut timer = PlaybackTimer::new();
        timer.start(timing.autoplay_interval);
        info!(
            slides = registry.count(),
            interval_ms = timing.autoplay_interval.as_millis() as u64,
            cooldown_ms = timing.resume_cooldown.as_millis() as u64,
            "carousel started"
        );

        Self {
            registry,
            timing,
            state: CarouselState::Playing,
            current_index: 0,
            timer,
            gate: InteractionGate::new(timing.resume_cooldown),
        }
    }

    pub fn update(&mut self, dt: Duration) {
        let mut dt = dt;
        match self.state {
            CarouselState::Disposed => return,
            CarouselState::Paused => match self.gate.update(dt) {
                Some(overshoot) => {
                    self.resume();
                    dt = overshoot;
                }
                None => return,
            },
            CarouselState::Playing => {}
        }

        let count = self.registry.count();
        let index = &mut self.current_index;
        self.timer.update(dt, || *index = (*index + 1) % count);
    }

    /// Timer-driven step; does not touch the interaction gate.
    pub fn advance(&mut self) {
        if self.is_disposed("advance") {
            return;
        }
        self.current_index = (self.current_index + 1) % self.registry.count();
    }

    pub fn retreat(&mut self) {
        if self.is_disposed("retreat") {
            return;
        }
        let count = self.registry.count();
        self.current_index = (self.current_index + count - 1) % count;
    }

    pub fn next(&mut self) {
        if self.is_disposed("next") {
            return;
        }
        self.advance();
        self.pause_for_interaction();
    }

    pub fn previous(&mut self) {
        if self.is_disposed("previous") {
            return;
        }
        self.retreat();
        self.pause_for_interaction();
    }

    /// Any integer is accepted and wrapped into `[0, count)`.
    pub fn go_to(&mut self, index: i64) {
        if self.is_disposed("go_to") {
            return;
        }
        self.current_index = index.rem_euclid(self.registry.count() as i64) as usize;
        self.pause_for_interaction();
    }

    pub fn dispose(&mut self) {
        if self.state == CarouselState::Disposed {
            return;
        }
        self.timer.stop();
        self.gate.cancel_pending_resume();
        self.state = CarouselState::Disposed;
        info!("carousel disposed");
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_slide(&self) -> &Slide {
        self.registry.slide_at(self.current_index)
    }

    pub fn slides(&self) -> &SlideRegistry {
        &self.registry
    }

    pub fn slide_count(&self) -> usize {
        self.registry.count()
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn is_auto_playing(&self) -> bool {
        self.state.is_auto_playing()
    }

    pub fn timing(&self) -> CarouselTiming {
        self.timing
    }

    /// Fill ratio of the progress bar.
    pub fn progress(&self) -> f32 {
        (self.current_index + 1) as f32 / self.registry.count() as f32
    }

    /// Remaining cooldown while paused.
    pub fn resume_in(&self) -> Option<Duration> {
        self.gate.resume_in()
    }

    /// Time until the next automatic advance while playing.
    pub fn next_advance_in(&self) -> Option<Duration> {
        self.timer.remaining()
    }

    fn pause_for_interaction(&mut self) {
        self.gate.on_manual_navigate(&mut self.timer);
        if self.state != CarouselState::Paused {
            debug!(index = self.current_index, "autoplay paused");
        }
        self.state = CarouselState::Paused;
    }

    fn resume(&mut self) {
        self.state = CarouselState::Playing;
        self.timer.start(self.timing.autoplay_interval);
        debug!(index = self.current_index, "autoplay resumed");
    }

    fn is_disposed(&self, op: &str) -> bool {
        if self.state == CarouselState::Disposed {
            debug!(op, "ignored on disposed carousel");
            return true;
        }
        false
    }
}

impl Drop for Carousel {
    fn drop(&mut self) {
        self.dispose();
    }
}
