//! Auto-advancing onboarding carousel with pause-on-interaction, plus the
//! hero typewriter and role routing used by the same landing pages.
//!
//! Everything here is driven by frame time: the host view calls `update(dt)`
//! once per frame, so no component owns a thread or an OS timer.

pub mod access;
pub mod carousel;
pub mod config;
pub mod constants;
pub mod gate;
pub mod slide;
pub mod state;
pub mod timer;
pub mod typewriter;

pub use carousel::{Carousel, CarouselTiming};
pub use config::{CarouselConfig, ConfigError};
pub use slide::{Slide, SlideRegistry};
pub use state::CarouselState;
pub use typewriter::{HeroLine, Typewriter};
