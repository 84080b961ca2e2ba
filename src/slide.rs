use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single carousel entry. `image_ref` is opaque to the core and only
/// resolved by the host view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub id: u32,
    pub image_ref: String,
    pub title: String,
    pub description: String,
}

impl Slide {
    pub fn new(id: u32, image_ref: &str, title: &str, description: &str) -> Self {
        Self {
            id,
            image_ref: image_ref.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("slide registry must contain at least one slide")]
    Empty,
    #[error("duplicate slide id {0}")]
    DuplicateId(u32),
}

/// Fixed, ordered set of slides. Never empty, so index arithmetic modulo
/// `count()` is always defined.
#[derive(Debug, Clone)]
pub struct SlideRegistry {
    slides: Vec<Slide>,
}

impl SlideRegistry {
    pub fn new(slides: Vec<Slide>) -> Result<Self, RegistryError> {
        if slides.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut seen = HashSet::with_capacity(slides.len());
        for slide in &slides {
            if !seen.insert(slide.id) {
                return Err(RegistryError::DuplicateId(slide.id));
            }
        }

        Ok(Self { slides })
    }

    /// The three onboarding slides shown next to the login form.
    pub fn onboarding() -> Self {
        Self {
            slides: onboarding_slides(),
        }
    }

    /// Callers pass indices already reduced modulo `count()`.
    pub fn slide_at(&self, index: usize) -> &Slide {
        &self.slides[index % self.slides.len()]
    }

    pub fn count(&self) -> usize {
        self.slides.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }
}

pub fn onboarding_slides() -> Vec<Slide> {
    vec![
        Slide::new(
            1,
            "assets/onboard/onboard_one.png",
            "Boost Your Productivity",
            "Streamline your workflow with powerful tools designed to help you achieve more in less time.",
        ),
        Slide::new(
            2,
            "assets/onboard/onboard_two.png",
            "Collaborate Seamlessly",
            "Work together with your team effortlessly, share ideas, and bring projects to life.",
        ),
        Slide::new(
            3,
            "assets/onboard/onboard_three.png",
            "Track Your Progress",
            "Monitor your achievements and stay motivated with detailed analytics and insights.",
        ),
    ]
}
