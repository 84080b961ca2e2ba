#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CarouselState {
    Playing,  // Playback timer is advancing slides
    Paused,   // Manual navigation happened, resume is pending
    Disposed, // Terminal, no further transitions
}

impl CarouselState {
    pub fn is_auto_playing(self) -> bool {
        self == CarouselState::Playing
    }
}
