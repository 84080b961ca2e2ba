use std::time::Duration;

pub const RENDER_WIDTH: i32 = 960;            // Width of the host window
pub const RENDER_HEIGHT: i32 = 720;           // Height of the host window
pub const FPS: u32 = 60;                      // Frames per second

pub const DEFAULT_AUTOPLAY_INTERVAL: Duration = Duration::from_millis(4000); // Time each slide is shown while playing
pub const RESUME_COOLDOWN: Duration = Duration::from_millis(5000);           // Pause after manual navigation
pub const SLIDE_TRANSITION: Duration = Duration::from_millis(500);           // Eased slide between images

// Hero typewriter cadence
pub const TYPEWRITER_START_DELAY: Duration = Duration::from_millis(500);
pub const TYPEWRITER_LINE_PAUSE: Duration = Duration::from_millis(300);
pub const TYPEWRITER_FADE_IN: Duration = Duration::from_millis(500);
pub const GREETING_CHAR_INTERVAL: Duration = Duration::from_millis(80);
pub const NAME_CHAR_INTERVAL: Duration = Duration::from_millis(60);
pub const ROLE_CHAR_INTERVAL: Duration = Duration::from_millis(50);

pub const DEFAULT_GREETING: &str = "Selamat Datang di";
pub const DEFAULT_NAME: &str = "KDS Corner";
pub const DEFAULT_ROLE: &str = "Your Creative Digital Solutions Partner";
