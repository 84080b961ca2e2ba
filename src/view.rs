use std::time::Duration;

use raylib::prelude::*;

use carousel::constants::*;
use carousel::{Carousel, HeroLine, Typewriter};

// --- Layout (window coordinates at the default render size) ---
const MARGIN: i32 = 80;
const IMAGE_TOP: i32 = 160;
const IMAGE_WIDTH: i32 = RENDER_WIDTH - 2 * MARGIN;
const IMAGE_HEIGHT: i32 = 350;
const ARROW_RADIUS: f32 = 20.0;
const ARROW_INSET: i32 = 30;
const TITLE_TOP: i32 = 530;
const DESCRIPTION_TOP: i32 = 570;
const DESCRIPTION_WRAP: usize = 72;
const DOTS_TOP: i32 = 640;
const DOT_SPACING: i32 = 30;
const DOT_RADIUS: f32 = 6.0;
const DOT_HIT_RADIUS: f32 = 12.0;
const PROGRESS_TOP: i32 = 680;
const PROGRESS_HEIGHT: i32 = 4;

const ACCENT: Color = Color::new(99, 102, 241, 255);
const MUTED: Color = Color::new(209, 213, 219, 255);
const TEXT_DARK: Color = Color::new(31, 41, 55, 255);
const TEXT_SOFT: Color = Color::new(107, 114, 128, 255);

/// Something the user asked the carousel to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAction {
    Previous,
    Next,
    GoTo(usize),
}

impl ViewAction {
    pub fn apply(self, carousel: &mut Carousel) {
        match self {
            ViewAction::Previous => carousel.previous(),
            ViewAction::Next => carousel.next(),
            ViewAction::GoTo(index) => carousel.go_to(index as i64),
        }
    }
}

pub fn action_for_key(key: KeyboardKey) -> Option<ViewAction> {
    const DIGITS: [KeyboardKey; 9] = [
        KeyboardKey::KEY_ONE,
        KeyboardKey::KEY_TWO,
        KeyboardKey::KEY_THREE,
        KeyboardKey::KEY_FOUR,
        KeyboardKey::KEY_FIVE,
        KeyboardKey::KEY_SIX,
        KeyboardKey::KEY_SEVEN,
        KeyboardKey::KEY_EIGHT,
        KeyboardKey::KEY_NINE,
    ];
    match key {
        KeyboardKey::KEY_RIGHT => Some(ViewAction::Next),
        KeyboardKey::KEY_LEFT => Some(ViewAction::Previous),
        _ => DIGITS.iter().position(|k| *k == key).map(ViewAction::GoTo),
    }
}

/// Maps a click to an arrow or a dot indicator.
pub fn hit_test(x: f32, y: f32, slide_count: usize) -> Option<ViewAction> {
    let within = |cx: i32, cy: i32, r: f32| {
        let (dx, dy) = (x - cx as f32, y - cy as f32);
        dx * dx + dy * dy <= r * r
    };

    let arrow_y = IMAGE_TOP + IMAGE_HEIGHT / 2;
    if within(MARGIN + ARROW_INSET, arrow_y, ARROW_RADIUS) {
        return Some(ViewAction::Previous);
    }
    if within(MARGIN + IMAGE_WIDTH - ARROW_INSET, arrow_y, ARROW_RADIUS) {
        return Some(ViewAction::Next);
    }

    (0..slide_count)
        .find(|&i| within(dot_x(i, slide_count), DOTS_TOP, DOT_HIT_RADIUS))
        .map(ViewAction::GoTo)
}

fn dot_x(index: usize, count: usize) -> i32 {
    let row = (count as i32 - 1) * DOT_SPACING;
    RENDER_WIDTH / 2 - row / 2 + index as i32 * DOT_SPACING
}

/// Greedy word wrap on character count.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

fn with_opacity(color: Color, opacity: f32) -> Color {
    Color::new(color.r, color.g, color.b, (opacity.clamp(0.0, 1.0) * 255.0) as u8)
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Horizontal position of the slide strip, in slide widths. Eases toward
/// the carousel's current index whenever it changes.
#[derive(Debug, Clone)]
pub struct SlideStrip {
    from: f32,
    to: usize,
    elapsed: Duration,
    position: f32,
}

impl SlideStrip {
    pub fn new(index: usize) -> Self {
        Self {
            from: index as f32,
            to: index,
            elapsed: SLIDE_TRANSITION,
            position: index as f32,
        }
    }

    pub fn update(&mut self, dt: Duration, target: usize) {
        if target != self.to {
            // start from wherever the strip is, even mid-transition
            self.from = self.position;
            self.to = target;
            self.elapsed = Duration::ZERO;
        }
        self.elapsed = (self.elapsed + dt).min(SLIDE_TRANSITION);
        let t = self.elapsed.as_secs_f32() / SLIDE_TRANSITION.as_secs_f32();
        self.position = self.from + (self.to as f32 - self.from) * ease_in_out(t);
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn is_moving(&self) -> bool {
        self.elapsed < SLIDE_TRANSITION
    }

    /// Slides overlapping the image box, with their x offset in slide widths.
    pub fn visible(&self, count: usize) -> impl Iterator<Item = (usize, f32)> + '_ {
        (0..count)
            .map(move |i| (i, i as f32 - self.position))
            .filter(|(_, offset)| offset.abs() < 1.0)
    }
}

/// Replays the hero animation when the window comes back, the way a page
/// replays it on focus or when it becomes visible again.
#[derive(Debug, Clone, Copy)]
pub struct WindowWatch {
    focused: bool,
    minimized: bool,
}

impl WindowWatch {
    pub fn new(focused: bool, minimized: bool) -> Self {
        Self { focused, minimized }
    }

    /// True when focus was regained or the window was restored.
    pub fn observe(&mut self, focused: bool, minimized: bool) -> bool {
        let regained = focused && !self.focused;
        let restored = !minimized && self.minimized;
        self.focused = focused;
        self.minimized = minimized;
        regained || restored
    }
}

pub struct CarouselView {
    textures: Vec<Option<Texture2D>>,
    strip: SlideStrip,
}

impl CarouselView {
    pub fn new(textures: Vec<Option<Texture2D>>, index: usize) -> Self {
        Self {
            textures,
            strip: SlideStrip::new(index),
        }
    }

    pub fn update(&mut self, dt: Duration, carousel: &Carousel) {
        self.strip.update(dt, carousel.current_index());
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, carousel: &Carousel, hero: &Typewriter) {
        d.clear_background(Color::WHITE);

        self.draw_hero(d, hero);
        self.draw_strip(d, carousel.slide_count());
        self.draw_arrows(d);

        let slide = carousel.current_slide();
        d.draw_text(&slide.title, MARGIN, TITLE_TOP, 28, TEXT_DARK);
        for (i, line) in wrap(&slide.description, DESCRIPTION_WRAP).iter().enumerate() {
            d.draw_text(line, MARGIN, DESCRIPTION_TOP + i as i32 * 22, 18, TEXT_SOFT);
        }

        let count = carousel.slide_count();
        for i in 0..count {
            let active = i == carousel.current_index();
            let (radius, color) = if active { (DOT_RADIUS * 1.2, ACCENT) } else { (DOT_RADIUS, MUTED) };
            d.draw_circle(dot_x(i, count), DOTS_TOP, radius, color);
        }

        d.draw_rectangle(MARGIN, PROGRESS_TOP, IMAGE_WIDTH, PROGRESS_HEIGHT, MUTED);
        let filled = (IMAGE_WIDTH as f32 * carousel.progress()) as i32;
        d.draw_rectangle(MARGIN, PROGRESS_TOP, filled, PROGRESS_HEIGHT, ACCENT);

        if !carousel.is_auto_playing() {
            if let Some(resume_in) = carousel.resume_in() {
                let text = format!("paused, resuming in {:.1}s", resume_in.as_secs_f32());
                d.draw_text(&text, MARGIN, PROGRESS_TOP + 12, 14, TEXT_SOFT);
            }
        }
    }

    fn draw_hero(&self, d: &mut RaylibDrawHandle, hero: &Typewriter) {
        let lines = [
            (HeroLine::Greeting, 30, 24, TEXT_SOFT),
            (HeroLine::Name, 60, 40, ACCENT),
            (HeroLine::Role, 108, 20, TEXT_DARK),
        ];
        for (line, top, size, color) in lines {
            let color = with_opacity(color, hero.opacity(line));
            d.draw_text(hero.visible_text(line), MARGIN, top, size, color);
        }
    }

    fn draw_strip(&self, d: &mut RaylibDrawHandle, count: usize) {
        let mut s = d.begin_scissor_mode(MARGIN, IMAGE_TOP, IMAGE_WIDTH, IMAGE_HEIGHT);
        for (index, offset) in self.strip.visible(count) {
            let left = MARGIN + (offset * IMAGE_WIDTH as f32) as i32;
            self.draw_image(&mut s, index, left);
        }
    }

    fn draw_image(&self, d: &mut impl RaylibDraw, index: usize, left: i32) {
        let Some(Some(texture)) = self.textures.get(index) else {
            // Fallback for images that failed to load
            d.draw_rectangle_lines(left, IMAGE_TOP, IMAGE_WIDTH, IMAGE_HEIGHT, MUTED);
            d.draw_text(
                "Image not found",
                left + IMAGE_WIDTH / 2 - 80,
                IMAGE_TOP + IMAGE_HEIGHT / 2 - 10,
                20,
                TEXT_SOFT,
            );
            return;
        };

        // Fit inside the image box, keeping aspect ratio
        let tex_width = texture.width() as f32;
        let tex_height = texture.height() as f32;
        let scale = (IMAGE_WIDTH as f32 / tex_width).min(IMAGE_HEIGHT as f32 / tex_height);
        let width = tex_width * scale;
        let height = tex_height * scale;
        let x = left as f32 + (IMAGE_WIDTH as f32 - width) / 2.0;
        let y = IMAGE_TOP as f32 + (IMAGE_HEIGHT as f32 - height) / 2.0;

        d.draw_texture_pro(
            texture,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            Rectangle::new(x, y, width, height),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }

    fn draw_arrows(&self, d: &mut RaylibDrawHandle) {
        let y = IMAGE_TOP + IMAGE_HEIGHT / 2;
        for (x, glyph) in [(MARGIN + ARROW_INSET, "<"), (MARGIN + IMAGE_WIDTH - ARROW_INSET, ">")] {
            d.draw_circle(x, y, ARROW_RADIUS, MUTED);
            d.draw_text(glyph, x - 5, y - 10, 20, TEXT_DARK);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys_and_digits() {
        assert_eq!(action_for_key(KeyboardKey::KEY_RIGHT), Some(ViewAction::Next));
        assert_eq!(action_for_key(KeyboardKey::KEY_LEFT), Some(ViewAction::Previous));
        assert_eq!(action_for_key(KeyboardKey::KEY_ONE), Some(ViewAction::GoTo(0)));
        assert_eq!(action_for_key(KeyboardKey::KEY_NINE), Some(ViewAction::GoTo(8)));
        assert_eq!(action_for_key(KeyboardKey::KEY_SPACE), None);
    }

    #[test]
    fn clicks_on_dots_and_arrows() {
        let y = (IMAGE_TOP + IMAGE_HEIGHT / 2) as f32;
        assert_eq!(hit_test((MARGIN + ARROW_INSET) as f32, y, 3), Some(ViewAction::Previous));
        assert_eq!(
            hit_test((MARGIN + IMAGE_WIDTH - ARROW_INSET) as f32, y, 3),
            Some(ViewAction::Next)
        );
        for i in 0..3 {
            assert_eq!(
                hit_test(dot_x(i, 3) as f32, DOTS_TOP as f32, 3),
                Some(ViewAction::GoTo(i))
            );
        }
        assert_eq!(hit_test(5.0, 5.0, 3), None);
    }

    #[test]
    fn dots_are_centered() {
        assert_eq!(dot_x(1, 3), RENDER_WIDTH / 2);
        assert_eq!(dot_x(0, 1), RENDER_WIDTH / 2);
    }

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn strip_eases_to_new_slide() {
        let mut strip = SlideStrip::new(0);
        assert!(!strip.is_moving());
        strip.update(ms(0), 1);
        assert!(strip.is_moving());
        assert_eq!(strip.position(), 0.0);

        strip.update(SLIDE_TRANSITION / 2, 1);
        assert!((strip.position() - 0.5).abs() < 1e-4);
        // two slides share the box mid-transition
        let shown: Vec<usize> = strip.visible(3).map(|(i, _)| i).collect();
        assert_eq!(shown, vec![0, 1]);

        strip.update(ms(1000), 1);
        assert!(!strip.is_moving());
        assert_eq!(strip.position(), 1.0);
        assert_eq!(strip.visible(3).collect::<Vec<_>>(), vec![(1, 0.0)]);
    }

    #[test]
    fn strip_retargets_from_current_position() {
        let mut strip = SlideStrip::new(0);
        strip.update(SLIDE_TRANSITION / 2, 2);
        let mid = strip.position();
        assert!(mid > 0.0 && mid < 2.0);

        strip.update(ms(0), 0);
        assert_eq!(strip.position(), mid);
        strip.update(SLIDE_TRANSITION, 0);
        assert_eq!(strip.position(), 0.0);
    }

    #[test]
    fn ease_curve_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(0.5), 0.5);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert!(ease_in_out(0.25) < 0.25);
    }

    #[test]
    fn window_watch_replays_on_focus_and_restore() {
        let mut watch = WindowWatch::new(true, false);
        assert!(!watch.observe(true, false));

        // lose and regain focus
        assert!(!watch.observe(false, false));
        assert!(watch.observe(true, false));

        // minimize and restore without a focus change
        assert!(!watch.observe(true, true));
        assert!(watch.observe(true, false));

        // both at once replays once
        watch.observe(false, true);
        assert!(watch.observe(true, false));
        assert!(!watch.observe(true, false));
    }

    #[test]
    fn wraps_on_word_boundaries() {
        let lines = wrap("one two three four", 9);
        assert_eq!(lines, vec!["one two", "three", "four"]);
        assert!(wrap("", 10).is_empty());
    }
}
