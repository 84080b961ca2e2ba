//! Hero title typewriter.
//!
//! Three lines (greeting, name, role) are typed one character at a time.
//! The greeting is marked finished once typed, and each following line
//! fades in before its text starts. All timing is driven by
//! [`Typewriter::update`], and every instance owns its own running state,
//! so several hero views can animate independently.

use std::time::Duration;

use tracing::debug;

use crate::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroLine {
    Greeting = 0,
    Name = 1,
    Role = 2,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Step {
    Delay(Duration),
    Type { line: HeroLine, per_char: Duration },
    MarkFinished(HeroLine),
    FadeIn { line: HeroLine, duration: Duration },
}

#[derive(Debug, Clone, Default)]
struct Line {
    text: String,
    typed: usize,
    opacity: f32,
    finished: bool,
}

impl Line {
    fn new(text: &str, fallback: &str) -> Self {
        let text = text.trim();
        Self {
            text: (if text.is_empty() { fallback } else { text }).to_string(),
            ..Self::default()
        }
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn visible(&self) -> &str {
        let end = self
            .text
            .char_indices()
            .nth(self.typed)
            .map_or(self.text.len(), |(i, _)| i);
        &self.text[..end]
    }
}

#[derive(Debug, Clone, Copy)]
struct Cursor {
    step: usize,
    elapsed: Duration,
}

#[derive(Debug)]
pub struct Typewriter {
    lines: [Line; 3],
    script: Vec<Step>,
    cursor: Option<Cursor>,
    complete: bool,
}

impl Typewriter {
    /// Empty texts fall back to the stock hero copy.
    pub fn new(greeting: &str, name: &str, role: &str) -> Self {
        let mut typewriter = Self {
            lines: [
                Line::new(greeting, DEFAULT_GREETING),
                Line::new(name, DEFAULT_NAME),
                Line::new(role, DEFAULT_ROLE),
            ],
            script: hero_script(),
            cursor: None,
            complete: false,
        };
        typewriter.reset_lines();
        typewriter
    }

    /// Returns false if an animation is already in flight.
    pub fn start(&mut self) -> bool {
        if self.cursor.is_some() {
            return false;
        }
        self.reset_lines();
        self.complete = false;
        self.cursor = Some(Cursor {
            step: 0,
            elapsed: Duration::ZERO,
        });
        debug!("typewriter started");
        true
    }

    /// Stops the animation where it is. Safe to call at any time.
    pub fn cancel(&mut self) {
        if self.cursor.take().is_some() {
            debug!("typewriter cancelled");
        }
    }

    /// Clears everything typed so far and plays the script from the top.
    pub fn restart(&mut self) {
        self.cancel();
        self.start();
    }

    pub fn is_running(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn visible_text(&self, line: HeroLine) -> &str {
        self.lines[line as usize].visible()
    }

    pub fn full_text(&self, line: HeroLine) -> &str {
        &self.lines[line as usize].text
    }

    pub fn opacity(&self, line: HeroLine) -> f32 {
        self.lines[line as usize].opacity
    }

    pub fn is_finished(&self, line: HeroLine) -> bool {
        self.lines[line as usize].finished
    }

    pub fn update(&mut self, dt: Duration) {
        let mut budget = dt;
        while let Some(mut cursor) = self.cursor {
            let Some(step) = self.script.get(cursor.step).copied() else {
                self.cursor = None;
                self.complete = true;
                debug!("typewriter complete");
                return;
            };

            let available = cursor.elapsed + budget;
            match self.run_step(step, available) {
                Some(leftover) => {
                    budget = leftover;
                    cursor.step += 1;
                    cursor.elapsed = Duration::ZERO;
                }
                None => {
                    cursor.elapsed = available;
                    self.cursor = Some(cursor);
                    return;
                }
            }
            self.cursor = Some(cursor);
        }
    }

    /// Applies `available` time to a step. Returns the unused time once the
    /// step is done, or `None` if it still needs more.
    fn run_step(&mut self, step: Step, available: Duration) -> Option<Duration> {
        match step {
            Step::Delay(duration) => available.checked_sub(duration),
            Step::MarkFinished(line) => {
                self.lines[line as usize].finished = true;
                Some(available)
            }
            Step::FadeIn { line, duration } => {
                let line = &mut self.lines[line as usize];
                match available.checked_sub(duration) {
                    Some(leftover) => {
                        line.opacity = 1.0;
                        Some(leftover)
                    }
                    None => {
                        line.opacity = available.as_secs_f32() / duration.as_secs_f32();
                        None
                    }
                }
            }
            Step::Type { line, per_char } => {
                let line = &mut self.lines[line as usize];
                // `available` counts from the start of this step
                let total = line.char_count();
                let ticks = (available.as_nanos() / per_char.as_nanos()) as usize;
                line.typed = ticks.min(total);
                if line.typed < total {
                    return None;
                }
                Some(available.saturating_sub(per_char * total as u32))
            }
        }
    }

    fn reset_lines(&mut self) {
        for (i, line) in self.lines.iter_mut().enumerate() {
            line.typed = 0;
            line.finished = false;
            line.opacity = if i == HeroLine::Greeting as usize { 1.0 } else { 0.0 };
        }
    }
}

fn hero_script() -> Vec<Step> {
    vec![
        Step::Delay(TYPEWRITER_START_DELAY),
        Step::Type { line: HeroLine::Greeting, per_char: GREETING_CHAR_INTERVAL },
        Step::MarkFinished(HeroLine::Greeting),
        Step::Delay(TYPEWRITER_LINE_PAUSE),
        Step::FadeIn { line: HeroLine::Name, duration: TYPEWRITER_FADE_IN },
        Step::Type { line: HeroLine::Name, per_char: NAME_CHAR_INTERVAL },
        Step::Delay(TYPEWRITER_LINE_PAUSE),
        Step::FadeIn { line: HeroLine::Role, duration: TYPEWRITER_FADE_IN },
        Step::Type { line: HeroLine::Role, per_char: ROLE_CHAR_INTERVAL },
    ]
}
