use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use carousel::{Carousel, CarouselState, CarouselTiming, Slide, SlideRegistry};

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn registry(count: u32) -> SlideRegistry {
    let slides = (1..=count)
        .map(|id| Slide::new(id, &format!("slide_{id}.png"), "title", "description"))
        .collect();
    SlideRegistry::new(slides).unwrap()
}

fn carousel(count: u32) -> Carousel {
    Carousel::new(
        registry(count),
        CarouselTiming {
            autoplay_interval: ms(4000),
            resume_cooldown: ms(5000),
        },
    )
}

#[test]
fn autoplay_pause_and_resume_timeline() {
    let mut c = carousel(3);
    assert_eq!(c.current_index(), 0);
    assert_eq!(c.state(), CarouselState::Playing);

    // t = 4000
    c.update(ms(4000));
    assert_eq!(c.current_index(), 1);

    // t = 4100, manual next
    c.update(ms(100));
    c.next();
    assert_eq!(c.current_index(), 2);
    assert_eq!(c.state(), CarouselState::Paused);
    assert_eq!(c.resume_in(), Some(ms(5000)));

    // t = 9099, still paused
    c.update(ms(4999));
    assert_eq!(c.state(), CarouselState::Paused);

    // t = 9100, resumed with a fresh interval
    c.update(ms(1));
    assert_eq!(c.state(), CarouselState::Playing);
    assert_eq!(c.current_index(), 2);
    assert_eq!(c.next_advance_in(), Some(ms(4000)));

    // t = 13099
    c.update(ms(3999));
    assert_eq!(c.current_index(), 2);

    // t = 13100
    c.update(ms(1));
    assert_eq!(c.current_index(), 0);
}

#[test]
fn timeline_holds_at_frame_granularity() {
    let mut c = carousel(3);
    let frame = ms(20);

    // 4100 ms of frames, then a manual next
    for _ in 0..205 {
        c.update(frame);
    }
    assert_eq!(c.current_index(), 1);
    c.next();

    // resume at 9100
    for _ in 0..249 {
        c.update(frame);
    }
    assert_eq!(c.state(), CarouselState::Paused);
    c.update(frame);
    assert_eq!(c.state(), CarouselState::Playing);
    assert_eq!(c.current_index(), 2);

    // next tick at 13100
    for _ in 0..199 {
        c.update(frame);
    }
    assert_eq!(c.current_index(), 2);
    c.update(frame);
    assert_eq!(c.current_index(), 0);
}

#[test]
fn go_to_seven_on_three_slides() {
    let mut c = carousel(3);
    c.go_to(7);
    assert_eq!(c.current_index(), 1);
    assert_eq!(c.state(), CarouselState::Paused);
}

#[test]
fn no_advance_while_paused() {
    let mut c = carousel(3);
    c.go_to(1);
    for _ in 0..49 {
        c.update(ms(100));
    }
    assert_eq!(c.current_index(), 1);
}

#[test]
fn repeated_navigation_resumes_once_after_last_interaction() {
    let mut c = carousel(5);
    c.next();
    c.update(ms(3000));
    c.next();
    assert_eq!(c.current_index(), 2);

    // first resume would have been due at 5000
    c.update(ms(2500));
    assert_eq!(c.state(), CarouselState::Paused);

    // 5000 after the second interaction
    c.update(ms(2500));
    assert_eq!(c.state(), CarouselState::Playing);

    // exactly one restart: one tick per interval from here
    c.update(ms(8000));
    assert_eq!(c.current_index(), 4);
}

#[test]
fn dispose_mid_cooldown_stops_everything() {
    let mut c = carousel(3);
    c.next();
    c.update(ms(2000));
    c.dispose();

    c.update(ms(3000));
    assert_eq!(c.state(), CarouselState::Disposed);
    c.update(ms(60_000));
    assert_eq!(c.current_index(), 1);
    assert_eq!(c.resume_in(), None);
    assert_eq!(c.next_advance_in(), None);
}

#[test]
fn advance_matches_modular_arithmetic() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let count = rng.random_range(1..=12u32);
        let start = rng.random_range(0..count as i64);
        let steps = rng.random_range(0..100usize);

        let mut c = carousel(count);
        c.go_to(start);
        for _ in 0..steps {
            c.advance();
        }
        let expected = (start as usize + steps) % count as usize;
        assert_eq!(c.current_index(), expected);
    }
}

#[test]
fn go_to_normalizes_any_integer() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let count = rng.random_range(1..=9u32);
        let target: i64 = rng.random_range(-1_000_000..1_000_000);
        let mut c = carousel(count);
        c.go_to(target);
        assert_eq!(c.current_index() as i64, target.rem_euclid(count as i64));
    }
}

#[test]
fn random_sessions_keep_invariants() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let count = rng.random_range(1..=6u32);
        let mut c = carousel(count);
        for _ in 0..300 {
            match rng.random_range(0..5) {
                0 => c.next(),
                1 => c.previous(),
                2 => c.go_to(rng.random_range(-20..20)),
                _ => c.update(ms(rng.random_range(0..3000))),
            }
            assert!(c.current_index() < count as usize);
            match c.state() {
                CarouselState::Playing => {
                    assert!(c.next_advance_in().is_some());
                    assert!(c.resume_in().is_none());
                }
                CarouselState::Paused => {
                    assert!(c.next_advance_in().is_none());
                    assert!(c.resume_in().is_some());
                }
                CarouselState::Disposed => unreachable!(),
            }
        }
    }
}
