use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;
use tracing::info;
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use carousel::constants::*;
use carousel::{Carousel, CarouselConfig, Typewriter};

mod texture_loader;
mod view;

use crate::texture_loader::load_slide_textures;
use crate::view::{CarouselView, WindowWatch, action_for_key, hit_test};

#[derive(Parser, Debug)]
#[command(name = "carousel", version, about = "Onboarding carousel with hero typewriter")]
struct Args {
    /// RON file with timing and slides; the built-in onboarding slides are used otherwise
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory slide image references are resolved against
    #[arg(short, long, default_value = ".")]
    assets: PathBuf,

    /// Override the autoplay interval (milliseconds)
    #[arg(short, long)]
    interval: Option<u64>,

    #[arg(long, default_value_t = FPS)]
    fps: u32,

    /// Hero greeting line
    #[arg(long, default_value = DEFAULT_GREETING)]
    greeting: String,

    /// Hero name line
    #[arg(long, default_value = DEFAULT_NAME)]
    name: String,

    /// Hero role line
    #[arg(long, default_value = DEFAULT_ROLE)]
    role: String,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);
    Registry::default().with(filter).with(fmt_layer).init();
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => CarouselConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => CarouselConfig::default(),
    };
    if let Some(interval) = args.interval {
        config.autoplay_interval_ms = interval;
    }
    let timing = config.timing()?;
    let registry = config.registry()?;

    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH, RENDER_HEIGHT)
        .title("Onboarding Carousel")
        .vsync()
        .build();
    rl.set_target_fps(args.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let textures = load_slide_textures(&mut rl, &thread, &args.assets, &registry);
    let mut carousel = Carousel::new(registry, timing);
    let mut view = CarouselView::new(textures, carousel.current_index());
    let mut hero = Typewriter::new(&args.greeting, &args.name, &args.role);
    hero.start();

    let mut window = WindowWatch::new(rl.is_window_focused(), rl.is_window_minimized());

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = Duration::from_secs_f32(rl.get_frame_time().max(0.0));

        // --- Input ---
        while let Some(key) = rl.get_key_pressed() {
            if let Some(action) = action_for_key(key) {
                action.apply(&mut carousel);
            }
        }
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let pos = rl.get_mouse_position();
            if let Some(action) = hit_test(pos.x, pos.y, carousel.slide_count()) {
                action.apply(&mut carousel);
            }
        }

        // Replay the hero animation when the window is focused or restored
        if window.observe(rl.is_window_focused(), rl.is_window_minimized()) {
            hero.restart();
        }

        // --- Update ---
        carousel.update(dt);
        hero.update(dt);
        view.update(dt, &carousel);

        // --- Draw ---
        let mut d = rl.begin_drawing(&thread);
        view.draw(&mut d, &carousel, &hero);
    }

    hero.cancel();
    carousel.dispose();
    info!("window closed");
    Ok(())
}
