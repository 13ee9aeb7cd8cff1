mod config;
mod demos;
mod display;
mod util;

use anyhow::{anyhow, Context};
use clap::Parser;
use config::DemoConfig;
use demos::{Demo, EaseCurves, Frame, PerlinField, PointClouds, ShakyRects};
use display::{
    draw_text, text_width, Display, DisplayOptions, InputEvent, PixelBuffer, RenderTarget,
    DEFAULT_HEIGHT, DEFAULT_SCALE, DEFAULT_WIDTH, LINE_HEIGHT,
};
use geo::Vec2;
use log::{error, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sdl2::keyboard::Keycode;
use std::path::PathBuf;
use std::time::Instant;
use util::FpsCounter;

/// Frame rate the demos are tuned for; demos are paused below half of it
const TARGET_FPS: f32 = 60.0;

/// Largest accepted buffer side and window multiplier
const MAX_SIZE: i64 = 8192;
const MAX_SCALE: i64 = 16;

#[derive(Parser, Debug)]
#[command(name = "geo-examples", version, about = "Interactive showcase for the geo library")]
struct Args {
    /// Logical buffer width
    #[arg(
        long,
        default_value_t = DEFAULT_WIDTH,
        value_parser = clap::value_parser!(u32).range(1..=MAX_SIZE)
    )]
    width: u32,

    /// Logical buffer height
    #[arg(
        long,
        default_value_t = DEFAULT_HEIGHT,
        value_parser = clap::value_parser!(u32).range(1..=MAX_SIZE)
    )]
    height: u32,

    /// Window size multiplier
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_SCALE,
        value_parser = clap::value_parser!(u32).range(1..=MAX_SCALE)
    )]
    scale: u32,

    /// Disable VSync for uncapped framerate
    #[arg(long)]
    no_vsync: bool,

    /// Start in desktop fullscreen
    #[arg(long)]
    fullscreen: bool,

    /// JSON file overriding demo parameters
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the random point clouds
    #[arg(long)]
    seed: Option<u64>,

    /// Write the effective config to PATH and exit
    #[arg(long, value_name = "PATH")]
    write_config: Option<PathBuf>,
}

/// Demo index selected by a number key (1-based on the keyboard)
fn demo_for_key(key: Keycode, count: usize) -> Option<usize> {
    let index = match key {
        Keycode::Num1 => 0,
        Keycode::Num2 => 1,
        Keycode::Num3 => 2,
        Keycode::Num4 => 3,
        Keycode::Num5 => 4,
        Keycode::Num6 => 5,
        Keycode::Num7 => 6,
        Keycode::Num8 => 7,
        Keycode::Num9 => 8,
        _ => return None,
    };
    (index < count).then_some(index)
}

/// What a key press asks the main loop to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyAction {
    Quit,
    ToggleFullscreen,
    Select(usize),
    Ignore,
}

/// Map a key-down to an action. `F` only fires on the initial press, not on
/// auto-repeat. Left/Right wrap around the demo list.
fn handle_key(key: Keycode, repeat: bool, current: usize, count: usize) -> KeyAction {
    match key {
        Keycode::Escape => KeyAction::Quit,
        Keycode::F if !repeat => KeyAction::ToggleFullscreen,
        Keycode::Left if count > 0 => KeyAction::Select((current + count - 1) % count),
        Keycode::Right if count > 0 => KeyAction::Select((current + 1) % count),
        _ => demo_for_key(key, count).map_or(KeyAction::Ignore, KeyAction::Select),
    }
}

/// Update and draw one frame of `demo` plus the overlay. While running slowly
/// nothing is touched, so the previous image is presented again.
/// Returns whether the buffer was redrawn.
fn step_frame(
    demo: &mut dyn Demo,
    frame: &Frame,
    overlay: &str,
    buffer: &mut PixelBuffer,
    running_slowly: bool,
) -> bool {
    if running_slowly {
        return false;
    }
    demo.update(frame);
    buffer.clear(0, 0, 0);
    demo.render(buffer);

    // Dim panel so the text reads over bright demos
    let lines = overlay.lines().count() as u32;
    let panel_width = text_width(overlay) + 2;
    buffer.fill_rect_blend(0, 0, panel_width, lines * LINE_HEIGHT, 0, 0, 0, 0x99);
    draw_text(buffer, 1, 1, overlay, 255, 255, 255);
    true
}

/// Help text drawn under the FPS line
fn options_text(current: &str, names: &[&str]) -> String {
    let mut text = format!("\nPress a number. Current: {}", current);
    for (i, name) in names.iter().enumerate() {
        text.push_str(&format!("\n{} - {}", i + 1, name));
    }
    text
}

fn load_config(path: Option<&PathBuf>) -> DemoConfig {
    let Some(path) = path else {
        return DemoConfig::default();
    };
    match DemoConfig::load(path) {
        Ok(config) => {
            info!("Loaded config from {}", path.display());
            config
        },
        Err(e) => {
            warn!("{}; using defaults", e);
            DemoConfig::default()
        },
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = load_config(args.config.as_ref());
    if let Some(path) = &args.write_config {
        config
            .save(path)
            .with_context(|| format!("writing config to {}", path.display()))?;
        info!("Config written to {}", path.display());
        return Ok(());
    }

    let options = DisplayOptions {
        width: args.width,
        height: args.height,
        scale: args.scale,
        vsync: !args.no_vsync,
        fullscreen: args.fullscreen,
        ..DisplayOptions::default()
    };
    let (mut display, texture_creator) = Display::with_options(&options).map_err(|e| anyhow!(e))?;
    let (width, height) = (display.width(), display.height());
    let mut target =
        RenderTarget::with_size(&texture_creator, width, height).map_err(|e| anyhow!(e))?;
    let mut buffer = PixelBuffer::with_size(width, height);

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut demos: Vec<Box<dyn Demo>> = vec![
        Box::new(EaseCurves::new(config.ease.clone())),   // 1
        Box::new(PerlinField::new(&config.perlin)),       // 2
        Box::new(ShakyRects::new(&config.shake)),         // 3
        Box::new(PointClouds::new(&config.vec_gen, rng)), // 4
    ];
    let mut current = 0;

    let mut fps_counter = FpsCounter::new(60);
    let clock = Instant::now();
    let mut cursor = Vec2::new(-1.0, -1.0);

    info!("=== geo examples ===");
    info!("Resolution: {}x{} (x{})", width, height, options.scale.max(1));
    if options.vsync {
        info!("VSync: ON. Use --no-vsync for uncapped.");
    } else {
        info!("VSync: OFF (uncapped framerate)");
    }
    info!("Controls:");
    for (i, demo) in demos.iter().enumerate() {
        info!("  {}          - {}", i + 1, demo.name());
    }
    info!("  Left/Right - Cycle through demos");
    info!("  F          - Toggle fullscreen");
    info!("  Escape     - Quit");

    'main: loop {
        let (dt, avg_fps) = fps_counter.tick();

        for event in display.poll_events() {
            match event {
                InputEvent::Quit => break 'main,
                InputEvent::KeyDown { key, repeat } => {
                    match handle_key(key, repeat, current, demos.len()) {
                        KeyAction::Quit => break 'main,
                        KeyAction::ToggleFullscreen => {
                            if let Err(e) = display.toggle_fullscreen() {
                                error!("Failed to toggle fullscreen: {}", e);
                            }
                        },
                        KeyAction::Select(index) => current = index,
                        KeyAction::Ignore => {},
                    }
                },
                InputEvent::MouseMove { x, y } => cursor = Vec2::from_i32(x, y),
            }
        }

        let frame = Frame {
            dt: dt as f64,
            time: clock.elapsed().as_secs_f64(),
            cursor,
            width,
        };
        let names: Vec<&str> = demos.iter().map(|d| d.name()).collect();
        let overlay = format!("FPS: {:.2}{}", avg_fps, options_text(names[current], &names));
        step_frame(
            demos[current].as_mut(),
            &frame,
            &overlay,
            &mut buffer,
            fps_counter.is_running_slowly(TARGET_FPS),
        );

        display.present(&mut target, &buffer).map_err(|e| anyhow!(e))?;
    }

    info!("bye");
    Ok(())
}
