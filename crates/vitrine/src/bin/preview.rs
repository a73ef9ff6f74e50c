//! # Background Preview
//!
//! Runs the whole page headless: the background draws into a recording
//! surface and the frame clock is fired by hand.
//!
//! Usage: `vitrine_preview [frames] [width] [height] [seed] [site.toml]`

use std::process::ExitCode;
use std::time::Instant;

use vitrine::background::{ManualScheduler, RecordingSurface};
use vitrine::ui::RenderCommand;
use vitrine::{MemoryPreferences, Portfolio, PortfolioHost, SiteConfig};

struct Args {
    frames: u64,
    width: u32,
    height: u32,
    seed: u64,
    config: Option<String>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = std::env::args().skip(1);
    let mut next = |name: &str, default: u64| -> Result<u64, String> {
        match args.next() {
            Some(value) => value
                .parse()
                .map_err(|_| format!("{name} must be a number, got {value:?}")),
            None => Ok(default),
        }
    };
    let frames = next("frames", 600)?;
    let width = u32::try_from(next("width", 1280)?).map_err(|e| e.to_string())?;
    let height = u32::try_from(next("height", 720)?).map_err(|e| e.to_string())?;
    let seed = next("seed", 42)?;
    Ok(Args {
        frames,
        width,
        height,
        seed,
        config: args.next(),
    })
}

fn load_config(path: Option<&str>) -> Result<SiteConfig, String> {
    let Some(path) = path else {
        return Ok(SiteConfig::default());
    };
    let text = std::fs::read_to_string(path).map_err(|e| format!("{path}: {e}"))?;
    SiteConfig::from_toml_str(&text).map_err(|e| format!("{path}: {e}"))
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("error: {message}");
            return ExitCode::FAILURE;
        }
    };
    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {message}");
            return ExitCode::FAILURE;
        }
    };

    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║           VITRINE BACKGROUND PREVIEW                             ║");
    println!("╚══════════════════════════════════════════════════════════════════╝");
    println!();

    let clock = ManualScheduler::new();
    let mut page = Portfolio::new(
        config,
        PortfolioHost {
            surface: Some(RecordingSurface::new(args.width, args.height)),
            scheduler: clock.clone(),
            preferences: MemoryPreferences::new(),
            seed: args.seed,
            reveal_ids: Vec::new(),
            intersection_observer: true,
        },
    );

    let particles = page.background().field().len();
    println!(
        "Viewport {}x{}, seed {}: {} particles",
        args.width, args.height, args.seed, particles
    );

    let start = Instant::now();
    let mut frames = 0u64;
    let mut lowest = f32::MAX;
    while frames < args.frames && clock.fire() {
        if frames == args.frames / 2 {
            let mode = page.toggle_theme();
            println!("Frame {frames}: theme switched to {mode}");
        }
        page.frame();
        frames += 1;
        for particle in page.background().field().particles() {
            lowest = lowest.min(particle.y);
        }
    }
    let elapsed = start.elapsed();
    page.destroy();

    let Some(surface) = page.background().surface() else {
        return ExitCode::FAILURE;
    };
    let glyphs = surface
        .frame()
        .iter()
        .filter(|command| matches!(command, RenderCommand::Text { .. }))
        .count();

    println!();
    println!("Frames ticked:      {frames}");
    println!("Surface clears:     {}", surface.clear_count());
    println!("Glyphs last frame:  {glyphs}");
    println!("Lowest y reached:   {lowest:.1}");
    println!("Frame requests:     {}", clock.requested());
    println!("Cancelled on stop:  {}", clock.cancelled());
    if frames > 0 {
        println!(
            "Avg frame time:     {:.2}µs",
            elapsed.as_secs_f64() * 1_000_000.0 / frames as f64
        );
    }
    ExitCode::SUCCESS
}
