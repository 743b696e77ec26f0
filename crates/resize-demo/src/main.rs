use anyhow::{Context, Result};
use rune_config::{RuneConfig, parse_resolution};
use rune_resize::{CanvasResizer, CanvasScaler, Size2D};

/// Screens run when no `WIDTHxHEIGHT` arguments are given.
const DEVICE_SCREENS: [(&str, u32, u32); 6] = [
    ("iPhone 7", 1136, 640),
    ("iPad", 2048, 1536),
    ("Android", 1024, 640),
    ("iPhone X", 2436, 1125),
    ("Full HD", 1920, 1080),
    ("Portrait strip", 100, 1000),
];

/// Stand-in for a host scaler: remembers what it was told and logs it.
#[derive(Debug, Default)]
struct LoggingScaler {
    reference: Size2D,
    match_width_or_height: f32,
}

impl CanvasScaler for LoggingScaler {
    fn set_reference_resolution(&mut self, reference: Size2D) {
        log::debug!("scaler reference resolution <- {}", reference);
        self.reference = reference;
    }

    fn set_match_width_or_height(&mut self, value: f32) {
        log::debug!("scaler match width/height <- {}", value);
        self.match_width_or_height = value;
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let mut config = RuneConfig::load();
    if std::env::args().any(|a| a == "--overlay") {
        config.debug.overlay = true;
    }
    if std::env::args().any(|a| a == "--strict") {
        config.resize.strict_bounds = true;
    }

    let mut resizer = CanvasResizer::from_config(&config.resize, LoggingScaler::default())
        .context("invalid [resize] configuration")?;
    if let Err(err) = resizer.config().check_bounds() {
        log::warn!("{}", err);
    }

    let screens = screens_from_args()?;
    for (i, (label, screen)) in screens.into_iter().enumerate() {
        let result = if i == 0 {
            resizer.on_start(screen).map(|_| ())
        } else {
            // Repeated sizes are debounced; the scaler keeps its values.
            resizer.poll(screen).map(|_| ())
        };
        match result {
            Ok(_) => {
                let scaler = resizer.scaler();
                println!(
                    "{:<16} {:>6}x{:<6} match={} reference={}",
                    label,
                    screen.x,
                    screen.y,
                    scaler.match_width_or_height,
                    scaler.reference
                );
            }
            Err(err) => println!("{:<16} {:>6}x{:<6} skipped: {}", label, screen.x, screen.y, err),
        }
    }

    if config.debug.overlay {
        println!();
        println!("Overlay rectangles:");
        for rect in resizer.overlay(Size2D::from(config.debug.overlay_scale)) {
            let (r, g, b) = rect.color.into_components();
            println!(
                "  {:>5}:{:<5} {:>9.1} x {:<9.1} rgb({:.2}, {:.2}, {:.2})",
                rect.aspect.x, rect.aspect.y, rect.size.x, rect.size.y, r, g, b
            );
        }
    }

    Ok(())
}

fn screens_from_args() -> Result<Vec<(String, Size2D)>> {
    let args: Vec<String> = std::env::args().skip(1).filter(|a| !a.starts_with("--")).collect();
    if args.is_empty() {
        return Ok(DEVICE_SCREENS
            .iter()
            .map(|&(label, w, h)| (label.to_string(), Size2D::from((w, h))))
            .collect());
    }
    args.into_iter()
        .map(|arg| {
            let size = parse_resolution(&arg)
                .with_context(|| format!("expected WIDTHxHEIGHT, got {:?}", arg))?;
            Ok((arg, Size2D::from(size)))
        })
        .collect()
}
