//! Headless Sketchpad host.
//!
//! Replays a scripted pointer session against the core, answering tool and
//! dialog queries from the script, and renders the final drawing to SVG.

mod export;
mod script;

use anyhow::Context;
use clap::Parser;
use sketchpad_core::SerializableColor;
use std::path::PathBuf;

use crate::export::SvgSurface;

#[derive(Parser, Debug)]
#[command(name = "sketchpad")]
#[command(version, about = "Replay a scripted Sketchpad drawing session")]
struct Cli {
    /// Session script (JSON)
    script: PathBuf,

    /// Write the final drawing as SVG
    #[arg(long, value_name = "PATH")]
    svg: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(long, default_value_t = AppConfig::default().width)]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = AppConfig::default().height)]
    height: u32,
}

/// Output settings.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub width: u32,
    pub height: u32,
    pub background: SerializableColor,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: SerializableColor::white(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig {
        width: cli.width,
        height: cli.height,
        ..AppConfig::default()
    };

    let session = script::Script::load(&cli.script)?;
    log::info!(
        "Replaying {} steps from {}",
        session.steps.len(),
        cli.script.display()
    );
    let replay = script::run(session);
    log::info!(
        "Replay finished: {} events, {} redraw requests",
        replay.outcomes.len(),
        replay.redraws
    );

    for (index, shape) in replay.canvas.shapes().iter().enumerate() {
        let bounds = shape.bounds();
        println!(
            "{index}: {} at ({}, {}) size {}x{} color {} {}",
            shape.kind().name(),
            shape.anchor().x,
            shape.anchor().y,
            shape.width(),
            shape.height(),
            SerializableColor::from(shape.color()).to_hex(),
            if shape.is_filled() { "filled" } else { "outline" },
        );
        log::debug!("  bounds {:?}", bounds);
    }
    println!("{} shapes", replay.canvas.shapes().len());

    if let Some(path) = cli.svg {
        let mut surface = SvgSurface::new(config.width, config.height, config.background);
        replay.canvas.paint(&mut surface);
        std::fs::write(&path, surface.finish().to_string())
            .with_context(|| format!("Failed to write SVG to {}", path.display()))?;
        log::info!("Saved drawing to: {}", path.display());
    }

    Ok(())
}
