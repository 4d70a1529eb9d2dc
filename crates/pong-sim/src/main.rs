//! pong-sim - headless runner for the pong core
//!
//! Usage: pong-sim [OPTIONS] [--script <file>] [--output <file>]

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context as _, ensure};
use clap::{Parser as ClapParser, ValueEnum};
use pong::config::MatchConfig;
use pong::render::Backend;
use pong_sim::output::{self, Format};
use pong_sim::{InputScript, Simulation, load_script};

/// Presentation backend
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Default)]
enum BackendArg {
    /// Filled rectangles in a page (mode 4)
    #[default]
    Bitmap,
    /// Hardware objects (mode 0)
    Sprites,
}

/// Frame dump format
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Default)]
enum FormatArg {
    /// Binary PPM image
    #[default]
    Ppm,
    /// One character per pixel
    Ascii,
}

#[derive(ClapParser, Debug)]
#[command(name = "pong-sim")]
#[command(author = "GBA Pong Team")]
#[command(version)]
#[command(about = "Run a pong match headless and dump the last frame", long_about = None)]
struct Args {
    /// Frames to run (60 per second)
    #[arg(short = 'n', long, default_value = "600")]
    frames: u32,

    /// Input script; without one no buttons are pressed
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Presentation backend
    #[arg(short, long, value_enum, default_value = "bitmap")]
    backend: BackendArg,

    /// Write the last presented frame here
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Frame dump format
    #[arg(short, long, value_enum, default_value = "ppm")]
    format: FormatArg,

    /// Points needed to win (a two-point lead is still required)
    #[arg(long, default_value = "11")]
    points_to_win: u16,

    /// Serve toward the left player
    #[arg(long)]
    serve_left: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let env = env_logger::Env::default().default_filter_or("info");
    let mut builder = env_logger::Builder::from_env(env);
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn match_config(args: &Args) -> anyhow::Result<MatchConfig> {
    ensure!(args.points_to_win > 0, "--points-to-win must be at least 1");
    let mut cfg = MatchConfig {
        points_to_win: args.points_to_win,
        ..MatchConfig::default()
    };
    if args.serve_left {
        cfg.serve_velocity = -cfg.serve_velocity;
    }
    Ok(cfg)
}

fn run(args: &Args) -> anyhow::Result<()> {
    let cfg = match_config(args)?;
    let input = match &args.script {
        Some(path) => load_script(path).with_context(|| format!("loading script {}", path.display()))?,
        None => InputScript::idle(),
    };
    let backend = match args.backend {
        BackendArg::Bitmap => Backend::Framebuffer,
        BackendArg::Sprites => Backend::Sprites,
    };

    log::info!("running {} frames ({backend:?} backend)", args.frames);
    let mut sim = Simulation::new(cfg, backend, input);
    sim.run(args.frames);

    let (left, right) = sim.game().state().scores();
    println!("frames: {}", sim.frames());
    println!("score: {left}-{right}");
    match sim.decided() {
        Some(point) => println!("winner: P{} (frame {})", point.side.player_number(), point.frame),
        None => println!("winner: none"),
    }

    if let Some(path) = &args.output {
        let format = match args.format {
            FormatArg::Ppm => Format::Ppm,
            FormatArg::Ascii => Format::Ascii,
        };
        let display = sim.display();
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        let mut out = BufWriter::new(file);
        output::write_frame(&mut out, &display.frame(), display.palette(), format)
            .and_then(|()| out.flush())
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!("wrote {}", path.display());
    }

    Ok(())
}
