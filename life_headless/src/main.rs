// main.rs - Terminal runner: ticks on a tokio interval and prints frames

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, ensure};
use clap::Parser;
use life_core::{LifeConfig, RowEdges, Simulation, TextCanvas};
use tokio::time::MissedTickBehavior;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "life-headless",
    version,
    about = "Run the self-restarting Game of Life in a terminal"
)]
struct Cli {
    /// JSON config file; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = 80)]
    cols: usize,

    #[arg(long, default_value_t = 24)]
    rows: usize,

    /// Fixed RNG seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Generations per second.
    #[arg(long, default_value_t = 30.0)]
    fps: f64,

    /// Stop after this many frames; runs until Ctrl-C otherwise.
    #[arg(long)]
    frames: Option<u64>,

    /// Seconds a restart must wait after the previous one.
    #[arg(long)]
    restart_after: Option<f64>,

    /// Wrap neighbor lookups across the top and bottom edges as well.
    #[arg(long)]
    wrap_rows: bool,

    /// Splash life around a cell before the first frame, as COL,ROW. Repeatable.
    #[arg(long = "splash", value_name = "COL,ROW", value_parser = parse_cell)]
    splashes: Vec<(usize, usize)>,

    /// Skip drawing frames and only log progress.
    #[arg(long)]
    quiet: bool,
}

fn parse_cell(text: &str) -> Result<(usize, usize), String> {
    let (col, row) = text
        .split_once(',')
        .ok_or_else(|| format!("expected COL,ROW, got {text:?}"))?;
    let col = col.trim().parse::<usize>().map_err(|err| format!("bad column: {err}"))?;
    let row = row.trim().parse::<usize>().map_err(|err| format!("bad row: {err}"))?;
    Ok((col, row))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let period = frame_period(cli.fps)?;

    let config = build_config(&cli)?;
    let mut sim = Simulation::from_config(config, cli.cols, cli.rows)
        .context("failed to create simulation")?;
    for &(col, row) in &cli.splashes {
        sim.seed_at(col, row)
            .with_context(|| format!("cannot splash at {col},{row}"))?;
    }

    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut stdout = std::io::stdout();
    let mut frames = 0u64;

    loop {
        if frame_limit_reached(cli.frames, frames) {
            break;
        }

        tokio::select! {
            _ = &mut ctrl_c => {
                info!("interrupted");
                break;
            }
            _ = ticker.tick() => {}
        }

        if !cli.quiet {
            let canvas = TextCanvas::from_grid(sim.grid());
            write!(stdout, "\x1b[H\x1b[2J{canvas}")?;
            writeln!(
                stdout,
                "generation {:>6}  live {:>6}  restarts {:>4}",
                sim.generation(),
                sim.grid().live_count(),
                sim.restarts()
            )?;
            stdout.flush()?;
        }

        sim.tick();
        frames += 1;
    }

    info!(
        frames,
        generation = sim.generation(),
        restarts = sim.restarts(),
        live = sim.grid().live_count(),
        "run finished"
    );
    Ok(())
}

fn frame_limit_reached(limit: Option<u64>, frames: u64) -> bool {
    limit.is_some_and(|limit| frames >= limit)
}

/// Time between frames for `fps` generations per second.
fn frame_period(fps: f64) -> Result<Duration> {
    ensure!(fps.is_finite() && fps > 0.0, "--fps must be positive, got {fps}");
    let period = Duration::try_from_secs_f64(1.0 / fps)
        .with_context(|| format!("--fps {fps} is out of range"))?;
    ensure!(!period.is_zero(), "--fps {fps} is too high for a timer");
    Ok(period)
}

fn build_config(cli: &Cli) -> Result<LifeConfig> {
    let mut config = match &cli.config {
        Some(path) => LifeConfig::load(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => LifeConfig::default(),
    };
    if cli.seed.is_some() {
        config.rng_seed = cli.seed;
    }
    if let Some(secs) = cli.restart_after {
        config.restart_after_secs = secs;
    }
    if cli.wrap_rows {
        config.row_edges = RowEdges::Wrap;
    }
    config.validate()?;
    Ok(config)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
