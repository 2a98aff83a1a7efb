use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc::{self, TryRecvError};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};

use pentavis::config::DisplayConfig;
use pentavis::display::DisplayState;
use pentavis::event::RawEvent;
use pentavis::render::TextFrame;
use pentavis::script::random_riff;
use pentavis::util::logging::init_logging;

#[derive(Parser, Debug)]
#[command(
    name = "pentavis",
    about = "Falling-block display for Pentatonic Hero controllers"
)]
struct Args {
    /// Path to a display config JSON file (platform config dir otherwise).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Show debug logs.
    #[arg(long, short)]
    verbose: bool,

    /// Also write logs to files in this directory.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a generated riff and animate it in the terminal.
    Demo {
        /// Frames to simulate.
        #[arg(long, default_value_t = 600)]
        ticks: u64,

        /// Riff generator seed.
        #[arg(long, default_value_t = 1)]
        seed: u64,

        /// Frames per second (0 runs unthrottled).
        #[arg(long, default_value_t = 30)]
        fps: u32,
    },
    /// Animate wire events read as JSON lines from stdin.
    Feed {
        /// Frames per second (0 runs unthrottled).
        #[arg(long, default_value_t = 30)]
        fps: u32,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_dir.as_deref(), args.verbose)?;

    let config = match &args.config {
        Some(path) => DisplayConfig::load_from(path)?,
        None => DisplayConfig::load(),
    };
    info!(?config, "starting display");

    match args.command {
        Command::Demo { ticks, seed, fps } => run_demo(config, ticks, seed, fps),
        Command::Feed { fps } => run_feed(config, fps),
    }
}

fn run_demo(config: DisplayConfig, ticks: u64, seed: u64, fps: u32) -> Result<()> {
    let mut state = DisplayState::new(config)?;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut script = random_riff(&config, &mut rng, ticks);
    let frame = TextFrame::new(16, config.track_limit);

    for _ in 0..ticks {
        state.tick();
        for event in script.poll_up_to(state.current_tick()) {
            state.apply(event);
        }
        draw(&frame, &state)?;
        throttle(fps);
    }
    Ok(())
}

fn run_feed(config: DisplayConfig, fps: u32) -> Result<()> {
    let mut state = DisplayState::new(config)?;
    let frame = TextFrame::new(16, config.track_limit);
    let events = spawn_stdin_reader();

    loop {
        state.tick();
        loop {
            match events.try_recv() {
                Ok(raw) => state.event(&raw),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    draw(&frame, &state)?;
                    info!("input closed, stopping");
                    return Ok(());
                }
            }
        }
        draw(&frame, &state)?;
        throttle(fps);
    }
}

/// Parse stdin lines into events on a separate thread so the frame loop
/// never blocks on input.
fn spawn_stdin_reader() -> mpsc::Receiver<RawEvent> {
    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<RawEvent>(&line) {
                Ok(raw) => {
                    if sender.send(raw).is_err() {
                        break;
                    }
                }
                Err(e) => warn!(%line, "skipping malformed event: {e}"),
            }
        }
    });
    receiver
}

fn draw(frame: &TextFrame, state: &DisplayState) -> Result<()> {
    let mut stdout = io::stdout().lock();
    // clear the terminal and repaint in place
    write!(stdout, "\x1b[2J\x1b[H")?;
    writeln!(stdout, "tick {}", state.current_tick())?;
    writeln!(stdout, "{}", frame.render(&state.display()))?;
    stdout.flush()?;
    Ok(())
}

fn throttle(fps: u32) {
    if fps > 0 {
        thread::sleep(Duration::from_millis(1000 / u64::from(fps)));
    }
}
