//! Headless runner (default binary).
//!
//! Plays a game without a screen: a simple bot walks each piece to the
//! placement chosen by the engine search one command per frame, while a
//! simulated gravity clock feeds timer ticks into the session. Useful for
//! reproducing a seed and for watching the session's trace output.

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use blockfall::core::{
    ClearResult, DropClock, EventSink, PieceQueue, Randomizer, Session, SessionConfig,
};
use blockfall::engine::{best_placement, Placement, Weights};
use blockfall::types::PieceKind;

/// blockfall - headless falling-block runner
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// RNG seed (overrides BLOCKFALL_SEED)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Piece randomizer: uniform or bag (overrides BLOCKFALL_RANDOMIZER)
    #[arg(short, long, value_parser = parse_randomizer)]
    randomizer: Option<Randomizer>,

    /// Stop after this many pieces have locked
    #[arg(short, long, default_value_t = 100)]
    pieces: u32,

    /// Simulated milliseconds per frame
    #[arg(short, long, default_value_t = 16)]
    tick_ms: u32,

    /// Fixed piece sequence, e.g. "I,O,T" (repeats; replaces the randomizer)
    #[arg(long)]
    script: Option<String>,
}

fn parse_randomizer(s: &str) -> std::result::Result<Randomizer, String> {
    Randomizer::from_name(s).ok_or_else(|| format!("unknown randomizer `{s}` (uniform, bag)"))
}

fn parse_script(s: &str) -> Result<Vec<PieceKind>> {
    let pieces = s
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| {
            PieceKind::from_name(name).with_context(|| format!("unknown piece `{name}` in script"))
        })
        .collect::<Result<Vec<_>>>()?;
    if pieces.is_empty() {
        bail!("script is empty");
    }
    Ok(pieces)
}

/// Keeps the gravity clock in step with the session and logs notable events
struct Host<'a> {
    clock: &'a mut DropClock,
}

impl EventSink for Host<'_> {
    fn on_lines_cleared(&mut self, clear: ClearResult) {
        info!(lines = clear.lines, bonus = clear.bonus, "cleared");
    }

    fn on_level_changed(&mut self, level: u32, drop_interval_ms: u32) {
        info!(level, drop_interval_ms, "level up");
        self.clock.set_interval(drop_interval_ms);
    }

    fn on_game_over(&mut self, score: u32, lines: u32, level: u32) {
        warn!(score, lines, level, "game over");
    }
}

/// Next single command that walks the active piece toward `target`
fn step_toward(session: &mut Session, target: Placement) {
    let Some(active) = session.active() else {
        return;
    };

    let before = session.active();
    if active.rotation != target.rotation {
        session.rotate();
    } else if active.x < target.x {
        session.move_right();
    } else if active.x > target.x {
        session.move_left();
    } else {
        session.hard_drop();
        return;
    }

    // Gravity or a neighbour got in the way; settle where we are.
    if session.active() == before {
        debug!(?target, "path blocked, dropping in place");
        session.hard_drop();
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut config = SessionConfig::from_env();
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(randomizer) = args.randomizer {
        config = config.with_randomizer(randomizer);
    }

    let mut session = match args.script.as_deref() {
        Some(script) => {
            let pieces = parse_script(script)?;
            Session::with_setup(config, Default::default(), PieceQueue::scripted(&pieces))
        }
        None => Session::new(config),
    };
    info!(
        seed = config.seed,
        randomizer = config.randomizer.as_str(),
        scripted = args.script.is_some(),
        "session started"
    );

    let weights = Weights::default();
    let mut clock = DropClock::new(session.drop_interval_ms());
    let mut planned: Option<(u32, Placement)> = None;

    while !session.game_over() && session.piece_id() <= args.pieces {
        for _ in 0..clock.advance(args.tick_ms) {
            session.tick();
        }

        if session.is_running() && session.active().is_some() {
            let piece_id = session.piece_id();
            let target = match planned {
                Some((id, target)) if id == piece_id => Some(target),
                _ => best_placement(&session, &weights),
            };
            match target {
                Some(target) => {
                    planned = Some((piece_id, target));
                    step_toward(&mut session, target);
                }
                None => {
                    session.hard_drop();
                }
            }
        }

        session.dispatch_events(&mut Host { clock: &mut clock });
    }

    let snap = session.snapshot();
    let locked = if snap.game_over() {
        snap.piece_id
    } else {
        snap.piece_id.saturating_sub(1)
    };
    println!(
        "seed={} randomizer={} pieces={} score={} lines={} level={} phase={}",
        config.seed,
        config.randomizer.as_str(),
        locked,
        snap.score,
        snap.lines,
        snap.level,
        snap.phase.as_str(),
    );
    Ok(())
}
