//! Klondike command-line runner (default binary).
//!
//! - `deal`: deal a seed and print the layout (or its JSON snapshot)
//! - `check`: ask the dead-end solver about a deal
//! - `autoplay`: play a deal using hints, draws and safe foundation moves
//!
//! Log level comes from `RUST_LOG` (default `info`); engine settings come from
//! `KLONDIKE_*` variables and are overridden by the flags below.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use klondike::core::snapshot::state_to_json;
use klondike::core::GameState;
use klondike::engine::{Engine, EngineConfig, EngineEvent};
use klondike::solver::analyze;
use klondike::types::{DrawCount, RedealPolicy};

#[derive(Debug, Parser)]
#[command(name = "klondike", version, about = "Klondike solitaire engine and dead-end solver")]
struct Cli {
    /// Cards turned per draw (1 or 3)
    #[arg(long, global = true, value_parser = parse_draw)]
    draw: Option<DrawCount>,

    /// Redeal policy: unlimited, none or limited(n)
    #[arg(long, global = true, value_parser = parse_redeal)]
    redeal: Option<RedealPolicy>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Deal a game and print it
    Deal {
        /// Deal seed (random when omitted)
        seed: Option<u32>,
        /// Print the JSON snapshot instead of the text layout
        #[arg(long)]
        json: bool,
    },
    /// Run the solver on a fresh deal
    Check {
        seed: u32,
        /// Search budget in milliseconds (defaults to the configured budget)
        #[arg(long)]
        budget_ms: Option<u64>,
    },
    /// Play a deal with hints and auto-moves until won, stuck or out of steps
    Autoplay {
        seed: Option<u32>,
        #[arg(long, default_value_t = 1000)]
        max_steps: u32,
        /// Print every engine event as a JSON line
        #[arg(long)]
        events: bool,
    },
}

fn parse_draw(s: &str) -> Result<DrawCount, String> {
    s.parse::<u8>()
        .ok()
        .and_then(DrawCount::from_u8)
        .ok_or_else(|| format!("draw must be 1 or 3, got {:?}", s))
}

fn parse_redeal(s: &str) -> Result<RedealPolicy, String> {
    RedealPolicy::from_str(s).ok_or_else(|| format!("unknown redeal policy {:?}", s))
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut config = EngineConfig::from_env();
    if let Some(draw) = cli.draw {
        config.settings.draw_count = draw;
    }
    if let Some(redeal) = cli.redeal {
        config.settings.redeal_policy = redeal;
    }

    match cli.command {
        Command::Deal { seed, json } => deal(&config, seed, json),
        Command::Check { seed, budget_ms } => {
            let budget = budget_ms
                .map(Duration::from_millis)
                .unwrap_or(config.solver_budget);
            check(&config, seed, budget);
            Ok(())
        }
        Command::Autoplay {
            seed,
            max_steps,
            events,
        } => autoplay(config, seed, max_steps, events).await,
    }
}

fn deal(config: &EngineConfig, seed: Option<u32>, json: bool) -> Result<()> {
    let engine = Engine::new(config.clone());
    let seed = match seed {
        Some(seed) => {
            engine.new_game_with_seed(seed, config.settings);
            seed
        }
        None => engine.new_game(config.settings),
    };
    let state = engine.state();
    if json {
        println!("{}", state_to_json(&state).context("render snapshot")?);
    } else {
        println!("seed {}", seed);
        println!("{}", state);
    }
    Ok(())
}

fn check(config: &EngineConfig, seed: u32, budget: Duration) {
    let state = GameState::deal(seed, config.settings, 0);
    let report = analyze(&state, budget);
    let verdict = if report.no_hope {
        "no hope: proven dead end"
    } else if report.win_found {
        "winnable: found a winning line"
    } else {
        "inconclusive: budget exhausted"
    };
    println!(
        "seed {}: {} ({} nodes in {:?})",
        seed, verdict, report.nodes, report.elapsed
    );
}

fn print_events(rx: &mut tokio::sync::broadcast::Receiver<EngineEvent>) -> Result<()> {
    while let Ok(event) = rx.try_recv() {
        println!("{}", event.to_json()?);
    }
    Ok(())
}

async fn autoplay(config: EngineConfig, seed: Option<u32>, max_steps: u32, events: bool) -> Result<()> {
    let engine = Engine::new(config.clone());
    let mut rx = engine.subscribe();
    let seed = match seed {
        Some(seed) => {
            engine.new_game_with_seed(seed, config.settings);
            seed
        }
        None => engine.new_game(config.settings),
    };

    let mut steps = 0;
    while steps < max_steps && !engine.is_win() && !engine.is_stuck() {
        steps += 1;
        engine.auto_move_to_foundations();
        if engine.is_win() {
            break;
        }
        let progressed = match engine.find_hint() {
            Some(mv) => engine.move_cards(&mv),
            None => engine.draw(),
        };
        if !progressed {
            break;
        }
        engine.tick();
        if events {
            print_events(&mut rx)?;
        }
    }
    let report = engine.run_auto_to_fixpoint(None).await;
    if events {
        print_events(&mut rx)?;
    }

    let state = engine.state();
    info!(
        "seed {} finished after {} step(s), final auto-play banked {}",
        seed, steps, report.moves
    );
    println!("{}", state);
    let outcome = if state.is_win() {
        "won"
    } else if engine.is_stuck() {
        "stuck"
    } else if engine.check_no_hope() {
        "lost (solver proved a dead end)"
    } else {
        "unfinished"
    };
    println!("result: {}", outcome);
    Ok(())
}
