//! race-runner: headless duck race driver.
//!
//! Builds a roster, starts a race, and paces real-time ticks against
//! the engine until the race finishes, then prints the standings.
//!
//! Usage:
//!   race-runner [--ducks N] [--duration SECS] [--seed N]

use std::process;
use std::time::{Duration, Instant};

use duckrace_core::constants::{DEFAULT_DURATION_SECS, MAX_RACERS, PHASE_OFFSET_MAX};
use duckrace_core::events::RaceEvent;
use duckrace_core::roster::{lane_style, Duck};
use duckrace_core::types::format_race_clock;
use duckrace_sim::engine::{RaceConfig, RaceEngine};

/// Tick pacing for the driver loop (~60 Hz).
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / 60);

/// Default roster names; extra ducks get numbered names.
const DEFAULT_NAMES: [&str; 5] = ["Rory", "Ilia", "Rozalyn", "George", "Ian"];

struct Args {
    ducks: usize,
    duration_secs: f64,
    seed: Option<u64>,
}

fn main() {
    env_logger::init();

    let args = parse_args();
    let ducks = build_roster(args.ducks);

    let mut engine = RaceEngine::new(
        ducks,
        RaceConfig {
            duration_secs: args.duration_secs,
            seed: args.seed,
        },
    );

    let epoch = Instant::now();
    let now_ms = move || epoch.elapsed().as_secs_f64() * 1000.0;

    if !engine.start(now_ms()) {
        eprintln!("A race needs at least two ducks");
        process::exit(1);
    }
    log::info!(
        "Race started: {} ducks over {:.0}s",
        engine.ducks().len(),
        engine.duration_ms() / 1000.0
    );

    let mut next_tick_time = Instant::now();
    let final_snapshot = loop {
        let snapshot = engine.tick(now_ms());

        for event in &snapshot.events {
            match event {
                RaceEvent::DuckFinished { id, rank, elapsed_ms } => {
                    let name = duck_name(&engine, *id);
                    log::info!(
                        "#{rank} {name} finished at {}",
                        format_race_clock(*elapsed_ms)
                    );
                }
                RaceEvent::DuckTripped { id } => {
                    log::debug!("{} tripped", duck_name(&engine, *id));
                }
                RaceEvent::DuckBoosted { id } => {
                    log::debug!("{} is boosting", duck_name(&engine, *id));
                }
                _ => {}
            }
        }

        if snapshot.is_finished() {
            break snapshot;
        }

        // Pace to ~60 Hz, resetting if we fall too far behind.
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            next_tick_time = now;
        }
    };

    println!("\nFinal standings:");
    let mut standings: Vec<_> = final_snapshot.ducks.iter().collect();
    standings.sort_by_key(|d| d.rank.unwrap_or(u32::MAX));
    for duck in standings {
        match duck.rank {
            Some(rank) => println!("  #{rank} {}", duck.name),
            None => println!("   -- {} (did not finish)", duck.name),
        }
    }

    if let (Some(winner), Some(elapsed_ms)) =
        (&final_snapshot.winner, final_snapshot.winner_elapsed_ms)
    {
        println!("\nWinner: {} in {}", winner.name, format_race_clock(elapsed_ms));
    }
}

fn duck_name(engine: &RaceEngine, id: u32) -> String {
    engine
        .ducks()
        .iter()
        .find(|d| d.id == id)
        .map(|d| d.name.clone())
        .unwrap_or_else(|| format!("duck {id}"))
}

fn build_roster(count: usize) -> Vec<Duck> {
    (0..count)
        .map(|i| {
            let name = DEFAULT_NAMES
                .get(i)
                .map(|n| n.to_string())
                .unwrap_or_else(|| format!("Duck {}", i + 1));
            let mut duck = Duck::new(i as u32, name, rand::random::<f64>() * PHASE_OFFSET_MAX);
            duck.style = lane_style(i);
            duck
        })
        .collect()
}

fn parse_args() -> Args {
    let mut args = Args {
        ducks: DEFAULT_NAMES.len(),
        duration_secs: DEFAULT_DURATION_SECS,
        seed: None,
    };

    let raw: Vec<String> = std::env::args().skip(1).collect();
    let mut iter = raw.iter();
    while let Some(flag) = iter.next() {
        match flag.as_str() {
            "--ducks" => args.ducks = parse_value(iter.next(), flag),
            "--duration" => args.duration_secs = parse_value(iter.next(), flag),
            "--seed" => args.seed = Some(parse_value(iter.next(), flag)),
            "help" | "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                process::exit(1);
            }
        }
    }

    if args.ducks > MAX_RACERS {
        eprintln!("Roster capped at {MAX_RACERS} ducks");
        args.ducks = MAX_RACERS;
    }
    args
}

fn parse_value<T: std::str::FromStr>(value: Option<&String>, flag: &str) -> T {
    match value.and_then(|v| v.parse().ok()) {
        Some(parsed) => parsed,
        None => {
            eprintln!("Missing or invalid value for {flag}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "race-runner: headless duck race driver\n\
         \n\
         Options:\n\
           --ducks <N>        Roster size (default: 5)\n\
           --duration <SECS>  Race duration in seconds, 5-60 (default: 10)\n\
           --seed <N>         RNG seed for a reproducible race\n"
    );
}
