//! Tournament CLI
//!
//! Run multi-round matches between engines and keep standings.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use loa_core::{Engine, Player};
use random_engine::RandomEngine;
use tournament::{MatchConfig, MatchRunner, Standings, TournamentConfig};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG: &str = "tournament.toml";

fn print_usage() {
    println!("Lines of Action Tournament Runner");
    println!();
    println!("Usage:");
    println!("  tournament match <engine1> <engine2> [--rounds N] [--seed S] [--config PATH]");
    println!("  tournament standings [PATH]");
    println!("  tournament help");
    println!();
    println!("Engines:");
    println!("  random        - Uniform random moves, captures first");
    println!();
    println!("Examples:");
    println!("  tournament match random random --rounds 20 --seed 7");
    println!("  tournament standings standings.json");
}

fn create_engine(spec: &str, seed: Option<u64>) -> Result<Box<dyn Engine>> {
    match spec.to_lowercase().as_str() {
        "random" | "rand" => Ok(match seed {
            Some(seed) => Box::new(RandomEngine::with_seed(seed)),
            None => Box::new(RandomEngine::new()),
        }),
        _ => bail!("unknown engine: {spec}"),
    }
}

fn flag_value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> Result<T> {
    let raw = args
        .get(i + 1)
        .with_context(|| format!("{flag} needs a value"))?;
    raw.parse()
        .map_err(|_| anyhow::anyhow!("invalid value for {flag}: {raw}"))
}

fn run_match(args: &[String]) -> Result<()> {
    if args.len() < 2 {
        print_usage();
        bail!("match requires two engine names");
    }

    let engine1_spec = &args[0];
    let engine2_spec = &args[1];

    // Parse optional arguments
    let mut rounds: Option<u32> = None;
    let mut seed: Option<u64> = None;
    let mut config_path = PathBuf::from(DEFAULT_CONFIG);

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--rounds" | "-r" => {
                rounds = Some(flag_value(args, i, "--rounds")?);
                i += 1;
            }
            "--seed" | "-s" => {
                seed = Some(flag_value(args, i, "--seed")?);
                i += 1;
            }
            "--config" | "-c" => {
                config_path = PathBuf::from(flag_value::<String>(args, i, "--config")?);
                i += 1;
            }
            other => bail!("unknown option: {other}"),
        }
        i += 1;
    }

    let mut config = TournamentConfig::load_or_default(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    if let Some(rounds) = rounds {
        config.rounds = rounds;
    }
    if seed.is_some() {
        config.seed = seed;
    }
    config.validate()?;

    println!("=== Match: {} vs {} ===", engine1_spec, engine2_spec);
    println!("Rounds: {}, Move limit: {} plies", config.rounds, config.max_plies);
    println!();

    // Player names identify players, so a self-match needs distinct names.
    let name1 = engine1_spec.to_string();
    let name2 = if engine2_spec == engine1_spec {
        format!("{engine2_spec} (2)")
    } else {
        engine2_spec.to_string()
    };
    let seed2 = config.seed.map(|s| s.wrapping_add(1));
    let players = [
        Player::engine(&name1, create_engine(engine1_spec, config.seed)?),
        Player::engine(&name2, create_engine(engine2_spec, seed2)?),
    ];

    let runner = MatchRunner::new(MatchConfig::from(&config));
    let tournament = runner.run_match(&config.name, players)?;
    let result = tournament.match_result();

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws, {} anomalies",
        name1, result.wins, result.losses, result.draws, result.anomalies
    );
    println!("Score: {:.1}%", result.score() * 100.0);

    let standings = tournament.standings();
    standings.print_report();
    standings
        .save(&config.standings_path)
        .with_context(|| format!("saving {}", config.standings_path.display()))?;
    Ok(())
}

fn show_standings(args: &[String]) -> Result<()> {
    let path = match args.first() {
        Some(p) => PathBuf::from(p),
        None => TournamentConfig::load_or_default(Path::new(DEFAULT_CONFIG))?.standings_path,
    };
    if !path.exists() {
        println!("No standings found at {}. Run a match first!", path.display());
        return Ok(());
    }
    let standings =
        Standings::load(&path).with_context(|| format!("reading {}", path.display()))?;
    standings.print_report();
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "standings" => show_standings(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            print_usage();
            bail!("unknown command: {other}")
        }
    }
}
