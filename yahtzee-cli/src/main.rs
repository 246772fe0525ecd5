//! yahtzee: CLI for the Yahtzee engine.
//!
//! Subcommands:
//! - sim
//! - score

use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use std::process;
use std::rc::Rc;
use std::str::FromStr;

use tracing::{debug, info};
use yahtzee_core::{
    scores_for_dice, Config, GreedyPolicy, Player, RandomGenerator, ScoreGroup, YahtzeeGame,
    UPPER_BONUS_THRESHOLD,
};
use yahtzee_logging::{init_tracing, GameRecorder, NdjsonWriter};

fn print_help() {
    eprintln!(
        r#"yahtzee - Yahtzee rules engine CLI

USAGE:
    yahtzee <COMMAND> [OPTIONS]

COMMANDS:
    sim                 Play computer-only games and summarize the scores
    score D D D D D     Print what a hand scores in every category

OPTIONS:
    -h, --help          Print this help message
    -V, --version       Print version

Set YAHTZEE_LOG (e.g. YAHTZEE_LOG=yahtzee_core=debug) for engine logs.
"#
    );
}

fn print_version() {
    println!("yahtzee {}", env!("CARGO_PKG_VERSION"));
}

fn value_for<T: FromStr>(args: &[String], i: usize, flag: &str) -> T {
    if i + 1 >= args.len() {
        eprintln!("Missing value for {flag}");
        process::exit(1);
    }
    args[i + 1].parse().unwrap_or_else(|_| {
        eprintln!("Invalid {flag} value: {}", args[i + 1]);
        process::exit(1);
    })
}

struct ScoreSummary {
    mean: f64,
    median: i32,
    std_dev: f64,
    min: i32,
    max: i32,
}

fn summarize_scores(scores: &[i32]) -> ScoreSummary {
    let mut sorted = scores.to_vec();
    sorted.sort_unstable();

    let n = sorted.len() as f64;
    let sum: f64 = sorted.iter().map(|&s| s as f64).sum();
    let sum_sq: f64 = sorted.iter().map(|&s| (s as f64) * (s as f64)).sum();
    let mean = sum / n;
    let var = (sum_sq / n) - mean * mean;

    ScoreSummary {
        mean,
        median: sorted[sorted.len() / 2],
        std_dev: var.max(0.0).sqrt(),
        min: sorted[0],
        max: sorted[sorted.len() - 1],
    }
}

/// Histogram of scores (bucket size = 10).
fn print_histogram(scores: &[i32]) {
    let bucket_size = 10;
    let mut buckets: HashMap<i32, usize> = HashMap::new();
    for &score in scores {
        *buckets.entry((score / bucket_size) * bucket_size).or_insert(0) += 1;
    }
    let (Some(&min_bucket), Some(&max_bucket)) = (buckets.keys().min(), buckets.keys().max())
    else {
        return;
    };
    let max_count = buckets.values().copied().max().unwrap_or(1);
    let bar_width = 50usize;

    println!("\nScore histogram (N={}, bin=10):", scores.len());
    println!("{}", "─".repeat(70));
    let mut bucket = min_bucket;
    while bucket <= max_bucket {
        let count = buckets.get(&bucket).copied().unwrap_or(0);
        let bar = "█".repeat((count * bar_width) / max_count.max(1));
        println!(
            "{:3}-{:3} │{:<50} {:4} ({:.1}%)",
            bucket,
            bucket + bucket_size - 1,
            bar,
            count,
            (count as f64 / scores.len() as f64) * 100.0
        );
        bucket += bucket_size;
    }
    println!("{}", "─".repeat(70));
}

fn cmd_sim(args: &[String]) {
    let mut games: u64 = 1000;
    let mut seed: Option<u64> = None;
    let mut player_count: usize = 1;
    let mut config_path: Option<PathBuf> = None;
    let mut log_path: Option<PathBuf> = None;
    let mut no_hist = false;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!(
                    r#"yahtzee sim

USAGE:
    yahtzee sim [--games N] [--seed S] [--players P] [--config FILE] [--log FILE] [--no-hist]

OPTIONS:
    --games N        Number of games to play (default: 1000)
    --seed S         Base RNG seed; game k uses S+k (default: 0, or dice.seed from the config)
    --players P      Computer players per game (default: 1)
    --config FILE    YAML game setup; every player must be a computer
    --log FILE       Append NDJSON game events to FILE
    --no-hist        Skip printing the histogram
"#
                );
                return;
            }
            "--games" => {
                games = value_for(args, i, "--games");
                i += 2;
            }
            "--seed" => {
                seed = Some(value_for(args, i, "--seed"));
                i += 2;
            }
            "--players" => {
                player_count = value_for(args, i, "--players");
                i += 2;
            }
            "--config" => {
                config_path = Some(value_for(args, i, "--config"));
                i += 2;
            }
            "--log" => {
                log_path = Some(value_for(args, i, "--log"));
                i += 2;
            }
            "--no-hist" => {
                no_hist = true;
                i += 1;
            }
            other => {
                eprintln!("Unknown option for `yahtzee sim`: {}", other);
                eprintln!("Run `yahtzee sim --help` for usage.");
                process::exit(1);
            }
        }
    }

    if games == 0 {
        eprintln!("--games must be at least 1");
        process::exit(1);
    }

    let (players, config_seed) = match &config_path {
        Some(path) => {
            let config = Config::load(path).unwrap_or_else(|e| {
                eprintln!("Failed to load config {}: {e}", path.display());
                process::exit(1);
            });
            let players: Vec<Player> = config.players.iter().map(|p| p.to_player()).collect();
            if let Some(human) = players.iter().find(|p| !p.is_computer()) {
                eprintln!("`yahtzee sim` needs computer players only, got {human}");
                process::exit(1);
            }
            (players, config.dice.seed)
        }
        None => {
            if player_count == 0 {
                eprintln!("--players must be at least 1");
                process::exit(1);
            }
            let players: Vec<Player> = (1..=player_count)
                .map(|n| Player::computer(format!("cpu{n}"), GreedyPolicy))
                .collect();
            (players, None)
        }
    };
    let base_seed = seed.or(config_seed).unwrap_or(0);

    let mut writer = log_path.as_ref().map(|path| {
        NdjsonWriter::open_append(path).unwrap_or_else(|e| {
            eprintln!("Failed to open log {}: {e}", path.display());
            process::exit(1);
        })
    });

    info!(games, players = players.len(), base_seed, "starting simulation");

    let mut scores: Vec<i32> = Vec::with_capacity(games as usize * players.len());
    let mut bonus_count = 0usize;
    let mut wins = vec![0u64; players.len()];

    for game_id in 0..games {
        let mut game = YahtzeeGame::new(&players)
            .unwrap_or_else(|e| {
                eprintln!("Invalid game setup: {e}");
                process::exit(1);
            })
            .with_generator(Box::new(RandomGenerator::seeded(
                base_seed.wrapping_add(game_id),
            )));

        let recorder = writer
            .take()
            .map(|w| Rc::new(GameRecorder::new(w, game_id)));
        if let Some(r) = &recorder {
            game.add_update_listener(r.clone());
            game.add_finish_listener(r.clone());
        }

        game.play_computer_turns().unwrap_or_else(|e| {
            eprintln!("Game {game_id} aborted: {e}");
            process::exit(1);
        });

        let totals: Vec<i32> = game.sheets().iter().map(|s| s.total_score()).collect();
        for sheet in game.sheets() {
            scores.push(sheet.total_score());
            if sheet.upper_sub_total() >= UPPER_BONUS_THRESHOLD {
                bonus_count += 1;
            }
        }
        // Ties go to the player seated first.
        if let Some((winner, _)) = totals
            .iter()
            .enumerate()
            .max_by_key(|&(idx, total)| (*total, std::cmp::Reverse(idx)))
        {
            wins[winner] += 1;
        }
        debug!(game_id, ?totals, "game complete");

        // The game holds the other handles to the recorder.
        drop(game);
        if let Some(r) = recorder {
            if let Some(e) = r.take_error() {
                eprintln!("Failed to write log: {e}");
                process::exit(1);
            }
            writer = Rc::try_unwrap(r).ok().map(GameRecorder::into_writer);
        }
    }

    let s = summarize_scores(&scores);
    info!(mean = s.mean, min = s.min, max = s.max, "simulation finished");

    println!("Simulation:");
    println!("  - Games: {}", games);
    println!("  - Players: {}", players.len());
    println!(
        "  - Score: mean={:.2}, median={}, std={:.2}, min={}, max={}",
        s.mean, s.median, s.std_dev, s.min, s.max
    );
    println!(
        "  - Upper bonus rate: {:.1}%",
        bonus_count as f64 / scores.len() as f64 * 100.0
    );
    if players.len() > 1 {
        for (p, w) in players.iter().zip(&wins) {
            println!("  - Wins {}: {}", p.name(), w);
        }
    }

    if !no_hist {
        print_histogram(&scores);
    }
}

fn cmd_score(args: &[String]) {
    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!(
            r#"yahtzee score

USAGE:
    yahtzee score D D D D D

Each D is a die face in 1..=6.
"#
        );
        return;
    }
    if args.len() != 5 {
        eprintln!("Expected 5 dice, got {}", args.len());
        eprintln!("Usage: yahtzee score D D D D D");
        process::exit(1);
    }

    let mut dice = [0u8; 5];
    for (slot, arg) in dice.iter_mut().zip(args) {
        *slot = match arg.parse::<u8>() {
            Ok(d) if (1..=6).contains(&d) => d,
            _ => {
                eprintln!("Invalid die value: {arg} (expected 1..=6)");
                process::exit(1);
            }
        };
    }
    dice.sort_unstable();
    debug!(?dice, "scoring hand");

    let scores = scores_for_dice(dice);
    println!(
        "Dice: {}",
        dice.iter().map(u8::to_string).collect::<Vec<_>>().join(" ")
    );
    for g in ScoreGroup::ALL {
        println!("  {:<16} {:>3}", g.to_string(), scores[g.index()]);
    }
}

fn main() {
    init_tracing();
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_help();
        process::exit(0);
    }

    match args[1].as_str() {
        "-h" | "--help" | "help" => {
            print_help();
        }
        "-V" | "--version" => {
            print_version();
        }
        "sim" => {
            cmd_sim(&args[2..]);
        }
        "score" => {
            cmd_score(&args[2..]);
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            eprintln!("Run `yahtzee --help` for usage.");
            process::exit(1);
        }
    }
}
