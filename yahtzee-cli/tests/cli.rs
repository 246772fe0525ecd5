use std::fs;
use std::process::{Command, Output};

fn yahtzee_bin() -> String {
    // Provided by Cargo for integration tests of binaries.
    env!("CARGO_BIN_EXE_yahtzee").to_string()
}

fn run(args: &[&str]) -> Output {
    Command::new(yahtzee_bin())
        .args(args)
        .env_remove("YAHTZEE_LOG")
        .output()
        .unwrap()
}

fn stdout(out: &Output) -> String {
    assert!(
        out.status.success(),
        "stderr:\n{}",
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn version_prints_package_version() {
    let out = stdout(&run(&["--version"]));
    assert_eq!(out.trim(), format!("yahtzee {}", env!("CARGO_PKG_VERSION")));
}

#[test]
fn score_prints_every_category() {
    let out = stdout(&run(&["score", "5", "4", "3", "2", "1"]));
    assert!(out.contains("Dice: 1 2 3 4 5"));
    let line = |name: &str| {
        out.lines()
            .find(|l| l.trim_start().starts_with(name))
            .unwrap_or_else(|| panic!("no {name} line in:\n{out}"))
            .split_whitespace()
            .last()
            .unwrap()
            .to_string()
    };
    assert_eq!(line("LARGE_STRAIGHT"), "40");
    assert_eq!(line("SMALL_STRAIGHT"), "30");
    assert_eq!(line("CHANCE"), "15");
    assert_eq!(line("YAHTZEE"), "0");
    assert_eq!(out.lines().filter(|l| l.starts_with("  ")).count(), 13);
}

#[test]
fn score_rejects_bad_dice() {
    assert!(!run(&["score", "1", "2", "3", "4", "7"]).status.success());
    assert!(!run(&["score", "1", "2", "3"]).status.success());
}

#[test]
fn unknown_command_fails() {
    assert!(!run(&["roll"]).status.success());
}

#[test]
fn sim_is_reproducible_for_a_seed() {
    let args = ["sim", "--games", "20", "--seed", "9", "--players", "2", "--no-hist"];
    let a = stdout(&run(&args));
    let b = stdout(&run(&args));
    assert_eq!(a, b);
    assert!(a.contains("Games: 20"));
    assert!(a.contains("Players: 2"));
    assert!(a.contains("Upper bonus rate"));
}

#[test]
fn sim_writes_an_event_log() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("games.ndjson");

    let out = run(&[
        "sim",
        "--games",
        "3",
        "--no-hist",
        "--log",
        log.to_str().unwrap(),
    ]);
    stdout(&out);

    let contents = fs::read_to_string(&log).unwrap();
    let finishes = contents
        .lines()
        .filter(|l| l.contains(r#""event":"finish""#))
        .count();
    let scores = contents
        .lines()
        .filter(|l| l.contains(r#""event":"score""#))
        .count();
    assert_eq!(finishes, 3);
    assert_eq!(scores, 3 * 13);
    for id in 0..3 {
        assert!(contents.contains(&format!(r#""game_id":{id}"#)));
    }
}

#[test]
fn sim_reads_players_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("game.yaml");
    fs::write(
        &cfg,
        "players:\n  - name: Ann\n    kind: computer\n  - name: Bob\n    kind: computer\ndice:\n  seed: 3\n",
    )
    .unwrap();

    let out = stdout(&run(&[
        "sim",
        "--games",
        "4",
        "--no-hist",
        "--config",
        cfg.to_str().unwrap(),
    ]));
    assert!(out.contains("Wins Ann:"));
    assert!(out.contains("Wins Bob:"));
}

#[test]
fn sim_refuses_human_players() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("game.yaml");
    fs::write(&cfg, "players:\n  - name: Ann\n").unwrap();

    let out = run(&["sim", "--games", "1", "--config", cfg.to_str().unwrap()]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("HumanPlayer(\"Ann\")"));
}
