use seotda_cli::exit_code;
use std::io::Cursor;

struct CliResult {
    code: i32,
    stdout: String,
    stderr: String,
}

fn run(args: &[&str], input: &str) -> CliResult {
    let mut argv = vec!["seotda"];
    argv.extend_from_slice(args);
    let mut stdin = Cursor::new(input.as_bytes().to_vec());
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = seotda_cli::run_with_input(argv, &mut stdin, &mut out, &mut err);
    CliResult {
        code,
        stdout: String::from_utf8(out).unwrap(),
        stderr: String::from_utf8(err).unwrap(),
    }
}

#[test]
fn rank_names_the_hand() {
    let res = run(&["rank", "3L", "8L"], "");
    assert_eq!(res.code, exit_code::SUCCESS);
    assert!(res.stdout.contains("38-gwang (1000)"));

    let res = run(&["rank", "5", "5n"], "");
    assert_eq!(res.code, exit_code::SUCCESS);
    assert!(res.stdout.contains("5-ttaeng (905) [Pair]"));
}

#[test]
fn rank_rejects_a_card_that_does_not_exist() {
    let res = run(&["rank", "2L", "9"], "");
    assert_eq!(res.code, exit_code::ERROR);
    assert!(res.stderr.starts_with("Error: "));
    assert!(res.stdout.is_empty());
}

#[test]
fn rank_rejects_a_light_held_twice() {
    let res = run(&["rank", "1L", "1L"], "");
    assert_eq!(res.code, exit_code::ERROR);
    assert_eq!(res.stderr.lines().count(), 1);
}

#[test]
fn deal_is_reproducible_by_seed() {
    let a = run(&["deal", "--seed", "42"], "");
    let b = run(&["deal", "--seed", "42"], "");
    assert_eq!(a.code, exit_code::SUCCESS);
    assert_eq!(a.stdout, b.stdout);
    assert!(a.stdout.starts_with("Seed: 42"));
}

#[test]
fn sim_conserves_funds() {
    let res = run(&["sim", "--rounds", "20", "--seed", "3"], "");
    assert_eq!(res.code, exit_code::SUCCESS, "{}", res.stderr);
    assert!(res.stdout.contains("Conservation: ok"));
    assert!(res.stdout.contains("sim: rounds=20 seed=3 opponent=HeuristicAI"));
}

#[test]
fn play_runs_to_the_prompt_and_quits() {
    let res = run(
        &["play", "--seed", "5", "--pace", "0", "--opponent", "passive"],
        "c\nq\n",
    );
    assert_eq!(res.code, exit_code::SUCCESS, "{}", res.stderr);
    assert!(res.stdout.contains("== New game (seed 5), 10000 each =="));
    assert!(res.stdout.contains("You call 100"));
    assert!(res.stdout.contains("Opponent call 100"));
    assert!(res.stdout.contains("Rounds: "));
}

#[test]
fn play_stops_after_the_round_limit() {
    let res = run(
        &[
            "play", "--seed", "6", "--pace", "0", "--opponent", "passive", "--rounds", "1",
        ],
        "f\n",
    );
    assert_eq!(res.code, exit_code::SUCCESS, "{}", res.stderr);
    assert!(res.stdout.contains("Round 1: Opponent won 1000"));
}

#[test]
fn play_with_closed_input_is_interrupted() {
    let res = run(&["play", "--seed", "1", "--pace", "0"], "");
    assert_eq!(res.code, exit_code::INTERRUPTED);
}

#[test]
fn invalid_pace_flag_is_rejected() {
    let res = run(&["play", "--pace=-2"], "q\n");
    assert_eq!(res.code, exit_code::ERROR);
    assert!(res.stderr.contains("pace must be a finite number"));
}

#[test]
fn unknown_opponent_flag_is_rejected() {
    let res = run(&["sim", "--opponent", "minimax"], "");
    assert_eq!(res.code, exit_code::ERROR);
    assert!(res.stderr.contains("unknown opponent 'minimax'"));
}

#[test]
fn help_and_version_exit_zero() {
    for flag in ["--help", "--version"] {
        let res = run(&[flag], "");
        assert_eq!(res.code, exit_code::SUCCESS);
        assert!(!res.stdout.is_empty());
    }
}

#[test]
fn missing_subcommand_is_an_error() {
    let res = run(&[], "");
    assert_eq!(res.code, exit_code::ERROR);
    assert!(res.stderr.contains("Usage"));
}
