use std::time::Duration;

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Registry;

use seotda_ai::ScriptedOpponent;
use seotda_engine::engine::Engine;
use seotda_engine::errors::GameError;
use seotda_engine::player::{BettingAction, Seat};
use seotda_game::logging::TestLogSubscriber;
use seotda_game::{GameConfig, Pacing, Session};

fn config(seed: u64, opponent: &str) -> GameConfig {
    GameConfig {
        seed: Some(seed),
        opponent: opponent.to_string(),
        pacing: Pacing::instant(),
    }
}

/// Human calls whenever possible and folds when the call is unaffordable.
/// Checks that no money is created or lost after every step.
fn play_rounds(s: &mut Session, rounds: usize) {
    let mut steps = 0;
    while s.history().len() < rounds && !s.is_over() {
        s.run_until_input().unwrap();
        assert_eq!(s.engine().ledger().total(), 20_000);
        if s.is_over() {
            break;
        }
        match s.call() {
            Ok(()) => {}
            Err(GameError::InsufficientFunds { .. }) => s.fold().unwrap(),
            Err(e) => panic!("unexpected rejection: {e}"),
        }
        assert_eq!(s.engine().ledger().total(), 20_000);
        assert!(s.engine().deck_is_intact());
        steps += 1;
        assert!(steps < 10_000, "game did not progress");
    }
}

#[test]
fn unknown_ai_label_falls_back_to_call_and_is_logged() {
    let logs = TestLogSubscriber::new();
    let registry = Registry::default().with(logs.clone().into_layer::<Registry>());

    let mut s = Session::from_parts(
        config(3, "passive"),
        3,
        Engine::new(3),
        Box::new(ScriptedOpponent::new(["all-in"])),
    );
    tracing::subscriber::with_default(registry, || {
        s.run_until_input().unwrap();
        s.call().unwrap();
        s.run_until_input().unwrap();
    });

    let diag = &s.diagnostics()[0];
    assert_eq!(diag.label, "all-in");
    assert_eq!(diag.fallback, BettingAction::Call);
    assert_eq!(s.engine().ledger().cash(Seat::Ai), 9_400);

    let warnings = logs.at_level(Level::WARN);
    let entry = warnings
        .iter()
        .find(|e| e.message.contains("unrecognized ai action"))
        .expect("fallback is logged");
    assert_eq!(entry.field("label"), Some("all-in"));
    assert_eq!(s.debug_state().diagnostics.len(), 1);
}

#[test]
fn same_seed_same_game() {
    let mut a = Session::new(config(2024, "heuristic")).unwrap();
    let mut b = Session::new(config(2024, "heuristic")).unwrap();
    play_rounds(&mut a, 8);
    play_rounds(&mut b, 8);

    assert_eq!(a.stats(), b.stats());
    assert_eq!(a.cash(Seat::Human), b.cash(Seat::Human));
    for (ra, rb) in a.history().iter().zip(b.history()) {
        assert_eq!(ra.actions, rb.actions);
        assert_eq!(ra.winner, rb.winner);
        assert_eq!(ra.showdown, rb.showdown);
    }
}

#[test]
fn long_game_conserves_funds() {
    for seed in [1, 7, 99] {
        let mut s = Session::new(config(seed, "heuristic")).unwrap();
        play_rounds(&mut s, 40);
        let stats = s.stats();
        assert_eq!(stats.rounds as usize, s.history().len() - stats.ties as usize);
    }
}

#[test]
fn enormous_pace_saturates_delays() {
    let mut s = Session::new(GameConfig {
        pacing: Pacing::scaled(1e300),
        ..config(8, "passive")
    })
    .unwrap();
    s.run_until_input().unwrap();
    s.fold().unwrap();
    let next = s.next_continuation().unwrap();
    assert_eq!(next.delay, Duration::from_millis(u64::MAX));

    play_rounds(&mut s, 4);
    assert!(s.scheduler().clock() >= Duration::from_millis(u64::MAX));
}

#[test]
fn unknown_opponent_is_rejected() {
    let err = Session::new(config(1, "oracle")).unwrap_err();
    assert_eq!(err.to_string(), "Opponent error: Unknown AI type: oracle");
}
