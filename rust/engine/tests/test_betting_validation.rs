use seotda_engine::errors::GameError;
use seotda_engine::player::BettingAction as A;
use seotda_engine::rules::{validate_action, BetContext, ValidatedAction, MIN_BET};

fn ctx(cash: u32, pot: u32, standing_bet: u32, facing_raise: bool) -> BetContext {
    BetContext {
        cash,
        pot,
        standing_bet,
        facing_raise,
    }
}

#[test]
fn raise_with_empty_pot_is_rejected() {
    let err = validate_action(&ctx(10_000, 0, 0, false), A::Raise).unwrap_err();
    assert_eq!(err, GameError::EmptyPot);
}

#[test]
fn raise_bets_the_pot() {
    let va = validate_action(&ctx(9_400, 1_200, 100, false), A::Raise).unwrap();
    assert_eq!(va, ValidatedAction::Raise(1_200));
}

#[test]
fn raise_over_cash_is_rejected_not_clamped() {
    let err = validate_action(&ctx(800, 1_000, 0, false), A::Raise).unwrap_err();
    assert_eq!(
        err,
        GameError::InsufficientFunds {
            required: 1_000,
            available: 800
        }
    );
}

#[test]
fn call_over_cash_is_rejected() {
    let err = validate_action(&ctx(900, 3_000, 1_000, true), A::Call).unwrap_err();
    assert!(matches!(err, GameError::InsufficientFunds { required: 1_000, .. }));
}

#[test]
fn facing_raise_forbids_reraise() {
    let err = validate_action(&ctx(10_000, 2_000, 1_000, true), A::Raise).unwrap_err();
    assert_eq!(err, GameError::RaiseNotAllowed);
    assert_eq!(
        validate_action(&ctx(10_000, 2_000, 1_000, true), A::Call).unwrap(),
        ValidatedAction::Call(1_000)
    );
}

#[test]
fn fold_is_always_legal() {
    assert_eq!(
        validate_action(&ctx(0, 0, 0, true), A::Fold).unwrap(),
        ValidatedAction::Fold
    );
}

#[test]
fn opening_call_is_min_bet() {
    assert_eq!(
        validate_action(&ctx(MIN_BET, 1_000, 0, false), A::Call).unwrap(),
        ValidatedAction::Call(MIN_BET)
    );
}
