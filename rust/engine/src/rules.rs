use serde::Serialize;

use crate::errors::GameError;
use crate::player::BettingAction as A;

/// Amount each player pays into the pot before cards are dealt.
pub const ANTE: u32 = 500;
/// Opening bet when a call is made with no standing bet.
pub const MIN_BET: u32 = 100;

/// What the acting player sees when deciding on a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BetContext {
    /// Actor's cash
    pub cash: u32,
    pub pot: u32,
    /// Last bet made in the current betting phase, 0 if none
    pub standing_bet: u32,
    /// True when the opponent's last action was a raise
    pub facing_raise: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "amount", rename_all = "snake_case")]
pub enum ValidatedAction {
    Fold,
    Call(u32),
    Raise(u32),
}

impl ValidatedAction {
    pub fn amount(&self) -> u32 {
        match self {
            ValidatedAction::Fold => 0,
            ValidatedAction::Call(a) | ValidatedAction::Raise(a) => *a,
        }
    }

    pub fn kind(&self) -> A {
        match self {
            ValidatedAction::Fold => A::Fold,
            ValidatedAction::Call(_) => A::Call,
            ValidatedAction::Raise(_) => A::Raise,
        }
    }
}

/// A legal action together with what it would cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionOption {
    pub action: A,
    pub cost: u32,
}

/// Cost of calling: the standing bet, or the minimum bet when nobody has bet yet.
pub fn call_amount(standing_bet: u32) -> u32 {
    if standing_bet == 0 {
        MIN_BET
    } else {
        standing_bet
    }
}

/// Validates a human betting action.
///
/// Amounts are derived from the table, never supplied by the player: a call
/// costs [`call_amount`] and a raise costs the whole pot. Nothing is clamped;
/// an unaffordable bet is rejected outright so the ledger stays untouched.
///
/// # Errors
///
/// - [`GameError::InsufficientFunds`] when the actor cannot pay
/// - [`GameError::EmptyPot`] for a raise with nothing in the pot
/// - [`GameError::RaiseNotAllowed`] for a raise while facing a raise
///
/// # Examples
///
/// ```
/// use seotda_engine::errors::GameError;
/// use seotda_engine::player::BettingAction;
/// use seotda_engine::rules::{validate_action, BetContext, ValidatedAction};
///
/// let ctx = BetContext { cash: 9_500, pot: 1_000, standing_bet: 0, facing_raise: false };
/// assert_eq!(validate_action(&ctx, BettingAction::Call), Ok(ValidatedAction::Call(100)));
/// assert_eq!(validate_action(&ctx, BettingAction::Raise), Ok(ValidatedAction::Raise(1_000)));
///
/// let broke = BetContext { cash: 50, ..ctx };
/// assert!(matches!(
///     validate_action(&broke, BettingAction::Call),
///     Err(GameError::InsufficientFunds { required: 100, available: 50 })
/// ));
/// ```
pub fn validate_action(ctx: &BetContext, action: A) -> Result<ValidatedAction, GameError> {
    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::Call => {
            let amount = call_amount(ctx.standing_bet);
            if amount > ctx.cash {
                return Err(GameError::InsufficientFunds {
                    required: amount,
                    available: ctx.cash,
                });
            }
            Ok(ValidatedAction::Call(amount))
        }
        A::Raise => {
            if ctx.facing_raise {
                return Err(GameError::RaiseNotAllowed);
            }
            if ctx.pot == 0 {
                return Err(GameError::EmptyPot);
            }
            if ctx.pot > ctx.cash {
                return Err(GameError::InsufficientFunds {
                    required: ctx.pot,
                    available: ctx.cash,
                });
            }
            Ok(ValidatedAction::Raise(ctx.pot))
        }
    }
}

/// Settles an AI action without ever rejecting it.
///
/// A call is clamped to the available cash. A raise that is not allowed
/// (facing a raise, empty pot, or more than the cash) becomes a call. The
/// returned flag is true when a raise was downgraded.
pub fn settle_lenient(ctx: &BetContext, action: A) -> (ValidatedAction, bool) {
    match action {
        A::Fold => (ValidatedAction::Fold, false),
        A::Call => (
            ValidatedAction::Call(call_amount(ctx.standing_bet).min(ctx.cash)),
            false,
        ),
        A::Raise => match validate_action(ctx, A::Raise) {
            Ok(v) => (v, false),
            Err(_) => (
                ValidatedAction::Call(call_amount(ctx.standing_bet).min(ctx.cash)),
                true,
            ),
        },
    }
}

/// Lists every action that [`validate_action`] would accept, with its cost.
pub fn available_actions(ctx: &BetContext) -> Vec<ActionOption> {
    [A::Call, A::Raise, A::Fold]
        .into_iter()
        .filter_map(|a| {
            validate_action(ctx, a).ok().map(|v| ActionOption {
                action: a,
                cost: v.amount(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(cash: u32, pot: u32, standing_bet: u32, facing_raise: bool) -> BetContext {
        BetContext {
            cash,
            pot,
            standing_bet,
            facing_raise,
        }
    }

    #[test]
    fn call_opens_with_min_bet() {
        assert_eq!(call_amount(0), MIN_BET);
        assert_eq!(call_amount(1_100), 1_100);
    }

    #[test]
    fn facing_raise_only_call_and_fold() {
        let c = ctx(9_000, 2_200, 1_100, true);
        let acts: Vec<A> = available_actions(&c).iter().map(|o| o.action).collect();
        assert_eq!(acts, vec![A::Call, A::Fold]);
        assert_eq!(available_actions(&c)[0].cost, 1_100);
    }

    #[test]
    fn broke_player_can_only_fold() {
        let c = ctx(0, 1_000, 0, false);
        let acts = available_actions(&c);
        assert_eq!(acts.len(), 1);
        assert_eq!(acts[0].action, A::Fold);
    }

    #[test]
    fn lenient_clamps_and_downgrades() {
        let c = ctx(60, 1_000, 0, false);
        assert_eq!(settle_lenient(&c, A::Call), (ValidatedAction::Call(60), false));
        assert_eq!(settle_lenient(&c, A::Raise), (ValidatedAction::Call(60), true));

        let facing = ctx(9_000, 2_000, 1_000, true);
        assert_eq!(
            settle_lenient(&facing, A::Raise),
            (ValidatedAction::Call(1_000), true)
        );
    }
}
