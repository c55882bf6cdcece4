//! Text rendering of cards, hands, events and snapshots.
//!
//! Light cards get a star when the terminal can show it and an `L` suffix
//! otherwise.
//!
//! ```rust
//! use seotda_cli::formatters::{format_card, format_rank};
//! use seotda_engine::cards::Card;
//! use seotda_engine::hand::evaluate;
//!
//! let hand = [Card::light(3).unwrap(), Card::light(8).unwrap()];
//! assert!(format_card(&hand[0]) == "3★" || format_card(&hand[0]) == "3L");
//! assert_eq!(format_rank(&evaluate(&hand).unwrap()), "38-gwang (1000)");
//! ```

use seotda_engine::cards::Card;
use seotda_engine::hand::HandRank;
use seotda_engine::player::Seat;
use seotda_engine::record::Stats;
use seotda_game::GameEvent;
use seotda_game::events::Cue;
use seotda_game::snapshot::{CardView, SeatView, Snapshot};

/// Unix terminals are assumed to handle UTF-8; on Windows only known
/// modern terminals are.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_card(card: &Card) -> String {
    if card.is_light() && supports_unicode() {
        format!("{}★", card.month)
    } else {
        card.to_string()
    }
}

pub fn format_card_view(view: &CardView) -> String {
    match view {
        CardView::Hidden => "??".to_string(),
        CardView::Shown(card) => format_card(card),
    }
}

/// `[1★] [7]`; an empty hand renders as `-`.
pub fn format_hand(cards: &[CardView]) -> String {
    if cards.is_empty() {
        return "-".to_string();
    }
    cards
        .iter()
        .map(|c| format!("[{}]", format_card_view(c)))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_rank(rank: &HandRank) -> String {
    format!("{} ({})", rank.label, rank.score)
}

pub fn seat_name(seat: Seat) -> &'static str {
    match seat {
        Seat::Human => "You",
        Seat::Ai => "Opponent",
    }
}

fn cue_name(cue: Cue) -> &'static str {
    match cue {
        Cue::CardDeal => "card deal",
        Cue::Bet => "bet",
        Cue::Raise => "raise",
        Cue::Fold => "fold",
        Cue::Win => "win",
        Cue::Lose => "lose",
        Cue::Tie => "tie",
        Cue::NewRound => "new round",
    }
}

/// One line per event worth showing; phase changes are left to the
/// snapshot.
pub fn format_event(event: &GameEvent) -> Option<String> {
    let line = match event {
        GameEvent::GameStarted { seed, starting_cash, .. } => {
            format!("== New game (seed {seed}), {starting_cash} each ==")
        }
        GameEvent::RoundStarted { round, pot } => format!("-- Round {round}, pot {pot} --"),
        GameEvent::CardsDealt { human, .. } => {
            let cards: Vec<String> = human.iter().map(format_card).collect();
            format!("Your cards: {}", cards.join(" "))
        }
        GameEvent::PlayerAction {
            seat,
            action,
            amount,
            pot,
        } => format!("{} {action} {amount} (pot {pot})", seat_name(*seat)),
        GameEvent::Showdown { showdown } => format!(
            "Showdown: you {} vs opponent {}",
            format_rank(&showdown.human.rank),
            format_rank(&showdown.ai.rank)
        ),
        GameEvent::RoundCompleted {
            round,
            winner: Some(seat),
            pot,
            ..
        } => format!("Round {round}: {} won {pot}", seat_name(*seat)),
        GameEvent::GameEnded { winner, round } => match winner {
            Some(seat) => format!("Game over after round {round}: {} won", seat_name(*seat)),
            None => format!("Game over after round {round}: no winner"),
        },
        GameEvent::Cue { cue } => format!("(♪ {})", cue_name(*cue)),
        GameEvent::PhaseChanged { .. } | GameEvent::RoundCompleted { winner: None, .. } => {
            return None;
        }
    };
    Some(line)
}

fn format_seat(label: &str, seat: &SeatView) -> String {
    let folded = if seat.folded { " (folded)" } else { "" };
    format!("{label:<9}{:>7}  {}{folded}", seat.cash, format_hand(&seat.cards))
}

/// The table as the human sees it.
pub fn format_snapshot(snapshot: &Snapshot) -> String {
    let mut lines = vec![
        format!(
            "Round {} | {} | pot {}",
            snapshot.round, snapshot.phase, snapshot.pot
        ),
        format_seat("Opponent", &snapshot.ai),
        format_seat("You", &snapshot.human),
    ];
    if !snapshot.opponent_message.is_empty() {
        lines.push(format!("Opponent: \"{}\"", snapshot.opponent_message));
    }
    if !snapshot.game_message.is_empty() {
        lines.push(snapshot.game_message.clone());
    }
    lines.join("\n")
}

pub fn format_stats(stats: &Stats) -> String {
    format!(
        "Rounds: {}\nYou won: {}\nOpponent won: {}\nTies: {}\nFolds: {}",
        stats.rounds, stats.human_wins, stats.ai_wins, stats.ties, stats.folds
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use seotda_engine::player::BettingAction;

    #[test]
    fn hidden_cards_render_as_question_marks() {
        let cards = [CardView::Shown(Card::normal(7).unwrap()), CardView::Hidden];
        assert_eq!(format_hand(&cards), "[7] [??]");
        assert_eq!(format_hand(&[]), "-");
    }

    #[test]
    fn phase_changes_are_not_printed() {
        use seotda_engine::game::Phase;
        let e = GameEvent::PhaseChanged {
            from: Phase::FirstBetting,
            to: Phase::SecondCardDeal,
        };
        assert_eq!(format_event(&e), None);
    }

    #[test]
    fn actions_name_the_seat() {
        let e = GameEvent::PlayerAction {
            seat: Seat::Ai,
            action: BettingAction::Raise,
            amount: 1_100,
            pot: 2_200,
        };
        assert_eq!(format_event(&e).unwrap(), "Opponent raise 1100 (pot 2200)");
    }
}
