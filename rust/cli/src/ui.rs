//! Shared terminal output helpers.

use std::io::Write;

use seotda_engine::rules::ActionOption;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Prompt listing the legal actions and their costs.
pub fn write_prompt(out: &mut dyn Write, options: &[ActionOption]) -> std::io::Result<()> {
    let choices: Vec<String> = options
        .iter()
        .map(|o| match o.cost {
            0 => o.action.to_string(),
            cost => format!("{} {}", o.action, cost),
        })
        .collect();
    write!(out, "Your move [{}] (s=state, q=quit): ", choices.join(" | "))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use seotda_engine::player::BettingAction;

    #[test]
    fn prompt_lists_costs() {
        let mut out = Vec::new();
        let options = [
            ActionOption {
                action: BettingAction::Call,
                cost: 100,
            },
            ActionOption {
                action: BettingAction::Fold,
                cost: 0,
            },
        ];
        write_prompt(&mut out, &options).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Your move [call 100 | fold]"));
    }
}
