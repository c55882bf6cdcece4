//! `cfg`: prints the resolved configuration with the source of each value.
//!
//! ```json
//! {
//!   "seed": { "value": null, "source": "default" },
//!   "pace": { "value": 1.0, "source": "default" },
//!   "opponent": { "value": "heuristic", "source": "default" }
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(e));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "pace": {
            "value": config.pace,
            "source": sources.pace,
        },
        "opponent": {
            "value": config.opponent,
            "source": sources.opponent,
        }
    });
    writeln!(out, "{}", serde_json::to_string_pretty(&display)?)?;
    Ok(())
}
