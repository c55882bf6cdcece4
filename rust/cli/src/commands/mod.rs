//! One module per subcommand.
//!
//! Each exposes `handle_<name>_command(...) -> Result<(), CliError>` taking
//! its output streams as `&mut dyn Write`, so commands run the same way
//! against a terminal or an in-memory buffer.

mod cfg;
mod deal;
mod play;
mod rank;
mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::{PlayOptions, handle_play_command};
pub use rank::handle_rank_command;
pub use sim::handle_sim_command;
