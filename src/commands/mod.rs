pub mod bye;
pub mod hi;

use crate::cli::{Args, Command};
use crate::error::CommandResult;

/// Dispatches execution to the appropriate command handler.
pub fn execute(args: &Args) -> CommandResult<String> {
    match &args.command {
        Command::Hi(hi) => hi::message(hi),
        Command::Bye(bye) => bye::message(bye),
    }
}
