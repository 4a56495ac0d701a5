use tracing::debug;

use crate::cli::HiArgs;
use crate::error::{CommandResult, GreetError};
use crate::greetings;

/// Returns the greeting message for the provided arguments.
pub fn message(args: &HiArgs) -> CommandResult<String> {
    if args.name.is_empty() {
        return Err(GreetError::EmptyName);
    }

    debug!(name = %args.name, "dispatching hi");
    Ok(greetings::hello(&args.name))
}
