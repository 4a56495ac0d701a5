use tracing::debug;

use crate::cli::ByeArgs;
use crate::error::{CommandResult, GreetError};
use crate::greetings;

/// Returns the farewell message for the provided arguments.
///
/// The predecessor of this tool passed a stray formatting builtin to the
/// farewell instead of the parsed flag; here the parsed flag is passed.
pub fn message(args: &ByeArgs) -> CommandResult<String> {
    if args.name.is_empty() {
        return Err(GreetError::EmptyName);
    }

    let formal = args.formal();
    debug!(name = %args.name, formal, "dispatching bye");
    Ok(greetings::goodbye(&args.name, formal))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(name: &str, formal: bool) -> ByeArgs {
        ByeArgs {
            name: name.into(),
            formal,
            no_formal: false,
        }
    }

    #[test]
    fn casual_farewell_by_default() {
        let message = message(&args("Bob", false)).expect("farewell succeeds");
        assert_eq!(message, "Bye, Bob!");
    }

    #[test]
    fn formal_farewell_when_requested() {
        let message = message(&args("Bob", true)).expect("farewell succeeds");
        assert_eq!(message, "Goodbye, Bob. Have a good day.");
    }

    #[test]
    fn rejects_empty_name() {
        let err = message(&args("", false)).expect_err("empty name fails");
        assert!(matches!(err, GreetError::EmptyName));
    }
}
