use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};

/// Command-line arguments for the greet CLI.
#[derive(Debug, Parser)]
#[command(
    name = "greet",
    version,
    about = "A command-line interface for greeting people.",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Greet someone by name.
    Hi(HiArgs),
    /// Bid someone farewell by name.
    Bye(ByeArgs),
}

#[derive(Debug, clap::Args)]
pub struct HiArgs {
    /// Name of the person to greet.
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub name: String,
}

#[derive(Debug, clap::Args)]
pub struct ByeArgs {
    /// Name of the person to bid farewell.
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub name: String,

    /// Use the formal farewell.
    #[arg(long, overrides_with = "no_formal")]
    pub formal: bool,

    /// Use the casual farewell (the default).
    #[arg(long, overrides_with = "formal")]
    pub no_formal: bool,
}

impl ByeArgs {
    /// Whether the formal farewell was requested. `--formal` and
    /// `--no-formal` are last-one-wins.
    pub fn formal(&self) -> bool {
        self.formal
    }
}
