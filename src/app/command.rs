use anyhow::Result;
use clap::{App, ArgMatches};

/// A subcommand of the application.
///
/// A command declares its own CLI arguments and runs itself given the values clap matched for them.
/// Command names must be unique in an application.
pub(crate) trait Command<'a> {
    /// Returns the name used to invoke the command.
    fn name(&self) -> &str;

    /// Returns the clap subcommand declaring the arguments of this command.
    fn clap_subcommand(&self) -> App<'a, 'a>;

    /// Runs the command.
    ///
    /// Returning an error makes the application exit with a failure status code.
    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()>;
}
