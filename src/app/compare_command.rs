use super::{cli_manager, command::Command, common};
use anyhow::Result;
use clap::{App, AppSettings, ArgMatches, SubCommand};
use transarg::travel::ModeChooser;

const CMD_NAME: &str = "compare";

pub(crate) struct CompareCommand;

impl CompareCommand {
    pub(crate) fn new() -> Self {
        CompareCommand
    }
}

impl<'a> Command<'a> for CompareCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Displays the representative extension of each semantics for a context")
            .setting(AppSettings::DisableVersion)
            .args(&common::context_args())
            .arg(common::max_steps_arg())
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let context = common::read_context(arg_matches)?;
        let chooser = ModeChooser::new(context).with_budget(common::read_budget(arg_matches)?);
        for (semantics, labels) in chooser.compare_semantics()? {
            match labels {
                Some(l) => println!("{}: [{}]", semantics.as_ref(), l.join(",")),
                None => println!("{}: no extension", semantics.as_ref()),
            }
        }
        Ok(())
    }
}
