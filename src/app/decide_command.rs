use super::{cli_manager, command::Command, common};
use anyhow::{Context, Result};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::warn;
use std::io::Write;
use transarg::{
    io::{AspartixWriter, ResponseWriter},
    solvers::GroundedSemanticsSolver,
    travel::ModeChooser,
};

const CMD_NAME: &str = "decide";

const ARG_GROUNDED: &str = "GROUNDED";

pub(crate) struct DecideCommand;

impl DecideCommand {
    pub(crate) fn new() -> Self {
        DecideCommand
    }
}

impl<'a> Command<'a> for DecideCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Chooses a travel mode for a context")
            .setting(AppSettings::DisableVersion)
            .args(&common::context_args())
            .arg(
                Arg::with_name(ARG_GROUNDED)
                    .long("grounded")
                    .help("also displays the arguments of the grounded extension"),
            )
            .arg(common::max_steps_arg())
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let context = common::read_context(arg_matches)?;
        let chooser = ModeChooser::new(context).with_budget(common::read_budget(arg_matches)?);
        let result = chooser.decide()?;
        if result.is_approximate() {
            warn!("the search budget was exhausted; the percentages are approximate");
        }
        let mut out = std::io::stdout();
        let io_context = "while writing the decision";
        if arg_matches.is_present(ARG_GROUNDED) {
            let af = chooser.framework()?;
            let grounded = GroundedSemanticsSolver::new(&af).grounded_extension();
            write!(out, "grounded extension: ").context(io_context)?;
            AspartixWriter::default().write_single_extension(&mut out, &grounded)?;
        }
        for (mode, percentage) in result.percentages() {
            writeln!(out, "{}: {:.2}%", mode, percentage).context(io_context)?;
        }
        writeln!(out, "selected mode: {}", result.selected_mode()).context(io_context)?;
        Ok(())
    }
}
