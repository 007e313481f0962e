use super::{cli_manager, command::Command, common};
use anyhow::{Context, Result};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::info;
use std::{
    fs::File,
    io::{BufWriter, Write},
};
use transarg::{io::AspartixWriter, solvers::GroundedSemanticsSolver, travel::FrameworkBuilder};

const CMD_NAME: &str = "export";

const ARG_OUTPUT: &str = "OUTPUT";
const ARG_WITH_GROUNDED: &str = "WITH_GROUNDED";

pub(crate) struct ExportCommand;

impl ExportCommand {
    pub(crate) fn new() -> Self {
        ExportCommand
    }
}

impl<'a> Command<'a> for ExportCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Writes the framework built for a context in the Aspartix format")
            .setting(AppSettings::DisableVersion)
            .args(&common::context_args())
            .arg(
                Arg::with_name(ARG_OUTPUT)
                    .short("o")
                    .long("output")
                    .empty_values(false)
                    .multiple(false)
                    .help("the output file (defaults to the standard output)"),
            )
            .arg(
                Arg::with_name(ARG_WITH_GROUNDED)
                    .long("with-grounded")
                    .help("appends the grounded extension as a comment line"),
            )
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let context = common::read_context(arg_matches)?;
        let af = FrameworkBuilder::new().build(&context)?;
        let mut out: Box<dyn Write> = match arg_matches.value_of(ARG_OUTPUT) {
            Some(path) => {
                info!("writing the framework to {:?}", path);
                Box::new(BufWriter::new(
                    File::create(path)
                        .with_context(|| format!(r#"while creating file "{}""#, path))?,
                ))
            }
            None => Box::new(std::io::stdout()),
        };
        let writer = AspartixWriter::default();
        writer.write_framework(&af, &mut out)?;
        if arg_matches.is_present(ARG_WITH_GROUNDED) {
            let grounded = GroundedSemanticsSolver::new(&af).grounded_extension();
            writer.write_extension_comment(&mut out, "grounded", &grounded)?;
        }
        Ok(())
    }
}
