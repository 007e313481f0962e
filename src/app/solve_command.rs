use super::{cli_manager, command::Command, common};
use anyhow::{anyhow, Context, Result};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::{info, warn};
use transarg::{
    aa::{self, Argument, Extension, Query, Semantics},
    io::{AspartixWriter, ResponseWriter},
    solvers::{
        CompleteSemanticsSolver, CredulousAcceptanceComputer, ExtensionEnumerator,
        GroundedSemanticsSolver, PreferredSemanticsSolver, SingleExtensionComputer,
        SkepticalAcceptanceComputer, StableSemanticsSolver,
    },
};

const CMD_NAME: &str = "solve";

const ARG_PROBLEM: &str = "PROBLEM";
const ARG_ARG: &str = "ARG";

pub(crate) struct SolveCommand;

impl SolveCommand {
    pub(crate) fn new() -> Self {
        SolveCommand
    }
}

impl<'a> Command<'a> for SolveCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Solves a problem on an argumentation framework read from an Aspartix file")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .arg(
                Arg::with_name(ARG_PROBLEM)
                    .short("p")
                    .empty_values(false)
                    .multiple(false)
                    .help("the problem to solve (see the problems command)")
                    .required(true),
            )
            .arg(
                Arg::with_name(ARG_ARG)
                    .short("a")
                    .empty_values(false)
                    .multiple(false)
                    .help("the argument (for DC/DS queries)")
                    .required(false),
            )
            .arg(common::max_steps_arg())
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let file = arg_matches
            .value_of(common::ARG_INPUT)
            .context("missing input file")?;
        let problem = arg_matches
            .value_of(ARG_PROBLEM)
            .context("missing problem")?;
        let (query, semantics) = aa::read_problem_string(problem)?;
        let budget = common::read_budget(arg_matches)?;
        let af = common::read_file_path(file)?;
        let arg = arg_matches
            .value_of(ARG_ARG)
            .map(|a| af.argument_set().get_argument(&a.to_string()))
            .transpose()
            .context("while parsing the argument passed to the command line")?;
        check_arg_definition(query, &arg)?;
        info!("solving {}", problem);
        match semantics {
            Semantics::GR => answer(GroundedSemanticsSolver::new(&af), query, arg),
            Semantics::CO => answer(
                CompleteSemanticsSolver::new_with_budget(&af, budget),
                query,
                arg,
            ),
            Semantics::PR => answer(
                PreferredSemanticsSolver::new_with_budget(&af, budget),
                query,
                arg,
            ),
            Semantics::ST => answer(
                StableSemanticsSolver::new_with_budget(&af, budget),
                query,
                arg,
            ),
        }
    }
}

fn check_arg_definition(query: Query, arg: &Option<&Argument<String>>) -> Result<()> {
    match query {
        Query::SE | Query::EE => {
            if arg.is_some() {
                warn!(
                    "unexpected argument on the command line (useless for query {})",
                    query.as_ref()
                );
            }
            Ok(())
        }
        Query::DC | Query::DS => {
            if arg.is_none() {
                Err(anyhow!(
                    "missing argument on the command line (required for query {})",
                    query.as_ref()
                ))
            } else {
                Ok(())
            }
        }
    }
}

fn answer<'a, S>(solver: S, query: Query, arg: Option<&Argument<String>>) -> Result<()>
where
    S: ExtensionEnumerator<'a, String>,
{
    let writer = AspartixWriter::default();
    let mut out = std::io::stdout();
    let queried_arg = || arg.ok_or_else(|| anyhow!("missing argument"));
    match query {
        Query::SE => match solver.compute_one_extension() {
            Some(ext) => writer.write_single_extension(&mut out, &ext),
            None => ResponseWriter::<String>::write_no_extension(&writer, &mut out),
        },
        Query::EE => writer.write_extensions(&mut out, &solver.enumerate_extensions()),
        Query::DC => {
            let (status, certificate) =
                solver.is_credulously_accepted_with_certificate(queried_arg()?);
            log_certificate("extension containing the argument", certificate.as_ref());
            ResponseWriter::<String>::write_acceptance_status(&writer, &mut out, status)
        }
        Query::DS => {
            let (status, certificate) =
                solver.is_skeptically_accepted_with_certificate(queried_arg()?);
            log_certificate("extension rejecting the argument", certificate.as_ref());
            ResponseWriter::<String>::write_acceptance_status(&writer, &mut out, status)
        }
    }
}

fn log_certificate(description: &str, certificate: Option<&Extension<String>>) {
    if let Some(ext) = certificate {
        let labels = ext.iter().map(|a| a.to_string()).collect::<Vec<String>>();
        info!("{}: [{}]", description, labels.join(","));
    }
}
