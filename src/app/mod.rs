mod app_helper;
pub(crate) use app_helper::AppHelper;

mod authors_command;
pub(crate) use authors_command::AuthorsCommand;

mod cli_manager;

mod command;
pub(crate) use command::Command;

mod common;

mod compare_command;
pub(crate) use compare_command::CompareCommand;

mod decide_command;
pub(crate) use decide_command::DecideCommand;

mod export_command;
pub(crate) use export_command::ExportCommand;

mod problems_command;
pub(crate) use problems_command::ProblemsCommand;

mod simulate_command;
pub(crate) use simulate_command::SimulateCommand;

mod solve_command;
pub(crate) use solve_command::SolveCommand;
