use super::{app_helper::init_logger_with_level, command::Command};
use anyhow::{anyhow, Result};
use clap::{App, AppSettings, Arg};
use log::info;
use std::{ffi::OsString, str::FromStr};
use sysinfo::System;

const ARG_LOGGING_LEVEL: &str = "LOGGING_LEVEL";

/// The argument setting the minimal logging level; every command should declare it.
pub(crate) fn logging_level_cli_arg<'a>() -> Arg<'a, 'a> {
    Arg::with_name(ARG_LOGGING_LEVEL)
        .long("logging-level")
        .multiple(false)
        .default_value("info")
        .possible_values(&["trace", "debug", "info", "warn", "error", "off"])
        .help("set the minimal logging level")
}

/// Holds the commands and dispatches the CLI arguments to them.
pub(crate) struct CliManager<'a> {
    app_name: &'a str,
    version: &'a str,
    authors: &'a str,
    about: &'a str,
    commands: Vec<Box<dyn Command<'a>>>,
}

impl<'a> CliManager<'a> {
    pub(crate) fn new(app_name: &'a str, version: &'a str, authors: &'a str, about: &'a str) -> Self {
        CliManager {
            app_name,
            version,
            authors,
            about,
            commands: vec![],
        }
    }

    pub(crate) fn add_command(&mut self, command: Box<dyn Command<'a>>) {
        self.commands.push(command);
    }

    fn clap_app(&self) -> App<'a, 'a> {
        let app = App::new(self.app_name)
            .global_setting(AppSettings::DisableVersion)
            .global_setting(AppSettings::VersionlessSubcommands)
            .setting(AppSettings::NeedsSubcommandHelp)
            .setting(AppSettings::SubcommandRequired)
            .version(self.version)
            .author(self.authors)
            .about(self.about);
        self.commands
            .iter()
            .fold(app, |app, c| app.subcommand(c.clap_subcommand()))
    }

    pub(crate) fn parse_cli<I, T>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(|a| a.into()).collect();
        match self.clap_app().get_matches_from_safe(args.clone()) {
            Ok(matches) => {
                let (name, sub_matches) = matches.subcommand();
                let sub_matches = sub_matches.ok_or_else(|| anyhow!("missing subcommand"))?;
                let command = self
                    .commands
                    .iter()
                    .find(|c| c.name() == name)
                    .ok_or_else(|| anyhow!(r#"unknown command "{}""#, name))?;
                let level = sub_matches
                    .value_of(ARG_LOGGING_LEVEL)
                    .map(log::LevelFilter::from_str)
                    .transpose()?
                    .unwrap_or(log::LevelFilter::Info);
                init_logger_with_level(level);
                info!("{} {}", self.app_name, self.version);
                sys_info();
                command.execute(sub_matches)
            }
            Err(clap::Error {
                kind: clap::ErrorKind::HelpDisplayed,
                ..
            }) => {
                init_logger_with_level(log::LevelFilter::Info);
                self.print_help(&args)
            }
            Err(e) => {
                init_logger_with_level(log::LevelFilter::Info);
                info!("{} {}", self.app_name, self.version);
                Err(anyhow!("{}", e))
            }
        }
    }

    fn print_help(&self, args: &[OsString]) -> Result<()> {
        const HELP_STRINGS: [&str; 3] = ["help", "-h", "--help"];
        let words = args
            .iter()
            .skip(1)
            .take(2)
            .map(|a| a.to_string_lossy().to_string())
            .collect::<Vec<String>>();
        let subcommand_name = match words.as_slice() {
            [first, second] if HELP_STRINGS.contains(&first.as_str()) => Some(second),
            [first, ..] if !HELP_STRINGS.contains(&first.as_str()) => Some(first),
            _ => None,
        };
        let mut message = Vec::new();
        match subcommand_name.and_then(|n| self.commands.iter().find(|c| c.name() == n.as_str())) {
            Some(c) => c.clap_subcommand().write_long_help(&mut message)?,
            None => self.clap_app().write_long_help(&mut message)?,
        }
        String::from_utf8_lossy(&message)
            .split('\n')
            .for_each(|s| info!("{}", s));
        info!("");
        Ok(())
    }
}

fn sys_info() {
    info!("----------------------------------------");
    let mut sys = System::new();
    sys.refresh_cpu();
    sys.refresh_memory();
    let unknown = || "[unknown]".to_string();
    info!("running on {}", System::host_name().unwrap_or_else(unknown));
    info!(
        "OS is {} {} with kernel {}",
        System::name().unwrap_or_else(unknown),
        System::os_version().unwrap_or_else(unknown),
        System::kernel_version().unwrap_or_else(unknown)
    );
    let mut cpu_brands: Vec<&str> = sys.cpus().iter().map(|c| c.brand()).collect();
    cpu_brands.sort_unstable();
    cpu_brands.dedup();
    info!(
        "physical core count: {} {:?}",
        sys.physical_core_count()
            .map_or_else(unknown, |n| n.to_string()),
        cpu_brands
    );
    info!("total memory: {} KB", sys.total_memory() / 1024);
    info!("----------------------------------------");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{ArgMatches, SubCommand};
    use std::{cell::RefCell, rc::Rc};

    struct RecordingCommand {
        executed: Rc<RefCell<bool>>,
        flag_set: Rc<RefCell<bool>>,
    }

    impl<'a> Command<'a> for RecordingCommand {
        fn name(&self) -> &str {
            "record"
        }

        fn clap_subcommand(&self) -> App<'a, 'a> {
            SubCommand::with_name("record")
                .about("records its invocation")
                .arg(Arg::with_name("flag").short("x"))
                .arg(logging_level_cli_arg())
        }

        fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
            *self.executed.borrow_mut() = true;
            if arg_matches.is_present("flag") {
                *self.flag_set.borrow_mut() = true;
            }
            Ok(())
        }
    }

    fn run(args: Vec<&'static str>) -> Result<(bool, bool)> {
        let mut manager = CliManager::new("app", "0.0.0", "someone", "a test app");
        let executed = Rc::new(RefCell::new(false));
        let flag_set = Rc::new(RefCell::new(false));
        manager.add_command(Box::new(RecordingCommand {
            executed: Rc::clone(&executed),
            flag_set: Rc::clone(&flag_set),
        }));
        manager.parse_cli(args)?;
        let result = (*executed.borrow(), *flag_set.borrow());
        Ok(result)
    }

    #[test]
    fn test_command_executed() {
        assert_eq!(
            (true, false),
            run(vec!["app", "record", "--logging-level", "off"]).unwrap()
        );
    }

    #[test]
    fn test_command_and_flag() {
        assert_eq!(
            (true, true),
            run(vec!["app", "record", "-x", "--logging-level", "off"]).unwrap()
        );
    }

    #[test]
    fn test_no_subcommand() {
        assert!(run(vec!["app"]).is_err());
    }

    #[test]
    fn test_unknown_subcommand() {
        assert!(run(vec!["app", "foo"]).is_err());
    }

    #[test]
    fn test_unknown_arg() {
        assert!(run(vec!["app", "record", "-y"]).is_err());
    }

    #[test]
    fn test_invalid_logging_level() {
        assert!(run(vec!["app", "record", "--logging-level", "loud"]).is_err());
    }

    #[test]
    fn test_help_does_not_execute() {
        assert_eq!((false, false), run(vec!["app", "-h"]).unwrap());
        assert_eq!((false, false), run(vec!["app", "help", "record"]).unwrap());
        assert_eq!((false, false), run(vec!["app", "record", "-h"]).unwrap());
    }
}
