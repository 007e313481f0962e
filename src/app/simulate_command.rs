use super::{cli_manager, command::Command, common};
use anyhow::{Context as _, Result};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::BTreeMap;
use strum::IntoEnumIterator;
use transarg::travel::{Context, Mode, ModeChooser, Weather};

const CMD_NAME: &str = "simulate";

const ARG_COUNT: &str = "COUNT";
const ARG_SEED: &str = "SEED";
const ARG_MAX_DISTANCE: &str = "MAX_DISTANCE";

pub(crate) struct SimulateCommand;

impl SimulateCommand {
    pub(crate) fn new() -> Self {
        SimulateCommand
    }
}

impl<'a> Command<'a> for SimulateCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Decides for a batch of random contexts and counts the selected modes")
            .setting(AppSettings::DisableVersion)
            .arg(
                Arg::with_name(ARG_COUNT)
                    .short("n")
                    .long("count")
                    .empty_values(false)
                    .multiple(false)
                    .default_value("100")
                    .help("the number of random contexts"),
            )
            .arg(
                Arg::with_name(ARG_SEED)
                    .long("seed")
                    .empty_values(false)
                    .multiple(false)
                    .default_value("0")
                    .help("the seed of the random generator"),
            )
            .arg(
                Arg::with_name(ARG_MAX_DISTANCE)
                    .long("max-distance")
                    .empty_values(false)
                    .multiple(false)
                    .default_value("100")
                    .help("the upper bound of the random distances"),
            )
            .arg(common::max_steps_arg())
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let count = parse_value::<usize>(arg_matches, ARG_COUNT)?;
        let seed = parse_value::<u64>(arg_matches, ARG_SEED)?;
        let max_distance = parse_value::<f64>(arg_matches, ARG_MAX_DISTANCE)?;
        let budget = common::read_budget(arg_matches)?;
        let contexts = random_contexts(count, seed, max_distance)?;
        info!("deciding for {} random context(s) (seed {})", count, seed);
        let selected = contexts
            .par_iter()
            .map(|c| -> Result<Mode> {
                let result = ModeChooser::new(*c).with_budget(budget).decide()?;
                debug!("{} => {}", c, result);
                Ok(result.selected_mode())
            })
            .collect::<Result<Vec<Mode>>>()?;
        let mut counts = Mode::iter().map(|m| (m, 0)).collect::<BTreeMap<Mode, usize>>();
        for mode in selected {
            *counts.entry(mode).or_default() += 1;
        }
        for (mode, n) in counts {
            let share = if count == 0 {
                0.
            } else {
                100. * n as f64 / count as f64
            };
            println!("{}: {} ({:.2}%)", mode, n, share);
        }
        Ok(())
    }
}

fn parse_value<T>(arg_matches: &ArgMatches<'_>, arg: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = arg_matches
        .value_of(arg)
        .with_context(|| format!("missing value for {}", arg))?;
    value
        .parse::<T>()
        .with_context(|| format!(r#"invalid value "{}" for {}"#, value, arg))
}

/// Draws contexts uniformly: distance in `[0, max_distance)`, any weather, a fair coin for health and rush hour.
///
/// The contexts only depend on the seed, so a simulation can be replayed.
fn random_contexts(count: usize, seed: u64, max_distance: f64) -> Result<Vec<Context>> {
    if !max_distance.is_finite() || max_distance <= 0. {
        return Err(anyhow::anyhow!("invalid maximal distance {}", max_distance));
    }
    let weathers = Weather::iter().collect::<Vec<Weather>>();
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let distance = rng.gen_range(0. ..max_distance);
            let weather = weathers[rng.gen_range(0..weathers.len())];
            Context::new(distance, weather, rng.gen_bool(0.5), rng.gen_bool(0.5))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_contexts_depend_on_seed_only() {
        let c1 = random_contexts(20, 42, 100.).unwrap();
        let c2 = random_contexts(20, 42, 100.).unwrap();
        assert_eq!(c1, c2);
        assert_eq!(20, c1.len());
        assert!(c1.iter().all(|c| (0. ..100.).contains(&c.distance())));
        assert_ne!(c1, random_contexts(20, 43, 100.).unwrap());
    }

    #[test]
    fn test_random_contexts_invalid_distance() {
        assert!(random_contexts(1, 0, 0.).is_err());
        assert!(random_contexts(1, 0, f64::NAN).is_err());
    }
}
