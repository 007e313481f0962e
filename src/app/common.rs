use anyhow::{anyhow, Context as _, Result};
use clap::{Arg, ArgMatches};
use log::{info, warn};
use std::{
    fs::{self, File},
    io::BufReader,
    path::PathBuf,
    str::FromStr,
};
use transarg::{
    aa::AAFramework,
    io::{AspartixReader, InstanceReader},
    travel::{Context, Position, Weather},
    utils::SearchBudget,
};

pub(crate) const ARG_INPUT: &str = "INPUT";

pub(crate) fn input_args() -> Arg<'static, 'static> {
    Arg::with_name(ARG_INPUT)
        .short("f")
        .empty_values(false)
        .multiple(false)
        .help("the input file that contains the AF, in Aspartix format")
        .required(true)
}

pub(crate) fn read_file_path(file_path: &str) -> Result<AAFramework<String>> {
    let canonicalized = canonicalize_file_path(file_path)?;
    info!("reading input file {:?}", canonicalized);
    let mut reader = AspartixReader::default();
    reader.add_warning_handler(Box::new(|line, msg| warn!("at line {}: {}", line, msg)));
    let mut file_reader = BufReader::new(
        File::open(&canonicalized).with_context(|| format!("while opening {:?}", canonicalized))?,
    );
    let af = reader.read(&mut file_reader)?;
    info!(
        "the argumentation framework has {} argument(s) and {} attack(s)",
        af.n_arguments(),
        af.n_attacks(),
    );
    Ok(af)
}

/// Canonicalize a path given by the user.
pub(crate) fn canonicalize_file_path(file_path: &str) -> Result<PathBuf> {
    fs::canonicalize(PathBuf::from(file_path))
        .with_context(|| format!(r#"while opening file "{}""#, file_path))
}

const ARG_MAX_STEPS: &str = "MAX_STEPS";

pub(crate) fn max_steps_arg() -> Arg<'static, 'static> {
    Arg::with_name(ARG_MAX_STEPS)
        .long("max-steps")
        .empty_values(false)
        .multiple(false)
        .help("the maximal number of steps of the extension search (results are approximate beyond)")
        .required(false)
}

pub(crate) fn read_budget(arg_matches: &ArgMatches<'_>) -> Result<SearchBudget> {
    match arg_matches.value_of(ARG_MAX_STEPS) {
        Some(s) => {
            let max_steps = s
                .parse::<usize>()
                .with_context(|| format!(r#"invalid number of steps "{}""#, s))?;
            info!("the extension search is limited to {} step(s)", max_steps);
            Ok(SearchBudget::new(max_steps))
        }
        None => Ok(SearchBudget::default()),
    }
}

const ARG_DISTANCE: &str = "DISTANCE";
const ARG_FROM: &str = "FROM";
const ARG_TO: &str = "TO";
const ARG_WEATHER: &str = "WEATHER";
const ARG_HEALTHY: &str = "HEALTHY";
const ARG_UNHEALTHY: &str = "UNHEALTHY";
const ARG_RUSH_HOUR: &str = "RUSH_HOUR";

/// The arguments describing the context of a trip.
pub(crate) fn context_args() -> Vec<Arg<'static, 'static>> {
    vec![
        Arg::with_name(ARG_DISTANCE)
            .short("d")
            .long("distance")
            .empty_values(false)
            .multiple(false)
            .help("the distance of the trip")
            .required_unless(ARG_FROM),
        Arg::with_name(ARG_FROM)
            .long("from")
            .empty_values(false)
            .multiple(false)
            .value_name("X,Y")
            .allow_hyphen_values(true)
            .help("the start of the trip (replaces the distance)")
            .requires(ARG_TO)
            .conflicts_with(ARG_DISTANCE),
        Arg::with_name(ARG_TO)
            .long("to")
            .empty_values(false)
            .multiple(false)
            .value_name("X,Y")
            .allow_hyphen_values(true)
            .help("the destination of the trip")
            .requires(ARG_FROM),
        Arg::with_name(ARG_WEATHER)
            .short("w")
            .long("weather")
            .empty_values(false)
            .multiple(false)
            .case_insensitive(true)
            .possible_values(&["sunny", "cloudy", "rainy"])
            .default_value("sunny")
            .help("the weather"),
        Arg::with_name(ARG_HEALTHY)
            .long("healthy")
            .help("the traveler is in good health (default)")
            .conflicts_with(ARG_UNHEALTHY),
        Arg::with_name(ARG_UNHEALTHY)
            .long("unhealthy")
            .help("the traveler is in poor health"),
        Arg::with_name(ARG_RUSH_HOUR)
            .long("rush-hour")
            .help("the trip occurs during rush hour"),
    ]
}

pub(crate) fn read_context(arg_matches: &ArgMatches<'_>) -> Result<Context> {
    let weather_name = arg_matches.value_of(ARG_WEATHER).unwrap_or("sunny");
    let weather = Weather::from_str(weather_name)
        .map_err(|_| anyhow!(r#"undefined weather "{}""#, weather_name))?;
    let is_healthy = !arg_matches.is_present(ARG_UNHEALTHY);
    let is_rush_hour = arg_matches.is_present(ARG_RUSH_HOUR);
    let context = match (
        arg_matches.value_of(ARG_DISTANCE),
        arg_matches.value_of(ARG_FROM),
        arg_matches.value_of(ARG_TO),
    ) {
        (Some(d), _, _) => {
            let distance = d
                .parse::<f64>()
                .with_context(|| format!(r#"invalid distance "{}""#, d))?;
            Context::new(distance, weather, is_healthy, is_rush_hour)?
        }
        (None, Some(from), Some(to)) => Context::from_positions(
            &read_position(from)?,
            &read_position(to)?,
            weather,
            is_healthy,
            is_rush_hour,
        )?,
        _ => return Err(anyhow!("no distance given")),
    };
    info!("context is {}", context);
    Ok(context)
}

fn read_position(s: &str) -> Result<Position> {
    let context = || format!(r#"invalid position "{}" (expected "X,Y")"#, s);
    let (x, y) = s.split_once(',').ok_or_else(|| anyhow!("missing comma")).with_context(context)?;
    let x = x.trim().parse::<i32>().with_context(context)?;
    let y = y.trim().parse::<i32>().with_context(context)?;
    Ok(Position::new(x, y))
}
