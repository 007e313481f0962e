use anyhow::{anyhow, Context, Result};
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter, EnumString};

/// The Dung semantics handled by the solvers.
///
/// Their string forms are the two-letter codes used in problem strings, read regardless of the case.
#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Semantics {
    /// Grounded semantics
    GR,
    /// Complete semantics
    CO,
    /// Preferred semantics
    PR,
    /// Stable semantics
    ST,
}

/// The questions that can be asked about the extensions of a semantics.
#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Query {
    /// Give one extension, or tell there is none
    SE,
    /// Give all the extensions
    EE,
    /// Tell whether an argument belongs to some extension
    DC,
    /// Tell whether an argument belongs to all the extensions
    DS,
}

/// Iterates over the problem strings the solvers can answer, queries first then semantics.
pub fn iter_problem_strings() -> impl Iterator<Item = String> {
    Query::iter().flat_map(|q| {
        Semantics::iter().map(move |s| format!("{}-{}", q.as_ref(), s.as_ref()))
    })
}

/// Reads a problem string like `DC-PR` into its query and its semantics.
///
/// # Example
///
/// ```
/// # use transarg::aa::{read_problem_string, Query, Semantics};
/// assert_eq!((Query::EE, Semantics::ST), read_problem_string("ee-st").unwrap());
/// assert!(read_problem_string("EE").is_err());
/// ```
pub fn read_problem_string(problem: &str) -> Result<(Query, Semantics)> {
    let context = || format!(r#"while parsing problem string "{}""#, problem);
    let (query, semantics) = problem
        .split_once('-')
        .ok_or_else(|| anyhow!(r#"expected a query and a semantics separated by "-""#))
        .with_context(context)?;
    let query = Query::from_str(query)
        .map_err(|_| anyhow!(r#"undefined query "{}""#, query))
        .with_context(context)?;
    let semantics = Semantics::from_str(semantics)
        .map_err(|_| anyhow!(r#"undefined semantics "{}""#, semantics))
        .with_context(context)?;
    Ok((query, semantics))
}
