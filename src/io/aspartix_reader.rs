use super::{InstanceReader, WarningHandler};
use crate::aa::{AAFramework, Argument, ArgumentSet};
use anyhow::{anyhow, Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::io::{BufRead, BufReader, Read};

const NAME: &str = r"\s*[_[:alpha:]][-_[:alpha:]\d]*\s*";

lazy_static! {
    static ref STATEMENT: Regex = Regex::new(r"^\s*(arg|att)\(([^()]*)\)\.\s*$").unwrap();
    static ref ONE_NAME: Regex = Regex::new(&format!("^({})$", NAME)).unwrap();
    static ref TWO_NAMES: Regex = Regex::new(&format!("^({}),({})$", NAME, NAME)).unwrap();
}

const AMBIGUOUS_SPACES_WARNING: &str = "argument names beginning or ending by spaces may be ambiguous";

/// A non-empty, non-comment line of an Aspartix file.
#[derive(Debug, PartialEq)]
enum Statement {
    Arg(String),
    Att(String, String),
}

fn trimmed_name(raw: &str, warnings: &mut Vec<String>) -> String {
    let name = raw.trim();
    if name.len() != raw.len() {
        warnings.push(AMBIGUOUS_SPACES_WARNING.to_string());
    }
    name.to_string()
}

fn parse_statement(line: &str, warnings: &mut Vec<String>) -> Result<Statement> {
    let statement = STATEMENT
        .captures(line)
        .ok_or_else(|| anyhow!("syntax error in line \"{}\"", line))?;
    let body = &statement[2];
    if &statement[1] == "arg" {
        let names = ONE_NAME
            .captures(body)
            .ok_or_else(|| anyhow!("invalid argument name in {}", line.trim()))?;
        Ok(Statement::Arg(trimmed_name(&names[1], warnings)))
    } else {
        let names = TWO_NAMES
            .captures(body)
            .ok_or_else(|| anyhow!("invalid argument names in {}", line.trim()))?;
        Ok(Statement::Att(
            trimmed_name(&names[1], warnings),
            trimmed_name(&names[2], warnings),
        ))
    }
}

fn is_comment_line(l: &str) -> bool {
    l.trim_start().starts_with('%')
}

/// A reader for the Aspartix format.
///
/// This object is used to read an [`AAFramework`] encoded using the Aspartix input format, as defined on [the Aspartix website](https://www.dbai.tuwien.ac.at/research/argumentation/aspartix/dung.html).
/// The [LabelType](crate::aa::LabelType) of the returned argument frameworks is [String].
///
/// Argument names may contain hyphens, as the ones produced by the travel framework builder.
/// Lines beginning with a `%` are comments; empty lines are ignored.
/// An argument must be declared before it is used in an attack; declaring an argument twice raises a warning.
///
/// # Aspartix format
///
/// The following content defines an Argumentation Framework with three arguments labelled `a`, `b` and `c` and three attacks (`a` and `b` attack each other and `c` attacks `b`).
///
/// ```text
/// arg(a).
/// arg(b).
/// arg(c).
/// att(a,b).
/// att(b,a).
/// att(c,b).
/// ```
///
/// # Example
///
/// ```
/// # use transarg::aa::AAFramework;
/// # use transarg::io::{AspartixReader, InstanceReader};
/// let reader = AspartixReader::default();
/// let af = reader.read(&mut "arg(short-distance).\narg(too-slow).\natt(short-distance,too-slow).\n".as_bytes()).unwrap();
/// assert_eq!(2, af.n_arguments());
/// assert_eq!(1, af.n_attacks());
/// ```
#[derive(Default)]
pub struct AspartixReader {
    warning_handlers: Vec<WarningHandler>,
}

impl AspartixReader {
    fn notify(&self, line_number: usize, warnings: Vec<String>) {
        for w in warnings {
            self.warning_handlers
                .iter()
                .for_each(|h| (h)(line_number, w.clone()));
        }
    }
}

impl InstanceReader<String> for AspartixReader {
    fn read(&self, reader: &mut dyn Read) -> Result<AAFramework<String>> {
        let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&[]));
        let br = BufReader::new(reader);
        for (i, line) in br.lines().enumerate() {
            let context = || format!("while reading line {}", i + 1);
            let l = line.with_context(context)?;
            if l.trim().is_empty() || is_comment_line(&l) {
                continue;
            }
            let mut warnings = vec![];
            match parse_statement(&l, &mut warnings).with_context(context)? {
                Statement::Arg(label) => {
                    if af.argument_set().get_argument_index(&label).is_ok() {
                        warnings.push(format!("argument {} is declared more than once", label));
                    }
                    af.new_argument(label);
                }
                Statement::Att(from, to) => af.new_attack(&from, &to).with_context(context)?,
            }
            self.notify(1 + i, warnings);
        }
        Ok(af)
    }

    fn read_arg_from_str<'a>(
        &self,
        af: &'a AAFramework<String>,
        arg: &str,
    ) -> Result<&'a Argument<String>> {
        af.argument_set().get_argument(&arg.to_string())
    }

    fn add_warning_handler(&mut self, h: WarningHandler) {
        self.warning_handlers.push(h);
    }
}
