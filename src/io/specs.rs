use crate::aa::{AAFramework, Argument, Extension, ExtensionSet, LabelType};
use anyhow::{Context, Result};
use std::io::{Read, Write};

/// A callback receiving the warnings raised while reading a framework.
///
/// It is given the line number (starting at 1) and the message.
pub type WarningHandler = Box<dyn Fn(usize, String)>;

/// Reads frameworks from a textual format.
pub trait InstanceReader<T>
where
    T: LabelType,
{
    /// Reads a whole framework.
    ///
    /// Non-fatal issues are reported to the handlers given to [add_warning_handler](Self::add_warning_handler).
    ///
    /// # Example
    ///
    /// ```
    /// # use transarg::aa::AAFramework;
    /// # use transarg::io::{AspartixReader, InstanceReader};
    /// let af: AAFramework<String> = AspartixReader::default()
    ///     .read(&mut "arg(walk).\narg(bike).\natt(bike,walk).\n".as_bytes())
    ///     .unwrap();
    /// assert_eq!(1, af.n_attacks());
    /// ```
    fn read(&self, reader: &mut dyn Read) -> Result<AAFramework<T>>;

    /// Finds the argument of a framework designated by a string, as written in the format of the reader.
    fn read_arg_from_str<'a>(&self, af: &'a AAFramework<T>, arg: &str) -> Result<&'a Argument<T>>;

    /// Registers a warning handler.
    fn add_warning_handler(&mut self, h: WarningHandler);
}

/// Writes the answers to the problems listed by [iter_problem_strings](crate::aa::iter_problem_strings).
pub trait ResponseWriter<T>
where
    T: LabelType,
{
    /// Tells the semantics has no extension.
    fn write_no_extension(&self, writer: &mut dyn Write) -> Result<()> {
        let context = "while writing the absence of extension";
        writeln!(writer, "NO").context(context)?;
        writer.flush().context(context)
    }

    /// Writes one extension (`SE` queries).
    fn write_single_extension(
        &self,
        writer: &mut dyn Write,
        extension: &Extension<T>,
    ) -> Result<()>;

    /// Writes all the extensions of a semantics (`EE` queries).
    fn write_extensions(&self, writer: &mut dyn Write, extensions: &ExtensionSet<T>)
        -> Result<()>;

    /// Writes the answer to an acceptance query (`DC` and `DS` queries).
    fn write_acceptance_status(
        &self,
        writer: &mut dyn Write,
        acceptance_status: bool,
    ) -> Result<()> {
        let context = "while writing an acceptance status";
        let answer = if acceptance_status { "YES" } else { "NO" };
        writeln!(writer, "{}", answer).context(context)?;
        writer.flush().context(context)
    }
}
