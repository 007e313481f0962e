use super::ResponseWriter;
use crate::aa::{AAFramework, Extension, ExtensionSet, LabelType};
use anyhow::{Context, Result};
use std::io::Write;

/// Writes frameworks as `arg`/`att` facts, and answers in the bracketed form read by argumentation tools.
///
/// Extensions are written as `[a,b]`, sets of extensions as `[[a],[b]]` and acceptance statuses as `YES` or `NO`.
///
/// ```
/// # use transarg::aa::{AAFramework, ArgumentSet};
/// # use transarg::io::AspartixWriter;
/// let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["rain", "bike"]));
/// af.new_attack(&"rain", &"bike").unwrap();
/// let mut out = Vec::new();
/// AspartixWriter::default().write_framework(&af, &mut out).unwrap();
/// assert_eq!("arg(rain).\narg(bike).\natt(rain,bike).\n", String::from_utf8(out).unwrap());
/// ```
#[derive(Default)]
pub struct AspartixWriter {}

impl AspartixWriter {
    /// Arguments come first in id order, then attacks in insertion order.
    pub fn write_framework<T: LabelType>(
        &self,
        framework: &AAFramework<T>,
        writer: &mut dyn Write,
    ) -> Result<()> {
        let context = "while writing a framework";
        for arg in framework.argument_set().iter() {
            writeln!(writer, "arg({}).", arg).context(context)?;
        }
        for attack in framework.iter_attacks() {
            writeln!(writer, "att({},{}).", attack.attacker(), attack.attacked()).context(context)?;
        }
        writer.flush().context(context)
    }

    /// Writes a comment line listing the arguments of an extension.
    ///
    /// Comment lines are ignored by the [AspartixReader](crate::io::AspartixReader).
    pub fn write_extension_comment<T: LabelType>(
        &self,
        writer: &mut dyn Write,
        name: &str,
        extension: &Extension<T>,
    ) -> Result<()> {
        let context = "while writing a comment";
        writeln!(writer, "% {}: {}", name, bracketed(extension)).context(context)?;
        writer.flush().context(context)
    }
}

fn bracketed<T: LabelType>(extension: &Extension<T>) -> String {
    let labels = extension
        .iter()
        .map(|a| a.to_string())
        .collect::<Vec<String>>();
    format!("[{}]", labels.join(","))
}

impl<T> ResponseWriter<T> for AspartixWriter
where
    T: LabelType,
{
    fn write_single_extension(
        &self,
        writer: &mut dyn Write,
        extension: &Extension<T>,
    ) -> Result<()> {
        let context = "while writing an extension";
        writeln!(writer, "{}", bracketed(extension)).context(context)?;
        writer.flush().context(context)
    }

    fn write_extensions(
        &self,
        writer: &mut dyn Write,
        extensions: &ExtensionSet<T>,
    ) -> Result<()> {
        let context = "while writing extensions";
        let all = extensions.iter().map(bracketed).collect::<Vec<String>>();
        writeln!(writer, "[{}]", all.join(",")).context(context)?;
        writer.flush().context(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::ArgumentSet;

    fn framework() -> AAFramework<String> {
        let mut af = AAFramework::new_with_argument_set(ArgumentSet::default());
        let jam = af.new_argument("jam".to_string());
        let bus = af.new_argument("bus".to_string());
        let walk = af.new_argument("walk".to_string());
        af.new_attack_by_ids(jam, jam).unwrap();
        af.new_attack_by_ids(bus, walk).unwrap();
        af
    }

    fn written<F>(f: F) -> String
    where
        F: FnOnce(&mut dyn Write) -> Result<()>,
    {
        let mut buffer = Vec::new();
        f(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_write_framework() {
        let af = framework();
        let writer = AspartixWriter::default();
        assert_eq!(
            "arg(jam).\narg(bus).\narg(walk).\natt(jam,jam).\natt(bus,walk).\n",
            written(|w| writer.write_framework(&af, w))
        );
    }

    #[test]
    fn test_write_extensions() {
        let af = framework();
        let writer = AspartixWriter::default();
        let e1 = Extension::from_membership(&af, &[false, true, false]);
        let e2 = Extension::from_membership(&af, &[false, false, false]);
        assert_eq!(
            "[bus]\n",
            written(|w| writer.write_single_extension(w, &e1))
        );
        let set = ExtensionSet::new(vec![e1.clone(), e2.clone()], false);
        assert_eq!("[[],[bus]]\n", written(|w| writer.write_extensions(w, &set)));
        assert_eq!(
            "% grounded: [bus]\n",
            written(|w| writer.write_extension_comment(w, "grounded", &e1))
        );
    }

    #[test]
    fn test_write_statuses() {
        let writer = AspartixWriter::default();
        assert_eq!(
            "YES\n",
            written(|w| ResponseWriter::<String>::write_acceptance_status(&writer, w, true))
        );
        assert_eq!(
            "NO\n",
            written(|w| ResponseWriter::<String>::write_no_extension(&writer, w))
        );
    }
}
