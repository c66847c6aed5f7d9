//! Command synthesis for a single input unit.
//!
//! A [`CommandLine`] is built from a program token, an [`ArgumentSet`] shared by
//! every job of a run, and the [`InputUnit`] the job processes. Nothing here
//! touches the filesystem or spawns processes.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::PathBuf;

/// One unit of work: a single-end reads file or a pair of mate files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputUnit {
    /// A FASTQ file of single-end reads.
    Single(PathBuf),
    /// First and second FASTQ files of paired-end reads, in that order.
    Paired(PathBuf, PathBuf),
}

impl InputUnit {
    /// Tokens selecting the input files on the tool's command line.
    ///
    /// Paths are passed through as raw OS strings, so names that are not
    /// valid UTF-8 reach the tool unchanged.
    pub fn selector_tokens(&self) -> Vec<OsString> {
        match self {
            InputUnit::Paired(first, second) => vec![
                OsString::from("-1"),
                first.as_os_str().to_owned(),
                OsString::from("-2"),
                second.as_os_str().to_owned(),
            ],
            InputUnit::Single(path) => vec![OsString::from("-i"), path.as_os_str().to_owned()],
        }
    }
}

/// Value attached to a flag in an [`ArgumentSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    /// Flag-only argument, emitted when `true` and omitted when `false`.
    Switch(bool),
    /// Flag followed by a value token.
    Value(OsString),
}

impl ArgValue {
    /// Build a value argument from anything displayable.
    pub fn value(value: impl fmt::Display) -> Self {
        ArgValue::Value(value.to_string().into())
    }

    /// Build a value argument from a path, keeping its bytes as they are.
    pub fn path(path: impl AsRef<OsStr>) -> Self {
        ArgValue::Value(path.as_ref().to_owned())
    }
}

/// Ordered flag → value mapping shared by all jobs of one run.
///
/// Each flag appears at most once. Tokens are emitted in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentSet {
    entries: Vec<(String, ArgValue)>,
}

impl ArgumentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `flag` to `value`, replacing any earlier value in place.
    pub fn set(&mut self, flag: impl Into<String>, value: ArgValue) -> &mut Self {
        let flag = flag.into();
        match self.entries.iter_mut().find(|(f, _)| *f == flag) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((flag, value)),
        }
        self
    }

    /// Builder-style variant of [`ArgumentSet::set`].
    pub fn with(mut self, flag: impl Into<String>, value: ArgValue) -> Self {
        self.set(flag, value);
        self
    }

    /// Flatten into command line tokens.
    pub fn tokens(&self) -> Vec<OsString> {
        let mut tokens = Vec::with_capacity(self.entries.len() * 2);
        for (flag, value) in &self.entries {
            match value {
                ArgValue::Switch(true) => tokens.push(OsString::from(flag)),
                ArgValue::Switch(false) => {}
                ArgValue::Value(v) => {
                    tokens.push(OsString::from(flag));
                    tokens.push(v.clone());
                }
            }
        }
        tokens
    }
}

/// A fully synthesized invocation: program plus its argument vector.
///
/// The argument vector goes straight to process creation as OS strings. The
/// shell-quoted rendering from `Display` is lossy and only used for logs and
/// dry runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: OsString,
    args: Vec<OsString>,
}

impl CommandLine {
    pub fn program(&self) -> &OsStr {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// All tokens, program first.
    pub fn tokens(&self) -> Vec<&OsStr> {
        std::iter::once(self.program.as_os_str())
            .chain(self.args.iter().map(OsString::as_os_str))
            .collect()
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens = self.tokens().into_iter().map(OsStr::to_string_lossy);
        f.write_str(&shell_words::join(tokens))
    }
}

/// Synthesize the command line for one input unit.
///
/// The result is `program`, then the argument tokens in set order, then the
/// file selector (`-1 A -2 B` for a pair, `-i A` otherwise).
pub fn build_command(
    program: impl AsRef<OsStr>,
    args: Option<&ArgumentSet>,
    unit: &InputUnit,
) -> CommandLine {
    let mut tokens = args.map(ArgumentSet::tokens).unwrap_or_default();
    tokens.extend(unit.selector_tokens());
    CommandLine {
        program: program.as_ref().to_owned(),
        args: tokens,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(path: &str) -> InputUnit {
        InputUnit::Single(PathBuf::from(path))
    }

    fn paired(first: &str, second: &str) -> InputUnit {
        InputUnit::Paired(PathBuf::from(first), PathBuf::from(second))
    }

    #[test]
    fn test_single_unit_selector() {
        let cmd = build_command("remove", None, &single("reads.fq"));
        assert_eq!(cmd.tokens(), vec!["remove", "-i", "reads.fq"]);
    }

    #[test]
    fn test_paired_unit_selector_keeps_order() {
        let cmd = build_command("remove", None, &paired("r1.fq", "r2.fq"));
        assert_eq!(cmd.tokens(), vec!["remove", "-1", "r1.fq", "-2", "r2.fq"]);
    }

    #[test]
    fn test_arguments_precede_selector() {
        let args = ArgumentSet::new()
            .with("-f", ArgValue::value("frags.dat"))
            .with("-o", ArgValue::value("out"));
        let cmd = build_command("extractor", Some(&args), &single("a.fq"));
        assert_eq!(
            cmd.tokens(),
            vec!["extractor", "-f", "frags.dat", "-o", "out", "-i", "a.fq"]
        );
    }

    #[test]
    fn test_argument_token_count() {
        let args = ArgumentSet::new()
            .with("-f", ArgValue::value("frags.dat"))
            .with("-d", ArgValue::Switch(true))
            .with("-N", ArgValue::Switch(false))
            .with("-k", ArgValue::value(4))
            .with("-x", ArgValue::Switch(true));

        // 2 per value argument, 1 per true switch, 0 per false switch.
        assert_eq!(args.tokens().len(), 2 + 1 + 2 + 1);

        let cmd = build_command("rm_reads", Some(&args), &single("a.fq"));
        assert_eq!(cmd.args().len(), 6 + 2);
        assert!(!cmd.args().iter().any(|arg| arg == "-N"));
    }

    #[test]
    fn test_set_replaces_existing_flag_in_place() {
        let mut args = ArgumentSet::new();
        args.set("-f", ArgValue::value("a"));
        args.set("-o", ArgValue::value("b"));
        args.set("-f", ArgValue::value("c"));

        assert_eq!(args.tokens(), vec!["-f", "c", "-o", "b"]);
    }

    #[test]
    fn test_values_are_not_validated() {
        let args = ArgumentSet::new().with("", ArgValue::value(""));
        let cmd = build_command("separate", Some(&args), &single("a.fq"));
        assert_eq!(cmd.tokens(), vec!["separate", "", "", "-i", "a.fq"]);
    }

    #[test]
    fn test_display_quotes_tokens_with_spaces() {
        let cmd = build_command("./remove", None, &single("my reads.fq"));
        assert_eq!(cmd.to_string(), "./remove -i 'my reads.fq'");
    }

    #[test]
    fn test_building_is_deterministic() {
        let args = ArgumentSet::new()
            .with("-p", ArgValue::value(13))
            .with("-l", ArgValue::value(50));
        let unit = paired("a_1.fq", "a_2.fq");
        assert_eq!(
            build_command("rm_reads", Some(&args), &unit),
            build_command("rm_reads", Some(&args), &unit)
        );
    }

    #[test]
    fn test_display_of_unicode_path_is_unquoted() {
        let cmd = build_command("./remove", None, &single("réads.fq"));
        assert_eq!(cmd.to_string(), "./remove -i réads.fq");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_paths_keep_their_bytes() {
        use std::os::unix::ffi::{OsStrExt, OsStringExt};

        let name = OsStr::from_bytes(b"r\xffeads.fq");
        let args = ArgumentSet::new().with("-f", ArgValue::path(name));
        let unit = InputUnit::Paired(PathBuf::from(name), PathBuf::from("mate.fq"));

        let cmd = build_command("./remove", Some(&args), &unit);

        assert_eq!(cmd.args()[1].clone().into_vec(), b"r\xffeads.fq".to_vec());
        assert_eq!(cmd.args()[3].clone().into_vec(), b"r\xffeads.fq".to_vec());
        assert_eq!(cmd.args()[5], "mate.fq");
        assert_eq!(cmd.to_string(), "./remove -f r\u{fffd}eads.fq -1 r\u{fffd}eads.fq -2 mate.fq");
    }
}
