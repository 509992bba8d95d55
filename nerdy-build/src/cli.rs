//! Command-line surface for `nerdy-build`.
//!
//! The only recognised argument is `-docs`. Everything else is accepted and
//! ignored, so the parser collects every token verbatim, without requiring
//! UTF-8, and leaves mode selection to [`crate::mode::Mode::from_args`].

use std::ffi::OsString;

use clap::Parser;

/// Parsed invocation arguments.
#[derive(Debug, Parser)]
#[command(
    name = "nerdy-build",
    about = "Bundle the nerdy library with Closure Compiler, or document it with jsdoc (-docs)",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    /// Raw arguments; `-docs` selects documentation mode.
    #[arg(
        value_name = "ARG",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(OsString)
    )]
    pub raw: Vec<OsString>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[], &[])]
    #[case(&["-docs"], &["-docs"])]
    #[case(&["--verbose", "-docs", "--foo"], &["--verbose", "-docs", "--foo"])]
    #[case(&["-h", "--version"], &["-h", "--version"])]
    #[case(&["plain", "-docs"], &["plain", "-docs"])]
    fn collects_every_argument_verbatim(#[case] input: &[&str], #[case] expected: &[&str]) {
        let argv = std::iter::once("nerdy-build").chain(input.iter().copied());
        let args = Args::try_parse_from(argv).expect("arguments always parse");
        let expected_os: Vec<OsString> = expected.iter().map(OsString::from).collect();
        assert_eq!(args.raw, expected_os);
    }

    #[cfg(unix)]
    #[test]
    fn accepts_arguments_that_are_not_utf8() {
        use std::os::unix::ffi::OsStringExt;

        let garbled = OsString::from_vec(vec![0xff, 0xfe]);
        let argv = [OsString::from("nerdy-build"), garbled.clone(), OsString::from("-docs")];
        let args = Args::try_parse_from(argv).expect("non-UTF-8 arguments parse");
        assert_eq!(args.raw, [garbled, OsString::from("-docs")]);
    }
}
