//! Command lines for the external compiler and documentation generator.
//!
//! A [`CommandLine`] keeps two views of the same tokens. The raw view
//! ([`CommandLine::program`] and [`CommandLine::args`]) is what gets spawned:
//! every token is its own argv entry, so paths with spaces need no escaping.
//! The rendered view ([`CommandLine::tokens`] and `Display`) is the equivalent
//! shell command, with quoted tokens wrapped in double quotes. It is what gets
//! logged and compared in tests.

use std::fmt;

use camino::Utf8Path;

use crate::error::BuildError;
use crate::modules::ModuleList;

/// Flag introducing each compiler input.
pub const JS_FLAG: &str = "--js";
/// Flag naming the compiler's bundled output.
pub const JS_OUTPUT_FLAG: &str = "--js_output_file";
/// Flag naming the documentation output directory.
pub const DOCS_DIR_FLAG: &str = "-d";

/// A single command-line token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Rendered as-is.
    Plain(String),
    /// Rendered inside double quotes.
    Quoted(String),
}

impl Token {
    /// Returns the raw value passed to the process.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Plain(value) | Self::Quoted(value) => value,
        }
    }

    /// Returns the shell rendering of the token.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Plain(value) => value.clone(),
            Self::Quoted(value) => format!("\"{value}\""),
        }
    }

    fn plain(value: impl Into<String>) -> Self {
        Self::Plain(value.into())
    }

    fn quoted(value: impl Into<String>) -> Self {
        Self::Quoted(value.into())
    }
}

/// An executable together with any fixed leading arguments,
/// e.g. `java -jar build/compiler.jar`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    program: String,
    leading_args: Vec<String>,
}

impl ToolCommand {
    /// Creates a tool command from an executable and its fixed arguments.
    #[must_use]
    pub fn new<I, S>(program: impl Into<String>, leading_args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            leading_args: leading_args.into_iter().map(Into::into).collect(),
        }
    }

    /// Splits `parts` into executable and leading arguments.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::EmptyCommand`] naming `label` when `parts` is
    /// empty or the executable is blank.
    pub fn from_parts(label: &'static str, parts: &[String]) -> Result<Self, BuildError> {
        let Some((program, rest)) = parts.split_first() else {
            return Err(BuildError::EmptyCommand(label));
        };
        if program.trim().is_empty() {
            return Err(BuildError::EmptyCommand(label));
        }
        Ok(Self::new(program.clone(), rest.iter().cloned()))
    }

    /// Returns the executable.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Returns the fixed leading arguments.
    #[must_use]
    pub fn leading_args(&self) -> &[String] {
        &self.leading_args
    }
}

/// Ordered tokens for one external tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    args: Vec<Token>,
}

impl CommandLine {
    /// Creates a command line from an executable and argument tokens.
    #[must_use]
    pub fn new(program: impl Into<String>, args: Vec<Token>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Builds the optimizing compiler invocation:
    /// `<compiler> --js <m1> ... --js <mn> --js_output_file <output>`.
    #[must_use]
    pub fn compile(tool: &ToolCommand, modules: &ModuleList, output_file: &str) -> Self {
        let mut args = leading_tokens(tool);
        for module in modules.iter() {
            args.push(Token::plain(JS_FLAG));
            args.push(Token::plain(module.as_str()));
        }
        args.push(Token::plain(JS_OUTPUT_FLAG));
        args.push(Token::plain(output_file));
        Self::new(tool.program(), args)
    }

    /// Builds the documentation generator invocation:
    /// `<jsdoc> "<m1>" ... "<mn>" "<readme>" -d "<out_dir>"`.
    #[must_use]
    pub fn document(
        tool: &ToolCommand,
        modules: &ModuleList,
        readme: &Utf8Path,
        out_dir: &Utf8Path,
    ) -> Self {
        let mut args = leading_tokens(tool);
        args.extend(modules.iter().map(|module| Token::quoted(module.as_str())));
        args.push(Token::quoted(readme.as_str()));
        args.push(Token::plain(DOCS_DIR_FLAG));
        args.push(Token::quoted(out_dir.as_str()));
        Self::new(tool.program(), args)
    }

    /// Returns the executable to spawn.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Returns the raw argument values, without shell quoting.
    #[must_use]
    pub fn args(&self) -> impl Iterator<Item = &str> {
        self.args.iter().map(Token::value)
    }

    /// Returns the argument tokens.
    #[must_use]
    pub fn arg_tokens(&self) -> &[Token] {
        &self.args
    }

    /// Returns every rendered token, executable first.
    #[must_use]
    pub fn tokens(&self) -> Vec<String> {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().map(Token::render))
            .collect()
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens().join(" "))
    }
}

fn leading_tokens(tool: &ToolCommand) -> Vec<Token> {
    tool.leading_args().iter().map(Token::plain).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn modules() -> ModuleList {
        ModuleList::new(["./src/a.js", "./src/b c.js", "./src/d.js"]).expect("valid modules")
    }

    #[fixture]
    fn compiler() -> ToolCommand {
        ToolCommand::new("java", ["-jar", "build/compiler.jar"])
    }

    #[fixture]
    fn jsdoc() -> ToolCommand {
        ToolCommand::new("build/jsdoc/jsdoc", Vec::<String>::new())
    }

    #[rstest]
    fn compile_pairs_each_module_with_js_flag(compiler: ToolCommand, modules: ModuleList) {
        let command = CommandLine::compile(&compiler, &modules, "out.min.js");
        assert_eq!(command.program(), "java");
        let args: Vec<&str> = command.args().collect();
        assert_eq!(
            args,
            [
                "-jar",
                "build/compiler.jar",
                "--js",
                "./src/a.js",
                "--js",
                "./src/b c.js",
                "--js",
                "./src/d.js",
                "--js_output_file",
                "out.min.js",
            ]
        );
    }

    #[rstest]
    fn compile_renders_without_quotes(compiler: ToolCommand, modules: ModuleList) {
        let command = CommandLine::compile(&compiler, &modules, "out.min.js");
        insta::assert_snapshot!(
            command.to_string(),
            @"java -jar build/compiler.jar --js ./src/a.js --js ./src/b c.js --js ./src/d.js --js_output_file out.min.js"
        );
    }

    #[rstest]
    fn document_quotes_paths_when_rendered(jsdoc: ToolCommand, modules: ModuleList) {
        let command = CommandLine::document(
            &jsdoc,
            &modules,
            Utf8Path::new("README.md"),
            Utf8Path::new("./docs"),
        );
        insta::assert_snapshot!(
            command.to_string(),
            @r#"build/jsdoc/jsdoc "./src/a.js" "./src/b c.js" "./src/d.js" "README.md" -d "./docs""#
        );
    }

    #[rstest]
    fn document_passes_raw_paths_to_the_process(jsdoc: ToolCommand, modules: ModuleList) {
        let command = CommandLine::document(
            &jsdoc,
            &modules,
            Utf8Path::new("README.md"),
            Utf8Path::new("./docs"),
        );
        let args: Vec<&str> = command.args().collect();
        assert_eq!(
            args,
            ["./src/a.js", "./src/b c.js", "./src/d.js", "README.md", "-d", "./docs"]
        );
    }

    #[rstest]
    fn tokens_start_with_the_program(jsdoc: ToolCommand, modules: ModuleList) {
        let command = CommandLine::document(
            &jsdoc,
            &modules,
            Utf8Path::new("README.md"),
            Utf8Path::new("./docs"),
        );
        let tokens = command.tokens();
        assert_eq!(tokens.first().map(String::as_str), Some("build/jsdoc/jsdoc"));
        assert_eq!(tokens.len(), command.arg_tokens().len() + 1);
    }

    #[rstest]
    #[case::empty(&[])]
    #[case::blank(&["  "])]
    fn from_parts_rejects_missing_program(#[case] parts: &[&str]) {
        let owned: Vec<String> = parts.iter().map(|part| (*part).to_owned()).collect();
        let err = ToolCommand::from_parts("compiler", &owned).expect_err("empty command");
        assert!(matches!(err, BuildError::EmptyCommand("compiler")));
    }

    #[test]
    fn from_parts_splits_program_and_arguments() {
        let parts = vec![
            String::from("java"),
            String::from("-jar"),
            String::from("compiler.jar"),
        ];
        let tool = ToolCommand::from_parts("compiler", &parts).expect("valid command");
        assert_eq!(tool, ToolCommand::new("java", ["-jar", "compiler.jar"]));
    }
}
