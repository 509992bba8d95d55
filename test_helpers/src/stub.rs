//! Shell stand-ins for the external tools driven by `nerdy-build`.
//!
//! Each helper returns a tool command, executable first, suitable for the
//! `compiler` or `documenter` configuration keys. The stubs rely on a POSIX
//! `sh`, so callers gate their tests on `cfg(unix)`.

/// Argument `sh -c` binds to `$0`, keeping the appended tokens in `$1...`.
const STUB_NAME: &str = "nerdy-stub";

/// A tool that writes each argument it receives on its own line of
/// `argv_file`, relative to the working directory, and exits 0.
#[must_use]
pub fn recording_tool(argv_file: &str) -> Vec<String> {
    vec![
        "sh".to_owned(),
        "-c".to_owned(),
        format!("printf '%s\\n' \"$@\" > '{argv_file}'"),
        STUB_NAME.to_owned(),
    ]
}

/// A tool that ignores its arguments and exits with `code`.
#[must_use]
pub fn exiting_tool(code: i32) -> Vec<String> {
    vec![
        "sh".to_owned(),
        "-c".to_owned(),
        format!("exit {code}"),
        STUB_NAME.to_owned(),
    ]
}

/// Renders `parts` as a TOML array of basic strings.
#[must_use]
pub fn toml_array<S: AsRef<str>>(parts: &[S]) -> String {
    let items: Vec<String> = parts
        .iter()
        .map(|part| format!("\"{}\"", escape_basic(part.as_ref())))
        .collect();
    format!("[{}]", items.join(", "))
}

fn escape_basic(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::{exiting_tool, recording_tool, toml_array};

    #[test]
    fn toml_array_escapes_quotes_and_backslashes() {
        assert_eq!(
            toml_array(&["sh", "say \"hi\"", "C:\\tools"]),
            r#"["sh", "say \"hi\"", "C:\\tools"]"#
        );
    }

    #[test]
    fn recording_tool_targets_the_given_file() {
        let tool = recording_tool("argv.txt");
        assert_eq!(tool.first().map(String::as_str), Some("sh"));
        assert!(tool.iter().any(|part| part.ends_with("> 'argv.txt'")));
    }

    #[test]
    fn exiting_tool_embeds_the_code() {
        assert!(exiting_tool(2).contains(&"exit 2".to_owned()));
    }
}
