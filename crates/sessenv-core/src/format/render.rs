//! Rendering of the filtered environment in the three output grammars.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::errors::SessenvError;
use crate::format::quote::{ShellGrammar, quote};

/// Output grammar, validated at the CLI boundary.
///
/// The closed enum leaves no unknown-format state for the renderer to
/// handle; conflicting format flags are rejected by clap before the core
/// runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Posix,
    Fish,
    Json,
}

#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("Failed to serialize output: {message}")]
    SerializationFailed { message: String },
}

impl SessenvError for FormatError {
    fn error_code(&self) -> &'static str {
        match self {
            FormatError::SerializationFailed { .. } => "SERIALIZATION_FAILED",
        }
    }
}

/// Render `entries` in `format`.
///
/// Shell output is one newline-terminated line per entry in input order with
/// no trailing blank line. JSON output is a 4-space-indented object with a
/// trailing newline, `{}` when no entries matched; keys are sorted, which
/// keeps the document deterministic for identical inputs.
pub fn render(entries: &[(String, String)], format: Format) -> Result<String, FormatError> {
    match format {
        Format::Posix => Ok(render_shell(entries, ShellGrammar::Posix)),
        Format::Fish => Ok(render_shell(entries, ShellGrammar::Fish)),
        Format::Json => render_json(entries),
    }
}

fn render_shell(entries: &[(String, String)], grammar: ShellGrammar) -> String {
    let mut out = String::new();
    for (name, value) in entries {
        // Names are quoted too; they are expected to be shell-safe in
        // practice but not assumed so.
        let line = match grammar {
            ShellGrammar::Posix => {
                format!("export {}={}\n", quote(name, grammar), quote(value, grammar))
            }
            ShellGrammar::Fish => {
                format!("set -x {} {}\n", quote(name, grammar), quote(value, grammar))
            }
        };
        out.push_str(&line);
    }
    out
}

fn render_json(entries: &[(String, String)]) -> Result<String, FormatError> {
    let mut object = serde_json::Map::new();
    for (name, value) in entries {
        object.insert(name.clone(), serde_json::Value::String(value.clone()));
    }

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    serde_json::Value::Object(object)
        .serialize(&mut serializer)
        .map_err(|e| FormatError::SerializationFailed {
            message: e.to_string(),
        })?;

    let mut out = String::from_utf8(buf).map_err(|e| FormatError::SerializationFailed {
        message: e.to_string(),
    })?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<(String, String)> {
        vec![
            ("DISPLAY".to_string(), ":0".to_string()),
            ("FOO".to_string(), "bar baz".to_string()),
        ]
    }

    #[test]
    fn test_render_posix() {
        let out = render(&entries(), Format::Posix).unwrap();
        assert_eq!(out, "export DISPLAY=:0\nexport FOO='bar baz'\n");
    }

    #[test]
    fn test_render_fish() {
        let out = render(&entries(), Format::Fish).unwrap();
        assert_eq!(out, "set -x DISPLAY :0\nset -x FOO 'bar baz'\n");
    }

    #[test]
    fn test_render_json_four_space_indent() {
        let out = render(&entries(), Format::Json).unwrap();
        assert_eq!(
            out,
            "{\n    \"DISPLAY\": \":0\",\n    \"FOO\": \"bar baz\"\n}\n"
        );
    }

    #[test]
    fn test_render_json_empty_object() {
        let out = render(&[], Format::Json).unwrap();
        assert_eq!(out, "{}\n");
    }

    #[test]
    fn test_render_shell_empty_is_empty() {
        assert_eq!(render(&[], Format::Posix).unwrap(), "");
        assert_eq!(render(&[], Format::Fish).unwrap(), "");
    }

    #[test]
    fn test_render_json_keys_are_sorted() {
        let reversed = vec![
            ("ZED".to_string(), "1".to_string()),
            ("ALPHA".to_string(), "2".to_string()),
        ];
        let out = render(&reversed, Format::Json).unwrap();
        let zed = out.find("ZED").unwrap();
        let alpha = out.find("ALPHA").unwrap();
        assert!(alpha < zed);
    }

    #[test]
    fn test_render_posix_quotes_embedded_quote() {
        let tricky = vec![("MSG".to_string(), "it's".to_string())];
        let out = render(&tricky, Format::Posix).unwrap();
        assert_eq!(out, "export MSG='it'\"'\"'s'\n");
    }

    #[test]
    fn test_render_json_does_not_shell_quote() {
        let tricky = vec![("FOO".to_string(), "bar baz".to_string())];
        let out = render(&tricky, Format::Json).unwrap();
        assert!(out.contains("\"bar baz\""));
        assert!(!out.contains('\''));
    }
}
