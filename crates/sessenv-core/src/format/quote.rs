//! Shell quoting for the POSIX and fish output grammars.

/// The two shell grammars differ only in how an embedded single quote is
/// escaped inside a single-quoted string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellGrammar {
    Posix,
    Fish,
}

/// Whether `s` needs no quoting in either grammar.
///
/// Conservative allow-list: non-empty, ASCII alphanumerics plus
/// `% + , - . / : = @ _`. Anything else (spaces, shell metacharacters,
/// non-ASCII) forces quoting even where a character would be harmless in
/// context.
pub fn is_shell_safe(s: &str) -> bool {
    !s.is_empty()
        && s.chars().all(|c| {
            c.is_ascii_alphanumeric()
                || matches!(c, '%' | '+' | ',' | '-' | '.' | '/' | ':' | '=' | '@' | '_')
        })
}

/// Quote `s` for `grammar` unless it is shell-safe.
///
/// Single-quoted strings are literal in both grammars except for the quote
/// character itself: POSIX closes the string, emits a double-quoted `'`, and
/// reopens; fish accepts a backslash escape inside single quotes.
pub fn quote(s: &str, grammar: ShellGrammar) -> String {
    if is_shell_safe(s) {
        return s.to_string();
    }

    match grammar {
        ShellGrammar::Posix => format!("'{}'", s.replace('\'', r#"'"'"'"#)),
        ShellGrammar::Fish => format!("'{}'", s.replace('\'', r"\'")),
    }
}
