//! Printing response bodies.
//!
//! Bodies go to stdout untouched; logs go to stderr so the two never mix.

use std::io::{self, Write};

/// Render a response body, re-indenting it when `pretty` is set and the body
/// is JSON. Anything that does not parse is returned as-is.
#[must_use]
pub fn render_body(body: &str, pretty: bool) -> String {
    if !pretty {
        return body.to_owned();
    }

    serde_json::from_str::<serde_json::Value>(body)
        .and_then(|value| serde_json::to_string_pretty(&value))
        .unwrap_or_else(|_| body.to_owned())
}

/// Write a response body to stdout.
///
/// # Errors
///
/// Returns error if stdout cannot be written.
pub fn print_body(body: &str, pretty: bool) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", render_body(body, pretty))?;
    stdout.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_body_untouched() {
        let body = r#"{"b":1,  "a":2}"#;
        assert_eq!(render_body(body, false), body);
    }

    #[test]
    fn test_pretty_keeps_key_order() {
        let rendered = render_body(r#"{"b":1,"a":[true]}"#, true);
        assert_eq!(rendered, "{\n  \"b\": 1,\n  \"a\": [\n    true\n  ]\n}");
    }

    #[test]
    fn test_pretty_falls_back_for_text() {
        assert_eq!(render_body("OK", true), "OK");
    }
}
