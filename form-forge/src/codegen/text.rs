//! Escaping and layout helpers shared by the emitters and the field kinds.

/// Escape a string for use inside a double-quoted JavaScript/TypeScript literal.
pub fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Escape text placed between JSX tags.
pub fn escape_jsx_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('{', "&#123;")
        .replace('}', "&#125;")
}

/// Escape text placed inside a double-quoted JSX attribute.
pub fn escape_jsx_attr(s: &str) -> String {
    s.replace('&', "&amp;").replace('"', "&quot;")
}

/// Prefix every non-empty line of `text` with `prefix`.
///
/// Empty lines stay empty so the output carries no trailing whitespace.
pub fn indent_lines(text: &str, prefix: &str) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", prefix, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_string() {
        assert_eq!(escape_string(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape_string(r"^\d+$"), r"^\\d+$");
        assert_eq!(escape_string("a\nb"), "a\\nb");
    }

    #[test]
    fn test_escape_jsx_text() {
        assert_eq!(escape_jsx_text("a < b & {c}"), "a &lt; b &amp; &#123;c&#125;");
    }

    #[test]
    fn test_escape_jsx_attr() {
        assert_eq!(escape_jsx_attr(r#"say "hi" & bye"#), "say &quot;hi&quot; &amp; bye");
    }

    #[test]
    fn test_indent_lines_skips_empty_lines() {
        assert_eq!(indent_lines("a\n\nb", "  "), "  a\n\n  b");
        assert_eq!(indent_lines("", "  "), "");
    }
}
