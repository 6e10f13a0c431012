//! Comment stripping for hand-edited JSON
//!
//! Font definitions are edited by hand and commonly carry `//`, `#` and
//! `/* */` comments. They are removed before the text reaches `serde_json`.
//! Comment bodies are replaced by spaces and their newlines are kept, so
//! line/column positions in later parse errors still point at the
//! original text.

use std::iter::Peekable;
use std::str::Chars;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("block comment opened on line {line} is never closed")]
pub struct UnterminatedComment {
    pub line: usize,
}

/// Strip `//`, `#` and `/* */` comments from `input`, leaving string
/// literals untouched.
///
/// A leading byte-order mark is dropped as well.
pub fn strip_comments(input: &str) -> Result<String, UnterminatedComment> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut line = 1;

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                output.push(c);
                // Copy the literal verbatim, honouring escapes
                while let Some(s) = chars.next() {
                    output.push(s);
                    match s {
                        '\\' => {
                            if let Some(escaped) = chars.next() {
                                output.push(escaped);
                            }
                        }
                        '"' => break,
                        '\n' => line += 1,
                        _ => {}
                    }
                }
            }
            '/' if chars.peek() == Some(&'/') => {
                chars.next();
                output.push_str("  ");
                if skip_line(&mut chars, &mut output) {
                    line += 1;
                }
            }
            '#' => {
                output.push(' ');
                if skip_line(&mut chars, &mut output) {
                    line += 1;
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                output.push_str("  ");
                let opened_on = line;
                let mut closed = false;
                while let Some(s) = chars.next() {
                    if s == '*' && chars.peek() == Some(&'/') {
                        chars.next();
                        output.push_str("  ");
                        closed = true;
                        break;
                    }
                    if s == '\n' {
                        output.push('\n');
                        line += 1;
                    } else {
                        output.push(' ');
                    }
                }
                if !closed {
                    return Err(UnterminatedComment { line: opened_on });
                }
            }
            '\n' => {
                output.push(c);
                line += 1;
            }
            _ => output.push(c),
        }
    }

    Ok(output)
}

/// Blank out the rest of a line comment. Returns true if a newline ended it.
fn skip_line(chars: &mut Peekable<Chars<'_>>, output: &mut String) -> bool {
    for s in chars.by_ref() {
        if s == '\n' {
            output.push('\n');
            return true;
        }
        output.push(' ');
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_line_comments() {
        let stripped = strip_comments("{\n  // Numerical\n  \"a\": 1\n}").unwrap();
        let value: serde_json::Value = serde_json::from_str(&stripped).unwrap();
        assert_eq!(value["a"], 1);
        assert_eq!(stripped.lines().count(), 4);
    }

    #[test]
    fn removes_block_comments_across_lines() {
        let stripped = strip_comments("{ /* one\ntwo */ \"a\": 1 }").unwrap();
        assert!(!stripped.contains("two"));
        assert_eq!(stripped.matches('\n').count(), 1);
        let value: serde_json::Value = serde_json::from_str(&stripped).unwrap();
        assert_eq!(value["a"], 1);
    }

    #[test]
    fn removes_hash_comments() {
        let stripped = strip_comments("{\"a\": 1, # note\n\"b\": 2}").unwrap();
        let value: serde_json::Value = serde_json::from_str(&stripped).unwrap();
        assert_eq!(value["a"], 1);
        assert_eq!(value["b"], 2);
        assert_eq!(stripped.matches('\n').count(), 1);
    }

    #[test]
    fn keeps_comment_markers_inside_strings() {
        let text = r##"{"url": "http://example.com", "glob": "/*.json", "q": "say \"//hi\"", "#": "#1"}"##;
        assert_eq!(strip_comments(text).unwrap(), text);
    }

    #[test]
    fn glyph_keys_that_look_like_slashes_survive() {
        let text = r#"{"/": 1, "*": 2, "\\": 3}"#;
        let value: serde_json::Value =
            serde_json::from_str(&strip_comments(text).unwrap()).unwrap();
        assert_eq!(value["/"], 1);
        assert_eq!(value["*"], 2);
        assert_eq!(value["\\"], 3);
    }

    #[test]
    fn unterminated_block_comment_reports_opening_line() {
        assert_eq!(
            strip_comments("{\n\n /* open"),
            Err(UnterminatedComment { line: 3 })
        );
    }

    #[test]
    fn drops_byte_order_mark() {
        assert_eq!(strip_comments("\u{feff}{}").unwrap(), "{}");
    }
}
