//! Winnow parser for the `.strings` table format.
//!
//! Grammar: zero or more `"key" = "value";` entries, separated by
//! whitespace, `//` line comments, and `/* ... */` block comments. Quoted
//! strings support the `\" \\ \n \t \r` escapes plus the legacy `\Uxxxx`
//! four-digit form.

use winnow::combinator::{alt, delimited, preceded, repeat, separated_pair, terminated};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{take_until, take_while};

use super::error::ParseError;

/// Parse `.strings` content into (key, value) entries in source order.
///
/// Duplicate keys are not collapsed here; table construction applies
/// last-write-wins.
pub fn parse_strings(input: &str) -> Result<Vec<(String, String)>, ParseError> {
    let mut remaining = input;
    match entries(&mut remaining) {
        Ok(parsed) => {
            let _ = skip_ws_and_comments(&mut remaining);
            if remaining.is_empty() {
                Ok(parsed)
            } else {
                let (line, column) = calculate_position(input, remaining);
                Err(ParseError::Syntax {
                    line,
                    column,
                    message: format!(
                        "unexpected character: '{}'",
                        remaining.chars().next().unwrap_or('?')
                    ),
                })
            }
        }
        Err(e) => {
            let (line, column) = calculate_position(input, remaining);
            if remaining.is_empty() {
                Err(ParseError::UnexpectedEof { line, column })
            } else {
                Err(ParseError::Syntax {
                    line,
                    column,
                    message: format!("parse error: {}", e),
                })
            }
        }
    }
}

/// Calculate line and column from original input and remaining input.
fn calculate_position(original: &str, remaining: &str) -> (usize, usize) {
    let consumed = original.len() - remaining.len();
    let consumed_str = &original[..consumed];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let last_newline = consumed_str.rfind('\n');
    let column = match last_newline {
        Some(pos) => consumed - pos,
        None => consumed + 1,
    };
    (line, column)
}

/// Parse the whole input into entries.
fn entries(input: &mut &str) -> ModalResult<Vec<(String, String)>> {
    skip_ws_and_comments(input)?;
    let parsed: Vec<(String, String)> =
        repeat(0.., terminated(entry, skip_ws_and_comments)).parse_next(input)?;
    Ok(parsed)
}

/// Skip whitespace, line comments, and block comments.
fn skip_ws_and_comments(input: &mut &str) -> ModalResult<()> {
    let _: Vec<()> = repeat(
        0..,
        alt((ws_only.void(), line_comment.void(), block_comment.void())),
    )
    .parse_next(input)?;
    Ok(())
}

/// Parse whitespace (no comments).
fn ws_only<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_whitespace()).parse_next(input)
}

/// Parse a line comment: // ... newline
fn line_comment<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    preceded("//", take_while(0.., |c| c != '\n')).parse_next(input)
}

/// Parse a block comment: /* ... */
fn block_comment<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    delimited("/*", take_until(0.., "*/"), "*/").parse_next(input)
}

/// Parse one entry: "key" = "value";
fn entry(input: &mut &str) -> ModalResult<(String, String)> {
    let (key, value) = separated_pair(
        quoted_string,
        (skip_ws_and_comments, '=', skip_ws_and_comments),
        quoted_string,
    )
    .parse_next(input)?;
    skip_ws_and_comments(input)?;
    ';'.parse_next(input)?;
    Ok((key, value))
}

/// Parse a quoted string with escape sequences.
fn quoted_string(input: &mut &str) -> ModalResult<String> {
    delimited('"', string_content, '"').parse_next(input)
}

/// Parse the content of a quoted string.
fn string_content(input: &mut &str) -> ModalResult<String> {
    let chunks: Vec<String> =
        repeat(0.., alt((plain_chunk, escape_sequence))).parse_next(input)?;
    Ok(chunks.concat())
}

/// A run of characters with no quote or backslash.
fn plain_chunk(input: &mut &str) -> ModalResult<String> {
    take_while(1.., |c: char| c != '"' && c != '\\')
        .map(|s: &str| s.to_string())
        .parse_next(input)
}

/// Parse an escape sequence after a backslash.
fn escape_sequence(input: &mut &str) -> ModalResult<String> {
    preceded(
        '\\',
        alt((
            '"'.value("\"".to_string()),
            '\\'.value("\\".to_string()),
            'n'.value("\n".to_string()),
            't'.value("\t".to_string()),
            'r'.value("\r".to_string()),
            unicode_escape,
        )),
    )
    .parse_next(input)
}

/// Parse the legacy \Uxxxx escape (exactly four hex digits).
fn unicode_escape(input: &mut &str) -> ModalResult<String> {
    let digits = preceded('U', take_while(4..=4, |c: char| c.is_ascii_hexdigit()))
        .parse_next(input)?;
    let code = u32::from_str_radix(digits, 16)
        .map_err(|_| ErrMode::Cut(ContextError::new()))?;
    match char::from_u32(code) {
        Some(c) => Ok(c.to_string()),
        None => Err(ErrMode::Cut(ContextError::new())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_parses_to_no_entries() {
        assert_eq!(parse_strings("").expect("should parse"), vec![]);
    }

    #[test]
    fn single_entry() {
        let parsed = parse_strings(r#""Hello" = "Bonjour";"#).expect("should parse");
        assert_eq!(parsed, vec![("Hello".to_string(), "Bonjour".to_string())]);
    }

    #[test]
    fn entries_keep_source_order() {
        let parsed = parse_strings(
            r#"
            "b" = "2";
            "a" = "1";
            "#,
        )
        .expect("should parse");
        assert_eq!(parsed[0].0, "b");
        assert_eq!(parsed[1].0, "a");
    }

    #[test]
    fn comments_are_skipped() {
        let parsed = parse_strings(
            r#"
            /* Greeting shown on the title screen. */
            "Hello" = "Bonjour";
            // inline note
            "Bye" = "Au revoir"; /* trailing */
            "#,
        )
        .expect("should parse");
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn escapes_are_decoded() {
        let parsed = parse_strings(r#""quote" = "say \"hi\"\n\t\\ \U25B8";"#)
            .expect("should parse");
        assert_eq!(parsed[0].1, "say \"hi\"\n\t\\ \u{25B8}");
    }

    #[test]
    fn missing_semicolon_is_a_syntax_error() {
        // The entry parser backtracks, leaving the whole entry as trailing
        // input.
        let err = parse_strings(r#""Hello" = "Bonjour""#).unwrap_err();
        assert!(matches!(err, ParseError::Syntax { line: 1, column: 1, .. }));
    }

    #[test]
    fn unterminated_string_reports_position() {
        let err = parse_strings("\"Hello\" = \"Bonjour\n").unwrap_err();
        let (line, _) = err.position();
        assert_eq!(line, 1);
    }

    #[test]
    fn stray_token_reports_line_and_column() {
        let err = parse_strings("\n\n?\n").unwrap_err();
        match err {
            ParseError::Syntax { line, column, .. } => {
                assert_eq!(line, 3);
                assert_eq!(column, 1);
            }
            ParseError::UnexpectedEof { .. } => panic!("expected syntax error"),
        }
    }
}
