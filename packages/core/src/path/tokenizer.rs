//! Path tokenization: dotted and bracketed notation into key tokens
//!
//! One grammar, two failure policies. The permissive walk is total and
//! splits best-effort on malformed input; the strict walk reports
//! unterminated brackets, unterminated quotes, and empty selectors with
//! their offsets. Tokenization is purely syntactic and never consults a
//! target value.

use super::error::{PathError, PathResult};
use super::key::Key;

/// Permissive tokenization. Never fails; malformed brackets degrade to a
/// best-effort split and empty segments are skipped.
pub(crate) fn tokenize(input: &str) -> Vec<Key> {
    walk(input, false).unwrap_or_default()
}

/// Strict tokenization over the same grammar.
pub(crate) fn tokenize_strict(input: &str) -> PathResult<Vec<Key>> {
    walk(input, true)
}

fn walk(input: &str, strict: bool) -> PathResult<Vec<Key>> {
    let chars: Vec<char> = input.chars().collect();
    let mut keys = Vec::new();
    let mut buf = String::new();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '.' => {
                flush(&mut buf, &mut keys);
                i += 1;
            }
            '\\' if i + 1 < chars.len() => {
                // Escaped character stays literal inside a dot segment
                buf.push(chars[i + 1]);
                i += 2;
            }
            '[' => {
                flush(&mut buf, &mut keys);
                let open = i;
                i += 1;
                if i < chars.len() && (chars[i] == '\'' || chars[i] == '"') {
                    i = quoted_selector(&chars, i, open, strict, &mut keys)?;
                } else {
                    i = bare_selector(&chars, i, open, strict, &mut keys)?;
                }
            }
            c => {
                buf.push(c);
                i += 1;
            }
        }
    }

    flush(&mut buf, &mut keys);
    Ok(keys)
}

/// Parse `['name']` / `["name"]` starting at the quote; returns the index
/// past the closing bracket.
fn quoted_selector(
    chars: &[char],
    mut i: usize,
    open: usize,
    strict: bool,
    keys: &mut Vec<Key>,
) -> PathResult<usize> {
    let quote = chars[i];
    let quote_pos = i;
    i += 1;

    let mut body = String::new();
    let mut closed = false;
    while i < chars.len() {
        let c = chars[i];
        if c == '\\' && i + 1 < chars.len() {
            body.push(chars[i + 1]);
            i += 2;
            continue;
        }
        if c == quote {
            closed = true;
            i += 1;
            break;
        }
        body.push(c);
        i += 1;
    }

    if strict && !closed {
        return Err(PathError::unterminated_string(quote_pos));
    }
    if strict && body.is_empty() {
        return Err(PathError::empty_selector(quote_pos));
    }
    keys.push(Key::from_segment(&body));

    // Skip to the closing bracket; strict mode requires it to exist
    let mut bracket_closed = false;
    while i < chars.len() {
        if chars[i] == ']' {
            bracket_closed = true;
            i += 1;
            break;
        }
        i += 1;
    }
    if strict && !bracket_closed {
        return Err(PathError::unterminated_bracket(open));
    }
    Ok(i)
}

/// Parse `[segment]` starting at the first body character; returns the
/// index past the closing bracket.
fn bare_selector(
    chars: &[char],
    mut i: usize,
    open: usize,
    strict: bool,
    keys: &mut Vec<Key>,
) -> PathResult<usize> {
    let mut body = String::new();
    let mut closed = false;
    while i < chars.len() {
        if chars[i] == ']' {
            closed = true;
            i += 1;
            break;
        }
        body.push(chars[i]);
        i += 1;
    }

    if strict {
        if !closed {
            return Err(PathError::unterminated_bracket(open));
        }
        if body.is_empty() {
            return Err(PathError::empty_selector(open));
        }
    }
    if !body.is_empty() {
        keys.push(Key::from_segment(&body));
    }
    Ok(i)
}

fn flush(buf: &mut String, keys: &mut Vec<Key>) {
    if !buf.is_empty() {
        keys.push(Key::from_segment(buf));
        buf.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::super::error::PathErrorKind;
    use super::*;

    fn name(s: &str) -> Key {
        Key::Name(s.to_string())
    }

    #[test]
    fn dot_and_bracket_notation() {
        assert_eq!(
            tokenize("a.b[0].c"),
            vec![name("a"), name("b"), Key::Index(0), name("c")]
        );
        assert_eq!(
            tokenize("a[0].b.c"),
            vec![name("a"), Key::Index(0), name("b"), name("c")]
        );
    }

    #[test]
    fn quoted_brackets_become_single_keys() {
        assert_eq!(tokenize("a['b.c']"), vec![name("a"), name("b.c")]);
        assert_eq!(tokenize("a[\"x y\"]"), vec![name("a"), name("x y")]);
        assert_eq!(tokenize("['0']"), vec![Key::Index(0)]);
    }

    #[test]
    fn numeric_segments_normalize_everywhere() {
        assert_eq!(tokenize("0.a"), vec![Key::Index(0), name("a")]);
        assert_eq!(tokenize("[07]"), vec![Key::Index(7)]);
        assert_eq!(tokenize("a.-1"), vec![name("a"), name("-1")]);
    }

    #[test]
    fn empty_input_yields_empty_path() {
        assert!(tokenize("").is_empty());
        assert!(tokenize_strict("").map(|k| k.is_empty()).unwrap_or(false));
    }

    #[test]
    fn empty_segments_are_skipped() {
        assert_eq!(tokenize("a..b"), vec![name("a"), name("b")]);
        assert_eq!(tokenize(".a."), vec![name("a")]);
        assert_eq!(tokenize("a[]b"), vec![name("a"), name("b")]);
    }

    #[test]
    fn escaped_dot_stays_in_segment() {
        assert_eq!(tokenize(r"a\.b.c"), vec![name("a.b"), name("c")]);
    }

    #[test]
    fn malformed_brackets_split_best_effort() {
        assert_eq!(tokenize("a[0"), vec![name("a"), Key::Index(0)]);
        assert_eq!(tokenize("a['x"), vec![name("a"), name("x")]);
        assert_eq!(tokenize("a["), vec![name("a")]);
    }

    #[test]
    fn strict_mode_reports_malformed_brackets() {
        let err = tokenize_strict("a[0").unwrap_err();
        assert_eq!(err.kind, PathErrorKind::UnterminatedBracket);
        assert_eq!(err.position, Some(1));

        let err = tokenize_strict("a['x").unwrap_err();
        assert_eq!(err.kind, PathErrorKind::UnterminatedString);

        let err = tokenize_strict("a[]").unwrap_err();
        assert_eq!(err.kind, PathErrorKind::EmptySelector);

        let err = tokenize_strict("a['']").unwrap_err();
        assert_eq!(err.kind, PathErrorKind::EmptySelector);
    }

    #[test]
    fn strict_and_permissive_agree_on_well_formed_input() {
        for input in ["a.b[0].c", "x['k.k'][12]", "", "a.b.c"] {
            assert_eq!(
                tokenize(input),
                tokenize_strict(input).expect("well-formed input")
            );
        }
    }
}
