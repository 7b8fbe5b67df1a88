//! Byte-level helpers for inspecting the syntactic prefix of an input.
//!
//! Everything here looks at a bounded window after the leading whitespace,
//! so the cost of a classification never depends on the length of the
//! document behind it.

/// Longest tag name the rule tables need to recognize is `colgroup`;
/// a name that outgrows this window can only ever hit the fallback rule.
pub(crate) const TAG_NAME_WINDOW: usize = 16;

/// Skips over leading ASCII whitespace.
pub(crate) fn skip_whitespace(input: &str) -> &str {
    input.trim_start_matches(|c: char| c.is_ascii_whitespace())
}

pub(crate) fn starts_with_ignore_ascii_case(input: &str, prefix: &str) -> bool {
    input.len() >= prefix.len()
        && input.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

/// Returns the name of the start tag the input opens with, if any.
///
/// The name runs from `<` up to the same delimiters the HTML5 tokenizer
/// stops at (whitespace, `/`, `>`, end of input), so `<theadx>` is the tag
/// `theadx`, not `thead`. End tags, comments and doctypes return `None`.
pub(crate) fn leading_start_tag(input: &str) -> Option<&str> {
    let bytes = input.as_bytes();
    if bytes.first() != Some(&b'<') {
        return None;
    }
    let name = &bytes[1..];
    if !name.first().map_or(false, |b| b.is_ascii_alphabetic()) {
        return None;
    }

    let window = &name[..name.len().min(TAG_NAME_WINDOW)];
    match window.iter().position(|&b| is_tag_terminator(b)) {
        Some(end) => Some(&input[1..1 + end]),
        // the name runs to the end of the input
        None if name.len() <= TAG_NAME_WINDOW => Some(&input[1..]),
        None => None,
    }
}

/// Checks for a leading `<!doctype html` declaration, case-insensitively.
/// The doctype name must be exactly `html` and separated from the keyword
/// by at least one whitespace character.
pub(crate) fn has_doctype(input: &str) -> bool {
    const KEYWORD: &str = "<!doctype";
    if !starts_with_ignore_ascii_case(input, KEYWORD) {
        return false;
    }
    let rest = &input[KEYWORD.len()..];
    let name = skip_whitespace(rest);
    if name.len() == rest.len() {
        return false;
    }
    if !starts_with_ignore_ascii_case(name, "html") {
        return false;
    }
    match name.as_bytes().get(4) {
        None => true,
        Some(&b) => b == b'>' || b.is_ascii_whitespace(),
    }
}

fn is_tag_terminator(b: u8) -> bool {
    b.is_ascii_whitespace() || b == b'/' || b == b'>'
}
