//! Escaping for the reserved characters of the query syntax.

/// Characters that carry structural meaning in the rendered syntax.
///
/// Every occurrence inside a term value is prefixed with a backslash before
/// the value is embedded in the expression.
pub const RESERVED: &[char] = &[
    '\\', '+', '-', '!', '(', ')', ':', '^', ']', '{', '}', '~', '*', '?',
];

/// Escape every reserved character in `raw` with a leading backslash.
///
/// Runs once per raw value at the point it is embedded. Already-rendered
/// sub-expressions are never passed back through it, so included builders
/// keep their escaping intact.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if RESERVED.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape("value1"), "value1");
        assert_eq!(escape("two words"), "two words");
    }

    #[test]
    fn test_reserved_chars_escaped() {
        assert_eq!(escape("value+"), "value\\+");
        assert_eq!(escape("value {"), "value \\{");
        assert_eq!(escape("value (){}-!+?"), "value \\(\\)\\{\\}\\-\\!\\+\\?");
    }

    #[test]
    fn test_backslash_itself_escaped() {
        assert_eq!(escape("a\\b"), "a\\\\b");
    }

    #[test]
    fn test_quote_and_open_bracket_untouched() {
        assert_eq!(escape("\"quoted\""), "\"quoted\"");
        assert_eq!(escape("[range"), "[range");
    }
}
