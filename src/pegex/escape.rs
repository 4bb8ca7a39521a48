//! Escaping of raw text for inclusion in a regex source string
//!
//! Escaping happens in two layers. The first layer rewrites control and
//! non-ASCII characters into backslash escapes (`\n`, `\x1B`, `\u20AC`),
//! using UTF-16 code units so that astral characters come out as surrogate
//! pairs the JavaScript RegExp engine understands. The second layer
//! backslash-prefixes the characters that are regex operators. Class parts
//! go through the same layers, with ranges joined by a bare `-`.

use super::ast::ClassPart;

/// Rewrite control and non-ASCII characters as backslash escapes.
///
/// Printable ASCII passes through untouched. Hex digits are uppercase and
/// unpadded beyond the form's fixed width (`\x0A`, `\x7F`, `\u0100`,
/// `\u20AC`). Characters outside the basic multilingual plane expand to
/// their two surrogate code units.
pub fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\0' => out.push_str("\\0"),
            '\u{8}' => out.push_str("\\b"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\u{c}' => out.push_str("\\f"),
            '\r' => out.push_str("\\r"),
            _ => escape_code_point(&mut out, ch),
        }
    }
    out
}

fn escape_code_point(out: &mut String, ch: char) {
    let code = ch as u32;
    match code {
        0x00..=0x0F => out.push_str(&format!("\\x0{:X}", code)),
        0x10..=0x1F | 0x7F..=0xFF => out.push_str(&format!("\\x{:X}", code)),
        0x100..=0xFFF => out.push_str(&format!("\\u0{:X}", code)),
        0x1000..=0xFFFF => out.push_str(&format!("\\u{:X}", code)),
        _ if code > 0xFFFF => {
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                out.push_str(&format!("\\u{:X}", unit));
            }
        }
        _ => out.push(ch),
    }
}

/// Escape a string so the result matches it literally as regex source.
///
/// Applies [`escape_string`] first, then backslash-prefixes the regex
/// operator characters. The first layer never emits an operator character,
/// so the layers do not interfere.
pub fn escape_regex(s: &str) -> String {
    let escaped = escape_string(s);
    let mut out = String::with_capacity(escaped.len());
    for ch in escaped.chars() {
        match ch {
            '-' | '[' | ']' | '/' | '{' | '}' | '(' | ')' | '*' | '+' | '?' | '.' | '^' | '$'
            | '|' => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out
}

/// Render one character-class entry, escaping each endpoint.
pub fn escape_class_part(part: &ClassPart) -> String {
    match part {
        ClassPart::Single(ch) => escape_regex(ch),
        ClassPart::Range(low, high) => format!("{}-{}", escape_regex(low), escape_regex(high)),
    }
}
