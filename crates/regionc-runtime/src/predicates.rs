//! Rune-predicate semantics. These are normative: `is_not_horizontal_ws`
//! is implemented exactly as defined even though it is always false — see
//! the module doc on [`matches_kind`] and DESIGN.md for why.

pub fn is_number(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_vertical_ws(c: char) -> bool {
    matches!(c, '\u{000A}'..='\u{000D}' | '\u{2028}' | '\u{2029}')
}

pub fn is_lower(c: char) -> bool {
    c.is_lowercase()
}

pub fn is_upper(c: char) -> bool {
    c.is_uppercase()
}

pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}

pub fn is_alpha(c: char) -> bool {
    c.is_alphabetic()
}

pub fn is_word(c: char) -> bool {
    is_number(c) || is_alpha(c) || c == '_'
}

pub fn is_horizontal_ws(c: char) -> bool {
    is_whitespace(c) && !is_vertical_ws(c)
}

/// Defined in the predicate table as `is_vertical_ws ∧ ¬is_whitespace`.
/// Every vertical-whitespace rune is also whitespace, so this predicate
/// can never be satisfied by any input. Implemented literally rather than
/// renamed to match its apparent intent; see DESIGN.md.
pub fn is_not_horizontal_ws(c: char) -> bool {
    is_vertical_ws(c) && !is_whitespace(c)
}
