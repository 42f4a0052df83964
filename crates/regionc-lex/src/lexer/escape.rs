use regionc_util::error::CompileResult;

use crate::token::{Character, CharacterKind};

use super::core::{LexState, Lexer};

/// `\c` shorthand-class table shared by `Escape` and `ClassEscape`.
pub(crate) fn shorthand_kind(c: char) -> Option<CharacterKind> {
    use CharacterKind::*;
    Some(match c {
        'd' => Num,
        'D' => NotNum,
        'l' => Lower,
        'L' => NotLower,
        'u' => Upper,
        'U' => NotUpper,
        'w' => Word,
        'W' => NotWord,
        's' => Whitespace,
        'S' => NotWhitespace,
        'v' => VerticalWhitespace,
        'V' => NotVerticalWhitespace,
        'h' => HorizontalWhitespace,
        'H' => NotHorizontalWhitespace,
        _ => return None,
    })
}

/// Control-character literal escapes: `\a \b \t \r \f \n \e`.
pub(crate) fn control_literal(c: char) -> Option<char> {
    Some(match c {
        'a' => '\u{07}',
        'b' => '\u{08}',
        't' => '\u{09}',
        'r' => '\u{0D}',
        'f' => '\u{0C}',
        'n' => '\u{0A}',
        'e' => '\u{1B}',
        _ => return None,
    })
}

/// Resolves the rune following a backslash to the `Character` it denotes,
/// shared by the outside-class and inside-class escape states.
fn resolve_escape(c: char) -> Character {
    if let Some(kind) = shorthand_kind(c) {
        Character::shorthand(kind, c)
    } else if let Some(literal) = control_literal(c) {
        Character::exact(literal)
    } else {
        Character::exact(c)
    }
}

impl<'a> Lexer<'a> {
    pub(crate) fn step_escape(&mut self) -> CompileResult<()> {
        let c = self.cursor.advance();
        let value = resolve_escape(c);
        self.push_character(value);
        self.state = LexState::Normal;
        Ok(())
    }

    pub(crate) fn step_class_escape(&mut self) -> CompileResult<()> {
        let c = self.cursor.advance();
        let value = resolve_escape(c);
        self.class_elements.push(value);
        self.state = LexState::Class;
        Ok(())
    }
}
