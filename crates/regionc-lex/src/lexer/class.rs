use regionc_util::error::{CompileError, CompileResult};

use crate::token::{Character, CharacterClass, CharacterKind, CharacterValue};

use super::core::{LexState, Lexer};
use super::escape::shorthand_kind;

impl<'a> Lexer<'a> {
    fn close_class(&mut self) {
        let class = CharacterClass {
            elements: std::mem::take(&mut self.class_elements),
            negated: self.class_negated,
        };
        self.push_token(CharacterValue::Class(class));
        self.state = LexState::Normal;
    }

    pub(crate) fn step_class_start(&mut self) -> CompileResult<()> {
        let pos = self.cursor.position();
        let c = self.cursor.advance();
        match c {
            '^' => {
                self.class_negated = true;
                self.state = LexState::Class;
            }
            '-' => return Err(CompileError::RangeNoLeftEndpoint { pos }),
            ']' => self.close_class(),
            '\\' => self.state = LexState::ClassEscape,
            '[' => return Err(CompileError::NestedClassOpen { pos }),
            _ => {
                self.class_elements.push(Character::exact(c));
                self.state = LexState::Class;
            }
        }
        Ok(())
    }

    pub(crate) fn step_class(&mut self) -> CompileResult<()> {
        let pos = self.cursor.position();
        let c = self.cursor.advance();
        match c {
            '-' => {
                if self.class_elements.is_empty() {
                    return Err(CompileError::RangeNoLeftEndpoint { pos });
                }
                self.state = LexState::ClassRange;
            }
            '\\' => self.state = LexState::ClassEscape,
            '[' => return Err(CompileError::NestedClassOpen { pos }),
            ']' => self.close_class(),
            '.' => self
                .class_elements
                .push(Character::shorthand(CharacterKind::NotVerticalWhitespace, c)),
            _ => self.class_elements.push(Character::exact(c)),
        }
        Ok(())
    }

    pub(crate) fn step_class_range(&mut self) -> CompileResult<()> {
        let pos = self.cursor.position();
        {
            let top = self
                .class_elements
                .last()
                .expect("ClassRange only entered with a non-empty class");
            if top.kind != CharacterKind::Exact {
                return Err(CompileError::RangeShorthandEndpoint { pos });
            }
        }
        let c = self.cursor.advance();
        if c == '.' {
            return Err(CompileError::RangeDotEndpoint { pos });
        }
        if c == '\\' {
            self.state = LexState::ClassRangeEscape;
            return Ok(());
        }
        self.promote_top_to_range(c);
        self.state = LexState::Class;
        Ok(())
    }

    pub(crate) fn step_class_range_escape(&mut self) -> CompileResult<()> {
        let pos = self.cursor.position();
        let c = self.cursor.advance();
        if shorthand_kind(c).is_some() {
            return Err(CompileError::RangeShorthandEndpoint { pos });
        }
        let upper = super::escape::control_literal(c).unwrap_or(c);
        self.promote_top_to_range(upper);
        self.state = LexState::Class;
        Ok(())
    }

    fn promote_top_to_range(&mut self, max_rune: char) {
        let min_rune = self.class_elements.last().unwrap().min_rune;
        *self.class_elements.last_mut().unwrap() = Character::range(min_rune, max_rune);
    }
}
