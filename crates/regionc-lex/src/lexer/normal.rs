use regionc_util::error::{CompileError, CompileResult};

use crate::token::{Character, CharacterKind};

use super::core::{LexState, Lexer};

impl<'a> Lexer<'a> {
    pub(crate) fn step_normal(&mut self) -> CompileResult<()> {
        let pos = self.cursor.position();
        let c = self.cursor.advance();
        match c {
            '{' => {
                self.region_accumulator.clear();
                self.naming_opened_at = pos;
                self.state = LexState::Naming;
                log::trace!("entering region name at byte {pos}");
            }
            '}' => {
                if self.region_name_stack.len() == 1 {
                    return Err(CompileError::UnmatchedRegionClose { pos });
                }
                self.region_name_stack.pop();
            }
            '\\' => self.state = LexState::Escape,
            '[' => {
                self.class_elements.clear();
                self.class_negated = false;
                self.class_opened_at = pos;
                self.state = LexState::ClassStart;
            }
            ']' => return Err(CompileError::UnmatchedClassClose { pos }),
            '(' => {
                self.fence_balance += 1;
                self.push_character(Character::non_matching('('));
            }
            ')' => {
                self.fence_balance -= 1;
                if self.fence_balance < 1 {
                    return Err(CompileError::UnbalancedParens { detail: "too many ')'" });
                }
                self.push_character(Character::non_matching(')'));
            }
            '|' | '*' | '?' | '+' => self.push_character(Character::non_matching(c)),
            '.' => self.push_character(Character::shorthand(CharacterKind::NotVerticalWhitespace, c)),
            _ => self.push_character(Character::exact(c)),
        }
        Ok(())
    }
}
