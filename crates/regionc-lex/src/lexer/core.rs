use regionc_util::error::{CompileError, CompileResult};
use regionc_util::region;

use crate::cursor::Cursor;
use crate::token::{Character, CharacterClass, CharacterKind, CharacterValue, Token};

/// Lexer state. Initial state is `Normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LexState {
    Normal,
    Naming,
    Escape,
    ClassStart,
    Class,
    ClassRange,
    ClassRangeEscape,
    ClassEscape,
}

pub struct Lexer<'a> {
    pub(crate) cursor: Cursor<'a>,
    pub(crate) state: LexState,
    pub(crate) tokens: Vec<Token>,

    /// Seeded with 0, the implicit outermost "no region".
    pub(crate) region_name_stack: Vec<u128>,
    pub(crate) region_accumulator: String,
    pub(crate) naming_opened_at: usize,

    pub(crate) class_elements: Vec<Character>,
    pub(crate) class_negated: bool,
    pub(crate) class_opened_at: usize,

    /// Starts at 1 to account for the synthetic opening paren emitted by
    /// [`tokenize`] before the user pattern is scanned; see DESIGN.md for
    /// why the floor is 1, not 0.
    pub(crate) fence_balance: i64,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str) -> Self {
        Lexer {
            cursor: Cursor::new(source),
            state: LexState::Normal,
            tokens: Vec::new(),
            region_name_stack: vec![0],
            region_accumulator: String::new(),
            naming_opened_at: 0,
            class_elements: Vec::new(),
            class_negated: false,
            class_opened_at: 0,
            fence_balance: 1,
        }
    }

    pub(crate) fn current_region(&self) -> u128 {
        *self.region_name_stack.last().expect("sentinel region never popped")
    }

    pub(crate) fn push_token(&mut self, value: CharacterValue) {
        let source_index = self.tokens.len();
        let region_name = self.current_region();
        self.tokens.push(Token { value, source_index, region_name });
    }

    pub(crate) fn push_character(&mut self, value: Character) {
        self.push_token(CharacterValue::Character(value));
    }

    fn step(&mut self) -> CompileResult<()> {
        match self.state {
            LexState::Normal => self.step_normal(),
            LexState::Naming => self.step_naming(),
            LexState::Escape => self.step_escape(),
            LexState::ClassStart => self.step_class_start(),
            LexState::Class => self.step_class(),
            LexState::ClassRange => self.step_class_range(),
            LexState::ClassRangeEscape => self.step_class_range_escape(),
            LexState::ClassEscape => self.step_class_escape(),
        }
    }

    fn finish(self) -> CompileResult<Vec<Token>> {
        match self.state {
            LexState::Normal => {}
            LexState::Naming => {
                return Err(CompileError::UnterminatedRegionName { opened_at: self.naming_opened_at })
            }
            LexState::Escape | LexState::ClassEscape => {
                return Err(CompileError::EscapeIncomplete { pos: self.cursor.position() })
            }
            LexState::ClassStart | LexState::Class => {
                return Err(CompileError::UnterminatedClass { opened_at: self.class_opened_at })
            }
            LexState::ClassRange | LexState::ClassRangeEscape => {
                return Err(CompileError::UnterminatedRange { pos: self.cursor.position() })
            }
        }
        if self.fence_balance != 1 {
            return Err(CompileError::UnbalancedParens { detail: "too many '('" });
        }
        Ok(self.tokens)
    }
}

/// Scans `pattern` into the full, synthetically-framed token stream
/// with the `S(…)#` framing.
pub fn tokenize(pattern: &str) -> CompileResult<Vec<Token>> {
    let mut lexer = Lexer::new(pattern);

    lexer.push_character(Character::shorthand(CharacterKind::Exact, 'S'));
    lexer.tokens.last_mut().unwrap().region_name = region::encode(region::START_REGION);
    lexer.push_character(Character::non_matching('('));

    while !lexer.cursor.at_end() || lexer.state != LexState::Normal {
        if lexer.cursor.at_end() {
            // A non-Normal state at end of input is reported by `finish`.
            break;
        }
        log::trace!("lexer state {:?} at byte {}", lexer.state, lexer.cursor.position());
        lexer.step()?;
    }

    lexer.push_character(Character::non_matching(')'));
    let accept_region = region::encode(region::ACCEPT_REGION);
    lexer.push_character(Character::shorthand(CharacterKind::Exact, '#'));
    lexer.tokens.last_mut().unwrap().region_name = accept_region;

    lexer.finish()
}
