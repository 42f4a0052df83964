//! Pure matcher: `step` advances one rune against a compiled
//! table with no allocation and no internal state. Everything the caller
//! needs to drive a match — current state, next state, the region a
//! transition belongs to, whether it matched at all — is passed or
//! returned by value.

pub mod predicates;

use regionc_lex::{Character, CharacterKind, CharacterValue};
use regionc_table::{Table, Transition};

/// Result of one [`step`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    pub next_state: usize,
    pub region_name: u128,
    pub matched: bool,
}

/// Initial state for a freshly compiled table.
pub const START_STATE: usize = 0;

fn matches_character(c: &Character, rune: char) -> bool {
    use predicates::*;
    match c.kind {
        CharacterKind::NonMatching => false,
        CharacterKind::Exact => rune == c.min_rune,
        CharacterKind::Range => rune >= c.min_rune && rune <= c.max_rune,
        CharacterKind::Num => is_number(rune),
        CharacterKind::NotNum => !is_number(rune),
        CharacterKind::Lower => is_lower(rune),
        CharacterKind::NotLower => !is_lower(rune),
        CharacterKind::Upper => is_upper(rune),
        CharacterKind::NotUpper => !is_upper(rune),
        CharacterKind::Word => is_word(rune),
        CharacterKind::NotWord => !is_word(rune),
        CharacterKind::Whitespace => is_whitespace(rune),
        CharacterKind::NotWhitespace => !is_whitespace(rune),
        CharacterKind::VerticalWhitespace => is_vertical_ws(rune),
        CharacterKind::NotVerticalWhitespace => !is_vertical_ws(rune),
        CharacterKind::HorizontalWhitespace => is_horizontal_ws(rune),
        CharacterKind::NotHorizontalWhitespace => is_not_horizontal_ws(rune),
    }
}

fn matches_value(value: &CharacterValue, rune: char) -> bool {
    match value {
        CharacterValue::Character(c) => matches_character(c, rune),
        CharacterValue::Class(class) => {
            let any = class.elements.iter().any(|e| matches_character(e, rune));
            class.negated ^ any
        }
    }
}

fn matches_transition(transition: &Transition, rune: char) -> bool {
    matches_value(&transition.value, rune)
}

/// Advances `state` by one `rune`. Transitions are tested in order; the
/// first match wins. If none match, `next_state` holds `state` constant,
/// `region_name` is `0`, and `matched` is `false` — the core never
/// panics and never silently advances.
pub fn step(table: &Table, state: usize, rune: char) -> StepResult {
    let entry = &table.entries[state];
    for transition in &entry.transitions {
        if matches_transition(transition, rune) {
            log::trace!("state {} --{:?}--> state {}", state, rune, transition.jump);
            return StepResult {
                next_state: transition.jump,
                region_name: transition.region_name,
                matched: true,
            };
        }
    }
    log::trace!("state {} has no transition for {:?}", state, rune);
    StepResult { next_state: state, region_name: 0, matched: false }
}

/// Runs every rune of `input` through `step` starting from [`START_STATE`],
/// stopping at the first unmatched rune, then feeds the trailing `#`
/// sentinel every compiled table expects at end of input (the lexer tags
/// only that synthetic token with the accept region — see
/// `regionc_lex::lexer::tokenize`). Returns whether the whole input was
/// consumed and the sentinel step landed in the accept region.
pub fn run(table: &Table, input: &str) -> bool {
    let accept = regionc_util::region::encode(regionc_util::region::ACCEPT_REGION);
    let mut state = START_STATE;
    let mut region_name = 0u128;
    for rune in input.chars().chain(std::iter::once('#')) {
        let result = step(table, state, rune);
        if !result.matched {
            return false;
        }
        state = result.next_state;
        region_name = result.region_name;
    }
    region_name == accept
}
