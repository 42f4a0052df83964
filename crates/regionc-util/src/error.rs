use thiserror::Error;

/// Every structural error the compiler can raise, one variant per distinct
/// message the pattern grammar can provoke.
///
/// `compile_regex` returns these in `Err` rather than panicking or
/// returning a null table; every variant is detected as early in the
/// pipeline as the offending character is seen.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("'}}' without matching '{{' at byte {pos}")]
    UnmatchedRegionClose { pos: usize },

    #[error("pattern ended inside a region name opened at byte {opened_at}")]
    UnterminatedRegionName { opened_at: usize },

    #[error("']' without matching '[' at byte {pos}")]
    UnmatchedClassClose { pos: usize },

    #[error("nested '[' inside a character class at byte {pos}")]
    NestedClassOpen { pos: usize },

    #[error("pattern ended inside a character class opened at byte {opened_at}")]
    UnterminatedClass { opened_at: usize },

    #[error("'-' with no left endpoint in a character class at byte {pos}")]
    RangeNoLeftEndpoint { pos: usize },

    #[error("pattern ended before a range's right endpoint at byte {pos}")]
    UnterminatedRange { pos: usize },

    #[error("a character-class shorthand cannot be a range endpoint at byte {pos}")]
    RangeShorthandEndpoint { pos: usize },

    #[error("'.' cannot be a range endpoint at byte {pos}")]
    RangeDotEndpoint { pos: usize },

    #[error("pattern ended inside an escape sequence at byte {pos}")]
    EscapeIncomplete { pos: usize },

    #[error("unbalanced parentheses: {detail}")]
    UnbalancedParens { detail: &'static str },

    #[error("imbalanced expression: operator '{op}' has no operand on the evaluation stack")]
    ImbalancedExpression { op: &'static str },
}

pub type CompileResult<T> = Result<T, CompileError>;
