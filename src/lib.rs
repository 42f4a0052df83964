//! `regionc`: compiles a pattern with named capture regions into a
//! directly-executable table, and matches runes against it one at a
//! time with no backtracking.
//!
//! ```
//! use regionc::compile_regex;
//!
//! let table = compile_regex("a*b").unwrap();
//! assert!(regionc::run(&table, "aaab"));
//! ```

pub use regionc_lex::{
    Character, CharacterClass, CharacterKind, CharacterValue, Token,
};
pub use regionc_par::{Node, NodeId, Op, Precedence};
pub use regionc_runtime::{run, step, StepResult, START_STATE};
pub use regionc_table::{Table, TableEntry, Transition};
pub use regionc_util::error::{CompileError, CompileResult};
pub use regionc_util::region::{decode, encode, ACCEPT_REGION, START_REGION};

/// Compiles `pattern` into a [`Table`]. Runs the lexer, parser, symbolic
/// evaluator, and table builder in sequence; the first stage to fail
/// short-circuits the rest.
pub fn compile_regex(pattern: &str) -> CompileResult<Table> {
    log::debug!("compiling pattern of {} bytes", pattern.len());
    let tokens = regionc_lex::tokenize(pattern)?;
    let (mut arena, rpn) = regionc_par::parse(&tokens);
    let operands = regionc_sem::evaluate(&mut arena, &rpn)?;
    let table = regionc_table::build(&tokens, &arena, &operands);
    log::debug!("compiled to {} states", table.state_count());
    Ok(table)
}
