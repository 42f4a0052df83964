use regionc_util::error::CompileResult;
use regionc_util::region;

use super::core::{LexState, Lexer};

impl<'a> Lexer<'a> {
    /// Accumulates a region name until `:`, then pushes its encoded form
    /// onto the region stack and returns to `Normal`.
    pub(crate) fn step_naming(&mut self) -> CompileResult<()> {
        let c = self.cursor.advance();
        if c == ':' {
            let encoded = region::encode(&self.region_accumulator);
            self.region_name_stack.push(encoded);
            self.state = LexState::Normal;
        } else {
            self.region_accumulator.push(c);
        }
        Ok(())
    }
}
