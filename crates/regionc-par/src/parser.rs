//! Shunting-yard parser with implicit concatenation.
//!
//! The lexer's `fence_balance` check already guarantees a well-nested,
//! balanced token stream, so unlike a general-purpose shunting-yard parser
//! this one never has to report an error: popping on a close-paren always
//! finds a matching open, and the operator stack is always empty once the
//! synthetic trailing `)` has been processed.

use regionc_lex::{CharacterValue, Token};
use regionc_util::index_vec::IndexVec;

use crate::node::{Node, NodeId, Op, Precedence};

enum StackEntry {
    OParen,
    Operator(NodeId),
}

struct Parser<'a> {
    tokens: &'a [Token],
    arena: IndexVec<NodeId, Node>,
    output: Vec<NodeId>,
    operator_stack: Vec<StackEntry>,
    previous_precedence: Precedence,
}

/// Classifies a structural (`NonMatching`) token into its operator/marker
/// shape, or `None` if the token isn't a recognised structural rune (not
/// reachable once the lexer has run, but keeps this function total).
fn structural_op(token: &Token) -> Option<(char, Option<Op>, Precedence)> {
    let CharacterValue::Character(c) = &token.value else { return None };
    match c.min_rune {
        '(' => Some(('(', None, Precedence::OParen)),
        ')' => Some((')', None, Precedence::CloParen)),
        '|' => Some(('|', Some(Op::Altern), Precedence::Altern)),
        '*' => Some(('*', Some(Op::Kleene), Precedence::Unary)),
        '?' => Some(('?', Some(Op::Exist), Precedence::Unary)),
        '+' => Some(('+', Some(Op::Repeat), Precedence::Unary)),
        _ => None,
    }
}

fn right_concatable(token: &Token) -> bool {
    token.is_operand() || matches!(structural_op(token), Some(('(', ..)))
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Parser {
            tokens,
            arena: IndexVec::new(),
            output: Vec::new(),
            operator_stack: Vec::new(),
            previous_precedence: Precedence::Invalid,
        }
    }

    fn left_concatable(&self) -> bool {
        matches!(
            self.previous_precedence,
            Precedence::Operand | Precedence::Unary | Precedence::CloParen
        )
    }

    fn feed_operand(&mut self, source_index: usize) {
        let id = self.arena.push(Node::operand(source_index));
        self.output.push(id);
        self.previous_precedence = Precedence::Operand;
    }

    fn feed_oparen(&mut self) {
        self.operator_stack.push(StackEntry::OParen);
        self.previous_precedence = Precedence::OParen;
    }

    fn feed_operator(&mut self, op: Op, precedence: Precedence) {
        while let Some(top_precedence) = self.operator_stack.last().map(|entry| match entry {
            StackEntry::OParen => Precedence::OParen,
            StackEntry::Operator(id) => self.arena[*id].precedence,
        }) {
            if precedence <= top_precedence {
                match self.operator_stack.pop().unwrap() {
                    StackEntry::Operator(id) => self.output.push(id),
                    StackEntry::OParen => unreachable!("open paren has lowest precedence"),
                }
            } else {
                break;
            }
        }
        let node = Node::operator(op, precedence);
        let id = self.arena.push(node);
        self.operator_stack.push(StackEntry::Operator(id));
        self.previous_precedence = precedence;
    }

    fn feed_cloparen(&mut self) {
        loop {
            match self.operator_stack.pop() {
                Some(StackEntry::OParen) => break,
                Some(StackEntry::Operator(id)) => self.output.push(id),
                None => unreachable!("lexer guarantees balanced parens"),
            }
        }
        self.previous_precedence = Precedence::CloParen;
    }

    fn feed(&mut self, token: &Token, source_index: usize) {
        if token.is_operand() {
            self.feed_operand(source_index);
            return;
        }
        match structural_op(token) {
            Some((_, None, Precedence::OParen)) => self.feed_oparen(),
            Some((_, None, Precedence::CloParen)) => self.feed_cloparen(),
            Some((_, Some(op), precedence)) => self.feed_operator(op, precedence),
            _ => unreachable!("lexer never emits an unrecognised structural token"),
        }
    }

    fn run(mut self) -> (IndexVec<NodeId, Node>, Vec<NodeId>) {
        for (source_index, token) in self.tokens.iter().enumerate() {
            if self.left_concatable() && right_concatable(token) {
                log::trace!("inserting implicit concat before token {source_index}");
                self.feed_operator(Op::Concat, Precedence::Concat);
            }
            self.feed(token, source_index);
        }
        while let Some(entry) = self.operator_stack.pop() {
            match entry {
                StackEntry::Operator(id) => self.output.push(id),
                StackEntry::OParen => unreachable!("lexer guarantees balanced parens"),
            }
        }
        (self.arena, self.output)
    }
}

/// Parses a token stream into a node arena and its postfix (RPN) sequence.
pub fn parse(tokens: &[Token]) -> (IndexVec<NodeId, Node>, Vec<NodeId>) {
    Parser::new(tokens).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use regionc_lex::tokenize;

    fn rpn_ops(pattern: &str) -> Vec<Option<Op>> {
        let tokens = tokenize(pattern).unwrap();
        let (arena, rpn) = parse(&tokens);
        rpn.into_iter().map(|id| arena[id].op).collect()
    }

    #[test]
    fn implicit_concat_between_adjacent_operands() {
        // S ( a b ) # -> S a CONCAT b CONCAT ( CONCAT #? wrapped with extra
        // structural parens; what matters is CONCAT nodes appear.
        let ops = rpn_ops("ab");
        assert!(ops.iter().any(|o| *o == Some(Op::Concat)));
    }

    #[test]
    fn alternation_has_lower_precedence_than_concat() {
        let tokens = tokenize("ab|c").unwrap();
        let (arena, rpn) = parse(&tokens);
        let last = arena[*rpn.last().unwrap()].op;
        assert_eq!(last, Some(Op::Altern));
    }

    #[test]
    fn unary_binds_tighter_than_concat() {
        let ops = rpn_ops("ab*");
        // ...a b KLEENE CONCAT...
        let kleene_pos = ops.iter().position(|o| *o == Some(Op::Kleene)).unwrap();
        let concat_pos = ops.iter().rposition(|o| *o == Some(Op::Concat)).unwrap();
        assert!(kleene_pos < concat_pos);
    }

    #[test]
    fn grouping_parens_reorder_evaluation() {
        let ops_grouped = rpn_ops("(a|b)c");
        let ops_ungrouped = rpn_ops("a|bc");
        assert_ne!(ops_grouped, ops_ungrouped);
    }
}
