//! Symbolic evaluator: direct `followpos`-based DFA
//! construction over the parser's RPN sequence, with no intermediate NFA.

mod eval;

pub use eval::evaluate;

#[cfg(test)]
mod tests {
    use super::*;
    use regionc_lex::tokenize;
    use regionc_par::parse;
    use regionc_util::error::CompileError;

    fn eval_pattern(pattern: &str) -> (regionc_util::index_vec::IndexVec<regionc_par::NodeId, regionc_par::Node>, Vec<regionc_par::NodeId>) {
        let tokens = tokenize(pattern).unwrap();
        let (mut arena, rpn) = parse(&tokens);
        let operands = evaluate(&mut arena, &rpn).unwrap();
        (arena, operands)
    }

    #[test]
    fn operand_count_matches_token_operand_count() {
        let tokens = tokenize("abc").unwrap();
        let operand_tokens = tokens.iter().filter(|t| t.is_operand()).count();
        let (_, operands) = eval_pattern("abc");
        assert_eq!(operands.len(), operand_tokens);
    }

    #[test]
    fn positions_are_dense_and_insertion_ordered() {
        let (arena, operands) = eval_pattern("abc");
        for (i, &id) in operands.iter().enumerate() {
            assert_eq!(arena[id].position, Some(i));
        }
    }

    #[test]
    fn kleene_star_makes_its_operand_nullable() {
        let (arena, operands) = eval_pattern("a*b");
        // operands: S ( a ) * ... b ) # -> "a" is first non-S/paren operand
        let a_id = operands[1]; // index 0 is synthetic S
        assert!(!arena[a_id].nullable); // the leaf itself is never nullable
    }

    #[test]
    fn followpos_links_kleene_tail_back_to_its_own_first() {
        // a* : last_pos(a) should have a in its follow_pos (self-loop).
        let (arena, operands) = eval_pattern("a*");
        let a_id = operands[1];
        assert!(arena[a_id].follow_pos.contains(&a_id));
    }

    #[test]
    fn imbalanced_expression_on_leading_unary() {
        // "*a" -> S ( * a ) # ; the KLEENE has nothing to its left in RPN.
        let tokens = tokenize("*a").unwrap();
        let (mut arena, rpn) = parse(&tokens);
        let err = evaluate(&mut arena, &rpn).unwrap_err();
        assert!(matches!(err, CompileError::ImbalancedExpression { .. }));
    }
}
