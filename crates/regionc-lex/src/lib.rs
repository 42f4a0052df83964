//! Pattern lexer.
//!
//! Consumes the pattern string and produces a linear array of [`Token`]s,
//! framed front and back with the synthetic `S(` / `)#` wrapper that gives
//! every compiled table a canonical start state and a unique accept
//! operand.

pub mod cursor;
pub mod lexer;
pub mod token;

pub use lexer::tokenize;
pub use token::{Character, CharacterClass, CharacterKind, CharacterValue, Token};

#[cfg(test)]
mod tests {
    use super::*;
    use regionc_util::error::CompileError;
    use regionc_util::region;

    #[test]
    fn framing_wraps_pattern_in_s_paren_paren_hash() {
        let tokens = tokenize("a").unwrap();
        assert_eq!(tokens.len(), 5); // S ( a ) #
        assert_eq!(tokens[0].region_name, region::encode("start"));
        assert_eq!(tokens[4].region_name, region::encode("accept"));
        match &tokens[2].value {
            CharacterValue::Character(c) => assert_eq!(c.min_rune, 'a'),
            _ => panic!("expected a literal"),
        }
    }

    #[test]
    fn dot_is_not_vertical_whitespace() {
        let tokens = tokenize(".").unwrap();
        match &tokens[2].value {
            CharacterValue::Character(c) => {
                assert_eq!(c.kind, CharacterKind::NotVerticalWhitespace)
            }
            _ => panic!("expected an operand"),
        }
    }

    #[test]
    fn nested_region_names_push_and_pop() {
        let tokens = tokenize("{outer:a{inner:b}c}").unwrap();
        let outer = region::encode("outer");
        let inner = region::encode("inner");
        let regions: Vec<u128> = tokens
            .iter()
            .filter(|t| matches!(&t.value, CharacterValue::Character(c) if c.kind == CharacterKind::Exact))
            .map(|t| t.region_name)
            .collect();
        // S a(outer) b(inner) c(outer) #
        assert_eq!(regions, vec![region::encode("start"), outer, inner, outer, region::encode("accept")]);
    }

    #[test]
    fn character_class_collects_elements_and_negation() {
        let tokens = tokenize("[a-z0-9_]").unwrap();
        match &tokens[2].value {
            CharacterValue::Class(class) => {
                assert!(!class.negated);
                assert_eq!(class.elements.len(), 3);
            }
            _ => panic!("expected a class"),
        }
    }

    #[test]
    fn unterminated_name_is_an_error() {
        assert_eq!(
            tokenize("{a").unwrap_err(),
            CompileError::UnterminatedRegionName { opened_at: 0 }
        );
    }

    #[test]
    fn unterminated_class_is_an_error() {
        assert!(matches!(
            tokenize("a[").unwrap_err(),
            CompileError::UnterminatedClass { .. }
        ));
    }

    #[test]
    fn range_without_left_endpoint_is_an_error() {
        assert!(matches!(
            tokenize("[-a]").unwrap_err(),
            CompileError::RangeNoLeftEndpoint { .. }
        ));
    }

    #[test]
    fn shorthand_as_range_endpoint_is_an_error() {
        assert!(matches!(
            tokenize("[a-\\d]").unwrap_err(),
            CompileError::RangeShorthandEndpoint { .. }
        ));
    }

    #[test]
    fn unbalanced_open_paren_is_an_error() {
        assert!(matches!(tokenize("(a").unwrap_err(), CompileError::UnbalancedParens { .. }));
    }

    #[test]
    fn unbalanced_close_paren_is_an_error() {
        assert!(matches!(tokenize("a)").unwrap_err(), CompileError::UnbalancedParens { .. }));
    }

    #[test]
    fn control_escapes_decode_to_control_chars() {
        let tokens = tokenize("\\n").unwrap();
        match &tokens[2].value {
            CharacterValue::Character(c) => assert_eq!(c.min_rune, '\u{0A}'),
            _ => panic!("expected operand"),
        }
    }
}
