//! Infix-to-postfix parser: a shunting-yard scan over the
//! lexer's token stream that inserts implicit concatenation and produces
//! a postfix (RPN) sequence of node references over a node arena.

pub mod node;
pub mod parser;

pub use node::{Node, NodeId, Op, Precedence};
pub use parser::parse;
