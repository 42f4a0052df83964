//! Parse-tree node arena.

use regionc_util::define_idx;

/// Index into the node arena. Node references throughout `first_pos` /
/// `last_pos` / `follow_pos` are `NodeId`s, never owning pointers.
define_idx!(NodeId);

/// Operator nodes produced by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Altern,
    Concat,
    Kleene,
    Exist,
    Repeat,
}

/// Binding power used by the shunting-yard scan. `Operand` is
/// lower than every operator precedence so an operand never triggers a
/// pop of pending operators; `CloParen` is handled specially rather than
/// compared numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Invalid,
    Operand,
    OParen,
    Altern,
    Concat,
    Unary,
    CloParen,
}

/// One parse-tree entry. `token` is only meaningful for operand nodes;
/// `op` only for operator nodes. `nullable`/`first_pos`/`last_pos` are
/// filled in by the parser for leaves (trivially) and overwritten by the
/// symbolic evaluator for interior nodes; `follow_pos` and `position` are
/// exclusively the evaluator's to fill in.
#[derive(Debug, Clone)]
pub struct Node {
    pub token: Option<usize>,
    pub op: Option<Op>,
    pub precedence: Precedence,
    pub nullable: bool,
    pub first_pos: Vec<NodeId>,
    pub last_pos: Vec<NodeId>,
    pub follow_pos: Vec<NodeId>,
    /// DFA state index, assigned only to operand leaves, in insertion
    /// order, by the symbolic evaluator.
    pub position: Option<usize>,
}

impl Node {
    pub fn operand(token: usize) -> Self {
        Node {
            token: Some(token),
            op: None,
            precedence: Precedence::Operand,
            nullable: false,
            first_pos: Vec::new(),
            last_pos: Vec::new(),
            follow_pos: Vec::new(),
            position: None,
        }
    }

    pub fn operator(op: Op, precedence: Precedence) -> Self {
        Node {
            token: None,
            op: Some(op),
            precedence,
            nullable: false,
            first_pos: Vec::new(),
            last_pos: Vec::new(),
            follow_pos: Vec::new(),
            position: None,
        }
    }

    pub fn is_unary(&self) -> bool {
        matches!(self.op, Some(Op::Kleene) | Some(Op::Exist) | Some(Op::Repeat))
    }

    pub fn is_binary(&self) -> bool {
        matches!(self.op, Some(Op::Altern) | Some(Op::Concat))
    }
}
