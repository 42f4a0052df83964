//! Symbolic evaluator: walks the RPN sequence once, computing
//! `nullable`, `first_pos`, `last_pos`, and mutating `follow_pos` on
//! operand leaves, directly producing the position-indexed DFA without an
//! intermediate NFA.

use regionc_par::{Node, NodeId, Op};
use regionc_util::error::{CompileError, CompileResult};
use regionc_util::index_vec::IndexVec;

struct Evaluator<'a> {
    arena: &'a mut IndexVec<NodeId, Node>,
    eval_stack: Vec<NodeId>,
    operands: Vec<NodeId>,
}

impl<'a> Evaluator<'a> {
    fn pop(&mut self, op: &'static str) -> CompileResult<NodeId> {
        self.eval_stack
            .pop()
            .ok_or(CompileError::ImbalancedExpression { op })
    }

    fn visit_operand(&mut self, id: NodeId) {
        let position = self.operands.len();
        let node = &mut self.arena[id];
        node.nullable = false;
        node.first_pos = vec![id];
        node.last_pos = vec![id];
        node.position = Some(position);
        self.operands.push(id);
        self.eval_stack.push(id);
    }

    /// Shared by `KLEENE` and `REPEAT`: append `x_first_pos` to the
    /// `follow_pos` of every leaf in `x_last_pos`.
    fn apply_followpos(&mut self, x_last_pos: &[NodeId], x_first_pos: &[NodeId]) {
        for &leaf in x_last_pos {
            self.arena[leaf].follow_pos.extend_from_slice(x_first_pos);
        }
    }

    fn visit_kleene(&mut self, id: NodeId) -> CompileResult<()> {
        let x = self.pop("*")?;
        let (x_first, x_last) = {
            let xn = &self.arena[x];
            (xn.first_pos.clone(), xn.last_pos.clone())
        };
        self.apply_followpos(&x_last, &x_first);
        let node = &mut self.arena[id];
        node.nullable = true;
        node.first_pos = x_first;
        node.last_pos = x_last;
        self.eval_stack.push(id);
        Ok(())
    }

    fn visit_exist(&mut self, id: NodeId) -> CompileResult<()> {
        let x = self.pop("?")?;
        let (x_first, x_last) = {
            let xn = &self.arena[x];
            (xn.first_pos.clone(), xn.last_pos.clone())
        };
        let node = &mut self.arena[id];
        node.nullable = true;
        node.first_pos = x_first;
        node.last_pos = x_last;
        self.eval_stack.push(id);
        Ok(())
    }

    fn visit_repeat(&mut self, id: NodeId) -> CompileResult<()> {
        let x = self.pop("+")?;
        let (x_nullable, x_first, x_last) = {
            let xn = &self.arena[x];
            (xn.nullable, xn.first_pos.clone(), xn.last_pos.clone())
        };
        self.apply_followpos(&x_last, &x_first);
        let node = &mut self.arena[id];
        node.nullable = x_nullable;
        node.first_pos = x_first;
        node.last_pos = x_last;
        self.eval_stack.push(id);
        Ok(())
    }

    fn visit_altern(&mut self, id: NodeId) -> CompileResult<()> {
        let r = self.pop("|")?;
        let l = self.pop("|")?;
        let (l_nullable, mut l_first, mut l_last) = {
            let ln = &self.arena[l];
            (ln.nullable, ln.first_pos.clone(), ln.last_pos.clone())
        };
        let (r_nullable, r_first, r_last) = {
            let rn = &self.arena[r];
            (rn.nullable, rn.first_pos.clone(), rn.last_pos.clone())
        };
        l_first.extend(r_first);
        l_last.extend(r_last);
        let node = &mut self.arena[id];
        node.nullable = l_nullable || r_nullable;
        node.first_pos = l_first;
        node.last_pos = l_last;
        self.eval_stack.push(id);
        Ok(())
    }

    fn visit_concat(&mut self, id: NodeId) -> CompileResult<()> {
        let r = self.pop(".")?;
        let l = self.pop(".")?;
        let (l_nullable, l_first, l_last) = {
            let ln = &self.arena[l];
            (ln.nullable, ln.first_pos.clone(), ln.last_pos.clone())
        };
        let (r_nullable, r_first, r_last) = {
            let rn = &self.arena[r];
            (rn.nullable, rn.first_pos.clone(), rn.last_pos.clone())
        };
        self.apply_followpos(&l_last, &r_first);
        let first_pos = if l_nullable {
            let mut f = l_first.clone();
            f.extend(r_first.clone());
            f
        } else {
            l_first
        };
        let last_pos = if r_nullable {
            let mut l = l_last;
            l.extend(r_last.clone());
            l
        } else {
            r_last
        };
        let node = &mut self.arena[id];
        node.nullable = l_nullable && r_nullable;
        node.first_pos = first_pos;
        node.last_pos = last_pos;
        self.eval_stack.push(id);
        Ok(())
    }
}

/// Walks `rpn` once, filling in `nullable`/`first_pos`/`last_pos` on every
/// node and `follow_pos` on operand leaves in `arena`. Returns the operand
/// leaves in visitation order — this ordering *is* the DFA state
/// numbering — this is the DFA's densely-assigned-positions invariant.
pub fn evaluate(arena: &mut IndexVec<NodeId, Node>, rpn: &[NodeId]) -> CompileResult<Vec<NodeId>> {
    let mut evaluator = Evaluator { arena, eval_stack: Vec::new(), operands: Vec::new() };

    for &id in rpn {
        let op = evaluator.arena[id].op;
        match op {
            None => evaluator.visit_operand(id),
            Some(Op::Kleene) => evaluator.visit_kleene(id)?,
            Some(Op::Exist) => evaluator.visit_exist(id)?,
            Some(Op::Repeat) => evaluator.visit_repeat(id)?,
            Some(Op::Altern) => evaluator.visit_altern(id)?,
            Some(Op::Concat) => evaluator.visit_concat(id)?,
        }
        log::trace!("evaluated node, eval stack depth {}", evaluator.eval_stack.len());
    }

    Ok(evaluator.operands)
}
