//! Table builder: turns the evaluated node arena into the
//! final compiled [`Table`] — one [`TableEntry`] per operand position,
//! whose transitions are drawn from that operand's `follow_pos`.

use regionc_lex::{CharacterValue, Token};
use regionc_par::{Node, NodeId};
use regionc_util::index_vec::IndexVec;

/// `{ value, jump, region_name }` — one edge out of a [`TableEntry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub value: CharacterValue,
    pub jump: usize,
    pub region_name: u128,
}

/// `{ transitions }` — `entry[i]` is the state reached after matching
/// operand `i`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableEntry {
    pub transitions: Vec<Transition>,
}

/// The compiled regex: an ordered sequence of [`TableEntry`], independent
/// of the transient parse arena that produced it — see DESIGN.md for why
/// this is nested owned `Vec`s rather than one raw byte allocation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    pub entries: Vec<TableEntry>,
}

impl Table {
    pub fn state_count(&self) -> usize {
        self.entries.len()
    }
}

/// Builds the compiled table from the evaluated arena and its ordered
/// `operands` list, which is the DFA's state numbering.
pub fn build(tokens: &[Token], arena: &IndexVec<NodeId, Node>, operands: &[NodeId]) -> Table {
    let transition_count: usize = operands.iter().map(|&id| arena[id].follow_pos.len()).sum();
    let character_count: usize = operands
        .iter()
        .flat_map(|&id| arena[id].follow_pos.iter())
        .filter_map(|&leaf| {
            let token_index = arena[leaf].token?;
            match &tokens[token_index].value {
                CharacterValue::Class(c) => Some(c.elements.len()),
                CharacterValue::Character(_) => None,
            }
        })
        .sum();
    log::debug!(
        "building table: {} operands, {} transitions, {} class elements",
        operands.len(),
        transition_count,
        character_count
    );

    let mut entries = Vec::with_capacity(operands.len());
    for &operand_id in operands {
        let node = &arena[operand_id];
        let mut transitions = Vec::with_capacity(node.follow_pos.len());
        for &leaf_id in &node.follow_pos {
            let leaf = &arena[leaf_id];
            let token_index = leaf.token.expect("follow_pos only ever holds operand leaves");
            let token = &tokens[token_index];
            let jump = leaf.position.expect("operand leaves are positioned before table build");
            transitions.push(Transition {
                value: token.value.clone(),
                jump,
                region_name: token.region_name,
            });
        }
        entries.push(TableEntry { transitions });
    }
    Table { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regionc_lex::tokenize;
    use regionc_par::parse;
    use regionc_sem::evaluate;

    fn compile(pattern: &str) -> Table {
        let tokens = tokenize(pattern).unwrap();
        let (mut arena, rpn) = parse(&tokens);
        let operands = evaluate(&mut arena, &rpn).unwrap();
        build(&tokens, &arena, &operands)
    }

    #[test]
    fn state_count_matches_operand_count() {
        let table = compile("abc");
        // S a b c # -> 5 states
        assert_eq!(table.state_count(), 5);
    }

    #[test]
    fn start_states_transition_targets_the_first_user_operand() {
        // entries[0] (the synthetic `S`) is built from `S`'s own
        // follow_pos, so its one transition carries the *destination*
        // leaf's value/region, not `S`'s own — here that destination is
        // the tagged `a` right after it.
        let table = compile("{tag:a}");
        let start = &table.entries[0];
        assert_eq!(start.transitions.len(), 1);
        assert_eq!(start.transitions[0].jump, 1);
        assert_eq!(start.transitions[0].region_name, regionc_util::region::encode("tag"));
    }

    #[test]
    fn accept_state_is_reachable_via_encoded_accept_region() {
        let table = compile("a");
        let reaches_accept = table
            .entries
            .iter()
            .flat_map(|e| e.transitions.iter())
            .any(|t| t.region_name == regionc_util::region::encode("accept"));
        assert!(reaches_accept);
    }
}
