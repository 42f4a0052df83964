use regionc::{compile_regex, decode, run, step, CharacterValue, Table, START_STATE};

fn compile(pattern: &str) -> Table {
    compile_regex(pattern).expect("pattern should compile")
}

#[test]
fn literal_sequence() {
    let table = compile("abc");
    assert!(run(&table, "abc"));
    assert!(!run(&table, "abx"));
}

#[test]
fn kleene_star_repetition() {
    let table = compile("a*b");
    assert!(run(&table, "b"));
    assert!(run(&table, "aaaab"));
    assert!(!run(&table, "aac"));
}

#[test]
fn character_class_with_range_and_one_or_more() {
    let table = compile("[a-z0-9_]+");
    assert!(run(&table, "hello_42"));
    assert!(!run(&table, "HELLO"));
}

#[test]
fn nested_regions_tag_tokens_with_the_innermost_open_name() {
    let table = compile("{outer:a{inner:b}c}");

    let mut state = START_STATE;
    let mut regions = Vec::new();
    for rune in "abc".chars() {
        let result = step(&table, state, rune);
        assert!(result.matched, "expected {rune:?} to match");
        regions.push(decode(result.region_name));
        state = result.next_state;
    }
    assert_eq!(regions, vec!["outer", "inner", "outer"]);
}

#[test]
fn digit_dot_digit_shorthand() {
    let table = compile(r"\d+\.\d+");
    assert!(run(&table, "12.34"));
    assert!(!run(&table, "12."));
}

#[test]
fn deeply_nested_regions_accumulate_independent_names() {
    let table = compile("{a:my {b:super {c:nested}} regex} engine");
    assert!(run(&table, "my super nested regex engine"));
}

#[test]
fn class_values_survive_independently_of_the_parse_arena() {
    // the table must still work correctly once every transient parser
    // structure that produced it has gone out of scope. entries[0] (the
    // synthetic `S`) is built from `S`'s own follow_pos, so its one
    // transition carries the class operand's own deep-copied value.
    let table = {
        let table = compile("[abc]");
        table
    };
    assert!(run(&table, "b"));
    match &table.entries[0].transitions[0].value {
        CharacterValue::Class(class) => assert_eq!(class.elements.len(), 3),
        _ => panic!("expected the class operand reachable from the start state"),
    }
}
