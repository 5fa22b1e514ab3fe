//! End-to-end script cases through the public API.

use dynarray::script::{Session, parse};
use dynarray::{DynamicArray, ExecError};
use expect_test::{Expect, expect};

fn check(size: usize, source: &str, expected: Expect) {
    let script = parse(source).expect("script should parse");
    let mut session = Session::new(size);
    let mut out = Vec::new();
    let result = session.execute(&script, &mut out);

    let mut actual = String::from_utf8(out).unwrap();
    if let Err(ExecError::Script(e)) = result {
        actual.push_str(&format!("error [{}]: {e}\n", e.code()));
    }
    expected.assert_eq(&actual);
}

#[test]
fn self_organizing_search_moves_value_to_front() {
    check(
        1,
        "pop 0; push 1; push 2; push 3; push 4; find-move 4; find-move 4; find-move 4; find-move 4; print",
        expect![[r#"
            0
            2
            1
            0
            0
            4 1 2 3
        "#]],
    );
}

#[test]
fn growth_from_destroyed_array() {
    check(
        3,
        "destroy; push 1; capacity; push 2; capacity; push 3; capacity; push 4; push 5; capacity; len",
        expect![[r#"
            1
            2
            4
            8
            5
        "#]],
    );
}

#[test]
fn error_after_partial_output() {
    check(
        2,
        "set 1 6; print; insert 4 1; print",
        expect![[r#"
            0 6
            error [A002]: index 4 is out of range for length 2
        "#]],
    );
}

#[test]
fn session_array_matches_direct_calls() {
    let script = parse("push 3; insert 0 9; rotate-right 5; pop 1").unwrap();
    let mut session = Session::new(2);
    session.execute(&script, &mut std::io::sink()).unwrap();

    let mut direct = DynamicArray::new(2);
    direct.push_back(3);
    direct.insert(0, 9).unwrap();
    direct.right_rotate(5);
    direct.pop(1).unwrap();

    assert_eq!(session.array(), &direct);
}
