use std::fs::{self};

use pretty_assertions::assert_eq;
use stargust::{
    Evaluator, Value,
    interpreter::{
        evaluator::function::core::{Arity, BUILTIN_FUNCTIONS, Builtin},
        output::buffer_sink,
        session::{Outcome, Session},
    },
};
use walkdir::WalkDir;

#[test]
fn guide_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("docs").into_iter()
                            .filter_map(Result::ok)
                            .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_sg_blocks(&content).into_iter().enumerate() {
            count += 1;
            let mut session = Session::new(buffer_sink());
            match session.run(&code) {
                Outcome::Diagnostics(errors) => {
                    panic!("Example {} in {path:?} did not parse:\n{code}\nErrors: {errors:?}",
                           i + 1)
                },
                Outcome::Completed(Some(Value::Error(e))) => {
                    panic!("Example {} in {path:?} failed:\n{code}\nError: {e}", i + 1)
                },
                Outcome::Completed(_) => {},
            }
        }
    }

    assert!(count > 0, "No examples found in docs");
}

fn extract_sg_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```sg") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

/// Runs `src` in a fresh session and returns the rendered final value.
fn eval(src: &str) -> String {
    match Session::new(buffer_sink()).run(src) {
        Outcome::Completed(Some(value)) => value.to_string(),
        Outcome::Completed(None) => panic!("Script produced no value: {src}"),
        Outcome::Diagnostics(errors) => panic!("Script did not parse: {src}\n{errors:?}"),
    }
}

fn assert_value(src: &str, expected: &str) {
    assert_eq!(eval(src), expected, "script: {src}");
}

fn assert_error(src: &str, fragment: &str) {
    match Session::new(buffer_sink()).run(src) {
        Outcome::Completed(Some(Value::Error(e))) => {
            assert!(e.to_string().contains(fragment),
                    "error {e:?} of {src:?} does not mention {fragment:?}");
        },
        other => panic!("Script succeeded but was expected to fail: {src}\n{other:?}"),
    }
}

fn output_of(src: &str) -> String {
    let mut session = Session::new(buffer_sink());
    session.run(src);
    session.output().contents()
}

#[test]
fn arithmetic_and_precedence() {
    assert_value("1 + 2 * 3", "7");
    assert_value("(1 + 2) * 3", "9");
    assert_value("-1 + 2", "1");
    assert_value("10 - 4 - 3", "3");
    assert_value("20 / 2 / 5", "2");
    assert_value("-5 * 2", "-10");
    assert_value("7 / 2", "3");
    assert_value("2 * (5 + 10) / 3 - -1", "11");
}

#[test]
fn bang_uses_truthiness() {
    assert_value("!true", "false");
    assert_value("!false", "true");
    assert_value("!!5", "true");
    assert_value("!0", "false");
    assert_value("![]", "false");
}

#[test]
fn comparisons() {
    assert_value("1 < 2", "true");
    assert_value("2 > 3", "false");
    assert_value("1 == 1", "true");
    assert_value("1 != 2", "true");
    assert_value("true == true", "true");
    assert_value("(1 < 2) == true", "true");
    assert_value("1 == true", "false");
}

#[test]
fn keyword_aliases() {
    assert_value("factos", "true");
    assert_value("unfactos == false", "true");
    assert_value("fun() { ret 5; }()", "5");
}

#[test]
fn inner_declaration_shadows_outer() {
    assert_value("let x = 1; fun() { let x = 2; return x; }()", "2");
    assert_value("let x = 1; fun() { let x = 2; return x; }(); x", "1");
}

#[test]
fn declarations_are_checked_against_the_local_frame() {
    assert_error("let a = 1; let a = 2;", "already declared");
    assert_value("let a = 1; let f = fun() { let a = 5; a }; f() + a", "6");
}

#[test]
fn assignment_requires_declaration() {
    assert_error("y = 1;", "not defined");
    assert_error("let f = fun() { z = 1; }; f()", "variable z is not defined");
}

#[test]
fn assignment_rebinds_the_holding_frame() {
    assert_value("let c = 0; let inc = fun() { c = c + 1; }; inc(); inc(); c", "2");
    assert_value("let x = 1; x = x + 41; x", "42");
}

#[test]
fn declarations_and_assignments_yield_nothing() {
    let mut session = Session::new(buffer_sink());

    assert!(matches!(session.run("let x = 5;"), Outcome::Completed(None)));
    assert!(matches!(session.run("x = 6;"), Outcome::Completed(None)));
    assert!(matches!(session.run("x"), Outcome::Completed(Some(Value::Integer(6)))));
}

#[test]
fn closures_capture_their_defining_scope() {
    assert_value("let adder = fun(x) { fun(y) { x + y } }; let add2 = adder(2); add2(3)", "5");
    assert_value("let make = fun() { let n = 0; fun() { n = n + 1; n } }; \
                  let c = make(); c(); c(); c()",
                 "3");
    assert_value("let x = 1; let f = fun() { x }; x = 5; f()", "5");
}

#[test]
fn recursion() {
    assert_value("let fib = fun(n) { if (n < 2) { n } else { fib(n - 1) + fib(n - 2) } }; fib(10)",
                 "55");
}

#[test]
fn return_short_circuits() {
    assert_value("let f = fun() { if (true) { return 1; } return 2; }; f()", "1");
    assert_value("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", "10");
    assert_value("return 3; 4", "3");
    assert_value("let f = fun() { return 1; 1 + true }; f()", "1");
}

#[test]
fn if_expressions() {
    assert_value("if (false) { 1 }", "null");
    assert_value("if (1) { 10 }", "10");
    assert_value("if (0) { \"yes\" } else { \"no\" }", "yes");
    assert_value("if (first([])) { 1 } else { 2 }", "2");
    assert_value("if (true) { let z = 3; }; z", "3");
}

#[test]
fn arrays_and_indexing() {
    assert_value("[1, 2 * 2, 3 + 3]", "[1, 4, 6]");
    assert_value("[1, 2, 3][0]", "1");
    assert_value("[1, 2, 3][3]", "null");
    assert_value("[1, 2, 3][-1]", "null");
    assert_value("let a = [1, 2, 3]; a[1] + a[2]", "5");
    assert_value("[[1, 2], [3]][0][1]", "2");
    assert_error("1[0]", "index operator not supported: INTEGER[INTEGER]");
}

#[test]
fn push_grows_an_empty_array() {
    let mut session = Session::new(buffer_sink());
    session.run("let a = []; push(a, 1);");

    let Some(Value::Array(array)) = session.scope().get("a") else {
        panic!("a is not an array");
    };
    assert_eq!(array.borrow().len(), 1);
    assert!(array.borrow().capacity() >= 1);

    assert!(matches!(session.run("a[1]"), Outcome::Completed(Some(Value::Null))));
}

#[test]
fn push_mutates_in_place() {
    assert_value("let a = [1]; let b = a; push(a, 2); len(b)", "2");
    assert_value("let a = []; push(push(a, 1), 2); a", "[1, 2]");
    assert_value("let a = [1]; push(a, 2) == a", "true");
}

#[test]
fn maps() {
    assert_value(r#"{"a": 1, "a": 2}["a"]"#, "2");
    assert_value(r#"{"a": 1}["b"]"#, "null");
    assert_value(r#"{1: "one", true: "yes"}[true]"#, "yes");
    assert_value(r#"let k = "key"; {"key": 5}[k]"#, "5");
    assert_value(r#"let m = {"a" + "b": 1}; m["ab"]"#, "1");
    assert_value("{}", "{}");
    assert_error("{[1]: 2}", "unusable as hash key: ARRAY");
    assert_error(r#"{"a": 1}[[1]]"#, "index operator not supported: HASH[ARRAY]");
}

#[test]
fn string_builtins() {
    assert_value(r#"len("hello")"#, "5");
    assert_value(r#"len("")"#, "0");
    assert_value(r#"get("abc", 1)"#, "b");
    assert_error(r#"get("abc", 3)"#, "index 3 out of range for length 3");
    assert_error("get(1, 0)", "argument to `get` not supported");
    assert_error("len(1)", "argument to `len` not supported: got INTEGER");
}

#[test]
fn array_builtins() {
    assert_value("len([1, 2])", "2");
    assert_value("first([1, 2])", "1");
    assert_value("last([1, 2])", "2");
    assert_value("first([])", "null");
    assert_value("last([])", "null");
    assert_value("set([1, 2, 3], 0, 9)", "[9, 2, 3]");
    assert_error("set([1], 5, 0)", "out of range");
    assert_value("reverse([1, 2, 3])", "[3, 2, 1]");
    assert_value("len(shuffle([1, 2, 3]))", "3");
    assert_value("sort(shuffle([3, 1, 2]))", "[1, 2, 3]");
    assert_error("first(1)", "argument to `first` not supported");
    assert_error(r#"set([1], "0", 2)"#, "argument to `set` not supported: got STRING");
    assert_error(r#"get("abc", true)"#, "argument to `get` not supported: got BOOLEAN");
}

#[test]
fn self_containing_arrays_render() {
    assert_eq!(output_of("let a = [1]; push(a, a); puts(a)"), "[1, [...]]\n");
    assert_eq!(output_of(r#"let a = []; push(a, {"self": a}); puts(a)"#), "[{self: [...]}]\n");
    assert_value("let a = [1]; push(a, a)", "[1, [...]]");
    assert_value("let b = [2]; [b, b]", "[[2], [2]]");
}

#[test]
fn sort_requires_integers() {
    assert_value("sort([3, 1, 2])", "[1, 2, 3]");
    assert_value("let a = [2, 1]; sort(a); a", "[1, 2]");
    assert_error(r#"sort(["a", "b"])"#, "all elements must be INTEGER");

    let mut session = Session::new(buffer_sink());
    session.run(r#"let a = [2, "x", 1]; sort(a);"#);
    match session.run("a") {
        Outcome::Completed(Some(value)) => assert_eq!(value.to_string(), "[2, x, 1]"),
        other => panic!("{other:?}"),
    }
}

#[test]
fn builtin_arity_is_checked() {
    assert_error("len()", "wrong number of arguments to `len`: expected 1, got 0");
    assert_error("push([1])", "wrong number of arguments to `push`: expected 2, got 1");
}

#[test]
fn every_builtin_name_resolves() {
    for name in BUILTIN_FUNCTIONS {
        let builtin = Builtin::lookup(name).unwrap_or_else(|| panic!("{name} is not registered"));
        assert_eq!(builtin.name(), *name);
        assert_value(name, "builtin function");
    }

    assert_eq!(Builtin::lookup("puts").map(|b| b.arity()), Some(Arity::Any));
    assert_eq!(Builtin::lookup("set").map(|b| b.arity()), Some(Arity::Exact(3)));
}

#[test]
fn builtins_are_values() {
    assert_value("len", "builtin function");
    assert_value("len == len", "true");
    assert_value("let size = len; size([1, 2, 3])", "3");
}

#[test]
fn user_function_arity_is_checked() {
    assert_error("fun(a) { a }(1, 2)", "wrong number of arguments: expected 1, got 2");
    assert_error("fun(a, b) { a }(1)", "wrong number of arguments: expected 2, got 1");
}

#[test]
fn puts_writes_to_the_sink() {
    assert_eq!(output_of(r#"puts("hello", 1, [1, 2])"#), "hello 1 [1, 2]\n");
    assert_eq!(output_of("puts()"), "\n");
    assert_value("puts(1)", "null");
}

#[test]
fn runtime_errors() {
    assert_error("1 + true", "type mismatch: INTEGER + BOOLEAN");
    assert_error("-true", "unknown operator: -BOOLEAN");
    assert_error("true + false", "unknown operator: BOOLEAN + BOOLEAN");
    assert_error(r#""a" - "b""#, "unknown operator: STRING - STRING");
    assert_error("foobar", "identifier not found: foobar");
    assert_error("5()", "not a function: INTEGER");
    assert_error("1 / 0", "division by zero");
    assert_error("9223372036854775807 + 1", "integer overflow");
    assert_error("-9223372036854775807 - 2", "integer overflow");
}

#[test]
fn errors_propagate_through_enclosing_expressions() {
    assert_error("let f = fun() { 1 + true }; [f(), 2]", "type mismatch");
    assert_error("if (1 + true) { 1 } else { 2 }", "type mismatch");
    assert_error("-(1 + true)", "type mismatch");
    assert_error(r#"{"a": 1 + true}"#, "type mismatch");
    assert_eq!(output_of(r#"let x = 1 + true; puts("unreached")"#), "");
}

#[test]
fn errors_carry_lines() {
    let mut session = Session::new(buffer_sink());

    let Outcome::Completed(Some(Value::Error(error))) = session.run("let a = 1;\nlet b = a + true;")
    else {
        panic!("expected an error");
    };
    assert_eq!(error.line(), 2);
}

#[test]
fn strings() {
    assert_value(r#""hello" + ", " + "world""#, "hello, world");
    assert_value(r#"let s = "a"; s == s"#, "true");
    assert_value(r#""a" == "a""#, "false");
    assert_value(r#"let s = "a"; s != "a""#, "true");
}

#[test]
fn rendering() {
    assert_value("fun(x, y) { x + y }", "fun(x, y) {\n(x + y)\n}");
    assert_value("1 + true", "ERROR: type mismatch: INTEGER + BOOLEAN");
    assert_value(r#"["a", [true, 1]]"#, "[a, [true, 1]]");
    assert_value(r#"{"k": [1]}"#, "{k: [1]}");
}

#[test]
fn call_depth_limit() {
    let evaluator = Evaluator::new(buffer_sink()).with_max_call_depth(50);
    let mut session = Session::with_evaluator(evaluator);

    match session.run("let f = fun(n) { f(n + 1) }; f(0)") {
        Outcome::Completed(Some(Value::Error(e))) => {
            assert_eq!(e.to_string(), "maximum call depth of 50 exceeded");
        },
        other => panic!("{other:?}"),
    }

    // The depth counter unwinds with the error.
    match session.run("let g = fun(n) { if (n == 0) { 0 } else { g(n - 1) } }; g(40)") {
        Outcome::Completed(Some(Value::Integer(0))) => {},
        other => panic!("{other:?}"),
    }
}

#[test]
fn session_keeps_globals_between_inputs() {
    let mut session = Session::new(buffer_sink());

    session.run("let double = fun(x) { x * 2 };");
    session.run("let n = 21;");
    assert!(matches!(session.run("double(n)"), Outcome::Completed(Some(Value::Integer(42)))));
}

#[test]
fn programs_with_diagnostics_are_not_evaluated() {
    let mut session = Session::new(buffer_sink());

    match session.run("puts(1); let = 2") {
        Outcome::Diagnostics(errors) => assert!(!errors.is_empty()),
        other => panic!("{other:?}"),
    }
    assert_eq!(session.output().contents(), "");
    assert!(session.scope().local_names().is_empty());
}
