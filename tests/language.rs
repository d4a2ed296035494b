use std::fs;

use pretty_assertions::assert_eq;
use southscript::{
    error::{Error, RuntimeErrorKind},
    interpreter::{session::Interpreter, value::core::Value},
    run,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_southscript_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = run(&code) {
                panic!("SouthScript example {} in {:?} failed:\n{}\nError:\n{}",
                       i + 1,
                       path,
                       code,
                       e);
            }
        }
    }

    assert!(count > 0, "No SouthScript examples found in book/src");
}

fn extract_southscript_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```southscript") {
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

fn assert_success(src: &str) -> Option<Value> {
    run(src).unwrap_or_else(|e| panic!("Script failed:\n{e}"))
}

fn assert_failure(src: &str) -> Error {
    match run(src) {
        Ok(value) => panic!("Script succeeded with {value:?} but was expected to fail"),
        Err(e) => e,
    }
}

/// Runs `src` and returns the printed form of its value.
fn output(src: &str) -> String {
    assert_success(src).map(|v| v.to_string())
                       .unwrap_or_else(|| panic!("Script produced no value: {src}"))
}

fn runtime_failure(src: &str) -> (RuntimeErrorKind, String) {
    match assert_failure(src) {
        Error::Runtime(e) => (e.kind, e.details),
        other => panic!("Expected a runtime error, got:\n{other}"),
    }
}

#[test]
fn number_arithmetic_and_precedence() {
    assert_eq!(output("1 + 2 * 3"), "7");
    assert_eq!(output("(1 + 2) * 3"), "9");
    assert_eq!(output("7 - 10"), "-3");
    assert_eq!(output("7 / 2"), "3.5");
    assert_eq!(output("10 - 4 - 3"), "3");
    assert_eq!(output("-3 * -2"), "6");
    assert_eq!(output("- -4"), "4");
    assert_eq!(output("+5"), "5");
    assert_eq!(output("2.5 * 2"), "5");
}

#[test]
fn integer_division_matches_the_quotient() {
    for (a, b) in [(9, 3), (-8, 2), (1, 4), (7, -2)] {
        let expected = f64::from(a) / f64::from(b);
        assert_eq!(assert_success(&format!("{a} / {b}")),
                   Some(Value::from(expected)),
                   "{a} / {b}");
    }
}

#[test]
fn division_by_zero_is_error() {
    assert_eq!(runtime_failure("1 / 0").0, RuntimeErrorKind::DivisionByZero);
    assert_eq!(runtime_failure("1 / (2 - 2.0)").0, RuntimeErrorKind::DivisionByZero);
}

#[test]
fn text_concatenation_and_repetition() {
    assert_eq!(output(r#""ab" + "cd""#), "abcd");
    assert_eq!(output(r#""ab" * 3"#), "ababab");
    assert_eq!(output(r#""ab" * 2.7"#), "abab");
    assert_eq!(output(r#""ab" * -1"#), "");
    assert_eq!(output(r#"-"abc""#), "");
    assert_eq!(output(r#""tab\tand \"quotes\"""#), "tab\tand \"quotes\"");
}

#[test]
fn text_repetition_has_a_length_limit() {
    let (kind, details) = runtime_failure(r#""ab" * 1000000000000000"#);
    assert_eq!(kind, RuntimeErrorKind::InvalidOperation);
    assert_eq!(details, "Text repeated too many times");

    assert_eq!(output(r#""" * 1000000000000000"#), "");
}

#[test]
fn mixing_text_and_numbers_is_invalid() {
    let (kind, details) = runtime_failure(r#""a" + 1"#);
    assert_eq!(kind, RuntimeErrorKind::InvalidOperation);
    assert_eq!(details, "Cannot apply '+' to text and number");

    assert_eq!(runtime_failure(r#""a" == "a""#).0, RuntimeErrorKind::InvalidOperation);
    assert_eq!(runtime_failure("AIN'T [1]").0, RuntimeErrorKind::InvalidOperation);
}

#[test]
fn list_operators() {
    assert_eq!(output("[]"), "[]");
    assert_eq!(output("[1, 2,]"), "[1, 2]");
    assert_eq!(output("[1, 2] + 3"), "[1, 2, 3]");
    assert_eq!(output("[1, 2] + [3]"), "[1, 2, [3]]");
    assert_eq!(output("[1, 2, 3] - 0"), "[2, 3]");
    assert_eq!(output("[1, 2, 3] - -1"), "[1, 2]");
    assert_eq!(output("[1, 2] * [3]"), "[1, 2, 3]");
    assert_eq!(output("[10, 20, 30] / 1"), "20");
    assert_eq!(output("[10, 20, 30] / -1"), "30");
    assert_eq!(output(r#"[1, "two", [3]]"#), "[1, two, [3]]");
}

#[test]
fn list_indices_must_be_in_bounds_and_integral() {
    assert_eq!(runtime_failure("[10, 20] / 2").0, RuntimeErrorKind::IndexOutOfBounds);
    assert_eq!(runtime_failure("[10, 20] / -3").0, RuntimeErrorKind::IndexOutOfBounds);
    assert_eq!(runtime_failure("[10, 20] / 0.5").0, RuntimeErrorKind::IndexOutOfBounds);
    assert_eq!(runtime_failure("[] - 0").0, RuntimeErrorKind::IndexOutOfBounds);
    assert_eq!(runtime_failure(r#"[1] / "0""#).0, RuntimeErrorKind::InvalidOperation);
}

#[test]
fn list_operators_never_alias_their_operands() {
    assert_eq!(output("[THANG a = [1], THANG b = a + 2, THANG c = a * [3], a, b, c]"),
               "[[1], [1, 2], [1, 3], [1], [1, 2], [1, 3]]");
}

#[test]
fn list_operators_copy_nested_lists() {
    let interpreter = Interpreter::new();
    for line in ["THANG xs = [1]",
                 "THANG added = xs + xs",
                 "THANG joined = [xs] * [xs]",
                 "THANG dropped = [0, xs] - 0",
                 "SHOVE(xs, 2)"]
    {
        interpreter.run("<stdin>", line).unwrap();
    }

    let show = |name: &str| interpreter.run("<stdin>", name).unwrap().unwrap().to_string();
    assert_eq!(show("xs"), "[1, 2]");
    assert_eq!(show("added"), "[1, [1]]");
    assert_eq!(show("joined"), "[[1], [1]]");
    assert_eq!(show("dropped"), "[[1]]");
}

#[test]
fn comparisons_produce_one_or_zero() {
    assert_eq!(output("1 < 2"), "1");
    assert_eq!(output("2 <= 1"), "0");
    assert_eq!(output("3 == 3"), "1");
    assert_eq!(output("3 != 3"), "0");
    assert_eq!(output("4 >= 4"), "1");
    assert_eq!(output("1 + 1 > 1"), "1");
}

#[test]
fn logical_operators() {
    assert_eq!(output("1 AN' 0"), "0");
    assert_eq!(output("2 AN' 3"), "1");
    assert_eq!(output("0 OR 0"), "0");
    assert_eq!(output("0 OR -1"), "1");
    assert_eq!(output("AIN'T 0"), "1");
    assert_eq!(output("AIN'T 1 == 2"), "1");
    assert_eq!(output("TRUE AN' FALSE OR TRUE"), "1");
}

#[test]
fn logical_operators_evaluate_both_operands() {
    assert_eq!(output("[THANG x = 0, 0 AN' (THANG x = 5), x]"), "[0, 0, 5]");
    assert_eq!(output("[THANG y = 0, 1 OR (THANG y = 7), y]"), "[0, 1, 7]");
}

#[test]
fn conditionals() {
    assert_eq!(output("RECKON FALSE THEN 1 ELSE 2"), "2");
    assert_eq!(output("RECKON FALSE THEN 1 MIGHTCOULD TRUE THEN 3 ELSE 2"), "3");
    assert_eq!(output("RECKON 1 < 2 THEN \"yes\" ELSE \"no\""), "yes");
    assert_eq!(assert_success("RECKON FALSE THEN 1"), None);
    assert_eq!(assert_success("RECKON 0 THEN 1 MIGHTCOULD 0 THEN 2"), None);
}

#[test]
fn conditionals_stop_at_the_first_true_case() {
    assert_eq!(output("[THANG x = 0, RECKON TRUE THEN 1 MIGHTCOULD (THANG x = 9) THEN 2, x]"),
               "[0, 1, 0]");
}

#[test]
fn missing_value_where_one_is_required() {
    let (kind, details) = runtime_failure("1 + (RECKON FALSE THEN 1)");
    assert_eq!(kind, RuntimeErrorKind::InvalidOperation);
    assert_eq!(details, "expression produced no value");

    assert_eq!(runtime_failure("THANG x = RECKON FALSE THEN 1").0,
               RuntimeErrorKind::InvalidOperation);
}

#[test]
fn for_loops_collect_their_body() {
    assert_eq!(output("TROT i = 1 T' 3 THEN i * 2"), "[2, 4, 6]");
    assert_eq!(output("TROT i = 10 T' 1 BY_A_PEICE -3 THEN i"), "[10, 7, 4, 1]");
    assert_eq!(output("TROT i = 0 T' 1 BY_A_PEICE 0.5 THEN i"), "[0, 0.5, 1]");
    assert_eq!(output("TROT i = 1 T' 0 THEN i"), "[]");
    assert_eq!(output("TROT i = 1 T' 2 THEN TROT j = 1 T' i THEN j"), "[[1], [1, 2]]");
}

#[test]
fn for_loops_skip_iterations_without_a_value() {
    assert_eq!(output("TROT i = 1 T' 4 THEN RECKON i > 2 THEN i"), "[3, 4]");
}

#[test]
fn for_loop_step_of_zero_is_error() {
    let (kind, details) = runtime_failure("TROT i = 1 T' 3 BY_A_PEICE 0 THEN i");
    assert_eq!(kind, RuntimeErrorKind::StepIsZero);
    assert_eq!(details, "Step value cannot be zero");

    assert_eq!(runtime_failure(r#"TROT i = "a" T' 3 THEN i"#).0,
               RuntimeErrorKind::InvalidOperation);
}

#[test]
fn for_loop_variable_persists_after_the_loop() {
    assert_eq!(output("[TROT i = 1 T' 3 THEN i, i]"), "[[1, 2, 3], 3]");
}

#[test]
fn while_loops() {
    assert_eq!(output("WHILES FALSE THEN 1"), "[]");
    assert_eq!(output("[THANG n = 3, WHILES n > 0 THEN THANG n = n - 1]"), "[3, [2, 1, 0]]");
}

#[test]
fn while_loop_body_reads_several_expressions() {
    assert_eq!(output("[THANG n = 0, WHILES n < 2 THEN THANG n = n + 1, n * 10]"),
               "[0, [[1, 10], [2, 20]]]");
}

#[test]
fn while_loop_without_a_body_checks_its_condition_once() {
    assert_eq!(output("WHILES TRUE THEN"), "[]");
    assert_eq!(runtime_failure("WHILES ghost THEN").0, RuntimeErrorKind::UndefinedVariable);
}

#[test]
fn recursive_functions() {
    assert_eq!(output("[FIXIN' fact(n) -> RECKON n <= 1 THEN 1 ELSE n * fact(n - 1), fact(5)] / 1"),
               "120");
    assert_eq!(output("[FIXIN' fib(n) -> RECKON n < 2 THEN n ELSE fib(n - 1) + fib(n - 2), \
                       TROT i = 0 T' 7 THEN fib(i)] / 1"),
               "[0, 1, 1, 2, 3, 5, 8, 13]");
}

#[test]
fn functions_are_values() {
    assert_eq!(output("FIXIN' twice(x) -> x * 2"), "<function twice>");
    assert_eq!(output("FIXIN' (x) -> x"), "<function <anonymous>>");
    assert_eq!(output("(FIXIN' (a, b) -> a - b)(5, 3)"), "2");
    assert_eq!(output("[FIXIN' apply(f, x) -> f(x), apply(FIXIN' (n) -> n * n, 7)] / 1"),
               "49");
}

#[test]
fn closures_capture_their_defining_scope() {
    assert_eq!(output("[FIXIN' make(n) -> FIXIN' (x) -> x + n, make(10)(5)] / 1"), "15");
    assert_eq!(output("[FIXIN' make(n) -> FIXIN' (x) -> x + n, THANG add2 = make(2), \
                       THANG n = 100, add2(1)] / -1"),
               "3");
}

#[test]
fn functions_resolve_globals_when_called() {
    assert_eq!(output("[FIXIN' g() -> y, THANG y = 7, g()] / -1"), "7");
}

#[test]
fn wrong_function_arity_is_error() {
    let (kind, details) = runtime_failure("[FIXIN' add(a, b) -> a + b, add(1)]");
    assert_eq!(kind, RuntimeErrorKind::ArityMismatch);
    assert_eq!(details, "Too few arguments passed to 'add'");

    let (kind, details) = runtime_failure("[FIXIN' add(a, b) -> a + b, add(1, 2, 3)]");
    assert_eq!(kind, RuntimeErrorKind::ArityMismatch);
    assert_eq!(details, "Too many arguments passed to 'add'");
}

#[test]
fn calling_a_non_function_is_error() {
    let (kind, details) = runtime_failure("5(1)");
    assert_eq!(kind, RuntimeErrorKind::InvalidOperation);
    assert_eq!(details, "Cannot call a number");
}

#[test]
fn unknown_variable_is_error() {
    let (kind, details) = runtime_failure("ghost + 1");
    assert_eq!(kind, RuntimeErrorKind::UndefinedVariable);
    assert_eq!(details, "'ghost' ain't defined");
}

#[test]
fn assignments_inside_functions_stay_local() {
    assert_eq!(runtime_failure("[FIXIN' f() -> THANG inner = 1, f(), inner]").1,
               "'inner' ain't defined");
    assert_eq!(output("[THANG x = 1, FIXIN' f() -> THANG x = 2, f(), x]"),
               "[1, <function f>, 2, 1]");
}

#[test]
fn reading_a_variable_copies_its_value() {
    let interpreter = Interpreter::new();
    interpreter.run("<stdin>", "THANG a = 5").unwrap();
    interpreter.run("<stdin>", "THANG b = a").unwrap();
    interpreter.run("<stdin>", "THANG a = 6").unwrap();

    assert_eq!(interpreter.run("<stdin>", "b").unwrap(), Some(Value::from(5.0)));
    assert_eq!(interpreter.run("<stdin>", "a").unwrap(), Some(Value::from(6.0)));
}

#[test]
fn truthiness_of_every_type() {
    assert_eq!(output("RECKON 0 THEN 1 ELSE 2"), "2");
    assert_eq!(output("RECKON 0.1 THEN 1 ELSE 2"), "1");
    assert_eq!(output(r#"RECKON "" THEN 1 ELSE 2"#), "2");
    assert_eq!(output(r#"RECKON "x" THEN 1 ELSE 2"#), "1");
    assert_eq!(output("RECKON [] THEN 1 ELSE 2"), "2");
    assert_eq!(output("RECKON [0] THEN 1 ELSE 2"), "1");
    assert_eq!(output("RECKON FIXIN' (x) -> x THEN 1 ELSE 2"), "1");
    assert_eq!(output("RECKON HOLLER THEN 1 ELSE 2"), "1");
}

#[test]
fn constants_are_predefined() {
    assert_eq!(output("[NULL, TRUE, FALSE]"), "[0, 1, 0]");
}

#[test]
fn comments_and_line_breaks() {
    assert_eq!(output("THANG x = 1 # the answer, more or less\n"), "1");
    assert_eq!(output("[\n    1, # first\n    2\n]"), "[1, 2]");
}

#[test]
fn session_keeps_bindings_between_runs() {
    let interpreter = Interpreter::new();
    interpreter.run("<stdin>", "FIXIN' square(x) -> x * x").unwrap();

    assert_eq!(interpreter.run("<stdin>", "square(12)").unwrap(), Some(Value::from(144.0)));
    assert!(interpreter.globals().contains_local("square"));
}

#[test]
fn scripts_load_into_the_global_scope() {
    let interpreter = Interpreter::new();
    let loaded = interpreter.run("<stdin>", r#"FIREUP("tests/scripts/greeting.south")"#)
                            .unwrap();
    assert_eq!(loaded, Some(Value::from(0.0)));

    let greeting = interpreter.run("<stdin>", r#"shout("y'all")"#).unwrap();
    assert_eq!(greeting.map(|v| v.to_string()),
               Some("howdyhowdy, y'all".to_string()));
}

#[test]
fn failing_scripts_report_the_inner_error() {
    let (kind, details) = runtime_failure(r#"FIREUP("tests/scripts/broken.south")"#);
    assert_eq!(kind, RuntimeErrorKind::ScriptFailed);
    assert!(details.starts_with("Script execution failed:\n"), "{details}");
    assert!(details.contains("Cattywampus! Division By Zero: Division by zero"),
            "{details}");
}

#[test]
fn missing_scripts_fail_to_load() {
    let (kind, details) = runtime_failure(r#"FIREUP("tests/scripts/missing.south")"#);
    assert_eq!(kind, RuntimeErrorKind::ScriptLoadFailed);
    assert!(details.starts_with("Failed to load script 'tests/scripts/missing.south': "),
            "{details}");

    assert_eq!(runtime_failure("FIREUP(1)").0, RuntimeErrorKind::InvalidArgumentType);
}
