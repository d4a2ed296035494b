use pretty_assertions::assert_eq;
use southscript::{
    error::{Error, lex_error::LexErrorKind},
    interpreter::session::Interpreter,
    run,
};

fn failure(src: &str) -> Error {
    match run(src) {
        Ok(value) => panic!("Script succeeded with {value:?} but was expected to fail"),
        Err(e) => e,
    }
}

fn lex_kind(src: &str) -> LexErrorKind {
    match failure(src) {
        Error::Lex(e) => e.kind,
        other => panic!("Expected a lexical error, got:\n{other}"),
    }
}

#[test]
fn bad_character() {
    assert_eq!(failure("1 + @").to_string(),
               "File <stdin>, line 1\nCattywampus! Bad Character: '@'");
    assert_eq!(lex_kind("1.2.3"), LexErrorKind::BadCharacter);
    assert_eq!(lex_kind("'"), LexErrorKind::BadCharacter);
}

#[test]
fn lone_bang() {
    assert_eq!(failure("1 ! 2").to_string(),
               "File <stdin>, line 1\nCattywampus! Missing Character: '=' after '!'");
}

#[test]
fn unterminated_text() {
    assert_eq!(failure("\"abc").to_string(),
               "File <stdin>, line 1\nCattywampus! Unterminated Text: Expected closing '\"'");
    assert_eq!(lex_kind("\"abc\\\""), LexErrorKind::UnterminatedText);
}

#[test]
fn integer_literal_too_large() {
    assert_eq!(failure("99999999999999999999").to_string(),
               "File <stdin>, line 1\n\
                Cattywampus! Literal Too Large: '99999999999999999999' is too large");
    assert!(run("9223372036854775807").is_ok());
}

#[test]
fn lex_errors_report_their_line() {
    assert_eq!(failure("1 +\n\n  @").to_string(),
               "File <stdin>, line 3\nCattywampus! Bad Character: '@'");
}

#[test]
fn syntax_errors() {
    let cases = [("TROT i = 1 THEN 1", "Expected 'T''"),
                 ("RECKON 1 1", "Expected 'THEN'"),
                 ("1 2", "Expected an operator or the end of input"),
                 ("[1 2]", "Expected ',' or ']'"),
                 ("f(1 2)", "Expected ',' or ')'"),
                 ("FIXIN' f(x) x", "Expected '->'"),
                 ("FIXIN' 1", "Expected name or '('"),
                 ("THANG = 1", "Expected name"),
                 ("(1", "Expected ')'")];

    for (src, expected) in cases {
        match failure(src) {
            Error::Syntax(e) => assert_eq!(e.details, expected, "{src}"),
            other => panic!("Expected a syntax error for {src}, got:\n{other}"),
        }
    }
}

#[test]
fn missing_atom_lists_the_alternatives() {
    assert_eq!(failure(")").to_string(),
               "File <stdin>, line 1\n\
                Cattywampus! Syntax Problem: Expected number, text, name, '+', '-', '(', '[', \
                'RECKON', 'TROT', 'WHILES', 'FIXIN'' or 'AIN'T'");
}

#[test]
fn syntax_error_points_at_the_offending_token() {
    let Error::Syntax(e) = failure("TROT i = 1\n  THEN 1") else {
        panic!("expected a syntax error");
    };

    assert_eq!((e.span.start.line, e.span.start.column), (1, 2));
    assert_eq!(e.to_string(),
               "File <stdin>, line 2\nCattywampus! Syntax Problem: Expected 'T''");
}

#[test]
fn top_level_runtime_error() {
    assert_eq!(failure("1 / 0").to_string(),
               "File <stdin>, line 1, in <main>\n\
                Cattywampus! Division By Zero: Division by zero");
}

#[test]
fn runtime_error_traceback_follows_calls() {
    let src = "[\n    FIXIN' boom(x) -> x / 0,\n    boom(1)\n]";
    let Error::Runtime(e) = failure(src) else {
        panic!("expected a runtime error");
    };

    let frames: Vec<_> = e.traceback()
                          .into_iter()
                          .map(|(pos, frame)| (pos.line_number(), frame))
                          .collect();
    assert_eq!(frames, vec![(3, "<main>".to_string()), (2, "boom".to_string())]);
    assert_eq!(e.to_string(),
               "File <stdin>, line 3, in <main>\n\
                File <stdin>, line 2, in boom\n\
                Cattywampus! Division By Zero: Division by zero");
}

#[test]
fn traceback_through_nested_calls() {
    let src = "[\n\
               FIXIN' inner() -> ghost,\n\
               FIXIN' outer() -> inner(),\n\
               outer()\n\
               ]";
    assert_eq!(failure(src).to_string(),
               "File <stdin>, line 4, in <main>\n\
                File <stdin>, line 3, in outer\n\
                File <stdin>, line 2, in inner\n\
                Cattywampus! Undefined Variable: 'ghost' ain't defined");
}

#[test]
fn builtin_errors_name_the_builtin_frame() {
    assert_eq!(failure("YANK([], 0)").to_string(),
               "File <stdin>, line 1, in <main>\n\
                File <stdin>, line 1, in YANK\n\
                Cattywampus! Index Out Of Bounds: Index 0 out of range");
}

#[test]
fn arity_errors_are_reported_by_the_caller() {
    assert_eq!(failure("HOLLER(1, 2)").to_string(),
               "File <stdin>, line 1, in <main>\n\
                Cattywampus! Arity Mismatch: Too many arguments passed to 'HOLLER'");
}

#[test]
fn errors_name_their_source() {
    let interpreter = Interpreter::new();
    let Err(e) = interpreter.run("scripts/demo.south", "\n\nghost") else {
        panic!("expected an error");
    };

    assert_eq!(e.to_string(),
               "File scripts/demo.south, line 3, in <main>\n\
                Cattywampus! Undefined Variable: 'ghost' ain't defined");
}
