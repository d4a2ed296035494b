use pretty_assertions::assert_eq;
use southscript::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::{Error, SyntaxError},
    interpreter::{lexer::tokenize, parser::core::parse},
};

fn parse_source(src: &str) -> Expr {
    try_parse(src).unwrap_or_else(|e| panic!("Failed to parse {src:?}:\n{e}"))
}

fn try_parse(src: &str) -> Result<Expr, Error> {
    let lexemes = tokenize("<stdin>", src)?;
    Ok(parse(&lexemes)?)
}

fn syntax_error(src: &str) -> SyntaxError {
    match try_parse(src) {
        Err(Error::Syntax(e)) => e,
        other => panic!("Expected a syntax error for {src:?}, got {other:?}"),
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let Expr::BinaryOp { op, left, right, .. } = parse_source("1 + 2 * 3") else {
        panic!("expected a binary operation");
    };

    assert_eq!(op, BinaryOperator::Add);
    assert!(matches!(*left, Expr::Number { value, .. } if value == 1.0));
    assert!(matches!(*right, Expr::BinaryOp { op: BinaryOperator::Mul, .. }));
}

#[test]
fn binary_operators_are_left_associative() {
    let Expr::BinaryOp { op, left, right, .. } = parse_source("1 - 2 - 3") else {
        panic!("expected a binary operation");
    };

    assert_eq!(op, BinaryOperator::Sub);
    assert!(matches!(*left, Expr::BinaryOp { op: BinaryOperator::Sub, .. }));
    assert!(matches!(*right, Expr::Number { value, .. } if value == 3.0));
}

#[test]
fn logic_has_the_lowest_precedence() {
    let Expr::BinaryOp { op, left, right, .. } = parse_source("1 < 2 AN' 3 + 1 OR 0") else {
        panic!("expected a binary operation");
    };

    assert_eq!(op, BinaryOperator::Or);
    assert!(matches!(*right, Expr::Number { .. }));
    let Expr::BinaryOp { op, left, right, .. } = *left else {
        panic!("expected a binary operation");
    };
    assert_eq!(op, BinaryOperator::And);
    assert!(matches!(*left, Expr::BinaryOp { op: BinaryOperator::Less, .. }));
    assert!(matches!(*right, Expr::BinaryOp { op: BinaryOperator::Add, .. }));
}

#[test]
fn aint_negates_a_whole_comparison() {
    let Expr::UnaryOp { op, operand, .. } = parse_source("AIN'T 1 == 2") else {
        panic!("expected a unary operation");
    };

    assert_eq!(op, UnaryOperator::Not);
    assert!(matches!(*operand, Expr::BinaryOp { op: BinaryOperator::Equal, .. }));
}

#[test]
fn prefix_minus_binds_tighter_than_multiplication() {
    let Expr::BinaryOp { op, left, .. } = parse_source("-2 * 3") else {
        panic!("expected a binary operation");
    };

    assert_eq!(op, BinaryOperator::Mul);
    assert!(matches!(*left, Expr::UnaryOp { op: UnaryOperator::Negate, .. }));
}

#[test]
fn calls_chain() {
    let Expr::Call { callee, arguments, .. } = parse_source("make(1)(2, 3,)") else {
        panic!("expected a call");
    };

    assert_eq!(arguments.len(), 2);
    let Expr::Call { callee, arguments, .. } = *callee else {
        panic!("expected a nested call");
    };
    assert_eq!(arguments.len(), 1);
    assert!(matches!(*callee, Expr::Identifier { ref name, .. } if name == "make"));
}

#[test]
fn assignment_value_is_a_full_expression() {
    let Expr::Assignment { name, value, .. } = parse_source("THANG x = THANG y = 1 OR 0") else {
        panic!("expected an assignment");
    };

    assert_eq!(name, "x");
    assert!(matches!(*value, Expr::Assignment { ref name, .. } if name == "y"));
}

#[test]
fn conditional_clauses() {
    let Expr::Conditional { cases, default, .. } =
        parse_source("RECKON a THEN 1 MIGHTCOULD b THEN 2 MIGHTCOULD c THEN 3 ELSE 4")
    else {
        panic!("expected a conditional");
    };

    assert_eq!(cases.len(), 3);
    assert!(matches!(cases[1].condition, Expr::Identifier { ref name, .. } if name == "b"));
    assert!(default.is_some());

    let Expr::Conditional { default, .. } = parse_source("RECKON a THEN 1") else {
        panic!("expected a conditional");
    };
    assert!(default.is_none());
}

#[test]
fn for_loop_parts() {
    let Expr::ForLoop { var, step, body, .. } =
        parse_source("TROT i = 10 T' 0 BY_A_PEICE -2 THEN i * i")
    else {
        panic!("expected a for loop");
    };

    assert_eq!(var, "i");
    assert!(matches!(step.as_deref(), Some(Expr::UnaryOp { op: UnaryOperator::Negate, .. })));
    assert!(matches!(*body, Expr::BinaryOp { op: BinaryOperator::Mul, .. }));

    let Expr::ForLoop { step, .. } = parse_source("TROT i = 1 T' 3 THEN i") else {
        panic!("expected a for loop");
    };
    assert!(step.is_none());
}

#[test]
fn while_loop_body_forms() {
    let Expr::WhileLoop { body, .. } = parse_source("WHILES x THEN") else {
        panic!("expected a while loop");
    };
    assert!(body.is_none());

    let Expr::WhileLoop { body, .. } = parse_source("WHILES x THEN y") else {
        panic!("expected a while loop");
    };
    assert!(matches!(body.as_deref(), Some(Expr::Identifier { .. })));

    let Expr::WhileLoop { body, .. } = parse_source("WHILES x THEN y, z w") else {
        panic!("expected a while loop");
    };
    assert!(matches!(body.as_deref(), Some(Expr::List { items, .. }) if items.len() == 3));
}

#[test]
fn while_loop_body_stops_at_a_closing_bracket() {
    let Expr::List { items, .. } = parse_source("[WHILES x THEN y, z]") else {
        panic!("expected a list");
    };

    assert_eq!(items.len(), 1);
    assert!(matches!(&items[0], Expr::WhileLoop { body: Some(body), .. }
                     if matches!(**body, Expr::List { ref items, .. } if items.len() == 2)));
}

#[test]
fn function_definitions() {
    let Expr::FunctionDef { def, .. } = parse_source("FIXIN' add(a, b) -> a + b") else {
        panic!("expected a function definition");
    };
    assert_eq!(def.name.as_deref(), Some("add"));
    assert_eq!(def.params, vec!["a".to_string(), "b".to_string()]);

    let Expr::FunctionDef { def, .. } = parse_source("FIXIN' () -> 1") else {
        panic!("expected a function definition");
    };
    assert_eq!(def.name, None);
    assert!(def.params.is_empty());
}

#[test]
fn parentheses_do_not_create_nodes() {
    assert!(matches!(parse_source("((x))"), Expr::Identifier { ref name, .. } if name == "x"));
}

#[test]
fn composite_spans_cover_their_tokens() {
    let expr = parse_source("1 + 23");
    let span = expr.span();

    assert_eq!((span.start.column, span.end.column), (0, 6));

    let expr = parse_source("[1,\n 2]");
    let span = expr.span();
    assert_eq!((span.start.line, span.end.line, span.end.column), (0, 1, 3));
}

#[test]
fn empty_program_is_an_error() {
    let e = syntax_error("");
    assert!(e.details.starts_with("Expected number, text, name"), "{}", e.details);
}

#[test]
fn error_position_is_the_unexpected_token() {
    let e = syntax_error("TROT i = 1 THEN 1");

    assert_eq!(e.details, "Expected 'T''");
    assert_eq!(e.span.start.column, 11);
}

#[test]
fn leftover_tokens_are_an_error() {
    let e = syntax_error("x y");

    assert_eq!(e.details, "Expected an operator or the end of input");
    assert_eq!(e.span.start.column, 2);
}
