use raft::{
    ast::{Expr, Stmt, Token, TokenKind},
    error::Diagnostics,
    interpreter::{parser::core::parse, value::core::Value},
    parse_source,
};

fn parse_ok(src: &str) -> Vec<Stmt> {
    let mut diagnostics = Diagnostics::default();
    let statements = parse_source(src, &mut diagnostics);
    assert!(diagnostics.is_empty(), "unexpected errors:\n{diagnostics}");
    statements
}

fn render(src: &str) -> Vec<String> {
    parse_ok(src).iter().map(ToString::to_string).collect()
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(render("1 + 2 * 3;"), ["(; (+ 1 (* 2 3)))"]);
    assert_eq!(render("1 * 2 + 3;"), ["(; (+ (* 1 2) 3))"]);
}

#[test]
fn binary_operators_are_left_associative() {
    assert_eq!(render("1 - 2 - 3;"), ["(; (- (- 1 2) 3))"]);
    assert_eq!(render("8 / 4 / 2;"), ["(; (/ (/ 8 4) 2))"]);
    assert_eq!(render("a == b == c;"), ["(; (== (== a b) c))"]);
}

#[test]
fn assignment_is_right_associative() {
    assert_eq!(render("a = b = 1;"), ["(; (= a (= b 1)))"]);
}

#[test]
fn precedence_ladder() {
    assert_eq!(render("a or b and c == d < e + f * -g;"),
               ["(; (or a (and b (== c (< d (+ e (* f (- g))))))))"]);
    assert_eq!(render("!!true;"), ["(; (! (! true)))"]);
    assert_eq!(render("(1 + 2) * 3;"), ["(; (* (group (+ 1 2)) 3))"]);
}

#[test]
fn literals_round_trip() {
    let statements = parse_ok("\"hello\"; true; nil; 12.5;");
    let literals: Vec<&Expr> = statements.iter()
                                         .map(|statement| match statement {
                                             Stmt::Expression(expr) => expr,
                                             other => panic!("not an expression: {other}"),
                                         })
                                         .collect();

    assert_eq!(literals,
               [&Expr::Literal(Value::from("hello")),
                &Expr::Literal(Value::Boolean(true)),
                &Expr::Literal(Value::Null),
                &Expr::Literal(Value::Number(12.5))]);

    let rendered: Vec<String> = literals.iter()
                                        .map(|expr| match expr {
                                            Expr::Literal(value) => value.to_string(),
                                            other => panic!("not a literal: {other}"),
                                        })
                                        .collect();
    assert_eq!(rendered, ["hello", "true", "nil", "12.5"]);
}

#[test]
fn statements_render() {
    assert_eq!(render("var x; var y = 1; print y; { x = y; }"),
               ["(var x)", "(var y 1)", "(print y)", "(block (; (= x y)))"]);
    assert_eq!(render("if (a) print 1; else print 2;"),
               ["(if a (print 1) (print 2))"]);
    assert_eq!(render("while (a) a = false;"), ["(while a (; (= a false)))"]);
}

#[test]
fn else_binds_to_nearest_if() {
    assert_eq!(render("if (a) if (b) print 1; else print 2;"),
               ["(if a (if b (print 1) (print 2)))"]);
}

#[test]
fn for_loop_is_rewritten_into_while() {
    assert_eq!(render("for (var i = 0; i < 3; i = i + 1) print i;"),
               ["(block (var i 0) (while (< i 3) (block (print i) (; (= i (+ i 1))))))"]);
}

#[test]
fn for_loop_clauses_are_optional() {
    assert_eq!(render("for (;;) print 1;"), ["(while true (print 1))"]);
    assert_eq!(render("for (i = 0; i < 1;) print i;"),
               ["(block (; (= i 0)) (while (< i 1) (print i)))"]);
}

#[test]
fn invalid_assignment_target_is_reported_once() {
    let mut diagnostics = Diagnostics::default();
    let statements = parse_source("1 = 2;", &mut diagnostics);

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics.to_string(),
               "[line 1] Error at '=': Invalid assignment target.");
    // Parsing carries on with the left-hand side.
    assert_eq!(statements, [Stmt::Expression(Expr::Literal(Value::Number(1.0)))]);
}

#[test]
fn recovers_after_each_error() {
    let mut diagnostics = Diagnostics::default();
    let statements = parse_source("print ;\nvar x = 1;\nvar = 2;\nprint x;", &mut diagnostics);

    let lines: Vec<usize> = diagnostics.iter().map(|d| d.line).collect();
    assert_eq!(lines, [1, 3]);
    assert_eq!(statements.iter().map(ToString::to_string).collect::<Vec<_>>(),
               ["(var x 1)", "(print x)"]);
}

#[test]
fn synchronizes_at_statement_keywords() {
    let mut diagnostics = Diagnostics::default();
    let statements = parse_source("1 + ) 2 3 print \"after\";", &mut diagnostics);

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(statements.iter().map(ToString::to_string).collect::<Vec<_>>(),
               ["(print \"after\")"]);
}

#[test]
fn error_inside_block_drops_only_that_statement() {
    let mut diagnostics = Diagnostics::default();
    let statements = parse_source("{ print 1; print ; print 2; }", &mut diagnostics);

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(statements.iter().map(ToString::to_string).collect::<Vec<_>>(),
               ["(block (print 1) (print 2))"]);
}

#[test]
fn unclosed_block_reports_at_end() {
    let mut diagnostics = Diagnostics::default();
    let statements = parse_source("{ print 1;", &mut diagnostics);

    assert!(statements.is_empty());
    assert_eq!(diagnostics.to_string(), "[line 1] Error at end: Expect '}' after block.");
}

#[test]
fn parser_tolerates_missing_eof() {
    let tokens = [Token::new(TokenKind::Print, "print", 1),
                  Token::new(TokenKind::Identifier, "x", 1)];
    let mut diagnostics = Diagnostics::default();

    let statements = parse(&tokens, &mut diagnostics);

    assert!(statements.is_empty());
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn empty_program() {
    assert!(parse_ok("").is_empty());
    assert!(parse_ok("// only a comment\n").is_empty());
}

fn single_error(src: &str) -> String {
    let mut diagnostics = Diagnostics::default();
    parse_source(src, &mut diagnostics);
    assert_eq!(diagnostics.len(), 1, "expected one error for {src:?}:\n{diagnostics}");
    diagnostics.to_string()
}

#[test]
fn missing_semicolons_name_their_statement() {
    assert_eq!(single_error("var x = 1"),
               "[line 1] Error at end: Expect ';' after variable declaration.");
    assert_eq!(single_error("1 + 2"), "[line 1] Error at end: Expect ';' after expression.");
    assert_eq!(single_error("print 1"), "[line 1] Error at end: Expect ';' after value.");
}

#[test]
fn for_clause_errors() {
    assert_eq!(single_error("for i"), "[line 1] Error at 'i': Expect '(' after 'for'.");
    assert_eq!(single_error("for (;1 2)"),
               "[line 1] Error at '2': Expect ';' after loop condition.");
    assert_eq!(single_error("for (;;1 2"),
               "[line 1] Error at '2': Expect ')' after for clauses.");
}

#[test]
fn if_and_while_errors() {
    assert_eq!(single_error("if 1"), "[line 1] Error at '1': Expect '(' after 'if'.");
    assert_eq!(single_error("if (1 2"), "[line 1] Error at '2': Expect ')' after if condition.");
    assert_eq!(single_error("while 1"), "[line 1] Error at '1': Expect '(' after 'while'.");
    assert_eq!(single_error("while (1 2"), "[line 1] Error at '2': Expect ')' after condition.");
}

#[test]
fn recovers_after_broken_for_loop() {
    let mut diagnostics = Diagnostics::default();
    let statements = parse_source("for i\nprint \"ok\";", &mut diagnostics);

    assert_eq!(diagnostics.to_string(), "[line 1] Error at 'i': Expect '(' after 'for'.");
    assert_eq!(statements.iter().map(ToString::to_string).collect::<Vec<_>>(),
               ["(print \"ok\")"]);
}

#[test]
fn recovers_after_broken_declaration_and_group() {
    let mut diagnostics = Diagnostics::default();
    let statements = parse_source("var = 1; print (1; print 3;", &mut diagnostics);

    let messages: Vec<String> = (&diagnostics).into_iter().map(ToString::to_string).collect();
    assert_eq!(messages,
               ["[line 1] Error at '=': Expect variable name.",
                "[line 1] Error at ';': Expect ')' after expression."]);
    assert_eq!(statements.iter().map(ToString::to_string).collect::<Vec<_>>(), ["(print 3)"]);
}

#[test]
fn deep_nesting_is_a_syntax_error() {
    let depth = 10_000;
    let src = format!("print {}1{};\nprint 2;", "(".repeat(depth), ")".repeat(depth));
    let mut diagnostics = Diagnostics::default();
    let statements = parse_source(&src, &mut diagnostics);

    assert_eq!(diagnostics.to_string(), "[line 1] Error at '(': Too much nesting.");
    assert_eq!(statements.iter().map(ToString::to_string).collect::<Vec<_>>(), ["(print 2)"]);

    let src = format!("print {}1;", "-".repeat(depth));
    assert_eq!(single_error(&src), "[line 1] Error at '-': Too much nesting.");
}

#[test]
fn moderate_nesting_parses() {
    let src = format!("print {}1{};", "(".repeat(100), ")".repeat(100));
    assert_eq!(parse_ok(&src).len(), 1);
}
