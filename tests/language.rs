use std::{
    cell::RefCell,
    fs,
    io::{self, Write},
    rc::Rc,
};

use raft::{
    error::{Diagnostics, Error, RuntimeError},
    get_result,
    interpreter::evaluator::core::Context,
    parse_source,
};
use walkdir::WalkDir;

/// A `Write` sink the test can read back after the program is done with it.
#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).expect("output is not UTF-8")
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `src` and returns what it printed along with the outcome.
fn run(src: &str) -> (String, Result<(), Error>) {
    let buffer = SharedBuffer::default();
    let result = get_result(src, Box::new(buffer.clone()));
    (buffer.contents(), result)
}

fn assert_output(src: &str, expected: &str) {
    match run(src) {
        (output, Ok(())) => assert_eq!(output, expected, "unexpected output for:\n{src}"),
        (_, Err(e)) => panic!("Script failed: {e}\n{src}"),
    }
}

fn assert_success(src: &str) {
    if let (_, Err(e)) = run(src) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if let (_, Ok(())) = run(src) {
        panic!("Script succeeded but was expected to fail")
    }
}

fn runtime_error(src: &str) -> RuntimeError {
    match run(src) {
        (_, Err(Error::Runtime(e))) => e,
        (_, other) => panic!("expected a runtime error, got {other:?}"),
    }
}

fn syntax_errors(src: &str) -> Diagnostics {
    match run(src) {
        (_, Err(Error::Syntax(diagnostics))) => diagnostics,
        (_, other) => panic!("expected syntax errors, got {other:?}"),
    }
}

#[test]
fn scripts_print_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "raft"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let expected: String = extract_expectations(&content).into_iter()
                                                             .map(|line| line + "\n")
                                                             .collect();

        count += 1;
        match run(&content) {
            (output, Ok(())) => assert_eq!(output, expected, "output mismatch in {path:?}"),
            (_, Err(e)) => panic!("Script {path:?} failed:\n{e}"),
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn extract_expectations(content: &str) -> Vec<String> {
    content.lines()
           .filter_map(|line| line.split_once("// expect: "))
           .map(|(_, expected)| expected.to_string())
           .collect()
}

#[test]
fn arithmetic_and_precedence() {
    assert_output("print 1 + 2 * 3;", "7\n");
    assert_output("print (1 + 2) * 3;", "9\n");
    assert_output("print 10 - 4 - 3;", "3\n");
    assert_output("print 7 / 2;", "3.5\n");
    assert_output("print -(2 + 3);", "-5\n");
}

#[test]
fn division_by_zero_follows_ieee() {
    assert_output("print 1 / 0;", "inf\n");
    assert_output("print -1 / 0;", "-inf\n");
}

#[test]
fn string_concatenation() {
    assert_output("print \"foo\" + \"bar\";", "foobar\n");
    assert_output("var s = \"a\"; s = s + \"b\"; print s;", "ab\n");
}

#[test]
fn comparisons_and_equality() {
    assert_output("print 1 < 2;", "true\n");
    assert_output("print 2 <= 1;", "false\n");
    assert_output("print 1 == 1;", "true\n");
    assert_output("print 1 == \"1\";", "false\n");
    assert_output("print nil == nil;", "true\n");
    assert_output("print nil == false;", "false\n");
    assert_output("print \"a\" != \"b\";", "true\n");
    assert_output("print clock == clock;", "true\n");
}

#[test]
fn truthiness_in_conditions() {
    assert_output("if (0) print \"yes\"; else print \"no\";", "yes\n");
    assert_output("if (\"\") print \"yes\"; else print \"no\";", "yes\n");
    assert_output("if (nil) print \"yes\"; else print \"no\";", "no\n");
    assert_output("print !nil;", "true\n");
    assert_output("print !0;", "false\n");
}

#[test]
fn logical_operators_return_operands() {
    assert_output("print nil or \"default\";", "default\n");
    assert_output("print \"first\" or \"second\";", "first\n");
    assert_output("print 1 and 2;", "2\n");
    assert_output("print false and 2;", "false\n");
}

#[test]
fn logical_operators_short_circuit() {
    assert_output("print true or missing;", "true\n");
    assert_output("print nil and missing;", "nil\n");
    assert_failure("print false or missing;");
}

#[test]
fn variables_and_assignment() {
    assert_output("var a; print a;", "nil\n");
    assert_output("var a = 1; var a = 2; print a;", "2\n");
    assert_output("var a = 1; print a = 3; print a;", "3\n3\n");
    assert_output("var a; var b; a = b = 4; print a + b;", "8\n");
}

#[test]
fn block_scoping_and_shadowing() {
    assert_output("var a = \"outer\"; { var a = \"inner\"; print a; } print a;",
                  "inner\nouter\n");
    assert_output("var a = 1; { a = 2; } print a;", "2\n");
    assert_failure("{ var hidden = 1; } print hidden;");
}

#[test]
fn while_and_for_loops() {
    assert_output("var i = 0; while (i < 3) { print i; i = i + 1; }", "0\n1\n2\n");
    assert_output("for (var i = 0; i < 3; i = i + 1) print i;", "0\n1\n2\n");
    assert_output("var i = 5; for (; i > 3;) i = i - 1; print i;", "3\n");
    assert_failure("for (var i = 0; i < 1; i = i + 1) {} print i;");
}

#[test]
fn dangling_else_binds_to_nearest_if() {
    assert_output("if (true) if (false) print 1; else print 2;", "2\n");
    assert_output("if (false) if (true) print 1; else print 2;", "");
}

#[test]
fn number_rendering() {
    assert_output("print 3;", "3\n");
    assert_output("print 2.5;", "2.5\n");
    assert_output("print 100 / 4;", "25\n");
}

#[test]
fn native_clock_is_a_callable() {
    assert_output("print clock;", "callable\n");
    assert_success("var t = clock; print t == clock;");
}

#[test]
fn type_errors_are_runtime_errors() {
    assert!(matches!(runtime_error("print -\"a\";"),
                     RuntimeError::OperandMustBeNumber { found: "string", .. }));
    assert!(matches!(runtime_error("print 1 + \"a\";"),
                     RuntimeError::OperandsMustBeNumbersOrStrings { line: 1 }));
    assert!(matches!(runtime_error("print \"a\" * 2;"),
                     RuntimeError::OperandsMustBeNumbers { .. }));
    assert!(matches!(runtime_error("print nil < 1;"),
                     RuntimeError::OperandsMustBeNumbers { .. }));
}

#[test]
fn undefined_variables_are_runtime_errors() {
    let error = runtime_error("print 1;\n\nprint missing;");
    assert!(matches!(&error, RuntimeError::UndefinedVariable { name, line: 3 } if name == "missing"));
    assert_eq!(error.to_string(), "Error on line 3: Undefined variable 'missing'.");

    assert!(matches!(runtime_error("undeclared = 1;"),
                     RuntimeError::UndefinedVariable { .. }));
}

#[test]
fn runtime_error_keeps_earlier_output() {
    let (output, result) = run("print \"before\";\nprint -nil;\nprint \"after\";");
    assert_eq!(output, "before\n");
    assert!(matches!(result, Err(Error::Runtime(RuntimeError::OperandMustBeNumber { line: 2, .. }))));
}

#[test]
fn syntax_errors_prevent_execution() {
    let (output, result) = run("print \"never\";\nprint ;");
    assert_eq!(output, "");
    assert!(matches!(result, Err(Error::Syntax(_))));
}

#[test]
fn all_syntax_errors_are_reported() {
    let diagnostics = syntax_errors("var = 1;\nprint 1\nvar ok = 2;\n(1 + 2;");
    let messages: Vec<String> = diagnostics.iter().map(ToString::to_string).collect();

    assert_eq!(messages,
               ["[line 1] Error at '=': Expect variable name.",
                "[line 3] Error at 'var': Expect ';' after value.",
                "[line 4] Error at ';': Expect ')' after expression."]);
}

#[test]
fn invalid_assignment_target() {
    let diagnostics = syntax_errors("var a = 1;\na + 1 = 2;");
    assert_eq!(diagnostics.to_string(),
               "[line 2] Error at '=': Invalid assignment target.");
}

#[test]
fn scan_errors_are_reported() {
    let diagnostics = syntax_errors("print 1 @ 2;");
    let first = diagnostics.iter().next().expect("no diagnostics");
    assert_eq!(first.to_string(), "[line 1] Error at '@': Unexpected character.");

    let diagnostics = syntax_errors("print \"open;\n");
    assert!(diagnostics.iter()
                       .any(|d| d.message == "at end: Unterminated string."));
}

#[test]
fn context_persists_between_runs() {
    let buffer = SharedBuffer::default();
    let mut context = Context::with_output(Box::new(buffer.clone()));

    for line in ["var count = 1;", "count = count + 1;", "print count;"] {
        let mut diagnostics = Diagnostics::default();
        let statements = parse_source(line, &mut diagnostics);
        assert!(diagnostics.is_empty());
        context.execute(&statements).expect("runtime error");
    }

    assert_eq!(buffer.contents(), "2\n");
}

#[test]
fn failed_block_still_drops_its_scope() {
    let mut context = Context::with_output(Box::new(io::sink()));
    let mut diagnostics = Diagnostics::default();

    let statements = parse_source("{ var inner = 1; print -\"x\"; }", &mut diagnostics);
    assert!(context.execute(&statements).is_err());
    assert!(context.get_variable("inner").is_none());

    let statements = parse_source("var after = 2;", &mut diagnostics);
    context.execute(&statements).expect("runtime error");
    assert!(context.get_variable("after").is_some());
}

/// A sink that rejects every write.
struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn output_failure_reports_the_print_line() {
    let result = get_result("var x = 1;\n\nprint \"literal\";", Box::new(ClosedPipe));

    match result {
        Err(Error::Runtime(error @ RuntimeError::Io { .. })) => {
            assert_eq!(error.line(), 3);
            assert!(error.to_string().starts_with("Error on line 3: Failed to write output"));
        },
        other => panic!("expected an output error, got {other:?}"),
    }
}
