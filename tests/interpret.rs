//! Interpreter integration tests
//!
//! Tests the full pipeline: source → parse → check → interpret

use declan::ast::Ast;
use declan::common::RunConfig;
use declan::diagnostics::{ErrorKind, SourceFile};
use declan::interp::Interpreter;
use declan::lexer::{TokenKind, TokenValue, lex};
use declan::value::Value;

/// Helper to interpret source code and return the result
fn interpret(source: &str) -> Result<Value, String> {
    declan::interpret(source).map_err(|e| e.to_string())
}

/// Helper to check the bound result value
fn assert_result(source: &str, expected: Value) {
    match interpret(source) {
        Ok(value) => assert_eq!(value, expected, "source: {}", source),
        Err(e) => panic!("interpretation of `{}` failed: {}", source, e),
    }
}

/// Helper to run one unit through a specific interpreter instance
fn run_unit(interpreter: &mut Interpreter, source: &str) -> Value {
    let ast = declan::analyze(source).unwrap();
    interpreter.interpret(&ast).unwrap()
}

// ==================== Binding Tests ====================

#[test]
fn test_bind_int() {
    assert_result("let x: int = 42;", Value::Int(42));
}

#[test]
fn test_bind_float() {
    assert_result("let f: float = 1.5;", Value::Float(1.5));
}

#[test]
fn test_bind_bool() {
    assert_result("let t: bool = true;", Value::Bool(true));
    assert_result("let f: bool = false;", Value::Bool(false));
}

#[test]
fn test_bind_string() {
    assert_result(r#"let s: string = "abc";"#, Value::String("abc".to_string()));
}

#[test]
fn test_bind_null() {
    assert_result("let n: null = null;", Value::Null);
}

#[test]
fn test_widened_int_keeps_its_tag() {
    // analysis allows int → float, but the stored value is not converted
    assert_result("let f: float = 1;", Value::Int(1));
}

#[test]
fn test_null_initializer_keeps_null_tag() {
    // the declared type is bool, the stored value stays Null
    assert_result("let y: bool = null;", Value::Null);
}

#[test]
fn test_environment_holds_binding() {
    let mut interpreter = Interpreter::new();
    run_unit(&mut interpreter, "let x: int = 42;");

    assert_eq!(interpreter.env().get("x"), Some(Value::Int(42)));
    assert_eq!(interpreter.env().len(), 1);
}

#[test]
fn test_rebind_overwrites() {
    let mut interpreter = Interpreter::new();
    run_unit(&mut interpreter, "let x: int = 1;");
    run_unit(&mut interpreter, r#"let x: string = "hi";"#);

    assert_eq!(
        interpreter.env().get("x"),
        Some(Value::String("hi".to_string()))
    );
    assert_eq!(interpreter.env().len(), 1);
}

#[test]
fn test_absent_declaration_yields_null() {
    let mut interpreter = Interpreter::new();
    let result = interpreter.interpret(&Ast { decl: None }).unwrap();

    assert_eq!(result, Value::Null);
    assert!(interpreter.env().is_empty());
}

// ==================== Echo Mode Tests ====================

fn echo_interpreter() -> Interpreter {
    Interpreter::with_config(&RunConfig {
        echo: true,
        ..RunConfig::default()
    })
}

#[test]
fn test_echo_renders_binding() {
    let mut interpreter = echo_interpreter();
    run_unit(&mut interpreter, "let x: int = 42;");
    assert_eq!(interpreter.output(), ["x: int = 42"]);
}

#[test]
fn test_echo_quotes_strings() {
    let mut interpreter = echo_interpreter();
    run_unit(&mut interpreter, r#"let s: string = "hi";"#);
    assert_eq!(interpreter.output(), ["s: string = \"hi\""]);
}

#[test]
fn test_echo_renders_declared_type_with_null_value() {
    let mut interpreter = echo_interpreter();
    run_unit(&mut interpreter, "let y: bool = null;");
    assert_eq!(interpreter.output(), ["y: bool = null"]);
}

#[test]
fn test_echo_off_by_default() {
    let mut interpreter = Interpreter::new();
    run_unit(&mut interpreter, "let x: int = 42;");
    assert!(interpreter.output().is_empty());
}

// ==================== Pipeline Gating Tests ====================

#[test]
fn test_type_error_stops_before_interpretation() {
    let err = declan::interpret("let x: bool = 42;").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
}

#[test]
fn test_syntax_error_stops_before_interpretation() {
    let err = declan::interpret("let x: int = 1;;").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntax);
}

// ==================== Canonical Text Round Trip ====================

#[test]
fn test_canonical_text_round_trip() {
    assert_eq!(Value::Int(123).to_string(), "123");
    assert_eq!(Value::Float(1.5).to_string(), "1.5");
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::String("hi".to_string()).to_string(), "\"hi\"");
    assert_eq!(Value::Null.to_string(), "null");

    // re-lexing the non-string renderings reproduces the original values
    let rendered = format!(
        "{} {}",
        Value::Int(123).to_string(),
        Value::Float(1.5).to_string()
    );
    let tokens = lex(&SourceFile::new("<round-trip>", rendered)).unwrap();
    assert_eq!(tokens[0].value, TokenValue::Int(123));
    assert_eq!(tokens[1].value, TokenValue::Float(1.5));

    let tokens = lex(&SourceFile::new("<round-trip>", "true null")).unwrap();
    assert_eq!(tokens[0].kind, TokenKind::True);
    assert_eq!(tokens[1].kind, TokenKind::Null);
}
