//! Semantic analyzer tests

use pretty_assertions::assert_eq;

use declan::analyze;
use declan::check::Checker;
use declan::diagnostics::{Diagnostic, ErrorKind};

fn assert_checks(source: &str) {
    if let Err(e) = analyze(source) {
        panic!("analysis of `{}` failed: {}", source, e);
    }
}

fn check_error(source: &str) -> Diagnostic {
    match analyze(source) {
        Ok(_) => panic!("analysis of `{}` unexpectedly succeeded", source),
        Err(e) => e,
    }
}

#[test]
fn test_identical_types_check() {
    assert_checks("let a: int = 42;");
    assert_checks("let b: float = 1.5;");
    assert_checks("let c: bool = true;");
    assert_checks(r#"let d: string = "hi";"#);
    assert_checks("let e: null = null;");
}

#[test]
fn test_null_literal_checks_against_every_type() {
    assert_checks("let a: int = null;");
    assert_checks("let b: float = null;");
    assert_checks("let c: bool = null;");
    assert_checks("let d: string = null;");
}

#[test]
fn test_int_literal_widens_to_float() {
    assert_checks("let f: float = 1;");
}

#[test]
fn test_float_literal_does_not_narrow_to_int() {
    let err = check_error("let x: int = 1.5;");
    assert_eq!(err.kind(), ErrorKind::Type);
    assert_eq!(
        err.to_string(),
        "Type mismatch: cannot assign float to variable of type int"
    );
}

#[test]
fn test_incompatible_pairs_are_rejected() {
    let cases = [
        ("int", "true", "bool"),
        ("int", "\"s\"", "string"),
        ("float", "false", "bool"),
        ("float", "\"s\"", "string"),
        ("bool", "42", "int"),
        ("bool", "1.5", "float"),
        ("bool", "\"s\"", "string"),
        ("string", "42", "int"),
        ("string", "1.5", "float"),
        ("string", "true", "bool"),
        ("null", "42", "int"),
        ("null", "1.5", "float"),
        ("null", "true", "bool"),
        ("null", "\"s\"", "string"),
    ];

    for (declared, literal, literal_type) in cases {
        let source = format!("let x: {} = {};", declared, literal);
        let err = check_error(&source);
        assert_eq!(err.kind(), ErrorKind::Type, "source: {}", source);
        assert_eq!(
            err.to_string(),
            format!(
                "Type mismatch: cannot assign {} to variable of type {}",
                literal_type, declared
            ),
            "source: {}",
            source
        );
    }
}

#[test]
fn test_type_error_reports_initializer_position() {
    let err = check_error("let x: bool = 42;");
    assert_eq!(err.location(), Some((1, 15)));
}

#[test]
fn test_duplicate_declaration_is_rejected() {
    // Unreachable through a single unit (the grammar admits one
    // declaration), so feed the same declaration through one checker twice.
    let ast = declan::parse("let x: int = 1;").unwrap();

    let mut checker = Checker::new();
    checker.check_unit(&ast).unwrap();

    let err = checker.check_unit(&ast).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Name);
    assert_eq!(err.to_string(), "Variable already declared");
    assert_eq!(err.location(), Some((1, 5)));
}

#[test]
fn test_symbol_table_is_per_checker() {
    // a fresh checker has a fresh symbol table, so the same declaration
    // passes again
    let ast = declan::parse("let x: int = 1;").unwrap();

    let mut first = Checker::new();
    first.check_unit(&ast).unwrap();

    let mut second = Checker::new();
    second.check_unit(&ast).unwrap();
}

#[test]
fn test_empty_unit_checks() {
    let ast = declan::ast::Ast { decl: None };
    declan::check::check(&ast).unwrap();
}
