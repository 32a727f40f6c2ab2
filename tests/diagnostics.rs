use bsl::diagnostic::Diagnostic;

fn compile_error(source: &str) -> Diagnostic {
    bsl::compile(source)
        .expect_err("source should be rejected")
        .diagnostic()
}

#[test]
fn test_shadowing_rejected() {
    let diagnostic = compile_error("proc f(x: f32) f32 var x = 2.0 return x end");

    assert_eq!(diagnostic.message, "redeclaration of variable 'x'");
    assert_eq!((diagnostic.line, diagnostic.col), (1, 20));
}

#[test]
fn test_mixed_scalar_vector_addition_rejected() {
    let diagnostic = compile_error("proc f() vec2<f32> var a = {1.0, 2.0} return a + 1.0 end");

    assert_eq!(
        diagnostic.message,
        "cannot perform addition or subtraction on mixed scalar and vector operands"
    );
}

#[test]
fn test_non_void_procedure_must_return() {
    let diagnostic = compile_error("proc f() f32 var x = 1.0 end");

    assert_eq!(diagnostic.message, "non-void function must return");
    assert_eq!((diagnostic.line, diagnostic.col), (1, 1));
}

#[test]
fn test_void_procedure_may_omit_return() {
    assert!(bsl::compile("proc f() void var x = 1.0 end").is_ok());
}

#[test]
fn test_returning_from_void_procedure_rejected() {
    let diagnostic = compile_error("proc f() void return 1.0 end");

    assert_eq!(diagnostic.message, "incompatible return type");
}

#[test]
fn test_wrong_return_type_rejected() {
    let diagnostic = compile_error("proc f() vec2<f32> return 1.0 end");

    assert_eq!(diagnostic.message, "incompatible return type");
}

#[test]
fn test_toplevel_redeclaration() {
    let diagnostic = compile_error("proc f() void end proc f() void end");

    assert_eq!(diagnostic.message, "redeclaration of toplevel 'f'");
    assert_eq!((diagnostic.line, diagnostic.col), (1, 19));
}

#[test]
fn test_record_redeclaration() {
    let diagnostic = compile_error("record P end record P end");

    assert_eq!(diagnostic.message, "redeclaration of record type 'P'");
    assert_eq!((diagnostic.line, diagnostic.col), (1, 14));
}

#[test]
fn test_record_and_procedure_namespaces_are_disjoint() {
    assert!(bsl::compile("record f x: f32 end proc f() void end").is_ok());
}

#[test]
fn test_unknown_variable() {
    let diagnostic = compile_error("proc f() f32 return y end");

    assert_eq!(diagnostic.message, "variable 'y' not in scope");
    assert_eq!((diagnostic.line, diagnostic.col), (1, 21));
}

#[test]
fn test_unknown_type_in_signature() {
    let diagnostic = compile_error("proc f() Missing end");

    assert_eq!(diagnostic.message, "no type 'Missing' in scope");
    assert_eq!((diagnostic.line, diagnostic.col), (1, 10));
}

#[test]
fn test_unknown_record_type_in_literal() {
    let diagnostic = compile_error("proc f() void var p = record Q end end");

    assert_eq!(diagnostic.message, "unknown record type 'Q'");
}

#[test]
fn test_unknown_member_in_literal() {
    let diagnostic =
        compile_error("record P x: f32 end proc f() void var p = record P .z = 1.0, end end");

    assert_eq!(
        diagnostic.message,
        "record type 'P' does not have a member 'z'"
    );
}

#[test]
fn test_unknown_member_in_access() {
    let diagnostic = compile_error(
        "record P x: f32 end proc f() f32 var p = record P .x = 1.0, end return p.y end",
    );

    assert_eq!(
        diagnostic.message,
        "record type 'P' does not have a member 'y'"
    );
}

#[test]
fn test_member_access_on_scalar() {
    let diagnostic = compile_error("proc f() f32 var x = 1.0 return x.y end");

    assert_eq!(diagnostic.message, "left hand side must be a record type");
}

#[test]
fn test_record_types_are_nominal() {
    let diagnostic = compile_error(
        "record A x: f32 end record B x: f32 end proc f() void var a: A = record B .x = 1.0, end end",
    );

    assert_eq!(
        diagnostic.message,
        "incompatible record types 'A' and 'B'"
    );
}

#[test]
fn test_annotation_mismatch() {
    let diagnostic = compile_error("proc f() void var x: f64 = 1.0 end");

    assert_eq!(diagnostic.message, "incompatible types");
}

#[test]
fn test_record_member_initializer_mismatch() {
    let diagnostic =
        compile_error("record P v: vec2<f32> end proc f() void var p = record P .v = 1.0, end end");

    assert_eq!(diagnostic.message, "incompatible types");
}

#[test]
fn test_vector_too_large() {
    let diagnostic = compile_error("proc f() void var v = {1.0, 2.0, 3.0, 4.0, 5.0} end");

    assert_eq!(diagnostic.message, "maximum vector size is 4");
}

#[test]
fn test_flattened_vector_too_large() {
    let diagnostic =
        compile_error("proc f() void var a = {1.0, 2.0, 3.0} var b = {a, a} end");

    assert_eq!(diagnostic.message, "maximum vector size is 4");
}

#[test]
fn test_vectors_of_different_sizes() {
    let diagnostic = compile_error(
        "proc f() void var a = {1.0, 2.0} var b = {1.0, 2.0, 3.0} var c = a + b end",
    );

    assert_eq!(
        diagnostic.message,
        "cannot perform arithmetic on vectors of different types or sizes"
    );
}

#[test]
fn test_vector_scalar_multiplication_element_mismatch() {
    let diagnostic =
        compile_error("proc f(d: f64) void var a = {1.0, 2.0} var b = a * d end");

    assert_eq!(
        diagnostic.message,
        "cannot perform vector/scalar multiplication on mixed type operands"
    );
}

#[test]
fn test_mixed_scalar_arithmetic_rejected() {
    let diagnostic = compile_error("proc f(d: f64) void var x = 1.0 + d end");

    assert_eq!(
        diagnostic.message,
        "invalid argument to arithmetic operation"
    );
}

#[test]
fn test_parameter_shadows_toplevel() {
    let diagnostic = compile_error("proc f() void end proc g(f: f32) void end");

    assert_eq!(
        diagnostic.message,
        "function parameter 'f' shadows variable"
    );
    assert_eq!((diagnostic.line, diagnostic.col), (1, 26));
}

#[test]
fn test_procedure_is_not_a_value() {
    let diagnostic = compile_error("proc f() void end proc g() f32 return f end");

    assert_eq!(diagnostic.message, "cannot use procedure 'f' as a value");
}

#[test]
fn test_variable_not_usable_in_own_initializer() {
    let diagnostic = compile_error("proc f() void var x = x end");

    assert_eq!(diagnostic.message, "variable 'x' not in scope");
}

#[test]
fn test_diagnostics_are_deterministic() {
    let source = "proc f(x: f32) f32 var x = 2.0 return x end";

    let first = compile_error(source);
    let second = compile_error(source);
    assert_eq!(first, second);
}

#[test]
fn test_lexical_error_diagnostic() {
    let diagnostic = compile_error("proc f() void var x = 1.0 $ end");

    assert_eq!(diagnostic.message, "unknown char '$'");
    assert_eq!((diagnostic.line, diagnostic.col), (1, 27));
}
