use std::fs;

use helang::{
    error::{LexError, RuntimeError},
    interpreter::{evaluator::core::Context, value::U8},
    run_script,
};
use walkdir::WalkDir;

fn run(src: &str) -> Result<Context, Box<dyn std::error::Error>> {
    let mut context = Context::new();
    run_script(src, &mut context)?;
    Ok(context)
}

fn run_ok(src: &str) -> Context {
    run(src).unwrap_or_else(|e| panic!("Script failed: {e}"))
}

fn run_err(src: &str) -> Box<dyn std::error::Error> {
    match run(src) {
        Ok(_) => panic!("Script succeeded but was expected to fail"),
        Err(e) => e,
    }
}

fn assert_success(src: &str) {
    run_ok(src);
}

#[test]
fn scalar_declaration_binds_value() {
    let context = run_ok("u8 x = 10;");
    assert_eq!(context.get_variable("x"), Some(&U8::Scalar(10)));

    let context = run_ok("u8 x = 0;");
    assert_eq!(context.get_variable("x"), Some(&U8::Scalar(0)));
}

#[test]
fn declaration_without_initializer_binds_nothing() {
    let context = run_ok("u8 x;");
    assert!(context.is_declared("x"));
    assert_eq!(context.get_variable("x"), None);
}

#[test]
fn undeclared_identifier_is_error() {
    let err = run_err("id;");
    let err = err.downcast_ref::<RuntimeError>().expect("should be a runtime error");
    assert!(matches!(err, RuntimeError::UnknownVariable { .. }));
}

#[test]
fn array_init_is_zero_filled() {
    let context = run_ok("u8 a = [5];");
    assert_eq!(context.get_variable("a"), Some(&U8::Array(vec![0; 5])));

    let context = run_ok("u8 a = [5]; u8 first = a[1]; u8 last = a[5];");
    assert_eq!(context.get_variable("first"), Some(&U8::Scalar(0)));
    assert_eq!(context.get_variable("last"), Some(&U8::Scalar(0)));
}

#[test]
fn array_init_with_length_zero_is_empty() {
    let context = run_ok("u8 a = [0];");
    assert_eq!(context.get_variable("a"), Some(&U8::Array(Vec::new())));
}

#[test]
fn index_zero_read_is_error() {
    let err = run_err("u8 a = [5]; a[0];");
    let err = err.downcast_ref::<RuntimeError>().expect("should be a runtime error");
    assert!(matches!(err, RuntimeError::InvalidIndex { .. }));
}

#[test]
fn out_of_bounds_read_is_error() {
    let err = run_err("u8 a = [3]; a[4];");
    let err = err.downcast_ref::<RuntimeError>().expect("should be a runtime error");
    assert!(matches!(err,
                     RuntimeError::IndexOutOfBounds { max: 3,
                                                      found: 4,
                                                      .. }));
}

#[test]
fn index_zero_write_updates_every_element() {
    let context = run_ok("u8 a = [3]; a[0] = 9;");
    assert_eq!(context.get_variable("a"), Some(&U8::Array(vec![9, 9, 9])));
}

#[test]
fn chain_order_is_preserved() {
    let context = run_ok("u8 b = 1 | 2 | 3;");
    assert_eq!(context.get_variable("b"), Some(&U8::Array(vec![1, 2, 3])));
}

#[test]
fn member_write_single_index() {
    let context = run_ok("u8 a = [3]; a[2] = 7;");
    assert_eq!(context.get_variable("a"), Some(&U8::Array(vec![0, 7, 0])));
}

#[test]
fn member_write_multiple_indexes() {
    let context = run_ok("u8 a = [4]; a[1 | 3] = 5;");
    assert_eq!(context.get_variable("a"), Some(&U8::Array(vec![5, 0, 5, 0])));
}

#[test]
fn member_read_multiple_indexes_gathers_in_order() {
    let context = run_ok("u8 a = 10 | 20 | 30; u8 b = a[3 | 1];");
    assert_eq!(context.get_variable("b"), Some(&U8::Array(vec![30, 10])));
}

#[test]
fn member_read_after_member_write() {
    // The same prefix parses as an assignment first and a member read
    // second; both sides of the backtrack are exercised here.
    let context = run_ok("u8 a = [3]; a[1] = 2; u8 b = a[1];");
    assert_eq!(context.get_variable("b"), Some(&U8::Scalar(2)));
}

#[test]
fn update_scalar() {
    let context = run_ok("u8 n = 5; n++;");
    assert_eq!(context.get_variable("n"), Some(&U8::Scalar(6)));

    let context = run_ok("u8 n = 5; n--;");
    assert_eq!(context.get_variable("n"), Some(&U8::Scalar(4)));
}

#[test]
fn update_array_is_element_wise() {
    let context = run_ok("u8 a = 1 | 1; a++;");
    assert_eq!(context.get_variable("a"), Some(&U8::Array(vec![2, 2])));

    let context = run_ok("u8 a = 3 | 5; a--;");
    assert_eq!(context.get_variable("a"), Some(&U8::Array(vec![2, 4])));
}

#[test]
fn update_of_undeclared_variable_is_error() {
    let err = run_err("q++;");
    let err = err.downcast_ref::<RuntimeError>().expect("should be a runtime error");
    assert!(matches!(err, RuntimeError::UnknownVariable { .. }));
}

#[test]
fn array_expression_into_member_target_is_error() {
    let err = run_err("u8 a = [3]; a[1] = 2 | 3;");
    let err = err.downcast_ref::<RuntimeError>().expect("should be a runtime error");
    assert!(matches!(err, RuntimeError::ArrayAssignment { .. }));
}

#[test]
fn member_write_into_scalar_is_error() {
    let err = run_err("u8 x = 3; x[1] = 5;");
    let err = err.downcast_ref::<RuntimeError>().expect("should be a runtime error");
    assert!(matches!(err, RuntimeError::NotAnArray { .. }));
}

#[test]
fn array_variable_into_member_target_takes_first_element() {
    // Only a literal array expression is rejected; an array-valued variable
    // on the right contributes its first element.
    let context = run_ok("u8 a = [3]; u8 b = 7 | 8; a[1] = b;");
    assert_eq!(context.get_variable("a"), Some(&U8::Array(vec![7, 0, 0])));
}

#[test]
fn member_source_on_the_right() {
    let context = run_ok("u8 a = 4 | 5 | 6; u8 b = [2]; b[2] = a[3];");
    assert_eq!(context.get_variable("b"), Some(&U8::Array(vec![0, 6])));
}

#[test]
fn whole_variable_reassignment() {
    let context = run_ok("u8 x = 5; x = 1 | 2;");
    assert_eq!(context.get_variable("x"), Some(&U8::Array(vec![1, 2])));

    let context = run_ok("u8 x = 1 | 2; u8 y = 9; x = y;");
    assert_eq!(context.get_variable("x"), Some(&U8::Scalar(9)));
}

#[test]
fn assignment_does_not_declare() {
    let err = run_err("x = 5;");
    let err = err.downcast_ref::<RuntimeError>().expect("should be a runtime error");
    assert!(matches!(err, RuntimeError::UnknownVariable { .. }));
}

#[test]
fn member_access_on_uninitialized_variable_is_error() {
    let err = run_err("u8 a; a[1];");
    let err = err.downcast_ref::<RuntimeError>().expect("should be a runtime error");
    assert!(matches!(err, RuntimeError::MissingValue { .. }));
}

#[test]
fn comment_lines_are_ignored() {
    let context = run_ok("// note\nu8 x = 7;");
    assert_eq!(context.get_variable("x"), Some(&U8::Scalar(7)));
}

#[test]
fn malformed_comment_is_error() {
    let err = run_err("/x\n");
    let err = err.downcast_ref::<LexError>().expect("should be a lex error");
    assert!(matches!(err, LexError::MalformedComment { .. }));
}

#[test]
fn unrecognized_characters_are_skipped() {
    let context = run_ok("u8 x = 7; ?");
    assert_eq!(context.get_variable("x"), Some(&U8::Scalar(7)));
}

#[test]
fn equality_and_logical_or_are_rejected_by_the_parser() {
    assert!(run("u8 x == 5;").is_err());
    assert!(run("print 1 || 2;").is_err());
}

#[test]
fn reassignment_to_array_literal_is_parse_error() {
    // `[5]` is only valid as a declaration initializer, not on the right
    // of a plain assignment.
    assert!(run("u8 x = 5; x = [5];").is_err());
}

#[test]
fn print_statements_run() {
    assert_success("u8 a = 1 | 2 | 3; print a;");
    assert_success("print 5;");
    assert_success("u8 a = [3]; print a[2];");
}

#[test]
fn sprint_decodes_code_points() {
    assert_success("sprint 104 | 101;");

    let err = run_err("sprint 104 | 1114112;");
    let err = err.downcast_ref::<RuntimeError>().expect("should be a runtime error");
    assert!(matches!(err, RuntimeError::InvalidCodePoint { value: 1_114_112, .. }));
}

#[test]
fn shell_state_survives_failing_lines() {
    // One context over several inputs, the way the shell drives it: the
    // failing line leaves earlier bindings alone.
    let mut context = Context::new();
    run_script("u8 x = 3;", &mut context).expect("declaration should work");
    assert!(run_script("x[1] = 2 | 3;", &mut context).is_err());
    assert_eq!(context.get_variable("x"), Some(&U8::Scalar(3)));
}

#[test]
fn demo_scripts_work() {
    let mut count = 0;

    for entry in WalkDir::new("demos").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "he"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        let mut context = Context::new();
        if let Err(e) = run_script(&source, &mut context) {
            panic!("Demo script {path:?} failed:\n{source}\nError: {e}");
        }
    }

    assert!(count > 0, "No demo scripts found in demos/");
}

#[test]
fn example_works() {
    let source = fs::read_to_string("tests/example.he").expect("missing file");
    assert_success(&source);
}
