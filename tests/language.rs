use std::fs;

use lipi::{
    ast::{Expr, Stmt},
    config::Config,
    error::{Error, ParseError, RuntimeError},
    interpreter::{
        evaluator::core::Interpreter,
        lexer::{Token, TokenKind},
        value::core::Value,
    },
    parse_source, run_source,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn demo_programs_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "ga"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                           panic!("Failed to read {expected_path:?}: {e}")
                       });

        count += 1;
        match run(&source) {
            Ok(output) => assert_eq!(output, expected, "output of {path:?}"),
            Err(e) => panic!("Demo {path:?} failed:\n{source}\nError: {e:?}"),
        }
    }

    assert!(count > 0, "No demo programs found in demos/");
}

fn run_with(src: &str, config: Config) -> (String, Result<(), Error>) {
    let mut output = Vec::new();
    let result = run_source(src, config, &mut output);
    (String::from_utf8(output).expect("output is UTF-8"), result)
}

fn run(src: &str) -> Result<String, Error> {
    let (output, result) = run_with(src, Config::default());
    result.map(|()| output)
}

fn assert_output(src: &str, expected: &[&str]) {
    match run(src) {
        Ok(output) => {
            let lines: Vec<&str> = output.lines().collect();
            assert_eq!(lines, expected, "script:\n{src}");
        },
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

fn runtime_error(src: &str) -> RuntimeError {
    match run(src) {
        Err(Error::Runtime(e)) => e,
        Err(Error::Parse(e)) => panic!("Script did not parse: {e}"),
        Ok(output) => panic!("Script succeeded but was expected to fail, printed {output:?}"),
    }
}

#[test]
fn addition_with_devanagari_numerals() {
    assert_output("मानौ क = ५ + ३\nछाप(क)", &["८"]);
}

#[test]
fn basic_arithmetic() {
    assert_output("मानौ क = १० - २\nछाप(क)", &["८"]);
    assert_output("मानौ क = ४ * २\nछाप(क)", &["८"]);
    assert_output("मानौ क = १५ / ३\nछाप(क)", &["५"]);
    assert_output("मानौ क = १७ % ५\nछाप(क)", &["२"]);
}

#[test]
fn operator_precedence_and_grouping() {
    assert_output("मानौ क = २ + ३ * ४\nछाप(क)", &["१४"]);
    assert_output("मानौ क = (२ + ३) * ४\nछाप(क)", &["२०"]);
    assert_output("मानौ क = १ + २ + ३\nछाप(क)", &["६"]);
    assert_output("मानौ क = १० - ३ * २ + ४\nछाप(क)", &["८"]);
    assert_output("मानौ क = (५ + ५) * (३ - १)\nछाप(क)", &["२०"]);
}

#[test]
fn subtraction_and_division_associate_left() {
    assert_output("छाप(१० - ४ - ३)", &["३"]);
    assert_output("छाप(६४ / ८ / २)", &["४"]);
}

#[test]
fn fractional_and_negative_results_keep_sign_and_point() {
    assert_output("छाप(७ / २)", &["३.५"]);
    assert_output("छाप(३ - १०)", &["-७"]);
}

#[test]
fn multiple_print_statements() {
    assert_output("मानौ क = ५ + ५\nछाप(क)\nमानौ ख = क + ५\nछाप(ख)", &["१०", "१५"]);
}

#[test]
fn print_string_literal_without_quotes() {
    assert_output(r#"छाप("नमस्ते")"#, &["नमस्ते"]);
}

#[test]
fn quoted_numerals_are_not_transliterated() {
    assert_output(r#"छाप("123")"#, &["123"]);
}

#[test]
fn ascii_numerals_mix_with_devanagari() {
    assert_output("छाप(२ + 3)", &["५"]);
    assert_output("छाप(2.5 * २)", &["५"]);
}

#[test]
fn ascii_output_configuration() {
    let config = Config::default().with_devanagari_output(false);
    let (output, result) = run_with("मानौ क = ५ + ३\nछाप(क)\nछाप(\"नमस्ते\")", config);

    assert!(result.is_ok());
    assert_eq!(output, "8\nनमस्ते\n");
}

#[test]
fn plus_concatenates_two_texts() {
    assert_output(r#"छाप("१" + "२")"#, &["१२"]);
    assert_output(r#"छाप("12" + "३")"#, &["12३"]);
}

#[test]
fn plus_adds_text_numeral_and_number() {
    assert_output(r#"छाप("५" + ३)"#, &["८"]);
    assert_output(r#"छाप("7" * २)"#, &["१४"]);
}

#[test]
fn mixed_text_converts_from_its_leading_ascii_digits() {
    assert_output(r#"छाप("2१" + ०)"#, &["२"]);
    assert!(matches!(runtime_error(r#"छाप("१2" + ०)"#),
                     RuntimeError::ConversionError { ref value, line: 1 } if value == "१2"));
}

#[test]
fn plus_on_words_fails_conversion_first() {
    let err = runtime_error(r#"छाप("नमस्ते" + "संसार")"#);
    assert!(matches!(err, RuntimeError::ConversionError { ref value, line: 1 } if value == "नमस्ते"),
            "{err:?}");
}

#[test]
fn null_and_functions_do_not_convert() {
    assert!(matches!(runtime_error("मानौ क\nछाप(क + १)"),
                     RuntimeError::ConversionError { .. }));
    assert!(matches!(runtime_error("कार्य च() {}\nछाप(च * २)"),
                     RuntimeError::ConversionError { .. }));
}

#[test]
fn variable_without_initializer_is_null() {
    assert_output("मानौ क\nछाप(क)", &["null"]);
}

#[test]
fn redeclaration_replaces_binding() {
    assert_output("मानौ क = १\nमानौ क = क + १\nछाप(क)", &["२"]);
    assert_output("कार्य च() { छाप(१) }\nकार्य च() { छाप(२) }\nच()", &["२"]);
}

#[test]
fn blocks_do_not_open_a_scope() {
    assert_output("{\n  मानौ क = ३\n}\nछाप(क)", &["३"]);
}

#[test]
fn semicolons_separate_statements() {
    assert_output("मानौ क = १; छाप(क); छाप(क + क)", &["१", "२"]);
}

#[test]
fn function_prints_arguments_in_parameter_order() {
    let src = "कार्य जोड(अ, ब) {\n  छाप(अ)\n  छाप(ब)\n}\nजोड(४, ७)";
    assert_output(src, &["४", "७"]);
}

#[test]
fn function_without_parameters() {
    assert_output("कार्य नमस्कार() {\n  छाप(\"नमस्ते\")\n}\nनमस्कार()\nनमस्कार()",
                  &["नमस्ते", "नमस्ते"]);
}

#[test]
fn call_yields_null() {
    assert_output("कार्य च() {}\nछाप(च())", &["null"]);
}

#[test]
fn arguments_are_evaluated_in_the_caller() {
    let src = "मानौ अ = १०\nकार्य च(अ, ब) {\n  छाप(अ)\n  छाप(ब)\n}\nच(२, अ)";
    assert_output(src, &["२", "१०"]);
}

#[test]
fn variables_declared_in_a_call_stay_inside() {
    let err = runtime_error("कार्य च() {\n  मानौ भित्र = १\n}\nच()\nछाप(भित्र)");
    assert!(matches!(err, RuntimeError::UndefinedVariable { ref name, line: 5 } if name == "भित्र"));
}

#[test]
fn redeclaring_a_caller_variable_in_a_call_is_discarded() {
    let src = "मानौ क = १\nकार्य बदल() {\n  मानौ क = ९\n  छाप(क)\n}\nबदल()\nछाप(क)";
    assert_output(src, &["९", "१"]);
}

#[test]
fn functions_see_caller_bindings_present_at_call_time() {
    let src = "कार्य देखाउ() {\n  छाप(क)\n}\nमानौ क = ७\nदेखाउ()\nमानौ क = ८\nदेखाउ()";
    assert_output(src, &["७", "८"]);
}

#[test]
fn functions_can_call_each_other() {
    let src = "कार्य भित्री(क) {\n  छाप(क * २)\n}\nकार्य बाहिरी(क) {\n  भित्री(क + १)\n}\nबाहिरी(४)";
    assert_output(src, &["१०"]);
}

#[test]
fn wrong_arity_is_error() {
    let err = runtime_error("कार्य च(अ, ब) {}\nच(१)");
    assert!(matches!(err,
                     RuntimeError::ArityMismatch { ref name,
                                                   expected: 2,
                                                   found: 1,
                                                   line: 2 } if name == "च"));

    let err = runtime_error("कार्य च() {}\nच(१, २, ३)");
    assert!(matches!(err, RuntimeError::ArityMismatch { expected: 0, found: 3, .. }));
}

#[test]
fn arity_is_checked_before_arguments_run() {
    let err = runtime_error("कार्य च(अ) {}\nच(नभएको, १)");
    assert!(matches!(err, RuntimeError::ArityMismatch { .. }), "{err:?}");
}

#[test]
fn calling_an_unbound_name_is_error() {
    let err = runtime_error("नभएको(१)");
    assert!(matches!(err, RuntimeError::UndefinedFunction { ref name, .. } if name == "नभएको"));
}

#[test]
fn calling_a_non_function_is_error() {
    assert!(matches!(runtime_error("मानौ क = ५\nक()"), RuntimeError::NotAFunction { .. }));
    assert!(matches!(runtime_error("मानौ क\nक()"), RuntimeError::NotAFunction { .. }));
}

#[test]
fn division_by_zero_stops_before_printing() {
    let (output, result) = run_with("मानौ क = १० / ०\nछाप(क)", Config::default());

    assert!(matches!(result, Err(Error::Runtime(RuntimeError::DivisionByZero { line: 1 }))));
    assert_eq!(output, "");
}

#[test]
fn modulo_by_zero_is_its_own_error() {
    assert!(matches!(runtime_error("मानौ क = १० % ०\nछाप(क)"),
                     RuntimeError::ModuloByZero { .. }));
    assert!(matches!(runtime_error("छाप(५ % (२ - २))"), RuntimeError::ModuloByZero { .. }));
}

#[test]
fn zero_text_divisor_is_zero() {
    assert!(matches!(runtime_error(r#"छाप(५ / "०")"#), RuntimeError::DivisionByZero { .. }));
}

#[test]
fn undefined_variable_names_the_identifier() {
    let err = runtime_error("छाप(नभएको)");

    assert!(matches!(err, RuntimeError::UndefinedVariable { ref name, .. } if name == "नभएको"));
    assert!(err.to_string().contains("नभएको"));
}

#[test]
fn output_before_an_error_is_kept() {
    let (output, result) = run_with("छाप(१)\nछाप(ख)\nछाप(२)", Config::default());

    assert!(result.is_err());
    assert_eq!(output, "१\n");
}

#[test]
fn parse_errors_prevent_any_output() {
    let (output, result) = run_with("छाप(१)\nछाप(२", Config::default());

    assert!(matches!(result, Err(Error::Parse(_))));
    assert_eq!(output, "");
}

#[test]
fn reserved_keywords_are_rejected() {
    for src in ["यदि", "फिर्ता ५", "मानौ क = सत्य", "छाप(असत्य)", "नभए"] {
        assert!(matches!(run(src), Err(Error::Parse(ParseError::ReservedKeyword { .. }))),
                "{src}");
    }
}

#[test]
fn failed_call_restores_the_caller_environment() {
    let program =
        parse_source("मानौ क = १\nकार्य च(अ) {\n  मानौ ग = २\n  छाप(नभएको)\n}\nच(५)").unwrap();
    let mut interpreter = Interpreter::new(Vec::new());

    assert!(interpreter.interpret(&program).is_err());

    let env = interpreter.environment();
    assert!(env.contains("क"));
    assert!(env.contains("च"));
    assert!(!env.contains("अ"));
    assert!(!env.contains("ग"));
}

#[test]
fn each_run_starts_from_an_empty_environment() {
    let mut interpreter = Interpreter::new(Vec::new());

    interpreter.interpret(&parse_source("मानौ क = १").unwrap()).unwrap();
    assert_eq!(interpreter.environment().get("क"), Some(&Value::Number(1.0)));

    let err = interpreter.interpret(&parse_source("छाप(क)").unwrap()).unwrap_err();
    assert!(matches!(err, RuntimeError::UndefinedVariable { .. }));
}

#[test]
fn literals_evaluate_the_same_every_time() {
    let mut interpreter = Interpreter::new(Vec::new());
    let numeral = Expr::literal("१२३");
    let text = Expr::literal("\"क\"");

    for _ in 0..3 {
        assert_eq!(interpreter.evaluate(&numeral).unwrap(), Value::Number(123.0));
        assert_eq!(interpreter.evaluate(&text).unwrap(), Value::from("क"));
    }
    assert_eq!(numeral, Expr::literal("१२३"));
}

#[test]
fn unquoted_non_numeral_text_passes_through() {
    let mut interpreter = Interpreter::new(Vec::new());

    assert_eq!(interpreter.evaluate(&Expr::literal("abc")).unwrap(), Value::from("abc"));
    assert_eq!(interpreter.evaluate(&Expr::literal(2.5)).unwrap(), Value::Number(2.5));
}

#[test]
fn operators_without_arithmetic_meaning_are_unknown() {
    let mut interpreter = Interpreter::new(Vec::new());
    let expr = Expr::binary(Expr::literal("१"), Token::new(TokenKind::Bang, "!", 4), Expr::literal("२"));

    let err = interpreter.evaluate(&expr).unwrap_err();
    assert!(matches!(err, RuntimeError::UnknownOperator { ref operator, line: 4 } if operator == "!"));
}

#[test]
fn print_writes_one_line_per_statement_to_the_sink() {
    let program = parse_source("छाप(१)\nछाप(\"दुई\")\nछाप(3.25)").unwrap();
    let mut interpreter = Interpreter::new(Vec::new());

    interpreter.interpret(&program).unwrap();

    let output = String::from_utf8(interpreter.into_sink()).unwrap();
    assert_eq!(output, "१\nदुई\n३.२५\n");
}

#[test]
fn hand_built_programs_run_without_the_parser() {
    let sum = Expr::binary(Expr::literal("५"), Token::new(TokenKind::Plus, "+", 1), Expr::literal(3.0));
    let program = [Stmt::Var { name:        Token::identifier("क"),
                               initializer: Some(sum), },
                   Stmt::Print(Expr::variable("क"))];
    let config = Config::default().with_devanagari_output(false);
    let mut interpreter = Interpreter::with_config(Vec::new(), config);

    interpreter.interpret(&program).unwrap();

    assert_eq!(interpreter.config(), config);
    assert_eq!(interpreter.environment().get("क"), Some(&Value::Number(8.0)));
    assert_eq!(String::from_utf8(interpreter.into_sink()).unwrap(), "8\n");
}
