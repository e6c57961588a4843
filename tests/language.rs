use std::fs;

use anaconda::{
    error::{Error, LexError, RuntimeError, SyntaxError},
    interpreter::{
        evaluator::core::Context,
        position::{Position, Span},
        value::{Number, Value},
    },
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

        for (i, block) in extract_shell_blocks(&content).into_iter().enumerate() {
            for line in block.lines().map(str::trim).filter(|l| !l.is_empty()) {
                count += 1;
                if let Err(e) = run("<book>", line) {
                    panic!("Example {} in {:?} failed:\n{}\nError: {}", i + 1, path, line, e);
                }
            }
        }
    }

    assert!(count > 0, "No anaconda examples found in book/src");
}

fn extract_shell_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```anaconda") {
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

fn eval(src: &str) -> Number {
    match run("<test>", src) {
        Ok(value) => value,
        Err(e) => panic!("Expression failed: {src}\n{e}"),
    }
}

fn eval_err(src: &str) -> Error {
    match run("<test>", src) {
        Ok(value) => panic!("Expression succeeded but was expected to fail: {src} = {value}"),
        Err(e) => e,
    }
}

#[test]
fn basic_arithmetic() {
    assert_eq!(eval("1 + 2").to_string(), "3");
    assert_eq!(eval("8 - 5").to_string(), "3");
    assert_eq!(eval("7 * 9").to_string(), "63");
    assert_eq!(eval("10 / 2").to_string(), "5");
}

#[test]
fn operator_precedence() {
    assert_eq!(eval("2 + 3 * 4").to_string(), "14");
    assert_eq!(eval("(2 + 3) * 4").to_string(), "20");
}

#[test]
fn subtraction_is_left_associative() {
    assert_eq!(eval("10 - 3 - 2").to_string(), "5");
}

#[test]
fn unary_signs_stack() {
    assert_eq!(eval("--5").to_string(), "5");
    assert_eq!(eval("-5 + 3").to_string(), "-2");
    assert_eq!(eval("+5").to_string(), "5");
    assert_eq!(eval("-+-5").to_string(), "5");
}

#[test]
fn literals_keep_their_kind() {
    assert_eq!(eval("3").value, Value::Integer(3));
    assert_eq!(eval("3.0").value, Value::Real(3.0));
    assert_eq!(eval(".5").value, Value::Real(0.5));
    assert_eq!(eval("2.").value, Value::Real(2.0));
}

#[test]
fn integer_math_stays_integer_and_mixed_math_promotes() {
    assert_eq!(eval("1 / 2").value, Value::Integer(0));
    assert_eq!(eval("1.0 / 2").value, Value::Real(0.5));
    assert_eq!(eval("2 * 3.5").value, Value::Real(7.0));
    assert_eq!(eval("2 * 3.5").to_string(), "7");
}

#[test]
fn whitespace_is_insignificant() {
    assert_eq!(eval("  2 \t+2 ").to_string(), "4");
}

#[test]
fn division_by_zero_renders_a_traceback() {
    let error = eval_err("10 / 0");
    assert!(matches!(error, Error::Runtime(RuntimeError::DivisionByZero { .. })));
    assert_eq!(error.to_string(),
               "Traceback (most recent call last):\n \
                File <test>, line 1, in <ACSHELL>\n\
                Runtime Error : Illegal divider, division by 0");
}

#[test]
fn division_by_zero_spans_the_right_operand() {
    // The failing operand is the literal `0` at offset 4.
    match eval_err("5 / 0") {
        Error::Runtime(RuntimeError::DivisionByZero { span: Some(span), .. }) => {
            assert_eq!(span.start.offset, 4);
            assert_eq!(span.end.offset, 5);
        },
        other => panic!("Expected a division-by-zero error, got: {other:?}"),
    }

    // Nested: the zero-valued operand is the whole `3 - 3` inside the
    // parentheses, offsets 9..14.
    match eval_err("1 + 2 / (3 - 3)") {
        Error::Runtime(RuntimeError::DivisionByZero { span: Some(span), .. }) => {
            assert_eq!(span.start.offset, 9);
            assert_eq!(span.end.offset, 14);
        },
        other => panic!("Expected a division-by-zero error, got: {other:?}"),
    }
}

#[test]
fn illegal_character_is_a_lexical_error() {
    match eval_err("5 & 3") {
        Error::Lex(LexError::IllegalCharacter { ch, span }) => {
            assert_eq!(ch, '&');
            assert_eq!(span.start.offset, 2);
            assert_eq!(span.end.offset, 3);
        },
        other => panic!("Expected an illegal-character error, got: {other:?}"),
    }

    assert_eq!(eval_err("5 & 3").to_string(),
               "Illegal Character : '&'\nFile <test>, line 1");
}

#[test]
fn unmatched_parenthesis_points_at_end_of_input() {
    match eval_err("(1 + 2") {
        Error::Syntax(SyntaxError::ExpectedClosingParen { span }) => {
            assert_eq!(span.start.offset, 6);
        },
        other => panic!("Expected a missing-parenthesis error, got: {other:?}"),
    }

    assert_eq!(eval_err("(1 + 2").to_string(),
               "Illegal Syntax : Expected \")\"\nFile <test>, line 1");
}

#[test]
fn second_dot_ends_the_number_and_fails_in_the_parser() {
    // `1..2` scans as two floats; the parser rejects the second one as
    // trailing input. It must not be a lexical error.
    let error = eval_err("1..2");
    assert!(matches!(error,
                     Error::Syntax(SyntaxError::UnexpectedTrailingTokens { .. })));
    assert_eq!(error.to_string(),
               "Illegal Syntax : Expected \"*\", \"/\", \"+\" or \"-\"\nFile <test>, line 1");
}

#[test]
fn lone_dot_is_an_illegal_character() {
    assert!(matches!(eval_err("."),
                     Error::Lex(LexError::IllegalCharacter { ch: '.', .. })));
}

#[test]
fn empty_input_is_a_syntax_error() {
    assert!(matches!(eval_err(""),
                     Error::Syntax(SyntaxError::ExpectedNumber { .. })));
}

#[test]
fn trailing_and_missing_operands_are_syntax_errors() {
    assert!(matches!(eval_err("1 2"),
                     Error::Syntax(SyntaxError::UnexpectedTrailingTokens { .. })));
    assert!(matches!(eval_err("2 +"),
                     Error::Syntax(SyntaxError::ExpectedNumber { .. })));
}

#[test]
fn oversized_integer_literal_is_a_lexical_error() {
    assert!(matches!(eval_err("99999999999999999999"),
                     Error::Lex(LexError::LiteralTooLarge { .. })));
}

#[test]
fn repeated_runs_are_identical() {
    assert_eq!(eval("2 + 2").value, eval("2 + 2").value);
    assert_eq!(eval_err("1 / 0").to_string(), eval_err("1 / 0").to_string());
}

#[test]
fn traceback_walks_the_context_chain() {
    // The grammar only ever creates the root frame, but the traceback
    // rendering supports chains of any depth; exercise one of depth two.
    let root = Context::new("<ACSHELL>");
    let entry = Position::start("<test>", "1 / 0");

    let inner = Context { display_name:     "inner".to_string(),
                          parent:           Some(Box::new(root)),
                          parent_entry_pos: Some(entry.clone()), };

    let site = entry.advance(Some('1')).advance(Some(' '))
                    .advance(Some('/'))
                    .advance(Some(' '));
    let error = RuntimeError::DivisionByZero { span:    Some(Span::new(site.clone(),
                                                                       site.advance(Some('0')))),
                                               context: Some(inner), };

    assert_eq!(error.to_string(),
               "Traceback (most recent call last):\n \
                File <test>, line 1, in <ACSHELL>\n \
                File <test>, line 1, in inner\n\
                Runtime Error : Illegal divider, division by 0");
}

#[test]
fn example_script_evaluates() {
    let script = fs::read_to_string("tests/example.anaconda").expect("missing file");
    assert_eq!(eval(script.trim_end()).to_string(), "25");
}
