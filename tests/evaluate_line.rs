use intcalc::error_handling::{CalcError, EvalError, LexError, ParseError};
use intcalc::evaluating::evaluate;
use intcalc::{evaluate_line, evaluate_tree, parse_line};

fn value(line: &str) -> i64 {
    evaluate_line(line).unwrap_or_else(|e| panic!("{line:?} failed: {e}")).value
}

#[test]
fn precedence() {
    assert_eq!(value("2+3*4"), 14);
    assert_eq!(value("2*3+4"), 10);
    assert_eq!(value("20-10/5"), 18);
}

#[test]
fn grouping_overrides_precedence() {
    assert_eq!(value("(2+3)*4"), 20);
    assert_eq!(value("2*(3+4)*(5-3)"), 28);
}

#[test]
fn left_associativity() {
    assert_eq!(value("8-3-2"), 3);
    assert_eq!(value("64/8/2"), 4);
    assert_eq!(value("10-2+3"), 11);
}

#[test]
fn output_is_rendered_expression_and_value() {
    let output = evaluate_line(" 1 +  2*(3) ").unwrap();
    assert_eq!(output.expression, "1 + 2 * 3");
    assert_eq!(output.value, 7);
    assert_eq!(output.to_string(), "1 + 2 * 3 = 7");
}

#[test]
fn division_by_zero() {
    assert_eq!(evaluate_line("10/0"), Err(CalcError::Eval(EvalError::DivisionByZero)));
}

#[test]
fn dangling_operator() {
    assert!(matches!(evaluate_line("1+"),
                     Err(CalcError::Parse(ParseError::ExpectedOperand{offset: None, ..}))));
}

#[test]
fn adjacent_numbers() {
    assert!(matches!(evaluate_line("1 2"),
                     Err(CalcError::Parse(ParseError::UnexpectedTrailingToken{offset: 2, ..}))));
}

#[test]
fn unmatched_paren() {
    assert_eq!(evaluate_line("(1+2"), Err(CalcError::Parse(ParseError::UnmatchedParen{offset: 0})));
}

#[test]
fn stray_token_inside_parentheses() {
    assert_eq!(evaluate_line("(1 2)").unwrap_err().to_string(), "did not expect '2'");
}

#[test]
fn unary_minus_is_not_supported() {
    assert!(matches!(evaluate_line("-5"),
                     Err(CalcError::Parse(ParseError::ExpectedOperand{offset: Some(0), ..}))));
}

#[test]
fn invalid_character() {
    assert_eq!(evaluate_line("3 % 2"),
               Err(CalcError::Lex(LexError::InvalidCharacter{character: '%', offset: 2})));
}

#[test]
fn error_messages() {
    let message = |line: &str| evaluate_line(line).unwrap_err().to_string();
    assert_eq!(message("1 $"), "invalid character, '$', encountered");
    assert_eq!(message("1+"), "expected a number or '(', found end of input");
    assert_eq!(message("1 2"), "did not expect '2'");
    assert_eq!(message("(1"), "could not find ')' to close this '('");
    assert_eq!(message("1/0"), "division by zero");
}

#[test]
fn same_tree_evaluates_the_same_twice() {
    let tree = parse_line("(7+5)/(1+2)-3").unwrap();
    assert_eq!(evaluate(&tree), Ok(1));
    assert_eq!(evaluate(&tree), Ok(1));
}

#[test]
fn parsed_tree_evaluates_like_the_line() {
    let tree = parse_line("(2+3)*4").unwrap();
    assert_eq!(evaluate_tree(&tree), evaluate_line("(2+3)*4"));
    assert_eq!(evaluate_tree(&parse_line("5/0").unwrap()),
               Err(CalcError::Eval(EvalError::DivisionByZero)));
}

#[test]
fn malformed_input_never_panics() {
    let lines = ["", " ", "(", ")", "()", "+", "1++2", "((1)", "1)", "1(2)", "9/0*", "1-(2/0)",
                 "99999999999999999999", "9223372036854775807*9223372036854775807"];
    for line in lines {
        assert!(evaluate_line(line).is_err(), "{line:?} should be rejected");
    }

    let deep = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    assert!(matches!(evaluate_line(&deep), Err(CalcError::Parse(ParseError::TooDeep{..}))));
}

#[test]
fn long_flat_chain_evaluates() {
    let line = vec!["1"; 500].join("+");
    assert_eq!(value(&line), 500);
    assert_eq!(value(&vec!["2"; 300].join("-")), 2 - 2 * 299);
}

#[test]
fn right_nested_parentheses_stay_bounded() {
    let nested = |depth: usize| format!("{}1{}", "1-(".repeat(depth), ")".repeat(depth));
    assert_eq!(value(&nested(200)), 1);
    assert!(matches!(evaluate_line(&nested(10_000)),
                     Err(CalcError::Parse(ParseError::TooDeep{..}))));
}

#[test]
fn overly_tall_chain_is_refused() {
    let outcome = std::thread::Builder::new()
        .stack_size(64 * 1024 * 1024)
        .spawn(|| evaluate_line(&vec!["1"; 10_000].join("-")))
        .unwrap()
        .join()
        .unwrap();
    assert!(matches!(outcome, Err(CalcError::Parse(ParseError::TooDeep{..}))));
}
