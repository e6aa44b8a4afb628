use bitcalc::{
    calculate,
    error::{EvalError, ParseError},
    evaluator::{bitwise::eval_bitwise, core::evaluate},
    lexer::{parse_operand, parse_operator, Operator},
    value::Value,
};

fn calc(operand1: &str, operator: &str, operand2: &str) -> Value {
    calculate(operand1, operator, operand2).unwrap_or_else(|e| {
                                               panic!("'{operand1} {operator} {operand2}' failed: {e}")
                                           })
}

fn assert_failure(operand1: &str, operator: &str, operand2: &str) {
    if calculate(operand1, operator, operand2).is_ok() {
        panic!("'{operand1} {operator} {operand2}' succeeded but was expected to fail")
    }
}

#[test]
fn basic_arithmetic() {
    assert_eq!(calc("10", "+", "5"), Value::Integer(15));
    assert_eq!(calc("8", "-", "5"), Value::Integer(3));
    assert_eq!(calc("7", "*", "9"), Value::Integer(63));
    assert_eq!(calc("-3", "+", "-4"), Value::Integer(-7));
    assert_eq!(calc("-3", "*", "4"), Value::Integer(-12));
}

#[test]
fn arithmetic_overflow_is_detected() {
    assert_failure("2147483647", "+", "1");
    assert_failure("-2147483648", "-", "1");
    assert_failure("65536", "*", "65536");
    assert_failure("-2147483648", "*", "-1");

    // The extremes themselves are fine.
    assert_eq!(calc("2147483647", "+", "0"), Value::Integer(i32::MAX));
    assert_eq!(calc("-2147483648", "+", "0"), Value::Integer(i32::MIN));
    assert_eq!(calc("-2147483648", "%", "-1"), Value::Integer(0));
}

#[test]
fn overflow_carries_the_operator() {
    let err = evaluate(Operator::Add, i32::MAX, 1).unwrap_err();
    assert!(matches!(err, EvalError::Overflow { operator: Operator::Add }));
}

#[test]
fn division_is_real_valued() {
    assert_eq!(calc("7", "/", "2"), Value::Real(3.5));
    assert_eq!(calc("10", "/", "3").to_string(), "3.33");
    assert_eq!(calc("10", "/", "5").to_string(), "2.00");
    assert_eq!(calc("-7", "/", "2"), Value::Real(-3.5));
}

#[test]
fn division_and_modulo_by_zero_fail() {
    assert_failure("7", "/", "0");
    assert_failure("0", "/", "0");
    assert_failure("-2147483648", "/", "0");
    assert_failure("7", "%", "0");
    assert_failure("-7", "%", "0");

    assert!(matches!(evaluate(Operator::Div, 1, 0).unwrap_err(),
                     EvalError::DivisionByZero));
    assert!(matches!(evaluate(Operator::Mod, 1, 0).unwrap_err(),
                     EvalError::DivisionByZero));
}

#[test]
fn modulo_truncates_toward_the_dividend() {
    assert_eq!(calc("7", "%", "2"), Value::Integer(1));
    assert_eq!(calc("-7", "%", "2"), Value::Integer(-1));
    assert_eq!(calc("7", "%", "-2"), Value::Integer(1));
    assert_eq!(calc("-7", "%", "-2"), Value::Integer(-1));
}

#[test]
fn shifts_are_logical_and_reduced_mod_32() {
    assert_eq!(calc("1", "<<", "4"), Value::Unsigned(16));
    assert_eq!(calc("1", "<<", "31"), Value::Unsigned(0x8000_0000));
    assert_eq!(calc("16", ">>", "4"), Value::Unsigned(1));
    assert_eq!(calc("1", "<<", "32"), Value::Unsigned(1));
    assert_eq!(calc("1", "<<", "33"), Value::Unsigned(2));
    assert_eq!(calc("16", ">>", "36"), Value::Unsigned(1));

    // Right shift zero-fills even with the top bit set.
    assert_eq!(eval_bitwise(Operator::ShiftRight, 0x8000_0000, 1), 0x4000_0000);
    assert_eq!(eval_bitwise(Operator::ShiftRight, u32::MAX, 31), 1);
}

#[test]
fn bitwise_and_or_xor() {
    assert_eq!(calc("12", "&", "10"), Value::Unsigned(8));
    assert_eq!(calc("12", "|", "10"), Value::Unsigned(14));
    assert_eq!(calc("12", "^", "10"), Value::Unsigned(6));
    assert_eq!(calc("0", "|", "0"), Value::Unsigned(0));
}

#[test]
fn rotation_wraps_bits_around() {
    assert_eq!(calc("1", "<<<", "1"), Value::Unsigned(2));
    assert_eq!(calc("1", ">>>", "1"), Value::Unsigned(0x8000_0000));
    assert_eq!(eval_bitwise(Operator::RotateLeft, 0x8000_0000, 1), 1);
    assert_eq!(eval_bitwise(Operator::RotateRight, 1, 1), 0x8000_0000);
}

#[test]
fn rotation_identity_at_period_boundaries() {
    for value in [0u32, 1, 0xDEAD_BEEF, u32::MAX] {
        assert_eq!(eval_bitwise(Operator::RotateLeft, value, 0), value);
        assert_eq!(eval_bitwise(Operator::RotateLeft, value, 32), value);
        assert_eq!(eval_bitwise(Operator::RotateRight, value, 0), value);
        assert_eq!(eval_bitwise(Operator::RotateRight, value, 32), value);
    }
}

#[test]
fn rotation_round_trips() {
    for value in [0u32, 1, 42, 0x8000_0001, 0xDEAD_BEEF, u32::MAX] {
        for count in [0u32, 1, 7, 16, 31, 32, 33, 64, 100] {
            let there = eval_bitwise(Operator::RotateLeft, value, count);
            let back = eval_bitwise(Operator::RotateRight, there, count);
            assert_eq!(back, value, "RotL/RotR round trip failed for {value} by {count}");
        }
    }
}

#[test]
fn bitwise_operators_reject_negative_operands() {
    for operator in ["<<", ">>", "&", "|", "^", "<<<", ">>>"] {
        assert_failure("-1", operator, "1");
        assert_failure("1", operator, "-1");
    }

    let err = evaluate(Operator::And, -1, 1).unwrap_err();
    assert!(matches!(err, EvalError::NegativeOperand { operator: Operator::And }));
}

#[test]
fn operator_parsing_is_exact() {
    assert_eq!(parse_operator("<<<").unwrap(), Operator::RotateLeft);
    assert_eq!(parse_operator(">>>").unwrap(), Operator::RotateRight);
    assert_eq!(parse_operator("<<").unwrap(), Operator::ShiftLeft);
    assert_eq!(parse_operator(">>").unwrap(), Operator::ShiftRight);

    assert!(matches!(parse_operator("**").unwrap_err(),
                     ParseError::UnsupportedOperator { .. }));
    assert!(parse_operator("<<x").is_err());
    assert!(parse_operator("+ ").is_err());
    assert!(parse_operator("").is_err());
    assert!(parse_operator("add").is_err());
}

#[test]
fn operand_parsing_distinguishes_malformed_from_out_of_range() {
    assert_eq!(parse_operand("0").unwrap(), 0);
    assert_eq!(parse_operand("-2147483648").unwrap(), i32::MIN);
    assert_eq!(parse_operand("2147483647").unwrap(), i32::MAX);

    assert!(matches!(parse_operand("12abc").unwrap_err(),
                     ParseError::InvalidOperand { .. }));
    assert!(matches!(parse_operand("1.5").unwrap_err(),
                     ParseError::InvalidOperand { .. }));
    assert!(matches!(parse_operand("").unwrap_err(),
                     ParseError::InvalidOperand { .. }));
    assert!(matches!(parse_operand("2147483648").unwrap_err(),
                     ParseError::OperandOutOfRange { .. }));
    assert!(matches!(parse_operand("-2147483649").unwrap_err(),
                     ParseError::OperandOutOfRange { .. }));
}

#[test]
fn each_operator_maps_to_one_result_variant() {
    assert!(matches!(calc("1", "+", "1"), Value::Integer(_)));
    assert!(matches!(calc("1", "-", "1"), Value::Integer(_)));
    assert!(matches!(calc("1", "*", "1"), Value::Integer(_)));
    assert!(matches!(calc("1", "%", "1"), Value::Integer(_)));
    assert!(matches!(calc("1", "/", "1"), Value::Real(_)));
    for operator in ["<<", ">>", "&", "|", "^", "<<<", ">>>"] {
        assert!(matches!(calc("1", operator, "1"), Value::Unsigned(_)));
    }
}

#[test]
fn error_messages_are_single_actionable_lines() {
    let err = calculate("7", "/", "0").unwrap_err().to_string();
    assert_eq!(err, "Error: Division by zero.");
    assert!(!err.contains('\n'));

    let err = calculate("-1", "&", "1").unwrap_err().to_string();
    assert_eq!(err,
               "Error: Negative operands are not accepted for bitwise operator '&'.");

    let err = calculate("2147483647", "*", "2").unwrap_err().to_string();
    assert_eq!(err, "Error: Integer overflow while computing '*' result.");

    let err = calculate("1", "**", "2").unwrap_err().to_string();
    assert_eq!(err, "Error: Unsupported operator '**'.");
}
