use std::error::Error as _;

use calcstream::{
    ADD, BUILTIN_OPERATIONS, Calculator, DIV, MUL, Number, RegistrationPolicy, RuntimeError, SUB,
    tokens,
};

fn sum_of_squares(args: &[Number]) -> Result<Number, RuntimeError> {
    args.iter()
        .try_fold(Number::Integer(0), |acc, n| acc + (*n * *n)?)
}

fn assert_wrong_expression(calc: &Calculator, tokens: &[calcstream::Token], cause: RuntimeError) {
    match calc.execute_expression(tokens) {
        Err(err) => assert_eq!(err, RuntimeError::wrong_expression(cause)),
        Ok(v) => panic!("Expression evaluated to {v} but was expected to fail"),
    }
}

#[test]
fn builtin_operations_on_integers() {
    let calc = Calculator::new();

    assert_eq!(calc.execute_single(ADD, [2, 3]).unwrap(), Number::Integer(5));
    assert_eq!(calc.execute_single(SUB, [12, 3, 2]).unwrap(), Number::Integer(7));
    assert_eq!(calc.execute_single(MUL, [2, 3]).unwrap(), Number::Integer(6));
    assert_eq!(calc.execute_single(DIV, [10, 5]).unwrap(), Number::Real(2.0));
}

#[test]
fn division_is_always_floating() {
    let calc = Calculator::new();

    let result = calc.execute_single(DIV, [10, 2]).unwrap();
    assert!(result.is_real());
    assert_eq!(result, Number::Real(5.0));
    assert_eq!(calc.execute_single(DIV, [7, 2]).unwrap(), Number::Real(3.5));
    assert_eq!(calc.execute_single(DIV, [100, 5, 4]).unwrap(), Number::Real(5.0));
}

#[test]
fn mixed_operands_promote_to_floating() {
    let calc = Calculator::new();

    let result = calc.execute_single(ADD, [Number::Integer(2), Number::Real(0.5)])
                     .unwrap();
    assert_eq!(result, Number::Real(2.5));

    let result = calc.execute_single(MUL, [Number::Real(1.5), Number::Integer(4)])
                     .unwrap();
    assert_eq!(result, Number::Real(6.0));

    let result = calc.execute_single(SUB, [Number::Integer(1), Number::Real(0.25), Number::Integer(1)])
                     .unwrap();
    assert_eq!(result, Number::Real(-0.25));
}

#[test]
fn single_operand_is_returned_unchanged() {
    let calc = Calculator::new();

    assert_eq!(calc.execute_single(DIV, [10]).unwrap(), Number::Integer(10));
    assert_eq!(calc.execute_single(SUB, [4.5]).unwrap(), Number::Real(4.5));
}

#[test]
fn division_by_zero_follows_floating_point() {
    let calc = Calculator::new();

    assert_eq!(calc.execute_single(DIV, [1, 0]).unwrap(), Number::Real(f64::INFINITY));
    assert_eq!(calc.execute_single(DIV, [-1, 0]).unwrap(),
               Number::Real(f64::NEG_INFINITY));

    let nan = calc.execute_single(DIV, [0, 0]).unwrap();
    assert!(nan.as_real().is_nan());
}

#[test]
fn integer_overflow_is_error() {
    let calc = Calculator::new();

    assert_eq!(calc.execute_single(ADD, [i64::MAX, 1]).unwrap_err(), RuntimeError::Overflow);
    assert_eq!(calc.execute_single(SUB, [i64::MIN, 1]).unwrap_err(), RuntimeError::Overflow);
    assert_eq!(calc.execute_single(MUL, [i64::MAX, 2]).unwrap_err(), RuntimeError::Overflow);

    // Floating operands never overflow.
    let result = calc.execute_single(MUL, [Number::Integer(i64::MAX), Number::Real(2.0)])
                     .unwrap();
    assert!(result.is_real());
}

#[test]
fn unknown_operation_is_error() {
    let calc = Calculator::new();

    let err = calc.execute_single("POW", [2, 3]).unwrap_err();
    assert_eq!(err, RuntimeError::FunctionNotFound { name: "POW".to_string() });
    assert_eq!(err.to_string(), "Function not found: 'POW'.");
}

#[test]
fn empty_operands_is_error() {
    let calc = Calculator::new();

    for name in BUILTIN_OPERATIONS {
        let err = calc.execute_single(name, std::iter::empty::<i64>()).unwrap_err();
        assert_eq!(err, RuntimeError::EmptyArguments { name: (*name).to_string() });
    }
}

#[test]
fn registry_starts_with_builtins() {
    let calc = Calculator::new();

    assert_eq!(calc.operation_names(), vec!["ADD", "DIV", "MUL", "SUB"]);
    assert!(calc.contains(ADD));
    assert!(!calc.contains("add"));
    assert_eq!(calc.policy(), RegistrationPolicy::Overwrite);
}

#[test]
fn custom_function_is_executable() {
    let mut calc = Calculator::new();
    calc.register_custom_function("TEST", sum_of_squares).unwrap();

    assert_eq!(calc.execute_single("TEST", [3, 2, 5]).unwrap(), Number::Integer(38));
    assert_eq!(calc.execute_single("TEST", [Number::Real(0.5)]).unwrap(), Number::Real(0.25));
    assert!(calc.operation_names().contains(&"TEST"));
}

#[test]
fn custom_function_participates_in_sequences() {
    let mut calc = Calculator::new();
    calc.register_custom_function("TEST", sum_of_squares).unwrap();

    // ADD 1 2 = 3, then TEST 3 4 = 9 + 16.
    let result = calc.execute_expression(&tokens![ADD, 1, 2, "TEST", 4]).unwrap();
    assert_eq!(result, Number::Integer(25));
}

#[test]
fn last_registration_wins() {
    let mut calc = Calculator::new();
    calc.register_custom_function("TEST", |_| Ok(Number::Integer(1))).unwrap();
    calc.register_custom_function("TEST", |_| Ok(Number::Integer(2))).unwrap();

    assert_eq!(calc.execute_single("TEST", [0]).unwrap(), Number::Integer(2));

    calc.register_custom_function(ADD, |args| Ok(Number::Integer(args.len() as i64))).unwrap();
    assert_eq!(calc.execute_single(ADD, [10, 20, 30]).unwrap(), Number::Integer(3));
}

#[test]
fn reject_policy_keeps_existing_operation() {
    let mut calc = Calculator::with_policy(RegistrationPolicy::Reject);
    calc.register_custom_function("TEST", sum_of_squares).unwrap();

    let err = calc.register_custom_function("TEST", |_| Ok(Number::Integer(0)))
                  .unwrap_err();
    assert_eq!(err, RuntimeError::FunctionAlreadyDefined { name: "TEST".to_string() });

    let err = calc.register_custom_function(SUB, |_| Ok(Number::Integer(0)))
                  .unwrap_err();
    assert_eq!(err, RuntimeError::FunctionAlreadyDefined { name: "SUB".to_string() });

    assert_eq!(calc.execute_single("TEST", [2]).unwrap(), Number::Integer(4));
    assert_eq!(calc.execute_single(SUB, [5, 2]).unwrap(), Number::Integer(3));
}

#[test]
fn unregister_removes_operation() {
    let mut calc = Calculator::new();

    assert!(calc.unregister(ADD).is_some());
    assert!(calc.unregister(ADD).is_none());
    assert_eq!(calc.execute_single(ADD, [1, 2]).unwrap_err(),
               RuntimeError::FunctionNotFound { name: "ADD".to_string() });

    // Without a registered operation the name is just an operand.
    assert_wrong_expression(&calc, &tokens![ADD, 1, 2], RuntimeError::MissingOperation);
}

#[test]
fn sequence_folds_groups_left_to_right() {
    let calc = Calculator::new();

    let result = calc.execute_expression(&tokens![ADD, 2, 3, 4, DIV, 2, SUB, 12]).unwrap();
    assert_eq!(result, Number::Real(-7.5));

    let result = calc.execute_expression(&tokens![MUL, 2, 3, ADD, 4]).unwrap();
    assert_eq!(result, Number::Integer(10));

    let result = calc.execute_expression(&tokens![SUB, 100, 1, 2, 3]).unwrap();
    assert_eq!(result, Number::Integer(94));
}

#[test]
fn sequence_skips_leading_operands() {
    let calc = Calculator::new();

    let result = calc.execute_expression(&tokens![1, 2, ADD, 3, 4]).unwrap();
    assert_eq!(result, Number::Integer(7));

    // DIV 10 5 = 2.0, then ADD 2.0 12.
    let result = calc.execute_expression(&tokens![1, 2, DIV, 10, 5, ADD, 12]).unwrap();
    assert_eq!(result, Number::Real(14.0));

    let result = calc.execute_expression(&tokens!["FOO", ADD, 1, 2]).unwrap();
    assert_eq!(result, Number::Integer(3));
}

#[test]
fn trailing_operation_applies_to_previous_result() {
    let calc = Calculator::new();

    let result = calc.execute_expression(&tokens![MUL, 2, 3, ADD]).unwrap();
    assert_eq!(result, Number::Integer(6));
}

#[test]
fn sequence_without_operation_is_wrong() {
    let calc = Calculator::new();

    assert_wrong_expression(&calc, &tokens![1, 2, 3], RuntimeError::MissingOperation);
    assert_wrong_expression(&calc, &[], RuntimeError::MissingOperation);
}

#[test]
fn sequence_failures_are_wrapped() {
    let calc = Calculator::new();

    assert_wrong_expression(&calc,
                            &tokens![ADD],
                            RuntimeError::EmptyArguments { name: "ADD".to_string() });
    assert_wrong_expression(&calc,
                            &tokens![ADD, SUB, 3],
                            RuntimeError::EmptyArguments { name: "ADD".to_string() });
    assert_wrong_expression(&calc,
                            &tokens![ADD, 1, "FOO", 2],
                            RuntimeError::ExpectedNumber { token: "FOO".to_string() });
    assert_wrong_expression(&calc, &tokens![ADD, i64::MAX, 1], RuntimeError::Overflow);
}

#[test]
fn wrong_expression_keeps_cause_as_source() {
    let calc = Calculator::new();
    let err = calc.execute_expression(&tokens![7]).unwrap_err();

    assert!(err.is_wrong_expression());
    assert_eq!(err.to_string(), "Your expression is wrong.");

    let source = err.source().expect("cause should be kept");
    assert_eq!(source.to_string(), RuntimeError::MissingOperation.to_string());
}

#[test]
fn custom_reducer_errors_are_wrapped() {
    let mut calc = Calculator::new();
    calc.register_custom_function("FIRST", |args| {
            args.first()
                .copied()
                .ok_or_else(|| RuntimeError::EmptyArguments { name: "FIRST".to_string() })
        })
        .unwrap();

    assert_eq!(calc.execute_expression(&tokens!["FIRST", 9, 8]).unwrap(), Number::Integer(9));
    assert_wrong_expression(&calc,
                            &tokens!["FIRST"],
                            RuntimeError::EmptyArguments { name: "FIRST".to_string() });
}

#[test]
fn calculator_can_be_shared_between_threads() {
    let mut calc = Calculator::new();
    calc.register_custom_function("TEST", sum_of_squares).unwrap();
    let calc = &calc;

    std::thread::scope(|scope| {
        let handles = (1..=4).map(|n| scope.spawn(move || calc.execute_single("TEST", [n, n])))
                             .collect::<Vec<_>>();

        for (n, handle) in (1..=4).zip(handles) {
            assert_eq!(handle.join().unwrap().unwrap(), Number::Integer(2 * n * n));
        }
    });
}
