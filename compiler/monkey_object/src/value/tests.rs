use super::*;
use std::sync::Arc;
use crate::test_helpers::{expr_stmt, function, infix, name};
use monkey_ir::InfixOperator;
use pretty_assertions::assert_eq;

fn adder() -> FunctionLiteral {
    function(
        &["x", "y"],
        vec![expr_stmt(infix(name("x"), InfixOperator::Plus, name("y")))],
    )
}

mod type_tags {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_variant_has_its_tag() {
        let env = Environment::new();
        let cases = [
            (Value::Integer(1), "INTEGER"),
            (Value::TRUE, "BOOLEAN"),
            (Value::NULL, "NULL"),
            (Value::function(&adder(), &env), "FUNCTION"),
            (Value::return_value(Value::Integer(1)), "RETURN_VALUE"),
            (Value::Error("boom".to_string()), "ERROR"),
        ];
        for (value, tag) in cases {
            assert_eq!(value.value_type().as_str(), tag);
            assert_eq!(value.value_type().to_string(), tag);
        }
    }

    #[test]
    fn return_value_tag_differs_from_payload() {
        let wrapped = Value::return_value(Value::Integer(5));
        assert_eq!(wrapped.inspect(), "5");
        assert_ne!(wrapped.value_type(), ValueType::Integer);
        assert_ne!(wrapped, Value::Integer(5));
    }
}

mod inspect {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn scalars() {
        assert_eq!(Value::Integer(-42).inspect(), "-42");
        assert_eq!(Value::TRUE.inspect(), "true");
        assert_eq!(Value::FALSE.inspect(), "false");
        assert_eq!(Value::NULL.inspect(), "null");
    }

    #[test]
    fn error_is_prefixed() {
        let error = Value::Error("unknown operator: -BOOLEAN".to_string());
        assert_eq!(error.inspect(), "ERROR: unknown operator: -BOOLEAN");
    }

    #[test]
    fn function_shows_parameters_and_body() {
        let value = Value::function(&adder(), &Environment::new());
        assert_eq!(value.inspect(), "fn(x, y) {\n(x + y)\n}");
    }

    #[test]
    fn function_without_parameters() {
        let value = Value::function(&function(&[], Vec::new()), &Environment::new());
        assert_eq!(value.inspect(), "fn() {\n\n}");
    }

    #[test]
    fn display_matches_inspect() {
        let value = Value::return_value(Value::FALSE);
        assert_eq!(value.to_string(), value.inspect());
    }
}

mod sentinels {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn return_value_does_not_nest() {
        let once = Value::return_value(Value::Integer(7));
        let twice = Value::return_value(once.clone());
        assert_eq!(twice, once);
        assert_eq!(twice.unwrap_return_value(), Value::Integer(7));
    }

    #[test]
    fn returning_an_error_keeps_the_error() {
        let error = Value::Error("division by zero".to_string());
        let returned = Value::return_value(error.clone());
        assert!(returned.is_error());
        assert_eq!(returned, error);
    }

    #[test]
    fn classification() {
        let returned = Value::return_value(Value::NULL);
        let error = Value::Error(String::new());
        assert!(returned.is_sentinel() && returned.is_return_value() && !returned.is_error());
        assert!(error.is_sentinel() && error.is_error() && !error.is_return_value());
        assert!(!Value::Integer(0).is_sentinel());
        assert!(!Value::NULL.is_sentinel());
    }

    #[test]
    fn unwrap_passes_other_values_through() {
        assert_eq!(Value::Integer(3).unwrap_return_value(), Value::Integer(3));
        let error = Value::Error("x".to_string());
        assert_eq!(error.clone().unwrap_return_value(), error);
    }

    #[test]
    fn unwrap_with_shared_handle_clones_payload() {
        let returned = Value::return_value(Value::Integer(9));
        let alias = returned.clone();
        assert_eq!(returned.unwrap_return_value(), Value::Integer(9));
        assert_eq!(alias.inspect(), "9");
    }
}

mod booleans {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn from_bool_yields_constants() {
        assert_eq!(Value::from_bool(true), Value::TRUE);
        assert_eq!(Value::from_bool(false), Value::FALSE);
        assert_eq!(Value::from(true), Value::TRUE);
        assert_eq!(Value::Boolean(true), Value::TRUE);
    }

    #[test]
    fn truthiness() {
        assert!(!Value::NULL.is_truthy());
        assert!(!Value::FALSE.is_truthy());
        assert!(Value::TRUE.is_truthy());
        assert!(Value::Integer(0).is_truthy());
        assert!(Value::function(&adder(), &Environment::new()).is_truthy());
    }
}

mod functions {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn shares_literal_parts() {
        let literal = adder();
        let env = Environment::new();
        let value = FunctionValue::new(&literal, &env);
        assert!(Arc::ptr_eq(&value.parameters, &literal.parameters));
        assert!(Arc::ptr_eq(&value.body, &literal.body));
        assert!(Environment::ptr_eq(value.env(), &env));
        assert_eq!(value.arity(), 2);
    }

    #[test]
    fn outlives_defining_tree() {
        let env = Environment::new();
        let value = {
            let literal = adder();
            Value::function(&literal, &env)
        };
        assert_eq!(value.inspect(), "fn(x, y) {\n(x + y)\n}");
    }

    #[test]
    fn equality_is_identity() {
        let literal = adder();
        let env = Environment::new();
        let first = Value::function(&literal, &env);
        assert_eq!(first, first.clone());
        assert_eq!(first, Value::function(&literal, &env));
        assert_ne!(first, Value::function(&adder(), &env));
        assert_ne!(first, Value::function(&literal, &Environment::new()));
    }

    #[test]
    fn debug_terminates_for_recursive_closure() {
        let env = Environment::new();
        env.set("f", Value::function(&adder(), &env));
        let rendered = format!("{env:?}");
        assert!(rendered.contains("FunctionValue"));
    }
}

#[test]
fn error_kind_converts_to_error_value() {
    let value = Value::from(EvalErrorKind::DivisionByZero);
    assert_eq!(value, Value::Error("division by zero".to_string()));
    assert_eq!(Value::error(&EvalErrorKind::DivisionByZero), value);
}
