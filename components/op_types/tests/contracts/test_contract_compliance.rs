//! Contract tests for op_types
//!
//! These tests verify the public API surface other components depend on.

use op_types::{AggregateError, FailureKind, OpError, OpValue, Settlement};

mod op_value_contract {
    use super::*;

    #[test]
    fn op_value_has_expected_variants() {
        let _null = OpValue::Null;
        let _bool = OpValue::Bool(true);
        let _int = OpValue::Int(1);
        let _float = OpValue::Float(1.0);
        let _text = OpValue::Text(String::new());
    }

    #[test]
    fn op_value_is_cloneable_and_comparable() {
        let v = OpValue::Int(9);
        assert_eq!(v.clone(), v);
    }
}

mod op_error_contract {
    use super::*;

    #[test]
    fn op_error_has_kind_and_message_fields() {
        let err = OpError::new(FailureKind::Internal, "x");
        let _kind: &FailureKind = &err.kind;
        let _message: &String = &err.message;
    }

    #[test]
    fn failure_kind_has_expected_variants() {
        let _t = FailureKind::Timeout;
        let _u = FailureKind::Unavailable;
        let _i = FailureKind::Invalid;
        let _n = FailureKind::Internal;
    }
}

mod settlement_contract {
    use super::*;

    #[test]
    fn settlement_constructors_match_predicates() {
        assert!(Settlement::fulfilled(OpValue::Null).is_fulfilled());
        assert!(Settlement::rejected(OpError::internal("x")).is_rejected());
    }

    #[test]
    fn settlement_accessors_return_options() {
        let record = Settlement::fulfilled(OpValue::Int(1));
        let _value: Option<&OpValue> = record.value();
        let _reason: Option<&OpError> = record.reason();
    }
}

mod aggregate_error_contract {
    use super::*;

    #[test]
    fn aggregate_error_has_expected_variants() {
        let _rejected = AggregateError::Rejected(OpError::internal("x"));
        let _all = AggregateError::AllRejected(vec![]);
        let _empty = AggregateError::Empty;
    }
}
