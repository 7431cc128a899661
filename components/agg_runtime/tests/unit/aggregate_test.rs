//! Unit tests for the aggregation policies
//!
//! Operations are driven through the event loop so completion order is
//! controlled by virtual-clock deadlines, independent of index order.

use agg_runtime::{aggregate, source, EmptySetBehavior, EventLoop, Operation};
use op_types::{AggregateError, OpError, OpValue, Settlement};

/// The reference operation set: fulfills A at t=100, rejects B at t=50,
/// fulfills C at t=200.
fn staggered_set(event_loop: &mut EventLoop) -> Vec<Operation> {
    vec![
        source::fulfill_after(event_loop, 100, OpValue::from("A")),
        source::reject_after(event_loop, 50, OpError::unavailable("B")),
        source::fulfill_after(event_loop, 200, OpValue::from("C")),
    ]
}

mod all_fulfilled {
    use super::*;

    #[test]
    fn values_are_index_aligned_despite_arrival_order() {
        let mut event_loop = EventLoop::new();
        // Deadlines are the reverse of index order.
        let ops = vec![
            source::fulfill_after(&mut event_loop, 300, OpValue::from("v0")),
            source::fulfill_after(&mut event_loop, 200, OpValue::from("v1")),
            source::fulfill_after(&mut event_loop, 100, OpValue::from("v2")),
        ];

        let outcome = aggregate::all_fulfilled(&ops);
        event_loop.run_until_idle();

        assert_eq!(
            outcome.get().unwrap(),
            Ok(vec![
                OpValue::from("v0"),
                OpValue::from("v1"),
                OpValue::from("v2"),
            ])
        );
    }

    #[test]
    fn fails_with_first_rejection_by_completion_time() {
        let mut event_loop = EventLoop::new();
        let ops = staggered_set(&mut event_loop);

        let outcome = aggregate::all_fulfilled(&ops);
        event_loop.run_until_idle();

        match outcome.get().unwrap() {
            Err(AggregateError::Rejected(reason)) => assert_eq!(reason.message, "B"),
            other => panic!("expected Rejected, got {:?}", other),
        }
    }

    #[test]
    fn outcome_is_decided_before_outstanding_operations_finish() {
        let mut event_loop = EventLoop::new();
        let ops = staggered_set(&mut event_loop);

        let outcome = aggregate::all_fulfilled(&ops);
        event_loop.advance_to(50);

        // Only the rejection has fired; the outcome is already decided.
        assert!(outcome.is_delivered());
        assert!(!ops[0].is_settled());

        // The remaining operations still settle, and their results are
        // discarded rather than re-deciding the outcome.
        event_loop.run_until_idle();
        assert!(ops[0].is_settled());
        match outcome.get().unwrap() {
            Err(AggregateError::Rejected(reason)) => assert_eq!(reason.message, "B"),
            other => panic!("expected Rejected, got {:?}", other),
        }
    }

    #[test]
    fn empty_set_yields_empty_sequence_immediately() {
        let outcome = aggregate::all_fulfilled(&[]);
        assert_eq!(outcome.get().unwrap(), Ok(vec![]));
    }
}

mod first_settled {
    use super::*;

    #[test]
    fn earliest_settlement_wins_regardless_of_outcome() {
        let mut event_loop = EventLoop::new();
        let ops = staggered_set(&mut event_loop);

        let outcome = aggregate::first_settled(&ops);
        event_loop.run_until_idle();

        match outcome.get().unwrap() {
            Err(AggregateError::Rejected(reason)) => assert_eq!(reason.message, "B"),
            other => panic!("expected the t=50 rejection, got {:?}", other),
        }
    }

    #[test]
    fn earliest_fulfillment_wins_when_it_comes_first() {
        let mut event_loop = EventLoop::new();
        let ops = vec![
            source::fulfill_after(&mut event_loop, 10, OpValue::from("fast")),
            source::reject_after(&mut event_loop, 20, OpError::timeout("slow")),
        ];

        let outcome = aggregate::first_settled(&ops);
        event_loop.run_until_idle();

        assert_eq!(outcome.get().unwrap(), Ok(OpValue::from("fast")));
    }

    #[test]
    fn simultaneous_completion_resolves_to_lowest_index() {
        let mut event_loop = EventLoop::new();
        // Same deadline; the loop fires same-instant timers in scheduling
        // order, which matches index order here.
        let ops = vec![
            source::fulfill_after(&mut event_loop, 100, OpValue::from("index0")),
            source::fulfill_after(&mut event_loop, 100, OpValue::from("index1")),
        ];

        let outcome = aggregate::first_settled(&ops);
        event_loop.run_until_idle();

        assert_eq!(outcome.get().unwrap(), Ok(OpValue::from("index0")));
    }

    #[test]
    fn already_settled_operations_tie_break_to_lowest_index() {
        let ops = vec![
            Operation::rejected(OpError::internal("index0")),
            Operation::fulfilled(OpValue::from("index1")),
        ];

        let outcome = aggregate::first_settled(&ops);

        match outcome.get().unwrap() {
            Err(AggregateError::Rejected(reason)) => assert_eq!(reason.message, "index0"),
            other => panic!("expected index0's rejection, got {:?}", other),
        }
    }

    #[test]
    fn empty_set_never_delivers_by_default() {
        let outcome = aggregate::first_settled(&[]);
        assert!(!outcome.is_delivered());
    }

    #[test]
    fn empty_set_can_be_configured_to_reject() {
        let outcome = aggregate::first_settled_with(&[], EmptySetBehavior::RejectImmediately);
        assert_eq!(outcome.get().unwrap(), Err(AggregateError::Empty));
    }
}

mod first_fulfilled {
    use super::*;

    #[test]
    fn earliest_fulfillment_wins_even_after_earlier_rejection() {
        let mut event_loop = EventLoop::new();
        let ops = staggered_set(&mut event_loop);

        let outcome = aggregate::first_fulfilled(&ops);
        event_loop.run_until_idle();

        assert_eq!(outcome.get().unwrap(), Ok(OpValue::from("A")));
    }

    #[test]
    fn all_rejections_are_collected_index_aligned() {
        let mut event_loop = EventLoop::new();
        // Rejection order (by time) is 1, 2, 0; the report must be 0, 1, 2.
        let ops = vec![
            source::reject_after(&mut event_loop, 300, OpError::timeout("r0")),
            source::reject_after(&mut event_loop, 100, OpError::timeout("r1")),
            source::reject_after(&mut event_loop, 200, OpError::timeout("r2")),
        ];

        let outcome = aggregate::first_fulfilled(&ops);
        event_loop.run_until_idle();

        match outcome.get().unwrap() {
            Err(AggregateError::AllRejected(reasons)) => {
                let messages: Vec<_> = reasons.iter().map(|r| r.message.as_str()).collect();
                assert_eq!(messages, vec!["r0", "r1", "r2"]);
            }
            other => panic!("expected AllRejected, got {:?}", other),
        }
    }

    #[test]
    fn undecided_until_last_rejection_when_nothing_fulfills() {
        let mut event_loop = EventLoop::new();
        let ops = vec![
            source::reject_after(&mut event_loop, 100, OpError::timeout("r0")),
            source::reject_after(&mut event_loop, 200, OpError::timeout("r1")),
        ];

        let outcome = aggregate::first_fulfilled(&ops);
        event_loop.advance_to(100);
        assert!(!outcome.is_delivered());

        event_loop.run_until_idle();
        assert!(outcome.is_delivered());
    }

    #[test]
    fn empty_set_rejects_immediately_by_default() {
        let outcome = aggregate::first_fulfilled(&[]);
        assert_eq!(outcome.get().unwrap(), Err(AggregateError::Empty));
    }

    #[test]
    fn empty_set_can_be_configured_to_never_deliver() {
        let outcome = aggregate::first_fulfilled_with(&[], EmptySetBehavior::NeverDeliver);
        assert!(!outcome.is_delivered());
    }
}

mod all_settled {
    use super::*;

    #[test]
    fn every_record_is_tagged_and_index_aligned() {
        let mut event_loop = EventLoop::new();
        let ops = staggered_set(&mut event_loop);

        let outcome = aggregate::all_settled(&ops);
        event_loop.run_until_idle();

        let records = outcome.get().unwrap();
        assert_eq!(
            records,
            vec![
                Settlement::fulfilled(OpValue::from("A")),
                Settlement::rejected(OpError::unavailable("B")),
                Settlement::fulfilled(OpValue::from("C")),
            ]
        );
    }

    #[test]
    fn never_produces_an_aggregate_failure() {
        let mut event_loop = EventLoop::new();
        let ops = vec![
            source::reject_after(&mut event_loop, 10, OpError::internal("r0")),
            source::reject_after(&mut event_loop, 20, OpError::internal("r1")),
        ];

        let outcome = aggregate::all_settled(&ops);
        event_loop.run_until_idle();

        let records = outcome.get().unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.is_rejected()));
    }

    #[test]
    fn waits_for_the_slowest_operation() {
        let mut event_loop = EventLoop::new();
        let ops = staggered_set(&mut event_loop);

        let outcome = aggregate::all_settled(&ops);
        event_loop.advance_to(100);
        assert!(!outcome.is_delivered());

        event_loop.run_until_idle();
        assert!(outcome.is_delivered());
    }

    #[test]
    fn empty_set_yields_empty_sequence_immediately() {
        let outcome = aggregate::all_settled(&[]);
        assert_eq!(outcome.get().unwrap(), vec![]);
    }
}
