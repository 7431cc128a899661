//! Host-thread operation source tests
//!
//! Operations settled by host threads feed the same aggregation policies
//! as virtual-clock operations; the aggregator only observes completions.

use agg_runtime::{aggregate, source, Operation};
use op_types::{OpValue, Settlement};
use std::time::Duration;

fn wait_for<F: Fn() -> bool>(condition: F) {
    for _ in 0..400 {
        if condition() {
            return;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    panic!("condition not met within the polling window");
}

#[test]
fn thread_backed_set_aggregates_like_any_other() {
    let ops = vec![
        source::settle_from_thread(
            Duration::from_millis(400),
            Settlement::fulfilled(OpValue::from("slow")),
        ),
        source::settle_from_thread(
            Duration::from_millis(50),
            Settlement::fulfilled(OpValue::from("fast")),
        ),
    ];

    let race = aggregate::first_settled(&ops);
    let settled = aggregate::all_settled(&ops);

    wait_for(|| settled.is_delivered());

    // The faster thread wins the race.
    assert_eq!(race.get().unwrap(), Ok(OpValue::from("fast")));

    // Records stay index-aligned regardless of completion order.
    let records = settled.get().unwrap();
    assert_eq!(records[0].value(), Some(&OpValue::from("slow")));
    assert_eq!(records[1].value(), Some(&OpValue::from("fast")));
}

#[test]
fn mixed_thread_and_presettled_operations() {
    let ops = vec![
        Operation::fulfilled(OpValue::from("ready")),
        source::settle_from_thread(
            Duration::from_millis(10),
            Settlement::fulfilled(OpValue::from("later")),
        ),
    ];

    // The pre-settled operation decides the race during registration.
    let race = aggregate::first_settled(&ops);
    assert_eq!(race.get().unwrap(), Ok(OpValue::from("ready")));

    let all = aggregate::all_fulfilled(&ops);
    wait_for(|| all.is_delivered());
    assert_eq!(
        all.get().unwrap(),
        Ok(vec![OpValue::from("ready"), OpValue::from("later")])
    );
}
