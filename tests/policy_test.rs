use policy_foreach::predicate::predicate;
use policy_foreach::{for_each_policy, Policy};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[test]
fn every_policy_visits_each_element_exactly_once() {
    let seq: Vec<i32> = (0..10_000).collect();
    for policy in Policy::ALL {
        let visits = AtomicUsize::new(0);
        for_each_policy(&seq, policy, |_| {
            visits.fetch_add(1, Ordering::Relaxed);
        });
        assert_eq!(visits.load(Ordering::Relaxed), seq.len());
    }
}

#[test]
fn sequential_policy_keeps_element_order() {
    let seq: Vec<i32> = (0..5_000).collect();
    let seen = Mutex::new(Vec::new());
    for_each_policy(&seq, Policy::Sequential, |&x| seen.lock().unwrap().push(x));
    assert_eq!(seen.into_inner().unwrap(), seq);
}

#[test]
fn predicate_matches_its_closed_form() {
    assert!(!predicate(0));
    assert!(predicate(1));
    assert!(predicate(2));
    assert!(predicate(100));
    assert!(!predicate(-1));
}

#[test]
fn predicate_is_referentially_transparent() {
    for x in -1_000..=1_000 {
        assert_eq!(predicate(x), predicate(x));
    }
}
