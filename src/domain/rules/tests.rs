// Unit tests for the range selector

use super::*;
use crate::domain::errors::DomainError;

fn accept(_range: CompletedRange, _cut: CutCounter) -> Result<(), DomainError> {
    Ok(())
}

#[test]
fn test_first_mark_starts_selection() {
    let mut selector = RangeSelector::new();
    assert_eq!(selector.state(), SelectorState::Idle);

    let outcome = selector.mark(25, accept).unwrap();
    assert_eq!(outcome, MarkOutcome::Started { start: 25 });
    assert_eq!(selector.state(), SelectorState::Pending(25));
    assert_eq!(selector.cut_counter().value(), 0);
}

#[test]
fn test_second_mark_completes_range() {
    let mut selector = RangeSelector::new();
    selector.mark(25, accept).unwrap();

    let mut produced = Vec::new();
    let outcome = selector
        .mark(75, |range, cut| {
            produced.push((range, cut));
            Ok::<(), DomainError>(())
        })
        .unwrap();

    let range = CompletedRange::new(25, 75).unwrap();
    assert_eq!(
        outcome,
        MarkOutcome::Completed {
            range,
            cut: CutCounter::default()
        }
    );
    assert_eq!(produced, vec![(range, CutCounter::default())]);
    assert_eq!(selector.state(), SelectorState::Idle);
    assert_eq!(selector.cut_counter().value(), 1);
}

#[test]
fn test_stop_before_start_is_rejected() {
    let mut selector = RangeSelector::new();
    selector.mark(50, accept).unwrap();

    let outcome = selector
        .mark(10, |_, _| -> Result<(), DomainError> {
            panic!("rejected range must not produce output")
        })
        .unwrap();

    assert_eq!(outcome, MarkOutcome::Rejected { start: 50, stop: 10 });
    assert_eq!(selector.state(), SelectorState::Idle);
    assert_eq!(selector.cut_counter().value(), 0);
}

#[test]
fn test_equal_marks_are_rejected() {
    let mut selector = RangeSelector::new();
    selector.mark(42, accept).unwrap();
    let outcome = selector.mark(42, accept).unwrap();

    assert_eq!(outcome, MarkOutcome::Rejected { start: 42, stop: 42 });
    assert_eq!(selector.state(), SelectorState::Idle);
}

#[test]
fn test_rejection_requires_starting_over() {
    let mut selector = RangeSelector::new();
    selector.mark(50, accept).unwrap();
    selector.mark(10, accept).unwrap();

    // The next mark is a fresh start, not a retry of the stop mark
    let outcome = selector.mark(60, accept).unwrap();
    assert_eq!(outcome, MarkOutcome::Started { start: 60 });
}

#[test]
fn test_failed_output_resets_without_counting() {
    let mut selector = RangeSelector::new();
    selector.mark(0, accept).unwrap();

    let result = selector.mark(10, |_, _| {
        Err(DomainError::FsFail("disk full".to_string()))
    });

    assert!(matches!(result, Err(DomainError::FsFail(_))));
    assert_eq!(selector.state(), SelectorState::Idle);
    assert_eq!(selector.cut_counter().value(), 0);
}

#[test]
fn test_counter_strictly_increases() {
    let mut selector = RangeSelector::new();
    let mut seen = Vec::new();

    for (start, stop) in [(0, 10), (30, 20), (5, 6), (100, 100), (7, 90)] {
        selector.mark(start, accept).unwrap();
        selector
            .mark(stop, |_, cut| {
                seen.push(cut.value());
                Ok::<(), DomainError>(())
            })
            .unwrap();
    }

    assert_eq!(seen, vec![0, 1, 2]);
    assert_eq!(selector.cut_counter().value(), 3);
}
