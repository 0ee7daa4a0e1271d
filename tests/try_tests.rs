//! Unit tests for `Try<T>` and the `try_catch` capture boundary.

use std::io;

use outcomes::outcome::{
    attempt, try_catch, try_catch_result, ErrorType, Fault, Outcome, Try,
};
use rstest::rstest;

// =============================================================================
// Capture
// =============================================================================

#[rstest]
fn returning_operation_is_value() {
    let captured = try_catch(|| "payload".len(), |fault| fault);
    assert!(captured.is_data());
    assert_eq!(captured.value(), Some(&7));
}

#[rstest]
fn panicking_operation_is_fault() {
    let captured: Try<u32> = attempt(|| panic!("index out of range"));
    assert!(captured.is_exception());
    assert_eq!(captured.fault().map(Fault::message), Some("index out of range"));
    assert_eq!(captured.fault().map(Fault::type_name), Some("panic"));
}

#[rstest]
fn fault_handler_can_wrap() {
    let captured: Try<u32> = try_catch(
        || panic!("disk unplugged"),
        |fault| fault.wrap("saving draft"),
    );
    let fault = captured.fault().cloned().unwrap();
    assert_eq!(fault.message(), "saving draft");
    assert_eq!(fault.root_cause().message(), "disk unplugged");
}

#[rstest]
fn panicking_fault_handler_keeps_original() {
    let captured: Try<u32> = try_catch(|| panic!("original"), |_| panic!("handler"));
    assert_eq!(captured.fault().map(Fault::message), Some("original"));
}

#[rstest]
fn err_result_is_fault_with_error_message() {
    let captured: Try<()> = try_catch_result(
        || Err(io::Error::other("permission denied")),
        |fault| fault,
    );
    assert_eq!(captured.fault().map(Fault::message), Some("permission denied"));
}

#[cfg(feature = "async")]
#[rstest]
#[tokio::test]
async fn async_capture_catches_panic_while_polling() {
    let captured: Try<u8> = outcomes::outcome::try_catch_async(
        async {
            tokio::task::yield_now().await;
            panic!("poll failed")
        },
        |fault| fault,
    )
    .await;
    assert_eq!(captured.fault().map(Fault::message), Some("poll failed"));
}

// =============================================================================
// Conversion to Outcome
// =============================================================================

#[rstest]
fn value_becomes_success_with_exactly_that_value() {
    let outcome = attempt(|| vec![1, 2]).to_outcome();
    assert!(outcome.is_success());
    assert_eq!(outcome.into_data(), Some(vec![1, 2]));
}

#[rstest]
fn fault_becomes_exception_with_fault_message() {
    let outcome: Outcome<i32> = Try::Fault(Fault::new("timeout talking to cache")).into();
    assert!(outcome.is_exception());
    assert!(outcome.message().contains("timeout talking to cache"));
}

#[rstest]
#[case(Some(3), ErrorType::None)]
#[case(None, ErrorType::NoData)]
fn lookup_becomes_data_outcome(#[case] found: Option<i32>, #[case] expected: ErrorType) {
    let outcome = attempt(|| found).to_data_outcome();
    assert_eq!(outcome.error_type(), expected);
}

// =============================================================================
// Combinators
// =============================================================================

#[rstest]
fn map_and_then_skip_fault() {
    let captured: Try<i32> = Try::Fault(Fault::new("bad"));
    let mapped = captured.map(|n| n + 1).and_then(|n| Try::Value(n * 2));
    assert_eq!(mapped.fault().map(Fault::message), Some("bad"));

    let doubled = Try::Value(4).map(|n| n + 1).and_then(|n| Try::Value(n * 2));
    assert_eq!(doubled, Try::Value(10));
}

#[rstest]
fn recover_replaces_fault() {
    let recovered = Try::Fault(Fault::new("missing")).recover(|fault| fault.message().len());
    assert_eq!(recovered, 7);
}

#[rstest]
fn into_result_round_trips() {
    assert_eq!(Try::Value(1).into_result(), Ok(1));
    let fault = Fault::new("nope");
    assert_eq!(Try::<i32>::from(Err(fault.clone())).into_result(), Err(fault));
}
