//! Tests for bounded-time execution.
//!
//! Timing-based cases use generous margins (a 700ms deadline against 50ms and
//! 1500ms operations) so they stay stable on loaded machines.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use outcomes::outcome::{ErrorType, Fault, Outcome};
use outcomes::timing::{
    run_blocking_with_timeout_async, run_cancellable_outcome_with_timeout,
    run_cancellable_outcome_with_timeout_async, run_cancellable_with_timeout,
    run_cancellable_with_timeout_async, run_outcome_with_timeout,
    run_outcome_with_timeout_async, run_with_timeout, run_with_timeout_async, CancellationSignal,
    TIMEOUT_MESSAGE,
};
use rstest::rstest;

const DEADLINE: Duration = Duration::from_millis(700);

/// Routes runner logs to the test output; set `RUST_LOG=outcomes=debug` to see them.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// =============================================================================
// Blocking Runners
// =============================================================================

#[rstest]
fn fast_operation_succeeds() {
    let outcome = run_with_timeout(
        || {
            thread::sleep(Duration::from_millis(50));
            "finished"
        },
        DEADLINE,
    );
    assert!(outcome.is_success());
    assert_eq!(outcome.into_data(), Some("finished"));
}

#[rstest]
fn slow_operation_times_out() {
    init_tracing();
    let started = Instant::now();
    let outcome = run_with_timeout(
        || {
            thread::sleep(Duration::from_millis(1500));
            "too late"
        },
        DEADLINE,
    );
    assert!(outcome.is_failure());
    assert_eq!(outcome.message(), TIMEOUT_MESSAGE);
    assert_eq!(outcome.error_type(), ErrorType::Failure);
    assert!(started.elapsed() < Duration::from_millis(1400));
}

#[rstest]
fn cancellable_infinite_loop_stops_after_timeout() {
    let stopped = Arc::new(AtomicBool::new(false));
    let iterations = Arc::new(AtomicU64::new(0));
    let (stopped_flag, counter) = (Arc::clone(&stopped), Arc::clone(&iterations));

    let outcome = run_cancellable_with_timeout(
        move |signal: CancellationSignal| {
            while !signal.is_cancellation_requested() {
                counter.fetch_add(1, Ordering::SeqCst);
                thread::sleep(Duration::from_millis(5));
            }
            stopped_flag.store(true, Ordering::SeqCst);
        },
        DEADLINE,
    );
    assert_eq!(outcome.message(), TIMEOUT_MESSAGE);

    let waited = Instant::now();
    while !stopped.load(Ordering::SeqCst) && waited.elapsed() < Duration::from_secs(2) {
        thread::sleep(Duration::from_millis(5));
    }
    assert!(stopped.load(Ordering::SeqCst), "loop should observe cancellation");
    let after_stop = iterations.load(Ordering::SeqCst);
    thread::sleep(Duration::from_millis(50));
    assert_eq!(iterations.load(Ordering::SeqCst), after_stop);
}

#[rstest]
fn immediate_panic_is_exception_with_original_message() {
    init_tracing();
    let outcome: Outcome<i32> = run_with_timeout(|| panic!("config file missing"), DEADLINE);
    assert!(outcome.is_exception());
    assert_eq!(outcome.fault().map(Fault::message), Some("config file missing"));
    assert!(outcome.message().contains("config file missing"));
}

#[rstest]
fn wrapped_fault_is_unwrapped_to_root_cause() {
    let outcome: Outcome<i32> = run_outcome_with_timeout(
        || std::panic::panic_any(Fault::new("connection reset").wrap("fetching rates")),
        DEADLINE,
    );
    assert!(outcome.is_exception());
    assert_eq!(outcome.fault().map(Fault::message), Some("connection reset"));
}

#[rstest]
fn returned_exception_is_not_unwrapped() {
    let outcome: Outcome<i32> = run_cancellable_outcome_with_timeout(
        |_| Outcome::on_exception(Fault::new("connection reset").wrap("fetching rates")),
        DEADLINE,
    );
    assert_eq!(outcome.fault().map(Fault::message), Some("fetching rates"));
}

#[rstest]
fn operation_outcome_is_returned_unchanged() {
    let outcome: Outcome<u8> = run_outcome_with_timeout(Outcome::no_data, DEADLINE);
    assert_eq!(outcome.error_type(), ErrorType::NoData);
}

#[rstest]
fn fault_after_deadline_is_reported_as_timeout() {
    let outcome: Outcome<i32> = run_with_timeout(
        || {
            thread::sleep(Duration::from_millis(300));
            panic!("late failure")
        },
        Duration::from_millis(50),
    );
    assert!(outcome.is_failure());
    assert_eq!(outcome.error_type(), ErrorType::Failure);
    assert_eq!(outcome.message(), TIMEOUT_MESSAGE);
    assert!(outcome.fault().is_none());
}

#[rstest]
fn zero_timeout_reports_timeout_for_slow_operation() {
    let outcome = run_with_timeout(|| thread::sleep(Duration::from_millis(200)), Duration::ZERO);
    assert_eq!(outcome.message(), TIMEOUT_MESSAGE);
}

// =============================================================================
// Async Runners
// =============================================================================

#[rstest]
#[tokio::test]
async fn async_fast_operation_succeeds() {
    let outcome = run_with_timeout_async(
        || async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            42
        },
        DEADLINE,
    )
    .await;
    assert_eq!(outcome.into_data(), Some(42));
}

#[rstest]
#[tokio::test]
async fn async_slow_operation_times_out() {
    let outcome = run_with_timeout_async(
        || async {
            tokio::time::sleep(Duration::from_millis(1500)).await;
            42
        },
        DEADLINE,
    )
    .await;
    assert_eq!(outcome.message(), TIMEOUT_MESSAGE);
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn async_cancellable_loop_stops() {
    let stopped = Arc::new(AtomicBool::new(false));
    let stopped_flag = Arc::clone(&stopped);

    let outcome = run_cancellable_with_timeout_async(
        move |signal| async move {
            loop {
                tokio::select! {
                    () = signal.cancelled() => break,
                    () = tokio::time::sleep(Duration::from_millis(5)) => {}
                }
            }
            stopped_flag.store(true, Ordering::SeqCst);
        },
        DEADLINE,
    )
    .await;
    assert_eq!(outcome.message(), TIMEOUT_MESSAGE);

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(stopped.load(Ordering::SeqCst));
}

#[rstest]
#[tokio::test]
async fn async_panic_is_exception() {
    let outcome: Outcome<()> = run_cancellable_outcome_with_timeout_async(
        |_| async { panic!("handler crashed") },
        DEADLINE,
    )
    .await;
    assert!(outcome.is_exception());
    assert_eq!(outcome.fault().map(Fault::message), Some("handler crashed"));
}

#[rstest]
#[tokio::test]
async fn async_fault_after_deadline_is_reported_as_timeout() {
    let outcome: Outcome<i32> = run_with_timeout_async(
        || async {
            tokio::time::sleep(Duration::from_millis(300)).await;
            panic!("late failure")
        },
        Duration::from_millis(50),
    )
    .await;
    assert!(outcome.is_failure());
    assert_eq!(outcome.message(), TIMEOUT_MESSAGE);
    assert!(outcome.fault().is_none());
}

#[rstest]
#[tokio::test]
async fn async_operation_holding_the_thread_times_out() {
    let outcome = run_with_timeout_async(
        || async {
            thread::sleep(Duration::from_millis(1500));
            42
        },
        DEADLINE,
    )
    .await;
    assert_eq!(outcome.error_type(), ErrorType::Failure);
    assert_eq!(outcome.message(), TIMEOUT_MESSAGE);
}

#[rstest]
#[tokio::test]
async fn async_outcome_is_returned_unchanged() {
    let outcome: Outcome<u8> =
        run_outcome_with_timeout_async(|| async { Outcome::failure("validation failed") }, DEADLINE)
            .await;
    assert_eq!(outcome.message(), "validation failed");
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn blocking_pool_operation_succeeds() {
    let outcome = run_blocking_with_timeout_async(
        |_| {
            thread::sleep(Duration::from_millis(50));
            "from blocking pool"
        },
        DEADLINE,
    )
    .await;
    assert_eq!(outcome.into_data(), Some("from blocking pool"));
}
