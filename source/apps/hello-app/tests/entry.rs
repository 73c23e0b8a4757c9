//! CONTEXT: Integration tests for the hello-app loader entry symbol
//! OWNERS: @runtime
//! TEST_COVERAGE: 5 integration tests
//!
//! TEST_SCENARIOS:
//!   - null_parameter_logs_greeting_and_succeeds(): one error record, status 0
//!   - non_null_parameter_has_no_observable_effect(): same record, pointee untouched
//!   - repeated_calls_are_independent(): N calls give N identical records and N zeros
//!   - console_line_format(): rendered console line for the record
//!   - any_parameter_value_succeeds(): property over arbitrary addresses

use std::ffi::c_void;

use appkit_log::capture::{capture, CapturedRecord};
use appkit_log::Level;
use hello_app::{hello_app_main, TAG};
use proptest::prelude::*;

fn greeting() -> CapturedRecord {
    CapturedRecord {
        level: Level::Error,
        target: TAG.to_owned(),
        message: "Hello, World!".to_owned(),
    }
}

#[test]
fn null_parameter_logs_greeting_and_succeeds() {
    let (status, records) = capture(|| hello_app_main(std::ptr::null_mut()));
    assert_eq!(status, 0);
    assert_eq!(records, vec![greeting()]);
}

#[test]
fn non_null_parameter_has_no_observable_effect() {
    let mut host_state = [0xA5u8; 16];
    let raw = host_state.as_mut_ptr().cast::<c_void>();

    let (status, records) = capture(|| hello_app_main(raw));
    assert_eq!(status, 0);
    assert_eq!(records, vec![greeting()]);
    assert_eq!(host_state, [0xA5u8; 16]);
}

#[test]
fn repeated_calls_are_independent() {
    const CALLS: usize = 8;
    let (statuses, records) =
        capture(|| (0..CALLS).map(|_| hello_app_main(std::ptr::null_mut())).collect::<Vec<_>>());
    assert_eq!(statuses, vec![0; CALLS]);
    assert_eq!(records, vec![greeting(); CALLS]);
}

#[test]
fn console_line_format() {
    let ((), records) = capture(|| {
        hello_app_main(std::ptr::null_mut());
    });
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].to_line(), "[ERROR hello_app] Hello, World!\n");
}

proptest! {
    #[test]
    fn any_parameter_value_succeeds(addr in any::<usize>()) {
        let (status, records) = capture(|| hello_app_main(addr as *mut c_void));
        prop_assert_eq!(status, 0);
        prop_assert_eq!(records, vec![greeting()]);
    }
}
