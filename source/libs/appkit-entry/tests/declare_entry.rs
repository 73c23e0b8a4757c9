//! CONTEXT: Integration tests for the exported entry symbol produced by `declare_entry!`
//! OWNERS: @runtime
//! TEST_COVERAGE: 3 integration tests
//!
//! TEST_SCENARIOS:
//!   - exported_symbol_returns_unit_status(): status code crosses the C ABI unchanged
//!   - every_call_reaches_the_unit(): repeated loader calls are independent
//!   - any_address_is_passed_through(): parameter value is forwarded, never read

use std::ffi::c_void;
use std::sync::atomic::{AtomicUsize, Ordering};

use appkit_entry::{declare_entry, Application, StartParam, Status};
use proptest::prelude::*;

static CALLS: AtomicUsize = AtomicUsize::new(0);

struct Counting;

impl Application for Counting {
    fn start(&self, param: StartParam<'_>) -> Status {
        let _ = param;
        CALLS.fetch_add(1, Ordering::SeqCst);
        Status::from_code(7)
    }
}

declare_entry!(counting_main, Counting);

struct Echo;

impl Application for Echo {
    fn start(&self, param: StartParam<'_>) -> Status {
        // Low bits of the address make the pass-through observable without a read.
        Status::from_code((param.addr() & 0x7fff) as i32)
    }
}

declare_entry!(echo_main, Echo);

#[test]
fn exported_symbol_returns_unit_status() {
    assert_eq!(counting_main(std::ptr::null_mut()), 7);
}

#[test]
fn every_call_reaches_the_unit() {
    let before = CALLS.load(Ordering::SeqCst);
    for _ in 0..5 {
        assert_eq!(counting_main(std::ptr::null_mut()), 7);
    }
    assert!(CALLS.load(Ordering::SeqCst) >= before + 5);
}

proptest! {
    #[test]
    fn any_address_is_passed_through(addr in any::<usize>()) {
        let status = echo_main(addr as *mut c_void);
        prop_assert_eq!(status, (addr & 0x7fff) as i32);
    }
}
