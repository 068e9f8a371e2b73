use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::view::controls::{BUSY_LABEL, READY_LABEL};
use crate::view::surface::TriggerControl;

/// Holds the trigger control in its busy state for the lifetime of one compile.
///
/// Acquiring disables the trigger and shows the busy label. Dropping the guard
/// releases it exactly once, whether the compile finished, the service
/// panicked or the future was dropped mid-request. With overlapping compiles
/// the trigger is only restored when the last outstanding guard goes away.
pub struct BusyGuard {
    trigger: Arc<dyn TriggerControl>,
    in_flight: Arc<AtomicUsize>,
}

impl BusyGuard {
    pub fn acquire(trigger: Arc<dyn TriggerControl>, in_flight: Arc<AtomicUsize>) -> Self {
        in_flight.fetch_add(1, Ordering::SeqCst);
        trigger.set_enabled(false);
        trigger.set_label(BUSY_LABEL);
        Self { trigger, in_flight }
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        if self.in_flight.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.trigger.set_enabled(true);
            self.trigger.set_label(READY_LABEL);
        }
    }
}
