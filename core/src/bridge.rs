mod capture_window;

use std::panic::{catch_unwind, AssertUnwindSafe};

use once_cell::sync::Lazy;

use crate::fault::CapturedFault;
use crate::Config;
use capture_window::CaptureWindow;

static DEFAULT_BRIDGE: Lazy<FaultBridge> = Lazy::new(FaultBridge::default);

/// Runs operations and hands back the faults they raise instead of unwinding past the caller.
///
/// Only panics raised on the calling thread while the operation runs are intercepted. Work the operation
/// hands to other threads or tasks fails through whatever joins it. Nothing can be intercepted when the
/// binary is built with `panic = "abort"`.
#[derive(Debug, Clone, Default)]
pub struct FaultBridge {
  config: Config,
}

impl FaultBridge {
  pub fn new(config: Config) -> Self {
    Self { config }
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Runs `operation` once on this thread. Returns `None` when it completes, or the fault it raised.
  pub fn run<F>(&self, operation: F) -> Option<CapturedFault>
  where
    F: FnOnce(), {
    self.capture(operation).err()
  }

  /// Runs `operation` once on this thread and returns its value, or the fault it raised.
  ///
  /// State the operation was mutating may be left half-updated when it faults; the bridge does not roll
  /// anything back.
  pub fn capture<T, F>(&self, operation: F) -> Result<T, CapturedFault>
  where
    F: FnOnce() -> T, {
    capture_window::install_hook();
    let window = CaptureWindow::open(&self.config);
    match catch_unwind(AssertUnwindSafe(operation)) {
      Ok(value) => Ok(value),
      Err(payload) => {
        let (location, backtrace) = window.take_site();
        let fault = CapturedFault::from_panic_payload(payload).with_site(location, backtrace);
        if self.config.trace_captured_faults {
          tracing::debug!(
            reason = fault.message(),
            name = ?fault.name(),
            location = ?fault.location(),
            "captured fault"
          );
        }
        Err(fault)
      }
    }
  }
}

/// Runs `operation` with the default bridge and returns the fault it raised, if any.
pub fn run_with_fault_capture<F>(operation: F) -> Option<CapturedFault>
where
  F: FnOnce(), {
  DEFAULT_BRIDGE.run(operation)
}

/// Runs `operation` with the default bridge and returns its value or the fault it raised.
pub fn capture<T, F>(operation: F) -> Result<T, CapturedFault>
where
  F: FnOnce() -> T, {
  DEFAULT_BRIDGE.capture(operation)
}

static_assertions::assert_impl_all!(FaultBridge: Send, Sync);
