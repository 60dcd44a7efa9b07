use std::cell::RefCell;
use std::marker::PhantomData;
use std::panic::{self, PanicHookInfo};
use std::thread;

use backtrace::Backtrace;
use once_cell::sync::OnceCell;

use crate::fault::FaultLocation;
use crate::Config;

#[derive(Debug, Default)]
struct WindowState {
  silence: bool,
  capture_backtrace: bool,
  location: Option<FaultLocation>,
  backtrace: Option<Backtrace>,
}

thread_local! {
  static WINDOWS: RefCell<Vec<WindowState>> = const { RefCell::new(Vec::new()) };
}

static HOOK: OnceCell<()> = OnceCell::new();

/// Wraps whatever panic hook is current with one that reports to open capture windows.
///
/// Panics outside a window, or inside a window that is not silenced, still reach the previous hook. Installing
/// a different hook afterwards replaces this one; bridges keep working, they just stop seeing raise sites.
///
/// std refuses to swap hooks on a thread that is unwinding, so nothing is installed from such a thread; a later
/// call from a healthy thread installs it.
pub(crate) fn install_hook() {
  if thread::panicking() {
    return;
  }
  HOOK.get_or_init(|| {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
      if !observe(info) {
        previous(info);
      }
    }));
    tracing::trace!("fault bridge panic hook installed");
  });
}

// Returns true when the panic belongs to a silenced window.
fn observe(info: &PanicHookInfo<'_>) -> bool {
  WINDOWS
    .try_with(|windows| {
      let mut windows = windows.try_borrow_mut().ok()?;
      let window = windows.last_mut()?;
      window.location = info.location().map(|location| FaultLocation {
        file: location.file().to_string(),
        line: location.line(),
        column: location.column(),
      });
      if window.capture_backtrace {
        window.backtrace = Some(Backtrace::new_unresolved());
      }
      Some(window.silence)
    })
    .ok()
    .flatten()
    .unwrap_or(false)
}

/// Marks the current thread as running a bridged operation until dropped.
pub(crate) struct CaptureWindow {
  _thread_bound: PhantomData<*const ()>,
}

impl CaptureWindow {
  pub(crate) fn open(config: &Config) -> Self {
    WINDOWS.with(|windows| {
      windows.borrow_mut().push(WindowState {
        silence: config.silence_captured_panics,
        capture_backtrace: config.capture_backtrace,
        ..WindowState::default()
      })
    });
    Self {
      _thread_bound: PhantomData,
    }
  }

  /// Takes what the hook recorded about the most recent panic in this window.
  pub(crate) fn take_site(&self) -> (Option<FaultLocation>, Option<Backtrace>) {
    WINDOWS.with(|windows| match windows.borrow_mut().last_mut() {
      Some(window) => (window.location.take(), window.backtrace.take()),
      None => (None, None),
    })
  }
}

impl Drop for CaptureWindow {
  fn drop(&mut self) {
    let _ = WINDOWS.try_with(|windows| {
      if let Ok(mut windows) = windows.try_borrow_mut() {
        windows.pop();
      }
    });
  }
}

#[cfg(test)]
pub(crate) fn open_window_count() -> usize {
  WINDOWS.with(|windows| windows.borrow().len())
}
