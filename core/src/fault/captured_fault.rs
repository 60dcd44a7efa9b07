use std::any::Any;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::panic::{catch_unwind, AssertUnwindSafe};

use backtrace::Backtrace;

use super::{Fault, FaultPayload};

/// Message used when the raised value is of a type the bridge does not understand.
pub const UNKNOWN_FAULT_MESSAGE: &str = "unknown fault payload";

/// Source position a fault was raised from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FaultLocation {
  pub file: String,
  pub line: u32,
  pub column: u32,
}

impl Display for FaultLocation {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}:{}:{}", self.file, self.line, self.column)
  }
}

/// Snapshot of a fault intercepted by a bridge.
///
/// The message is always present. The payload is only set when the fault was raised as a [`Fault`]; location
/// and backtrace depend on the bridge's hook having seen the raise.
#[derive(Clone, Debug)]
pub struct CapturedFault {
  message: String,
  payload: Option<FaultPayload>,
  location: Option<FaultLocation>,
  backtrace: Option<Backtrace>,
}

impl CapturedFault {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      message: message.into(),
      payload: None,
      location: None,
      backtrace: None,
    }
  }

  pub fn with_payload(message: impl Into<String>, payload: FaultPayload) -> Self {
    Self {
      payload: Some(payload),
      ..Self::new(message)
    }
  }

  /// Converts the value carried by an unwinding panic.
  pub fn from_panic_payload(payload: Box<dyn Any + Send>) -> Self {
    let payload = match payload.downcast::<Fault>() {
      Ok(fault) => {
        let (message, payload) = (*fault).into_parts();
        return Self::with_payload(message, payload);
      }
      Err(other) => other,
    };
    if let Some(s) = payload.downcast_ref::<&str>() {
      Self::new(*s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
      Self::new(s.as_str())
    } else if let Some(error) = payload.downcast_ref::<Box<dyn Error + Send + Sync>>() {
      // Display is foreign code as well.
      let message = match catch_unwind(AssertUnwindSafe(|| error.to_string())) {
        Ok(message) => message,
        Err(nested) => {
          drop_quietly(nested);
          UNKNOWN_FAULT_MESSAGE.to_string()
        }
      };
      drop_quietly(payload);
      Self::new(message)
    } else {
      drop_quietly(payload);
      Self::new(UNKNOWN_FAULT_MESSAGE)
    }
  }

  pub(crate) fn with_site(mut self, location: Option<FaultLocation>, backtrace: Option<Backtrace>) -> Self {
    self.location = location;
    self.backtrace = backtrace;
    self
  }

  pub fn message(&self) -> &str {
    &self.message
  }

  pub fn payload(&self) -> Option<&FaultPayload> {
    self.payload.as_ref()
  }

  pub fn name(&self) -> Option<&str> {
    self.payload.as_ref().map(FaultPayload::name)
  }

  /// Where the fault was raised. `None` when the bridge's panic hook did not see the raise: another hook was
  /// installed after it, or the first bridge call of the process ran on a thread that was already unwinding.
  pub fn location(&self) -> Option<&FaultLocation> {
    self.location.as_ref()
  }

  pub fn backtrace(&self) -> Option<&Backtrace> {
    self.backtrace.as_ref()
  }
}

impl Display for CapturedFault {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self.name() {
      Some(name) => write!(f, "{}: {}", name, self.message),
      None => write!(f, "{}", self.message),
    }
  }
}

impl Error for CapturedFault {}

impl PartialEq for CapturedFault {
  fn eq(&self, other: &Self) -> bool {
    self.message == other.message && self.payload == other.payload && self.location == other.location
  }
}

// Foreign payloads may panic in their destructor; that panic must not escape the bridge.
fn drop_quietly(payload: Box<dyn Any + Send>) {
  if let Err(nested) = catch_unwind(AssertUnwindSafe(move || drop(payload))) {
    std::mem::forget(nested);
  }
}

static_assertions::assert_impl_all!(CapturedFault: Send, Sync);
