mod captured_fault;
mod fault_payload;

pub use captured_fault::{CapturedFault, FaultLocation, UNKNOWN_FAULT_MESSAGE};
pub use fault_payload::FaultPayload;

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::error::FaultBridgeError;

/// A named fault carrying a reason and optional key-value context.
///
/// Raising a `Fault` unwinds like any other panic, but a bridge that intercepts it keeps the name and the
/// context as a [`FaultPayload`] instead of reducing it to a message.
#[derive(Clone, Debug, PartialEq)]
pub struct Fault {
  name: String,
  reason: String,
  context: BTreeMap<String, Value>,
}

impl Fault {
  pub fn new(name: impl Into<String>, reason: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      reason: reason.into(),
      context: BTreeMap::new(),
    }
  }

  pub fn with_context(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
    self.context.insert(key.into(), value.into());
    self
  }

  /// Merges the fields of `context` into this fault. `context` has to serialize to a JSON object.
  pub fn with_serialized_context<T>(mut self, context: &T) -> Result<Self, FaultBridgeError>
  where
    T: Serialize + ?Sized, {
    match serde_json::to_value(context).map_err(FaultBridgeError::ContextSerialization)? {
      Value::Object(fields) => {
        self.context.extend(fields);
        Ok(self)
      }
      other => Err(FaultBridgeError::ContextNotAnObject(json_kind(&other))),
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn reason(&self) -> &str {
    &self.reason
  }

  pub fn context(&self) -> &BTreeMap<String, Value> {
    &self.context
  }

  /// Raises this fault on the current thread.
  #[track_caller]
  pub fn raise(self) -> ! {
    std::panic::panic_any(self)
  }

  pub(crate) fn into_parts(self) -> (String, FaultPayload) {
    (self.reason, FaultPayload::new(self.name, self.context))
  }
}

/// Raises a context-free [`Fault`].
#[track_caller]
pub fn raise(name: impl Into<String>, reason: impl Into<String>) -> ! {
  Fault::new(name, reason).raise()
}

fn json_kind(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "bool",
    Value::Number(_) => "number",
    Value::String(_) => "string",
    Value::Array(_) => "array",
    Value::Object(_) => "object",
  }
}

static_assertions::assert_impl_all!(Fault: Send, Sync);
