use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::FaultBridgeError;

/// Structured part of a captured fault: the fault's name and the context it was raised with.
#[derive(Clone, Debug, PartialEq)]
pub struct FaultPayload {
  name: String,
  context: BTreeMap<String, Value>,
}

impl FaultPayload {
  pub(crate) fn new(name: String, context: BTreeMap<String, Value>) -> Self {
    Self { name, context }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn context(&self) -> &BTreeMap<String, Value> {
    &self.context
  }

  pub fn get(&self, key: &str) -> Option<&Value> {
    self.context.get(key)
  }

  /// Deserializes the whole context map into `T`.
  pub fn decode<T>(&self) -> Result<T, FaultBridgeError>
  where
    T: DeserializeOwned, {
    let fields = self
      .context
      .iter()
      .map(|(key, value)| (key.clone(), value.clone()))
      .collect::<Map<String, Value>>();
    serde_json::from_value(Value::Object(fields)).map_err(FaultBridgeError::PayloadDecode)
  }
}
