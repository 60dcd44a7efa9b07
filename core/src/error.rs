use thiserror::Error;

#[derive(Debug, Error)]
pub enum FaultBridgeError {
  #[error("Fault context could not be serialized: {0}")]
  ContextSerialization(#[source] serde_json::Error),
  #[error("Fault context must serialize to a JSON object, got {0}")]
  ContextNotAnObject(&'static str),
  #[error("Fault payload could not be decoded: {0}")]
  PayloadDecode(#[source] serde_json::Error),
}

static_assertions::assert_impl_all!(FaultBridgeError: Send, Sync);
