//! Turns panics raised inside a scoped operation into returned fault values.
//!
//! ```
//! use fault_bridge_core_rs::{run_with_fault_capture, Fault};
//!
//! let fault = run_with_fault_capture(|| {
//!   Fault::new("RangeError", "index out of bounds").with_context("index", 7).raise();
//! })
//! .expect("the operation faulted");
//! assert_eq!(fault.message(), "index out of bounds");
//! assert_eq!(fault.payload().and_then(|p| p.get("index")), Some(&serde_json::Value::from(7)));
//! ```

pub mod bridge;
mod config;
mod config_option;
pub mod error;
pub mod fault;
pub mod version;

pub use bridge::{capture, run_with_fault_capture, FaultBridge};
pub use error::FaultBridgeError;
pub use fault::{CapturedFault, Fault, FaultLocation, FaultPayload};
pub use version::{version_number, VERSION_STRING};
pub use {self::config::*, self::config_option::*};
