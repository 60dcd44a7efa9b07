use fault_bridge_core_rs::{Config, ConfigOption, Fault, FaultBridge};
use std::env;
use tracing_subscriber::EnvFilter;

fn parse_index(input: &str, len: usize) -> usize {
  let index: usize = input.parse().unwrap_or_else(|_| panic!("not an index: {}", input));
  if index >= len {
    Fault::new("BoundsError", "index out of bounds")
      .with_context("index", index)
      .with_context("len", len)
      .raise();
  }
  index
}

fn main() {
  let _ = env::set_var("RUST_LOG", "debug");
  let _ = tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .try_init();

  let bridge = FaultBridge::new(Config::from([ConfigOption::with_trace_captured_faults(true)]));
  let items = ["a", "b", "c"];
  for input in ["1", "x", "7"] {
    match bridge.capture(|| items[parse_index(input, items.len())]) {
      Ok(item) => println!("{} -> {}", input, item),
      Err(fault) => match fault.payload() {
        Some(payload) => println!("{} -> {} {:?}", input, fault, payload.context()),
        None => println!("{} -> {}", input, fault),
      },
    }
  }
}
