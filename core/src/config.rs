use crate::ConfigOption;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  /// Keeps the panic hook from printing panics raised while a bridged operation runs.
  ///
  /// The hook cannot tell whether a panic will reach the bridge, so this also hides panics the operation
  /// catches and handles itself. Off by default, which leaves every panic visible to the previous hook.
  pub silence_captured_panics: bool,
  pub capture_backtrace: bool,
  /// Emits a `tracing` debug event for every intercepted fault.
  pub trace_captured_faults: bool,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      silence_captured_panics: false,
      capture_backtrace: false,
      trace_captured_faults: false,
    }
  }
}

impl Config {
  pub fn from(options: impl IntoIterator<Item = ConfigOption>) -> Config {
    let mut config = Config::default();
    for option in options {
      option.apply(&mut config);
    }
    config
  }
}
