use crate::Config;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOption {
  SetSilenceCapturedPanics(bool),
  SetCaptureBacktrace(bool),
  SetTraceCapturedFaults(bool),
}

impl ConfigOption {
  pub fn apply(&self, config: &mut Config) {
    match self {
      ConfigOption::SetSilenceCapturedPanics(silence) => {
        config.silence_captured_panics = *silence;
      }
      ConfigOption::SetCaptureBacktrace(capture) => {
        config.capture_backtrace = *capture;
      }
      ConfigOption::SetTraceCapturedFaults(trace) => {
        config.trace_captured_faults = *trace;
      }
    }
  }

  pub fn with_silence_captured_panics(silence: bool) -> ConfigOption {
    ConfigOption::SetSilenceCapturedPanics(silence)
  }

  pub fn with_capture_backtrace(capture: bool) -> ConfigOption {
    ConfigOption::SetCaptureBacktrace(capture)
  }

  pub fn with_trace_captured_faults(trace: bool) -> ConfigOption {
    ConfigOption::SetTraceCapturedFaults(trace)
  }
}
