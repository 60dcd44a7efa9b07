/// Crate version string, e.g. `0.1.0`.
pub const VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

const VERSION_MAJOR: &str = env!("CARGO_PKG_VERSION_MAJOR");
const VERSION_MINOR: &str = env!("CARGO_PKG_VERSION_MINOR");

/// `major.minor` as a number, e.g. `0.1`.
pub fn version_number() -> f64 {
  format!("{}.{}", VERSION_MAJOR, VERSION_MINOR).parse().unwrap_or(0.0)
}
