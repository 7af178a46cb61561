//! Service configuration with sane defaults and env overrides.

use std::net::{IpAddr, Ipv4Addr};

use crate::error::ConfigError;

#[derive(Debug, Clone)]
pub struct ViewerConfig {
  pub bind_addr: IpAddr,
  pub port: u16,
  /// Upper bound on one annotation call, network included.
  pub analyze_timeout_secs: u64,
  /// Largest accepted upload body.
  pub max_upload_bytes: usize,
}

impl Default for ViewerConfig {
  fn default() -> Self {
    Self {
      bind_addr: IpAddr::V4(Ipv4Addr::LOCALHOST),
      port: 5005,
      analyze_timeout_secs: 60,
      max_upload_bytes: 256 * 1024 * 1024,
    }
  }
}

impl ViewerConfig {
  /// Defaults overridden by `BIND_ADDR`, `PORT`, `ANALYZE_TIMEOUT_SECS`, `MAX_UPLOAD_MB`.
  pub fn from_env() -> Result<Self, ConfigError> {
    let mut cfg = Self::default();
    if let Some(v) = var("BIND_ADDR") {
      cfg.bind_addr = parse(&v, "BIND_ADDR", "an IP address")?;
    }
    if let Some(v) = var("PORT") {
      cfg.port = parse(&v, "PORT", "a valid u16")?;
    }
    if let Some(v) = var("ANALYZE_TIMEOUT_SECS") {
      cfg.analyze_timeout_secs = parse(&v, "ANALYZE_TIMEOUT_SECS", "a number of seconds")?;
    }
    if let Some(v) = var("MAX_UPLOAD_MB") {
      let mb: usize = parse(&v, "MAX_UPLOAD_MB", "a number of megabytes")?;
      cfg.max_upload_bytes = mb.saturating_mul(1024 * 1024);
    }
    Ok(cfg)
  }
}

fn var(name: &str) -> Option<String> {
  std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse<T: std::str::FromStr>(
  value: &str,
  var: &'static str,
  expected: &'static str,
) -> Result<T, ConfigError> {
  value.trim().parse().map_err(|_| ConfigError::Invalid {
    var,
    expected,
    value: value.to_string(),
  })
}
