use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

use super::errors::ConfigError;
use crate::RecordType;

pub const DEFAULT_DNS_PORT: u16 = 53;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Nameservers tried in order. `IP`, `IP:port` or `[IPv6]:port`.
    #[serde(default = "default_nameservers")]
    pub nameservers: Vec<String>,

    /// Deadline for one nameserver attempt, UDP and TCP retry included.
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    #[serde(default = "default_supported_record_types")]
    pub supported_record_types: Vec<String>,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            nameservers: default_nameservers(),
            query_timeout_ms: default_query_timeout_ms(),
            supported_record_types: default_supported_record_types(),
        }
    }
}

impl DnsConfig {
    /// Parsed allow-list. Unknown tokens are reported by [`Config::validate`].
    ///
    /// [`Config::validate`]: super::Config::validate
    pub fn record_types(&self) -> Vec<RecordType> {
        self.supported_record_types
            .iter()
            .filter_map(|t| t.parse().ok())
            .collect()
    }

    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        if self.nameservers.is_empty() {
            return Err(ConfigError::Validation(
                "No nameservers configured".to_string(),
            ));
        }

        for ns in &self.nameservers {
            parse_nameserver(ns)?;
        }

        if self.query_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Query timeout cannot be 0".to_string(),
            ));
        }

        if self.supported_record_types.is_empty() {
            return Err(ConfigError::Validation(
                "No supported record types configured".to_string(),
            ));
        }

        for token in &self.supported_record_types {
            token.parse::<RecordType>().map_err(|_| {
                ConfigError::Validation(format!("Unsupported record type '{}'", token))
            })?;
        }

        Ok(())
    }
}

/// Parses a nameserver entry, defaulting to port 53 when none is given.
pub fn parse_nameserver(entry: &str) -> Result<SocketAddr, ConfigError> {
    let entry = entry.trim();

    if let Ok(ip) = entry.parse::<IpAddr>() {
        return Ok(SocketAddr::new(ip, DEFAULT_DNS_PORT));
    }

    entry
        .parse::<SocketAddr>()
        .map_err(|_| ConfigError::Validation(format!("Invalid nameserver address '{}'", entry)))
}

fn default_nameservers() -> Vec<String> {
    vec!["208.67.222.222".to_string(), "208.67.220.220".to_string()]
}

fn default_query_timeout_ms() -> u64 {
    3000
}

fn default_supported_record_types() -> Vec<String> {
    RecordType::ALL
        .iter()
        .map(|rt| rt.as_str().to_string())
        .collect()
}
