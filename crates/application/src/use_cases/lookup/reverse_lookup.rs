use crate::services::{LookupError, NameserverFallbackResolver, Resolution};
use resolver_api_domain::validators::validate_ip_address;
use resolver_api_domain::{reverse_name, DnsQuery, DomainError, RecordType};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::error;

/// PTR lookup for an IPv4 or IPv6 address.
pub struct ReverseLookupUseCase {
    resolver: Arc<NameserverFallbackResolver>,
}

impl ReverseLookupUseCase {
    pub fn new(resolver: Arc<NameserverFallbackResolver>) -> Self {
        Self { resolver }
    }

    pub async fn execute(&self, ip: &str) -> Result<Resolution, DomainError> {
        if !validate_ip_address(ip) {
            return Err(DomainError::InvalidIpAddress(ip.to_string()));
        }
        let addr: IpAddr = ip
            .parse()
            .map_err(|_| DomainError::InvalidIpAddress(ip.to_string()))?;

        let query = DnsQuery::new(reverse_name(addr), RecordType::PTR);
        self.resolver.resolve(&query).await.map_err(|e| match e {
            LookupError::NoNameserversOrNxDomain => DomainError::ReverseNotFound,
            LookupError::AllTimedOut => DomainError::AllNameserversTimedOut,
            LookupError::Unexpected(detail) => {
                error!(ip = %ip, error = %detail, "Reverse lookup failed");
                DomainError::Unexpected(detail)
            }
        })
    }
}
