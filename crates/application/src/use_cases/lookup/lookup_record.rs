use crate::services::{LookupError, NameserverFallbackResolver, Resolution};
use resolver_api_domain::validators::{
    to_ascii_hostname, validate_hostname, validate_record_type,
};
use resolver_api_domain::{DnsQuery, DomainError, RecordType};
use std::sync::Arc;
use tracing::error;

/// Forward lookup of one record type for one hostname.
pub struct LookupRecordUseCase {
    resolver: Arc<NameserverFallbackResolver>,
    supported: Arc<[RecordType]>,
}

impl LookupRecordUseCase {
    pub fn new(resolver: Arc<NameserverFallbackResolver>, supported: Vec<RecordType>) -> Self {
        Self {
            resolver,
            supported: supported.into(),
        }
    }

    pub async fn execute(&self, rdtype: &str, domain: &str) -> Result<Resolution, DomainError> {
        let rdtype = rdtype.to_uppercase();
        if !validate_record_type(&rdtype, &self.supported) {
            return Err(DomainError::InvalidRecordType(rdtype));
        }
        if !validate_hostname(domain) {
            return Err(DomainError::InvalidDomainName(domain.to_string()));
        }

        let record_type: RecordType = rdtype
            .parse()
            .map_err(|_| DomainError::InvalidRecordType(rdtype.clone()))?;
        let name = to_ascii_hostname(domain)
            .ok_or_else(|| DomainError::InvalidDomainName(domain.to_string()))?;

        let query = DnsQuery::new(name, record_type);
        self.resolver.resolve(&query).await.map_err(|e| match e {
            LookupError::NoNameserversOrNxDomain => DomainError::NoNameservers(domain.to_string()),
            LookupError::AllTimedOut => DomainError::AllNameserversTimedOut,
            LookupError::Unexpected(detail) => {
                error!(domain = %domain, record_type = %record_type, error = %detail, "Lookup failed");
                DomainError::Unexpected(detail)
            }
        })
    }
}
