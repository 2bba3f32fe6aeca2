use super::RecordType;
use std::sync::Arc;

/// Validated DNS query (ASCII name + record type) handed to the resolver.
/// Uses `Arc<str>` so the name can be shared across nameserver attempts without copying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub name: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            record_type,
        }
    }
}
