use async_trait::async_trait;
use resolver_api_domain::{DnsAnswer, DnsQuery};

/// Result of one query against one nameserver.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// The nameserver answered with NOERROR. The answer section may be empty.
    Answer(DnsAnswer),
    /// No reply within the per-nameserver deadline.
    Timeout,
    /// The nameserver refused or failed the query (SERVFAIL, REFUSED, ...).
    NoNameservers(String),
    /// NXDOMAIN.
    NameError,
    Unexpected(String),
}

#[async_trait]
pub trait NameserverClient: Send + Sync {
    /// Sends `query` to exactly one `nameserver`.
    ///
    /// Implementations classify every failure into a [`QueryOutcome`] and
    /// enforce the per-nameserver deadline themselves.
    async fn query(&self, nameserver: &str, query: &DnsQuery) -> QueryOutcome;
}
