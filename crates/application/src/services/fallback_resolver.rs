use crate::ports::{NameserverClient, QueryOutcome};
use resolver_api_domain::{DnsAnswer, DnsQuery};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub answer: DnsAnswer,
    /// The nameserver that produced `answer`.
    pub nameserver: String,
    /// Wall time from the start of the first attempt to the answer.
    pub duration: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("no nameservers or name does not exist")]
    NoNameserversOrNxDomain,

    #[error("all nameservers timed out")]
    AllTimedOut,

    #[error("unexpected resolution error: {0}")]
    Unexpected(String),
}

/// Tries the configured nameservers in order until one gives a usable reply.
///
/// Only a timeout moves on to the next nameserver. NXDOMAIN and
/// no-nameservers replies end the lookup immediately.
pub struct NameserverFallbackResolver {
    client: Arc<dyn NameserverClient>,
    nameservers: Arc<[String]>,
}

impl NameserverFallbackResolver {
    pub fn new(client: Arc<dyn NameserverClient>, nameservers: Vec<String>) -> Self {
        Self {
            client,
            nameservers: nameservers.into(),
        }
    }

    pub fn nameservers(&self) -> &[String] {
        &self.nameservers
    }

    pub async fn resolve(&self, query: &DnsQuery) -> Result<Resolution, LookupError> {
        if self.nameservers.is_empty() {
            return Err(LookupError::Unexpected(
                "no nameservers configured".to_string(),
            ));
        }

        let start = Instant::now();
        let last = self.nameservers.len() - 1;

        for (index, nameserver) in self.nameservers.iter().enumerate() {
            debug!(
                nameserver = %nameserver,
                position = index,
                domain = %query.name,
                record_type = %query.record_type,
                "Querying nameserver"
            );

            match self.client.query(nameserver, query).await {
                QueryOutcome::Answer(answer) => {
                    let duration = start.elapsed();
                    debug!(
                        nameserver = %nameserver,
                        rcode = %answer.rcode,
                        answers = answer.answer.len(),
                        duration_ms = duration.as_millis() as u64,
                        "Nameserver answered"
                    );
                    return Ok(Resolution {
                        answer,
                        nameserver: nameserver.clone(),
                        duration,
                    });
                }
                QueryOutcome::NameError => {
                    debug!(nameserver = %nameserver, domain = %query.name, "NXDOMAIN");
                    return Err(LookupError::NoNameserversOrNxDomain);
                }
                QueryOutcome::NoNameservers(reason) => {
                    debug!(nameserver = %nameserver, reason = %reason, "Nameserver unusable");
                    return Err(LookupError::NoNameserversOrNxDomain);
                }
                QueryOutcome::Timeout if index == last => {
                    info!(
                        nameserver = %nameserver,
                        attempts = self.nameservers.len(),
                        domain = %query.name,
                        "All nameservers timed out"
                    );
                    return Err(LookupError::AllTimedOut);
                }
                QueryOutcome::Timeout => {
                    warn!(nameserver = %nameserver, position = index, "Nameserver timed out, failing over");
                }
                QueryOutcome::Unexpected(detail) => {
                    return Err(LookupError::Unexpected(detail));
                }
            }
        }

        Err(LookupError::AllTimedOut)
    }
}
