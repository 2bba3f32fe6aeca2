use crate::dns::forwarding::{MessageBuilder, ResponseParser};
use crate::dns::transport::{tcp::TcpTransport, udp::UdpTransport, Transport, TransportError};
use async_trait::async_trait;
use hickory_proto::op::{Message, ResponseCode};
use resolver_api_application::ports::{NameserverClient, QueryOutcome};
use resolver_api_domain::config::parse_nameserver;
use resolver_api_domain::DnsQuery;
use std::net::SocketAddr;
use std::time::{Duration, Instant};
use tracing::debug;

/// [`NameserverClient`] speaking DNS over UDP, with TCP retry on truncation.
///
/// Holds no per-request state; the nameserver is chosen by each call.
pub struct HickoryNameserverClient {
    timeout: Duration,
}

impl HickoryNameserverClient {
    /// `timeout` bounds one whole attempt, TCP retry included.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    async fn exchange(
        &self,
        server: SocketAddr,
        id: u16,
        query_bytes: &[u8],
    ) -> Result<Message, TransportError> {
        let start = Instant::now();

        let udp = Transport::Udp(UdpTransport::new(server));
        let bytes = udp.send(query_bytes, self.timeout).await?;
        let message = ResponseParser::parse(&bytes)?;

        if !message.truncated() {
            return Ok(message);
        }

        debug!(server = %server, "Response truncated (TC bit), retrying via TCP");

        let remaining = self
            .timeout
            .checked_sub(start.elapsed())
            .ok_or(TransportError::Timeout(self.timeout))?;

        let tcp = Transport::Tcp(TcpTransport::new(server));
        let bytes = tcp.send(query_bytes, remaining).await?;
        let message = ResponseParser::parse(&bytes)?;

        if message.id() != id {
            return Err(TransportError::Malformed(format!(
                "{} reply ID {} does not match query ID {}",
                tcp.protocol_name(),
                message.id(),
                id
            )));
        }
        Ok(message)
    }

    fn classify(message: &Message, query: &DnsQuery) -> QueryOutcome {
        match message.response_code() {
            ResponseCode::NoError => QueryOutcome::Answer(ResponseParser::to_answer(message, query)),
            ResponseCode::NXDomain => QueryOutcome::NameError,
            rcode @ (ResponseCode::ServFail
            | ResponseCode::Refused
            | ResponseCode::NotImp
            | ResponseCode::FormErr) => {
                QueryOutcome::NoNameservers(ResponseParser::rcode_to_status(rcode))
            }
            rcode => QueryOutcome::Unexpected(format!(
                "nameserver answered {}",
                ResponseParser::rcode_to_status(rcode)
            )),
        }
    }
}

#[async_trait]
impl NameserverClient for HickoryNameserverClient {
    async fn query(&self, nameserver: &str, query: &DnsQuery) -> QueryOutcome {
        let server = match parse_nameserver(nameserver) {
            Ok(addr) => addr,
            Err(e) => return QueryOutcome::Unexpected(e.to_string()),
        };

        let (id, query_bytes) = match MessageBuilder::build_query(&query.name, &query.record_type)
        {
            Ok(built) => built,
            Err(e) => return QueryOutcome::Unexpected(e.to_string()),
        };

        match self.exchange(server, id, &query_bytes).await {
            Ok(message) => Self::classify(&message, query),
            Err(TransportError::Timeout(elapsed)) => {
                debug!(server = %server, timeout_ms = elapsed.as_millis() as u64, "Query timed out");
                QueryOutcome::Timeout
            }
            Err(e @ TransportError::Io(..)) => QueryOutcome::NoNameservers(e.to_string()),
            Err(e) => QueryOutcome::Unexpected(e.to_string()),
        }
    }
}
