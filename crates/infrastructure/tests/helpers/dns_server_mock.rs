use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::Record;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

/// What the mock nameserver does with each query.
#[derive(Clone)]
pub enum MockBehavior {
    /// NOERROR with these answer records.
    Answer(Vec<Record>),
    /// Empty reply with this response code.
    Rcode(ResponseCode),
    /// Never reply.
    Silent,
    /// TC over UDP, the full answer over TCP on the same port.
    Truncated(Vec<Record>),
    /// A reply with a foreign ID first, then the real answer.
    WrongIdFirst(Vec<Record>),
    /// Bytes that do not parse as a DNS message.
    Garbage,
}

/// Scripted nameserver on 127.0.0.1 counting the UDP queries it receives.
pub struct MockDnsServer {
    addr: SocketAddr,
    queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(behavior: MockBehavior) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = socket.local_addr()?;
        let queries = Arc::new(AtomicUsize::new(0));

        let tcp = match &behavior {
            MockBehavior::Truncated(_) => Some(TcpListener::bind(addr).await?),
            _ => None,
        };

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();
        let counter = Arc::clone(&queries);

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            counter.fetch_add(1, Ordering::SeqCst);
                            for reply in Self::udp_replies(&behavior, &buf[..len]) {
                                let _ = socket.send_to(&reply, peer).await;
                            }
                        }
                    }
                    Some((mut stream, _)) = accept(&tcp) => {
                        let behavior = behavior.clone();
                        tokio::spawn(async move {
                            let mut len_buf = [0u8; 2];
                            if stream.read_exact(&mut len_buf).await.is_err() {
                                return;
                            }
                            let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                            if stream.read_exact(&mut query).await.is_err() {
                                return;
                            }
                            if let MockBehavior::Truncated(records) = &behavior {
                                let reply = respond(&query, ResponseCode::NoError, records, false);
                                let _ = stream.write_all(&(reply.len() as u16).to_be_bytes()).await;
                                let _ = stream.write_all(&reply).await;
                            }
                        });
                    }
                }
            }
        });

        Ok(Self {
            addr,
            queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    fn udp_replies(behavior: &MockBehavior, query: &[u8]) -> Vec<Vec<u8>> {
        match behavior {
            MockBehavior::Answer(records) => {
                vec![respond(query, ResponseCode::NoError, records, false)]
            }
            MockBehavior::Rcode(rcode) => vec![respond(query, *rcode, &[], false)],
            MockBehavior::Silent => vec![],
            MockBehavior::Truncated(_) => vec![respond(query, ResponseCode::NoError, &[], true)],
            MockBehavior::WrongIdFirst(records) => {
                let mut foreign = respond(query, ResponseCode::NoError, &[], false);
                foreign[0] ^= 0xff;
                vec![
                    foreign,
                    respond(query, ResponseCode::NoError, records, false),
                ]
            }
            MockBehavior::Garbage => {
                let mut junk = query[..2].to_vec();
                junk.extend_from_slice(&[0x81, 0x80, 0xff]);
                vec![junk]
            }
        }
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn accept(listener: &Option<TcpListener>) -> Option<(tokio::net::TcpStream, SocketAddr)> {
    match listener {
        Some(listener) => listener.accept().await.ok(),
        None => std::future::pending().await,
    }
}

/// Builds a reply to `query_bytes` echoing its ID and question.
pub fn respond(query_bytes: &[u8], rcode: ResponseCode, answers: &[Record], truncated: bool) -> Vec<u8> {
    let query = Message::from_vec(query_bytes).unwrap();

    let mut response = Message::new(query.id(), MessageType::Response, OpCode::Query);
    response.set_recursion_desired(query.recursion_desired());
    response.set_recursion_available(true);
    response.set_response_code(rcode);
    response.set_truncated(truncated);
    for q in query.queries() {
        response.add_query(q.clone());
    }
    for record in answers {
        response.add_answer(record.clone());
    }
    response.to_vec().unwrap()
}
