mod nameserver_client;

pub use nameserver_client::{NameserverClient, QueryOutcome};
