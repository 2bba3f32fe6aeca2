#![allow(dead_code)]
#![allow(unused_imports)]

mod dns_server_mock;

pub use dns_server_mock::{respond, MockBehavior, MockDnsServer};
pub use records::*;
