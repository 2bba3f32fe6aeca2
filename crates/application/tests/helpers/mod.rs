#![allow(dead_code)]


pub use mock_nameserver_client::*;
