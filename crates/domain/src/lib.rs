//! Resolver API Domain Layer
pub mod config;
pub mod dns_answer;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod reverse_name;
pub mod validators;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_answer::{DnsAnswer, Question, ResponseFlags};
pub use dns_query::DnsQuery;
pub use dns_record::{LocCoordinate, RecordData, RecordSet, RecordType};
pub use errors::DomainError;
pub use reverse_name::reverse_name;
