use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{0} type is not supported")]
    InvalidRecordType(String),

    #[error("{0} is not a valid domain name")]
    InvalidDomainName(String),

    #[error("{0} is not a valid IP address")]
    InvalidIpAddress(String),

    #[error("No nameservers for {0}")]
    NoNameservers(String),

    #[error("No nameserver found for the provided IP")]
    ReverseNotFound,

    #[error("All nameservers timed out.")]
    AllNameserversTimedOut,

    #[error("Unexpected resolution error: {0}")]
    Unexpected(String),
}

impl DomainError {
    /// Errors raised by input validation, before any nameserver is contacted.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidRecordType(_) | Self::InvalidDomainName(_) | Self::InvalidIpAddress(_)
        )
    }
}
